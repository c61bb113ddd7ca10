//! Hierarchy model - scene tree for the outliner.

use crate::core::SelectionManager;
use crate::scene::{Color, NodeId, SceneGraph};

/// Color shown for nodes without one.
pub const DEFAULT_ITEM_COLOR: Color = Color::rgb(0x33, 0x33, 0x33);

/// A row of the outliner and its nested rows.
#[derive(Clone, Debug, PartialEq)]
pub struct OutlineItem {
    pub node: NodeId,
    pub label: String,
    pub type_name: &'static str,
    pub color: Color,
    pub selected: bool,
    pub children: Vec<OutlineItem>,
}

impl OutlineItem {
    /// Number of rows in this subtree, itself included.
    pub fn row_count(&self) -> usize {
        1 + self.children.iter().map(OutlineItem::row_count).sum::<usize>()
    }
}

/// Build the outline below `root`.
///
/// Composite children are parts of their parent primitive and are left
/// out together with their subtrees. Returns `None` if `root` itself is
/// missing or composite.
pub fn build_outline(scene: &SceneGraph, root: NodeId, selection: &SelectionManager) -> Option<OutlineItem> {
    let node = scene.get(root)?;
    if node.composite_child {
        return None;
    }

    let children = node
        .children()
        .iter()
        .filter_map(|&child| build_outline(scene, child, selection))
        .collect();

    Some(OutlineItem {
        node: root,
        label: node.label().to_string(),
        type_name: node.kind.type_name(),
        color: node.color.unwrap_or(DEFAULT_ITEM_COLOR),
        selected: selection.is_selected(root),
        children,
    })
}
