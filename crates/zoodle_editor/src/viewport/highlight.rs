//! Selection outlines drawn in the highlight layer.

use crate::commands::CommandError;
use crate::core::SelectionManager;
use crate::scene::{resolve, Color, NodeId, SceneGraph};
use crate::viewport::Layers;

/// Rebuild the highlight layer from the selection.
///
/// Every selected subtree is deep-cloned into the highlight layer, placed
/// at the node's world transform and painted `color` front and back.
/// Returns the clone roots in selection order.
pub fn update_highlights(
    graph: &mut SceneGraph,
    layers: &Layers,
    selection: &SelectionManager,
    color: Color,
) -> Result<Vec<NodeId>, CommandError> {
    let root = layers.highlight.root;
    graph.clear_children(root);

    let mut clones = Vec::with_capacity(selection.count());
    for &target in selection.selected() {
        let Some(world) = resolve(graph, target) else {
            log::warn!("Selected {} no longer exists", target);
            continue;
        };

        let clone = graph.clone_subtree(target, root)?;
        {
            let node = graph.node_mut(clone)?;
            node.transform = world;
            node.stands_for = Some(target);
        }
        for id in graph.flatten(clone) {
            let node = graph.node_mut(id)?;
            node.color = Some(color);
            node.backface = Some(color);
        }
        clones.push(clone);
    }
    Ok(clones)
}
