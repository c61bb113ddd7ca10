//! Arena-backed scene graph.

use zoodle_math::{Vec2, Vec3};

use super::{Layer, Node, NodeId};
use crate::commands::CommandError;

struct Slot {
    generation: u32,
    node: Option<Node>,
}

/// Node storage for all render layers.
///
/// Nodes reference each other through [`NodeId`] handles. Freed slots are
/// recycled with a bumped generation.
#[derive(Default)]
pub struct SceneGraph {
    slots: Vec<Slot>,
    free: Vec<u32>,
}

impl SceneGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of live nodes.
    pub fn len(&self) -> usize {
        self.slots.len() - self.free.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn contains(&self, id: NodeId) -> bool {
        self.get(id).is_some()
    }

    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.slots
            .get(id.index as usize)
            .filter(|slot| slot.generation == id.generation)
            .and_then(|slot| slot.node.as_ref())
    }

    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        self.slots
            .get_mut(id.index as usize)
            .filter(|slot| slot.generation == id.generation)
            .and_then(|slot| slot.node.as_mut())
    }

    /// Fetch a node or report it missing.
    pub fn node(&self, id: NodeId) -> Result<&Node, CommandError> {
        self.get(id).ok_or(CommandError::NodeNotFound(id))
    }

    pub fn node_mut(&mut self, id: NodeId) -> Result<&mut Node, CommandError> {
        self.get_mut(id).ok_or(CommandError::NodeNotFound(id))
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.get(id).and_then(|n| n.parent)
    }

    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self.get(id).map(|n| n.children.as_slice()).unwrap_or(&[])
    }

    /// A live node without a parent.
    pub fn is_root(&self, id: NodeId) -> bool {
        self.get(id).is_some_and(|n| n.parent.is_none())
    }

    /// Walk up to the root of the tree containing `id`.
    pub fn root_of(&self, id: NodeId) -> Option<NodeId> {
        let mut current = id;
        self.get(current)?;
        while let Some(parent) = self.parent(current) {
            current = parent;
        }
        Some(current)
    }

    fn insert(&mut self, node: Node) -> NodeId {
        if let Some(index) = self.free.pop() {
            let slot = &mut self.slots[index as usize];
            slot.node = Some(node);
            NodeId { index, generation: slot.generation }
        } else {
            let index = self.slots.len() as u32;
            self.slots.push(Slot { generation: 0, node: Some(node) });
            NodeId { index, generation: 0 }
        }
    }

    /// Create a parentless root for a layer.
    pub fn create_root(&mut self, layer: Layer) -> NodeId {
        let mut root = Node::anchor();
        root.layer = layer;
        self.insert(root)
    }

    /// Attach a new node under `parent`. The node joins the parent's layer.
    pub fn add(&mut self, parent: NodeId, mut node: Node) -> Result<NodeId, CommandError> {
        let layer = self.node(parent)?.layer;
        node.parent = Some(parent);
        node.children.clear();
        node.layer = layer;
        let id = self.insert(node);
        self.node_mut(parent)?.children.push(id);
        Ok(id)
    }

    /// Ids of `id` and all its descendants, parents before children.
    pub fn flatten(&self, id: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        let mut stack = vec![id];
        while let Some(current) = stack.pop() {
            let Some(node) = self.get(current) else { continue };
            out.push(current);
            stack.extend(node.children.iter().rev().copied());
        }
        out
    }

    /// Deep-copy the subtree at `source` under `new_parent`.
    pub fn clone_subtree(&mut self, source: NodeId, new_parent: NodeId) -> Result<NodeId, CommandError> {
        let copy = self.node(source)?.clone();
        let children = copy.children.clone();
        let id = self.add(new_parent, copy)?;
        for child in children {
            self.clone_subtree(child, id)?;
        }
        Ok(id)
    }

    /// Delete a subtree and detach it from its parent.
    pub fn remove_subtree(&mut self, id: NodeId) {
        if let Some(parent) = self.parent(id) {
            if let Some(p) = self.get_mut(parent) {
                p.children.retain(|&c| c != id);
            }
        }
        for node_id in self.flatten(id) {
            let slot = &mut self.slots[node_id.index as usize];
            slot.node = None;
            slot.generation = slot.generation.wrapping_add(1);
            self.free.push(node_id.index);
        }
    }

    /// Remove every child subtree of `id`, keeping `id` itself.
    pub fn clear_children(&mut self, id: NodeId) {
        let children = self.children(id).to_vec();
        for child in children {
            self.remove_subtree(child);
        }
    }

    /// Screen-space direction of the node's local forward axis.
    ///
    /// Origin and front points are carried through the node and every
    /// ancestor, root included, so the camera rotation applies. The result
    /// is `origin - front` projected onto x/y.
    pub fn render_normal(&self, id: NodeId) -> Option<Vec2> {
        let mut origin = Vec3::ZERO;
        let mut front = Vec3::Z;
        let mut current = Some(id);
        self.get(id)?;
        while let Some(node_id) = current {
            let node = self.get(node_id)?;
            origin = node.transform.apply(origin);
            front = node.transform.apply(front);
            current = node.parent;
        }
        Some((origin - front).truncate())
    }
}
