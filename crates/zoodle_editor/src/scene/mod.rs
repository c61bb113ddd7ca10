//! Scene graph storage shared by all render layers.

mod graph;
mod node;
mod world_transform;

pub use graph::SceneGraph;
pub use node::{Color, GizmoRole, Layer, Node, NodeId, Property, PropertyValue, ShapeKind};
pub use world_transform::{decompose_basis, resolve, GIMBAL_LOCK_THRESHOLD};
