//! Generic property edits.

use super::{CommandError, CommandResult};
use crate::core::EditorState;
use crate::scene::{NodeId, Property, PropertyValue, SceneGraph};

/// Set one property on a list of nodes.
///
/// Every mutation asks the node to rebuild its path, since most
/// properties feed into the rendered geometry.
#[derive(Clone, Debug)]
pub struct EditCommand {
    targets: Vec<NodeId>,
    property: Property,
    value: PropertyValue,
    old_values: Vec<PropertyValue>,
}

impl EditCommand {
    /// Create an edit. With `old_values` of `None` the current values of
    /// the targets are captured.
    pub fn new(
        scene: &SceneGraph,
        targets: Vec<NodeId>,
        property: Property,
        value: PropertyValue,
        old_values: Option<Vec<PropertyValue>>,
    ) -> Result<Self, CommandError> {
        if targets.is_empty() {
            log::error!("EditCommand for '{}' created without a target", property);
            return Err(CommandError::NoTarget("EditCommand"));
        }

        let old_values = match old_values {
            Some(values) if values.len() == targets.len() => values,
            Some(_) => {
                log::error!("EditCommand for '{}' got mismatched prior values", property);
                return Err(CommandError::NoTarget("EditCommand"));
            }
            None => Self::capture(scene, &targets, property)?,
        };

        Ok(Self {
            targets,
            property,
            value,
            old_values,
        })
    }

    /// Read `property` from every target.
    pub fn capture(
        scene: &SceneGraph,
        targets: &[NodeId],
        property: Property,
    ) -> Result<Vec<PropertyValue>, CommandError> {
        targets
            .iter()
            .map(|&id| {
                let node = scene.node(id)?;
                node.get_property(property).ok_or(CommandError::UnsupportedProperty {
                    property,
                    kind: node.kind.type_name(),
                })
            })
            .collect()
    }

    pub fn description(&self) -> &'static str {
        match self.property {
            Property::Translate | Property::Rotate | Property::Scale => "Edit Transform",
            Property::Color | Property::Backface => "Edit Color",
            _ => "Edit Property",
        }
    }

    pub fn targets(&self) -> &[NodeId] {
        &self.targets
    }

    pub fn property(&self) -> Property {
        self.property
    }

    pub fn value(&self) -> PropertyValue {
        self.value
    }

    /// Retarget the new value, keeping the captured prior values.
    pub(crate) fn set_value(&mut self, value: PropertyValue) {
        self.value = value;
    }

    pub(crate) fn execute(&mut self, state: &mut EditorState) -> CommandResult {
        for &id in &self.targets {
            let node = state.scene.node_mut(id)?;
            node.set_property(self.property, self.value)?;
            node.update_path();
        }
        Ok(())
    }

    pub(crate) fn undo(&mut self, state: &mut EditorState) -> CommandResult {
        for (&id, &old) in self.targets.iter().zip(&self.old_values) {
            let node = state.scene.node_mut(id)?;
            node.set_property(self.property, old)?;
            node.update_path();
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::{Layer, Node, ShapeKind};

    #[test]
    fn test_no_target_is_an_error() {
        let scene = SceneGraph::new();
        let err = EditCommand::new(&scene, Vec::new(), Property::Fill, PropertyValue::Bool(true), None).unwrap_err();
        assert_eq!(err, CommandError::NoTarget("EditCommand"));
    }

    #[test]
    fn test_capture_rejects_unsupported_property() {
        let mut scene = SceneGraph::new();
        let root = scene.create_root(Layer::Scene);
        let anchor = scene.add(root, Node::anchor()).unwrap();
        let err = EditCommand::new(&scene, vec![anchor], Property::Stroke, PropertyValue::Number(2.0), None)
            .unwrap_err();
        assert!(matches!(err, CommandError::UnsupportedProperty { property: Property::Stroke, .. }));
    }

    #[test]
    fn test_capture_reads_each_target() {
        let mut scene = SceneGraph::new();
        let root = scene.create_root(Layer::Scene);
        let a = scene.add(root, Node::new(ShapeKind::Ellipse).with_diameter(2.0)).unwrap();
        let b = scene.add(root, Node::new(ShapeKind::Cone).with_diameter(4.0)).unwrap();
        let cmd = EditCommand::new(&scene, vec![a, b], Property::Diameter, PropertyValue::Number(3.0), None).unwrap();
        assert_eq!(
            cmd.old_values,
            vec![PropertyValue::Number(2.0), PropertyValue::Number(4.0)]
        );
        assert_eq!(cmd.description(), "Edit Property");
    }
}
