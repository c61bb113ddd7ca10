//! Transform manipulation commands (translate, rotate).

use zoodle_math::Vec3;

use super::{CommandError, CommandResult};
use crate::core::EditorState;
use crate::scene::{Node, NodeId, SceneGraph};

/// Shared body of the delta commands: targets, a delta, and the values
/// each target had before the delta was applied.
#[derive(Clone, Debug)]
struct DeltaEdit {
    targets: Vec<NodeId>,
    delta: Vec3,
    old_values: Vec<Vec3>,
}

impl DeltaEdit {
    fn capture(
        name: &'static str,
        scene: &SceneGraph,
        targets: Vec<NodeId>,
        delta: Vec3,
        read: fn(&Node) -> Vec3,
    ) -> Result<Self, CommandError> {
        let old_values = targets
            .iter()
            .map(|&id| scene.node(id).map(read))
            .collect::<Result<Vec<_>, _>>()?;
        Self::with_old_values(name, targets, delta, old_values)
    }

    fn with_old_values(
        name: &'static str,
        targets: Vec<NodeId>,
        delta: Vec3,
        old_values: Vec<Vec3>,
    ) -> Result<Self, CommandError> {
        if targets.is_empty() || targets.len() != old_values.len() {
            log::error!("{} created without a target", name);
            return Err(CommandError::NoTarget(name));
        }
        Ok(Self { targets, delta, old_values })
    }

    fn apply(&self, state: &mut EditorState, write: fn(&mut Node) -> &mut Vec3, forward: bool) -> CommandResult {
        for (&id, &old) in self.targets.iter().zip(&self.old_values) {
            let node = state.scene.node_mut(id)?;
            *write(node) = if forward { old + self.delta } else { old };
        }
        Ok(())
    }
}

/// Move nodes by a delta in their parents' space.
#[derive(Clone, Debug)]
pub struct TranslateCommand(DeltaEdit);

impl TranslateCommand {
    const NAME: &'static str = "TranslateCommand";

    /// Capture the current translations of `targets` as the undo state.
    pub fn new(scene: &SceneGraph, targets: Vec<NodeId>, delta: Vec3) -> Result<Self, CommandError> {
        DeltaEdit::capture(Self::NAME, scene, targets, delta, |n| n.transform.translate).map(Self)
    }

    /// Use translations captured earlier, e.g. at the start of a drag.
    pub fn with_old_values(targets: Vec<NodeId>, delta: Vec3, old_values: Vec<Vec3>) -> Result<Self, CommandError> {
        DeltaEdit::with_old_values(Self::NAME, targets, delta, old_values).map(Self)
    }

    pub fn targets(&self) -> &[NodeId] {
        &self.0.targets
    }

    pub fn delta(&self) -> Vec3 {
        self.0.delta
    }

    pub(crate) fn execute(&mut self, state: &mut EditorState) -> CommandResult {
        self.0.apply(state, |n| &mut n.transform.translate, true)
    }

    pub(crate) fn undo(&mut self, state: &mut EditorState) -> CommandResult {
        self.0.apply(state, |n| &mut n.transform.translate, false)
    }
}

/// Rotate nodes by a delta of Euler angles.
#[derive(Clone, Debug)]
pub struct RotateCommand(DeltaEdit);

impl RotateCommand {
    const NAME: &'static str = "RotateCommand";

    /// Capture the current rotations of `targets` as the undo state.
    pub fn new(scene: &SceneGraph, targets: Vec<NodeId>, delta: Vec3) -> Result<Self, CommandError> {
        DeltaEdit::capture(Self::NAME, scene, targets, delta, |n| n.transform.rotate).map(Self)
    }

    /// Use rotations captured earlier, e.g. at the start of a drag.
    pub fn with_old_values(targets: Vec<NodeId>, delta: Vec3, old_values: Vec<Vec3>) -> Result<Self, CommandError> {
        DeltaEdit::with_old_values(Self::NAME, targets, delta, old_values).map(Self)
    }

    pub fn targets(&self) -> &[NodeId] {
        &self.0.targets
    }

    pub fn delta(&self) -> Vec3 {
        self.0.delta
    }

    pub(crate) fn execute(&mut self, state: &mut EditorState) -> CommandResult {
        self.0.apply(state, |n| &mut n.transform.rotate, true)
    }

    pub(crate) fn undo(&mut self, state: &mut EditorState) -> CommandResult {
        self.0.apply(state, |n| &mut n.transform.rotate, false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::Layer;

    #[test]
    fn test_empty_targets_rejected() {
        let scene = SceneGraph::new();
        let err = TranslateCommand::new(&scene, Vec::new(), Vec3::X).unwrap_err();
        assert_eq!(err, CommandError::NoTarget("TranslateCommand"));

        let err = RotateCommand::with_old_values(Vec::new(), Vec3::X, Vec::new()).unwrap_err();
        assert_eq!(err, CommandError::NoTarget("RotateCommand"));
    }

    #[test]
    fn test_stale_target_rejected() {
        let mut scene = SceneGraph::new();
        let root = scene.create_root(Layer::Scene);
        let node = scene.add(root, Node::shape()).unwrap();
        scene.remove_subtree(node);
        let err = TranslateCommand::new(&scene, vec![node], Vec3::X).unwrap_err();
        assert_eq!(err, CommandError::NodeNotFound(node));
    }

    #[test]
    fn test_capture_snapshots_current_values() {
        let mut scene = SceneGraph::new();
        let root = scene.create_root(Layer::Scene);
        let a = scene.add(root, Node::shape().with_rotate(Vec3::new(0.0, 1.0, 0.0))).unwrap();
        let cmd = RotateCommand::new(&scene, vec![a], Vec3::new(0.5, 0.0, 0.0)).unwrap();
        assert_eq!(cmd.targets(), &[a]);
        assert_eq!(cmd.0.old_values, vec![Vec3::new(0.0, 1.0, 0.0)]);
    }
}
