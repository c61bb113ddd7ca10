//! Command type and result types.

use thiserror::Error;

use super::{EditCommand, RotateCommand, SelectCommand, TranslateCommand};
use crate::core::EditorState;
use crate::scene::{NodeId, Property, PropertyValue};

/// Result type for command execution.
pub type CommandResult = Result<(), CommandError>;

/// Errors that can occur during command construction or execution.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum CommandError {
    /// Command built without any node to act on
    #[error("{0} has no target")]
    NoTarget(&'static str),
    /// Stale or foreign node id
    #[error("node not found: {0}")]
    NodeNotFound(NodeId),
    /// The node kind does not expose this property
    #[error("{kind} has no '{property}' property")]
    UnsupportedProperty { property: Property, kind: &'static str },
    /// Value of the wrong type for the property
    #[error("cannot set '{property}' to {value:?}")]
    TypeMismatch { property: Property, value: PropertyValue },
}

/// A reversible change to the editor state.
///
/// Commands carry the prior state they need, so `execute` and `undo` write
/// absolute values and can be replayed any number of times.
#[derive(Clone, Debug)]
pub enum Command {
    Select(SelectCommand),
    Translate(TranslateCommand),
    Rotate(RotateCommand),
    Edit(EditCommand),
}

impl Command {
    /// Human-readable description for the undo/redo menu.
    pub fn description(&self) -> &'static str {
        match self {
            Command::Select(_) => "Select",
            Command::Translate(_) => "Translate",
            Command::Rotate(_) => "Rotate",
            Command::Edit(cmd) => cmd.description(),
        }
    }

    /// Apply the command.
    pub fn execute(&mut self, state: &mut EditorState) -> CommandResult {
        match self {
            Command::Select(cmd) => cmd.execute(state),
            Command::Translate(cmd) => cmd.execute(state),
            Command::Rotate(cmd) => cmd.execute(state),
            Command::Edit(cmd) => cmd.execute(state),
        }
    }

    /// Restore the state from before `execute`.
    pub fn undo(&mut self, state: &mut EditorState) -> CommandResult {
        match self {
            Command::Select(cmd) => cmd.undo(state),
            Command::Translate(cmd) => cmd.undo(state),
            Command::Rotate(cmd) => cmd.undo(state),
            Command::Edit(cmd) => cmd.undo(state),
        }
    }
}

impl From<SelectCommand> for Command {
    fn from(cmd: SelectCommand) -> Self {
        Command::Select(cmd)
    }
}

impl From<TranslateCommand> for Command {
    fn from(cmd: TranslateCommand) -> Self {
        Command::Translate(cmd)
    }
}

impl From<RotateCommand> for Command {
    fn from(cmd: RotateCommand) -> Self {
        Command::Rotate(cmd)
    }
}

impl From<EditCommand> for Command {
    fn from(cmd: EditCommand) -> Self {
        Command::Edit(cmd)
    }
}
