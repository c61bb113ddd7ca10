//! Command pattern implementation for undo/redo support.
//!
//! All scene and selection modifications that should be undoable go
//! through the command system.

mod command;
mod edit_commands;
mod selection_commands;
mod transform_commands;

pub use command::{Command, CommandError, CommandResult};
pub use edit_commands::EditCommand;
pub use selection_commands::SelectCommand;
pub use transform_commands::{RotateCommand, TranslateCommand};
