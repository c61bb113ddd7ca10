//! Undo/Redo history over editor commands.
//!
//! The history only stores commands; running them is the editor's job,
//! since commands need the rest of the editor state. Continuous edits are
//! coalesced before they get here: a drag or a live property edit records
//! a single command when it completes.

use crate::commands::Command;

/// Undo/redo history stack.
pub struct UndoHistory {
    /// Commands that can be undone
    undo_stack: Vec<Command>,
    /// Commands that can be redone
    redo_stack: Vec<Command>,
    /// Maximum history size
    max_size: usize,
}

impl Default for UndoHistory {
    fn default() -> Self {
        Self::new()
    }
}

impl UndoHistory {
    /// Default maximum history size.
    pub const DEFAULT_MAX_SIZE: usize = 100;

    pub fn new() -> Self {
        Self::with_capacity(Self::DEFAULT_MAX_SIZE)
    }

    pub fn with_capacity(max_size: usize) -> Self {
        Self {
            undo_stack: Vec::new(),
            redo_stack: Vec::new(),
            max_size: max_size.max(1),
        }
    }

    /// Check if there are commands to undo.
    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    /// Check if there are commands to redo.
    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    /// Get the description of the next undo command.
    pub fn undo_description(&self) -> Option<&str> {
        self.undo_stack.last().map(|c| c.description())
    }

    /// Get the description of the next redo command.
    pub fn redo_description(&self) -> Option<&str> {
        self.redo_stack.last().map(|c| c.description())
    }

    /// Record a command that has already been executed.
    /// Any new command invalidates the redo stack.
    pub fn push(&mut self, cmd: Command) {
        log::debug!("Recording {}", cmd.description());
        self.undo_stack.push(cmd);
        self.redo_stack.clear();

        // Trim if over limit
        if self.undo_stack.len() > self.max_size {
            let excess = self.undo_stack.len() - self.max_size;
            self.undo_stack.drain(..excess);
        }
    }

    /// Pop a command from the undo stack.
    pub fn pop_undo(&mut self) -> Option<Command> {
        self.undo_stack.pop()
    }

    /// Pop a command from the redo stack.
    pub fn pop_redo(&mut self) -> Option<Command> {
        self.redo_stack.pop()
    }

    /// Push a command to the undo stack (for redo completion).
    pub fn push_to_undo(&mut self, cmd: Command) {
        self.undo_stack.push(cmd);
    }

    /// Push a command to the redo stack (for undo completion).
    pub fn push_to_redo(&mut self, cmd: Command) {
        self.redo_stack.push(cmd);
    }

    /// Get the number of commands in the undo stack.
    pub fn undo_count(&self) -> usize {
        self.undo_stack.len()
    }

    /// Get the number of commands in the redo stack.
    pub fn redo_count(&self) -> usize {
        self.redo_stack.len()
    }
}
