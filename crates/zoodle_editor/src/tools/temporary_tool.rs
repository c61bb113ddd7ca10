//! Temporary tool: run one tool's gesture under another tool's widgets.

use zoodle_math::Vec2;

use super::{Pick, Tool, ToolResult};
use crate::core::EditorState;

/// Delegates gestures to `substance` while `style` keeps drawing its
/// widgets. Used to orbit from any tool by dragging on empty space.
#[derive(Debug)]
pub struct TemporaryTool {
    style: Box<Tool>,
    substance: Box<Tool>,
    auto_restore: bool,
}

impl TemporaryTool {
    pub fn new(style: Tool, substance: Tool, auto_restore: bool) -> Self {
        Self {
            style: Box::new(style),
            substance: Box::new(substance),
            auto_restore,
        }
    }

    pub fn style(&self) -> &Tool {
        &self.style
    }

    pub fn substance(&self) -> &Tool {
        &self.substance
    }

    pub fn auto_restore(&self) -> bool {
        self.auto_restore
    }

    pub(crate) fn into_style(self) -> Tool {
        self.style.into_style()
    }

    pub(crate) fn start(&mut self, state: &mut EditorState, pick: Pick) -> ToolResult {
        self.substance.start(state, pick)
    }

    pub(crate) fn drag(&mut self, state: &mut EditorState, offset: Vec2) -> ToolResult {
        self.substance.drag(state, offset)
    }

    pub(crate) fn end(&mut self, state: &mut EditorState, offset: Vec2) -> ToolResult {
        let result = self.substance.end(state, offset);
        if self.auto_restore {
            ToolResult::Restore
        } else {
            result
        }
    }
}
