//! Editor tools for pointer interaction.
//!
//! Tools turn press/drag/release gestures into camera moves or
//! constrained transform edits, and decide which widgets the gizmo layer
//! shows.

mod orbit_tool;
mod temporary_tool;
mod tool;
mod transform_tools;

pub use orbit_tool::OrbitTool;
pub use temporary_tool::TemporaryTool;
pub use tool::{Pick, PointerEvent, PointerEventKind, Tool, ToolKind, ToolResult};
pub use transform_tools::{RotateTool, TranslateTool};
