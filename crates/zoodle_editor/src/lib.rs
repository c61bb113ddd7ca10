//! Zoodle Editor
//!
//! Transform and command engine for a pseudo-3D vector illustration
//! editor.
//!
//! ## Features
//!
//! - **Scene Graph**: Arena of shape nodes shared by the scene, highlight
//!   and gizmo layers
//! - **World Transforms**: Absolute transform of any node, with gimbal lock
//!   handling when decomposing rotation
//! - **Selection**: Ordered multi-select with composite-child normalization
//! - **Undo/Redo**: Bounded command history; drags and live panel edits
//!   coalesce into one command
//! - **Tools**: Orbit, axis-constrained Translate and Rotate, and temporary
//!   tools that restore themselves after a gesture
//! - **Overlays**: Selection highlights and per-tool gizmo widgets
//!
//! ## Architecture
//!
//! ```text
//! Pointer Event → Tool → Command → EditorState → Overlays → RenderHost
//! ```
//!
//! Every undoable modification goes through the command system.

pub mod commands;
pub mod core;
pub mod editor;
pub mod error;
pub mod panels;
pub mod scene;
pub mod tools;
pub mod viewport;

// Re-export commonly used types
pub use core::{
    ConfigError,
    EditorPreferences,
    EditorState,
    GizmoPreferences,
    SelectionManager,
    SelectionMode,
    UndoHistory,
};

pub use commands::{
    Command,
    CommandError,
    CommandResult,
    EditCommand,
    RotateCommand,
    SelectCommand,
    TranslateCommand,
};

pub use editor::Editor;
pub use error::{EditorError, EditorResult};

pub use panels::{OutlineItem, PropertyReading, SelectionHeader};

pub use scene::{
    resolve,
    Color,
    GizmoRole,
    Layer,
    Node,
    NodeId,
    Property,
    PropertyValue,
    SceneGraph,
    ShapeKind,
};

pub use tools::{
    Pick,
    PointerEvent,
    PointerEventKind,
    Tool,
    ToolKind,
    ToolResult,
};

pub use viewport::{Illustration, Layers, RenderHost, SurfaceId};
