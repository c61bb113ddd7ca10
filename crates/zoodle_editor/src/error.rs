//! Editor session errors.

use thiserror::Error;

use crate::commands::CommandError;
use crate::core::ConfigError;
use crate::scene::Property;
use crate::viewport::SurfaceId;

/// Errors reported by the editor session.
#[derive(Debug, Error)]
pub enum EditorError {
    /// Input from a surface that is not bound to a layer
    #[error("unsupported surface {0}")]
    UnsupportedSurface(SurfaceId),
    /// Live edit over a property whose value differs across the selection
    #[error("'{0}' has mixed values across the selection")]
    MixedValue(Property),
    #[error("nothing is selected")]
    NoSelection,
    /// Operation not allowed while a pointer gesture is in progress
    #[error("a gesture is in progress")]
    GestureActive,
    #[error(transparent)]
    Command(#[from] CommandError),
    #[error(transparent)]
    Config(#[from] ConfigError),
}

pub type EditorResult<T> = Result<T, EditorError>;
