//! Render layers and the overlays drawn over the scene.

mod highlight;
mod layers;

pub use highlight::update_highlights;
pub use layers::{Illustration, Layers, RenderHost, SurfaceId, Viewport};

pub mod gizmos;
