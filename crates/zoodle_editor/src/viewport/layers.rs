//! Render layers and their drawing surfaces.
//!
//! The editor draws three stacked illustrations: the scene, the selection
//! highlights and the axis widgets. The overlays mirror the scene's camera
//! so their contents line up with what they annotate.

use std::fmt;

use crate::error::EditorError;
use crate::scene::{Layer, NodeId, SceneGraph};
use zoodle_math::Vec3;

/// Host drawing surface an input event originated from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SurfaceId(pub u32);

impl SurfaceId {
    pub const SCENE: SurfaceId = SurfaceId(1);
    pub const HIGHLIGHT: SurfaceId = SurfaceId(2);
    pub const GIZMO: SurfaceId = SurfaceId(3);
}

impl fmt::Display for SurfaceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Surface({})", self.0)
    }
}

/// One layer's root and camera parameters.
#[derive(Clone, Copy, Debug)]
pub struct Illustration {
    /// Root node; its transform is the camera
    pub root: NodeId,
    pub surface: SurfaceId,
    pub zoom: f32,
}

/// Pixel size of the drawing surfaces.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    /// Shorter side, the reference length for drag sensitivities.
    pub fn display_size(&self) -> f32 {
        self.width.min(self.height)
    }
}

/// The three render layers.
#[derive(Clone, Debug)]
pub struct Layers {
    pub scene: Illustration,
    pub highlight: Illustration,
    pub gizmo: Illustration,
    pub viewport: Viewport,
}

impl Layers {
    /// Create the layer roots in `graph`, bound to the given surfaces.
    pub fn new(graph: &mut SceneGraph, surfaces: [SurfaceId; 3], zoom: f32, camera_rotate: Vec3) -> Self {
        let mut illustration = |layer: Layer, surface: SurfaceId| Illustration {
            root: graph.create_root(layer),
            surface,
            zoom,
        };
        let layers = Self {
            scene: illustration(Layer::Scene, surfaces[0]),
            highlight: illustration(Layer::Highlight, surfaces[1]),
            gizmo: illustration(Layer::Gizmo, surfaces[2]),
            viewport: Viewport::default(),
        };
        if let Some(root) = graph.get_mut(layers.scene.root) {
            root.transform.rotate = camera_rotate;
        }
        layers.sync(graph);
        layers
    }

    pub fn get(&self, layer: Layer) -> &Illustration {
        match layer {
            Layer::Scene => &self.scene,
            Layer::Highlight => &self.highlight,
            Layer::Gizmo => &self.gizmo,
        }
    }

    pub fn root(&self, layer: Layer) -> NodeId {
        self.get(layer).root
    }

    /// Map an event surface to the layer drawn on it.
    pub fn layer_for_surface(&self, surface: SurfaceId) -> Result<Layer, EditorError> {
        Layer::ALL
            .into_iter()
            .find(|&layer| self.get(layer).surface == surface)
            .ok_or(EditorError::UnsupportedSurface(surface))
    }

    /// Copy the scene camera onto the overlay layers.
    pub fn sync(&self, graph: &mut SceneGraph) {
        let Some(camera) = graph.get(self.scene.root).map(|root| root.transform) else {
            log::warn!("Scene root missing, cannot sync layers");
            return;
        };
        for overlay in [self.highlight.root, self.gizmo.root] {
            if let Some(root) = graph.get_mut(overlay) {
                root.transform = camera;
            }
        }
    }

    /// Set the scene zoom and mirror it onto the overlays.
    pub fn set_zoom(&mut self, zoom: f32) {
        self.scene.zoom = zoom;
        self.highlight.zoom = zoom;
        self.gizmo.zoom = zoom;
    }

    pub fn resize(&mut self, width: f32, height: f32) {
        self.viewport = Viewport { width, height };
    }
}

/// The rendering collaborator.
///
/// Called once per frame and layer after the overlays have been synced.
pub trait RenderHost {
    fn update_render_graph(&mut self, layer: Layer, illustration: &Illustration, graph: &SceneGraph);
}
