//! Scene nodes and their editable properties.

use std::fmt;

use zoodle_math::{Axis, Transform, Vec3};

use crate::commands::CommandError;

/// Generational handle to a node in a [`SceneGraph`](super::SceneGraph).
///
/// The generation is bumped whenever a slot is reused, so an id kept past
/// the removal of its node never resolves to a different node.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct NodeId {
    pub(crate) index: u32,
    pub(crate) generation: u32,
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Node({}v{})", self.index, self.generation)
    }
}

/// Render layer a node lives in. Each layer has its own root.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Layer {
    /// The user's scene
    Scene,
    /// Selection outlines
    Highlight,
    /// Axis widgets
    Gizmo,
}

impl Layer {
    pub const ALL: [Layer; 3] = [Layer::Scene, Layer::Highlight, Layer::Gizmo];
}

/// RGB color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse `#rgb` or `#rrggbb`.
    pub fn from_hex(hex: &str) -> Option<Self> {
        let digits = hex.strip_prefix('#')?;
        let nibble = |c: char| c.to_digit(16).map(|d| d as u8);
        match digits.len() {
            3 => {
                let mut it = digits.chars().map(nibble);
                let r = it.next()??;
                let g = it.next()??;
                let b = it.next()??;
                Some(Self::rgb(r * 17, g * 17, b * 17))
            }
            6 => {
                let byte = |i: usize| u8::from_str_radix(digits.get(i..i + 2)?, 16).ok();
                Some(Self::rgb(byte(0)?, byte(2)?, byte(4)?))
            }
            _ => None,
        }
    }

    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

/// Primitive kind of a node.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    /// Transform-only group
    Anchor,
    /// Free path
    Shape,
    Ellipse,
    Rect,
    Cone,
    Cylinder,
    Hemisphere,
    Box,
}

impl ShapeKind {
    pub fn type_name(&self) -> &'static str {
        match self {
            ShapeKind::Anchor => "Anchor",
            ShapeKind::Shape => "Shape",
            ShapeKind::Ellipse => "Ellipse",
            ShapeKind::Rect => "Rect",
            ShapeKind::Cone => "Cone",
            ShapeKind::Cylinder => "Cylinder",
            ShapeKind::Hemisphere => "Hemisphere",
            ShapeKind::Box => "Box",
        }
    }

    /// Properties that nodes of this kind expose for editing.
    pub fn option_keys(&self) -> &'static [Property] {
        use Property::*;
        match self {
            ShapeKind::Anchor => &[Translate, Rotate, Scale],
            ShapeKind::Shape => &[Translate, Rotate, Scale, Color, Backface, Stroke, Fill, Closed, Visible],
            ShapeKind::Ellipse => &[Translate, Rotate, Scale, Color, Backface, Stroke, Fill, Visible, Diameter],
            ShapeKind::Rect | ShapeKind::Box => {
                &[Translate, Rotate, Scale, Color, Backface, Stroke, Fill, Visible, Width, Height]
            }
            ShapeKind::Cone | ShapeKind::Cylinder => {
                &[Translate, Rotate, Scale, Color, Backface, Stroke, Fill, Visible, Diameter, Length]
            }
            ShapeKind::Hemisphere => &[Translate, Rotate, Scale, Color, Backface, Stroke, Fill, Visible, Diameter],
        }
    }

    /// Whether the render engine derives a path from this kind's parameters.
    pub fn has_path(&self) -> bool {
        !matches!(self, ShapeKind::Anchor)
    }
}

/// Editable node property.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Property {
    Translate,
    Rotate,
    Scale,
    Color,
    Backface,
    Stroke,
    Fill,
    Closed,
    Visible,
    Diameter,
    Length,
    Width,
    Height,
}

impl Property {
    pub fn name(&self) -> &'static str {
        match self {
            Property::Translate => "translate",
            Property::Rotate => "rotate",
            Property::Scale => "scale",
            Property::Color => "color",
            Property::Backface => "backface",
            Property::Stroke => "stroke",
            Property::Fill => "fill",
            Property::Closed => "closed",
            Property::Visible => "visible",
            Property::Diameter => "diameter",
            Property::Length => "length",
            Property::Width => "width",
            Property::Height => "height",
        }
    }

    /// Look up a property by its panel id.
    pub fn from_name(name: &str) -> Option<Self> {
        use Property::*;
        [
            Translate, Rotate, Scale, Color, Backface, Stroke, Fill, Closed, Visible, Diameter, Length,
            Width, Height,
        ]
        .into_iter()
        .find(|p| p.name() == name)
    }
}

impl fmt::Display for Property {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Value of a node property.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PropertyValue {
    Number(f32),
    Bool(bool),
    Color(Color),
    Vector(Vec3),
    /// An optional property switched off (no stroke, no backface).
    Off,
}

/// Role of a gizmo part. Picking reads this, never the part's color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GizmoRole {
    Origin,
    Shaft(Axis),
    /// Cap on a shaft; resolves to its parent shaft when picked.
    Tip(Axis),
    Ring(Axis),
}

impl GizmoRole {
    pub fn axis(&self) -> Option<Axis> {
        match self {
            GizmoRole::Origin => None,
            GizmoRole::Shaft(axis) | GizmoRole::Tip(axis) | GizmoRole::Ring(axis) => Some(*axis),
        }
    }
}

/// A scene graph node.
#[derive(Clone, Debug)]
pub struct Node {
    /// Optional display name
    pub name: Option<String>,
    pub kind: ShapeKind,
    /// Local transform relative to the parent
    pub transform: Transform,
    pub color: Option<Color>,
    pub backface: Option<Color>,
    pub stroke: Option<f32>,
    pub fill: bool,
    pub closed: bool,
    pub visible: bool,
    pub diameter: f32,
    pub length: f32,
    pub width: f32,
    pub height: f32,
    /// Sub-part of a composite primitive, not selectable on its own
    pub composite_child: bool,
    /// Set on gizmo parts
    pub gizmo_role: Option<GizmoRole>,
    /// Scene node an overlay anchor stands in for
    pub stands_for: Option<NodeId>,
    /// Bumped every time the path must be recomputed
    pub path_revision: u64,

    pub(crate) parent: Option<NodeId>,
    pub(crate) children: Vec<NodeId>,
    pub(crate) layer: Layer,
}

impl Default for Node {
    fn default() -> Self {
        Self {
            name: None,
            kind: ShapeKind::Shape,
            transform: Transform::IDENTITY,
            color: Some(Color::rgb(0x33, 0x33, 0x33)),
            backface: None,
            stroke: Some(1.0),
            fill: false,
            closed: true,
            visible: true,
            diameter: 1.0,
            length: 1.0,
            width: 1.0,
            height: 1.0,
            composite_child: false,
            gizmo_role: None,
            stands_for: None,
            path_revision: 0,
            parent: None,
            children: Vec::new(),
            layer: Layer::Scene,
        }
    }
}

impl Node {
    pub fn new(kind: ShapeKind) -> Self {
        Self {
            kind,
            ..Default::default()
        }
    }

    pub fn anchor() -> Self {
        Self {
            color: None,
            stroke: None,
            ..Self::new(ShapeKind::Anchor)
        }
    }

    pub fn shape() -> Self {
        Self::new(ShapeKind::Shape)
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_transform(mut self, transform: Transform) -> Self {
        self.transform = transform;
        self
    }

    pub fn with_translate(mut self, translate: Vec3) -> Self {
        self.transform.translate = translate;
        self
    }

    pub fn with_rotate(mut self, rotate: Vec3) -> Self {
        self.transform.rotate = rotate;
        self
    }

    pub fn with_scale(mut self, scale: Vec3) -> Self {
        self.transform.scale = scale;
        self
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    pub fn with_stroke(mut self, stroke: f32) -> Self {
        self.stroke = Some(stroke);
        self
    }

    pub fn with_diameter(mut self, diameter: f32) -> Self {
        self.diameter = diameter;
        self
    }

    pub fn with_length(mut self, length: f32) -> Self {
        self.length = length;
        self
    }

    pub fn with_role(mut self, role: GizmoRole) -> Self {
        self.gizmo_role = Some(role);
        self
    }

    /// Mark as a non-selectable part of its parent.
    pub fn composite(mut self) -> Self {
        self.composite_child = true;
        self
    }

    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    pub fn layer(&self) -> Layer {
        self.layer
    }

    /// Label shown in breadcrumbs and the outliner.
    pub fn label(&self) -> &str {
        match (&self.name, self.parent) {
            (Some(name), _) => name,
            (None, None) => "Illustration",
            (None, Some(_)) => self.kind.type_name(),
        }
    }

    pub fn supports(&self, property: Property) -> bool {
        self.kind.option_keys().contains(&property)
    }

    /// Read a property. `None` when this kind does not expose it.
    pub fn get_property(&self, property: Property) -> Option<PropertyValue> {
        if !self.supports(property) {
            return None;
        }
        let optional_color = |c: Option<Color>| c.map_or(PropertyValue::Off, PropertyValue::Color);
        Some(match property {
            Property::Translate => PropertyValue::Vector(self.transform.translate),
            Property::Rotate => PropertyValue::Vector(self.transform.rotate),
            Property::Scale => PropertyValue::Vector(self.transform.scale),
            Property::Color => optional_color(self.color),
            Property::Backface => optional_color(self.backface),
            Property::Stroke => self.stroke.map_or(PropertyValue::Off, PropertyValue::Number),
            Property::Fill => PropertyValue::Bool(self.fill),
            Property::Closed => PropertyValue::Bool(self.closed),
            Property::Visible => PropertyValue::Bool(self.visible),
            Property::Diameter => PropertyValue::Number(self.diameter),
            Property::Length => PropertyValue::Number(self.length),
            Property::Width => PropertyValue::Number(self.width),
            Property::Height => PropertyValue::Number(self.height),
        })
    }

    /// Write a property, checking that the kind exposes it and the value
    /// has the right type.
    pub fn set_property(&mut self, property: Property, value: PropertyValue) -> Result<(), CommandError> {
        if !self.supports(property) {
            return Err(CommandError::UnsupportedProperty {
                property,
                kind: self.kind.type_name(),
            });
        }
        let mismatch = || CommandError::TypeMismatch { property, value };
        match (property, value) {
            (Property::Translate, PropertyValue::Vector(v)) => self.transform.translate = v,
            (Property::Rotate, PropertyValue::Vector(v)) => self.transform.rotate = v,
            (Property::Scale, PropertyValue::Vector(v)) => self.transform.scale = v,
            (Property::Color, PropertyValue::Color(c)) => self.color = Some(c),
            (Property::Color, PropertyValue::Off) => self.color = None,
            (Property::Backface, PropertyValue::Color(c)) => self.backface = Some(c),
            (Property::Backface, PropertyValue::Off) => self.backface = None,
            (Property::Stroke, PropertyValue::Number(n)) => self.stroke = Some(n),
            (Property::Stroke, PropertyValue::Off) => self.stroke = None,
            (Property::Fill, PropertyValue::Bool(b)) => self.fill = b,
            (Property::Closed, PropertyValue::Bool(b)) => self.closed = b,
            (Property::Visible, PropertyValue::Bool(b)) => self.visible = b,
            (Property::Diameter, PropertyValue::Number(n)) => self.diameter = n,
            (Property::Length, PropertyValue::Number(n)) => self.length = n,
            (Property::Width, PropertyValue::Number(n)) => self.width = n,
            (Property::Height, PropertyValue::Number(n)) => self.height = n,
            _ => return Err(mismatch()),
        }
        Ok(())
    }

    /// Ask the render engine to rebuild this node's path.
    pub fn update_path(&mut self) {
        if self.kind.has_path() {
            self.path_revision += 1;
        }
    }
}
