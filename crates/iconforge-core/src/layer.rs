//! Layer definitions for the icon canvas.

use crate::geometry::BoundingBox;
use kurbo::Point;
use peniko::Color;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for layers.
pub type LayerId = Uuid;

/// Serializable color representation (RGBA8).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SerializableColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl SerializableColor {
    pub fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub fn black() -> Self {
        Self::new(0, 0, 0, 255)
    }

    pub fn white() -> Self {
        Self::new(255, 255, 255, 255)
    }

    pub fn transparent() -> Self {
        Self::new(0, 0, 0, 0)
    }
}

impl From<Color> for SerializableColor {
    fn from(color: Color) -> Self {
        let rgba = color.to_rgba8();
        Self {
            r: rgba.r,
            g: rgba.g,
            b: rgba.b,
            a: rgba.a,
        }
    }
}

impl From<SerializableColor> for Color {
    fn from(color: SerializableColor) -> Self {
        Color::from_rgba8(color.r, color.g, color.b, color.a)
    }
}

/// A single color stop within a gradient.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GradientStop {
    /// Position along the gradient, 0.0 to 1.0.
    pub offset: f64,
    pub color: SerializableColor,
}

/// Gradient geometry kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GradientKind {
    #[default]
    Linear,
    Radial,
}

/// A gradient fill definition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Gradient {
    pub kind: GradientKind,
    /// Direction in degrees (linear gradients only).
    pub angle: f64,
    /// Stops ordered by offset.
    pub stops: Vec<GradientStop>,
}

/// Fill for shapes, text, and the canvas background.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Fill {
    None,
    Solid(SerializableColor),
    Gradient(Gradient),
}

impl Default for Fill {
    fn default() -> Self {
        Fill::Solid(SerializableColor::black())
    }
}

/// Geometric primitive drawn by a shape layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ShapeKind {
    #[default]
    Rect,
    Circle,
    Triangle,
    Star,
    Pentagon,
    Hexagon,
    Octagon,
}

/// Horizontal text alignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TextAlign {
    Left,
    #[default]
    Center,
    Right,
}

/// Payload of a shape layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShapeLayer {
    pub shape: ShapeKind,
    pub fill: Fill,
    pub stroke: Option<SerializableColor>,
    pub stroke_width: f64,
    pub corner_radius: f64,
}

impl ShapeLayer {
    pub fn new(shape: ShapeKind, fill: Fill) -> Self {
        Self {
            shape,
            fill,
            stroke: None,
            stroke_width: 0.0,
            corner_radius: 0.0,
        }
    }
}

/// Payload of a text layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextLayer {
    pub text: String,
    pub font_size: f64,
    pub font_family: String,
    pub align: TextAlign,
    pub fill: Fill,
}

impl TextLayer {
    pub fn new(text: impl Into<String>, font_size: f64) -> Self {
        Self {
            text: text.into(),
            font_size,
            font_family: "Inter".to_string(),
            align: TextAlign::default(),
            fill: Fill::default(),
        }
    }
}

/// Payload of an image layer. The source is an opaque reference (data URI or
/// asset key) resolved by the rendering layer; the core never decodes pixels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageLayer {
    pub src: String,
}

/// Payload of an emoji layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmojiLayer {
    pub glyph: String,
    pub font_size: f64,
}

/// Kind-specific layer payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum LayerKind {
    Shape(ShapeLayer),
    Text(TextLayer),
    Image(ImageLayer),
    Emoji(EmojiLayer),
}

/// A single object on the icon canvas.
///
/// Position semantics follow the anchor model: a layer with a non-zero
/// `offset_x` is anchored at its offset point (typically its center), so
/// `(x, y)` is the anchor position rather than the top-left corner.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Layer {
    pub id: LayerId,
    pub name: String,
    pub kind: LayerKind,
    pub visible: bool,
    pub locked: bool,
    /// Anchor position in canvas coordinates.
    pub x: f64,
    pub y: f64,
    /// Anchor offset from the top-left corner, in unscaled layer units.
    pub offset_x: f64,
    pub offset_y: f64,
    /// Rotation in degrees.
    pub rotation: f64,
    pub scale_x: f64,
    pub scale_y: f64,
    /// Unscaled extents.
    pub width: f64,
    pub height: f64,
    pub opacity: f64,
}

impl Layer {
    /// Create a layer with default transform (unit scale, corner anchor).
    pub fn new(name: impl Into<String>, kind: LayerKind) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            kind,
            visible: true,
            locked: false,
            x: 0.0,
            y: 0.0,
            offset_x: 0.0,
            offset_y: 0.0,
            rotation: 0.0,
            scale_x: 1.0,
            scale_y: 1.0,
            width: 100.0,
            height: 100.0,
            opacity: 1.0,
        }
    }

    pub fn with_position(mut self, x: f64, y: f64) -> Self {
        self.x = x;
        self.y = y;
        self
    }

    pub fn with_size(mut self, width: f64, height: f64) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn with_scale(mut self, scale_x: f64, scale_y: f64) -> Self {
        self.scale_x = scale_x;
        self.scale_y = scale_y;
        self
    }

    /// Anchor the layer at its geometric center.
    pub fn centered(mut self) -> Self {
        self.offset_x = self.width / 2.0;
        self.offset_y = self.height / 2.0;
        self
    }

    /// Whether the anchor point is offset from the top-left corner.
    pub fn is_center_anchored(&self) -> bool {
        self.offset_x != 0.0
    }

    /// Axis-aligned bounding box in canvas coordinates, with the anchor
    /// resolved away: the returned box is always origin + extent.
    pub fn bounds(&self) -> BoundingBox {
        let width = self.width * self.scale_x;
        let height = self.height * self.scale_y;
        let x = self.x - self.offset_x * self.scale_x;
        let y = self.y - self.offset_y * self.scale_y;
        BoundingBox::new(x, y, width, height)
    }

    /// Convert a bounding-box origin back into this layer's native anchor
    /// position (origin plus the scaled anchor offset).
    pub fn position_for_origin(&self, origin: Point) -> Point {
        Point::new(
            origin.x + self.offset_x * self.scale_x,
            origin.y + self.offset_y * self.scale_y,
        )
    }

    /// Write a resolved bounding box back onto the layer: the extent change
    /// is folded into the scale factors (transform-handle semantics) and the
    /// position is recovered through the anchor.
    pub fn set_bounds(&mut self, bounds: &BoundingBox) {
        if self.width.abs() > f64::EPSILON {
            self.scale_x = bounds.width / self.width;
        }
        if self.height.abs() > f64::EPSILON {
            self.scale_y = bounds.height / self.height;
        }
        let pos = self.position_for_origin(bounds.origin());
        self.x = pos.x;
        self.y = pos.y;
    }
}
