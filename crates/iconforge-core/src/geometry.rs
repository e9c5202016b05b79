//! Axis-aligned bounding boxes and per-axis spans.

use kurbo::{Point, Rect};
use serde::{Deserialize, Serialize};

/// Axis selector for per-axis geometry operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Axis {
    X,
    Y,
}

/// Logical edge of a rectangle on one axis.
///
/// Leading is the lower-coordinate boundary (left/top), trailing the
/// higher-coordinate one (right/bottom).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EdgeRole {
    Leading,
    Center,
    Trailing,
}

impl EdgeRole {
    /// All roles in fixed evaluation order.
    pub const ALL: [EdgeRole; 3] = [EdgeRole::Leading, EdgeRole::Center, EdgeRole::Trailing];
}

/// An axis-aligned rectangle in canvas coordinates, stored as origin + extent.
///
/// Extents handed to callers are non-negative magnitudes; intermediate resize
/// math may transiently carry a negative extent before normalization.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl BoundingBox {
    /// Create a bounding box from origin and extents.
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn left(&self) -> f64 {
        self.x
    }

    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    pub fn top(&self) -> f64 {
        self.y
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    /// Top-left origin of the box.
    pub fn origin(&self) -> Point {
        Point::new(self.x, self.y)
    }

    /// Geometric center of the box.
    pub fn center(&self) -> Point {
        Point::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    /// Slice of this box along one axis.
    pub fn span(&self, axis: Axis) -> Span {
        match axis {
            Axis::X => Span::new(self.x, self.width),
            Axis::Y => Span::new(self.y, self.height),
        }
    }

    /// Replace the slice of this box along one axis.
    pub fn with_span(mut self, axis: Axis, span: Span) -> Self {
        match axis {
            Axis::X => {
                self.x = span.leading;
                self.width = span.size;
            }
            Axis::Y => {
                self.y = span.leading;
                self.height = span.size;
            }
        }
        self
    }

    /// Normalize extents to non-negative magnitudes without moving the origin.
    pub fn abs(mut self) -> Self {
        self.width = self.width.abs();
        self.height = self.height.abs();
        self
    }
}

impl From<Rect> for BoundingBox {
    fn from(rect: Rect) -> Self {
        Self::new(rect.x0, rect.y0, rect.width(), rect.height())
    }
}

impl From<BoundingBox> for Rect {
    fn from(b: BoundingBox) -> Self {
        Rect::new(b.x, b.y, b.x + b.width, b.y + b.height)
    }
}

/// A 1-D slice of a bounding box along one axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Span {
    /// Leading edge coordinate (left for X, top for Y).
    pub leading: f64,
    /// Extent along the axis; may transiently be negative during resize math.
    pub size: f64,
}

impl Span {
    pub fn new(leading: f64, size: f64) -> Self {
        Self { leading, size }
    }

    pub fn trailing(&self) -> f64 {
        self.leading + self.size
    }

    pub fn center(&self) -> f64 {
        self.leading + self.size / 2.0
    }

    /// Coordinate of a logical edge of this span.
    pub fn coord(&self, role: EdgeRole) -> f64 {
        match role {
            EdgeRole::Leading => self.leading,
            EdgeRole::Center => self.center(),
            EdgeRole::Trailing => self.trailing(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_box_edges() {
        let b = BoundingBox::new(10.0, 20.0, 30.0, 40.0);
        assert_eq!(b.left(), 10.0);
        assert_eq!(b.right(), 40.0);
        assert_eq!(b.top(), 20.0);
        assert_eq!(b.bottom(), 60.0);
        assert_eq!(b.center(), Point::new(25.0, 40.0));
    }

    #[test]
    fn test_span_roles() {
        let s = Span::new(100.0, 50.0);
        assert_eq!(s.coord(EdgeRole::Leading), 100.0);
        assert_eq!(s.coord(EdgeRole::Center), 125.0);
        assert_eq!(s.coord(EdgeRole::Trailing), 150.0);
    }

    #[test]
    fn test_with_span() {
        let b = BoundingBox::new(0.0, 0.0, 10.0, 10.0);
        let b = b.with_span(Axis::X, Span::new(5.0, 20.0));
        assert_eq!(b.x, 5.0);
        assert_eq!(b.width, 20.0);
        assert_eq!(b.y, 0.0);
        assert_eq!(b.height, 10.0);
    }

    #[test]
    fn test_abs_normalizes_extents() {
        let b = BoundingBox::new(10.0, 10.0, -4.0, -6.0).abs();
        assert_eq!(b.width, 4.0);
        assert_eq!(b.height, 6.0);
        assert_eq!(b.x, 10.0);
    }

    #[test]
    fn test_rect_roundtrip() {
        let b = BoundingBox::new(1.0, 2.0, 3.0, 4.0);
        let rect: Rect = b.into();
        assert_eq!(BoundingBox::from(rect), b);
    }
}
