//! Candidate alignment-stop collection.

use super::SnapConfig;
use crate::geometry::{Axis, BoundingBox, EdgeRole};
use kurbo::Size;

/// Candidate coordinates for one axis, grouped by the edge role they align
/// with. Lists are un-deduplicated and unsorted; ordering is irrelevant to
/// downstream consumers and duplicates are harmless.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AxisStops {
    pub leading: Vec<f64>,
    pub center: Vec<f64>,
    pub trailing: Vec<f64>,
}

impl AxisStops {
    /// The stop list for one edge role.
    pub fn role(&self, role: EdgeRole) -> &[f64] {
        match role {
            EdgeRole::Leading => &self.leading,
            EdgeRole::Center => &self.center,
            EdgeRole::Trailing => &self.trailing,
        }
    }

    fn push(&mut self, role: EdgeRole, value: f64) {
        match role {
            EdgeRole::Leading => self.leading.push(value),
            EdgeRole::Center => self.center.push(value),
            EdgeRole::Trailing => self.trailing.push(value),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.leading.is_empty() && self.center.is_empty() && self.trailing.is_empty()
    }
}

/// Candidate stops for both axes. Vertical stops are x coordinates (lines the
/// object's left/center/right may align with), horizontal stops are y
/// coordinates.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CandidateStops {
    pub vertical: AxisStops,
    pub horizontal: AxisStops,
}

impl CandidateStops {
    /// Stops for the given movement axis: X motion aligns with vertical
    /// lines, Y motion with horizontal ones.
    pub fn axis(&self, axis: Axis) -> &AxisStops {
        match axis {
            Axis::X => &self.vertical,
            Axis::Y => &self.horizontal,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.vertical.is_empty() && self.horizontal.is_empty()
    }
}

/// Build the candidate stop set for one interaction frame.
///
/// `siblings` are the bounding boxes of every other visible object (locked
/// objects are legitimate snap sources, so callers should not filter them
/// out). Grid stops are relative to the moving object and therefore only
/// contributed when `moving` is supplied; translation passes the dragged
/// box, resize passes `None`. Grid stops go to the leading and trailing
/// roles only.
pub fn collect_stops(
    siblings: &[BoundingBox],
    canvas: Size,
    config: &SnapConfig,
    moving: Option<&BoundingBox>,
) -> CandidateStops {
    let mut stops = CandidateStops::default();

    if config.canvas {
        stops.vertical.push(EdgeRole::Leading, 0.0);
        stops.vertical.push(EdgeRole::Center, canvas.width / 2.0);
        stops.vertical.push(EdgeRole::Trailing, canvas.width);

        stops.horizontal.push(EdgeRole::Leading, 0.0);
        stops.horizontal.push(EdgeRole::Center, canvas.height / 2.0);
        stops.horizontal.push(EdgeRole::Trailing, canvas.height);
    }

    if config.objects {
        for bounds in siblings {
            let center = bounds.center();
            stops.vertical.push(EdgeRole::Leading, bounds.left());
            stops.vertical.push(EdgeRole::Center, center.x);
            stops.vertical.push(EdgeRole::Trailing, bounds.right());

            stops.horizontal.push(EdgeRole::Leading, bounds.top());
            stops.horizontal.push(EdgeRole::Center, center.y);
            stops.horizontal.push(EdgeRole::Trailing, bounds.bottom());
        }
    }

    if config.grid && config.grid_size > 0.0 {
        if let Some(bounds) = moving {
            let nearest = |value: f64| (value / config.grid_size).round() * config.grid_size;

            stops.vertical.push(EdgeRole::Leading, nearest(bounds.left()));
            stops.vertical.push(EdgeRole::Trailing, nearest(bounds.right()));

            stops.horizontal.push(EdgeRole::Leading, nearest(bounds.top()));
            stops
                .horizontal
                .push(EdgeRole::Trailing, nearest(bounds.bottom()));
        }
    }

    stops
}
