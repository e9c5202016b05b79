//! Resize (bounding-box) snap resolution.
//!
//! Resizing is matched against only the edges that are actually moving this
//! frame: a stop near the left edge is ignored while the user drags the
//! right handle. When the resize preserves aspect ratio, a snap on one axis
//! propagates into a derived extent on the other axis, keeping the anchor
//! (opposite edge or center) fixed.

use super::matcher::{SnapMatch, match_axis};
use super::stops::{AxisStops, CandidateStops};
use super::{Guide, SnapConfig};
use crate::geometry::{Axis, BoundingBox, EdgeRole, Span};

/// Edge-motion epsilon: coordinate deltas below this are treated as
/// stationary.
const MOTION_EPSILON: f64 = 1e-3;

/// Result of resize snapping: the corrected box (extents normalized to
/// non-negative magnitudes) plus the guides to render.
#[derive(Debug, Clone, PartialEq)]
pub struct ResizeSnap {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub guides: Vec<Guide>,
}

impl ResizeSnap {
    /// The corrected geometry as a bounding box.
    pub fn bounds(&self) -> BoundingBox {
        BoundingBox::new(self.x, self.y, self.width, self.height)
    }

    fn passthrough(bounds: &BoundingBox) -> Self {
        Self {
            x: bounds.x,
            y: bounds.y,
            width: bounds.width,
            height: bounds.height,
            guides: Vec::new(),
        }
    }
}

/// Which edges of one axis moved between the previous and requested frame.
#[derive(Debug, Clone, Copy)]
struct AxisMotion {
    leading: bool,
    trailing: bool,
}

impl AxisMotion {
    fn detect(new: Span, old: Span) -> Self {
        Self {
            leading: (new.leading - old.leading).abs() > MOTION_EPSILON,
            trailing: (new.trailing() - old.trailing()).abs() > MOTION_EPSILON,
        }
    }

    fn any(self) -> bool {
        self.leading || self.trailing
    }
}

/// Resolve snapping for a bounding-box resize from `old_box` to `new_box`.
///
/// `stops` is the candidate set collected once per gesture (siblings and
/// canvas; grid lines do not participate in resizing). With `keep_ratio`, an
/// applied X snap drives the height and the Y snap is not separately applied
/// (X dominates), and vice versa when only Y snaps.
pub fn resolve_resize(
    new_box: &BoundingBox,
    old_box: &BoundingBox,
    stops: &CandidateStops,
    config: &SnapConfig,
    keep_ratio: bool,
) -> ResizeSnap {
    if !config.enabled {
        return ResizeSnap::passthrough(new_box);
    }

    let old_x = old_box.span(Axis::X);
    let old_y = old_box.span(Axis::Y);
    let motion_x = AxisMotion::detect(new_box.span(Axis::X), old_x);
    let motion_y = AxisMotion::detect(new_box.span(Axis::Y), old_y);
    if !motion_x.any() && !motion_y.any() {
        return ResizeSnap::passthrough(new_box);
    }

    let win_x = winning_match(
        stops.axis(Axis::X),
        new_box.span(Axis::X),
        motion_x,
        config.threshold,
    );
    let win_y = winning_match(
        stops.axis(Axis::Y),
        new_box.span(Axis::Y),
        motion_y,
        config.threshold,
    );

    let mut x_span = new_box.span(Axis::X);
    let mut y_span = new_box.span(Axis::Y);
    let mut guides = Vec::new();

    // Undefined for degenerate previous extents; propagation is skipped
    // rather than dividing by zero.
    let aspect = (old_box.width.abs() > MOTION_EPSILON && old_box.height.abs() > MOTION_EPSILON)
        .then(|| old_box.width / old_box.height);

    if let Some(m) = &win_x {
        x_span = apply_axis_snap(m, x_span, old_x, motion_x);
        guides.push(Guide::vertical(m.stop));
        if keep_ratio {
            if let Some(ratio) = aspect {
                let height = x_span.size.abs() / ratio;
                y_span = reanchor(y_span, old_y, motion_y, height);
            }
        }
    }

    // A Y snap only applies when it cannot fight an X-driven ratio change.
    if let Some(m) = &win_y {
        if !keep_ratio || win_x.is_none() {
            y_span = apply_axis_snap(m, y_span, old_y, motion_y);
            guides.push(Guide::horizontal(m.stop));
            if keep_ratio {
                if let Some(ratio) = aspect {
                    let width = y_span.size.abs() * ratio;
                    x_span = reanchor(x_span, old_x, motion_x, width);
                }
            }
        }
    }

    ResizeSnap {
        x: x_span.leading,
        y: y_span.leading,
        width: x_span.size.abs(),
        height: y_span.size.abs(),
        guides,
    }
}

/// Walk the axis matches closest-first up to the threshold and take the
/// first one whose role corresponds to an edge that is actually moving.
fn winning_match(
    stops: &AxisStops,
    span: Span,
    motion: AxisMotion,
    threshold: f64,
) -> Option<SnapMatch> {
    if !motion.any() {
        return None;
    }
    for m in match_axis(stops, span) {
        if m.distance > threshold {
            break;
        }
        let actionable = match m.role {
            EdgeRole::Leading => motion.leading,
            EdgeRole::Trailing => motion.trailing,
            EdgeRole::Center => motion.leading || motion.trailing,
        };
        if actionable {
            log::trace!(
                "resize snap: {:?} edge to {} (distance {:.2})",
                m.role,
                m.stop,
                m.distance,
            );
            return Some(m);
        }
    }
    None
}

/// Apply a winning match to one axis of the requested span.
fn apply_axis_snap(m: &SnapMatch, new: Span, old: Span, motion: AxisMotion) -> Span {
    match m.role {
        EdgeRole::Leading => {
            if motion.trailing {
                // Both edges moving: shift the origin onto the stop and keep
                // the requested extent.
                Span::new(m.stop, new.size)
            } else {
                // Trailing edge anchored where it was last frame.
                Span::new(m.stop, old.trailing() - m.stop)
            }
        }
        EdgeRole::Trailing => Span::new(new.leading, m.stop - new.leading),
        EdgeRole::Center => {
            if motion.leading && motion.trailing {
                Span::new(new.leading + (m.stop - new.center()), new.size)
            } else if motion.leading {
                // Trailing anchored: solve the leading edge from the stop.
                let anchored = old.trailing();
                let leading = 2.0 * m.stop - anchored;
                Span::new(leading, anchored - leading)
            } else {
                // Leading anchored: grow the extent until the center lands.
                Span::new(new.leading, 2.0 * (m.stop - old.leading))
            }
        }
    }
}

/// Re-derive one axis after an aspect-driven extent change, keeping the
/// correct anchor fixed: the old center when both edges move, the old
/// trailing edge when only the leading edge moves, the current leading edge
/// otherwise.
fn reanchor(current: Span, old: Span, motion: AxisMotion, new_size: f64) -> Span {
    if motion.leading && motion.trailing {
        Span::new(old.center() - new_size / 2.0, new_size)
    } else if motion.leading {
        Span::new(old.trailing() - new_size, new_size)
    } else {
        Span::new(current.leading, new_size)
    }
}
