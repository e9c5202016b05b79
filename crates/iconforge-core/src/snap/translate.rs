//! Translation (drag) snap resolution.

use super::matcher::match_axis;
use super::stops::{AxisStops, collect_stops};
use super::{Guide, Orientation, SnapConfig};
use crate::geometry::{Axis, BoundingBox, Span};
use kurbo::Size;

/// Result of translation snapping: the corrected bounding-box origin plus
/// the guides to render. At most one guide per axis.
#[derive(Debug, Clone, PartialEq)]
pub struct TranslationSnap {
    pub x: f64,
    pub y: f64,
    pub guides: Vec<Guide>,
}

/// Resolve snapping for a pure translation of `moving`.
///
/// Candidate stops come from visible siblings, the canvas, and grid lines
/// nearest the moving box. Per axis, the single closest match within the
/// configured threshold wins; the box is shifted by exactly the match offset
/// so the winning edge lands on the stop while the other edges keep their
/// drag momentum. Axes with no qualifying match are left unchanged.
pub fn resolve_translation(
    moving: &BoundingBox,
    siblings: &[BoundingBox],
    canvas: Size,
    config: &SnapConfig,
) -> TranslationSnap {
    if !config.enabled {
        return TranslationSnap {
            x: moving.x,
            y: moving.y,
            guides: Vec::new(),
        };
    }

    let stops = collect_stops(siblings, canvas, config, Some(moving));
    let mut guides = Vec::new();

    let x = snap_axis_origin(
        moving.span(Axis::X),
        stops.axis(Axis::X),
        config.threshold,
        Orientation::Vertical,
        &mut guides,
    );
    let y = snap_axis_origin(
        moving.span(Axis::Y),
        stops.axis(Axis::Y),
        config.threshold,
        Orientation::Horizontal,
        &mut guides,
    );

    TranslationSnap { x, y, guides }
}

/// Snap one axis: the closest match within the threshold shifts the span
/// origin onto the stop and contributes a guide.
fn snap_axis_origin(
    span: Span,
    stops: &AxisStops,
    threshold: f64,
    orientation: Orientation,
    guides: &mut Vec<Guide>,
) -> f64 {
    let matches = match_axis(stops, span);
    match matches.first() {
        Some(best) if best.distance <= threshold => {
            log::trace!(
                "translation snap {orientation:?}: {:?} edge to {} (distance {:.2})",
                best.role,
                best.stop,
                best.distance,
            );
            guides.push(Guide {
                orientation,
                position: best.stop,
            });
            span.leading - best.offset
        }
        _ => span.leading,
    }
}
