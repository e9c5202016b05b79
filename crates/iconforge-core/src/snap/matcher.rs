//! Proximity matching of object edges against candidate stops.

use super::{COARSE_MATCH_CUTOFF, stops::AxisStops};
use crate::geometry::{EdgeRole, Span};

/// A candidate stop lying within the coarse cutoff of one of the object's
/// edges on a single axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SnapMatch {
    /// Which edge of the object this stop aligns with.
    pub role: EdgeRole,
    /// The candidate line coordinate.
    pub stop: f64,
    /// Absolute distance between the edge and the stop.
    pub distance: f64,
    /// Signed difference `edge - stop`; shifting the object by `-offset`
    /// lands the edge exactly on the stop rather than on a rounded value.
    pub offset: f64,
}

/// Find every stop within the coarse cutoff of the span's leading, center,
/// and trailing coordinates, sorted ascending by distance. The sort is
/// stable, so equal distances keep role evaluation order (leading, center,
/// trailing) and then stop list order.
pub fn match_axis(stops: &AxisStops, span: Span) -> Vec<SnapMatch> {
    let mut matches = Vec::new();
    for role in EdgeRole::ALL {
        let coord = span.coord(role);
        for &stop in stops.role(role) {
            let distance = (coord - stop).abs();
            if distance < COARSE_MATCH_CUTOFF {
                matches.push(SnapMatch {
                    role,
                    stop,
                    distance,
                    offset: coord - stop,
                });
            }
        }
    }
    matches.sort_by(|a, b| a.distance.total_cmp(&b.distance));
    matches
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stops(leading: &[f64], center: &[f64], trailing: &[f64]) -> AxisStops {
        AxisStops {
            leading: leading.to_vec(),
            center: center.to_vec(),
            trailing: trailing.to_vec(),
        }
    }

    #[test]
    fn test_coarse_cutoff_is_exclusive() {
        let stops = stops(&[100.0], &[], &[]);
        // Leading edge at 110: distance exactly 10 is not a match.
        assert!(match_axis(&stops, Span::new(110.0, 50.0)).is_empty());
        // At 109.5 it is.
        let matches = match_axis(&stops, Span::new(109.5, 50.0));
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].role, EdgeRole::Leading);
        assert!((matches[0].distance - 9.5).abs() < 1e-9);
    }

    #[test]
    fn test_sorted_by_distance() {
        // Span 100..200 (center 150).
        let stops = stops(&[103.0], &[151.0], &[198.0]);
        let matches = match_axis(&stops, Span::new(100.0, 100.0));
        let distances: Vec<f64> = matches.iter().map(|m| m.distance).collect();
        assert_eq!(distances, vec![1.0, 2.0, 3.0]);
        assert_eq!(matches[0].role, EdgeRole::Center);
        assert_eq!(matches[1].role, EdgeRole::Trailing);
        assert_eq!(matches[2].role, EdgeRole::Leading);
    }

    #[test]
    fn test_stable_tie_keeps_role_order() {
        // Leading and center both 5 away.
        let stops = stops(&[95.0], &[145.0], &[]);
        let matches = match_axis(&stops, Span::new(100.0, 100.0));
        assert_eq!(matches.len(), 2);
        assert_eq!(matches[0].role, EdgeRole::Leading);
        assert_eq!(matches[1].role, EdgeRole::Center);
    }

    #[test]
    fn test_offset_is_signed() {
        let stops = stops(&[100.0], &[], &[]);
        let matches = match_axis(&stops, Span::new(104.0, 50.0));
        assert_eq!(matches[0].offset, 4.0);
        let matches = match_axis(&stops, Span::new(96.0, 50.0));
        assert_eq!(matches[0].offset, -4.0);
    }

    #[test]
    fn test_roles_only_match_their_own_lists() {
        // A trailing-role stop sitting exactly on the span's leading edge is
        // only compared against the trailing edge.
        let stops = stops(&[], &[], &[100.0]);
        let matches = match_axis(&stops, Span::new(100.0, 5.0));
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].role, EdgeRole::Trailing);
        assert_eq!(matches[0].distance, 5.0);
    }
}
