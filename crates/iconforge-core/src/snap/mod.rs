//! Alignment snapping engine for canvas objects.
//!
//! During a drag or resize gesture the engine compares the moving object's
//! bounding box against candidate alignment lines contributed by the canvas,
//! sibling objects, and the grid, then returns corrected geometry plus the
//! guide lines to render. Everything here is pure: resolvers take a
//! configuration snapshot and plain rectangles, and return values. All state
//! is rebuilt on every pointer-move and discarded after use.

mod matcher;
mod resize;
mod stops;
mod translate;

pub use matcher::SnapMatch;
pub use resize::{ResizeSnap, resolve_resize};
pub use stops::{AxisStops, CandidateStops, collect_stops};
pub use translate::{TranslationSnap, resolve_translation};

use serde::{Deserialize, Serialize};

/// Coarse cutoff for candidate matches, in canvas units. Bounds the match
/// list before the resolvers apply the configured threshold; independent of
/// [`SnapConfig::threshold`]. Exclusive: a distance of exactly this value is
/// not a match.
pub(crate) const COARSE_MATCH_CUTOFF: f64 = 10.0;

/// Snapping configuration, owned and mutated by the toolbar UI. The engine
/// only ever receives an immutable snapshot per call.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SnapConfig {
    /// Master switch; when off, resolvers pass geometry through unchanged.
    pub enabled: bool,
    /// Snap to grid lines nearest the moving object.
    pub grid: bool,
    /// Grid cell size in canvas units.
    pub grid_size: f64,
    /// Snap to sibling object edges and centers.
    pub objects: bool,
    /// Snap to canvas edges and center lines.
    pub canvas: bool,
    /// Snap rotation to discrete angle increments.
    pub rotation: bool,
    /// Rotation increment in degrees.
    pub rotation_increment: f64,
    /// Maximum distance at which a snap engages, in canvas units.
    pub threshold: f64,
}

impl Default for SnapConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            grid: false,
            grid_size: 20.0,
            objects: true,
            canvas: true,
            rotation: true,
            rotation_increment: 15.0,
            threshold: 10.0,
        }
    }
}

/// Orientation of a guide line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Orientation {
    /// A vertical line at a fixed x coordinate.
    Vertical,
    /// A horizontal line at a fixed y coordinate.
    Horizontal,
}

/// A transient alignment guide line. Guides have no persistent identity;
/// each interaction frame replaces the previous frame's list outright.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Guide {
    pub orientation: Orientation,
    pub position: f64,
}

impl Guide {
    pub fn vertical(position: f64) -> Self {
        Self {
            orientation: Orientation::Vertical,
            position,
        }
    }

    pub fn horizontal(position: f64) -> Self {
        Self {
            orientation: Orientation::Horizontal,
            position,
        }
    }
}

/// The discrete set of rotation angles the rotate handle may land on:
/// `{0, inc, 2*inc, ...}` up to (excluding) 360 degrees. Empty when rotation
/// snapping is disabled or the increment is not positive.
pub fn rotation_snap_angles(config: &SnapConfig) -> Vec<f64> {
    if !config.rotation || config.rotation_increment <= 0.0 {
        return Vec::new();
    }
    (0..)
        .map(|i| i as f64 * config.rotation_increment)
        .take_while(|angle| *angle < 360.0)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SnapConfig::default();
        assert!(config.enabled);
        assert!(!config.grid);
        assert!(config.objects);
        assert!(config.canvas);
        assert_eq!(config.grid_size, 20.0);
        assert_eq!(config.rotation_increment, 15.0);
        assert_eq!(config.threshold, 10.0);
    }

    #[test]
    fn test_rotation_angles_15_degrees() {
        let config = SnapConfig::default();
        let angles = rotation_snap_angles(&config);
        assert_eq!(angles.len(), 24);
        assert_eq!(angles[0], 0.0);
        assert_eq!(angles[1], 15.0);
        assert_eq!(angles[23], 345.0);
    }

    #[test]
    fn test_rotation_angles_disabled() {
        let config = SnapConfig {
            rotation: false,
            ..SnapConfig::default()
        };
        assert!(rotation_snap_angles(&config).is_empty());
    }

    #[test]
    fn test_rotation_angles_bad_increment() {
        let config = SnapConfig {
            rotation_increment: 0.0,
            ..SnapConfig::default()
        };
        assert!(rotation_snap_angles(&config).is_empty());
    }

    #[test]
    fn test_rotation_angles_coarse_increment() {
        let config = SnapConfig {
            rotation_increment: 90.0,
            ..SnapConfig::default()
        };
        assert_eq!(rotation_snap_angles(&config), vec![0.0, 90.0, 180.0, 270.0]);
    }
}
