//! Resize/rotate transform gesture controller.

use crate::{GestureResult, check_interactive};
use iconforge_core::snap::{collect_stops, resolve_resize, rotation_snap_angles};
use iconforge_core::{BoundingBox, CandidateStops, Guide, IconDocument, LayerId, SnapConfig};

/// Minimum extent of a resized box in each dimension, in canvas units.
/// Requests under the minimum are rejected before the snap resolver runs,
/// which also keeps degenerate aspect ratios out of the resolver.
pub const MIN_SIZE: f64 = 5.0;

/// An in-progress resize of a single layer via its transform handles.
///
/// The candidate stop set is collected once at `begin` (siblings and canvas
/// only; grid lines do not participate in resizing) and reused for every
/// frame of the gesture.
#[derive(Debug)]
pub struct TransformGesture {
    layer: LayerId,
    stops: CandidateStops,
    keep_ratio: bool,
    guides: Vec<Guide>,
}

impl TransformGesture {
    /// Start transforming a layer. `keep_ratio` constrains the resize to the
    /// layer's aspect ratio (free-scale mode passes false).
    pub fn begin(
        doc: &mut IconDocument,
        layer: LayerId,
        config: &SnapConfig,
        keep_ratio: bool,
    ) -> GestureResult<Self> {
        check_interactive(doc, layer)?;
        let stops = collect_stops(&doc.snap_sources(layer), doc.canvas.size(), config, None);
        doc.push_undo();
        log::debug!("transform begin: {layer} (keep_ratio: {keep_ratio})");
        Ok(Self {
            layer,
            stops,
            keep_ratio,
            guides: Vec::new(),
        })
    }

    /// Per-frame bounding-box constraint for the transform handles: rejects
    /// under-minimum boxes by returning the previous frame's box, otherwise
    /// resolves snapping and returns the enforced box for this frame.
    pub fn bound_box(
        &mut self,
        old_box: BoundingBox,
        new_box: BoundingBox,
        config: &SnapConfig,
    ) -> BoundingBox {
        if new_box.width < MIN_SIZE || new_box.height < MIN_SIZE {
            return old_box;
        }

        let snap = resolve_resize(&new_box, &old_box, &self.stops, config, self.keep_ratio);
        let bounds = snap.bounds();
        self.guides = snap.guides;
        bounds
    }

    /// Write an enforced box back onto the layer.
    pub fn apply(&self, doc: &mut IconDocument, bounds: &BoundingBox) {
        if let Some(layer) = doc.get_layer_mut(self.layer) {
            layer.set_bounds(bounds);
        }
    }

    /// The discrete angle set for the rotate handle.
    pub fn rotation_snaps(config: &SnapConfig) -> Vec<f64> {
        rotation_snap_angles(config)
    }

    /// Guides to render for the current frame.
    pub fn guides(&self) -> &[Guide] {
        &self.guides
    }

    /// End the gesture, dropping its guides.
    pub fn finish(self) {
        log::debug!("transform end: {}", self.layer);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use iconforge_core::layer::{Fill, Layer, LayerKind, ShapeKind, ShapeLayer};

    fn shape(name: &str) -> Layer {
        Layer::new(
            name,
            LayerKind::Shape(ShapeLayer::new(ShapeKind::Rect, Fill::default())),
        )
    }

    fn objects_only() -> SnapConfig {
        SnapConfig {
            canvas: false,
            grid: false,
            objects: true,
            threshold: 10.0,
            ..SnapConfig::default()
        }
    }

    #[test]
    fn test_min_size_guard_returns_previous_box() {
        let mut doc = IconDocument::new();
        let id = doc.add_layer(shape("a").with_size(50.0, 50.0));
        let mut gesture = TransformGesture::begin(&mut doc, id, &objects_only(), false).unwrap();

        let old = BoundingBox::new(0.0, 0.0, 50.0, 50.0);
        let new = BoundingBox::new(0.0, 0.0, 3.0, 50.0);
        assert_eq!(gesture.bound_box(old, new, &objects_only()), old);
        assert!(gesture.guides().is_empty());
    }

    #[test]
    fn test_resize_snaps_to_sibling_and_applies() {
        let mut doc = IconDocument::new();
        doc.add_layer(shape("sibling").with_position(55.0, 200.0).with_size(50.0, 10.0));
        let id = doc.add_layer(shape("a").with_position(0.0, 0.0).with_size(100.0, 50.0));

        let config = objects_only();
        let mut gesture = TransformGesture::begin(&mut doc, id, &config, false).unwrap();

        let old = BoundingBox::new(0.0, 0.0, 100.0, 50.0);
        let new = BoundingBox::new(0.0, 0.0, 103.0, 50.0);
        let enforced = gesture.bound_box(old, new, &config);
        // The trailing edge lands on the sibling's right edge at 105.
        assert_eq!(enforced, BoundingBox::new(0.0, 0.0, 105.0, 50.0));
        assert_eq!(gesture.guides(), &[Guide::vertical(105.0)]);

        gesture.apply(&mut doc, &enforced);
        let layer = doc.get_layer(id).unwrap();
        assert_eq!(layer.bounds(), enforced);
        assert!((layer.scale_x - 1.05).abs() < 1e-9);

        gesture.finish();
        assert!(doc.undo());
        assert_eq!(doc.get_layer(id).unwrap().bounds().width, 100.0);
    }

    #[test]
    fn test_grid_does_not_participate_in_resize() {
        let mut doc = IconDocument::new();
        let id = doc.add_layer(shape("a").with_size(100.0, 50.0));
        let config = SnapConfig {
            canvas: false,
            objects: false,
            grid: true,
            grid_size: 20.0,
            threshold: 10.0,
            ..SnapConfig::default()
        };
        let mut gesture = TransformGesture::begin(&mut doc, id, &config, false).unwrap();

        // 97 would snap to the 100 grid line during a drag, but resizing
        // collects no grid stops.
        let old = BoundingBox::new(0.0, 0.0, 100.0, 50.0);
        let new = BoundingBox::new(0.0, 0.0, 97.0, 50.0);
        assert_eq!(gesture.bound_box(old, new, &config), new);
        assert!(gesture.guides().is_empty());
    }

    #[test]
    fn test_keep_ratio_resize_derives_height() {
        let mut doc = IconDocument::new();
        doc.add_layer(shape("sibling").with_position(150.0, 300.0).with_size(50.0, 10.0));
        let id = doc.add_layer(shape("a").with_size(100.0, 50.0));

        let config = objects_only();
        let mut gesture = TransformGesture::begin(&mut doc, id, &config, true).unwrap();

        let old = BoundingBox::new(0.0, 0.0, 100.0, 50.0);
        let new = BoundingBox::new(0.0, 0.0, 195.0, 60.0);
        let enforced = gesture.bound_box(old, new, &config);
        assert_eq!(enforced, BoundingBox::new(0.0, 0.0, 200.0, 100.0));
    }

    #[test]
    fn test_locked_layer_rejects_transform() {
        let mut doc = IconDocument::new();
        let id = doc.add_layer(shape("a"));
        doc.get_layer_mut(id).unwrap().locked = true;
        assert!(TransformGesture::begin(&mut doc, id, &objects_only(), false).is_err());
    }

    #[test]
    fn test_rotation_snaps_from_config() {
        let config = SnapConfig::default();
        let snaps = TransformGesture::rotation_snaps(&config);
        assert_eq!(snaps.len(), 24);
        assert_eq!(snaps[6], 90.0);

        let config = SnapConfig {
            rotation: false,
            ..config
        };
        assert!(TransformGesture::rotation_snaps(&config).is_empty());
    }
}
