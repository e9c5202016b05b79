//! Drag gesture controller.

use crate::{GestureResult, check_interactive};
use iconforge_core::snap::resolve_translation;
use iconforge_core::{Guide, IconDocument, LayerId, SnapConfig};
use kurbo::Point;

/// An in-progress drag of a single layer.
///
/// One controller lives for the duration of a pointer drag: `begin` on
/// pointer-down, `update` on every pointer-move, `finish` on pointer-up.
/// The pre-gesture document state is snapshotted once at `begin`, so the
/// whole drag undoes in a single step.
#[derive(Debug)]
pub struct DragGesture {
    layer: LayerId,
    guides: Vec<Guide>,
}

impl DragGesture {
    /// Start dragging a layer. Hidden and locked layers reject the gesture;
    /// locked layers still act as snap sources for other drags.
    pub fn begin(doc: &mut IconDocument, layer: LayerId) -> GestureResult<Self> {
        check_interactive(doc, layer)?;
        doc.push_undo();
        log::debug!("drag begin: {layer}");
        Ok(Self {
            layer,
            guides: Vec::new(),
        })
    }

    /// Feed one pointer-move: place the layer at the requested native
    /// position, resolve snapping against visible siblings, the canvas, and
    /// the grid, and write the corrected position back. Replaces the guide
    /// list outright.
    pub fn update(&mut self, doc: &mut IconDocument, to: Point, config: &SnapConfig) {
        let canvas = doc.canvas.size();
        let siblings = doc.snap_sources(self.layer);
        let Some(layer) = doc.get_layer_mut(self.layer) else {
            return;
        };
        layer.x = to.x;
        layer.y = to.y;

        let snap = resolve_translation(&layer.bounds(), &siblings, canvas, config);
        let pos = layer.position_for_origin(Point::new(snap.x, snap.y));
        layer.x = pos.x;
        layer.y = pos.y;
        self.guides = snap.guides;
    }

    /// Guides to render for the current frame.
    pub fn guides(&self) -> &[Guide] {
        &self.guides
    }

    /// End the gesture, dropping its guides.
    pub fn finish(self) {
        log::debug!("drag end: {}", self.layer);
    }
}
