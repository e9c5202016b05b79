//! Canvas document and state management.

use crate::geometry::BoundingBox;
use crate::layer::{Fill, Layer, LayerId, SerializableColor};
use kurbo::{Point, Size};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use thiserror::Error;
use uuid::Uuid;

/// Maximum number of undo states to keep.
const MAX_UNDO_HISTORY: usize = 50;

/// Document errors.
#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Canvas geometry and background configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CanvasConfig {
    pub width: f64,
    pub height: f64,
    pub background: Fill,
    pub corner_radius: f64,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            width: 1024.0,
            height: 1024.0,
            background: Fill::Solid(SerializableColor::white()),
            corner_radius: 0.0,
        }
    }
}

impl CanvasConfig {
    /// Canvas dimensions as a size.
    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Center point of the canvas.
    pub fn center(&self) -> Point {
        Point::new(self.width / 2.0, self.height / 2.0)
    }
}

/// A snapshot of document state for undo/redo.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct DocumentSnapshot {
    layers: HashMap<LayerId, Layer>,
    z_order: Vec<LayerId>,
    canvas: CanvasConfig,
}

/// An icon document: all layers, z-order, selection, and canvas settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IconDocument {
    /// Unique document identifier.
    pub id: String,
    /// Document name.
    pub name: String,
    /// All layers in the document, keyed by ID.
    pub layers: HashMap<LayerId, Layer>,
    /// Z-order of layers (back to front).
    pub z_order: Vec<LayerId>,
    /// Canvas configuration.
    pub canvas: CanvasConfig,
    /// Currently selected layer, if any.
    #[serde(skip)]
    selected: Option<LayerId>,
    /// Undo history stack.
    #[serde(skip)]
    undo_stack: Vec<DocumentSnapshot>,
    /// Redo history stack.
    #[serde(skip)]
    redo_stack: Vec<DocumentSnapshot>,
}

impl Default for IconDocument {
    fn default() -> Self {
        Self::new()
    }
}

impl IconDocument {
    /// Create a new empty document with the default canvas.
    pub fn new() -> Self {
        Self::with_canvas(CanvasConfig::default())
    }

    /// Create a new empty document with the given canvas configuration.
    pub fn with_canvas(canvas: CanvasConfig) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: "Untitled".to_string(),
            layers: HashMap::new(),
            z_order: Vec::new(),
            canvas,
            selected: None,
            undo_stack: Vec::new(),
            redo_stack: Vec::new(),
        }
    }

    fn snapshot(&self) -> DocumentSnapshot {
        DocumentSnapshot {
            layers: self.layers.clone(),
            z_order: self.z_order.clone(),
            canvas: self.canvas.clone(),
        }
    }

    /// Push current state to the undo stack (call before making changes).
    /// One entry per completed gesture or discrete operation, never per
    /// intermediate interaction frame.
    pub fn push_undo(&mut self) {
        let snapshot = self.snapshot();
        self.undo_stack.push(snapshot);

        // New changes invalidate the redo stack
        self.redo_stack.clear();

        if self.undo_stack.len() > MAX_UNDO_HISTORY {
            self.undo_stack.remove(0);
        }
    }

    /// Undo the last change. Returns true if undo was performed.
    pub fn undo(&mut self) -> bool {
        if let Some(snapshot) = self.undo_stack.pop() {
            let current = self.snapshot();
            self.redo_stack.push(current);

            self.layers = snapshot.layers;
            self.z_order = snapshot.z_order;
            self.canvas = snapshot.canvas;
            self.selected = None;

            true
        } else {
            false
        }
    }

    /// Redo the last undone change. Returns true if redo was performed.
    pub fn redo(&mut self) -> bool {
        if let Some(snapshot) = self.redo_stack.pop() {
            let current = self.snapshot();
            self.undo_stack.push(current);

            self.layers = snapshot.layers;
            self.z_order = snapshot.z_order;
            self.canvas = snapshot.canvas;
            self.selected = None;

            true
        } else {
            false
        }
    }

    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    /// Add a layer on top of the stack and select it.
    pub fn add_layer(&mut self, layer: Layer) -> LayerId {
        self.push_undo();
        let id = layer.id;
        self.z_order.push(id);
        self.layers.insert(id, layer);
        self.selected = Some(id);
        id
    }

    /// Remove a layer from the document.
    pub fn remove_layer(&mut self, id: LayerId) -> Option<Layer> {
        if !self.layers.contains_key(&id) {
            return None;
        }
        self.push_undo();
        self.z_order.retain(|&layer_id| layer_id != id);
        if self.selected == Some(id) {
            self.selected = None;
        }
        self.layers.remove(&id)
    }

    /// Get a layer by ID.
    pub fn get_layer(&self, id: LayerId) -> Option<&Layer> {
        self.layers.get(&id)
    }

    /// Get a mutable reference to a layer by ID.
    pub fn get_layer_mut(&mut self, id: LayerId) -> Option<&mut Layer> {
        self.layers.get_mut(&id)
    }

    /// Layers in z-order (back to front).
    pub fn layers_ordered(&self) -> impl Iterator<Item = &Layer> {
        self.z_order.iter().filter_map(|id| self.layers.get(id))
    }

    /// Select a layer (or clear the selection with `None`).
    pub fn select_layer(&mut self, id: Option<LayerId>) {
        self.selected = id.filter(|id| self.layers.contains_key(id));
    }

    pub fn selected_layer(&self) -> Option<LayerId> {
        self.selected
    }

    /// Bring a layer to the front (topmost).
    pub fn bring_to_front(&mut self, id: LayerId) {
        self.push_undo();
        self.z_order.retain(|&layer_id| layer_id != id);
        self.z_order.push(id);
    }

    /// Send a layer to the back (bottommost).
    pub fn send_to_back(&mut self, id: LayerId) {
        self.push_undo();
        self.z_order.retain(|&layer_id| layer_id != id);
        self.z_order.insert(0, id);
    }

    /// Move a layer one step towards the front. Returns true if it moved.
    pub fn bring_forward(&mut self, id: LayerId) -> bool {
        if let Some(pos) = self.z_order.iter().position(|&layer_id| layer_id == id) {
            if pos < self.z_order.len() - 1 {
                self.push_undo();
                self.z_order.swap(pos, pos + 1);
                return true;
            }
        }
        false
    }

    /// Move a layer one step towards the back. Returns true if it moved.
    pub fn send_backward(&mut self, id: LayerId) -> bool {
        if let Some(pos) = self.z_order.iter().position(|&layer_id| layer_id == id) {
            if pos > 0 {
                self.push_undo();
                self.z_order.swap(pos, pos - 1);
                return true;
            }
        }
        false
    }

    /// Move the selected layer so its bounds center on the canvas center.
    /// Returns true if a layer was moved.
    pub fn center_selection(&mut self) -> bool {
        let Some(id) = self.selected else {
            return false;
        };
        let Some(bounds) = self.layers.get(&id).map(|layer| layer.bounds()) else {
            return false;
        };
        self.push_undo();
        let center = self.canvas.center();
        let origin = Point::new(center.x - bounds.width / 2.0, center.y - bounds.height / 2.0);
        if let Some(layer) = self.layers.get_mut(&id) {
            let pos = layer.position_for_origin(origin);
            layer.x = pos.x;
            layer.y = pos.y;
        }
        true
    }

    /// Bounding boxes of every visible layer other than `exclude`, in
    /// z-order. Locked layers still act as snap sources; they are only
    /// excluded from being dragged themselves.
    pub fn snap_sources(&self, exclude: LayerId) -> Vec<BoundingBox> {
        self.z_order
            .iter()
            .filter(|&&id| id != exclude)
            .filter_map(|id| self.layers.get(id))
            .filter(|layer| layer.visible)
            .map(|layer| layer.bounds())
            .collect()
    }

    /// Check if the document is empty.
    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }

    /// Number of layers.
    pub fn len(&self) -> usize {
        self.layers.len()
    }

    /// Serialize the document to JSON.
    pub fn to_json(&self) -> Result<String, DocumentError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Deserialize a document from JSON.
    pub fn from_json(json: &str) -> Result<Self, DocumentError> {
        Ok(serde_json::from_str(json)?)
    }
}
