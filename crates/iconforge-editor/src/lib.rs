//! IconForge editor interaction layer.
//!
//! Gesture controllers that feed pointer motion through the core snapping
//! engine and write corrected geometry back onto the document. Guides held
//! by a gesture are transient overlay state: rebuilt on every pointer-move
//! and dropped when the gesture ends.

mod drag;
mod transform;

pub use drag::DragGesture;
pub use transform::{MIN_SIZE, TransformGesture};

use iconforge_core::{IconDocument, LayerId};
use thiserror::Error;

/// Errors raised when a gesture cannot start.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GestureError {
    #[error("layer not found: {0}")]
    LayerNotFound(LayerId),
    #[error("layer is locked: {0}")]
    LayerLocked(LayerId),
    #[error("layer is hidden: {0}")]
    LayerHidden(LayerId),
}

/// Result type for gesture operations.
pub type GestureResult<T> = Result<T, GestureError>;

pub(crate) fn check_interactive(doc: &IconDocument, id: LayerId) -> GestureResult<()> {
    let layer = doc.get_layer(id).ok_or(GestureError::LayerNotFound(id))?;
    if !layer.visible {
        return Err(GestureError::LayerHidden(id));
    }
    if layer.locked {
        return Err(GestureError::LayerLocked(id));
    }
    Ok(())
}
