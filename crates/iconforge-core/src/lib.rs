//! IconForge Core Library
//!
//! Platform-agnostic layer model and snapping engine for the IconForge icon studio.

pub mod canvas;
pub mod geometry;
pub mod layer;
pub mod snap;

pub use canvas::{CanvasConfig, DocumentError, IconDocument};
pub use geometry::{Axis, BoundingBox, EdgeRole, Span};
pub use layer::{Fill, Layer, LayerId, LayerKind, SerializableColor};
pub use snap::{
    CandidateStops, Guide, Orientation, ResizeSnap, SnapConfig, TranslationSnap, collect_stops,
    resolve_resize, resolve_translation, rotation_snap_angles,
};
