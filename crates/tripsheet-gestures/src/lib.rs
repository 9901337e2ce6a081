//! Pointer input and drag gesture interpretation.

mod drag;
pub mod gesture_constants;
mod types;
mod velocity_tracker;

pub use drag::{DragEvent, DragRelease, DragSession, VerticalDragDetector};
pub use gesture_constants::{DRAG_THRESHOLD, MAX_FLING_VELOCITY};
pub use types::{PointerEvent, PointerEventKind, PointerId, PointerPhase};
pub use velocity_tracker::VelocityTracker1D;

pub mod prelude {
    pub use super::drag::{DragEvent, DragRelease, DragSession, VerticalDragDetector};
    pub use super::types::{PointerEvent, PointerEventKind, PointerId};
}
