//! Shared gesture thresholds, in logical pixels.

/// Touch slop. A press must travel further than this along the drag axis
/// before it becomes a drag; smaller movements stay a tap.
pub const DRAG_THRESHOLD: f32 = 8.0;

/// Release velocities are capped to this magnitude, in pixels per second.
pub const MAX_FLING_VELOCITY: f32 = 8_000.0;
