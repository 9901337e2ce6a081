//! Animation system for Tripsheet.
//!
//! Provides time-based tweens with easing curves and spring physics, driven
//! by the frame clock from `tripsheet-core`.

mod animatable;
mod easing;
mod spec;
mod spring;

pub use animatable::{Animatable, AnimationEndReason, AnimationResult};
pub use easing::Easing;
pub use spec::{AnimationSpec, AnimationType, SpringSpec};
pub use spring::SpringMotion;

/// Trait for types that can be linearly interpolated.
pub trait Lerp {
    fn lerp(&self, target: &Self, fraction: f32) -> Self;
}

impl Lerp for f32 {
    fn lerp(&self, target: &Self, fraction: f32) -> Self {
        self + (target - self) * fraction
    }
}

impl Lerp for f64 {
    fn lerp(&self, target: &Self, fraction: f32) -> Self {
        self + (target - self) * fraction as f64
    }
}
