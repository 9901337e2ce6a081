use crate::Easing;

/// Tween specification: duration, easing and start delay.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationSpec {
    pub duration_millis: u64,
    pub easing: Easing,
    pub delay_millis: u64,
}

impl AnimationSpec {
    pub fn tween(duration_millis: u64, easing: Easing) -> Self {
        Self {
            duration_millis,
            easing,
            delay_millis: 0,
        }
    }

    pub fn linear(duration_millis: u64) -> Self {
        Self::tween(duration_millis, Easing::Linear)
    }

    pub fn with_delay(mut self, delay_millis: u64) -> Self {
        self.delay_millis = delay_millis;
        self
    }
}

impl Default for AnimationSpec {
    /// 300 ms quadratic in-out.
    fn default() -> Self {
        Self::tween(300, Easing::EaseInOutQuad)
    }
}

/// Damped spring with unit mass.
///
/// Thresholds are in value units (pixels for sheet offsets) and pixels per
/// second respectively.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpringSpec {
    /// 1.0 is critically damped, below bounces, above creeps.
    pub damping_ratio: f32,
    pub stiffness: f32,
    pub velocity_threshold: f32,
    pub position_threshold: f32,
}

impl SpringSpec {
    pub const DEFAULT_POSITION_THRESHOLD: f32 = 0.01;
    pub const DEFAULT_VELOCITY_THRESHOLD: f32 = 2.0;

    pub fn new(damping_ratio: f32, stiffness: f32) -> Self {
        Self {
            damping_ratio,
            stiffness,
            velocity_threshold: Self::DEFAULT_VELOCITY_THRESHOLD,
            position_threshold: Self::DEFAULT_POSITION_THRESHOLD,
        }
    }

    /// Build a spring from a raw damping coefficient, as mobile animation
    /// libraries configure them (`damping: 100, stiffness: 400`).
    pub fn from_damping(damping: f32, stiffness: f32) -> Self {
        let critical = 2.0 * stiffness.max(f32::EPSILON).sqrt();
        Self::new(damping / critical, stiffness)
    }

    pub fn bouncy() -> Self {
        Self::new(0.5, 1500.0)
    }

    pub fn stiff() -> Self {
        Self::new(1.0, 3000.0)
    }

    pub fn with_thresholds(mut self, position_threshold: f32, velocity_threshold: f32) -> Self {
        self.position_threshold = position_threshold;
        self.velocity_threshold = velocity_threshold;
        self
    }

    /// Damping coefficient `c` in `x'' = -k (x - target) - c x'`.
    pub fn damping_coefficient(&self) -> f32 {
        2.0 * self.damping_ratio * self.stiffness.sqrt()
    }
}

impl Default for SpringSpec {
    fn default() -> Self {
        Self::new(1.0, 1500.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AnimationType {
    Tween(AnimationSpec),
    Spring(SpringSpec),
}

impl Default for AnimationType {
    fn default() -> Self {
        AnimationType::Tween(AnimationSpec::default())
    }
}

impl From<AnimationSpec> for AnimationType {
    fn from(spec: AnimationSpec) -> Self {
        AnimationType::Tween(spec)
    }
}

impl From<SpringSpec> for AnimationType {
    fn from(spec: SpringSpec) -> Self {
        AnimationType::Spring(spec)
    }
}
