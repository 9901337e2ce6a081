use crate::SpringSpec;

/// Integration step. Small enough that semi-implicit Euler stays stable for
/// heavily over-damped sheet springs (damping coefficient up to ~1000).
const SUBSTEP_SECONDS: f32 = 0.001;

/// Position and velocity of a value moving under a spring.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SpringMotion {
    pub value: f32,
    /// Units per second.
    pub velocity: f32,
}

impl SpringMotion {
    pub fn new(value: f32, velocity: f32) -> Self {
        Self { value, velocity }
    }

    /// Advance the motion by `dt_seconds` toward `target`.
    pub fn advance(&mut self, target: f32, spec: &SpringSpec, dt_seconds: f32) {
        if dt_seconds <= 0.0 {
            return;
        }
        let stiffness = spec.stiffness;
        let damping = spec.damping_coefficient();

        let mut remaining = dt_seconds;
        while remaining > 0.0 {
            let step = remaining.min(SUBSTEP_SECONDS);
            let displacement = self.value - target;
            let acceleration = -stiffness * displacement - damping * self.velocity;
            self.velocity += acceleration * step;
            self.value += self.velocity * step;
            remaining -= step;
        }
    }

    pub fn is_at_rest(&self, target: f32, spec: &SpringSpec) -> bool {
        self.velocity.abs() < spec.velocity_threshold
            && (self.value - target).abs() < spec.position_threshold
    }
}
