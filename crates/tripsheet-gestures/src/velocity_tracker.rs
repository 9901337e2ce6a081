//! 1-D velocity estimation from pointer samples, impulse strategy.
//!
//! Velocity is derived from the kinetic energy the samples impart
//! (E = v² / 2 with unit mass), which weights recent motion without the
//! jitter of a plain last-two-samples slope.

use std::collections::VecDeque;

const HISTORY_SIZE: usize = 20;

/// Only samples this recent relative to the newest one are used.
const HORIZON_MS: i64 = 100;

/// A gap longer than this between consecutive samples means the pointer
/// stopped; older samples are ignored.
pub const ASSUME_STOPPED_MS: i64 = 40;

#[derive(Clone, Copy, Debug)]
struct Sample {
    time_ms: i64,
    position: f32,
}

#[derive(Clone, Debug, Default)]
pub struct VelocityTracker1D {
    samples: VecDeque<Sample>,
}

impl VelocityTracker1D {
    pub fn new() -> Self {
        Self {
            samples: VecDeque::with_capacity(HISTORY_SIZE),
        }
    }

    /// Record an absolute position at `time_ms`.
    pub fn add_data_point(&mut self, time_ms: i64, position: f32) {
        if self.samples.len() == HISTORY_SIZE {
            self.samples.pop_front();
        }
        self.samples.push_back(Sample { time_ms, position });
    }

    /// Velocity in units per second; 0.0 with fewer than two usable samples.
    pub fn calculate_velocity(&self) -> f32 {
        let Some(newest) = self.samples.back().copied() else {
            return 0.0;
        };

        // Walk back from the newest sample until the window or a pause ends it.
        let mut window: Vec<Sample> = Vec::with_capacity(self.samples.len());
        let mut later = newest;
        for sample in self.samples.iter().rev() {
            let age = newest.time_ms - sample.time_ms;
            let gap = later.time_ms - sample.time_ms;
            if age > HORIZON_MS || gap > ASSUME_STOPPED_MS {
                break;
            }
            window.push(*sample);
            later = *sample;
        }
        window.reverse();

        if window.len() < 2 {
            return 0.0;
        }

        let mut work = 0.0f32;
        for (index, pair) in window.windows(2).enumerate() {
            let dt = (pair[1].time_ms - pair[0].time_ms) as f32;
            if dt == 0.0 {
                continue;
            }
            let v_curr = (pair[1].position - pair[0].position) / dt;
            let v_prev = kinetic_energy_to_velocity(work);
            work += (v_curr - v_prev) * v_curr.abs();
            if index == 0 {
                work *= 0.5;
            }
        }

        kinetic_energy_to_velocity(work) * 1000.0
    }

    /// Velocity clamped to `[-max_velocity, max_velocity]`.
    pub fn calculate_velocity_with_max(&self, max_velocity: f32) -> f32 {
        if !max_velocity.is_finite() || max_velocity <= 0.0 {
            return 0.0;
        }
        let velocity = self.calculate_velocity();
        if velocity.is_nan() {
            return 0.0;
        }
        velocity.clamp(-max_velocity, max_velocity)
    }

    pub fn reset(&mut self) {
        self.samples.clear();
    }
}

#[inline]
fn kinetic_energy_to_velocity(kinetic_energy: f32) -> f32 {
    kinetic_energy.signum() * (2.0 * kinetic_energy.abs()).sqrt()
}

#[cfg(test)]
#[path = "tests/velocity_tracker_tests.rs"]
mod tests;
