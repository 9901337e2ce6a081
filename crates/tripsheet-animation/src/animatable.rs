use std::cell::RefCell;
use std::rc::Rc;

use tripsheet_core::{FrameCallbackRegistration, FrameClock};

use crate::{AnimationType, Lerp, SpringMotion};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnimationEndReason {
    /// The value reached its target.
    Finished,
    /// A newer `animate_to`, `snap_to` or `stop` replaced this animation.
    Interrupted,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationResult {
    pub reason: AnimationEndReason,
    pub end_value: f32,
}

type EndCallback = Box<dyn FnOnce(AnimationResult)>;

/// Frame-driven animated `f32`.
///
/// Cloning shares the same animation. At most one animation runs at a time;
/// starting a new one interrupts the previous one (last write wins).
#[derive(Clone)]
pub struct Animatable {
    inner: Rc<RefCell<AnimatableInner>>,
}

struct AnimatableInner {
    clock: FrameClock,
    value: f32,
    velocity: f32,
    start: f32,
    target: f32,
    animation: AnimationType,
    running: bool,
    start_time_nanos: Option<u64>,
    last_frame_nanos: Option<u64>,
    registration: Option<FrameCallbackRegistration>,
    on_end: Option<EndCallback>,
}

impl AnimatableInner {
    /// Stop the current animation, returning its end callback.
    fn halt(&mut self) -> Option<EndCallback> {
        if let Some(registration) = self.registration.take() {
            registration.cancel();
        }
        self.running = false;
        self.start_time_nanos = None;
        self.last_frame_nanos = None;
        self.on_end.take()
    }

    fn settle(&mut self) {
        self.value = self.target;
        self.start = self.target;
        self.velocity = 0.0;
        self.running = false;
        self.start_time_nanos = None;
        self.last_frame_nanos = None;
    }
}

impl Animatable {
    pub fn new(initial: f32, clock: FrameClock) -> Self {
        Self {
            inner: Rc::new(RefCell::new(AnimatableInner {
                clock,
                value: initial,
                velocity: 0.0,
                start: initial,
                target: initial,
                animation: AnimationType::default(),
                running: false,
                start_time_nanos: None,
                last_frame_nanos: None,
                registration: None,
                on_end: None,
            })),
        }
    }

    pub fn value(&self) -> f32 {
        self.inner.borrow().value
    }

    pub fn velocity(&self) -> f32 {
        self.inner.borrow().velocity
    }

    pub fn target(&self) -> f32 {
        self.inner.borrow().target
    }

    pub fn animation_type(&self) -> AnimationType {
        self.inner.borrow().animation
    }

    pub fn is_running(&self) -> bool {
        self.inner.borrow().running
    }

    pub fn animate_to(&self, target: f32, animation: impl Into<AnimationType>) {
        self.animate_to_then(target, animation, |_| {});
    }

    /// Animate toward `target`, calling `on_end` once when the animation
    /// finishes or is interrupted.
    ///
    /// A running spring keeps its velocity when retargeted, so a stream of
    /// retargets (drag following) stays smooth.
    pub fn animate_to_then(
        &self,
        target: f32,
        animation: impl Into<AnimationType>,
        on_end: impl FnOnce(AnimationResult) + 'static,
    ) {
        let animation = animation.into();
        let (interrupted, end_value) = {
            let mut inner = self.inner.borrow_mut();
            // A retarget mid-flight keeps its frame reference so it does not
            // lose a frame of motion. A fresh start is timed from its first
            // frame, however long the host has been idle.
            let last_frame = if inner.running {
                inner.last_frame_nanos
            } else {
                None
            };
            let interrupted = inner.halt();

            if let AnimationType::Tween(_) = animation {
                inner.velocity = 0.0;
            }
            inner.start = inner.value;
            inner.target = target;
            inner.animation = animation;
            inner.running = true;
            inner.start_time_nanos = last_frame;
            inner.last_frame_nanos = last_frame;
            inner.on_end = Some(Box::new(on_end));
            (interrupted, inner.value)
        };

        Self::schedule_frame(&self.inner);

        if let Some(callback) = interrupted {
            callback(AnimationResult {
                reason: AnimationEndReason::Interrupted,
                end_value,
            });
        }
    }

    /// Jump to `value` without animating. Interrupts any running animation.
    pub fn snap_to(&self, value: f32) {
        let interrupted = {
            let mut inner = self.inner.borrow_mut();
            let interrupted = inner.halt();
            inner.target = value;
            inner.settle();
            interrupted
        };
        if let Some(callback) = interrupted {
            callback(AnimationResult {
                reason: AnimationEndReason::Interrupted,
                end_value: value,
            });
        }
    }

    /// Freeze at the current value. Interrupts any running animation.
    pub fn stop(&self) {
        let (interrupted, end_value) = {
            let mut inner = self.inner.borrow_mut();
            let interrupted = inner.halt();
            inner.target = inner.value;
            inner.settle();
            (interrupted, inner.value)
        };
        if let Some(callback) = interrupted {
            callback(AnimationResult {
                reason: AnimationEndReason::Interrupted,
                end_value,
            });
        }
    }

    fn schedule_frame(this: &Rc<RefCell<AnimatableInner>>) {
        let clock = {
            let inner = this.borrow();
            if inner.registration.is_some() || !inner.running {
                return;
            }
            inner.clock.clone()
        };
        let weak = Rc::downgrade(this);
        let registration = clock.with_frame_nanos(move |time| {
            if let Some(strong) = weak.upgrade() {
                Self::on_frame(&strong, time);
            }
        });
        if !registration.is_active() {
            log::debug!("frame clock is gone; animation will not advance");
        }
        this.borrow_mut().registration = Some(registration);
    }

    fn on_frame(this: &Rc<RefCell<AnimatableInner>>, frame_time_nanos: u64) {
        let finished = {
            let mut inner = this.borrow_mut();
            // This frame's entry has already been drained.
            inner.registration = None;
            if !inner.running {
                return;
            }

            let start_time = *inner.start_time_nanos.get_or_insert(frame_time_nanos);
            let previous_frame = inner.last_frame_nanos.unwrap_or(frame_time_nanos);
            inner.last_frame_nanos = Some(frame_time_nanos);
            let dt = frame_time_nanos.saturating_sub(previous_frame) as f32 / 1_000_000_000.0;

            let done = match inner.animation {
                AnimationType::Tween(spec) => {
                    let elapsed = frame_time_nanos.saturating_sub(start_time);
                    let delay = spec.delay_millis * 1_000_000;
                    if elapsed < delay {
                        false
                    } else {
                        let duration = (spec.duration_millis * 1_000_000).max(1);
                        let linear = ((elapsed - delay) as f32 / duration as f32).clamp(0.0, 1.0);
                        let next = inner.start.lerp(&inner.target, spec.easing.transform(linear));
                        if dt > 0.0 {
                            inner.velocity = (next - inner.value) / dt;
                        }
                        inner.value = next;
                        linear >= 1.0
                    }
                }
                AnimationType::Spring(spec) => {
                    let mut motion = SpringMotion::new(inner.value, inner.velocity);
                    motion.advance(inner.target, &spec, dt);
                    // Far from zero a substep can be smaller than the gap
                    // between adjacent f32 values; the spring stops moving
                    // short of its target and would never come to rest.
                    let stalled = motion.value == inner.value;
                    inner.value = motion.value;
                    inner.velocity = motion.velocity;
                    if dt > 0.0 && stalled && !motion.is_at_rest(inner.target, &spec) {
                        log::debug!(
                            "spring stalled {} short of {}; settling",
                            (inner.target - inner.value).abs(),
                            inner.target
                        );
                    }
                    dt > 0.0 && (stalled || motion.is_at_rest(inner.target, &spec))
                }
            };

            if done {
                inner.settle();
                inner.on_end.take().map(|callback| (callback, inner.value))
            } else {
                None
            }
        };

        match finished {
            Some((callback, end_value)) => callback(AnimationResult {
                reason: AnimationEndReason::Finished,
                end_value,
            }),
            None => Self::schedule_frame(this),
        }
    }
}

#[cfg(test)]
#[path = "tests/animation_tests.rs"]
mod tests;
