use super::*;

use crate::{AnimationSpec, Easing, SpringSpec};
use std::cell::RefCell;
use std::rc::Rc;
use tripsheet_core::{Runtime, FRAME_NANOS_60HZ};

fn pump(runtime: &Runtime, frame_time: &mut u64, frames: usize) {
    for _ in 0..frames {
        if !runtime.has_frame_callbacks() {
            break;
        }
        *frame_time += FRAME_NANOS_60HZ;
        runtime.drain_frame_callbacks(*frame_time);
    }
}

fn record_end(results: &Rc<RefCell<Vec<AnimationResult>>>) -> impl FnOnce(AnimationResult) {
    let results = Rc::clone(results);
    move |result| results.borrow_mut().push(result)
}

#[test]
fn tween_interpolates_and_ends_on_target() {
    let runtime = Runtime::new();
    let animatable = Animatable::new(0.0, runtime.frame_clock());
    let results = Rc::new(RefCell::new(Vec::new()));

    animatable.animate_to_then(
        100.0,
        AnimationSpec::linear(160),
        record_end(&results),
    );
    assert!(animatable.is_running());
    assert_eq!(animatable.value(), 0.0);

    let mut frame_time = 0;
    let mut saw_midpoint = false;
    for _ in 0..32 {
        pump(&runtime, &mut frame_time, 1);
        let value = animatable.value();
        if value > 0.0 && value < 100.0 {
            saw_midpoint = true;
        }
    }

    assert!(saw_midpoint, "tween should report intermediate values");
    assert_eq!(animatable.value(), 100.0);
    assert!(!animatable.is_running());
    assert_eq!(
        results.borrow().as_slice(),
        &[AnimationResult {
            reason: AnimationEndReason::Finished,
            end_value: 100.0,
        }]
    );
}

#[test]
fn tween_respects_delay() {
    let runtime = Runtime::new();
    runtime.drain_frame_callbacks(0);
    let animatable = Animatable::new(0.0, runtime.frame_clock());
    animatable.animate_to(10.0, AnimationSpec::linear(100).with_delay(100));

    let mut frame_time = 0;
    pump(&runtime, &mut frame_time, 5);
    assert_eq!(animatable.value(), 0.0, "still inside the delay window");
    pump(&runtime, &mut frame_time, 30);
    assert_eq!(animatable.value(), 10.0);
}

#[test]
fn over_damped_spring_settles_without_overshoot() {
    let runtime = Runtime::new();
    let animatable = Animatable::new(700.0, runtime.frame_clock());
    let spec = SpringSpec::from_damping(100.0, 400.0);
    assert!(spec.damping_ratio > 1.0);

    animatable.animate_to(0.0, spec);
    let mut frame_time = 0;
    let mut min_seen = f32::MAX;
    for _ in 0..1_000 {
        if !animatable.is_running() {
            break;
        }
        pump(&runtime, &mut frame_time, 1);
        min_seen = min_seen.min(animatable.value());
    }

    assert!(!animatable.is_running());
    assert_eq!(animatable.value(), 0.0);
    assert!(min_seen >= 0.0, "over-damped spring overshot to {min_seen}");
}

#[test]
fn bouncy_spring_overshoots_then_settles() {
    let runtime = Runtime::new();
    let animatable = Animatable::new(0.0, runtime.frame_clock());
    animatable.animate_to(100.0, SpringSpec::bouncy());

    let mut frame_time = 0;
    let mut max_seen = f32::MIN;
    for _ in 0..1_000 {
        if !animatable.is_running() {
            break;
        }
        pump(&runtime, &mut frame_time, 1);
        max_seen = max_seen.max(animatable.value());
    }
    assert!(max_seen > 100.0);
    assert_eq!(animatable.value(), 100.0);
}

#[test]
fn new_target_interrupts_previous_animation() {
    let runtime = Runtime::new();
    let animatable = Animatable::new(0.0, runtime.frame_clock());
    let results = Rc::new(RefCell::new(Vec::new()));

    animatable.animate_to_then(100.0, AnimationSpec::linear(300), record_end(&results));
    let mut frame_time = 0;
    pump(&runtime, &mut frame_time, 3);
    let interrupted_at = animatable.value();

    animatable.animate_to_then(0.0, AnimationSpec::linear(300), record_end(&results));
    pump(&runtime, &mut frame_time, 60);

    let results = results.borrow();
    assert_eq!(results.len(), 2);
    assert_eq!(results[0].reason, AnimationEndReason::Interrupted);
    assert_eq!(results[0].end_value, interrupted_at);
    assert_eq!(results[1].reason, AnimationEndReason::Finished);
    assert_eq!(animatable.value(), 0.0);
}

#[test]
fn snap_to_interrupts_and_jumps() {
    let runtime = Runtime::new();
    let animatable = Animatable::new(0.0, runtime.frame_clock());
    let results = Rc::new(RefCell::new(Vec::new()));

    animatable.animate_to_then(50.0, SpringSpec::default(), record_end(&results));
    animatable.snap_to(25.0);

    assert_eq!(animatable.value(), 25.0);
    assert_eq!(animatable.target(), 25.0);
    assert!(!animatable.is_running());
    assert!(!runtime.has_frame_callbacks());
    assert_eq!(results.borrow()[0].reason, AnimationEndReason::Interrupted);
}

#[test]
fn retargeting_spring_keeps_velocity() {
    let runtime = Runtime::new();
    let animatable = Animatable::new(0.0, runtime.frame_clock());
    let spec = SpringSpec::from_damping(100.0, 400.0);

    animatable.animate_to(200.0, spec);
    let mut frame_time = 0;
    pump(&runtime, &mut frame_time, 4);
    let velocity = animatable.velocity();
    assert!(velocity > 0.0);

    animatable.animate_to(220.0, spec);
    assert_eq!(animatable.velocity(), velocity);
}

#[test]
fn stop_freezes_value() {
    let runtime = Runtime::new();
    let animatable = Animatable::new(0.0, runtime.frame_clock());
    animatable.animate_to(100.0, AnimationSpec::linear(300));
    let mut frame_time = 0;
    pump(&runtime, &mut frame_time, 4);
    let frozen = animatable.value();

    animatable.stop();
    pump(&runtime, &mut frame_time, 10);
    assert_eq!(animatable.value(), frozen);
    assert_eq!(animatable.target(), frozen);
}

#[test]
fn easing_bounds_are_correct() {
    let easings = [
        Easing::Linear,
        Easing::EaseIn,
        Easing::EaseOut,
        Easing::EaseInOut,
        Easing::EaseInOutQuad,
        Easing::FastOutSlowIn,
    ];

    for easing in easings {
        assert!(easing.transform(0.0).abs() < 0.01, "start of {:?}", easing);
        assert!((easing.transform(1.0) - 1.0).abs() < 0.01, "end of {:?}", easing);
        assert!(easing.transform(0.25) <= easing.transform(0.75), "{:?}", easing);
    }
}

#[test]
fn quad_in_out_is_symmetric() {
    let easing = Easing::EaseInOutQuad;
    assert_eq!(easing.transform(0.5), 0.5);
    let low = easing.transform(0.2);
    let high = easing.transform(0.8);
    assert!((low + high - 1.0).abs() < 1e-5);
}

#[test]
fn spring_from_damping_converts_to_ratio() {
    let spec = SpringSpec::from_damping(100.0, 400.0);
    assert!((spec.damping_ratio - 2.5).abs() < 1e-5);
    assert!((spec.damping_coefficient() - 100.0).abs() < 1e-3);
}

#[test]
fn animation_spec_default_is_quad_tween() {
    let spec = AnimationSpec::default();
    assert_eq!(spec.duration_millis, 300);
    assert_eq!(spec.easing, Easing::EaseInOutQuad);
    assert_eq!(spec.delay_millis, 0);
}

#[test]
fn start_after_idle_host_is_timed_from_its_first_frame() {
    let runtime = Runtime::new();
    runtime.drain_frame_callbacks(FRAME_NANOS_60HZ);
    let tween = Animatable::new(700.0, runtime.frame_clock());
    let spring = Animatable::new(700.0, runtime.frame_clock());

    // The host draws nothing for ten seconds, then the sheet starts moving.
    tween.animate_to(0.0, AnimationSpec::default());
    spring.animate_to(0.0, SpringSpec::from_damping(100.0, 400.0));
    let mut frame_time = 10_000_000_000 + FRAME_NANOS_60HZ;
    runtime.drain_frame_callbacks(frame_time);
    assert_eq!(tween.value(), 700.0);
    assert_eq!(spring.value(), 700.0);

    pump(&runtime, &mut frame_time, 1);
    assert!(tween.is_running());
    assert!(spring.is_running());
    assert!(tween.value() > 0.0 && tween.value() < 700.0, "tween at {}", tween.value());
    assert!(spring.value() > 0.0 && spring.value() < 700.0, "spring at {}", spring.value());
}

#[test]
fn retarget_keeps_frame_reference_of_running_animation() {
    let runtime = Runtime::new();
    let animatable = Animatable::new(0.0, runtime.frame_clock());
    animatable.animate_to(100.0, AnimationSpec::linear(160));
    let mut frame_time = 0;
    pump(&runtime, &mut frame_time, 3);
    let before = animatable.value();

    animatable.animate_to(200.0, AnimationSpec::linear(160));
    pump(&runtime, &mut frame_time, 1);
    assert!(animatable.value() > before);
}

#[test]
fn spring_far_from_zero_settles_on_target() {
    let runtime = Runtime::new();
    let animatable = Animatable::new(200.0, runtime.frame_clock());
    let results = Rc::new(RefCell::new(Vec::new()));
    animatable.animate_to_then(
        100_000_000.0,
        SpringSpec::from_damping(100.0, 400.0),
        record_end(&results),
    );

    let mut frame_time = 0;
    pump(&runtime, &mut frame_time, 3_600);
    assert!(!animatable.is_running());
    assert_eq!(animatable.value(), 100_000_000.0);
    assert_eq!(results.borrow()[0].reason, AnimationEndReason::Finished);
}

#[test]
fn animation_type_follows_last_request() {
    let runtime = Runtime::new();
    let animatable = Animatable::new(0.0, runtime.frame_clock());
    let spring = SpringSpec::stiff();
    animatable.animate_to(10.0, spring);
    assert_eq!(animatable.animation_type(), AnimationType::Spring(spring));

    let tween = AnimationSpec::linear(100);
    animatable.animate_to(20.0, tween);
    assert_eq!(animatable.animation_type(), AnimationType::Tween(tween));
}
