use super::*;

#[test]
fn empty_and_single_sample_are_zero() {
    let mut tracker = VelocityTracker1D::new();
    assert_eq!(tracker.calculate_velocity(), 0.0);
    tracker.add_data_point(0, 100.0);
    assert_eq!(tracker.calculate_velocity(), 0.0);
}

#[test]
fn constant_motion_reports_its_speed() {
    let mut tracker = VelocityTracker1D::new();
    // 100 px every 10 ms.
    for step in 0..4 {
        tracker.add_data_point(step * 10, step as f32 * 100.0);
    }
    let velocity = tracker.calculate_velocity();
    assert!(
        (velocity - 10_000.0).abs() < 1.0,
        "expected ~10000, got {velocity}"
    );
}

#[test]
fn upward_motion_is_negative() {
    let mut tracker = VelocityTracker1D::new();
    tracker.add_data_point(0, 300.0);
    tracker.add_data_point(10, 200.0);
    tracker.add_data_point(20, 100.0);
    assert!(tracker.calculate_velocity() < 0.0);
}

#[test]
fn velocity_is_capped() {
    let mut tracker = VelocityTracker1D::new();
    tracker.add_data_point(0, 0.0);
    tracker.add_data_point(1, 10_000.0);
    assert_eq!(tracker.calculate_velocity_with_max(8_000.0), 8_000.0);

    tracker.reset();
    tracker.add_data_point(0, 10_000.0);
    tracker.add_data_point(1, 0.0);
    assert_eq!(tracker.calculate_velocity_with_max(8_000.0), -8_000.0);
    assert_eq!(tracker.calculate_velocity_with_max(f32::NAN), 0.0);
}

#[test]
fn pause_before_release_means_no_velocity() {
    let mut tracker = VelocityTracker1D::new();
    tracker.add_data_point(0, 0.0);
    tracker.add_data_point(10, 50.0);
    tracker.add_data_point(10 + ASSUME_STOPPED_MS + 1, 60.0);
    assert_eq!(tracker.calculate_velocity(), 0.0);
}

#[test]
fn samples_outside_horizon_are_ignored() {
    let mut tracker = VelocityTracker1D::new();
    tracker.add_data_point(0, 5_000.0);
    for step in 0..5 {
        let time = 150 + step * 30;
        tracker.add_data_point(time, step as f32 * 30.0);
    }
    // 30 px per 30 ms over the recent window, regardless of the stale jump.
    let velocity = tracker.calculate_velocity();
    assert!((velocity - 1_000.0).abs() < 1.0, "got {velocity}");
}

#[test]
fn history_is_bounded() {
    let mut tracker = VelocityTracker1D::new();
    for step in 0..100 {
        tracker.add_data_point(step, step as f32);
    }
    assert!(tracker.samples.len() <= 20);
    assert!((tracker.calculate_velocity() - 1_000.0).abs() < 1.0);
}
