//! Assertion helpers for sheet tests.

/// Assert that `actual` is within `tolerance` of `expected`.
pub fn assert_approx_eq(actual: f32, expected: f32, tolerance: f32, msg: &str) {
    let diff = (actual - expected).abs();
    assert!(
        diff <= tolerance,
        "{}: expected {} (±{}), got {} (diff: {})",
        msg,
        expected,
        tolerance,
        actual,
        diff
    );
}

/// Assert that a series never increases (`increasing = false`) or never
/// decreases (`increasing = true`).
pub fn assert_monotonic(values: &[f32], increasing: bool, msg: &str) {
    for (index, pair) in values.windows(2).enumerate() {
        let ok = if increasing {
            pair[1] >= pair[0]
        } else {
            pair[1] <= pair[0]
        };
        assert!(
            ok,
            "{}: not monotonic at {}: {} then {}",
            msg,
            index,
            pair[0],
            pair[1]
        );
    }
}
