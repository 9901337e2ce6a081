/// Easing curves for tween animations.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Easing {
    Linear,
    EaseIn,
    EaseOut,
    EaseInOut,
    /// Quadratic in-out, the default curve of timing-based sheet transitions.
    EaseInOutQuad,
    /// Material standard curve.
    FastOutSlowIn,
}

impl Easing {
    /// Map a linear fraction in [0, 1] onto the curve.
    pub fn transform(&self, fraction: f32) -> f32 {
        let t = fraction.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::EaseIn => cubic_bezier(0.42, 0.0, 1.0, 1.0, t),
            Easing::EaseOut => cubic_bezier(0.0, 0.0, 0.58, 1.0, t),
            Easing::EaseInOut => cubic_bezier(0.42, 0.0, 0.58, 1.0, t),
            Easing::EaseInOutQuad => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
                }
            }
            Easing::FastOutSlowIn => cubic_bezier(0.4, 0.0, 0.2, 1.0, t),
        }
    }
}

/// Evaluate a CSS-style cubic bezier at horizontal position `x`.
///
/// Control points are (x1, y1) and (x2, y2); the end points are fixed at
/// (0, 0) and (1, 1). With x1, x2 in [0, 1] the x component is monotonic,
/// so bisection on the curve parameter always converges.
fn cubic_bezier(x1: f32, y1: f32, x2: f32, y2: f32, x: f32) -> f32 {
    if x <= 0.0 {
        return 0.0;
    }
    if x >= 1.0 {
        return 1.0;
    }

    let component = |p1: f32, p2: f32, t: f32| {
        let u = 1.0 - t;
        3.0 * u * u * t * p1 + 3.0 * u * t * t * p2 + t * t * t
    };

    let (mut low, mut high) = (0.0f32, 1.0f32);
    let mut t = x;
    for _ in 0..32 {
        let estimate = component(x1, x2, t);
        if (estimate - x).abs() < 1e-6 {
            break;
        }
        if estimate > x {
            high = t;
        } else {
            low = t;
        }
        t = 0.5 * (low + high);
    }

    component(y1, y2, t)
}
