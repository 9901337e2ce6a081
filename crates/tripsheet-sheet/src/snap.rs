/// Resting point chosen when a drag ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SnapTarget {
    Open,
    Closed,
}

/// Release policy: distance past OPEN, optionally overridden by a fast fling.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SnapResolver {
    threshold: f32,
    fling_velocity_threshold: Option<f32>,
}

impl SnapResolver {
    pub fn new(threshold: f32, fling_velocity_threshold: Option<f32>) -> Self {
        Self {
            threshold,
            fling_velocity_threshold,
        }
    }

    pub fn threshold(&self) -> f32 {
        self.threshold
    }

    /// `distance` is the offset past OPEN at release, `velocity` the release
    /// velocity in px/s (positive downward).
    pub fn resolve(&self, distance: f32, velocity: f32) -> SnapTarget {
        if let Some(fling) = self.fling_velocity_threshold {
            if velocity.abs() > fling {
                return if velocity > 0.0 {
                    SnapTarget::Closed
                } else {
                    SnapTarget::Open
                };
            }
        }
        if distance > self.threshold {
            SnapTarget::Closed
        } else {
            SnapTarget::Open
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distance_threshold_is_exclusive() {
        let resolver = SnapResolver::new(50.0, None);
        assert_eq!(resolver.resolve(50.0, 0.0), SnapTarget::Open);
        assert_eq!(resolver.resolve(50.01, 0.0), SnapTarget::Closed);
        assert_eq!(resolver.resolve(-20.0, 0.0), SnapTarget::Open);
    }

    #[test]
    fn velocity_is_ignored_without_fling_threshold() {
        let resolver = SnapResolver::new(50.0, None);
        assert_eq!(resolver.resolve(10.0, 8_000.0), SnapTarget::Open);
        assert_eq!(resolver.resolve(120.0, -8_000.0), SnapTarget::Closed);
    }

    #[test]
    fn fast_fling_overrides_distance() {
        let resolver = SnapResolver::new(50.0, Some(1_000.0));
        assert_eq!(resolver.resolve(10.0, 2_500.0), SnapTarget::Closed);
        assert_eq!(resolver.resolve(300.0, -2_500.0), SnapTarget::Open);
        assert_eq!(resolver.resolve(300.0, 900.0), SnapTarget::Closed);
        assert_eq!(resolver.resolve(10.0, -900.0), SnapTarget::Open);
    }
}
