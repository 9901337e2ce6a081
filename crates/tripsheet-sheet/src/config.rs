use tripsheet_animation::{AnimationSpec, AnimationType, SpringSpec};
use tripsheet_graphics::EdgeInsets;

/// Distance past OPEN, in pixels, beyond which a released drag dismisses the
/// sheet. Absolute on purpose: every sheet in the app shares it regardless of
/// its height.
pub const DEFAULT_RELEASE_THRESHOLD: f32 = 50.0;

/// Height used before the first layout pass of a measured sheet.
const DEFAULT_INITIAL_HEIGHT: f32 = 1000.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SheetHeight {
    /// Height comes from layout. CLOSE = height + bottom safe-area inset.
    Measured { initial: f32 },
    /// Height is fixed. CLOSE = height; the inset is not added.
    Fixed(f32),
}

/// How the offset tracks the finger during a drag.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DragFollow {
    /// Retarget a spring at every update.
    Spring(SpringSpec),
    /// Assign the translation directly.
    Immediate,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SheetConfig {
    pub height: SheetHeight,
    pub safe_area: EdgeInsets,
    pub open_offset: f32,
    pub release_threshold: f32,
    /// Release velocity (px/s) above which the fling direction decides the
    /// snap instead of the distance. `None` uses distance only.
    pub fling_velocity_threshold: Option<f32>,
    /// Multiplier applied to raw drag translation.
    pub gesture_sensitivity: f32,
    pub expand_animation: AnimationType,
    pub close_animation: AnimationType,
    pub follow: DragFollow,
    /// Spring used while the finger drags above OPEN.
    pub resist_spring: SpringSpec,
    /// Spring used after release.
    pub settle_spring: SpringSpec,
    /// Hide the owner's tab bar while the sheet is open.
    pub hide_chrome_while_open: bool,
}

impl Default for SheetConfig {
    /// Measured sheet opened and closed with a timing curve.
    fn default() -> Self {
        Self {
            height: SheetHeight::Measured {
                initial: DEFAULT_INITIAL_HEIGHT,
            },
            safe_area: EdgeInsets::ZERO,
            open_offset: 0.0,
            release_threshold: DEFAULT_RELEASE_THRESHOLD,
            fling_velocity_threshold: None,
            gesture_sensitivity: 1.0,
            expand_animation: AnimationSpec::default().into(),
            close_animation: AnimationSpec::default().into(),
            follow: DragFollow::Spring(follow_spring()),
            resist_spring: resist_spring(),
            settle_spring: follow_spring(),
            hide_chrome_while_open: false,
        }
    }
}

impl SheetConfig {
    /// Fixed-height city picker: spring transitions, hides the tab bar.
    pub fn picker(height: f32) -> Self {
        Self {
            height: SheetHeight::Fixed(height),
            expand_animation: follow_spring().into(),
            close_animation: follow_spring().into(),
            hide_chrome_while_open: true,
            ..Self::default()
        }
    }

    /// Full-screen location modal: 80% of the screen tall, dismissed past 20%
    /// of the screen, follows the finger without smoothing.
    pub fn location_modal(screen_height: f32) -> Self {
        let settle = SpringSpec::from_damping(50.0, 100.0);
        Self {
            height: SheetHeight::Fixed(screen_height * 0.8),
            release_threshold: screen_height * 0.2,
            follow: DragFollow::Immediate,
            expand_animation: settle.into(),
            close_animation: settle.into(),
            settle_spring: settle,
            ..Self::default()
        }
    }

    pub fn with_height(mut self, height: SheetHeight) -> Self {
        self.height = height;
        self
    }

    pub fn with_safe_area(mut self, safe_area: EdgeInsets) -> Self {
        self.safe_area = safe_area;
        self
    }

    pub fn with_release_threshold(mut self, threshold: f32) -> Self {
        self.release_threshold = threshold;
        self
    }

    pub fn with_fling_velocity_threshold(mut self, velocity: f32) -> Self {
        self.fling_velocity_threshold = Some(velocity);
        self
    }

    pub fn with_gesture_sensitivity(mut self, sensitivity: f32) -> Self {
        self.gesture_sensitivity = sensitivity;
        self
    }

    pub fn with_animations(
        mut self,
        expand: impl Into<AnimationType>,
        close: impl Into<AnimationType>,
    ) -> Self {
        self.expand_animation = expand.into();
        self.close_animation = close.into();
        self
    }

    pub fn with_follow(mut self, follow: DragFollow) -> Self {
        self.follow = follow;
        self
    }

    pub fn hiding_chrome(mut self, hide: bool) -> Self {
        self.hide_chrome_while_open = hide;
        self
    }
}

fn follow_spring() -> SpringSpec {
    SpringSpec::from_damping(100.0, 400.0)
}

fn resist_spring() -> SpringSpec {
    SpringSpec::from_damping(200.0, 800.0)
}
