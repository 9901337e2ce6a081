//! The sheet state machine.
//!
//! `Closed -> Opening -> Open -> Dragging -> (Opening | Closing) -> ...`
//!
//! The offset lives in an [`Animatable`]; phase bookkeeping lives in a shared
//! inner struct. Animation end callbacks capture a weak reference plus the
//! generation that started them, so a superseded animation can never move
//! the phase.

use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};

use smallvec::SmallVec;
use tripsheet_animation::{Animatable, AnimationEndReason, AnimationType};
use tripsheet_core::FrameClock;
use tripsheet_gestures::{DragEvent, PointerEvent, VerticalDragDetector};
use tripsheet_graphics::{Color, EdgeInsets};

use crate::backdrop::Backdrop;
use crate::chrome::ChromeVisibility;
use crate::config::{DragFollow, SheetConfig};
use crate::error::SheetError;
use crate::position::PositionModel;
use crate::snap::{SnapResolver, SnapTarget};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SheetPhase {
    Closed,
    Opening,
    Open,
    Dragging,
    Closing,
}

impl SheetPhase {
    fn accepts_drag(self) -> bool {
        matches!(self, SheetPhase::Open | SheetPhase::Opening)
    }
}

/// Snapshot published to the host each frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SheetState {
    pub offset: f32,
    /// True only while settled at OPEN.
    pub is_open: bool,
}

type Callback = Rc<dyn Fn()>;
type PhaseCallback = Rc<dyn Fn(SheetPhase, SheetPhase)>;

enum Effect {
    Phase(SheetPhase, SheetPhase),
    Expanded,
    Closed,
    HideChrome,
    ShowChrome,
}

type Effects = SmallVec<[Effect; 4]>;

struct SheetInner {
    config: SheetConfig,
    position: PositionModel,
    snap: SnapResolver,
    backdrop: Backdrop,
    phase: SheetPhase,
    generation: u64,
    /// Where the finger wants the sheet; judged on release.
    drag_target: f32,
    detector: VerticalDragDetector,
    chrome: Option<ChromeVisibility>,
    on_expand: Option<Callback>,
    on_close: Option<Callback>,
    on_phase_change: Option<PhaseCallback>,
}

impl SheetInner {
    fn transition(&mut self, next: SheetPhase, effects: &mut Effects) {
        if self.phase == next {
            return;
        }
        log::debug!("sheet {:?} -> {:?}", self.phase, next);
        effects.push(Effect::Phase(self.phase, next));
        self.phase = next;
    }

    /// Start a new phase-changing animation; older end callbacks go stale.
    fn next_generation(&mut self) -> u64 {
        self.generation = self.generation.wrapping_add(1);
        self.generation
    }
}

/// Headless controller for one draggable bottom sheet.
///
/// Cloning shares the same sheet.
#[derive(Clone)]
pub struct SheetController {
    inner: Rc<RefCell<SheetInner>>,
    offset: Animatable,
}

impl fmt::Debug for SheetController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SheetController")
            .field("phase", &self.phase())
            .field("offset", &self.offset())
            .field("close", &self.close_offset())
            .finish()
    }
}

impl SheetController {
    /// A closed sheet resting at CLOSE.
    pub fn new(config: SheetConfig, clock: FrameClock) -> Self {
        let position = PositionModel::new(config.height, config.open_offset, config.safe_area);
        let snap = SnapResolver::new(config.release_threshold, config.fling_velocity_threshold);
        let offset = Animatable::new(position.close(), clock);
        Self {
            inner: Rc::new(RefCell::new(SheetInner {
                config,
                position,
                snap,
                backdrop: Backdrop::default(),
                phase: SheetPhase::Closed,
                generation: 0,
                drag_target: position.open(),
                detector: VerticalDragDetector::new(),
                chrome: None,
                on_expand: None,
                on_close: None,
                on_phase_change: None,
            })),
            offset,
        }
    }

    pub fn with_backdrop(self, backdrop: Backdrop) -> Self {
        self.inner.borrow_mut().backdrop = backdrop;
        self
    }

    /// Share the owner's tab bar flag. Only used when the config hides
    /// chrome while open.
    pub fn attach_chrome(&self, chrome: ChromeVisibility) {
        self.inner.borrow_mut().chrome = Some(chrome);
    }

    /// Called once each time an expand starts from `Closed` or `Closing`.
    pub fn on_expand(&self, callback: impl Fn() + 'static) {
        self.inner.borrow_mut().on_expand = Some(Rc::new(callback));
    }

    /// Called by `close()` and by a drag released past the threshold.
    pub fn on_close(&self, callback: impl Fn() + 'static) {
        self.inner.borrow_mut().on_close = Some(Rc::new(callback));
    }

    pub fn on_phase_change(&self, callback: impl Fn(SheetPhase, SheetPhase) + 'static) {
        self.inner.borrow_mut().on_phase_change = Some(Rc::new(callback));
    }

    pub fn phase(&self) -> SheetPhase {
        self.inner.borrow().phase
    }

    /// Current offset, clamped to [OPEN, CLOSE].
    pub fn offset(&self) -> f32 {
        let value = self.offset.value();
        self.inner.borrow().position.clamp(value)
    }

    pub fn open_offset(&self) -> f32 {
        self.inner.borrow().position.open()
    }

    pub fn close_offset(&self) -> f32 {
        self.inner.borrow().position.close()
    }

    pub fn state(&self) -> SheetState {
        SheetState {
            offset: self.offset(),
            is_open: self.phase() == SheetPhase::Open,
        }
    }

    pub fn backdrop_opacity(&self) -> f32 {
        let offset = self.offset();
        let inner = self.inner.borrow();
        inner
            .backdrop
            .opacity(offset, inner.position.open(), inner.position.close())
    }

    pub fn backdrop_color(&self) -> Color {
        let offset = self.offset();
        let inner = self.inner.borrow();
        inner
            .backdrop
            .color(offset, inner.position.open(), inner.position.close())
    }

    pub fn is_animating(&self) -> bool {
        self.offset.is_running()
    }

    /// Resting at OPEN or CLOSE with nothing left to animate.
    pub fn is_settled(&self) -> bool {
        matches!(self.phase(), SheetPhase::Open | SheetPhase::Closed) && !self.is_animating()
    }

    /// Animate to OPEN. Returns false when already opening or open.
    pub fn expand(&self) -> bool {
        let mut effects = Effects::new();
        let (target, animation, generation) = {
            let mut inner = self.inner.borrow_mut();
            let announce = match inner.phase {
                SheetPhase::Opening | SheetPhase::Open => {
                    log::debug!("expand ignored while {:?}", inner.phase);
                    return false;
                }
                // Settles back without announcing a fresh expand.
                SheetPhase::Dragging => {
                    inner.detector.reset();
                    false
                }
                SheetPhase::Closed | SheetPhase::Closing => true,
            };
            inner.transition(SheetPhase::Opening, &mut effects);
            let animation = if announce {
                if inner.config.hide_chrome_while_open {
                    effects.push(Effect::HideChrome);
                }
                effects.push(Effect::Expanded);
                inner.config.expand_animation
            } else {
                AnimationType::Spring(inner.config.settle_spring)
            };
            (inner.position.open(), animation, inner.next_generation())
        };
        self.settle_to(target, animation, generation, SheetPhase::Open);
        self.run_effects(effects);
        true
    }

    /// Animate to CLOSE. Returns false when already closing or closed.
    pub fn close(&self) -> bool {
        let mut effects = Effects::new();
        let (target, animation, generation) = {
            let mut inner = self.inner.borrow_mut();
            match inner.phase {
                SheetPhase::Closing | SheetPhase::Closed => {
                    log::debug!("close ignored while {:?}", inner.phase);
                    return false;
                }
                SheetPhase::Dragging => inner.detector.reset(),
                SheetPhase::Open | SheetPhase::Opening => {}
            }
            Self::begin_closing(&mut inner, &mut effects);
            (
                inner.position.close(),
                inner.config.close_animation,
                inner.next_generation(),
            )
        };
        self.settle_to(target, animation, generation, SheetPhase::Closed);
        self.run_effects(effects);
        true
    }

    /// Record the panel's measured height.
    ///
    /// A sheet resting closed jumps to the new CLOSE; one that is closing
    /// retargets. Invalid heights leave the sheet untouched.
    pub fn on_layout(&self, height: f32) -> Result<(), SheetError> {
        let changed = self.inner.borrow_mut().position.set_measured_height(height)?;
        if changed {
            self.follow_close();
        }
        Ok(())
    }

    pub fn set_safe_area_insets(&self, insets: EdgeInsets) -> Result<(), SheetError> {
        let changed = self.inner.borrow_mut().position.set_safe_area(insets)?;
        if changed {
            self.follow_close();
        }
        Ok(())
    }

    /// Begin a drag. Only an open or opening sheet can be dragged.
    pub fn drag_start(&self) -> bool {
        let mut effects = Effects::new();
        {
            let mut inner = self.inner.borrow_mut();
            if !inner.phase.accepts_drag() {
                log::debug!("drag start ignored while {:?}", inner.phase);
                return false;
            }
            inner.next_generation();
            inner.drag_target = inner.position.open();
            inner.transition(SheetPhase::Dragging, &mut effects);
        }
        self.offset.stop();
        self.run_effects(effects);
        true
    }

    /// Follow the finger. `translation` is measured from the press point,
    /// positive downward.
    pub fn drag_update(&self, translation: f32) -> bool {
        let (target, follow) = {
            let mut inner = self.inner.borrow_mut();
            if inner.phase != SheetPhase::Dragging {
                log::debug!("drag update ignored while {:?}", inner.phase);
                return false;
            }
            if !translation.is_finite() {
                log::debug!("drag update ignored: translation {translation}");
                return false;
            }
            let translation = translation * inner.config.gesture_sensitivity;
            let open = inner.position.open();
            let (target, follow) = if translation < 0.0 {
                let follow = match inner.config.follow {
                    DragFollow::Spring(_) => DragFollow::Spring(inner.config.resist_spring),
                    DragFollow::Immediate => DragFollow::Immediate,
                };
                (open, follow)
            } else {
                (inner.position.clamp(open + translation), inner.config.follow)
            };
            inner.drag_target = target;
            (target, follow)
        };
        match follow {
            DragFollow::Spring(spring) => self.offset.animate_to(target, spring),
            DragFollow::Immediate => self.offset.snap_to(target),
        }
        true
    }

    /// Release the drag and snap. `velocity` is px/s, positive downward.
    pub fn drag_end(&self, velocity: f32) -> bool {
        let mut effects = Effects::new();
        let (target, spring, generation, end_phase) = {
            let mut inner = self.inner.borrow_mut();
            if inner.phase != SheetPhase::Dragging {
                log::debug!("drag end ignored while {:?}", inner.phase);
                return false;
            }
            let distance = inner.drag_target - inner.position.open();
            let velocity = if velocity.is_finite() { velocity } else { 0.0 };
            let decision = inner.snap.resolve(distance, velocity);
            log::debug!(
                "drag released at {:.1}px ({:.0}px/s): {:?}",
                distance,
                velocity,
                decision
            );
            let (target, end_phase) = match decision {
                SnapTarget::Closed => {
                    Self::begin_closing(&mut inner, &mut effects);
                    (inner.position.close(), SheetPhase::Closed)
                }
                SnapTarget::Open => {
                    inner.transition(SheetPhase::Opening, &mut effects);
                    (inner.position.open(), SheetPhase::Open)
                }
            };
            (
                target,
                inner.config.settle_spring,
                inner.next_generation(),
                end_phase,
            )
        };
        self.settle_to(target, spring, generation, end_phase);
        self.run_effects(effects);
        true
    }

    /// A cancelled drag is judged like a release with no velocity.
    pub fn drag_cancel(&self) -> bool {
        self.drag_end(0.0)
    }

    /// Feed a raw pointer event through the drag detector. Returns whether
    /// the event moved the sheet.
    pub fn handle_pointer(&self, event: &PointerEvent) -> bool {
        let drag = {
            let mut inner = self.inner.borrow_mut();
            if !inner.phase.accepts_drag() && !inner.detector.is_dragging() {
                return false;
            }
            inner.detector.on_pointer_event(event)
        };
        match drag {
            Some(DragEvent::Started { translation }) => {
                self.drag_start() && self.drag_update(translation)
            }
            Some(DragEvent::Moved { translation }) => self.drag_update(translation),
            Some(DragEvent::Released(release)) => self.drag_end(release.velocity),
            Some(DragEvent::Cancelled) => self.drag_cancel(),
            None => false,
        }
    }

    /// A tap on the backdrop closes the sheet while the backdrop is visible.
    pub fn backdrop_tap(&self) -> bool {
        let intercepts = {
            let offset = self.offset();
            let inner = self.inner.borrow();
            inner
                .backdrop
                .intercepts_taps(offset, inner.position.open(), inner.position.close())
        };
        intercepts && self.close()
    }

    fn begin_closing(inner: &mut SheetInner, effects: &mut Effects) {
        inner.transition(SheetPhase::Closing, effects);
        if inner.config.hide_chrome_while_open {
            effects.push(Effect::ShowChrome);
        }
        effects.push(Effect::Closed);
    }

    /// CLOSE moved; keep a closed or closing sheet attached to it.
    fn follow_close(&self) {
        let (phase, close) = {
            let inner = self.inner.borrow();
            (inner.phase, inner.position.close())
        };
        match phase {
            SheetPhase::Closed => self.offset.snap_to(close),
            SheetPhase::Closing => {
                let (animation, generation) = {
                    let mut inner = self.inner.borrow_mut();
                    (inner.config.close_animation, inner.next_generation())
                };
                self.settle_to(close, animation, generation, SheetPhase::Closed);
            }
            SheetPhase::Opening | SheetPhase::Open | SheetPhase::Dragging => {}
        }
    }

    fn settle_to(
        &self,
        target: f32,
        animation: impl Into<AnimationType>,
        generation: u64,
        end_phase: SheetPhase,
    ) {
        let weak = Rc::downgrade(&self.inner);
        self.offset.animate_to_then(target, animation, move |result| {
            if result.reason == AnimationEndReason::Finished {
                Self::finish(&weak, generation, end_phase);
            }
        });
    }

    fn finish(weak: &Weak<RefCell<SheetInner>>, generation: u64, end_phase: SheetPhase) {
        let Some(inner) = weak.upgrade() else {
            return;
        };
        let mut effects = Effects::new();
        {
            let mut state = inner.borrow_mut();
            if state.generation != generation {
                return;
            }
            state.transition(end_phase, &mut effects);
        }
        Self::dispatch(&inner, effects);
    }

    fn run_effects(&self, effects: Effects) {
        Self::dispatch(&self.inner, effects);
    }

    /// Runs callbacks with no borrow held so they may call back into the
    /// controller.
    fn dispatch(inner: &Rc<RefCell<SheetInner>>, effects: Effects) {
        if effects.is_empty() {
            return;
        }
        let (chrome, on_expand, on_close, on_phase_change) = {
            let inner = inner.borrow();
            (
                inner.chrome.clone(),
                inner.on_expand.clone(),
                inner.on_close.clone(),
                inner.on_phase_change.clone(),
            )
        };
        for effect in effects {
            match effect {
                Effect::Phase(old, new) => {
                    if let Some(callback) = &on_phase_change {
                        callback(old, new);
                    }
                }
                Effect::Expanded => {
                    if let Some(callback) = &on_expand {
                        callback();
                    }
                }
                Effect::Closed => {
                    if let Some(callback) = &on_close {
                        callback();
                    }
                }
                Effect::HideChrome => {
                    if let Some(chrome) = &chrome {
                        chrome.hide();
                    }
                }
                Effect::ShowChrome => {
                    if let Some(chrome) = chrome.as_ref().filter(|chrome| !chrome.is_visible()) {
                        chrome.show();
                    }
                }
            }
        }
    }
}

#[cfg(test)]
#[path = "tests/controller_tests.rs"]
mod tests;
