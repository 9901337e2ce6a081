//! Robot-style driver for a headless sheet.
//!
//! The robot owns the frame runtime, so a test can script pointer input and
//! advance time without a host:
//!
//! ```
//! use tripsheet_sheet::SheetConfig;
//! use tripsheet_testing::SheetRobot;
//!
//! let mut robot = SheetRobot::new(SheetConfig::picker(700.0));
//! robot.sheet().expand();
//! robot.settle();
//! robot.drag_by(120.0);
//! robot.settle();
//! assert!(robot.sheet().state().offset > 600.0);
//! ```

use tripsheet_core::{Runtime, FRAME_NANOS_60HZ};
use tripsheet_gestures::PointerEvent;
use tripsheet_sheet::{SheetConfig, SheetController, SheetPhase, SheetState};

/// Frames after which `settle` gives up.
const SETTLE_FRAME_LIMIT: usize = 3_600;

/// Milliseconds between scripted pointer moves.
const POINTER_STEP_MILLIS: i64 = 16;

/// One recorded frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameSample {
    pub frame_nanos: u64,
    pub phase: SheetPhase,
    pub state: SheetState,
    pub backdrop_opacity: f32,
}

/// Drives a [`SheetController`] against its own frame runtime.
pub struct SheetRobot {
    runtime: Runtime,
    sheet: SheetController,
    frame_nanos: u64,
    frame_interval: u64,
    pointer_x: f32,
    pointer_y: f32,
    uptime_millis: i64,
    timeline: Vec<FrameSample>,
}

impl SheetRobot {
    pub fn new(config: SheetConfig) -> Self {
        let runtime = Runtime::new();
        let sheet = SheetController::new(config, runtime.frame_clock());
        Self {
            runtime,
            sheet,
            frame_nanos: 0,
            frame_interval: FRAME_NANOS_60HZ,
            pointer_x: 200.0,
            pointer_y: 100.0,
            uptime_millis: 0,
            timeline: Vec::new(),
        }
    }

    /// Frame rate used by `advance_frame`; zero is ignored.
    pub fn with_fps(mut self, fps: u32) -> Self {
        if fps > 0 {
            self.frame_interval = 1_000_000_000 / u64::from(fps);
        }
        self
    }

    pub fn sheet(&self) -> &SheetController {
        &self.sheet
    }

    pub fn runtime(&self) -> &Runtime {
        &self.runtime
    }

    pub fn frame_nanos(&self) -> u64 {
        self.frame_nanos
    }

    /// Every frame advanced so far.
    pub fn timeline(&self) -> &[FrameSample] {
        &self.timeline
    }

    pub fn take_timeline(&mut self) -> Vec<FrameSample> {
        std::mem::take(&mut self.timeline)
    }

    pub fn advance_frame(&mut self) {
        self.frame_nanos += self.frame_interval;
        self.runtime.drain_frame_callbacks(self.frame_nanos);
        self.timeline.push(FrameSample {
            frame_nanos: self.frame_nanos,
            phase: self.sheet.phase(),
            state: self.sheet.state(),
            backdrop_opacity: self.sheet.backdrop_opacity(),
        });
    }

    pub fn advance_frames(&mut self, count: usize) {
        for _ in 0..count {
            self.advance_frame();
        }
    }

    /// Pump frames until no animation is pending. Returns the frame count.
    ///
    /// Panics if the sheet is still animating after a minute of frames.
    pub fn settle(&mut self) -> usize {
        match self.try_settle() {
            Some(frames) => frames,
            None => panic!(
                "sheet still animating after {} frames: {:?}",
                SETTLE_FRAME_LIMIT, self.sheet
            ),
        }
    }

    /// Like [`settle`](Self::settle), but returns `None` instead of
    /// panicking when the frame limit runs out.
    pub fn try_settle(&mut self) -> Option<usize> {
        for frame in 0..SETTLE_FRAME_LIMIT {
            if !self.runtime.has_frame_callbacks() {
                log::debug!("settled after {frame} frames at {:.1}", self.sheet.offset());
                return Some(frame);
            }
            self.advance_frame();
        }
        log::warn!("sheet still animating after {SETTLE_FRAME_LIMIT} frames");
        None
    }

    pub fn press(&mut self) {
        self.sheet
            .handle_pointer(&PointerEvent::down(self.pointer_x, self.pointer_y, self.uptime_millis));
    }

    /// Move the pressed pointer by `dy` in `steps` equal increments, one
    /// frame apart.
    pub fn move_by(&mut self, dy: f32, steps: usize) {
        let steps = steps.max(1);
        let step = dy / steps as f32;
        for _ in 0..steps {
            self.uptime_millis += POINTER_STEP_MILLIS;
            self.pointer_y += step;
            self.sheet.handle_pointer(&PointerEvent::moved(
                self.pointer_x,
                self.pointer_y,
                self.uptime_millis,
            ));
            self.advance_frame();
        }
    }

    pub fn release(&mut self) {
        self.uptime_millis += POINTER_STEP_MILLIS;
        self.sheet
            .handle_pointer(&PointerEvent::up(self.pointer_x, self.pointer_y, self.uptime_millis));
    }

    /// Press, move `dy` over a few frames, hold still and let the sheet catch
    /// up, then lift. Holding first makes the release velocity zero, so the
    /// distance alone decides the snap.
    pub fn drag_by(&mut self, dy: f32) {
        self.press();
        self.move_by(dy, 6);
        self.hold();
        self.release();
    }

    /// Press, move `dy` quickly and lift without pausing.
    pub fn fling_by(&mut self, dy: f32) {
        self.press();
        self.move_by(dy, 3);
        self.release();
    }

    /// Keep the pointer still until the sheet stops following.
    fn hold(&mut self) {
        let frames = self.try_settle().unwrap_or(SETTLE_FRAME_LIMIT);
        let held_millis = (frames as u64 * self.frame_interval / 1_000_000) as i64;
        self.uptime_millis += held_millis.max(100);
        self.sheet.handle_pointer(&PointerEvent::moved(
            self.pointer_x,
            self.pointer_y,
            self.uptime_millis,
        ));
    }
}

#[cfg(test)]
#[path = "tests/robot_tests.rs"]
mod tests;
