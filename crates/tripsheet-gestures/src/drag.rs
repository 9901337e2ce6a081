//! Vertical drag recognition.
//!
//! [`VerticalDragDetector`] turns raw pointer events into drag events. A press
//! becomes a drag once it travels past the touch slop vertically; a press that
//! first travels past the slop horizontally is left alone.

use tripsheet_graphics::Point;

use crate::gesture_constants::{DRAG_THRESHOLD, MAX_FLING_VELOCITY};
use crate::types::{PointerEvent, PointerEventKind, PointerId};
use crate::velocity_tracker::VelocityTracker1D;

/// State of one in-progress drag: created when the slop is crossed, consumed
/// on release.
#[derive(Clone, Debug)]
pub struct DragSession {
    pointer: PointerId,
    origin: Point,
    translation: f32,
    tracker: VelocityTracker1D,
}

/// Final judgment material handed over when a drag ends.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DragRelease {
    /// Vertical distance from the press point, positive downward.
    pub translation: f32,
    /// Pixels per second, positive downward, capped to [`MAX_FLING_VELOCITY`].
    pub velocity: f32,
}

impl DragSession {
    pub fn begin(pointer: PointerId, origin: Point, uptime_millis: i64) -> Self {
        let mut tracker = VelocityTracker1D::new();
        tracker.add_data_point(uptime_millis, origin.y);
        Self {
            pointer,
            origin,
            translation: 0.0,
            tracker,
        }
    }

    pub fn pointer(&self) -> PointerId {
        self.pointer
    }

    pub fn origin(&self) -> Point {
        self.origin
    }

    pub fn translation(&self) -> f32 {
        self.translation
    }

    /// Record a pointer position; returns the cumulative translation.
    pub fn record(&mut self, position: Point, uptime_millis: i64) -> f32 {
        self.tracker.add_data_point(uptime_millis, position.y);
        self.translation = position.y - self.origin.y;
        self.translation
    }

    pub fn velocity(&self) -> f32 {
        self.tracker.calculate_velocity_with_max(MAX_FLING_VELOCITY)
    }

    pub fn release(self) -> DragRelease {
        DragRelease {
            translation: self.translation,
            velocity: self.velocity(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DragEvent {
    /// The slop was crossed. `translation` already includes the slop distance.
    Started { translation: f32 },
    Moved { translation: f32 },
    Released(DragRelease),
    Cancelled,
}

#[derive(Clone, Debug)]
struct PendingPress {
    pointer: PointerId,
    session: DragSession,
}

#[derive(Clone, Debug)]
enum DetectorState {
    Idle,
    /// Pointer is down but has not crossed the slop yet.
    Pressed(PendingPress),
    Dragging(DragSession),
    /// Pointer left along the other axis; ignore it until it lifts.
    Rejected(PointerId),
}

#[derive(Clone, Debug)]
pub struct VerticalDragDetector {
    slop: f32,
    state: DetectorState,
}

impl Default for VerticalDragDetector {
    fn default() -> Self {
        Self::new()
    }
}

impl VerticalDragDetector {
    pub fn new() -> Self {
        Self::with_slop(DRAG_THRESHOLD)
    }

    pub fn with_slop(slop: f32) -> Self {
        Self {
            slop: slop.max(0.0),
            state: DetectorState::Idle,
        }
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.state, DetectorState::Dragging(_))
    }

    pub fn session(&self) -> Option<&DragSession> {
        match &self.state {
            DetectorState::Dragging(session) => Some(session),
            _ => None,
        }
    }

    pub fn reset(&mut self) {
        self.state = DetectorState::Idle;
    }

    /// Feed one pointer event. Events that drive a drag are consumed.
    pub fn on_pointer_event(&mut self, event: &PointerEvent) -> Option<DragEvent> {
        if event.is_consumed() {
            return None;
        }
        let state = std::mem::replace(&mut self.state, DetectorState::Idle);
        let (next, output) = self.step(state, event);
        self.state = next;
        if output.is_some() {
            event.consume();
        }
        output
    }

    fn step(
        &self,
        state: DetectorState,
        event: &PointerEvent,
    ) -> (DetectorState, Option<DragEvent>) {
        match (state, event.kind) {
            (DetectorState::Idle, PointerEventKind::Down) => {
                let session = DragSession::begin(event.id, event.position, event.uptime_millis);
                let press = PendingPress {
                    pointer: event.id,
                    session,
                };
                (DetectorState::Pressed(press), None)
            }
            (DetectorState::Pressed(mut press), PointerEventKind::Move)
                if press.pointer == event.id =>
            {
                let delta = event.position - press.session.origin();
                let translation = press.session.record(event.position, event.uptime_millis);
                if delta.y.abs() > self.slop {
                    log::debug!("drag started after {:.1}px", translation);
                    (
                        DetectorState::Dragging(press.session),
                        Some(DragEvent::Started { translation }),
                    )
                } else if delta.x.abs() > self.slop {
                    (DetectorState::Rejected(press.pointer), None)
                } else {
                    (DetectorState::Pressed(press), None)
                }
            }
            (DetectorState::Dragging(mut session), PointerEventKind::Move)
                if session.pointer() == event.id =>
            {
                let translation = session.record(event.position, event.uptime_millis);
                (
                    DetectorState::Dragging(session),
                    Some(DragEvent::Moved { translation }),
                )
            }
            (DetectorState::Dragging(mut session), PointerEventKind::Up)
                if session.pointer() == event.id =>
            {
                session.record(event.position, event.uptime_millis);
                (
                    DetectorState::Idle,
                    Some(DragEvent::Released(session.release())),
                )
            }
            (DetectorState::Dragging(session), PointerEventKind::Cancel)
                if session.pointer() == event.id =>
            {
                (DetectorState::Idle, Some(DragEvent::Cancelled))
            }
            (DetectorState::Pressed(press), PointerEventKind::Up | PointerEventKind::Cancel)
                if press.pointer == event.id =>
            {
                (DetectorState::Idle, None)
            }
            (DetectorState::Rejected(pointer), PointerEventKind::Up | PointerEventKind::Cancel)
                if pointer == event.id =>
            {
                (DetectorState::Idle, None)
            }
            // Other pointers and out-of-order events leave the state alone.
            (state, _) => (state, None),
        }
    }
}

#[cfg(test)]
#[path = "tests/drag_tests.rs"]
mod tests;
