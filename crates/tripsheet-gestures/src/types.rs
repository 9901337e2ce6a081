use std::cell::Cell;
use std::rc::Rc;
use tripsheet_graphics::Point;

pub type PointerId = u64;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerPhase {
    Start,
    Move,
    End,
    Cancel,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerEventKind {
    Down,
    Move,
    Up,
    Cancel,
}

impl PointerEventKind {
    pub fn phase(self) -> PointerPhase {
        match self {
            PointerEventKind::Down => PointerPhase::Start,
            PointerEventKind::Move => PointerPhase::Move,
            PointerEventKind::Up => PointerPhase::End,
            PointerEventKind::Cancel => PointerPhase::Cancel,
        }
    }
}

/// Pointer event in screen coordinates, with shared consumption state.
///
/// Copies made with `Clone` share the consumed flag, so a drag that claims an
/// event hides it from tap handlers further down the chain.
#[derive(Clone, Debug)]
pub struct PointerEvent {
    pub id: PointerId,
    pub kind: PointerEventKind,
    pub position: Point,
    /// Monotonic timestamp in milliseconds.
    pub uptime_millis: i64,
    consumed: Rc<Cell<bool>>,
}

impl PointerEvent {
    pub fn new(kind: PointerEventKind, position: Point, uptime_millis: i64) -> Self {
        Self {
            id: 0,
            kind,
            position,
            uptime_millis,
            consumed: Rc::new(Cell::new(false)),
        }
    }

    pub fn down(x: f32, y: f32, uptime_millis: i64) -> Self {
        Self::new(PointerEventKind::Down, Point::new(x, y), uptime_millis)
    }

    pub fn moved(x: f32, y: f32, uptime_millis: i64) -> Self {
        Self::new(PointerEventKind::Move, Point::new(x, y), uptime_millis)
    }

    pub fn up(x: f32, y: f32, uptime_millis: i64) -> Self {
        Self::new(PointerEventKind::Up, Point::new(x, y), uptime_millis)
    }

    pub fn cancel(uptime_millis: i64) -> Self {
        Self::new(PointerEventKind::Cancel, Point::ZERO, uptime_millis)
    }

    pub fn with_id(mut self, id: PointerId) -> Self {
        self.id = id;
        self
    }

    pub fn phase(&self) -> PointerPhase {
        self.kind.phase()
    }

    pub fn consume(&self) {
        self.consumed.set(true);
    }

    pub fn is_consumed(&self) -> bool {
        self.consumed.get()
    }
}
