//! Core runtime for Tripsheet.
//!
//! Hosts the frame-callback runtime that drives every animation and the
//! observable [`MutableState`] store that replaces ambient global state.

mod frame_clock;
mod runtime;
mod state;

pub use frame_clock::{FrameCallbackRegistration, FrameClock};
pub use runtime::{FrameCallbackId, Runtime, RuntimeHandle};
pub use state::{MutableState, Subscription};

/// Nanoseconds between frames at 60 FPS.
pub const FRAME_NANOS_60HZ: u64 = 16_666_667;

pub mod prelude {
    pub use crate::frame_clock::{FrameCallbackRegistration, FrameClock};
    pub use crate::runtime::{Runtime, RuntimeHandle};
    pub use crate::state::{MutableState, Subscription};
}
