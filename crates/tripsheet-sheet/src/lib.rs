//! Draggable bottom sheet.
//!
//! One [`SheetController`] drives a panel that rests either open or closed,
//! follows vertical drags, and snaps on release. The [`Backdrop`] dims the
//! screen behind it as a pure function of the same offset.

mod backdrop;
mod chrome;
mod config;
mod controller;
mod error;
mod position;
mod snap;

pub use backdrop::Backdrop;
pub use chrome::ChromeVisibility;
pub use config::{DragFollow, SheetConfig, SheetHeight, DEFAULT_RELEASE_THRESHOLD};
pub use controller::{SheetController, SheetPhase, SheetState};
pub use error::SheetError;
pub use position::PositionModel;
pub use snap::{SnapResolver, SnapTarget};

pub mod prelude {
    pub use crate::{
        Backdrop, ChromeVisibility, DragFollow, SheetConfig, SheetController, SheetHeight,
        SheetPhase, SheetState,
    };
}
