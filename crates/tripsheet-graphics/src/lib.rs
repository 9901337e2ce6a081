//! Pure geometry and color data for Tripsheet.

mod color;
mod geometry;

pub use color::*;
pub use geometry::*;

pub mod prelude {
    pub use crate::color::Color;
    pub use crate::geometry::{EdgeInsets, Point};
}
