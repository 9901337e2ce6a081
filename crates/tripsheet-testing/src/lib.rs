//! Testing utilities for Tripsheet sheets.

pub mod robot;
pub mod robot_assertions;

pub use robot::*;

pub mod prelude {
    pub use crate::robot::*;
    pub use crate::robot_assertions;
    pub use crate::robot_assertions::{assert_approx_eq, assert_monotonic};
}
