//! Headless sessions behind the `sheet-demo` binary.

pub mod simulate;
pub mod trips;
