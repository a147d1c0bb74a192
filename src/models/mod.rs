//! Shared types used across modules.
//!
//! Other modules import from here rather than reaching into each
//! other's internals.

pub mod calculation;

pub use calculation::{Calculation, format_number};
