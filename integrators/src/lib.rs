//! Integrators

#[macro_use]
extern crate log;

mod time_gated_path;

// Re-export.
pub use time_gated_path::*;
