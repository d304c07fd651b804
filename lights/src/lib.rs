//! Lights

mod constant;
mod diffuse;
mod point;

// Re-export.
pub use constant::*;
pub use diffuse::*;
pub use point::*;
