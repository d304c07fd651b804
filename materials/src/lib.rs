//! Materials

mod diffuse;
mod mirror;
mod null;

// Re-export.
pub use diffuse::*;
pub use mirror::*;
pub use null::*;
