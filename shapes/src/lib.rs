//! Shapes

mod sphere;

// Re-export.
pub use sphere::*;
