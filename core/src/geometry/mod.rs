//! Geometry

mod frame;
mod normal;
mod point2;
mod point3;
mod ray;
mod vector3;

/// Inner product of two geometric values.
pub trait Dot<V> {
    /// The result type of the product.
    type Output;

    /// Returns the dot product.
    ///
    /// * `other` - The other value.
    fn dot(&self, other: &V) -> Self::Output;

    /// Returns the absolute value of the dot product.
    ///
    /// * `other` - The other value.
    fn abs_dot(&self, other: &V) -> Self::Output;
}

// Re-export
pub use frame::*;
pub use normal::*;
pub use point2::*;
pub use point3::*;
pub use ray::*;
pub use vector3::*;
