//! 3-D Points

use super::Vector3;
use crate::base::{Float, Int};
use num_traits::{Num, Zero};
use std::ops::{Add, AddAssign, Mul, Sub};

/// A 3-D point containing numeric values.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Point3<T> {
    /// X-coordinate.
    pub x: T,

    /// Y-coordinate.
    pub y: T,

    /// Z-coordinate.
    pub z: T,
}

/// 3-D point containing `Float` values.
pub type Point3f = Point3<Float>;

/// 3-D point containing `Int` values.
pub type Point3i = Point3<Int>;

impl<T: Num> Point3<T> {
    /// Creates a new 3-D point.
    ///
    /// * `x` - X-coordinate.
    /// * `y` - Y-coordinate.
    /// * `z` - Z-coordinate.
    pub fn new(x: T, y: T, z: T) -> Self {
        Self { x, y, z }
    }

    /// Creates a new 3-D zero point (origin).
    pub fn zero() -> Self
    where
        T: Zero,
    {
        Self::new(T::zero(), T::zero(), T::zero())
    }

    /// Returns true if either coordinate is NaN.
    pub fn has_nans(&self) -> bool
    where
        T: num_traits::Float,
    {
        self.x.is_nan() || self.y.is_nan() || self.z.is_nan()
    }

    /// Returns the distance to another point.
    ///
    /// * `other` - The other point.
    pub fn distance(self, other: Self) -> T
    where
        T: num_traits::Float,
    {
        (self - other).length()
    }

    /// Returns the square of the distance to another point.
    ///
    /// * `other` - The other point.
    pub fn distance_squared(self, other: Self) -> T
    where
        T: num_traits::Float,
    {
        (self - other).length_squared()
    }
}

impl<T: Num> Add<Vector3<T>> for Point3<T> {
    type Output = Self;

    /// Offsets the point by the given vector.
    ///
    /// * `v` - The offset vector.
    fn add(self, v: Vector3<T>) -> Self {
        Self::new(self.x + v.x, self.y + v.y, self.z + v.z)
    }
}

impl<T: Num + Copy> AddAssign<Vector3<T>> for Point3<T> {
    /// Offsets the point by the given vector.
    ///
    /// * `v` - The offset vector.
    fn add_assign(&mut self, v: Vector3<T>) {
        *self = Self::new(self.x + v.x, self.y + v.y, self.z + v.z);
    }
}

impl<T: Num> Sub for Point3<T> {
    type Output = Vector3<T>;

    /// Returns the vector pointing from the other point to this point.
    ///
    /// * `other` - The other point.
    fn sub(self, other: Self) -> Vector3<T> {
        Vector3::new(self.x - other.x, self.y - other.y, self.z - other.z)
    }
}

impl<T: Num> Sub<Vector3<T>> for Point3<T> {
    type Output = Self;

    /// Offsets the point backwards by the given vector.
    ///
    /// * `v` - The offset vector.
    fn sub(self, v: Vector3<T>) -> Self {
        Self::new(self.x - v.x, self.y - v.y, self.z - v.z)
    }
}

impl<T: Num + Copy> Mul<T> for Point3<T> {
    type Output = Self;

    /// Scales the point.
    ///
    /// * `f` - The scaling factor.
    fn mul(self, f: T) -> Self {
        Self::new(f * self.x, f * self.y, f * self.z)
    }
}

impl<T> From<Vector3<T>> for Point3<T> {
    /// Convert a 3-D vector to a 3-D point.
    ///
    /// * `v` - 3-D vector.
    fn from(v: Vector3<T>) -> Self {
        Self { x: v.x, y: v.y, z: v.z }
    }
}

#[cfg(test)]
mod tests {
    use super::super::Vector3f;
    use super::*;
    use float_cmp::approx_eq;

    #[test]
    fn distance() {
        let p0 = Point3f::new(0.0, 0.0, 0.0);
        let p1 = Point3f::new(3.0, 4.0, 0.0);
        assert!(approx_eq!(Float, p0.distance(p1), 5.0));
        assert!(approx_eq!(Float, p0.distance_squared(p1), 25.0));
    }

    #[test]
    fn offsets() {
        let p = Point3f::new(1.0, 2.0, 3.0);
        let v = Vector3f::new(1.0, 1.0, 1.0);
        assert_eq!(p + v - v, p);
        assert_eq!((p + v) - p, v);
    }
}
