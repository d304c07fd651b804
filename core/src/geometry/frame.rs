//! Shading Frames

use super::{Dot, Normal3f, Vector3f};
use crate::base::Float;

/// An orthonormal coordinate frame used to move directions between world
/// space and the local shading space where the normal is the z-axis.
#[derive(Copy, Clone, Debug)]
pub struct Frame {
    /// First tangent.
    pub s: Vector3f,

    /// Second tangent.
    pub t: Vector3f,

    /// Normal (local z-axis).
    pub n: Vector3f,
}

impl Frame {
    /// Builds a frame around a unit normal.
    ///
    /// * `n` - The unit normal.
    pub fn from_normal(n: &Normal3f) -> Self {
        let n = Vector3f::from(*n);

        // Building an orthonormal basis, revisited (Duff et al. 2017).
        let sign = if n.z >= 0.0 { 1.0 } else { -1.0 };
        let a = -1.0 / (sign + n.z);
        let b = n.x * n.y * a;
        Self {
            s: Vector3f::new(1.0 + sign * n.x * n.x * a, sign * b, -sign * n.x),
            t: Vector3f::new(b, sign + n.y * n.y * a, -n.y),
            n,
        }
    }

    /// Transforms a world-space direction into the local frame.
    ///
    /// * `v` - The world-space direction.
    pub fn to_local(&self, v: &Vector3f) -> Vector3f {
        Vector3f::new(v.dot(&self.s), v.dot(&self.t), v.dot(&self.n))
    }

    /// Transforms a local direction back into world space.
    ///
    /// * `v` - The local direction.
    pub fn to_world(&self, v: &Vector3f) -> Vector3f {
        self.s * v.x + self.t * v.y + self.n * v.z
    }
}

/// Returns the cosine of the angle between a local direction and the frame
/// normal.
///
/// * `w` - The local direction.
#[inline(always)]
pub fn cos_theta(w: &Vector3f) -> Float {
    w.z
}
