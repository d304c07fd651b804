//! Common sampling functions.

use crate::base::*;
use crate::geometry::*;

/// Uniformly sample a direction from a sphere.
///
/// * `u` - The random sample point.
pub fn uniform_sample_sphere(u: &Point2f) -> Vector3f {
    let z = 1.0 - 2.0 * u[0];
    let r = max(0.0, 1.0 - z * z).sqrt();
    let phi = TWO_PI * u[1];
    Vector3f::new(r * phi.cos(), r * phi.sin(), z)
}

/// Returns the PDF for uniformly sampling a direction from a sphere.
#[inline]
pub fn uniform_sphere_pdf() -> Float {
    INV_FOUR_PI
}

/// Sample points on a unit disk by mapping a square to the disk while
/// preserving stratification.
///
/// * `u` - The random sample point.
pub fn concentric_sample_disk(u: &Point2f) -> Point2f {
    // Map uniform random numbers to [-1, 1]^2.
    let u_offset = Point2f::new(2.0 * u[0] - 1.0, 2.0 * u[1] - 1.0);

    // Handle degeneracy at the origin.
    if u_offset.x == 0.0 && u_offset.y == 0.0 {
        return Point2f::new(0.0, 0.0);
    }

    // Apply concentric mapping to point.
    let (r, theta) = if abs(u_offset.x) > abs(u_offset.y) {
        (u_offset.x, PI * 0.25 * (u_offset.y / u_offset.x))
    } else {
        (u_offset.y, PI * 0.5 - PI * 0.25 * (u_offset.x / u_offset.y))
    };

    Point2f::new(r * theta.cos(), r * theta.sin())
}

/// Sample a direction from a cosine-weighted hemisphere distribution around
/// the z-axis.
///
/// * `u` - The random sample point.
pub fn cosine_sample_hemisphere(u: &Point2f) -> Vector3f {
    let d = concentric_sample_disk(u);
    let z = max(0.0, 1.0 - d.x * d.x - d.y * d.y).sqrt();
    Vector3f::new(d.x, d.y, z)
}

/// Returns the PDF for the cosine-weighted hemisphere distribution.
///
/// * `cos_theta` - The cosine of the sampled direction's polar angle.
#[inline]
pub fn cosine_hemisphere_pdf(cos_theta: Float) -> Float {
    cos_theta * INV_PI
}
