//! Shape interface

use crate::base::Float;
use crate::geometry::*;
use crate::interaction::Hit;
use std::sync::Arc;

/// Shape trait provides intersection queries and area sampling for a piece
/// of scene geometry.
pub trait Shape {
    /// Traces the ray against the shape and returns the nearest hit within
    /// the ray extent, if any.
    ///
    /// * `ray` - The ray to trace.
    fn intersect(&self, ray: &Ray) -> Option<Hit>;

    /// Traces the ray against the shape and returns whether an intersection
    /// occurred within the ray extent.
    ///
    /// * `ray` - The ray to trace.
    fn intersect_p(&self, ray: &Ray) -> bool {
        self.intersect(ray).is_some()
    }

    /// Returns the surface area of the shape.
    fn area(&self) -> Float;

    /// Uniformly samples a point on the shape's surface. Returns the point,
    /// the surface normal there, and the area density of the sample.
    ///
    /// * `u` - Sample values for Monte Carlo integration.
    fn sample(&self, u: &Point2f) -> (Point3f, Normal3f, Float);

    /// Samples a point on the shape as seen from a reference point. Returns
    /// the point, its normal, and the density converted to solid angle at
    /// the reference point. The density is zero when the sampled point faces
    /// away from the reference point.
    ///
    /// * `hit` - The reference point.
    /// * `u`   - Sample values for Monte Carlo integration.
    fn sample_from(&self, hit: &Hit, u: &Point2f) -> (Point3f, Normal3f, Float) {
        let (p, n, pdf_area) = self.sample(u);

        let to_light = p - hit.p;
        let dist_squared = to_light.length_squared();
        if dist_squared == 0.0 {
            return (p, n, 0.0);
        }

        let d = to_light / dist_squared.sqrt();
        let cos_theta = n.dot(&-d);
        if cos_theta <= 0.0 {
            return (p, n, 0.0);
        }

        // Convert the area density to a solid-angle density at the reference
        // point.
        (p, n, pdf_area * dist_squared / cos_theta)
    }

    /// Returns the solid-angle density of `sample_from` producing the given
    /// direction from the reference point.
    ///
    /// * `hit` - The reference point.
    /// * `d`   - The direction towards the shape.
    fn pdf_from(&self, hit: &Hit, d: &Vector3f) -> Float {
        let ray = hit.spawn_ray(d);
        match self.intersect(&ray) {
            Some(light_hit) => {
                let cos_theta = light_hit.n.dot(&-*d);
                if cos_theta <= 0.0 {
                    return 0.0;
                }
                let dist_squared = hit.p.distance_squared(light_hit.p);
                dist_squared / (cos_theta * self.area())
            }
            None => 0.0,
        }
    }
}

/// Atomic reference counted `Shape`.
pub type ArcShape = Arc<dyn Shape + Send + Sync>;
