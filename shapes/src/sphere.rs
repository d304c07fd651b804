//! Spheres

use lightgate_core::base::*;
use lightgate_core::geometry::*;
use lightgate_core::interaction::Hit;
use lightgate_core::sampling::uniform_sample_sphere;
use lightgate_core::shape::Shape;

/// A sphere centered at an arbitrary point.
#[derive(Clone)]
pub struct Sphere {
    /// Center of the sphere.
    center: Point3f,

    /// Radius of the sphere.
    radius: Float,
}

impl Sphere {
    /// Creates a new `Sphere`.
    ///
    /// * `center` - Center of the sphere.
    /// * `radius` - Radius of the sphere.
    pub fn new(center: Point3f, radius: Float) -> Result<Self, String> {
        if !(radius > 0.0 && radius.is_finite()) {
            return Err(format!("Invalid sphere radius {}", radius));
        }
        Ok(Self { center, radius })
    }
}

impl Shape for Sphere {
    fn intersect(&self, ray: &Ray) -> Option<Hit> {
        let oc = ray.o - self.center;

        // Solve the quadratic for the ray/sphere intersection distances.
        let a = ray.d.length_squared();
        let b = 2.0 * oc.dot(&ray.d);
        let c = oc.length_squared() - self.radius * self.radius;

        let discriminant = b * b - 4.0 * a * c;
        if discriminant < 0.0 {
            return None;
        }
        let root = discriminant.sqrt();

        // Take the nearest distance inside the ray extent.
        let t_near = (-b - root) / (2.0 * a);
        let t_far = (-b + root) / (2.0 * a);
        let t = if t_near > 0.0 && t_near < ray.t_max {
            t_near
        } else if t_far > 0.0 && t_far < ray.t_max {
            t_far
        } else {
            return None;
        };

        let p = ray.at(t);
        let n = Normal3f::from((p - self.center) / self.radius);
        Some(Hit::new(p, n, -ray.d, t))
    }

    fn area(&self) -> Float {
        FOUR_PI * self.radius * self.radius
    }

    fn sample(&self, u: &Point2f) -> (Point3f, Normal3f, Float) {
        let d = uniform_sample_sphere(u);
        let p = self.center + d * self.radius;
        (p, Normal3f::from(d), 1.0 / self.area())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use float_cmp::approx_eq;
    use lightgate_core::geometry::Dot;
    use lightgate_core::rng::RNG;

    fn unit_sphere() -> Sphere {
        Sphere::new(Point3f::new(0.0, 0.0, 0.0), 1.0).unwrap()
    }

    #[test]
    fn rejects_bad_radius() {
        assert!(Sphere::new(Point3f::new(0.0, 0.0, 0.0), 0.0).is_err());
        assert!(Sphere::new(Point3f::new(0.0, 0.0, 0.0), -1.0).is_err());
        assert!(Sphere::new(Point3f::new(0.0, 0.0, 0.0), Float::NAN).is_err());
    }

    #[test]
    fn ray_through_center_hits_near_side() {
        let sphere = unit_sphere();
        let ray = Ray::unbounded(Point3f::new(0.0, 0.0, -5.0), Vector3f::new(0.0, 0.0, 1.0));

        let hit = sphere.intersect(&ray).unwrap();
        assert!(approx_eq!(Float, hit.t, 4.0, epsilon = 1e-4));
        assert!(approx_eq!(Float, hit.n.z, -1.0, epsilon = 1e-4));
        assert_eq!(hit.wo, Vector3f::new(0.0, 0.0, -1.0));
    }

    #[test]
    fn ray_from_inside_hits_far_side() {
        let sphere = unit_sphere();
        let ray = Ray::unbounded(Point3f::new(0.0, 0.0, 0.0), Vector3f::new(0.0, 0.0, 1.0));

        let hit = sphere.intersect(&ray).unwrap();
        assert!(approx_eq!(Float, hit.t, 1.0, epsilon = 1e-4));
    }

    #[test]
    fn miss_returns_none() {
        let sphere = unit_sphere();
        let ray = Ray::unbounded(Point3f::new(0.0, 2.0, -5.0), Vector3f::new(0.0, 0.0, 1.0));
        assert!(sphere.intersect(&ray).is_none());
    }

    #[test]
    fn respects_ray_extent() {
        let sphere = unit_sphere();
        let mut ray = Ray::unbounded(Point3f::new(0.0, 0.0, -5.0), Vector3f::new(0.0, 0.0, 1.0));
        ray.t_max = 3.0;
        assert!(sphere.intersect(&ray).is_none());
        assert!(!sphere.intersect_p(&ray));
    }

    #[test]
    fn samples_lie_on_surface_with_uniform_density() {
        let sphere = Sphere::new(Point3f::new(1.0, 2.0, 3.0), 2.0).unwrap();
        let mut rng = RNG::new(9);
        for _ in 0..100 {
            let u = Point2f::new(rng.uniform_float(), rng.uniform_float());
            let (p, n, pdf) = sphere.sample(&u);
            assert!(approx_eq!(Float, p.distance(Point3f::new(1.0, 2.0, 3.0)), 2.0, epsilon = 1e-3));
            assert!(approx_eq!(Float, pdf, 1.0 / sphere.area(), epsilon = 1e-6));
            let outward = (p - Point3f::new(1.0, 2.0, 3.0)).normalize();
            assert!(outward.dot(&n) > 0.99);
        }
    }

    #[test]
    fn sample_from_zero_density_behind_surface() {
        let sphere = unit_sphere();
        // Reference point at the center sees every sampled normal facing away.
        let hit = Hit::new(
            Point3f::new(0.0, 0.0, 0.0),
            Normal3f::new(0.0, 0.0, 1.0),
            Vector3f::new(0.0, 0.0, 1.0),
            0.0,
        );
        let (_, _, pdf) = sphere.sample_from(&hit, &Point2f::new(0.3, 0.7));
        assert_eq!(pdf, 0.0);
    }
}
