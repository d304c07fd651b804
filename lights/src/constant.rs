//! Constant Environment Lights

use lightgate_core::base::*;
use lightgate_core::geometry::*;
use lightgate_core::interaction::Hit;
use lightgate_core::light::{DirectionSample, Light};
use lightgate_core::sampling::{uniform_sample_sphere, uniform_sphere_pdf};
use lightgate_core::spectrum::Spectrum;

/// An environment light emitting constant radiance from every direction.
#[derive(Clone)]
pub struct ConstantLight {
    /// Emitted radiance.
    radiance: Spectrum,
}

impl ConstantLight {
    /// Creates a new `ConstantLight`.
    ///
    /// * `radiance` - Emitted radiance.
    pub fn new(radiance: Spectrum) -> Self {
        Self { radiance }
    }
}

impl Light for ConstantLight {
    fn sample_li(&self, hit: &Hit, u: &Point2f) -> (DirectionSample, Spectrum) {
        let d = uniform_sample_sphere(u);
        let ds = DirectionSample {
            p: hit.p + d,
            n: Normal3f::from(-d),
            d,
            dist: INFINITY,
            pdf: uniform_sphere_pdf(),
            delta: false,
            light: None,
        };
        (ds, self.radiance)
    }

    fn pdf_li(&self, _hit: &Hit, _d: &Vector3f) -> Float {
        uniform_sphere_pdf()
    }

    fn le(&self, _ray: &Ray) -> Spectrum {
        self.radiance
    }

    fn power(&self) -> Spectrum {
        self.radiance * FOUR_PI
    }

    fn is_environment(&self) -> bool {
        true
    }

    fn is_delta(&self) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use float_cmp::approx_eq;

    #[test]
    fn escaped_rays_see_the_radiance() {
        let light = ConstantLight::new(Spectrum::new(0.25));
        let ray = Ray::unbounded(Point3f::new(0.0, 0.0, 0.0), Vector3f::new(0.0, 1.0, 0.0));
        assert!(approx_eq!(Float, light.le(&ray)[0], 0.25));
    }

    #[test]
    fn samples_cover_the_sphere_at_uniform_density() {
        let light = ConstantLight::new(Spectrum::new(0.25));
        let hit = Hit::new(
            Point3f::new(0.0, 0.0, 0.0),
            Normal3f::new(0.0, 0.0, 1.0),
            Vector3f::new(0.0, 0.0, 1.0),
            1.0,
        );

        let (ds, li) = light.sample_li(&hit, &Point2f::new(0.3, 0.8));
        assert!(approx_eq!(Float, ds.pdf, INV_FOUR_PI, epsilon = 1e-7));
        assert_eq!(ds.dist, INFINITY);
        assert!(!ds.delta);
        assert!(approx_eq!(Float, li[0], 0.25));
        assert!(light.is_environment());
    }
}
