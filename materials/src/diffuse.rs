//! Lambertian diffuse reflection.

use lightgate_core::base::*;
use lightgate_core::bsdf::{Bsdf, BsdfFlags, BsdfSample};
use lightgate_core::geometry::*;
use lightgate_core::interaction::SurfaceInteraction;
use lightgate_core::sampling::{cosine_hemisphere_pdf, cosine_sample_hemisphere};
use lightgate_core::spectrum::Spectrum;

/// A one-sided Lambertian diffuse BSDF.
#[derive(Clone)]
pub struct DiffuseBsdf {
    /// Diffuse reflectance.
    reflectance: Spectrum,
}

impl DiffuseBsdf {
    /// Creates a new `DiffuseBsdf`.
    ///
    /// * `reflectance` - Diffuse reflectance.
    pub fn new(reflectance: Spectrum) -> Self {
        Self { reflectance }
    }
}

impl Bsdf for DiffuseBsdf {
    fn eval_pdf(&self, si: &SurfaceInteraction, wo: &Vector3f) -> (Spectrum, Float) {
        let wi = si.to_local(&si.hit.wo);
        let cos_theta_i = cos_theta(&wi);
        let cos_theta_o = cos_theta(wo);

        // Reflection only; either direction below the surface kills the lobe.
        if cos_theta_i <= 0.0 || cos_theta_o <= 0.0 {
            return (Spectrum::ZERO, 0.0);
        }

        let value = self.reflectance * (INV_PI * cos_theta_o);
        (value, cosine_hemisphere_pdf(cos_theta_o))
    }

    fn sample(&self, si: &SurfaceInteraction, _u1: Float, u2: &Point2f) -> Option<(BsdfSample, Spectrum)> {
        let wi = si.to_local(&si.hit.wo);
        if cos_theta(&wi) <= 0.0 {
            return None;
        }

        let wo = cosine_sample_hemisphere(u2);
        let pdf = cosine_hemisphere_pdf(cos_theta(&wo));
        if pdf == 0.0 {
            return None;
        }

        // The cosine in the sampling density cancels against the
        // foreshortening term, leaving the reflectance as the weight.
        let sample = BsdfSample::new(wo, pdf, 1.0, BsdfFlags::DIFFUSE_REFLECTION);
        Some((sample, self.reflectance))
    }

    fn flags(&self) -> BsdfFlags {
        BsdfFlags::DIFFUSE_REFLECTION
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use float_cmp::approx_eq;
    use lightgate_core::interaction::Hit;
    use lightgate_core::rng::RNG;

    fn interaction() -> SurfaceInteraction {
        let hit = Hit::new(
            Point3f::new(0.0, 0.0, 0.0),
            Normal3f::new(0.0, 0.0, 1.0),
            Vector3f::new(0.0, 0.0, 1.0),
            1.0,
        );
        SurfaceInteraction::new(hit, None, None)
    }

    #[test]
    fn eval_matches_cosine_density() {
        let bsdf = DiffuseBsdf::new(Spectrum::new(0.5));
        let si = interaction();
        let wo = Vector3f::new(0.0, 0.0, 1.0);

        let (value, pdf) = bsdf.eval_pdf(&si, &wo);
        assert!(approx_eq!(Float, value[0], 0.5 * INV_PI, epsilon = 1e-6));
        assert!(approx_eq!(Float, pdf, INV_PI, epsilon = 1e-6));
    }

    #[test]
    fn below_surface_evaluates_to_zero() {
        let bsdf = DiffuseBsdf::new(Spectrum::new(0.5));
        let si = interaction();

        let (value, pdf) = bsdf.eval_pdf(&si, &Vector3f::new(0.0, 0.0, -1.0));
        assert!(value.is_black());
        assert_eq!(pdf, 0.0);
    }

    #[test]
    fn sample_weight_is_reflectance() {
        let bsdf = DiffuseBsdf::new(Spectrum::new(0.7));
        let si = interaction();
        let mut rng = RNG::new(13);

        for _ in 0..100 {
            let u = Point2f::new(rng.uniform_float(), rng.uniform_float());
            let (sample, weight) = bsdf.sample(&si, 0.5, &u).unwrap();
            assert!(sample.pdf > 0.0);
            assert!(sample.wo.z >= 0.0);
            assert_eq!(sample.flags, BsdfFlags::DIFFUSE_REFLECTION);
            assert!(approx_eq!(Float, weight[0], 0.7, epsilon = 1e-6));
        }
    }

    #[test]
    fn grazing_incidence_rejects_sampling() {
        let bsdf = DiffuseBsdf::new(Spectrum::new(0.7));
        let hit = Hit::new(
            Point3f::new(0.0, 0.0, 0.0),
            Normal3f::new(0.0, 0.0, 1.0),
            Vector3f::new(0.0, 0.0, -1.0),
            1.0,
        );
        let si = SurfaceInteraction::new(hit, None, None);
        assert!(bsdf.sample(&si, 0.5, &Point2f::new(0.5, 0.5)).is_none());
    }
}
