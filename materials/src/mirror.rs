//! Perfect specular reflection.

use lightgate_core::base::Float;
use lightgate_core::bsdf::{Bsdf, BsdfFlags, BsdfSample};
use lightgate_core::geometry::*;
use lightgate_core::interaction::SurfaceInteraction;
use lightgate_core::spectrum::Spectrum;

/// A perfectly specular mirror BSDF. The lobe is degenerate, so evaluation
/// always returns zero and only sampling produces a contribution.
#[derive(Clone)]
pub struct MirrorBsdf {
    /// Specular reflectance.
    reflectance: Spectrum,
}

impl MirrorBsdf {
    /// Creates a new `MirrorBsdf`.
    ///
    /// * `reflectance` - Specular reflectance.
    pub fn new(reflectance: Spectrum) -> Self {
        Self { reflectance }
    }
}

impl Bsdf for MirrorBsdf {
    fn eval_pdf(&self, _si: &SurfaceInteraction, _wo: &Vector3f) -> (Spectrum, Float) {
        (Spectrum::ZERO, 0.0)
    }

    fn sample(&self, si: &SurfaceInteraction, _u1: Float, _u2: &Point2f) -> Option<(BsdfSample, Spectrum)> {
        let wi = si.to_local(&si.hit.wo);
        if cos_theta(&wi) <= 0.0 {
            return None;
        }

        // Reflect about the local z-axis.
        let wo = Vector3f::new(-wi.x, -wi.y, wi.z);
        let sample = BsdfSample::new(wo, 1.0, 1.0, BsdfFlags::DELTA_REFLECTION);
        Some((sample, self.reflectance))
    }

    fn flags(&self) -> BsdfFlags {
        BsdfFlags::DELTA_REFLECTION
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use float_cmp::approx_eq;
    use lightgate_core::interaction::Hit;

    fn interaction(wo_world: Vector3f) -> SurfaceInteraction {
        let hit = Hit::new(
            Point3f::new(0.0, 0.0, 0.0),
            Normal3f::new(0.0, 0.0, 1.0),
            wo_world,
            1.0,
        );
        SurfaceInteraction::new(hit, None, None)
    }

    #[test]
    fn evaluation_is_zero() {
        let bsdf = MirrorBsdf::new(Spectrum::new(0.9));
        let si = interaction(Vector3f::new(0.0, 0.0, 1.0));
        let (value, pdf) = bsdf.eval_pdf(&si, &Vector3f::new(0.0, 0.0, 1.0));
        assert!(value.is_black());
        assert_eq!(pdf, 0.0);
    }

    #[test]
    fn sample_reflects_about_normal() {
        let bsdf = MirrorBsdf::new(Spectrum::new(0.9));
        let wi = Vector3f::new(0.6, 0.0, 0.8);
        let si = interaction(wi);

        let (sample, weight) = bsdf.sample(&si, 0.5, &Point2f::new(0.5, 0.5)).unwrap();
        assert!(approx_eq!(Float, sample.wo.x, -0.6, epsilon = 1e-5));
        assert!(approx_eq!(Float, sample.wo.z, 0.8, epsilon = 1e-5));
        assert_eq!(sample.pdf, 1.0);
        assert_eq!(sample.flags, BsdfFlags::DELTA_REFLECTION);
        assert!(approx_eq!(Float, weight[0], 0.9, epsilon = 1e-6));
    }

    #[test]
    fn back_face_rejects_sampling() {
        let bsdf = MirrorBsdf::new(Spectrum::new(0.9));
        let si = interaction(Vector3f::new(0.0, 0.0, -1.0));
        assert!(bsdf.sample(&si, 0.5, &Point2f::new(0.5, 0.5)).is_none());
    }
}
