//! Pass-through BSDF.

use lightgate_core::base::Float;
use lightgate_core::bsdf::{Bsdf, BsdfFlags, BsdfSample};
use lightgate_core::geometry::*;
use lightgate_core::interaction::SurfaceInteraction;
use lightgate_core::spectrum::Spectrum;

/// A BSDF that forwards rays without changing direction or throughput. Used
/// for invisible boundaries that should not register as scattering events.
#[derive(Clone, Default)]
pub struct NullBsdf;

impl NullBsdf {
    /// Creates a new `NullBsdf`.
    pub fn new() -> Self {
        Self
    }
}

impl Bsdf for NullBsdf {
    fn eval_pdf(&self, _si: &SurfaceInteraction, _wo: &Vector3f) -> (Spectrum, Float) {
        (Spectrum::ZERO, 0.0)
    }

    fn sample(&self, si: &SurfaceInteraction, _u1: Float, _u2: &Point2f) -> Option<(BsdfSample, Spectrum)> {
        // Continue straight through the surface.
        let wo = -si.to_local(&si.hit.wo);
        let sample = BsdfSample::new(wo, 1.0, 1.0, BsdfFlags::NULL);
        Some((sample, Spectrum::ONE))
    }

    fn flags(&self) -> BsdfFlags {
        BsdfFlags::NULL
    }
}
