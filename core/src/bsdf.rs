//! BSDF interface

use crate::base::Float;
use crate::geometry::{Point2f, Vector3f};
use crate::interaction::SurfaceInteraction;
use crate::spectrum::Spectrum;
use bitflags::bitflags;
use std::sync::Arc;

bitflags! {
    /// Capability flags describing the lobes of a BSDF.
    #[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
    pub struct BsdfFlags: u8 {
        /// Pass-through lobe that leaves the ray direction unchanged.
        const NULL = 0b00000001;

        /// Diffuse reflection lobe.
        const DIFFUSE_REFLECTION = 0b00000010;

        /// Perfectly specular reflection lobe.
        const DELTA_REFLECTION = 0b00000100;

        /// Non-degenerate lobes that light sampling can importance-sample.
        const SMOOTH = Self::DIFFUSE_REFLECTION.bits();

        /// Degenerate lobes for which light-sampling MIS is undefined.
        const DELTA = Self::DELTA_REFLECTION.bits() | Self::NULL.bits();
    }
}

/// Result of importance-sampling a BSDF.
#[derive(Copy, Clone, Debug)]
pub struct BsdfSample {
    /// The sampled direction in the local shading frame.
    pub wo: Vector3f,

    /// The sampling density of the chosen direction.
    pub pdf: Float,

    /// Relative index of refraction across the sampled lobe.
    pub eta: Float,

    /// The flags of the sampled lobe.
    pub flags: BsdfFlags,
}

impl BsdfSample {
    /// Returns a new `BsdfSample`.
    ///
    /// * `wo`    - The sampled direction in the local shading frame.
    /// * `pdf`   - The sampling density of the chosen direction.
    /// * `eta`   - Relative index of refraction across the sampled lobe.
    /// * `flags` - The flags of the sampled lobe.
    pub fn new(wo: Vector3f, pdf: Float, eta: Float, flags: BsdfFlags) -> Self {
        Self { wo, pdf, eta, flags }
    }
}

/// Bsdf trait provides scattering evaluation and importance sampling. All
/// directions are expressed in the local shading frame of the interaction.
pub trait Bsdf {
    /// Evaluates the BSDF value (including the cosine foreshortening term)
    /// and its sampling density for the given outgoing direction. Degenerate
    /// lobes evaluate to zero.
    ///
    /// * `si` - The surface interaction.
    /// * `wo` - The outgoing direction in the local shading frame.
    fn eval_pdf(&self, si: &SurfaceInteraction, wo: &Vector3f) -> (Spectrum, Float);

    /// Importance-samples an outgoing direction. Returns the sample record
    /// and the sampling weight (value times cosine over density), or `None`
    /// if no direction could be sampled.
    ///
    /// * `si` - The surface interaction.
    /// * `u1` - Sample value for lobe selection.
    /// * `u2` - Sample values for direction selection.
    fn sample(&self, si: &SurfaceInteraction, u1: Float, u2: &Point2f) -> Option<(BsdfSample, Spectrum)>;

    /// Returns the capability flags of all lobes.
    fn flags(&self) -> BsdfFlags;
}

/// Atomic reference counted `Bsdf`.
pub type ArcBsdf = Arc<dyn Bsdf + Send + Sync>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn smooth_and_delta_masks_are_disjoint() {
        assert!((BsdfFlags::SMOOTH & BsdfFlags::DELTA).is_empty());
        assert!(BsdfFlags::DELTA.contains(BsdfFlags::NULL));
        assert!(BsdfFlags::DELTA.contains(BsdfFlags::DELTA_REFLECTION));
        assert!(BsdfFlags::SMOOTH.contains(BsdfFlags::DIFFUSE_REFLECTION));
    }
}
