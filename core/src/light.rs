//! Light interface

use crate::base::Float;
use crate::geometry::*;
use crate::interaction::Hit;
use crate::spectrum::Spectrum;
use std::sync::Arc;

/// A sampled direction towards a light source, as seen from a reference
/// point. Also used to describe an emitter found by a regular path ray so
/// its sampling density can be evaluated retroactively for MIS.
#[derive(Clone)]
pub struct DirectionSample {
    /// Sampled point on the light source.
    pub p: Point3f,

    /// Surface normal at the sampled point.
    pub n: Normal3f,

    /// Unit direction from the reference point to the sampled point.
    pub d: Vector3f,

    /// Distance from the reference point to the sampled point.
    pub dist: Float,

    /// Sampling density with respect to solid angle at the reference point.
    pub pdf: Float,

    /// Whether the sample was drawn from a degenerate (delta) distribution.
    pub delta: bool,

    /// The light the sample belongs to. Filled in by the scene.
    pub light: Option<ArcLight>,
}

/// Light trait provides emission evaluation and importance sampling.
pub trait Light {
    /// Samples a direction from the reference point towards the light and
    /// returns the sample record along with the incident radiance. The
    /// returned density excludes any light-selection probability.
    ///
    /// * `hit` - The reference point.
    /// * `u`   - Sample values for Monte Carlo integration.
    fn sample_li(&self, hit: &Hit, u: &Point2f) -> (DirectionSample, Spectrum);

    /// Returns the solid-angle density of `sample_li` producing the given
    /// direction from the reference point. Zero for delta lights.
    ///
    /// * `hit` - The reference point.
    /// * `d`   - The direction towards the light.
    fn pdf_li(&self, hit: &Hit, d: &Vector3f) -> Float;

    /// Returns the radiance emitted from a point on the light in the given
    /// outgoing direction. Non-zero only for area lights.
    ///
    /// * `hit` - The point on the light surface.
    /// * `w`   - The outgoing direction.
    fn l(&self, _hit: &Hit, _w: &Vector3f) -> Spectrum {
        Spectrum::ZERO
    }

    /// Returns the radiance arriving along a ray that escaped the scene.
    /// Non-zero only for environment lights.
    ///
    /// * `ray` - The escaped ray.
    fn le(&self, _ray: &Ray) -> Spectrum {
        Spectrum::ZERO
    }

    /// Returns the total emitted power.
    fn power(&self) -> Spectrum;

    /// Returns whether this is the scene's environment light.
    fn is_environment(&self) -> bool {
        false
    }

    /// Returns whether the light's direction distribution is degenerate.
    fn is_delta(&self) -> bool;
}

/// Atomic reference counted `Light`.
pub type ArcLight = Arc<dyn Light + Send + Sync>;
