//! Diffuse Area Lights

use lightgate_core::base::*;
use lightgate_core::geometry::*;
use lightgate_core::interaction::Hit;
use lightgate_core::light::{DirectionSample, Light};
use lightgate_core::shape::ArcShape;
use lightgate_core::spectrum::Spectrum;

/// An area light that emits uniform radiance from the front face of a shape.
#[derive(Clone)]
pub struct DiffuseAreaLight {
    /// The emitting shape.
    shape: ArcShape,

    /// Emitted radiance.
    radiance: Spectrum,
}

impl DiffuseAreaLight {
    /// Creates a new `DiffuseAreaLight`.
    ///
    /// * `shape`    - The emitting shape.
    /// * `radiance` - Emitted radiance.
    pub fn new(shape: ArcShape, radiance: Spectrum) -> Self {
        Self { shape, radiance }
    }
}

impl Light for DiffuseAreaLight {
    fn sample_li(&self, hit: &Hit, u: &Point2f) -> (DirectionSample, Spectrum) {
        let (p, n, pdf) = self.shape.sample_from(hit, u);

        let to_light = p - hit.p;
        let dist = to_light.length();
        if pdf == 0.0 || dist == 0.0 {
            let ds = DirectionSample {
                p,
                n,
                d: Vector3f::zero(),
                dist: 0.0,
                pdf: 0.0,
                delta: false,
                light: None,
            };
            return (ds, Spectrum::ZERO);
        }

        let d = to_light / dist;
        let ds = DirectionSample { p, n, d, dist, pdf, delta: false, light: None };

        // sample_from only returns non-zero densities for front-facing
        // samples, so the emission test reduces to the radiance itself.
        (ds, self.radiance)
    }

    fn pdf_li(&self, hit: &Hit, d: &Vector3f) -> Float {
        self.shape.pdf_from(hit, d)
    }

    fn l(&self, hit: &Hit, w: &Vector3f) -> Spectrum {
        // One-sided emission from the front face.
        if hit.n.dot(w) > 0.0 {
            self.radiance
        } else {
            Spectrum::ZERO
        }
    }

    fn power(&self) -> Spectrum {
        self.radiance * (PI * self.shape.area())
    }

    fn is_delta(&self) -> bool {
        false
    }
}
