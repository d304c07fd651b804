//! Point Lights

use lightgate_core::base::*;
use lightgate_core::geometry::*;
use lightgate_core::interaction::Hit;
use lightgate_core::light::{DirectionSample, Light};
use lightgate_core::spectrum::Spectrum;

/// An isotropic point light source.
#[derive(Clone)]
pub struct PointLight {
    /// Position of the light.
    position: Point3f,

    /// Radiant intensity.
    intensity: Spectrum,
}

impl PointLight {
    /// Creates a new `PointLight`.
    ///
    /// * `position`  - Position of the light.
    /// * `intensity` - Radiant intensity.
    pub fn new(position: Point3f, intensity: Spectrum) -> Self {
        Self { position, intensity }
    }
}

impl Light for PointLight {
    fn sample_li(&self, hit: &Hit, _u: &Point2f) -> (DirectionSample, Spectrum) {
        let to_light = self.position - hit.p;
        let dist_squared = to_light.length_squared();
        if dist_squared == 0.0 {
            let ds = DirectionSample {
                p: self.position,
                n: Normal3f::new(0.0, 0.0, 0.0),
                d: Vector3f::zero(),
                dist: 0.0,
                pdf: 0.0,
                delta: true,
                light: None,
            };
            return (ds, Spectrum::ZERO);
        }

        let dist = dist_squared.sqrt();
        let d = to_light / dist;
        let ds = DirectionSample {
            p: self.position,
            n: Normal3f::from(-d),
            d,
            dist,
            pdf: 1.0,
            delta: true,
            light: None,
        };
        (ds, self.intensity / dist_squared)
    }

    fn pdf_li(&self, _hit: &Hit, _d: &Vector3f) -> Float {
        0.0
    }

    fn power(&self) -> Spectrum {
        self.intensity * FOUR_PI
    }

    fn is_delta(&self) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use float_cmp::approx_eq;

    fn reference(p: Point3f) -> Hit {
        Hit::new(p, Normal3f::new(0.0, 0.0, 1.0), Vector3f::new(0.0, 0.0, 1.0), 1.0)
    }

    #[test]
    fn radiance_falls_off_with_squared_distance() {
        let light = PointLight::new(Point3f::new(0.0, 0.0, 2.0), Spectrum::new(4.0));
        let hit = reference(Point3f::new(0.0, 0.0, 0.0));

        let (ds, li) = light.sample_li(&hit, &Point2f::new(0.5, 0.5));
        assert!(approx_eq!(Float, ds.dist, 2.0, epsilon = 1e-5));
        assert!(approx_eq!(Float, ds.d.z, 1.0, epsilon = 1e-5));
        assert_eq!(ds.pdf, 1.0);
        assert!(ds.delta);
        assert!(approx_eq!(Float, li[0], 1.0, epsilon = 1e-5));
    }

    #[test]
    fn pdf_is_zero_for_delta_distribution() {
        let light = PointLight::new(Point3f::new(0.0, 0.0, 2.0), Spectrum::new(4.0));
        let hit = reference(Point3f::new(0.0, 0.0, 0.0));
        assert_eq!(light.pdf_li(&hit, &Vector3f::new(0.0, 0.0, 1.0)), 0.0);
    }

    #[test]
    fn coincident_reference_point_has_zero_density() {
        let light = PointLight::new(Point3f::new(1.0, 1.0, 1.0), Spectrum::new(4.0));
        let hit = reference(Point3f::new(1.0, 1.0, 1.0));
        let (ds, li) = light.sample_li(&hit, &Point2f::new(0.5, 0.5));
        assert_eq!(ds.pdf, 0.0);
        assert!(li.is_black());
    }
}
