//! Scene

use crate::base::{min, Float, SHADOW_EPSILON};
use crate::geometry::*;
use crate::interaction::{Hit, SurfaceInteraction};
use crate::light::{ArcLight, DirectionSample};
use crate::primitive::ArcPrimitive;
use crate::spectrum::Spectrum;
use std::sync::Arc;

/// Read-only scene data shared by all concurrently traced paths.
pub struct Scene {
    /// All primitives in the scene.
    pub primitives: Vec<ArcPrimitive>,

    /// All light sources in the scene.
    pub lights: Vec<ArcLight>,

    /// The environment light, if the scene has one.
    environment: Option<ArcLight>,
}

impl Scene {
    /// Creates a new `Scene`.
    ///
    /// * `primitives` - All primitives in the scene.
    /// * `lights`     - All light sources in the scene.
    pub fn new(primitives: Vec<ArcPrimitive>, lights: Vec<ArcLight>) -> Self {
        let environment = lights.iter().find(|l| l.is_environment()).map(Arc::clone);
        Self { primitives, lights, environment }
    }

    /// Traces the ray into the scene and returns the nearest
    /// `SurfaceInteraction` if an intersection occurred.
    ///
    /// * `ray` - The ray to trace.
    pub fn intersect(&self, ray: &Ray) -> Option<SurfaceInteraction> {
        let mut nearest: Option<SurfaceInteraction> = None;
        let mut r = ray.clone();

        for primitive in self.primitives.iter() {
            if let Some(si) = primitive.intersect(&r) {
                r.t_max = si.hit.t;
                nearest = Some(si);
            }
        }

        nearest
    }

    /// Traces the ray into the scene and returns whether an intersection
    /// occurred within the ray extent.
    ///
    /// * `ray` - The ray to trace.
    pub fn intersect_p(&self, ray: &Ray) -> bool {
        self.primitives.iter().any(|p| p.intersect_p(ray))
    }

    /// Returns the environment light, if the scene has one.
    pub fn environment(&self) -> Option<&ArcLight> {
        self.environment.as_ref()
    }

    /// Samples one direction towards one light source from the reference
    /// point. The light is selected uniformly by reusing the first sample
    /// dimension, and the returned density includes the selection
    /// probability. The returned weight is the incident radiance divided by
    /// the joint density, and is zero when `test_visibility` is set and the
    /// connection is occluded. Returns `None` if the scene has no lights or
    /// the sample has zero density.
    ///
    /// * `hit`             - The reference point.
    /// * `u`               - Sample values for Monte Carlo integration.
    /// * `test_visibility` - Whether to trace a shadow ray.
    pub fn sample_emitter_direction(
        &self,
        hit: &Hit,
        u: &Point2f,
        test_visibility: bool,
    ) -> Option<(DirectionSample, Spectrum)> {
        let n_lights = self.lights.len();
        if n_lights == 0 {
            return None;
        }

        // Rescale u.x so it selects the light and can still be reused for
        // sampling the light itself.
        let scaled = u.x * n_lights as Float;
        let index = min(scaled as usize, n_lights - 1);
        let u_light = Point2f::new(scaled - index as Float, u.y);

        let light = &self.lights[index];
        let (mut ds, radiance) = light.sample_li(hit, &u_light);
        ds.pdf /= n_lights as Float;
        ds.light = Some(Arc::clone(light));

        if ds.pdf == 0.0 || radiance.is_black() {
            return None;
        }

        let mut weight = radiance / ds.pdf;
        if test_visibility {
            let mut shadow_ray = hit.spawn_ray(&ds.d);
            shadow_ray.t_max = ds.dist * (1.0 - SHADOW_EPSILON);
            if self.intersect_p(&shadow_ray) {
                debug!("Shadow ray blocked for emitter sample");
                weight = Spectrum::ZERO;
            }
        }

        Some((ds, weight))
    }

    /// Returns the density of `sample_emitter_direction` producing the given
    /// direction sample from the reference point, including the uniform
    /// light-selection probability. Zero for delta samples.
    ///
    /// * `hit` - The reference point.
    /// * `ds`  - The direction sample to evaluate.
    pub fn pdf_emitter_direction(&self, hit: &Hit, ds: &DirectionSample) -> Float {
        let n_lights = self.lights.len();
        if n_lights == 0 || ds.delta {
            return 0.0;
        }

        match ds.light.as_ref() {
            Some(light) => light.pdf_li(hit, &ds.d) / n_lights as Float,
            None => 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::light::Light;
    use crate::shape::{ArcShape, Shape};
    use float_cmp::approx_eq;

    /// Emits straight down onto any reference point from a fixed height.
    struct TestLight {
        p: Point3f,
        radiance: Spectrum,
    }

    impl Light for TestLight {
        fn sample_li(&self, hit: &Hit, u: &Point2f) -> (DirectionSample, Spectrum) {
            let to_light = self.p - hit.p;
            let dist = to_light.length();
            let ds = DirectionSample {
                p: self.p,
                n: Normal3f::new(0.0, 0.0, -1.0),
                d: to_light / dist,
                dist,
                // Report the selection-local sample so tests can observe
                // how the scene rescaled it.
                pdf: 0.5 + 0.5 * u.x,
                delta: false,
                light: None,
            };
            (ds, self.radiance)
        }

        fn pdf_li(&self, _hit: &Hit, _d: &Vector3f) -> Float {
            0.25
        }

        fn power(&self) -> Spectrum {
            self.radiance
        }

        fn is_delta(&self) -> bool {
            false
        }
    }

    struct Blocker;

    impl Shape for Blocker {
        fn intersect(&self, ray: &Ray) -> Option<Hit> {
            // A z = 1 plane.
            if ray.d.z == 0.0 {
                return None;
            }
            let t = (1.0 - ray.o.z) / ray.d.z;
            if t > 0.0 && t < ray.t_max {
                Some(Hit::new(ray.at(t), Normal3f::new(0.0, 0.0, -1.0), -ray.d, t))
            } else {
                None
            }
        }

        fn area(&self) -> Float {
            INFINITY
        }

        fn sample(&self, _u: &Point2f) -> (Point3f, Normal3f, Float) {
            (Point3f::new(0.0, 0.0, 1.0), Normal3f::new(0.0, 0.0, -1.0), 0.0)
        }
    }

    use crate::base::INFINITY;
    use crate::primitive::GeometricPrimitive;

    fn reference() -> Hit {
        Hit::new(
            Point3f::new(0.0, 0.0, 0.0),
            Normal3f::new(0.0, 0.0, 1.0),
            Vector3f::new(0.0, 0.0, 1.0),
            1.0,
        )
    }

    fn test_light(z: Float) -> ArcLight {
        Arc::new(TestLight {
            p: Point3f::new(0.0, 0.0, z),
            radiance: Spectrum::new(1.0),
        })
    }

    #[test]
    fn selection_divides_the_density_by_the_light_count() {
        let scene = Scene::new(vec![], vec![test_light(2.0), test_light(3.0)]);
        let hit = reference();

        // u.x = 0.6 selects index 1 and rescales to 0.2.
        let (ds, weight) = scene
            .sample_emitter_direction(&hit, &Point2f::new(0.6, 0.5), false)
            .unwrap();
        let local_pdf = 0.5 + 0.5 * 0.2;
        assert!(approx_eq!(Float, ds.pdf, local_pdf / 2.0, epsilon = 1e-6));
        assert!(approx_eq!(Float, ds.dist, 3.0, epsilon = 1e-6));
        assert!(approx_eq!(Float, weight[0], 1.0 / ds.pdf, epsilon = 1e-4));

        // The retroactive density also carries the selection probability.
        assert!(approx_eq!(Float, scene.pdf_emitter_direction(&hit, &ds), 0.25 / 2.0));
    }

    #[test]
    fn no_lights_yields_no_sample() {
        let scene = Scene::new(vec![], vec![]);
        let hit = reference();
        assert!(scene
            .sample_emitter_direction(&hit, &Point2f::new(0.5, 0.5), false)
            .is_none());
        let ds = DirectionSample {
            p: Point3f::new(0.0, 0.0, 1.0),
            n: Normal3f::new(0.0, 0.0, -1.0),
            d: Vector3f::new(0.0, 0.0, 1.0),
            dist: 1.0,
            pdf: 1.0,
            delta: false,
            light: None,
        };
        assert_eq!(scene.pdf_emitter_direction(&hit, &ds), 0.0);
    }

    #[test]
    fn occluded_samples_keep_the_record_but_zero_the_weight() {
        let blocker: ArcShape = Arc::new(Blocker);
        let primitive: ArcPrimitive = Arc::new(GeometricPrimitive::new(blocker, None, None));
        let scene = Scene::new(vec![primitive], vec![test_light(2.0)]);
        let hit = reference();

        let (ds, weight) = scene
            .sample_emitter_direction(&hit, &Point2f::new(0.0, 0.5), true)
            .unwrap();
        assert!(ds.pdf > 0.0);
        assert!(weight.is_black());
    }

    #[test]
    fn delta_samples_have_zero_retroactive_density() {
        let scene = Scene::new(vec![], vec![test_light(2.0)]);
        let hit = reference();
        let ds = DirectionSample {
            p: Point3f::new(0.0, 0.0, 2.0),
            n: Normal3f::new(0.0, 0.0, -1.0),
            d: Vector3f::new(0.0, 0.0, 1.0),
            dist: 2.0,
            pdf: 1.0,
            delta: true,
            light: scene.lights.first().map(Arc::clone),
        };
        assert_eq!(scene.pdf_emitter_direction(&hit, &ds), 0.0);
    }
}
