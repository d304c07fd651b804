//! Interactions

use crate::base::SHADOW_EPSILON;
use crate::bsdf::ArcBsdf;
use crate::geometry::*;
use crate::light::ArcLight;

/// Geometric information at a ray/surface intersection point.
#[derive(Clone, Debug, Default)]
pub struct Hit {
    /// Intersection point.
    pub p: Point3f,

    /// Surface normal at the intersection point.
    pub n: Normal3f,

    /// Outgoing direction (towards the previous path vertex).
    pub wo: Vector3f,

    /// Parametric distance along the incoming ray.
    pub t: crate::base::Float,
}

impl Hit {
    /// Returns a new `Hit`.
    ///
    /// * `p`  - Intersection point.
    /// * `n`  - Surface normal at the intersection point.
    /// * `wo` - Outgoing direction (towards the previous path vertex).
    /// * `t`  - Parametric distance along the incoming ray.
    pub fn new(p: Point3f, n: Normal3f, wo: Vector3f, t: crate::base::Float) -> Self {
        Self { p, n, wo, t }
    }

    /// Spawns a new ray leaving the intersection point in the given direction,
    /// offsetting the origin along the normal to avoid self-intersection.
    ///
    /// * `d` - The new ray direction.
    pub fn spawn_ray(&self, d: &Vector3f) -> Ray {
        let offset = Vector3f::from(self.n) * SHADOW_EPSILON;
        let o = if d.dot(&self.n) >= 0.0 { self.p + offset } else { self.p - offset };
        Ray::unbounded(o, *d)
    }
}

/// A `Hit` together with the shading frame and the scattering/emission
/// behavior attached to the intersected primitive.
#[derive(Clone)]
pub struct SurfaceInteraction {
    /// The geometric intersection information.
    pub hit: Hit,

    /// The shading frame at the intersection point.
    pub shading: Frame,

    /// The BSDF of the intersected primitive, if any.
    pub bsdf: Option<ArcBsdf>,

    /// The area light attached to the intersected primitive, if any.
    pub light: Option<ArcLight>,
}

impl SurfaceInteraction {
    /// Returns a new `SurfaceInteraction` with the shading frame built around
    /// the hit normal.
    ///
    /// * `hit`   - The geometric intersection information.
    /// * `bsdf`  - The BSDF of the intersected primitive, if any.
    /// * `light` - The area light attached to the intersected primitive, if any.
    pub fn new(hit: Hit, bsdf: Option<ArcBsdf>, light: Option<ArcLight>) -> Self {
        let shading = Frame::from_normal(&hit.n);
        Self { hit, shading, bsdf, light }
    }

    /// Transforms a world-space direction into the shading frame.
    ///
    /// * `v` - The world-space direction.
    pub fn to_local(&self, v: &Vector3f) -> Vector3f {
        self.shading.to_local(v)
    }

    /// Transforms a local shading-frame direction into world space.
    ///
    /// * `v` - The local direction.
    pub fn to_world(&self, v: &Vector3f) -> Vector3f {
        self.shading.to_world(v)
    }

    /// Spawns a new ray leaving the intersection point in the given direction.
    ///
    /// * `d` - The new ray direction.
    pub fn spawn_ray(&self, d: &Vector3f) -> Ray {
        self.hit.spawn_ray(d)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::base::Float;

    #[test]
    fn spawn_ray_offsets_origin() {
        let hit = Hit::new(
            Point3f::new(0.0, 0.0, 0.0),
            Normal3f::new(0.0, 0.0, 1.0),
            Vector3f::new(0.0, 0.0, 1.0),
            1.0,
        );

        let up = hit.spawn_ray(&Vector3f::new(0.0, 0.0, 1.0));
        assert!(up.o.z > 0.0);

        let down = hit.spawn_ray(&Vector3f::new(0.0, 0.0, -1.0));
        assert!(down.o.z < 0.0);
        assert_eq!(up.t_max, Float::INFINITY);
    }
}
