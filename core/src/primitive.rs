//! Primitives

use crate::bsdf::ArcBsdf;
use crate::geometry::Ray;
use crate::interaction::SurfaceInteraction;
use crate::light::ArcLight;
use crate::shape::ArcShape;
use std::sync::Arc;

/// Primitive trait combines a piece of geometry with its scattering and
/// emission behavior.
pub trait Primitive {
    /// Traces the ray against the primitive and returns the nearest
    /// `SurfaceInteraction` within the ray extent, if any.
    ///
    /// * `ray` - The ray to trace.
    fn intersect(&self, ray: &Ray) -> Option<SurfaceInteraction>;

    /// Traces the ray against the primitive and returns whether an
    /// intersection occurred within the ray extent.
    ///
    /// * `ray` - The ray to trace.
    fn intersect_p(&self, ray: &Ray) -> bool;
}

/// Atomic reference counted `Primitive`.
pub type ArcPrimitive = Arc<dyn Primitive + Send + Sync>;

/// A shape with an optional BSDF and an optional attached area light.
pub struct GeometricPrimitive {
    /// The shape.
    pub shape: ArcShape,

    /// The BSDF describing scattering at the surface, if any.
    pub bsdf: Option<ArcBsdf>,

    /// The area light attached to the shape, if any.
    pub light: Option<ArcLight>,
}

impl GeometricPrimitive {
    /// Returns a new `GeometricPrimitive`.
    ///
    /// * `shape` - The shape.
    /// * `bsdf`  - The BSDF describing scattering at the surface, if any.
    /// * `light` - The area light attached to the shape, if any.
    pub fn new(shape: ArcShape, bsdf: Option<ArcBsdf>, light: Option<ArcLight>) -> Self {
        Self { shape, bsdf, light }
    }
}

impl Primitive for GeometricPrimitive {
    /// Traces the ray against the shape and attaches the primitive's BSDF
    /// and area light to the interaction.
    ///
    /// * `ray` - The ray to trace.
    fn intersect(&self, ray: &Ray) -> Option<SurfaceInteraction> {
        self.shape
            .intersect(ray)
            .map(|hit| SurfaceInteraction::new(hit, self.bsdf.clone(), self.light.clone()))
    }

    /// Traces the ray against the shape.
    ///
    /// * `ray` - The ray to trace.
    fn intersect_p(&self, ray: &Ray) -> bool {
        self.shape.intersect_p(ray)
    }
}
