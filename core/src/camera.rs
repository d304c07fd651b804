//! Camera

use crate::base::{Float, PI};
use crate::geometry::*;

/// A pinhole perspective camera.
pub struct PerspectiveCamera {
    /// Camera position.
    eye: Point3f,

    /// Unit basis vector pointing right in the image plane.
    right: Vector3f,

    /// Unit basis vector pointing up in the image plane.
    up: Vector3f,

    /// Unit viewing direction.
    forward: Vector3f,

    /// Half the vertical field of view, as a tangent.
    tan_half_fov: Float,

    /// Image aspect ratio (width over height).
    aspect: Float,

    /// Image resolution in pixels.
    resolution: Point2i,
}

impl PerspectiveCamera {
    /// Creates a new `PerspectiveCamera`.
    ///
    /// * `eye`        - Camera position.
    /// * `look_at`    - Point the camera looks at.
    /// * `up`         - Up direction hint.
    /// * `fov_y`      - Vertical field of view in degrees.
    /// * `resolution` - Image resolution in pixels.
    pub fn new(eye: Point3f, look_at: Point3f, up: Vector3f, fov_y: Float, resolution: Point2i) -> Self {
        let forward = (look_at - eye).normalize();
        let right = forward.cross(&up).normalize();
        let up = right.cross(&forward);

        Self {
            eye,
            right,
            up,
            forward,
            tan_half_fov: (0.5 * fov_y * PI / 180.0).tan(),
            aspect: resolution.x as Float / resolution.y as Float,
            resolution,
        }
    }

    /// Returns the image resolution in pixels.
    pub fn resolution(&self) -> Point2i {
        self.resolution
    }

    /// Generates the camera ray through a point on the film plane.
    ///
    /// * `p_film` - The film point in raster coordinates.
    pub fn generate_ray(&self, p_film: &Point2f) -> Ray {
        let ndc_x = 2.0 * (p_film.x / self.resolution.x as Float) - 1.0;
        let ndc_y = 1.0 - 2.0 * (p_film.y / self.resolution.y as Float);

        let d = self.forward
            + self.right * (ndc_x * self.tan_half_fov * self.aspect)
            + self.up * (ndc_y * self.tan_half_fov);

        Ray::unbounded(self.eye, d.normalize())
    }
}
