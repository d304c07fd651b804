//! Sampler

use crate::base::Float;
use crate::geometry::Point2f;

/// Sampler interface: a stream of uniform variates in [0, 1). Each in-flight
/// path owns its own sampler so streams are never shared across paths.
pub trait Sampler: Send + Sync {
    /// Returns the sample value for the next dimension.
    fn get_1d(&mut self) -> Float;

    /// Returns the sample values for the next two dimensions.
    fn get_2d(&mut self) -> Point2f;

    /// Generates a new, independently seeded instance of the sampler.
    ///
    /// * `seed` - The seed for the new sample stream.
    fn clone_sampler(&self, seed: u64) -> Box<dyn Sampler>;
}
