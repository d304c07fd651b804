//! Core

#[macro_use]
extern crate log;

// Re-export.
pub mod base;
pub mod bsdf;
pub mod camera;
pub mod film;
pub mod geometry;
pub mod integrator;
pub mod interaction;
pub mod light;
pub mod primitive;
pub mod rng;
pub mod sampler;
pub mod sampling;
pub mod scene;
pub mod shape;
pub mod spectrum;
