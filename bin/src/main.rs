#[macro_use]
extern crate log;

use clap::Parser;
use lightgate_core::base::Float;
use lightgate_core::bsdf::ArcBsdf;
use lightgate_core::camera::PerspectiveCamera;
use lightgate_core::geometry::*;
use lightgate_core::integrator::render;
use lightgate_core::light::ArcLight;
use lightgate_core::primitive::{ArcPrimitive, GeometricPrimitive};
use lightgate_core::scene::Scene;
use lightgate_core::shape::ArcShape;
use lightgate_core::spectrum::Spectrum;
use lightgate_integrators::{GateKind, TimeGatedPathIntegrator};
use lightgate_lights::{ConstantLight, DiffuseAreaLight};
use lightgate_materials::{DiffuseBsdf, MirrorBsdf};
use lightgate_samplers::IndependentSampler;
use lightgate_shapes::Sphere;
use std::sync::Arc;

/// Command line options.
#[derive(Parser, Clone)]
#[clap(author, version, about = "Time-gated path tracer", long_about = None)]
struct Options {
    /// Image width in pixels.
    #[clap(long, value_name = "NUM", default_value_t = 256)]
    width: u32,

    /// Image height in pixels.
    #[clap(long, value_name = "NUM", default_value_t = 256)]
    height: u32,

    /// Samples per pixel.
    #[clap(long, value_name = "NUM", default_value_t = 64)]
    spp: u32,

    /// Hard cap on path depth. Zero traces nothing.
    #[clap(long = "max-depth", value_name = "NUM", default_value_t = 8)]
    max_depth: u32,

    /// Depth at which Russian roulette termination starts.
    #[clap(long = "rr-depth", value_name = "NUM", default_value_t = 5)]
    rr_depth: u32,

    /// Suppress directly visible emitters and background.
    #[clap(long = "hide-emitters")]
    hide_emitters: bool,

    /// Target gate arrival time in picoseconds.
    #[clap(long, value_name = "PS", default_value_t = 0.0)]
    tau: Float,

    /// Full width of the rectangular gate in picoseconds.
    #[clap(long = "delta-tau", value_name = "PS", default_value_t = 0.0)]
    delta_tau: Float,

    /// Gate shape: 'rect' or 'step'.
    #[clap(long, value_name = "KIND", default_value = "rect")]
    gate: String,

    /// Number of frames to render while sweeping the gate center.
    #[clap(long, value_name = "NUM", default_value_t = 1)]
    frames: u32,

    /// Gate center increment per frame in picoseconds.
    #[clap(long = "tau-step", value_name = "PS", default_value_t = 0.0)]
    tau_step: Float,

    /// Seed for the random sample streams.
    #[clap(long, value_name = "NUM", default_value_t = 0)]
    seed: u64,

    /// Output image path. Sweeps append the frame index to the stem.
    #[clap(long = "outfile", short = 'o', value_name = "FILE", default_value = "out.png")]
    outfile: String,
}

fn main() {
    env_logger::init();

    let options = Options::parse();
    if let Err(e) = run(&options) {
        error!("{e}");
        std::process::exit(1);
    }
}

fn run(options: &Options) -> Result<(), String> {
    let gate_kind: GateKind = options.gate.parse()?;

    let scene = build_scene()?;
    let camera = PerspectiveCamera::new(
        Point3f::new(0.0, 1.0, 4.0),
        Point3f::new(0.0, 0.5, 0.0),
        Vector3f::new(0.0, 1.0, 0.0),
        45.0,
        Point2i::new(options.width as i32, options.height as i32),
    );
    let sampler = IndependentSampler::new(options.seed);

    for frame in 0..options.frames {
        let tau = options.tau + frame as Float * options.tau_step;
        let integrator = TimeGatedPathIntegrator::new(
            options.max_depth,
            options.rr_depth,
            options.hide_emitters,
            tau,
            options.delta_tau,
            gate_kind,
        )?;

        info!("Frame {}/{}: tau = {} ps", frame + 1, options.frames, tau);
        let film = render(&integrator, &scene, &camera, &sampler, options.spp, options.seed);

        let path = frame_path(&options.outfile, frame, options.frames);
        film.write_png(&path)?;
        info!("Wrote '{}'", path);
    }

    Ok(())
}

/// Returns the output path for a frame, appending the frame index to the
/// file stem when sweeping.
fn frame_path(outfile: &str, frame: u32, frames: u32) -> String {
    if frames == 1 {
        return outfile.to_string();
    }
    match outfile.rsplit_once('.') {
        Some((stem, ext)) => format!("{}_{:04}.{}", stem, frame, ext),
        None => format!("{}_{:04}", outfile, frame),
    }
}

/// A small demo scene: a diffuse floor, a mirror ball and a diffuse ball lit
/// by a spherical area light, inside a dim constant environment. The
/// geometry spans a few scene units, so interesting gate centers lie within
/// a few times the unit travel time.
fn build_scene() -> Result<Scene, String> {
    let mut primitives: Vec<ArcPrimitive> = Vec::new();
    let mut lights: Vec<ArcLight> = Vec::new();

    // Floor.
    let floor: ArcShape = Arc::new(Sphere::new(Point3f::new(0.0, -100.0, 0.0), 100.0)?);
    let floor_bsdf: ArcBsdf = Arc::new(DiffuseBsdf::new(Spectrum::from_rgb(0.6, 0.6, 0.6)));
    primitives.push(Arc::new(GeometricPrimitive::new(floor, Some(floor_bsdf), None)));

    // Mirror ball.
    let mirror: ArcShape = Arc::new(Sphere::new(Point3f::new(-0.9, 0.5, 0.0), 0.5)?);
    let mirror_bsdf: ArcBsdf = Arc::new(MirrorBsdf::new(Spectrum::from_rgb(0.9, 0.9, 0.9)));
    primitives.push(Arc::new(GeometricPrimitive::new(mirror, Some(mirror_bsdf), None)));

    // Diffuse ball.
    let ball: ArcShape = Arc::new(Sphere::new(Point3f::new(0.9, 0.5, 0.0), 0.5)?);
    let ball_bsdf: ArcBsdf = Arc::new(DiffuseBsdf::new(Spectrum::from_rgb(0.7, 0.3, 0.2)));
    primitives.push(Arc::new(GeometricPrimitive::new(ball, Some(ball_bsdf), None)));

    // Spherical area light overhead.
    let bulb: ArcShape = Arc::new(Sphere::new(Point3f::new(0.0, 3.0, 0.5), 0.3)?);
    let bulb_light: ArcLight = Arc::new(DiffuseAreaLight::new(
        bulb.clone(),
        Spectrum::from_rgb(40.0, 40.0, 40.0),
    ));
    let bulb_bsdf: ArcBsdf = Arc::new(DiffuseBsdf::new(Spectrum::ZERO));
    primitives.push(Arc::new(GeometricPrimitive::new(
        bulb,
        Some(bulb_bsdf),
        Some(bulb_light.clone()),
    )));
    lights.push(bulb_light);

    // Dim environment.
    lights.push(Arc::new(ConstantLight::new(Spectrum::from_rgb(0.05, 0.05, 0.08))));

    Ok(Scene::new(primitives, lights))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frame_paths_are_stable() {
        assert_eq!(frame_path("out.png", 0, 1), "out.png");
        assert_eq!(frame_path("out.png", 3, 10), "out_0003.png");
        assert_eq!(frame_path("render", 3, 10), "render_0003");
    }
}
