//! Integrator

use crate::base::Float;
use crate::camera::PerspectiveCamera;
use crate::film::Film;
use crate::geometry::{Point2f, Ray};
use crate::sampler::Sampler;
use crate::scene::Scene;
use crate::spectrum::Spectrum;
use crossbeam_channel::unbounded;
use indicatif::{ProgressBar, ProgressStyle};
use std::thread;

/// Used to decorrelate pixel sample streams from the scene-level seed.
const PIXEL_SEED_MULT: u64 = 0x9E3779B97F4A7C15;

/// Integrator interface for estimating radiance along a ray.
pub trait Integrator: Send + Sync {
    /// Returns the radiance estimate along a camera ray and whether the ray
    /// carries a visible contribution.
    ///
    /// * `scene`   - The scene.
    /// * `sampler` - The sampler supplying this path's random variates.
    /// * `ray`     - The ray to trace.
    fn sample(&self, scene: &Scene, sampler: &mut dyn Sampler, ray: &Ray) -> (Spectrum, bool);
}

/// Renders the scene to a film, distributing scanlines over worker threads.
/// Each pixel gets its own deterministically seeded sampler so the result is
/// independent of thread count and scheduling.
///
/// * `integrator` - The integrator.
/// * `scene`      - The scene.
/// * `camera`     - The camera.
/// * `sampler`    - Prototype sampler cloned per pixel.
/// * `spp`        - Number of samples per pixel.
/// * `seed`       - Scene-level seed.
pub fn render(
    integrator: &dyn Integrator,
    scene: &Scene,
    camera: &PerspectiveCamera,
    sampler: &dyn Sampler,
    spp: u32,
    seed: u64,
) -> Film {
    let resolution = camera.resolution();
    let width = resolution.x as u32;
    let height = resolution.y as u32;
    let mut film = Film::new(resolution);

    let n_threads = thread::available_parallelism().map_or(1, |n| n.get());
    info!("Rendering {}x{} at {} spp on {} threads", width, height, spp, n_threads);

    let progress = ProgressBar::new(height as u64);
    progress.set_style(
        ProgressStyle::with_template("{wide_bar} {pos}/{len} scanlines [{elapsed_precise}]")
            .unwrap_or_else(|_| ProgressStyle::default_bar()),
    );

    let (work_tx, work_rx) = unbounded::<u32>();
    let (result_tx, result_rx) = unbounded::<(u32, Vec<Spectrum>)>();
    for y in 0..height {
        // Queue never blocks; senders just see an empty queue when done.
        let _ = work_tx.send(y);
    }
    drop(work_tx);

    thread::scope(|s| {
        for _ in 0..n_threads {
            let work_rx = work_rx.clone();
            let result_tx = result_tx.clone();
            s.spawn(move || {
                while let Ok(y) = work_rx.recv() {
                    let row = render_scanline(integrator, scene, camera, sampler, spp, seed, y, width);
                    if result_tx.send((y, row)).is_err() {
                        break;
                    }
                }
            });
        }
        drop(result_tx);

        while let Ok((y, row)) = result_rx.recv() {
            film.merge_scanline(y, &row, spp);
            progress.inc(1);
        }
    });

    progress.finish();
    film
}

/// Renders one scanline, averaging `spp` jittered samples per pixel.
fn render_scanline(
    integrator: &dyn Integrator,
    scene: &Scene,
    camera: &PerspectiveCamera,
    sampler: &dyn Sampler,
    spp: u32,
    seed: u64,
    y: u32,
    width: u32,
) -> Vec<Spectrum> {
    let mut row = Vec::with_capacity(width as usize);

    for x in 0..width {
        let pixel_index = y as u64 * width as u64 + x as u64;
        let mut pixel_sampler = sampler.clone_sampler(seed ^ pixel_index.wrapping_mul(PIXEL_SEED_MULT));

        let mut sum = Spectrum::ZERO;
        for _ in 0..spp {
            let jitter = pixel_sampler.get_2d();
            let p_film = Point2f::new(x as Float + jitter.x, y as Float + jitter.y);
            let ray = camera.generate_ray(&p_film);

            let (l, valid) = integrator.sample(scene, pixel_sampler.as_mut(), &ray);
            let l = if valid { l } else { Spectrum::ZERO };

            if l.has_nans() {
                error!("NaN radiance at pixel ({}, {}); sample ignored", x, y);
            } else if l.y() < 0.0 {
                error!("Negative luminance {} at pixel ({}, {}); sample ignored", l.y(), x, y);
            } else if l.y().is_infinite() {
                error!("Infinite luminance at pixel ({}, {}); sample ignored", x, y);
            } else {
                sum += l;
            }
        }

        row.push(sum / spp as Float);
    }

    row
}
