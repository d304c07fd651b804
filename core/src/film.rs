//! Film

use crate::base::{clamp, gamma_correct, Float};
use crate::geometry::Point2i;
use crate::spectrum::Spectrum;
use image::{ImageBuffer, Rgb};

/// Accumulates radiance estimates per pixel and writes the final image.
pub struct Film {
    /// Image resolution in pixels.
    resolution: Point2i,

    /// Accumulated radiance per pixel, in row-major order.
    pixels: Vec<Spectrum>,

    /// Number of samples accumulated per pixel.
    n_samples: Vec<u32>,
}

impl Film {
    /// Creates a new `Film` with all pixels set to black.
    ///
    /// * `resolution` - Image resolution in pixels.
    pub fn new(resolution: Point2i) -> Self {
        let n = (resolution.x * resolution.y) as usize;
        Self {
            resolution,
            pixels: vec![Spectrum::ZERO; n],
            n_samples: vec![0; n],
        }
    }

    /// Returns the image resolution in pixels.
    pub fn resolution(&self) -> Point2i {
        self.resolution
    }

    /// Adds a radiance sample to a pixel.
    ///
    /// * `x` - Pixel column.
    /// * `y` - Pixel row.
    /// * `l` - The radiance estimate.
    pub fn add_sample(&mut self, x: u32, y: u32, l: Spectrum) {
        let index = (y as i32 * self.resolution.x + x as i32) as usize;
        self.pixels[index] += l;
        self.n_samples[index] += 1;
    }

    /// Merges a fully rendered scanline into the film.
    ///
    /// * `y`       - Pixel row.
    /// * `samples` - One radiance estimate per pixel in the row.
    /// * `spp`     - Number of samples already averaged into each estimate.
    pub fn merge_scanline(&mut self, y: u32, samples: &[Spectrum], spp: u32) {
        for (x, l) in samples.iter().enumerate() {
            let index = (y as i32 * self.resolution.x + x as i32) as usize;
            self.pixels[index] += *l * spp as Float;
            self.n_samples[index] += spp;
        }
    }

    /// Writes the image to a PNG file, averaging the accumulated samples and
    /// applying sRGB gamma correction.
    ///
    /// * `path` - Destination path.
    pub fn write_png(&self, path: &str) -> Result<(), String> {
        let width = self.resolution.x as u32;
        let height = self.resolution.y as u32;

        let mut img = ImageBuffer::new(width, height);
        for (x, y, pixel) in img.enumerate_pixels_mut() {
            let index = (y * width + x) as usize;
            let n = self.n_samples[index];
            let rgb = if n > 0 {
                (self.pixels[index] / n as Float).to_rgb()
            } else {
                [0.0; 3]
            };
            *pixel = Rgb(rgb.map(|v| (clamp(gamma_correct(v), 0.0, 1.0) * 255.0 + 0.5) as u8));
        }

        img.save(path).map_err(|e| format!("Error writing '{}': {}", path, e))
    }
}
