//! Spectrum

use crate::base::Float;
use std::fmt;
use std::ops::{Add, AddAssign, Div, DivAssign, Index, Mul, MulAssign};

/// Number of samples in `RGBSpectrum`.
pub const RGB_SAMPLES: usize = 3;

/// Radiance or reflectance values represented as RGB samples.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct RGBSpectrum {
    /// The sampled values.
    c: [Float; RGB_SAMPLES],
}

/// Default to using `RGBSpectrum` for rendering.
pub type Spectrum = RGBSpectrum;

impl RGBSpectrum {
    /// The zero spectrum.
    pub const ZERO: Self = Self { c: [0.0; RGB_SAMPLES] };

    /// The unit spectrum.
    pub const ONE: Self = Self { c: [1.0; RGB_SAMPLES] };

    /// Creates a new spectrum with all samples set to a constant value.
    ///
    /// * `v` - The constant value.
    pub fn new(v: Float) -> Self {
        Self { c: [v; RGB_SAMPLES] }
    }

    /// Creates a new spectrum from RGB values.
    ///
    /// * `r` - The red value.
    /// * `g` - The green value.
    /// * `b` - The blue value.
    pub fn from_rgb(r: Float, g: Float, b: Float) -> Self {
        Self { c: [r, g, b] }
    }

    /// Returns true if all samples are 0.
    pub fn is_black(&self) -> bool {
        self.c.iter().all(|v| *v == 0.0)
    }

    /// Returns true if any sample is NaN.
    pub fn has_nans(&self) -> bool {
        self.c.iter().any(|v| v.is_nan())
    }

    /// Returns the largest sample value.
    pub fn max_component_value(&self) -> Float {
        self.c.iter().fold(Float::NEG_INFINITY, |m, v| if *v > m { *v } else { m })
    }

    /// Returns the CIE luminance of the RGB samples.
    pub fn y(&self) -> Float {
        0.212671 * self.c[0] + 0.715160 * self.c[1] + 0.072169 * self.c[2]
    }

    /// Returns `self * b + c` evaluated with a fused multiply-add per sample.
    ///
    /// * `b` - The multiplicand.
    /// * `c` - The addend.
    pub fn mul_add(&self, b: &Self, c: &Self) -> Self {
        Self {
            c: [
                self.c[0].mul_add(b.c[0], c.c[0]),
                self.c[1].mul_add(b.c[1], c.c[1]),
                self.c[2].mul_add(b.c[2], c.c[2]),
            ],
        }
    }

    /// Returns the RGB samples as an array.
    pub fn to_rgb(&self) -> [Float; RGB_SAMPLES] {
        self.c
    }
}

impl Add for RGBSpectrum {
    type Output = Self;

    /// Adds the samples of the given spectrum.
    ///
    /// * `other` - The spectrum to add.
    fn add(self, other: Self) -> Self {
        Self {
            c: [self.c[0] + other.c[0], self.c[1] + other.c[1], self.c[2] + other.c[2]],
        }
    }
}

impl AddAssign for RGBSpectrum {
    /// Performs the `+=` operation.
    ///
    /// * `other` - The spectrum to add.
    fn add_assign(&mut self, other: Self) {
        for i in 0..RGB_SAMPLES {
            self.c[i] += other.c[i];
        }
    }
}

impl Mul for RGBSpectrum {
    type Output = Self;

    /// Multiplies the samples of the given spectrum.
    ///
    /// * `other` - The spectrum to multiply.
    fn mul(self, other: Self) -> Self {
        Self {
            c: [self.c[0] * other.c[0], self.c[1] * other.c[1], self.c[2] * other.c[2]],
        }
    }
}

impl MulAssign for RGBSpectrum {
    /// Performs the `*=` operation.
    ///
    /// * `other` - The spectrum to multiply.
    fn mul_assign(&mut self, other: Self) {
        for i in 0..RGB_SAMPLES {
            self.c[i] *= other.c[i];
        }
    }
}

impl Mul<Float> for RGBSpectrum {
    type Output = Self;

    /// Scales the samples.
    ///
    /// * `f` - The scaling factor.
    fn mul(self, f: Float) -> Self {
        Self { c: [self.c[0] * f, self.c[1] * f, self.c[2] * f] }
    }
}

impl Mul<RGBSpectrum> for Float {
    type Output = RGBSpectrum;

    /// Scales the samples.
    ///
    /// * `s` - The spectrum.
    fn mul(self, s: RGBSpectrum) -> RGBSpectrum {
        s * self
    }
}

impl MulAssign<Float> for RGBSpectrum {
    /// Scales the samples.
    ///
    /// * `f` - The scaling factor.
    fn mul_assign(&mut self, f: Float) {
        for i in 0..RGB_SAMPLES {
            self.c[i] *= f;
        }
    }
}

impl Div<Float> for RGBSpectrum {
    type Output = Self;

    /// Scales the samples by 1/f.
    ///
    /// * `f` - The scaling factor.
    fn div(self, f: Float) -> Self {
        debug_assert!(f != 0.0);
        Self { c: [self.c[0] / f, self.c[1] / f, self.c[2] / f] }
    }
}

impl DivAssign<Float> for RGBSpectrum {
    /// Scales the samples by 1/f.
    ///
    /// * `f` - The scaling factor.
    fn div_assign(&mut self, f: Float) {
        debug_assert!(f != 0.0);
        for i in 0..RGB_SAMPLES {
            self.c[i] /= f;
        }
    }
}

impl Index<usize> for RGBSpectrum {
    type Output = Float;

    /// Index the spectrum to get a sample value.
    ///
    /// * `i` - The sample index (0, 1 or 2).
    fn index(&self, i: usize) -> &Self::Output {
        &self.c[i]
    }
}

impl fmt::Display for RGBSpectrum {
    /// Display the sample values.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}, {}]", self.c[0], self.c[1], self.c[2])
    }
}
