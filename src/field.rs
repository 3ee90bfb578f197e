extern crate alloc;
use alloc::vec::Vec;

use crate::blur::gaussian_blur;
use crate::error::PermuteError;
use crate::hsv::luma;

/// Tie-break weight per column.
pub const TIE_BREAK_COLUMN: f64 = 1e-7;
/// Tie-break weight per row.
pub const TIE_BREAK_ROW: f64 = 1e-9;

/// A dense row-major scalar per pixel, used as a destination sort key.
#[derive(Debug, Clone, PartialEq)]
pub struct ScalarField {
    width: usize,
    height: usize,
    values: Vec<f64>,
}

impl ScalarField {
    /// Wrap precomputed values. Returns `None` if the length does not match.
    pub fn from_values(values: Vec<f64>, width: usize, height: usize) -> Option<Self> {
        (values.len() == width * height).then_some(Self {
            width,
            height,
            values,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn get(&self, x: usize, y: usize) -> f64 {
        self.values[y * self.width + x]
    }

    pub fn into_values(self) -> Vec<f64> {
        self.values
    }
}

/// Positional perturbation added to every field entry.
#[inline]
pub fn tie_break(x: usize, y: usize) -> f64 {
    x as f64 * TIE_BREAK_COLUMN + y as f64 * TIE_BREAK_ROW
}

/// `floor(v * levels) / levels`; `levels == 0` leaves `v` untouched.
#[inline]
pub fn quantize(v: f64, levels: u32) -> f64 {
    if levels == 0 {
        return v;
    }
    let l = levels as f64;
    (v * l).floor() / l
}

/// Build a smoothed luminance field.
///
/// 1. BT.709 luma per pixel, [0, 255]
/// 2. Gaussian blur of `blur_radius` pixels
/// 3. Normalize by 255
/// 4. Quantize to `quant_levels` plateaus (skipped when 0)
/// 5. Add the positional tie-break
///
/// The source alpha channel is ignored.
pub fn build_field(
    pixels: &[rgb::RGBA<u8>],
    width: usize,
    height: usize,
    blur_radius: f64,
    quant_levels: u32,
) -> Result<ScalarField, PermuteError> {
    crate::validate_inputs(pixels.len(), width, height)?;
    if !blur_radius.is_finite() || blur_radius < 0.0 {
        return Err(PermuteError::InvalidBlurRadius(blur_radius));
    }

    let lum: Vec<f64> = pixels.iter().map(|p| luma(p.r, p.g, p.b)).collect();
    let blurred = gaussian_blur(&lum, width, height, blur_radius);

    let mut values = Vec::with_capacity(blurred.len());
    for y in 0..height {
        for x in 0..width {
            let v = blurred[y * width + x] / 255.0;
            values.push(quantize(v, quant_levels) + tie_break(x, y));
        }
    }

    Ok(ScalarField {
        width,
        height,
        values,
    })
}
