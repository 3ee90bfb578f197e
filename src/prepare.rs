//! Source preparation: cropping and resampling to the working size.
//!
//! These run before the pipeline so that `generate` always sees a square
//! buffer of the resolution the reference constants were tuned for.

extern crate alloc;
use alloc::vec::Vec;

use imgref::ImgVec;
use rgb::RGBA;

use crate::error::PermuteError;

/// Largest centered square, as `(pixels, side)`.
pub fn center_crop_square(
    pixels: &[RGBA<u8>],
    width: usize,
    height: usize,
) -> Result<(Vec<RGBA<u8>>, usize), PermuteError> {
    crate::validate_inputs(pixels.len(), width, height)?;

    let side = width.min(height);
    let ox = (width - side) / 2;
    let oy = (height - side) / 2;

    let mut out = Vec::with_capacity(side * side);
    for y in oy..oy + side {
        out.extend_from_slice(&pixels[y * width + ox..][..side]);
    }
    Ok((out, side))
}

/// Bilinear resample, sampling at pixel centers with clamped edges.
pub fn resize_bilinear(
    pixels: &[RGBA<u8>],
    width: usize,
    height: usize,
    new_width: usize,
    new_height: usize,
) -> Result<Vec<RGBA<u8>>, PermuteError> {
    crate::validate_inputs(pixels.len(), width, height)?;
    if new_width == 0 || new_height == 0 {
        return Err(PermuteError::ZeroDimension);
    }
    if (new_width, new_height) == (width, height) {
        return Ok(pixels.to_vec());
    }

    let sx = width as f32 / new_width as f32;
    let sy = height as f32 / new_height as f32;

    let mut out = Vec::with_capacity(new_width * new_height);
    for y in 0..new_height {
        let fy_src = ((y as f32 + 0.5) * sy - 0.5).max(0.0);
        let y0 = (fy_src.floor() as usize).min(height - 1);
        let y1 = (y0 + 1).min(height - 1);
        let fy = (fy_src - y0 as f32).clamp(0.0, 1.0);

        for x in 0..new_width {
            let fx_src = ((x as f32 + 0.5) * sx - 0.5).max(0.0);
            let x0 = (fx_src.floor() as usize).min(width - 1);
            let x1 = (x0 + 1).min(width - 1);
            let fx = (fx_src - x0 as f32).clamp(0.0, 1.0);

            let p00 = pixels[y0 * width + x0];
            let p10 = pixels[y0 * width + x1];
            let p01 = pixels[y1 * width + x0];
            let p11 = pixels[y1 * width + x1];

            let lerp = |c00: u8, c10: u8, c01: u8, c11: u8| -> u8 {
                let top = c00 as f32 * (1.0 - fx) + c10 as f32 * fx;
                let bot = c01 as f32 * (1.0 - fx) + c11 as f32 * fx;
                (top * (1.0 - fy) + bot * fy).round().clamp(0.0, 255.0) as u8
            };

            out.push(RGBA::new(
                lerp(p00.r, p10.r, p01.r, p11.r),
                lerp(p00.g, p10.g, p01.g, p11.g),
                lerp(p00.b, p10.b, p01.b, p11.b),
                lerp(p00.a, p10.a, p01.a, p11.a),
            ));
        }
    }
    Ok(out)
}

/// Center-crop to a square and resample to `size`×`size`.
pub fn prepare_source(
    pixels: &[RGBA<u8>],
    width: usize,
    height: usize,
    size: usize,
) -> Result<ImgVec<RGBA<u8>>, PermuteError> {
    let (square, side) = center_crop_square(pixels, width, height)?;
    let resized = resize_bilinear(&square, side, side, size, size)?;
    log::debug!("prepared {width}x{height} source as {size}x{size} (crop side {side})");
    Ok(ImgVec::new(resized, size, size))
}
