extern crate alloc;
use alloc::vec;
use alloc::vec::Vec;

/// Normalized 1-D Gaussian kernel for a blur radius in pixels.
///
/// sigma = radius, half-width = ceil(3 * sigma) capped at `max_half`. Radius 0
/// (or anything below the width of a single tap) yields the identity kernel
/// `[1.0]`.
pub fn gaussian_kernel(radius: f64, max_half: usize) -> Vec<f64> {
    let half = (radius * 3.0).ceil().min(max_half as f64) as usize;
    if radius <= 0.0 || half == 0 {
        return vec![1.0];
    }

    let two_sigma_sq = 2.0 * radius * radius;
    let mut kernel: Vec<f64> = (0..=2 * half)
        .map(|i| {
            let x = i as f64 - half as f64;
            (-x * x / two_sigma_sq).exp()
        })
        .collect();

    let sum: f64 = kernel.iter().sum();
    for v in &mut kernel {
        *v /= sum;
    }
    kernel
}

/// Separable Gaussian blur of a single-channel plane, clamp-to-edge.
pub fn gaussian_blur(plane: &[f64], width: usize, height: usize, radius: f64) -> Vec<f64> {
    debug_assert_eq!(plane.len(), width * height);

    // Taps past the plane size only resample the clamped edge
    let kernel = gaussian_kernel(radius, width.max(height));
    log::trace!("gaussian blur: radius {radius}, {} taps", kernel.len());
    if kernel.len() == 1 {
        return plane.to_vec();
    }

    let rows = convolve_rows(plane, width, height, &kernel);
    convolve_cols(&rows, width, height, &kernel)
}

/// Horizontal pass.
fn convolve_rows(src: &[f64], width: usize, height: usize, kernel: &[f64]) -> Vec<f64> {
    let half = kernel.len() / 2;
    let last = width as isize - 1;
    let mut dst = vec![0.0f64; src.len()];

    for y in 0..height {
        let row = &src[y * width..(y + 1) * width];
        let out = &mut dst[y * width..(y + 1) * width];
        for (x, o) in out.iter_mut().enumerate() {
            let mut acc = 0.0f64;
            for (ki, &kv) in kernel.iter().enumerate() {
                let sx = (x as isize + ki as isize - half as isize).clamp(0, last) as usize;
                acc += row[sx] * kv;
            }
            *o = acc;
        }
    }

    dst
}

/// Vertical pass.
fn convolve_cols(src: &[f64], width: usize, height: usize, kernel: &[f64]) -> Vec<f64> {
    let half = kernel.len() / 2;
    let last = height as isize - 1;
    let mut dst = vec![0.0f64; src.len()];

    for y in 0..height {
        let out = &mut dst[y * width..(y + 1) * width];
        for (ki, &kv) in kernel.iter().enumerate() {
            let sy = (y as isize + ki as isize - half as isize).clamp(0, last) as usize;
            let row = &src[sy * width..(sy + 1) * width];
            for (o, &s) in out.iter_mut().zip(row) {
                *o += s * kv;
            }
        }
    }

    dst
}
