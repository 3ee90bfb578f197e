extern crate alloc;
use alloc::vec;
use alloc::vec::Vec;

use crate::error::PermuteError;
use crate::field::ScalarField;
use crate::hsv::{luma, rgb_to_hsv};

/// Which scalar orders the source pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceKey {
    /// Hue first, with saturation and value as minor weights.
    Hue,
    /// BT.709 luma of the unblurred pixel.
    Luma,
}

impl SourceKey {
    #[inline]
    pub fn key(self, p: rgb::RGBA<u8>) -> f64 {
        match self {
            Self::Hue => rgb_to_hsv(p.r, p.g, p.b).sort_key(),
            Self::Luma => luma(p.r, p.g, p.b),
        }
    }
}

/// Per-pixel source keys.
pub fn source_keys(pixels: &[rgb::RGBA<u8>], key: SourceKey) -> Vec<f64> {
    pixels.iter().map(|&p| key.key(p)).collect()
}

/// Pixel indices sorted ascending by key.
///
/// Equal keys fall back to ascending pixel index, so the order is a total
/// order and identical across sort implementations.
pub fn rank_order(keys: &[f64]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..keys.len()).collect();
    order.sort_unstable_by(|&a, &b| keys[a].total_cmp(&keys[b]).then(a.cmp(&b)));
    order
}

/// Destination index for every source pixel: the pixel at source rank `k`
/// goes to the position at destination rank `k`.
pub fn rank_permutation(src_keys: &[f64], dst_keys: &[f64]) -> Vec<usize> {
    debug_assert_eq!(src_keys.len(), dst_keys.len());
    let src_order = rank_order(src_keys);
    let dst_order = rank_order(dst_keys);

    let mut target = vec![0usize; src_keys.len()];
    for (&s, &d) in src_order.iter().zip(dst_order.iter()) {
        target[s] = d;
    }
    target
}

/// Rearrange pixels so that low source keys land on low field values.
///
/// The output holds exactly the input's multiset of RGB triples; alpha is
/// forced to 255.
pub fn permute(
    pixels: &[rgb::RGBA<u8>],
    width: usize,
    height: usize,
    field: &ScalarField,
    key: SourceKey,
) -> Result<Vec<rgb::RGBA<u8>>, PermuteError> {
    crate::validate_inputs(pixels.len(), width, height)?;
    if field.len() != pixels.len() {
        return Err(PermuteError::FieldLengthMismatch {
            len: field.len(),
            expected: pixels.len(),
        });
    }

    let src_keys = source_keys(pixels, key);
    let target = rank_permutation(&src_keys, field.values());

    let mut out = vec![rgb::RGBA::new(0, 0, 0, 0); pixels.len()];
    for (p, &d) in pixels.iter().zip(target.iter()) {
        out[d] = rgb::RGBA::new(p.r, p.g, p.b, 255);
    }
    Ok(out)
}
