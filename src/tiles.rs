extern crate alloc;
use alloc::vec;
use alloc::vec::Vec;

use crate::error::PermuteError;
use crate::rng::{Mulberry32, fisher_yates};

/// What happens to pixels right of / below the last whole tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RemainderMode {
    /// Copy the source pixels through in place, alpha forced opaque.
    #[default]
    CopyThrough,
    /// Leave the strip as zeroed, fully transparent pixels.
    Cleared,
}

/// Grid of whole tiles covering the top-left of an image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TileGrid {
    pub tile: usize,
    pub cols: usize,
    pub rows: usize,
}

impl TileGrid {
    pub fn new(width: usize, height: usize, tile: usize) -> Self {
        debug_assert!(tile > 0);
        Self {
            tile,
            cols: width / tile,
            rows: height / tile,
        }
    }

    pub fn tile_count(&self) -> usize {
        self.cols * self.rows
    }

    /// Top-left pixel of tile `index` (row-major).
    pub fn origin(&self, index: usize) -> (usize, usize) {
        ((index % self.cols) * self.tile, (index / self.cols) * self.tile)
    }
}

/// Seeded tile order: entry `t` is the source tile placed at destination `t`.
pub fn tile_order(tile_count: usize, seed: u32) -> Vec<usize> {
    let mut order: Vec<usize> = (0..tile_count).collect();
    fisher_yates(&mut order, &mut Mulberry32::new(seed));
    order
}

/// Shuffle whole `tile`×`tile` blocks using a Fisher–Yates order seeded by
/// `seed`. Identical arguments give byte-identical output.
pub fn shuffle(
    pixels: &[rgb::RGBA<u8>],
    width: usize,
    height: usize,
    tile: usize,
    seed: u32,
    remainder: RemainderMode,
) -> Result<Vec<rgb::RGBA<u8>>, PermuteError> {
    crate::validate_inputs(pixels.len(), width, height)?;
    if tile == 0 {
        return Err(PermuteError::InvalidTileSize(tile));
    }

    let grid = TileGrid::new(width, height, tile);
    let order = tile_order(grid.tile_count(), seed);

    let mut out = match remainder {
        RemainderMode::CopyThrough => pixels
            .iter()
            .map(|p| rgb::RGBA::new(p.r, p.g, p.b, 255))
            .collect(),
        RemainderMode::Cleared => vec![rgb::RGBA::new(0, 0, 0, 0); pixels.len()],
    };

    for (t, &pick) in order.iter().enumerate() {
        let (sx, sy) = grid.origin(pick);
        let (dx, dy) = grid.origin(t);
        for yy in 0..tile {
            let src_row = &pixels[(sy + yy) * width + sx..][..tile];
            let dst_row = &mut out[(dy + yy) * width + dx..][..tile];
            for (d, s) in dst_row.iter_mut().zip(src_row) {
                *d = rgb::RGBA::new(s.r, s.g, s.b, 255);
            }
        }
    }

    Ok(out)
}
