#![forbid(unsafe_code)]

extern crate alloc;

pub mod blur;
pub mod error;
pub mod field;
pub mod hsv;
pub mod naming;
pub mod prepare;
pub mod rank;
pub mod rng;
pub mod seed;
pub mod tiles;

pub use error::PermuteError;
pub use field::{ScalarField, build_field};
pub use naming::{Variant, base_name};
pub use rank::{SourceKey, permute};
pub use rng::Mulberry32;
pub use seed::seed_from_name;
pub use tiles::{RemainderMode, shuffle};

use imgref::{ImgRef, ImgVec};
use rgb::RGBA;

/// Side length the reference constants were tuned for.
pub const WORKING_SIZE: usize = 900;
/// Control tile side in pixels.
pub const CTRL_TILE: usize = 36;
/// Blur radius of the continuous field.
pub const BLUR_A: f64 = 18.0;
/// Blur radius of the banded field.
pub const BLUR_B: f64 = 34.0;
/// Quantization levels of the banded field.
pub const B_LEVELS: u32 = 10;

/// Parameters for one rank-matched variant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldParams {
    /// Gaussian blur radius in pixels.
    pub blur_radius: f64,
    /// Plateau count; 0 keeps the field continuous.
    pub quant_levels: u32,
    /// How source pixels are ordered.
    pub source_key: SourceKey,
}

/// Configuration for [`generate`].
#[derive(Debug, Clone)]
pub struct GenerateConfig {
    /// Field and source ordering for output A.
    pub a: FieldParams,
    /// Field and source ordering for output B.
    pub b: FieldParams,
    /// Control tile side.
    pub tile: usize,
    /// Treatment of the strip not covered by whole tiles.
    pub remainder: RemainderMode,
}

impl Default for GenerateConfig {
    fn default() -> Self {
        Self {
            a: FieldParams {
                blur_radius: BLUR_A,
                quant_levels: 0,
                source_key: SourceKey::Hue,
            },
            b: FieldParams {
                blur_radius: BLUR_B,
                quant_levels: B_LEVELS,
                source_key: SourceKey::Luma,
            },
            tile: CTRL_TILE,
            remainder: RemainderMode::CopyThrough,
        }
    }
}

impl GenerateConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn blur_a(mut self, radius: f64) -> Self {
        self.a.blur_radius = radius;
        self
    }

    pub fn blur_b(mut self, radius: f64) -> Self {
        self.b.blur_radius = radius;
        self
    }

    pub fn levels_a(mut self, levels: u32) -> Self {
        self.a.quant_levels = levels;
        self
    }

    pub fn levels_b(mut self, levels: u32) -> Self {
        self.b.quant_levels = levels;
        self
    }

    pub fn source_key_a(mut self, key: SourceKey) -> Self {
        self.a.source_key = key;
        self
    }

    pub fn source_key_b(mut self, key: SourceKey) -> Self {
        self.b.source_key = key;
        self
    }

    pub fn tile(mut self, tile: usize) -> Self {
        self.tile = tile;
        self
    }

    pub fn remainder(mut self, mode: RemainderMode) -> Self {
        self.remainder = mode;
        self
    }
}

/// The three derived images of one run.
#[derive(Debug, Clone)]
pub struct Generated {
    source: ImgVec<RGBA<u8>>,
    rank_a: ImgVec<RGBA<u8>>,
    rank_b: ImgVec<RGBA<u8>>,
    control: ImgVec<RGBA<u8>>,
    seed: u32,
}

impl Generated {
    /// The input the outputs were derived from.
    pub fn source(&self) -> ImgRef<'_, RGBA<u8>> {
        self.source.as_ref()
    }

    pub fn rank_a(&self) -> ImgRef<'_, RGBA<u8>> {
        self.rank_a.as_ref()
    }

    pub fn rank_b(&self) -> ImgRef<'_, RGBA<u8>> {
        self.rank_b.as_ref()
    }

    pub fn control(&self) -> ImgRef<'_, RGBA<u8>> {
        self.control.as_ref()
    }

    /// Seed the control shuffle used.
    pub fn seed(&self) -> u32 {
        self.seed
    }

    pub fn get(&self, variant: Variant) -> ImgRef<'_, RGBA<u8>> {
        match variant {
            Variant::Source => self.source(),
            Variant::RankA => self.rank_a(),
            Variant::RankB => self.rank_b(),
            Variant::Control => self.control(),
        }
    }

    /// Consume into `(rank_a, rank_b, control)`.
    pub fn into_outputs(self) -> (ImgVec<RGBA<u8>>, ImgVec<RGBA<u8>>, ImgVec<RGBA<u8>>) {
        (self.rank_a, self.rank_b, self.control)
    }
}

/// Derive both rank-matched variants and the tile-shuffled control from a
/// square image.
///
/// `name` is the source file name; its base name seeds the control shuffle.
/// None of the three computations depends on another.
pub fn generate(
    pixels: &[RGBA<u8>],
    width: usize,
    height: usize,
    name: &str,
    config: &GenerateConfig,
) -> Result<Generated, PermuteError> {
    validate_inputs(pixels.len(), width, height)?;
    if width != height {
        return Err(PermuteError::NotSquare { width, height });
    }
    if config.tile == 0 {
        return Err(PermuteError::InvalidTileSize(config.tile));
    }

    let rank_a = rank_variant(pixels, width, height, &config.a)?;
    let rank_b = rank_variant(pixels, width, height, &config.b)?;

    let seed = seed_from_name(base_name(name));
    let control = tiles::shuffle(pixels, width, height, config.tile, seed, config.remainder)?;
    log::debug!(
        "shuffled {} tiles of {}px with seed {seed}",
        tiles::TileGrid::new(width, height, config.tile).tile_count(),
        config.tile
    );

    Ok(Generated {
        source: ImgVec::new(pixels.to_vec(), width, height),
        rank_a: ImgVec::new(rank_a, width, height),
        rank_b: ImgVec::new(rank_b, width, height),
        control: ImgVec::new(control, width, height),
        seed,
    })
}

/// [`generate`] over an image view. Rows are copied out, so any stride works.
pub fn generate_img(
    img: ImgRef<'_, RGBA<u8>>,
    name: &str,
    config: &GenerateConfig,
) -> Result<Generated, PermuteError> {
    let pixels: alloc::vec::Vec<RGBA<u8>> = img.rows().flatten().copied().collect();
    generate(&pixels, img.width(), img.height(), name, config)
}

fn rank_variant(
    pixels: &[RGBA<u8>],
    width: usize,
    height: usize,
    params: &FieldParams,
) -> Result<alloc::vec::Vec<RGBA<u8>>, PermuteError> {
    let field = build_field(pixels, width, height, params.blur_radius, params.quant_levels)?;
    log::debug!(
        "built {width}x{height} field: blur {}, {} levels",
        params.blur_radius,
        params.quant_levels
    );
    let out = permute(pixels, width, height, &field, params.source_key)?;
    log::debug!("rank-matched {} pixels by {:?}", out.len(), params.source_key);
    Ok(out)
}

pub(crate) fn validate_inputs(
    pixel_count: usize,
    width: usize,
    height: usize,
) -> Result<(), PermuteError> {
    if width == 0 || height == 0 {
        return Err(PermuteError::ZeroDimension);
    }
    if pixel_count != width * height {
        return Err(PermuteError::DimensionMismatch {
            len: pixel_count,
            width,
            height,
        });
    }
    Ok(())
}
