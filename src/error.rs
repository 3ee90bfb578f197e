use thiserror::Error;

#[derive(Debug, Error)]
pub enum PermuteError {
    #[error("image dimensions cannot be zero")]
    ZeroDimension,

    #[error("pixel buffer length {len} does not match dimensions {width}x{height}")]
    DimensionMismatch {
        len: usize,
        width: usize,
        height: usize,
    },

    #[error("image must be square, got {width}x{height}")]
    NotSquare { width: usize, height: usize },

    #[error("tile size must be positive, got {0}")]
    InvalidTileSize(usize),

    #[error("blur radius must be finite and non-negative, got {0}")]
    InvalidBlurRadius(f64),

    #[error("destination field has {len} entries, expected {expected}")]
    FieldLengthMismatch { len: usize, expected: usize },
}
