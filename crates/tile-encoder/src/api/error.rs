//! Unified error type for the tile-encoder public API.
//!
//! [`EncodeError`] covers every way an encode can be rejected. All variants
//! describe bad input; the pipeline itself has no I/O and cannot fail
//! halfway through a valid image.

use thiserror::Error;

/// Error returned by image construction and [`TileEncoder::encode()`].
///
/// [`TileEncoder::encode()`]: crate::TileEncoder::encode
///
/// # Example
///
/// ```
/// use tile_encoder::{EncodeError, SourceImage};
///
/// let result = SourceImage::from_rgba8(0, 8, Vec::new());
/// assert!(matches!(result, Err(EncodeError::EmptyImage { .. })));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EncodeError {
    /// Image has a zero dimension
    #[error("image is empty ({width}x{height})")]
    EmptyImage { width: u32, height: u32 },

    /// Pixel buffer length does not match width * height * channels
    #[error("pixel buffer has {actual} bytes, expected {expected}")]
    BufferSizeMismatch { expected: usize, actual: usize },

    /// Tile width or height is zero
    #[error("invalid tile size {width}x{height}")]
    InvalidTileSize { width: u32, height: u32 },

    /// Requested palette size is outside 1..=16
    #[error("invalid color count {0} (expected 1..=16)")]
    InvalidColorCount(usize),

    /// Identity sequence does not fill the tile grid
    #[error("tile map expects {expected} entries, got {actual}")]
    MapSizeMismatch { expected: usize, actual: usize },
}
