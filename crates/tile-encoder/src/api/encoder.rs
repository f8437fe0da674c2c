//! TileEncoder builder, the entry point of the crate.

use super::error::EncodeError;
use crate::image::SourceImage;
use crate::output::EncodedImage;
use crate::palette::PALETTE_SIZE;
use crate::quantize::Quantizer;
use crate::tile::{dedup_tiles, TileMap, TileSize, Tiles};

/// Runs quantization, tiling, deduplication and map assembly.
///
/// - Configuration methods consume and return `self`
/// - [`encode()`](Self::encode) takes `&self`, so one encoder can be reused
///   across images
///
/// # Example
///
/// ```
/// use tile_encoder::{SourceImage, TileEncoder, TileSize};
///
/// let image = SourceImage::from_gray8(16, 16, vec![0; 256]).unwrap();
/// let encoded = TileEncoder::new()
///     .tile_size(TileSize::DEFAULT)
///     .colors(16)
///     .encode(&image)
///     .unwrap();
///
/// assert_eq!(encoded.tile_count(), 1);
/// assert_eq!(encoded.map_ids(), &[0, 0, 0, 0]);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct TileEncoder {
    tile_size: TileSize,
    colors: usize,
}

impl Default for TileEncoder {
    fn default() -> Self {
        Self {
            tile_size: TileSize::DEFAULT,
            colors: PALETTE_SIZE,
        }
    }
}

impl TileEncoder {
    /// Encoder with 8x8 tiles and up to 16 colors.
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn tile_size(mut self, size: TileSize) -> Self {
        self.tile_size = size;
        self
    }

    /// Maximum number of palette entries to choose (1..=16).
    ///
    /// Out-of-range values are reported by [`encode()`](Self::encode).
    #[inline]
    pub fn colors(mut self, colors: usize) -> Self {
        self.colors = colors;
        self
    }

    /// Encode one image.
    ///
    /// # Errors
    ///
    /// [`EncodeError::InvalidColorCount`] if the configured color count is
    /// outside `1..=16`.
    pub fn encode(&self, image: &SourceImage) -> Result<EncodedImage, EncodeError> {
        let quantizer = Quantizer::new(self.colors)?;
        let (palette, grid) = quantizer.quantize(image)?;

        let tiles = Tiles::new(&grid, self.tile_size);
        let (columns, rows) = tiles.grid_dims();
        let (table, ids) = dedup_tiles(tiles);
        let map = TileMap::from_ids(columns, rows, ids)?;

        tracing::debug!(
            width = image.width(),
            height = image.height(),
            columns,
            rows,
            unique_tiles = table.len(),
            "Encoded image"
        );

        Ok(EncodedImage::new(
            palette,
            table,
            map,
            self.tile_size,
            image.width(),
            image.height(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let encoder = TileEncoder::new();
        assert_eq!(encoder.tile_size, TileSize::DEFAULT);
        assert_eq!(encoder.colors, 16);
    }

    #[test]
    fn test_bad_color_count_reported_on_encode() {
        let image = SourceImage::from_gray8(8, 8, vec![0; 64]).unwrap();
        let err = TileEncoder::new().colors(0).encode(&image).unwrap_err();
        assert_eq!(err, EncodeError::InvalidColorCount(0));
    }

    #[test]
    fn test_encoder_is_reusable() {
        let encoder = TileEncoder::new().colors(2);
        let a = SourceImage::from_gray8(8, 8, vec![0; 64]).unwrap();
        let b = SourceImage::from_gray8(16, 8, vec![255; 128]).unwrap();
        assert_eq!(encoder.encode(&a).unwrap().tile_count(), 1);
        assert_eq!(encoder.encode(&b).unwrap().tile_map().width(), 2);
    }
}
