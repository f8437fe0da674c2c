//! Tile dimensions.

use crate::api::EncodeError;

/// Width and height of one tile in pixels. Both are non-zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TileSize {
    width: u32,
    height: u32,
}

impl TileSize {
    /// The 8x8 tile used by most 4bpp tile hardware.
    pub const DEFAULT: TileSize = TileSize {
        width: 8,
        height: 8,
    };

    /// # Errors
    ///
    /// [`EncodeError::InvalidTileSize`] if either dimension is zero.
    pub fn new(width: u32, height: u32) -> Result<Self, EncodeError> {
        if width == 0 || height == 0 {
            return Err(EncodeError::InvalidTileSize { width, height });
        }
        Ok(Self { width, height })
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Pixels in a full (uncropped) tile.
    #[inline]
    pub fn area(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Tile-grid dimensions `(columns, rows)` covering an image, counting
    /// partial tiles at the right and bottom edges.
    #[inline]
    pub fn grid_dims(&self, image_width: u32, image_height: u32) -> (u32, u32) {
        (
            image_width.div_ceil(self.width),
            image_height.div_ceil(self.height),
        )
    }
}

impl Default for TileSize {
    fn default() -> Self {
        Self::DEFAULT
    }
}
