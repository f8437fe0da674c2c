//! Tile-grid of identities.

use super::dedup::TileId;
use crate::api::EncodeError;

/// Integer width needed to store every identity of a tile table.
///
/// At least 16 bits; 32 bits once identities no longer fit in a `u16`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MapWordWidth {
    U16,
    U32,
}

impl MapWordWidth {
    /// Narrowest width that can hold identities `0..tile_count`.
    pub fn for_tile_count(tile_count: usize) -> Self {
        if tile_count <= u16::MAX as usize + 1 {
            MapWordWidth::U16
        } else {
            MapWordWidth::U32
        }
    }

    #[inline]
    pub fn bits(self) -> u32 {
        match self {
            MapWordWidth::U16 => 16,
            MapWordWidth::U32 => 32,
        }
    }
}

/// `height` rows of `width` tile identities, row-major.
///
/// # Example
///
/// ```
/// use tile_encoder::TileMap;
///
/// let map = TileMap::from_ids(2, 2, vec![0, 1, 1, 0]).unwrap();
/// assert_eq!(map.get(1, 0), 1);
/// assert_eq!(map.rows().collect::<Vec<_>>(), vec![&[0, 1][..], &[1, 0][..]]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TileMap {
    width: u32,
    height: u32,
    ids: Vec<TileId>,
}

impl TileMap {
    /// Reshape identities in scan order into a `width` x `height` grid.
    ///
    /// # Errors
    ///
    /// [`EncodeError::MapSizeMismatch`] if `ids.len() != width * height`.
    pub fn from_ids(width: u32, height: u32, ids: Vec<TileId>) -> Result<Self, EncodeError> {
        let expected = width as usize * height as usize;
        if ids.len() != expected {
            return Err(EncodeError::MapSizeMismatch {
                expected,
                actual: ids.len(),
            });
        }
        Ok(Self { width, height, ids })
    }

    /// Columns, in tiles.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Rows, in tiles.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    pub fn get(&self, x: u32, y: u32) -> TileId {
        self.ids[y as usize * self.width as usize + x as usize]
    }

    /// Flat identities, row-major.
    #[inline]
    pub fn ids(&self) -> &[TileId] {
        &self.ids
    }

    pub fn rows(&self) -> std::slice::ChunksExact<'_, TileId> {
        self.ids.chunks_exact(self.width as usize)
    }
}
