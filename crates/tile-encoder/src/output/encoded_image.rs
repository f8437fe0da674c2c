//! Result of the tile pipeline for one image.

use crate::palette::Palette;
use crate::tile::{MapWordWidth, TileId, TileMap, TileSize, TileTable};

/// Palette, unique tiles and tile map for one source image.
///
/// This is the canonical output of [`TileEncoder::encode()`]. The flat
/// byte helpers produce the layouts the emitter writes out; nothing here
/// knows about any output syntax.
///
/// [`TileEncoder::encode()`]: crate::TileEncoder::encode
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedImage {
    palette: Palette,
    tiles: TileTable,
    map: TileMap,
    tile_size: TileSize,
    width: u32,
    height: u32,
}

impl EncodedImage {
    pub(crate) fn new(
        palette: Palette,
        tiles: TileTable,
        map: TileMap,
        tile_size: TileSize,
        width: u32,
        height: u32,
    ) -> Self {
        Self {
            palette,
            tiles,
            map,
            tile_size,
            width,
            height,
        }
    }

    #[inline]
    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    #[inline]
    pub fn tile_table(&self) -> &TileTable {
        &self.tiles
    }

    #[inline]
    pub fn tile_map(&self) -> &TileMap {
        &self.map
    }

    #[inline]
    pub fn tile_size(&self) -> TileSize {
        self.tile_size
    }

    /// Source image width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Source image height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    pub fn tile_count(&self) -> usize {
        self.tiles.len()
    }

    /// Narrowest integer width that holds every identity in the map.
    #[inline]
    pub fn map_word_width(&self) -> MapWordWidth {
        MapWordWidth::for_tile_count(self.tiles.len())
    }

    /// Palette as 48 bytes of `R, G, B` triples.
    pub fn palette_bytes(&self) -> Vec<u8> {
        self.palette.to_bytes()
    }

    /// Tile table as `tile_count * tile_w * tile_h` indices.
    ///
    /// Cropped edge tiles are padded with index 0 so every tile has the
    /// same stride.
    pub fn tile_bytes(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.tiles.len() * self.tile_size.area());
        for tile in &self.tiles {
            if tile.is_cropped(self.tile_size) {
                out.extend(tile.padded(self.tile_size, 0));
            } else {
                out.extend_from_slice(tile.pixels());
            }
        }
        out
    }

    /// Map identities, row-major.
    #[inline]
    pub fn map_ids(&self) -> &[TileId] {
        self.map.ids()
    }
}
