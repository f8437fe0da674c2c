//! Block extraction from an indexed grid.

use super::size::TileSize;
use crate::quantize::IndexedGrid;

/// One block of palette indices, row-major within the block.
///
/// Blocks on the right or bottom edge of an image whose size is not a
/// multiple of the tile size are cropped: `width`/`height` are the pixels
/// actually available and no fill value is invented. Equality covers the
/// shape as well as the pixels, so a 1x8 edge strip never equals an 8x1
/// strip with the same indices.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Tile {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

impl Tile {
    /// Build a tile from row-major indices.
    ///
    /// # Panics
    ///
    /// Panics if `pixels.len() != width * height`.
    pub fn new(width: u32, height: u32, pixels: Vec<u8>) -> Self {
        assert_eq!(
            pixels.len(),
            width as usize * height as usize,
            "tile pixel count must match {width}x{height}"
        );
        Self {
            width,
            height,
            pixels,
        }
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// True if this tile is smaller than `size` (an edge block).
    #[inline]
    pub fn is_cropped(&self, size: TileSize) -> bool {
        self.width < size.width() || self.height < size.height()
    }

    /// Pixels laid out on a full `size` tile, missing pixels set to `fill`.
    ///
    /// Used when a consumer needs fixed-stride tile data; the tile itself
    /// stays cropped.
    pub fn padded(&self, size: TileSize, fill: u8) -> Vec<u8> {
        let mut out = vec![fill; size.area()];
        let stride = size.width() as usize;
        for (y, row) in self.pixels.chunks_exact(self.width as usize).enumerate() {
            out[y * stride..y * stride + row.len()].copy_from_slice(row);
        }
        out
    }
}

/// Iterator over the blocks of a grid in scan order: tile rows top to
/// bottom, tiles left to right within a row.
pub struct Tiles<'a> {
    grid: &'a IndexedGrid,
    size: TileSize,
    columns: u32,
    rows: u32,
    total: usize,
    next: usize,
}

impl<'a> Tiles<'a> {
    pub fn new(grid: &'a IndexedGrid, size: TileSize) -> Self {
        let (columns, rows) = size.grid_dims(grid.width(), grid.height());
        Self {
            grid,
            size,
            columns,
            rows,
            total: columns as usize * rows as usize,
            next: 0,
        }
    }

    /// Tile-grid dimensions `(columns, rows)`.
    #[inline]
    pub fn grid_dims(&self) -> (u32, u32) {
        (self.columns, self.rows)
    }

    fn extract(&self, col: u32, row: u32) -> Tile {
        let x0 = col * self.size.width();
        let y0 = row * self.size.height();
        // x0 < grid width, but adding a full tile width may pass u32::MAX
        let x1 = x0.saturating_add(self.size.width()).min(self.grid.width());
        let y1 = y0.saturating_add(self.size.height()).min(self.grid.height());

        let mut pixels = Vec::with_capacity(((x1 - x0) * (y1 - y0)) as usize);
        for y in y0..y1 {
            pixels.extend_from_slice(self.grid.row_span(y, x0, x1));
        }
        Tile::new(x1 - x0, y1 - y0, pixels)
    }
}

impl Iterator for Tiles<'_> {
    type Item = Tile;

    fn next(&mut self) -> Option<Tile> {
        if self.next >= self.total {
            return None;
        }
        let col = (self.next % self.columns as usize) as u32;
        let row = (self.next / self.columns as usize) as u32;
        self.next += 1;
        Some(self.extract(col, row))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = self.total - self.next;
        (left, Some(left))
    }
}

impl ExactSizeIterator for Tiles<'_> {}
