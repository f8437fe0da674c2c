//! Palette-indexed pixel grid.

use crate::palette::PALETTE_SIZE;

/// One palette index per source pixel, row-major.
///
/// Every index is below [`PALETTE_SIZE`]; the quantizer is the only
/// producer and maintains that bound.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexedGrid {
    width: u32,
    height: u32,
    indices: Vec<u8>,
}

impl IndexedGrid {
    pub(crate) fn new(width: u32, height: u32, indices: Vec<u8>) -> Self {
        debug_assert_eq!(indices.len(), width as usize * height as usize);
        debug_assert!(indices.iter().all(|&i| (i as usize) < PALETTE_SIZE));
        Self {
            width,
            height,
            indices,
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

    /// Index at column `x`, row `y`.
    #[inline]
    pub fn get(&self, x: u32, y: u32) -> u8 {
        self.indices[y as usize * self.width as usize + x as usize]
    }

    /// Indices of row `y`, restricted to columns `x0..x1`.
    #[inline]
    pub fn row_span(&self, y: u32, x0: u32, x1: u32) -> &[u8] {
        let start = y as usize * self.width as usize;
        &self.indices[start + x0 as usize..start + x1 as usize]
    }

    /// All indices, row-major.
    #[inline]
    pub fn indices(&self) -> &[u8] {
        &self.indices
    }
}
