//! Fixed-size 16-entry palette with nearest-color matching.

use crate::api::EncodeError;
use crate::color::Rgb;

/// Number of palette entries, which is also the exclusive upper bound of
/// every pixel index.
pub const PALETTE_SIZE: usize = 16;

/// Color written to palette slots the quantizer did not fill.
const FILLER: Rgb = Rgb::new(0, 0, 0);

/// A 4bpp palette: always exactly [`PALETTE_SIZE`] entries.
///
/// The quantizer may choose fewer colors than there are slots. The leading
/// `used()` entries are real; the rest are filler and are never returned by
/// [`Palette::find_nearest()`].
///
/// # Example
///
/// ```
/// use tile_encoder::{Palette, Rgb};
///
/// let palette = Palette::new(&[Rgb::new(0, 0, 0), Rgb::new(255, 255, 255)]).unwrap();
/// assert_eq!(palette.len(), 16);
/// assert_eq!(palette.used(), 2);
/// assert_eq!(palette.find_nearest(Rgb::new(200, 200, 200)), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    colors: [Rgb; PALETTE_SIZE],
    used: usize,
}

impl Palette {
    /// Create a palette from 1 to 16 chosen colors.
    ///
    /// # Errors
    ///
    /// Returns [`EncodeError::InvalidColorCount`] if `colors` is empty or
    /// longer than [`PALETTE_SIZE`].
    pub fn new(colors: &[Rgb]) -> Result<Self, EncodeError> {
        if colors.is_empty() || colors.len() > PALETTE_SIZE {
            return Err(EncodeError::InvalidColorCount(colors.len()));
        }
        let mut slots = [FILLER; PALETTE_SIZE];
        slots[..colors.len()].copy_from_slice(colors);
        Ok(Self {
            colors: slots,
            used: colors.len(),
        })
    }

    /// Number of entries. Always [`PALETTE_SIZE`].
    #[inline]
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Always false; kept for API symmetry with `len()`.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Number of leading entries chosen by quantization.
    #[inline]
    pub fn used(&self) -> usize {
        self.used
    }

    /// Color at `idx`.
    #[inline]
    pub fn get(&self, idx: usize) -> Rgb {
        self.colors[idx]
    }

    /// All 16 entries, filler included.
    #[inline]
    pub fn colors(&self) -> &[Rgb; PALETTE_SIZE] {
        &self.colors
    }

    /// Index of the used entry closest to `color`.
    ///
    /// Distance is squared RGB distance. Ties resolve to the lowest index so
    /// that matching is deterministic.
    pub fn find_nearest(&self, color: Rgb) -> u8 {
        let mut best_idx = 0;
        let mut best_dist = u32::MAX;
        for (i, &entry) in self.colors[..self.used].iter().enumerate() {
            let dist = entry.distance_sq(color);
            if dist < best_dist {
                best_dist = dist;
                best_idx = i;
                if dist == 0 {
                    break;
                }
            }
        }
        best_idx as u8
    }

    /// Flatten to `[R, G, B, R, G, B, ...]`, 48 bytes.
    pub fn to_bytes(&self) -> Vec<u8> {
        self.colors.iter().flat_map(|c| c.to_bytes()).collect()
    }
}
