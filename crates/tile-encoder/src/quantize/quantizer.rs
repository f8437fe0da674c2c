//! Adaptive palette selection and pixel remapping.

use std::collections::HashMap;

use super::histogram::build_histogram;
use super::indexed_grid::IndexedGrid;
use super::median_cut::median_cut;
use crate::api::EncodeError;
use crate::color::Rgb;
use crate::image::SourceImage;
use crate::palette::{Palette, PALETTE_SIZE};

/// Reduces an image to a 16-entry palette and an index grid.
///
/// Colors are chosen by weighted median cut over the image's exact color
/// histogram. Images that already use no more than the requested number of
/// colors keep them exactly.
///
/// # Example
///
/// ```
/// use tile_encoder::{Quantizer, SourceImage};
///
/// let image = SourceImage::from_gray8(2, 1, vec![0, 255]).unwrap();
/// let (palette, grid) = Quantizer::new(16).unwrap().quantize(&image).unwrap();
///
/// assert_eq!(palette.len(), 16);
/// assert_eq!(palette.used(), 2);
/// assert_ne!(grid.get(0, 0), grid.get(1, 0));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Quantizer {
    colors: usize,
}

impl Default for Quantizer {
    fn default() -> Self {
        Self {
            colors: PALETTE_SIZE,
        }
    }
}

impl Quantizer {
    /// Quantizer that picks at most `colors` palette entries.
    ///
    /// # Errors
    ///
    /// [`EncodeError::InvalidColorCount`] unless `1 <= colors <= 16`.
    pub fn new(colors: usize) -> Result<Self, EncodeError> {
        if colors == 0 || colors > PALETTE_SIZE {
            return Err(EncodeError::InvalidColorCount(colors));
        }
        Ok(Self { colors })
    }

    /// Maximum number of palette entries this quantizer will choose.
    #[inline]
    pub fn colors(&self) -> usize {
        self.colors
    }

    /// Choose a palette for `image` and remap every pixel to it.
    pub fn quantize(&self, image: &SourceImage) -> Result<(Palette, IndexedGrid), EncodeError> {
        let histogram = build_histogram(image.pixels());
        let distinct = histogram.len();
        let chosen = median_cut(histogram, self.colors);

        let palette = Palette::new(&chosen)?;

        let mut cache: HashMap<Rgb, u8> = HashMap::with_capacity(distinct);
        let indices = image
            .pixels()
            .iter()
            .map(|px| {
                *cache
                    .entry(px.rgb())
                    .or_insert_with(|| palette.find_nearest(px.rgb()))
            })
            .collect();

        tracing::debug!(
            distinct_colors = distinct,
            palette_used = palette.used(),
            "Quantized image"
        );

        Ok((
            palette,
            IndexedGrid::new(image.width(), image.height(), indices),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Rgba;

    fn image_from(width: u32, height: u32, f: impl Fn(u32, u32) -> Rgba) -> SourceImage {
        let pixels = (0..height)
            .flat_map(|y| (0..width).map(move |x| (x, y)))
            .map(|(x, y)| f(x, y))
            .collect();
        SourceImage::new(width, height, pixels).unwrap()
    }

    #[test]
    fn test_rejects_bad_color_counts() {
        assert!(matches!(
            Quantizer::new(0),
            Err(EncodeError::InvalidColorCount(0))
        ));
        assert!(matches!(
            Quantizer::new(17),
            Err(EncodeError::InvalidColorCount(17))
        ));
        assert_eq!(Quantizer::new(4).unwrap().colors(), 4);
    }

    #[test]
    fn test_few_colors_are_exact() {
        let colors = [
            Rgba::opaque(255, 0, 0),
            Rgba::opaque(0, 255, 0),
            Rgba::opaque(0, 0, 255),
        ];
        let image = image_from(3, 3, |x, _| colors[x as usize]);
        let (palette, grid) = Quantizer::default().quantize(&image).unwrap();

        assert_eq!(palette.used(), 3);
        for y in 0..3 {
            for x in 0..3 {
                let idx = grid.get(x, y) as usize;
                assert_eq!(palette.get(idx), colors[x as usize].rgb());
            }
        }
    }

    #[test]
    fn test_many_colors_reduced_to_sixteen() {
        let image = image_from(64, 64, |x, y| Rgba::opaque((x * 4) as u8, (y * 4) as u8, 128));
        let (palette, grid) = Quantizer::default().quantize(&image).unwrap();

        assert_eq!(palette.len(), 16);
        assert_eq!(palette.used(), 16);
        assert!(grid.indices().iter().all(|&i| i < 16));
    }

    #[test]
    fn test_respects_requested_count() {
        let image = image_from(32, 1, |x, _| Rgba::opaque((x * 8) as u8, 0, 0));
        let (palette, grid) = Quantizer::new(4).unwrap().quantize(&image).unwrap();

        assert_eq!(palette.len(), 16);
        assert_eq!(palette.used(), 4);
        assert!(grid.indices().iter().all(|&i| i < 4));
    }

    #[test]
    fn test_alpha_is_discarded() {
        let image = image_from(2, 1, |x, _| Rgba::new(10, 20, 30, if x == 0 { 0 } else { 255 }));
        let (palette, grid) = Quantizer::default().quantize(&image).unwrap();

        assert_eq!(palette.used(), 1);
        assert_eq!(grid.get(0, 0), grid.get(1, 0));
    }

    #[test]
    fn test_quantize_is_deterministic() {
        let image = image_from(40, 40, |x, y| {
            Rgba::opaque((x * 37 % 256) as u8, (y * 53 % 256) as u8, ((x + y) * 11 % 256) as u8)
        });
        let q = Quantizer::default();
        assert_eq!(q.quantize(&image).unwrap(), q.quantize(&image).unwrap());
    }
}
