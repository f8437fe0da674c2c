//! Decoded source image normalized to RGBA.

use crate::api::EncodeError;
use crate::color::Rgba;

/// A decoded raster image, normalized to four channels.
///
/// Decoders hand over whatever sample layout the file had; the constructors
/// expand it to RGBA and fill a missing alpha channel with full opacity.
/// The image is read-only after construction and can never be empty.
///
/// # Example
///
/// ```
/// use tile_encoder::{Rgba, SourceImage};
///
/// let image = SourceImage::from_rgb8(2, 1, vec![255, 0, 0, 0, 0, 255]).unwrap();
/// assert_eq!(image.pixel(1, 0), Rgba::opaque(0, 0, 255));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceImage {
    width: u32,
    height: u32,
    pixels: Vec<Rgba>,
}

impl SourceImage {
    /// Build from already-expanded pixels in row-major order.
    pub fn new(width: u32, height: u32, pixels: Vec<Rgba>) -> Result<Self, EncodeError> {
        let expected = check_dimensions(width, height)?;
        if pixels.len() != expected {
            return Err(EncodeError::BufferSizeMismatch {
                expected,
                actual: pixels.len(),
            });
        }
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// Build from interleaved 8-bit RGBA samples.
    pub fn from_rgba8(width: u32, height: u32, data: Vec<u8>) -> Result<Self, EncodeError> {
        Self::from_samples(width, height, &data, 4, |s| {
            Rgba::new(s[0], s[1], s[2], s[3])
        })
    }

    /// Build from interleaved 8-bit RGB samples.
    pub fn from_rgb8(width: u32, height: u32, data: Vec<u8>) -> Result<Self, EncodeError> {
        Self::from_samples(width, height, &data, 3, |s| Rgba::opaque(s[0], s[1], s[2]))
    }

    /// Build from 8-bit grayscale samples.
    pub fn from_gray8(width: u32, height: u32, data: Vec<u8>) -> Result<Self, EncodeError> {
        Self::from_samples(width, height, &data, 1, |s| Rgba::opaque(s[0], s[0], s[0]))
    }

    /// Build from interleaved 8-bit grayscale + alpha samples.
    pub fn from_gray_alpha8(width: u32, height: u32, data: Vec<u8>) -> Result<Self, EncodeError> {
        Self::from_samples(width, height, &data, 2, |s| {
            Rgba::new(s[0], s[0], s[0], s[1])
        })
    }

    fn from_samples(
        width: u32,
        height: u32,
        data: &[u8],
        channels: usize,
        expand: impl Fn(&[u8]) -> Rgba,
    ) -> Result<Self, EncodeError> {
        let expected = check_dimensions(width, height)? * channels;
        if data.len() != expected {
            return Err(EncodeError::BufferSizeMismatch {
                expected,
                actual: data.len(),
            });
        }
        let pixels = data.chunks_exact(channels).map(expand).collect();
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Pixel at column `x`, row `y`.
    ///
    /// # Panics
    ///
    /// Panics if the coordinate is outside the image.
    #[inline]
    pub fn pixel(&self, x: u32, y: u32) -> Rgba {
        assert!(x < self.width && y < self.height, "pixel ({x}, {y}) out of bounds");
        self.pixels[y as usize * self.width as usize + x as usize]
    }

    /// All pixels in row-major order.
    #[inline]
    pub fn pixels(&self) -> &[Rgba] {
        &self.pixels
    }
}

/// Reject empty images and return the pixel count.
fn check_dimensions(width: u32, height: u32) -> Result<usize, EncodeError> {
    if width == 0 || height == 0 {
        return Err(EncodeError::EmptyImage { width, height });
    }
    Ok(width as usize * height as usize)
}
