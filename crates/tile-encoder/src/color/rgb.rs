//! 8-bit RGB and RGBA color types
//!
//! Source pixels are carried as [`Rgba`]; palette entries drop alpha and are
//! stored as [`Rgb`].

/// An opaque 8-bit color, as stored in a palette entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    /// Create a color from its three channels.
    ///
    /// # Example
    /// ```
    /// use tile_encoder::Rgb;
    /// let red = Rgb::new(255, 0, 0);
    /// assert_eq!(red.to_bytes(), [255, 0, 0]);
    /// ```
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Create a color from a byte array [R, G, B].
    #[inline]
    pub const fn from_bytes(bytes: [u8; 3]) -> Self {
        Self::new(bytes[0], bytes[1], bytes[2])
    }

    /// Convert to a byte array [R, G, B].
    #[inline]
    pub const fn to_bytes(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    /// Channel value by axis (0 = red, 1 = green, 2 = blue).
    #[inline]
    pub fn channel(self, axis: usize) -> u8 {
        match axis {
            0 => self.r,
            1 => self.g,
            _ => self.b,
        }
    }

    /// Squared Euclidean distance in RGB space.
    ///
    /// Squared to stay in integers; the ordering is the same as the true
    /// distance, which is all nearest-color matching needs.
    #[inline]
    pub fn distance_sq(self, other: Rgb) -> u32 {
        let dr = self.r.abs_diff(other.r) as u32;
        let dg = self.g.abs_diff(other.g) as u32;
        let db = self.b.abs_diff(other.b) as u32;
        dr * dr + dg * dg + db * db
    }
}

/// A source pixel with straight (non-premultiplied) alpha.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Fully opaque pixel.
    #[inline]
    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }

    /// Drop the alpha channel.
    #[inline]
    pub const fn rgb(self) -> Rgb {
        Rgb::new(self.r, self.g, self.b)
    }
}

impl From<Rgb> for Rgba {
    fn from(c: Rgb) -> Self {
        Rgba::opaque(c.r, c.g, c.b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rgb_bytes_roundtrip() {
        let c = Rgb::from_bytes([12, 34, 56]);
        assert_eq!(c, Rgb::new(12, 34, 56));
        assert_eq!(c.to_bytes(), [12, 34, 56]);
    }

    #[test]
    fn test_channel_by_axis() {
        let c = Rgb::new(1, 2, 3);
        assert_eq!(c.channel(0), 1);
        assert_eq!(c.channel(1), 2);
        assert_eq!(c.channel(2), 3);
    }

    #[test]
    fn test_distance_sq() {
        let black = Rgb::new(0, 0, 0);
        let white = Rgb::new(255, 255, 255);
        assert_eq!(black.distance_sq(black), 0);
        assert_eq!(black.distance_sq(white), 3 * 255 * 255);
        assert_eq!(white.distance_sq(black), black.distance_sq(white));
    }

    #[test]
    fn test_rgba_drops_alpha() {
        let px = Rgba::new(10, 20, 30, 0);
        assert_eq!(px.rgb(), Rgb::new(10, 20, 30));
        assert_eq!(Rgba::from(Rgb::new(1, 2, 3)).a, 255);
    }
}
