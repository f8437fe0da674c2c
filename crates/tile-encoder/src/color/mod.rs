//! Color types
//!
//! Everything in the encoder works on plain 8-bit sRGB values. No color space
//! conversion happens: the target hardware consumes the bytes as-is.

mod rgb;

pub use rgb::{Rgb, Rgba};
