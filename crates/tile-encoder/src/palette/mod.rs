//! Palette type
//!
//! A [`Palette`] always has sixteen entries so that every pixel index fits
//! in four bits.

mod palette;

pub use palette::{Palette, PALETTE_SIZE};
