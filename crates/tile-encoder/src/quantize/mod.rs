//! Color quantization
//!
//! Turns a full-color [`SourceImage`](crate::SourceImage) into a
//! [`Palette`](crate::Palette) and an [`IndexedGrid`].

mod histogram;
mod indexed_grid;
mod median_cut;
mod quantizer;

pub use indexed_grid::IndexedGrid;
pub use quantizer::Quantizer;
