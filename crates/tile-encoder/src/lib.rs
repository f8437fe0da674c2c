#![allow(clippy::module_inception)]

//! tile-encoder: palette quantization and tile deduplication for 4bpp
//! tile-based graphics.
//!
//! An image goes through four stages:
//!
//! 1. [`Quantizer`] reduces it to at most 16 colors and remaps every pixel
//!    to a palette index ([`IndexedGrid`]).
//! 2. [`Tiles`] cuts the grid into fixed-size blocks in scan order. Blocks on
//!    the right and bottom edges are cropped, never padded.
//! 3. [`Deduplicator`] assigns identical blocks one shared [`TileId`], in
//!    first-seen order, producing a [`TileTable`].
//! 4. The identities are reshaped into a [`TileMap`].
//!
//! # Quick Start
//!
//! ```
//! use tile_encoder::{SourceImage, TileEncoder};
//!
//! // 9x8 black image: one full 8x8 tile plus a 1-pixel-wide edge tile
//! let image = SourceImage::from_rgb8(9, 8, vec![0; 9 * 8 * 3]).unwrap();
//! let encoded = TileEncoder::new().encode(&image).unwrap();
//!
//! assert_eq!(encoded.palette().len(), 16);
//! assert_eq!(encoded.tile_count(), 2);
//! assert_eq!(encoded.tile_map().width(), 2);
//! assert_eq!(encoded.tile_map().height(), 1);
//! ```
//!
//! # Determinism
//!
//! Quantization is integer-only and every tie is broken by a fixed rule, so
//! the same pixels always produce the same palette, tiles and map. No state
//! survives between calls to [`TileEncoder::encode()`].

pub mod api;
pub mod color;
pub mod image;
pub mod output;
pub mod palette;
pub mod quantize;
pub mod tile;


pub use api::{EncodeError, TileEncoder};
pub use color::{Rgb, Rgba};
pub use image::SourceImage;
pub use output::EncodedImage;
pub use palette::{Palette, PALETTE_SIZE};
pub use quantize::{IndexedGrid, Quantizer};
pub use tile::{
    dedup_tiles, Deduplicator, MapWordWidth, Tile, TileId, TileMap, TileSize, TileTable, Tiles,
};
