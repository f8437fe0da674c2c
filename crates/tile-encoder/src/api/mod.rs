//! Public API for the tile-encoder crate.
//!
//! [`TileEncoder`] builder and the [`EncodeError`] error type.

mod encoder;
mod error;

pub use encoder::TileEncoder;
pub use error::EncodeError;
