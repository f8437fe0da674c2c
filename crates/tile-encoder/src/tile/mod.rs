//! Tiling, deduplication and map assembly
//!
//! [`Tiles`] walks an [`IndexedGrid`](crate::IndexedGrid) block by block,
//! [`Deduplicator`] assigns each distinct block an identity, and
//! [`TileMap`] reshapes the identities back into the tile grid.

mod dedup;
mod size;
mod tilemap;
mod tiler;

pub use dedup::{dedup_tiles, Deduplicator, TileId, TileTable};
pub use size::TileSize;
pub use tilemap::{MapWordWidth, TileMap};
pub use tiler::{Tile, Tiles};
