//! Content-addressed tile deduplication.

use std::collections::HashMap;

use super::tiler::Tile;

/// Identity of a unique tile: its position in the [`TileTable`].
pub type TileId = u32;

/// Distinct tiles in first-encounter order.
///
/// No two entries are equal. A tile's identity is its index.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TileTable {
    tiles: Vec<Tile>,
}

impl TileTable {
    #[inline]
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    #[inline]
    pub fn get(&self, id: TileId) -> Option<&Tile> {
        self.tiles.get(id as usize)
    }

    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, Tile> {
        self.tiles.iter()
    }
}

impl<'a> IntoIterator for &'a TileTable {
    type Item = &'a Tile;
    type IntoIter = std::slice::Iter<'a, Tile>;

    fn into_iter(self) -> Self::IntoIter {
        self.tiles.iter()
    }
}

/// Builds a [`TileTable`] from a stream of blocks.
///
/// Lookup is a hash map from tile content to identity, so each block costs
/// one hash of its pixels regardless of how many tiles are already known.
///
/// # Example
///
/// ```
/// use tile_encoder::{Deduplicator, Tile};
///
/// let mut dedup = Deduplicator::new();
/// assert_eq!(dedup.insert(Tile::new(1, 1, vec![3])), 0);
/// assert_eq!(dedup.insert(Tile::new(1, 1, vec![5])), 1);
/// assert_eq!(dedup.insert(Tile::new(1, 1, vec![3])), 0);
/// assert_eq!(dedup.finish().len(), 2);
/// ```
#[derive(Debug, Default)]
pub struct Deduplicator {
    table: TileTable,
    lookup: HashMap<Tile, TileId>,
}

impl Deduplicator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Identity for `tile`, appending it to the table if unseen.
    pub fn insert(&mut self, tile: Tile) -> TileId {
        if let Some(&id) = self.lookup.get(&tile) {
            return id;
        }
        let id = self.table.tiles.len() as TileId;
        self.table.tiles.push(tile.clone());
        self.lookup.insert(tile, id);
        id
    }

    pub fn finish(self) -> TileTable {
        self.table
    }
}

/// Deduplicate `tiles` in order, returning the table and one identity per
/// input tile.
pub fn dedup_tiles(tiles: impl IntoIterator<Item = Tile>) -> (TileTable, Vec<TileId>) {
    let tiles = tiles.into_iter();
    let mut ids = Vec::with_capacity(tiles.size_hint().0);
    let mut dedup = Deduplicator::new();
    for tile in tiles {
        ids.push(dedup.insert(tile));
    }
    (dedup.finish(), ids)
}
