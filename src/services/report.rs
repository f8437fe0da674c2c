use serde::Serialize;
use std::path::PathBuf;

use crate::models::{AssetKind, Prefix};
use crate::rendering::Declaration;

/// Outcome of converting one source asset.
#[derive(Debug, Clone)]
pub struct ConvertedAsset {
    pub source: PathBuf,
    pub kind: AssetKind,
    pub prefix: Prefix,
    /// Files written, in emission order
    pub files: Vec<PathBuf>,
    /// Symbols defined by those files
    pub declarations: Vec<Declaration>,
    pub stats: AssetStats,
}

/// Size figures reported per asset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum AssetStats {
    Image {
        width: u32,
        height: u32,
        colors: usize,
        tiles: usize,
        map_width: u32,
        map_height: u32,
    },
    Audio {
        bytes: usize,
        frames: usize,
        channels: u16,
        sample_rate: u32,
        bits_per_sample: u16,
    },
}
