use serde::Serialize;
use std::fmt;
use std::path::Path;

/// What an emitted file holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ArtifactKind {
    Palette,
    Tiles,
    Map,
    Audio,
    Header,
    Program,
    Manifest,
}

impl ArtifactKind {
    /// File name suffix appended to the prefix.
    pub fn suffix(self) -> &'static str {
        match self {
            ArtifactKind::Palette => "_palette.c",
            ArtifactKind::Tiles => "_tiles.c",
            ArtifactKind::Map => "_map.c",
            ArtifactKind::Audio => "_audio.c",
            ArtifactKind::Header => ".h",
            ArtifactKind::Program => ".c",
            ArtifactKind::Manifest => ".json",
        }
    }
}

impl fmt::Display for ArtifactKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ArtifactKind::Palette => "palette",
            ArtifactKind::Tiles => "tiles",
            ArtifactKind::Map => "map",
            ArtifactKind::Audio => "audio",
            ArtifactKind::Header => "header",
            ArtifactKind::Program => "program",
            ArtifactKind::Manifest => "manifest",
        };
        f.write_str(s)
    }
}

/// One output file rendered in memory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    pub kind: ArtifactKind,
    pub file_name: String,
    pub contents: String,
}

impl Artifact {
    pub fn new(kind: ArtifactKind, file_name: impl Into<String>, contents: String) -> Self {
        Self {
            kind,
            file_name: file_name.into(),
            contents,
        }
    }
}

/// Source asset types the converter understands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AssetKind {
    Image,
    Audio,
}

impl AssetKind {
    /// Classify by extension (case-insensitive): `.png` or `.wav`.
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "png" => Some(AssetKind::Image),
            "wav" => Some(AssetKind::Audio),
            _ => None,
        }
    }
}
