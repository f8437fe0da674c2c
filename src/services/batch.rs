use rayon::prelude::*;
use serde::Serialize;
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use super::artifact_writer::ArtifactWriter;
use super::audio_converter::AudioConverter;
use super::image_converter::ImageConverter;
use super::report::{AssetStats, ConvertedAsset};
use crate::error::ConvertError;
use crate::models::{Artifact, ArtifactKind, AssetKind, BatchConfig, Prefix};
use crate::rendering::{AssetsHeader, MainSource};

const MANIFEST_NAME: &str = "manifest.json";
const MAIN_NAME: &str = "main.c";

/// One asset the batch found and will convert.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchEntry {
    pub source: PathBuf,
    pub kind: AssetKind,
    pub prefix: Prefix,
}

/// An asset that failed to convert under `keep_going`.
#[derive(Debug)]
pub struct BatchFailure {
    pub source: PathBuf,
    pub error: ConvertError,
}

#[derive(Debug)]
pub struct BatchReport {
    /// Successful conversions, sorted by source path
    pub converted: Vec<ConvertedAsset>,
    /// Failed conversions, sorted by source path
    pub failures: Vec<BatchFailure>,
    pub header: PathBuf,
    pub main: Option<PathBuf>,
    pub manifest: Option<PathBuf>,
}

#[derive(Serialize)]
struct Manifest<'a> {
    header: &'a str,
    assets: Vec<ManifestAsset<'a>>,
    failures: Vec<ManifestFailure>,
}

#[derive(Serialize)]
struct ManifestAsset<'a> {
    source: String,
    kind: AssetKind,
    prefix: &'a Prefix,
    files: Vec<String>,
    stats: &'a AssetStats,
}

#[derive(Serialize)]
struct ManifestFailure {
    source: String,
    error: &'static str,
    message: String,
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// Converts every PNG and WAV file in a directory.
pub struct BatchConverter {
    image: ImageConverter,
    audio: AudioConverter,
    options: BatchConfig,
}

impl BatchConverter {
    pub fn new(image: ImageConverter, audio: AudioConverter, options: BatchConfig) -> Self {
        Self {
            image,
            audio,
            options,
        }
    }

    /// List convertible files in `dir` (non-recursive), sorted by path.
    ///
    /// Prefixes come from the sanitized file stem. Two files of the same
    /// kind whose stems sanitize to the same identifier get `_2`, `_3`, ...
    /// appended in path order.
    pub fn scan(dir: &Path) -> Result<Vec<BatchEntry>, ConvertError> {
        if !dir.is_dir() {
            return Err(ConvertError::InvalidInput(format!(
                "{} is not a directory",
                dir.display()
            )));
        }

        let mut sources = Vec::new();
        for entry in fs::read_dir(dir).map_err(|e| ConvertError::unreadable(dir, e))? {
            let path = entry.map_err(|e| ConvertError::unreadable(dir, e))?.path();
            if !path.is_file() {
                continue;
            }
            if let Some(kind) = AssetKind::from_path(&path) {
                sources.push((path, kind));
            }
        }
        sources.sort();

        let mut taken: HashSet<(String, AssetKind)> = HashSet::new();
        let mut entries = Vec::with_capacity(sources.len());
        for (source, kind) in sources {
            let stem = source
                .file_stem()
                .map(|s| s.to_string_lossy().into_owned())
                .unwrap_or_default();
            let base = Prefix::sanitize(&stem);
            let mut prefix = base.clone();
            let mut n = 2;
            while !taken.insert((prefix.as_str().to_string(), kind)) {
                prefix = Prefix::sanitize(&format!("{base}_{n}"));
                n += 1;
            }
            if prefix != base {
                tracing::warn!(source = %source.display(), %prefix, "Prefix collision, renamed");
            }
            entries.push(BatchEntry {
                source,
                kind,
                prefix,
            });
        }
        Ok(entries)
    }

    fn convert_one(&self, entry: &BatchEntry, out_dir: &Path) -> Result<ConvertedAsset, ConvertError> {
        match entry.kind {
            AssetKind::Image => self.image.convert(&entry.source, out_dir, &entry.prefix),
            AssetKind::Audio => self.audio.convert(&entry.source, out_dir, &entry.prefix),
        }
    }

    /// Convert every asset in `dir` into `out_dir`, then write the aggregate
    /// header (and the starter `main.c` and manifest, if enabled).
    ///
    /// Assets convert in parallel. Without `keep_going` the first failure in
    /// path order is returned and no header is written.
    pub fn run(&self, dir: &Path, out_dir: &Path) -> Result<BatchReport, ConvertError> {
        let entries = Self::scan(dir)?;
        if entries.is_empty() {
            tracing::warn!(dir = %dir.display(), "No .png or .wav files found");
        }
        tracing::info!(dir = %dir.display(), assets = entries.len(), "Starting batch");

        // Collecting a parallel iterator preserves input order
        let results: Vec<(PathBuf, Result<ConvertedAsset, ConvertError>)> = entries
            .par_iter()
            .map(|entry| (entry.source.clone(), self.convert_one(entry, out_dir)))
            .collect();

        let mut converted = Vec::new();
        let mut failures = Vec::new();
        for (source, result) in results {
            match result {
                Ok(asset) => converted.push(asset),
                Err(error) if self.options.keep_going => {
                    tracing::warn!(source = %source.display(), %error, "Skipping failed asset");
                    failures.push(BatchFailure { source, error });
                }
                Err(error) => {
                    tracing::error!(source = %source.display(), %error, "Batch aborted");
                    return Err(error);
                }
            }
        }

        let writer = ArtifactWriter::create(out_dir)?;

        let mut header = AssetsHeader::new();
        for asset in &converted {
            header.add(asset.prefix.clone(), asset.declarations.clone());
        }
        let mut artifacts = vec![Artifact::new(
            ArtifactKind::Header,
            self.options.header_name.clone(),
            header.to_string(),
        )];

        if self.options.main_c {
            let images: Vec<Prefix> = converted
                .iter()
                .filter(|a| a.kind == AssetKind::Image)
                .map(|a| a.prefix.clone())
                .collect();
            let main = MainSource {
                header_name: &self.options.header_name,
                images: &images,
            };
            artifacts.push(Artifact::new(ArtifactKind::Program, MAIN_NAME, main.to_string()));
        }

        if self.options.manifest {
            let manifest = Manifest {
                header: &self.options.header_name,
                assets: converted
                    .iter()
                    .map(|a| ManifestAsset {
                        source: file_name(&a.source),
                        kind: a.kind,
                        prefix: &a.prefix,
                        files: a.files.iter().map(|f| file_name(f)).collect(),
                        stats: &a.stats,
                    })
                    .collect(),
                failures: failures
                    .iter()
                    .map(|f| ManifestFailure {
                        source: file_name(&f.source),
                        error: f.error.kind(),
                        message: f.error.to_string(),
                    })
                    .collect(),
            };
            let json = serde_json::to_string_pretty(&manifest)
                .map_err(|e| ConvertError::InvalidInput(format!("manifest: {e}")))?;
            artifacts.push(Artifact::new(ArtifactKind::Manifest, MANIFEST_NAME, json + "\n"));
        }

        let written = writer.write_all(&artifacts)?;
        let path_of = |kind: ArtifactKind| {
            artifacts
                .iter()
                .zip(&written)
                .find(|(artifact, _)| artifact.kind == kind)
                .map(|(_, path)| path.clone())
        };
        let header_path = path_of(ArtifactKind::Header).unwrap_or_default();
        let main_path = path_of(ArtifactKind::Program);
        let manifest_path = path_of(ArtifactKind::Manifest);

        tracing::info!(
            converted = converted.len(),
            failed = failures.len(),
            header = %header_path.display(),
            "Batch finished"
        );

        Ok(BatchReport {
            converted,
            failures,
            header: header_path,
            main: main_path,
            manifest: manifest_path,
        })
    }
}
