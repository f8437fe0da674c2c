use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Environment variable naming a config file when `--config` is not given.
pub const CONFIG_ENV_VAR: &str = "TILEPACK_CONFIG";

/// Config file looked up in the working directory as a last resort.
pub const DEFAULT_CONFIG_FILE: &str = "tilepack.yaml";

/// Application configuration loaded from tilepack.yaml
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct AppConfig {
    /// Directory artifacts are written to when `-o` is not given
    pub output_dir: PathBuf,

    pub image: ImageConfig,

    pub audio: AudioConfig,

    pub batch: BatchConfig,
}

/// Image pipeline settings
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct ImageConfig {
    pub tile_width: u32,
    pub tile_height: u32,
    /// Palette entries the quantizer may choose (1..=16)
    pub colors: usize,
}

/// Audio emitter settings
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct AudioConfig {
    /// Sample bytes per line in the emitted array
    pub bytes_per_line: usize,
}

/// Batch conversion settings
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct BatchConfig {
    /// Name of the aggregate header
    pub header_name: String,

    /// Continue with remaining files after a failure
    pub keep_going: bool,

    /// Also write manifest.json
    pub manifest: bool,

    /// Also write a starter main.c that includes the header
    pub main_c: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("."),
            image: ImageConfig::default(),
            audio: AudioConfig::default(),
            batch: BatchConfig::default(),
        }
    }
}

impl Default for ImageConfig {
    fn default() -> Self {
        Self {
            tile_width: 8,
            tile_height: 8,
            colors: 16,
        }
    }
}

impl Default for AudioConfig {
    fn default() -> Self {
        Self { bytes_per_line: 16 }
    }
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            header_name: "assets.h".to_string(),
            keep_going: false,
            manifest: false,
            main_c: false,
        }
    }
}

impl AppConfig {
    /// Load configuration.
    ///
    /// Looks at `explicit`, then `$TILEPACK_CONFIG`, then `tilepack.yaml` in
    /// the working directory. Unreadable or unparsable files fall back to
    /// defaults with a warning.
    pub fn load(explicit: Option<&Path>) -> Self {
        let path = match explicit {
            Some(p) => Some(p.to_path_buf()),
            None => std::env::var_os(CONFIG_ENV_VAR)
                .map(PathBuf::from)
                .or_else(|| {
                    let local = PathBuf::from(DEFAULT_CONFIG_FILE);
                    local.is_file().then_some(local)
                }),
        };

        let Some(path) = path else {
            tracing::debug!("No config file, using defaults");
            return Self::default();
        };

        match std::fs::read_to_string(&path) {
            Ok(content) => Self::from_yaml(&content, &path),
            Err(e) => {
                tracing::warn!(path = %path.display(), %e, "Failed to read config, using defaults");
                Self::default()
            }
        }
    }

    fn from_yaml(content: &str, path: &Path) -> Self {
        match serde_yaml::from_str::<Self>(content) {
            Ok(config) => {
                tracing::info!(
                    path = %path.display(),
                    output_dir = %config.output_dir.display(),
                    "Loaded configuration"
                );
                config
            }
            Err(e) => {
                tracing::warn!(path = %path.display(), %e, "Failed to parse config, using defaults");
                Self::default()
            }
        }
    }
}
