pub mod artifact;
pub mod config;
pub mod prefix;

pub use artifact::{Artifact, ArtifactKind, AssetKind};
pub use config::{
    AppConfig, AudioConfig, BatchConfig, ImageConfig, CONFIG_ENV_VAR, DEFAULT_CONFIG_FILE,
};
pub use prefix::Prefix;
