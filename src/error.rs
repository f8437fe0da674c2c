use std::path::{Path, PathBuf};

use thiserror::Error;
use tile_encoder::EncodeError;

/// Error returned by every conversion entry point.
#[derive(Debug, Error)]
pub enum ConvertError {
    /// Malformed, empty or out-of-range input.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Well-formed input in a layout this tool cannot convert.
    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),

    #[error("IO error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ConvertError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ConvertError::Io {
            path: path.into(),
            source,
        }
    }

    /// A source asset that could not be read. Reported as invalid input;
    /// `Io` is reserved for the destination side.
    pub fn unreadable(path: &Path, source: std::io::Error) -> Self {
        ConvertError::InvalidInput(format!("cannot read {}: {source}", path.display()))
    }

    /// Short machine-readable name, used in the batch manifest.
    pub fn kind(&self) -> &'static str {
        match self {
            ConvertError::InvalidInput(_) => "invalid_input",
            ConvertError::UnsupportedFormat(_) => "unsupported_format",
            ConvertError::Io { .. } => "io",
        }
    }
}

impl From<EncodeError> for ConvertError {
    fn from(e: EncodeError) -> Self {
        ConvertError::InvalidInput(e.to_string())
    }
}
