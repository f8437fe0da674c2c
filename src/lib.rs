//! tilepack - PNG and WAV assets to embeddable C tables
//!
//! Images are quantized to a 16-color palette, cut into deduplicated tiles
//! and emitted as palette, tile and map arrays. Audio is emitted as raw PCM
//! bytes. This library exposes modules for integration testing.

pub mod decoding;
pub mod error;
pub mod models;
pub mod rendering;
pub mod services;
