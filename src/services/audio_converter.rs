use std::path::Path;

use super::artifact_writer::ArtifactWriter;
use super::report::{AssetStats, ConvertedAsset};
use crate::decoding::{read_wav, WavAudio};
use crate::error::ConvertError;
use crate::models::{Artifact, ArtifactKind, AssetKind, AudioConfig, Prefix};
use crate::rendering::{AudioSource, Declaration};

/// Converts WAV files into a C byte array of their PCM frames.
#[derive(Debug, Clone, Copy)]
pub struct AudioConverter {
    bytes_per_line: usize,
}

impl Default for AudioConverter {
    fn default() -> Self {
        Self::from_config(&AudioConfig::default())
    }
}

impl AudioConverter {
    pub fn from_config(config: &AudioConfig) -> Self {
        Self {
            bytes_per_line: config.bytes_per_line.max(1),
        }
    }

    pub fn render(&self, prefix: &Prefix, audio: &WavAudio) -> (Artifact, Vec<Declaration>) {
        let source = AudioSource {
            prefix,
            data: &audio.data,
            bytes_per_line: self.bytes_per_line,
        };
        let artifact = Artifact::new(
            ArtifactKind::Audio,
            format!("{prefix}{}", ArtifactKind::Audio.suffix()),
            source.to_string(),
        );
        (artifact, source.declarations())
    }

    /// Decode `source` and write `<prefix>_audio.c` into `out_dir`.
    pub fn convert(
        &self,
        source: &Path,
        out_dir: &Path,
        prefix: &Prefix,
    ) -> Result<ConvertedAsset, ConvertError> {
        let audio = read_wav(source)?;
        let (artifact, declarations) = self.render(prefix, &audio);

        let files = ArtifactWriter::create(out_dir)?.write_all(std::slice::from_ref(&artifact))?;

        tracing::info!(
            source = %source.display(),
            %prefix,
            bytes = audio.data.len(),
            frames = audio.frames(),
            channels = audio.channels,
            sample_rate = audio.sample_rate,
            "Converted audio"
        );

        Ok(ConvertedAsset {
            source: source.to_path_buf(),
            kind: AssetKind::Audio,
            prefix: prefix.clone(),
            files,
            declarations,
            stats: AssetStats::Audio {
                bytes: audio.data.len(),
                frames: audio.frames(),
                channels: audio.channels,
                sample_rate: audio.sample_rate,
                bits_per_sample: audio.bits_per_sample,
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_uses_prefix() {
        let prefix = Prefix::new("jump").unwrap();
        let audio = WavAudio {
            channels: 1,
            sample_rate: 8000,
            bits_per_sample: 8,
            block_align: 1,
            data: vec![128; 20],
        };
        let (artifact, declarations) = AudioConverter::default().render(&prefix, &audio);

        assert_eq!(artifact.file_name, "jump_audio.c");
        assert!(artifact.contents.contains("const uint32_t jump_audio_len = 20;"));
        // 16 bytes on the first line, 4 on the second
        assert_eq!(artifact.contents.lines().filter(|l| l.starts_with("  ")).count(), 2);
        assert_eq!(declarations.len(), 2);
    }

    #[test]
    fn test_zero_bytes_per_line_clamped() {
        let converter = AudioConverter::from_config(&AudioConfig { bytes_per_line: 0 });
        assert_eq!(converter.bytes_per_line, 1);
    }
}
