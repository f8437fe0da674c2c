use std::path::Path;

use crate::error::ConvertError;

const FORMAT_PCM: u16 = 0x0001;
const FORMAT_EXTENSIBLE: u16 = 0xFFFE;

/// Raw PCM frames from a WAV file, plus the format needed to describe them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WavAudio {
    pub channels: u16,
    pub sample_rate: u32,
    pub bits_per_sample: u16,
    /// Bytes per frame as declared by the `fmt ` chunk. Containers may pad
    /// samples, so this can exceed `channels * ceil(bits / 8)`.
    pub block_align: u16,
    /// Sample bytes exactly as stored, truncated to whole frames
    pub data: Vec<u8>,
}

impl WavAudio {
    pub fn frames(&self) -> usize {
        self.data.len() / (self.block_align.max(1) as usize)
    }
}

#[derive(Debug, Clone, Copy)]
struct FormatChunk {
    format_tag: u16,
    channels: u16,
    sample_rate: u32,
    block_align: u16,
    bits_per_sample: u16,
}

fn invalid(msg: impl Into<String>) -> ConvertError {
    ConvertError::InvalidInput(msg.into())
}

fn u16_at(bytes: &[u8], at: usize) -> u16 {
    u16::from_le_bytes([bytes[at], bytes[at + 1]])
}

fn u32_at(bytes: &[u8], at: usize) -> u32 {
    u32::from_le_bytes([bytes[at], bytes[at + 1], bytes[at + 2], bytes[at + 3]])
}

fn parse_format(body: &[u8]) -> Result<FormatChunk, ConvertError> {
    if body.len() < 16 {
        return Err(invalid(format!("WAV fmt chunk too short ({} bytes)", body.len())));
    }
    Ok(FormatChunk {
        format_tag: u16_at(body, 0),
        channels: u16_at(body, 2),
        sample_rate: u32_at(body, 4),
        block_align: u16_at(body, 12),
        bits_per_sample: u16_at(body, 14),
    })
}

/// Parse a RIFF/WAVE byte stream and return its PCM frames.
///
/// Chunks other than `fmt ` and `data` are skipped. Chunk bodies are padded
/// to even length as RIFF requires.
pub fn decode_wav(bytes: &[u8]) -> Result<WavAudio, ConvertError> {
    if bytes.len() < 12 || &bytes[0..4] != b"RIFF" || &bytes[8..12] != b"WAVE" {
        return Err(invalid("not a RIFF/WAVE file"));
    }

    let mut format = None;
    let mut data = None;
    let mut pos = 12;

    while pos + 8 <= bytes.len() {
        let id = &bytes[pos..pos + 4];
        let size = u32_at(bytes, pos + 4) as usize;
        let start = pos + 8;
        let end = start
            .checked_add(size)
            .filter(|&end| end <= bytes.len())
            .ok_or_else(|| {
                invalid(format!(
                    "WAV chunk '{}' truncated",
                    String::from_utf8_lossy(id)
                ))
            })?;
        let body = &bytes[start..end];

        match id {
            b"fmt " => format = Some(parse_format(body)?),
            b"data" => data = Some(body),
            _ => tracing::trace!(chunk = %String::from_utf8_lossy(id), size, "Skipping WAV chunk"),
        }
        if format.is_some() && data.is_some() {
            break;
        }
        pos = end + (size & 1);
    }

    let format = format.ok_or_else(|| invalid("WAV has no fmt chunk"))?;
    let data = data.ok_or_else(|| invalid("WAV has no data chunk"))?;

    if format.format_tag != FORMAT_PCM && format.format_tag != FORMAT_EXTENSIBLE {
        return Err(ConvertError::UnsupportedFormat(format!(
            "WAV format tag {:#06x} is not PCM",
            format.format_tag
        )));
    }
    if format.channels == 0 || format.block_align == 0 {
        return Err(invalid("WAV fmt chunk has zero channels or block align"));
    }

    let whole = data.len() - data.len() % format.block_align as usize;
    if whole == 0 {
        return Err(invalid("WAV data chunk is empty"));
    }

    tracing::debug!(
        channels = format.channels,
        sample_rate = format.sample_rate,
        bits = format.bits_per_sample,
        bytes = whole,
        "Decoded WAV"
    );

    Ok(WavAudio {
        channels: format.channels,
        sample_rate: format.sample_rate,
        bits_per_sample: format.bits_per_sample,
        block_align: format.block_align,
        data: data[..whole].to_vec(),
    })
}

/// Read and decode a WAV file.
pub fn read_wav(path: &Path) -> Result<WavAudio, ConvertError> {
    let bytes = std::fs::read(path).map_err(|e| ConvertError::unreadable(path, e))?;
    decode_wav(&bytes)
}
