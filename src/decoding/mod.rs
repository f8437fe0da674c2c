//! Container decoders: PNG to `SourceImage`, WAV to raw sample bytes.

pub mod png;
pub mod wav;

pub use self::png::{decode_png, read_png};
pub use wav::{decode_wav, read_wav, WavAudio};
