//! End-to-end WAV conversion tests.

mod common;

use common::{fixtures, TestWorkspace};
use pretty_assertions::assert_eq;
use tilepack::error::ConvertError;
use tilepack::models::{AudioConfig, Prefix};
use tilepack::services::AudioConverter;

#[test]
fn test_emits_exact_data_bytes() {
    let ws = TestWorkspace::new();
    let samples: Vec<u8> = (0..40).map(|i| (i * 6) as u8).collect();
    let source = ws.add("beep.wav", &fixtures::pcm8_wav(&samples));

    AudioConverter::default()
        .convert(&source, &ws.output, &Prefix::new("beep").unwrap())
        .unwrap();

    assert_eq!(ws.output_files(), vec!["beep_audio.c"]);
    let text = ws.read_output("beep_audio.c");
    common::assert_c_source(&text);
    common::assert_scalar(&text, "beep_audio_len", "uint32_t", 40);

    let bytes: Vec<u8> = common::c_array(&text, "beep_audio")
        .into_iter()
        .map(|v| v as u8)
        .collect();
    assert_eq!(bytes, samples);

    let rows = common::c_array_rows(&text, "beep_audio");
    assert_eq!(rows.iter().map(Vec::len).collect::<Vec<_>>(), vec![16, 16, 8]);
}

#[test]
fn test_configurable_line_width() {
    let ws = TestWorkspace::new();
    let source = ws.add("tick.wav", &fixtures::pcm8_wav(&[1, 2, 3, 4, 5]));

    AudioConverter::from_config(&AudioConfig { bytes_per_line: 4 })
        .convert(&source, &ws.output, &Prefix::new("tick").unwrap())
        .unwrap();

    let rows = common::c_array_rows(&ws.read_output("tick_audio.c"), "tick_audio");
    assert_eq!(rows, vec![vec![1, 2, 3, 4], vec![5]]);
}

#[test]
fn test_sixteen_bit_stereo_passthrough() {
    let ws = TestWorkspace::new();
    let samples = [0x34, 0x12, 0xCD, 0xAB, 0x00, 0x80, 0xFF, 0x7F];
    let source = ws.add("pad.wav", &fixtures::wav(1, 2, 16, &samples));

    AudioConverter::default()
        .convert(&source, &ws.output, &Prefix::new("pad").unwrap())
        .unwrap();

    let text = ws.read_output("pad_audio.c");
    common::assert_scalar(&text, "pad_audio_len", "uint32_t", 8);
    let values: Vec<u64> = samples.iter().map(|&b| b as u64).collect();
    assert_eq!(common::c_array(&text, "pad_audio"), values);
}

#[test]
fn test_non_pcm_is_unsupported() {
    let ws = TestWorkspace::new();
    // IEEE float
    let source = ws.add("float.wav", &fixtures::wav(3, 1, 32, &[0; 8]));

    let result =
        AudioConverter::default().convert(&source, &ws.output, &Prefix::new("float").unwrap());

    assert!(matches!(result, Err(ConvertError::UnsupportedFormat(_))));
    assert!(ws.output_files().is_empty());
}

#[test]
fn test_empty_data_is_invalid() {
    let ws = TestWorkspace::new();
    let source = ws.add("silence.wav", &fixtures::pcm8_wav(&[]));

    let result =
        AudioConverter::default().convert(&source, &ws.output, &Prefix::new("silence").unwrap());

    assert!(matches!(result, Err(ConvertError::InvalidInput(_))));
}

#[test]
fn test_missing_file_is_invalid_input() {
    let ws = TestWorkspace::new();
    let result = AudioConverter::default().convert(
        &ws.input.join("nope.wav"),
        &ws.output,
        &Prefix::new("nope").unwrap(),
    );
    assert!(matches!(result, Err(ConvertError::InvalidInput(msg)) if msg.contains("nope.wav")));
    assert!(ws.output_files().is_empty());
}
