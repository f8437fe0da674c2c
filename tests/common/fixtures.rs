//! Test fixtures: PNG and WAV files built in memory.

/// Solid colors used across tests
pub mod colors {
    pub const BLACK: [u8; 3] = [0, 0, 0];
    pub const WHITE: [u8; 3] = [255, 255, 255];
    pub const RED: [u8; 3] = [255, 0, 0];
    pub const TEAL: [u8; 3] = [0, 128, 128];
}

/// Encode an RGB8 PNG whose pixel at (x, y) is `f(x, y)`.
pub fn rgb_png(width: u32, height: u32, f: impl Fn(u32, u32) -> [u8; 3]) -> Vec<u8> {
    let data: Vec<u8> = (0..height)
        .flat_map(|y| (0..width).map(move |x| (x, y)))
        .flat_map(|(x, y)| f(x, y))
        .collect();

    let mut out = Vec::new();
    {
        let mut encoder = png::Encoder::new(&mut out, width, height);
        encoder.set_color(png::ColorType::Rgb);
        encoder.set_depth(png::BitDepth::Eight);
        let mut writer = encoder.write_header().unwrap();
        writer.write_image_data(&data).unwrap();
    }
    out
}

/// Solid-color RGB PNG.
pub fn solid_png(width: u32, height: u32, color: [u8; 3]) -> Vec<u8> {
    rgb_png(width, height, |_, _| color)
}

/// 32x32 PNG of sixteen 8x8 regions, each a different flat color.
pub fn sixteen_regions_png() -> Vec<u8> {
    rgb_png(32, 32, |x, y| {
        let i = (y / 8 * 4 + x / 8) as u8;
        [i * 16, 255 - i * 16, i * 8]
    })
}

/// A PNG header claiming zero width, with a valid CRC so only the
/// dimension check can reject it.
pub fn zero_width_png() -> Vec<u8> {
    let mut ihdr = Vec::new();
    ihdr.extend(b"IHDR");
    ihdr.extend(0u32.to_be_bytes());
    ihdr.extend(8u32.to_be_bytes());
    ihdr.extend([8, 2, 0, 0, 0]);

    let mut out = vec![0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];
    out.extend(13u32.to_be_bytes());
    out.extend(&ihdr);
    out.extend(crc32(&ihdr).to_be_bytes());
    out
}

fn crc32(bytes: &[u8]) -> u32 {
    let mut crc = 0xFFFF_FFFFu32;
    for &b in bytes {
        crc ^= b as u32;
        for _ in 0..8 {
            let mask = (crc & 1).wrapping_neg();
            crc = (crc >> 1) ^ (0xEDB8_8320 & mask);
        }
    }
    !crc
}

/// RIFF/WAVE file with one `fmt ` chunk and one `data` chunk.
pub fn wav(format_tag: u16, channels: u16, bits: u16, data: &[u8]) -> Vec<u8> {
    let rate = 22_050u32;
    let align = channels * bits.div_ceil(8);

    let mut fmt = Vec::new();
    fmt.extend(format_tag.to_le_bytes());
    fmt.extend(channels.to_le_bytes());
    fmt.extend(rate.to_le_bytes());
    fmt.extend((rate * align as u32).to_le_bytes());
    fmt.extend(align.to_le_bytes());
    fmt.extend(bits.to_le_bytes());

    let mut body = b"WAVE".to_vec();
    body.extend(b"fmt ");
    body.extend((fmt.len() as u32).to_le_bytes());
    body.extend(&fmt);
    body.extend(b"data");
    body.extend((data.len() as u32).to_le_bytes());
    body.extend(data);
    if data.len() % 2 == 1 {
        body.push(0);
    }

    let mut out = b"RIFF".to_vec();
    out.extend((body.len() as u32).to_le_bytes());
    out.extend(body);
    out
}

/// 8-bit mono PCM WAV.
pub fn pcm8_wav(data: &[u8]) -> Vec<u8> {
    wav(1, 1, 8, data)
}
