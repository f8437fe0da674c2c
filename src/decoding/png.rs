use std::io::Cursor;
use std::path::Path;

use png::{ColorType, Transformations};
use tile_encoder::SourceImage;

use crate::error::ConvertError;

/// Decode PNG bytes into a [`SourceImage`].
///
/// Palettes and sub-byte depths are expanded and 16-bit samples stripped,
/// so the decoder always hands back 8-bit Gray, GrayAlpha, RGB or RGBA.
pub fn decode_png(data: &[u8]) -> Result<SourceImage, ConvertError> {
    let mut decoder = png::Decoder::new(Cursor::new(data));
    decoder.set_transformations(Transformations::EXPAND | Transformations::STRIP_16);

    let mut reader = decoder
        .read_info()
        .map_err(|e| ConvertError::InvalidInput(format!("PNG decode error: {e}")))?;
    let mut buf = vec![0u8; reader.output_buffer_size()];
    let frame = reader
        .next_frame(&mut buf)
        .map_err(|e| ConvertError::InvalidInput(format!("PNG decode error: {e}")))?;
    buf.truncate(frame.buffer_size());

    let (width, height) = (frame.width, frame.height);
    tracing::debug!(
        width,
        height,
        color_type = ?frame.color_type,
        bit_depth = ?frame.bit_depth,
        "Decoded PNG"
    );

    if frame.bit_depth != png::BitDepth::Eight {
        return Err(ConvertError::UnsupportedFormat(format!(
            "PNG bit depth {:?} after normalization",
            frame.bit_depth
        )));
    }

    let image = match frame.color_type {
        ColorType::Rgba => SourceImage::from_rgba8(width, height, buf)?,
        ColorType::Rgb => SourceImage::from_rgb8(width, height, buf)?,
        ColorType::Grayscale => SourceImage::from_gray8(width, height, buf)?,
        ColorType::GrayscaleAlpha => SourceImage::from_gray_alpha8(width, height, buf)?,
        other => {
            return Err(ConvertError::UnsupportedFormat(format!(
                "PNG color type {other:?}"
            )))
        }
    };
    Ok(image)
}

/// Read and decode a PNG file.
pub fn read_png(path: &Path) -> Result<SourceImage, ConvertError> {
    let data = std::fs::read(path).map_err(|e| ConvertError::unreadable(path, e))?;
    decode_png(&data)
}
