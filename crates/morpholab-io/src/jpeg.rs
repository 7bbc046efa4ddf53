//! JPEG image format support
//!
//! Reads baseline and progressive JPEG through the `jpeg-decoder` crate.
//! Grayscale and CMYK sources are converted to RGB. Writing is not
//! supported; exports are always PNG.

use crate::{IoError, IoResult};
use jpeg_decoder::{Decoder, PixelFormat};
use morpholab_core::RgbGrid;
use std::io::Read;

/// Read a JPEG image from a reader positioned at the SOI marker (`FF D8`).
pub fn read_jpeg<R: Read>(reader: R) -> IoResult<RgbGrid> {
    let mut decoder = Decoder::new(reader);
    let pixels = decoder
        .decode()
        .map_err(|e| IoError::DecodeError(format!("JPEG decode error: {}", e)))?;
    let info = decoder
        .info()
        .ok_or_else(|| IoError::DecodeError("JPEG header missing".to_string()))?;

    let (width, height) = (info.width as u32, info.height as u32);
    let rgb: Vec<u8> = match info.pixel_format {
        PixelFormat::RGB24 => pixels,
        PixelFormat::L8 => pixels.iter().flat_map(|&v| [v, v, v]).collect(),
        // big-endian samples; keep the high byte
        PixelFormat::L16 => pixels
            .chunks_exact(2)
            .flat_map(|s| [s[0], s[0], s[0]])
            .collect(),
        PixelFormat::CMYK32 => pixels.chunks_exact(4).flat_map(cmyk_to_rgb).collect(),
    };

    log::debug!("decoded JPEG {}x{} ({:?})", width, height, info.pixel_format);
    Ok(RgbGrid::from_interleaved(width, height, rgb)?)
}

/// Convert one CMYK sample to RGB.
///
/// `jpeg-decoder` returns CMYK already inverted as stored by Adobe, so the
/// components are multiplied directly.
fn cmyk_to_rgb(px: &[u8]) -> [u8; 3] {
    let k = px[3] as u32;
    let mix = |c: u8| ((c as u32 * k + 127) / 255) as u8;
    [mix(px[0]), mix(px[1]), mix(px[2])]
}
