//! PNG image format support
//!
//! Every input is normalized to 8-bit samples and promoted to RGB; alpha is
//! dropped. Output is always 8-bit, grayscale or RGB.

use crate::{IoError, IoResult};
use morpholab_core::{Grid8, RgbGrid};
use png::{BitDepth, ColorType, Decoder, Encoder, Transformations};
use std::io::{BufRead, Seek, Write};

/// Read a PNG image
pub fn read_png<R: BufRead + Seek>(reader: R) -> IoResult<RgbGrid> {
    let mut decoder = Decoder::new(reader);
    decoder.set_transformations(Transformations::normalize_to_color8());
    let mut reader = decoder
        .read_info()
        .map_err(|e| IoError::DecodeError(format!("PNG decode error: {}", e)))?;

    let buf_size = reader
        .output_buffer_size()
        .ok_or_else(|| IoError::DecodeError("failed to get output buffer size".to_string()))?;
    let mut buf = vec![0; buf_size];
    let output_info = reader
        .next_frame(&mut buf)
        .map_err(|e| IoError::DecodeError(format!("PNG frame error: {}", e)))?;

    let width = output_info.width;
    let height = output_info.height;
    let samples = match output_info.color_type {
        ColorType::Grayscale => 1,
        ColorType::GrayscaleAlpha => 2,
        ColorType::Rgb => 3,
        ColorType::Rgba => 4,
        other => {
            return Err(IoError::UnsupportedFormat(format!(
                "unsupported PNG output format: {:?}",
                other
            )));
        }
    };

    let bytes_per_row = output_info.line_size;
    let data = &buf[..output_info.buffer_size()];
    let mut rgb = Vec::with_capacity(width as usize * height as usize * 3);
    for y in 0..height as usize {
        let row = &data[y * bytes_per_row..][..width as usize * samples];
        for px in row.chunks_exact(samples) {
            match samples {
                1 | 2 => rgb.extend_from_slice(&[px[0], px[0], px[0]]),
                _ => rgb.extend_from_slice(&px[..3]),
            }
        }
    }

    log::debug!("decoded PNG {}x{} ({} samples/pixel)", width, height, samples);
    Ok(RgbGrid::from_interleaved(width, height, rgb)?)
}

fn write_png_data<W: Write>(
    writer: W,
    width: u32,
    height: u32,
    color_type: ColorType,
    data: &[u8],
) -> IoResult<()> {
    let mut encoder = Encoder::new(writer, width, height);
    encoder.set_color(color_type);
    encoder.set_depth(BitDepth::Eight);

    let mut writer = encoder
        .write_header()
        .map_err(|e| IoError::EncodeError(format!("PNG header error: {}", e)))?;
    writer
        .write_image_data(data)
        .map_err(|e| IoError::EncodeError(format!("PNG write error: {}", e)))?;
    Ok(())
}

/// Write a single-channel grid as an 8-bit grayscale PNG
pub fn write_png_gray<W: Write>(grid: &Grid8, writer: W) -> IoResult<()> {
    write_png_data(
        writer,
        grid.width(),
        grid.height(),
        ColorType::Grayscale,
        grid.data(),
    )
}

/// Write a color grid as an 8-bit RGB PNG
pub fn write_png_rgb<W: Write>(rgb: &RgbGrid, writer: W) -> IoResult<()> {
    write_png_data(writer, rgb.width(), rgb.height(), ColorType::Rgb, rgb.data())
}
