//! BMP image format support
//!
//! Reads uncompressed 24-bit and 32-bit Windows bitmaps and writes 24-bit
//! ones. Palette and RLE variants are rejected.

use crate::{IoError, IoResult};
use morpholab_core::RgbGrid;
use std::io::{self, Read, Write};

/// BMP file header size
const BMP_FILE_HEADER_SIZE: usize = 14;

/// BMP info header size (BITMAPINFOHEADER)
const BMP_INFO_HEADER_SIZE: u32 = 40;

/// Largest decoded pixel buffer accepted, in bytes
pub const MAX_DECODED_BYTES: u64 = 256 * 1024 * 1024;

fn le_u32(b: &[u8]) -> u32 {
    u32::from_le_bytes([b[0], b[1], b[2], b[3]])
}

fn le_i32(b: &[u8]) -> i32 {
    i32::from_le_bytes([b[0], b[1], b[2], b[3]])
}

fn le_u16(b: &[u8]) -> u16 {
    u16::from_le_bytes([b[0], b[1]])
}

/// Read a BMP image
pub fn read_bmp<R: Read>(mut reader: R) -> IoResult<RgbGrid> {
    let mut file_header = [0u8; BMP_FILE_HEADER_SIZE];
    reader.read_exact(&mut file_header)?;
    if &file_header[0..2] != b"BM" {
        return Err(IoError::InvalidData("not a BMP file".to_string()));
    }
    let pixel_offset = le_u32(&file_header[10..14]) as usize;

    let mut info_header = [0u8; BMP_INFO_HEADER_SIZE as usize];
    reader.read_exact(&mut info_header)?;

    let header_size = le_u32(&info_header[0..4]);
    if header_size < BMP_INFO_HEADER_SIZE {
        return Err(IoError::InvalidData(format!(
            "unsupported BMP header size: {}",
            header_size
        )));
    }

    let width = le_i32(&info_header[4..8]);
    let height = le_i32(&info_header[8..12]);
    let planes = le_u16(&info_header[12..14]);
    if planes != 1 {
        return Err(IoError::InvalidData(format!(
            "unsupported number of planes: {}",
            planes
        )));
    }

    let bits_per_pixel = le_u16(&info_header[14..16]);
    let compression = le_u32(&info_header[16..20]);
    // 3 is BI_BITFIELDS, accepted for 32-bit BGRX
    if compression != 0 && !(compression == 3 && bits_per_pixel == 32) {
        return Err(IoError::UnsupportedFormat(format!(
            "unsupported BMP compression: {}",
            compression
        )));
    }
    let bytes_per_pixel = match bits_per_pixel {
        24 => 3usize,
        32 => 4usize,
        _ => {
            return Err(IoError::UnsupportedFormat(format!(
                "unsupported BMP bit depth: {}",
                bits_per_pixel
            )));
        }
    };

    if width <= 0 || height == 0 {
        return Err(IoError::InvalidData(format!(
            "invalid BMP dimensions: {}x{}",
            width, height
        )));
    }
    let width = width.unsigned_abs();
    let top_down = height < 0;
    let height = height.unsigned_abs();

    // header values are untrusted; bound them before allocating
    let decoded = (width as u64)
        .checked_mul(height as u64)
        .and_then(|n| n.checked_mul(bytes_per_pixel as u64))
        .filter(|&n| n <= MAX_DECODED_BYTES)
        .ok_or_else(|| {
            IoError::InvalidData(format!(
                "BMP dimensions {}x{} exceed the {} byte limit",
                width, height, MAX_DECODED_BYTES
            ))
        })?;
    log::debug!("BMP pixel data: {} bytes", decoded);

    let current_pos = BMP_FILE_HEADER_SIZE + BMP_INFO_HEADER_SIZE as usize;
    if pixel_offset > current_pos {
        let gap = (pixel_offset - current_pos) as u64;
        let skipped = io::copy(&mut reader.by_ref().take(gap), &mut io::sink())?;
        if skipped < gap {
            return Err(IoError::InvalidData(
                "BMP truncated before pixel data".to_string(),
            ));
        }
    }

    // rows are 4-byte aligned
    let row_stride = (width as usize * bytes_per_pixel).div_ceil(4) * 4;
    let mut row_buffer = vec![0u8; row_stride];
    let row_len = width as usize * 3;
    let mut rgb = vec![0u8; row_len * height as usize];

    for row in 0..height {
        reader.read_exact(&mut row_buffer)?;
        let y = if top_down { row } else { height - 1 - row };
        let dst = &mut rgb[y as usize * row_len..][..row_len];
        for (out, px) in dst
            .chunks_exact_mut(3)
            .zip(row_buffer.chunks_exact(bytes_per_pixel))
        {
            out[0] = px[2];
            out[1] = px[1];
            out[2] = px[0];
        }
    }

    log::debug!("decoded BMP {}x{} ({} bpp)", width, height, bits_per_pixel);
    Ok(RgbGrid::from_interleaved(width, height, rgb)?)
}

/// Write a 24-bit bottom-up BMP image
pub fn write_bmp<W: Write>(rgb: &RgbGrid, mut writer: W) -> IoResult<()> {
    let (width, height) = rgb.dimensions();
    let row_stride = (width as usize * 3).div_ceil(4) * 4;
    let image_size = row_stride * height as usize;
    let pixel_offset = BMP_FILE_HEADER_SIZE + BMP_INFO_HEADER_SIZE as usize;
    let file_size = u32::try_from(pixel_offset + image_size)
        .map_err(|_| IoError::EncodeError("image too large for BMP".to_string()))?;

    let mut header = Vec::with_capacity(pixel_offset);
    header.extend_from_slice(b"BM");
    header.extend_from_slice(&file_size.to_le_bytes());
    header.extend_from_slice(&[0; 4]);
    header.extend_from_slice(&(pixel_offset as u32).to_le_bytes());
    header.extend_from_slice(&BMP_INFO_HEADER_SIZE.to_le_bytes());
    header.extend_from_slice(&(width as i32).to_le_bytes());
    header.extend_from_slice(&(height as i32).to_le_bytes());
    header.extend_from_slice(&1u16.to_le_bytes());
    header.extend_from_slice(&24u16.to_le_bytes());
    header.extend_from_slice(&0u32.to_le_bytes());
    header.extend_from_slice(&(image_size as u32).to_le_bytes());
    // 72 dpi
    header.extend_from_slice(&2835u32.to_le_bytes());
    header.extend_from_slice(&2835u32.to_le_bytes());
    header.extend_from_slice(&[0; 8]);
    writer.write_all(&header)?;

    let mut row_buffer = vec![0u8; row_stride];
    let row_len = width as usize * 3;
    for y in (0..height as usize).rev() {
        let src = &rgb.data()[y * row_len..][..row_len];
        for (out, px) in row_buffer.chunks_exact_mut(3).zip(src.chunks_exact(3)) {
            out[0] = px[2];
            out[1] = px[1];
            out[2] = px[0];
        }
        writer.write_all(&row_buffer)?;
    }
    Ok(())
}
