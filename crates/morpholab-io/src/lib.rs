//! morpholab-io - Image I/O for morpholab
//!
//! Reads PNG, JPEG and BMP files into [`RgbGrid`]s and writes results as
//! 8-bit PNG through an [`ExportContext`].

pub mod bmp;
mod error;
pub mod export;
pub mod format;
pub mod jpeg;
pub mod png;

pub use error::{IoError, IoResult};
pub use export::ExportContext;
pub use format::{ImageFormat, detect_format, detect_format_from_bytes};
pub use png::{write_png_gray, write_png_rgb};

use morpholab_core::RgbGrid;
use std::io::Cursor;
use std::path::Path;

/// Read an image file, choosing the decoder from its magic bytes.
///
/// Grayscale sources are promoted to RGB and alpha is dropped.
pub fn read_image<P: AsRef<Path>>(path: P) -> IoResult<RgbGrid> {
    let data = std::fs::read(path.as_ref())?;
    read_image_mem(&data)
}

/// Decode an in-memory image, choosing the decoder from its magic bytes.
pub fn read_image_mem(data: &[u8]) -> IoResult<RgbGrid> {
    match detect_format_from_bytes(data)? {
        ImageFormat::Png => png::read_png(Cursor::new(data)),
        ImageFormat::Jpeg => jpeg::read_jpeg(Cursor::new(data)),
        ImageFormat::Bmp => bmp::read_bmp(Cursor::new(data)),
    }
}
