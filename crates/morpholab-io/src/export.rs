//! Export context
//!
//! All result files of a run go through one [`ExportContext`], which owns
//! the output directory. Report artifacts are written only through it.

use crate::png::{write_png_gray, write_png_rgb};
use crate::{IoError, IoResult};
use morpholab_core::{Grid8, RgbGrid};
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// Writes named PNG artifacts into one directory
#[derive(Debug, Clone)]
pub struct ExportContext {
    output_dir: PathBuf,
}

impl ExportContext {
    /// Create the context, creating `output_dir` (and parents) if needed.
    pub fn new(output_dir: impl Into<PathBuf>) -> IoResult<Self> {
        let output_dir = output_dir.into();
        fs::create_dir_all(&output_dir)?;
        log::debug!("exporting to {}", output_dir.display());
        Ok(ExportContext { output_dir })
    }

    /// Directory receiving the files.
    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Path that `stem` will be written to.
    pub fn path_for(&self, stem: &str) -> PathBuf {
        self.output_dir.join(format!("{stem}.png"))
    }

    fn create(&self, stem: &str) -> IoResult<(PathBuf, BufWriter<File>)> {
        if stem.is_empty() || stem.contains(['/', '\\']) {
            return Err(IoError::InvalidData(format!(
                "invalid artifact name: {stem:?}"
            )));
        }
        let path = self.path_for(stem);
        let file = File::create(&path)?;
        Ok((path, BufWriter::new(file)))
    }

    /// Write a grayscale artifact, returning its path.
    pub fn save_gray(&self, stem: &str, grid: &Grid8) -> IoResult<PathBuf> {
        let (path, mut writer) = self.create(stem)?;
        write_png_gray(grid, &mut writer)?;
        writer.flush()?;
        log::debug!("wrote {}", path.display());
        Ok(path)
    }

    /// Write a color artifact, returning its path.
    pub fn save_rgb(&self, stem: &str, rgb: &RgbGrid) -> IoResult<PathBuf> {
        let (path, mut writer) = self.create(stem)?;
        write_png_rgb(rgb, &mut writer)?;
        writer.flush()?;
        log::debug!("wrote {}", path.display());
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::read_image;

    #[test]
    fn test_save_and_read_back() {
        let dir = tempfile::tempdir().unwrap();
        let ctx = ExportContext::new(dir.path().join("nested/out")).unwrap();
        assert!(ctx.output_dir().is_dir());

        let grid = Grid8::from_fn(4, 3, |x, y| (x * 60 + y) as u8).unwrap();
        let path = ctx.save_gray("sample_erosao", &grid).unwrap();
        assert_eq!(path, ctx.output_dir().join("sample_erosao.png"));

        let back = read_image(&path).unwrap();
        assert_eq!(back.get_rgb(2, 1), Some((121, 121, 121)));
    }

    #[test]
    fn test_save_rgb_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let ctx = ExportContext::new(dir.path()).unwrap();
        let a = RgbGrid::new_filled(2, 2, (1, 2, 3)).unwrap();
        let b = RgbGrid::new_filled(2, 2, (9, 8, 7)).unwrap();
        ctx.save_rgb("x", &a).unwrap();
        let path = ctx.save_rgb("x", &b).unwrap();
        assert_eq!(read_image(&path).unwrap(), b);
    }

    #[test]
    fn test_rejects_path_in_stem() {
        let dir = tempfile::tempdir().unwrap();
        let ctx = ExportContext::new(dir.path()).unwrap();
        let grid = Grid8::new_filled(1, 1, 0).unwrap();
        assert!(ctx.save_gray("../escape", &grid).is_err());
        assert!(ctx.save_gray("", &grid).is_err());
    }
}
