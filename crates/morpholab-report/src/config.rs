//! Report configuration

use crate::{ReportError, ReportResult};
use morpholab_core::GrayWeights;
use morpholab_morph::ElementShape;
use std::path::{Component, Path, PathBuf};

/// Default synthetic image width
pub const DEFAULT_WIDTH: u32 = 800;
/// Default synthetic image height
pub const DEFAULT_HEIGHT: u32 = 600;
/// Default structuring element size
pub const DEFAULT_KERNEL_SIZE: u32 = 5;
/// Default seed for the document noise
pub const DEFAULT_SEED: u64 = 42;

/// Parameters of one report run
#[derive(Debug, Clone)]
pub struct ReportConfig {
    /// Width of synthesized images
    pub width: u32,
    /// Height of synthesized images
    pub height: u32,
    /// Requested element size; an even value is raised to the next odd one
    pub kernel_size: u32,
    /// Element shape
    pub element: ElementShape,
    /// Directory searched for `pessoa.*`, `objeto.*`, `documento.*`
    pub input_dir: PathBuf,
    /// Directory receiving every artifact
    pub output_dir: PathBuf,
    /// RGB to gray reduction applied before morphology
    pub gray_weights: GrayWeights,
    /// Seed of the additive document noise
    pub seed: u64,
}

impl Default for ReportConfig {
    fn default() -> Self {
        ReportConfig {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            kernel_size: DEFAULT_KERNEL_SIZE,
            element: ElementShape::Rectangle,
            input_dir: PathBuf::from("input"),
            output_dir: PathBuf::from("output"),
            gray_weights: GrayWeights::LUMINANCE,
            seed: DEFAULT_SEED,
        }
    }
}

impl ReportConfig {
    /// Reject values that cannot produce a report.
    ///
    /// The kernel size itself is checked when the element is built.
    pub fn validate(&self) -> ReportResult<()> {
        if self.width == 0 || self.height == 0 {
            return Err(ReportError::InvalidConfig(format!(
                "image size must be positive, got {}x{}",
                self.width, self.height
            )));
        }
        if same_directory(&self.input_dir, &self.output_dir) {
            return Err(ReportError::InvalidConfig(format!(
                "input and output directory are the same: {}",
                self.output_dir.display()
            )));
        }
        Ok(())
    }
}

/// Lexical form of `path`: absolute, without `.` and with `..` applied.
fn normalize_path(path: &Path) -> PathBuf {
    let absolute = if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir()
            .map(|cwd| cwd.join(path))
            .unwrap_or_else(|_| path.to_path_buf())
    };
    let mut out = PathBuf::new();
    for component in absolute.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                out.pop();
            }
            other => out.push(other),
        }
    }
    out
}

/// Whether two directory paths name the same directory.
///
/// Existing directories are compared after resolving symlinks.
fn same_directory(a: &Path, b: &Path) -> bool {
    match (a.canonicalize(), b.canonicalize()) {
        (Ok(a), Ok(b)) => a == b,
        _ => normalize_path(a) == normalize_path(b),
    }
}
