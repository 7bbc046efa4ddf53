//! Regression test parameters and operations

use crate::error::{TestError, TestResult};
use crate::{golden_dir, regout_dir};
use morpholab_core::Grid8;
use std::fs::{self, File};
use std::io::BufWriter;
use std::path::Path;

/// Regression test mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RegTestMode {
    /// Generate golden files
    Generate,
    /// Compare with golden files (default)
    #[default]
    Compare,
    /// Display mode - run without comparison
    Display,
}

impl RegTestMode {
    /// Parse mode from the `REGTEST_MODE` environment variable
    pub fn from_env() -> Self {
        Self::parse(&std::env::var("REGTEST_MODE").unwrap_or_default())
    }

    fn parse(value: &str) -> Self {
        match value.to_lowercase().as_str() {
            "generate" => Self::Generate,
            "display" => Self::Display,
            _ => Self::Compare,
        }
    }
}

/// Regression test parameters
///
/// Tracks the test name, the running check index, the mode and every
/// recorded failure.
pub struct RegParams {
    /// Name of the test (e.g., "graymorph")
    pub test_name: String,
    /// Current test index (incremented before each check)
    index: usize,
    /// Test mode (generate, compare, or display)
    pub mode: RegTestMode,
    /// Overall success status
    success: bool,
    /// Recorded failures
    failures: Vec<String>,
}

impl RegParams {
    /// Create new regression test parameters, with the mode taken from
    /// `REGTEST_MODE`.
    pub fn new(test_name: &str) -> Self {
        Self::with_mode(test_name, RegTestMode::from_env())
    }

    /// Create new regression test parameters in an explicit mode.
    pub fn with_mode(test_name: &str, mode: RegTestMode) -> Self {
        let _ = fs::create_dir_all(golden_dir());
        let _ = fs::create_dir_all(regout_dir());

        eprintln!();
        eprintln!("////////////////////////////////////////////////");
        eprintln!("////////////////   {}_reg   ///////////////", test_name);
        eprintln!("////////////////////////////////////////////////");
        eprintln!("Mode: {:?}", mode);

        Self {
            test_name: test_name.to_string(),
            index: 0,
            mode,
            success: true,
            failures: Vec::new(),
        }
    }

    /// Get the current test index
    pub fn index(&self) -> usize {
        self.index
    }

    /// Check if in display mode
    pub fn display(&self) -> bool {
        self.mode == RegTestMode::Display
    }

    fn record(&mut self, msg: String) {
        eprintln!("{}", msg);
        self.failures.push(msg);
        self.success = false;
    }

    /// Compare two floating-point values
    ///
    /// Returns `true` if `|expected - actual| <= delta`.
    pub fn compare_values(&mut self, expected: f64, actual: f64, delta: f64) -> bool {
        self.index += 1;
        let diff = (expected - actual).abs();

        if diff > delta {
            let err = TestError::ValueMismatch {
                index: self.index,
                expected,
                actual,
                delta,
            };
            self.record(format!("Failure in {}_reg: {}", self.test_name, err));
            false
        } else {
            true
        }
    }

    /// Compare two grids for exact equality
    ///
    /// Reports the first differing pixel on failure.
    pub fn compare_grids(&mut self, grid1: &Grid8, grid2: &Grid8) -> bool {
        self.index += 1;

        if !grid1.sizes_equal(grid2) {
            let msg = format!(
                "Failure in {}_reg: {} - dimension mismatch {:?} vs {:?}",
                self.test_name,
                TestError::GridMismatch { index: self.index },
                grid1.dimensions(),
                grid2.dimensions()
            );
            self.record(msg);
            return false;
        }

        let width = grid1.width() as usize;
        if let Some(i) = grid1
            .data()
            .iter()
            .zip(grid2.data())
            .position(|(a, b)| a != b)
        {
            let msg = format!(
                "Failure in {}_reg: {} - pixel mismatch at ({}, {})",
                self.test_name,
                TestError::GridMismatch { index: self.index },
                i % width,
                i / width
            );
            self.record(msg);
            return false;
        }

        true
    }

    /// Write a grid as PNG to the regout directory and check it against
    /// the golden file.
    pub fn write_grid_and_check(&mut self, grid: &Grid8) -> TestResult<()> {
        self.index += 1;

        let local_path = format!("{}/{}.{:02}.png", regout_dir(), self.test_name, self.index);
        let file = File::create(&local_path)?;
        morpholab_io::write_png_gray(grid, BufWriter::new(file)).map_err(|e| {
            TestError::ImageWrite {
                path: local_path.clone(),
                message: e.to_string(),
            }
        })?;

        self.check_file(&local_path)
    }

    /// Check a file against its golden counterpart
    ///
    /// In generate mode, copies the file to golden.
    /// In compare mode, compares with the golden file; a missing golden
    /// file is noted and skipped.
    /// In display mode, does nothing.
    fn check_file(&mut self, local_path: &str) -> TestResult<()> {
        let ext = Path::new(local_path)
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("");

        let golden_path = format!(
            "{}/{}_golden.{:02}.{}",
            golden_dir(),
            self.test_name,
            self.index,
            ext
        );

        match self.mode {
            RegTestMode::Generate => {
                fs::copy(local_path, &golden_path)?;
                eprintln!("Generated: {}", golden_path);
            }
            RegTestMode::Compare => {
                if !Path::new(&golden_path).exists() {
                    eprintln!(
                        "Note in {}_reg: no golden file {}, skipping index {}",
                        self.test_name, golden_path, self.index
                    );
                    return Ok(());
                }

                let local_data = fs::read(local_path)?;
                let golden_data = fs::read(&golden_path)?;

                if local_data != golden_data && !self.compare_image_files(local_path, &golden_path)
                {
                    let msg = format!(
                        "Failure in {}_reg, index {}: comparing {} with {}",
                        self.test_name, self.index, local_path, golden_path
                    );
                    self.record(msg);
                }
            }
            RegTestMode::Display => {}
        }

        Ok(())
    }

    /// Compare two image files pixel-by-pixel
    fn compare_image_files(&self, path1: &str, path2: &str) -> bool {
        match (
            morpholab_io::read_image(path1),
            morpholab_io::read_image(path2),
        ) {
            (Ok(a), Ok(b)) => a == b,
            _ => false,
        }
    }

    /// Write raw data to file and check against golden file
    pub fn write_data_and_check(&mut self, data: &[u8], ext: &str) -> TestResult<()> {
        self.index += 1;

        let local_path = format!(
            "{}/{}.{:02}.{}",
            regout_dir(),
            self.test_name,
            self.index,
            ext
        );

        fs::write(&local_path, data)?;
        self.check_file(&local_path)
    }

    /// Clean up and report results
    ///
    /// Returns `true` if all checks passed.
    pub fn cleanup(self) -> bool {
        if self.success {
            eprintln!("SUCCESS: {}_reg", self.test_name);
        } else {
            eprintln!("FAILURE: {}_reg", self.test_name);
            for failure in &self.failures {
                eprintln!("  {}", failure);
            }
        }
        eprintln!();

        self.success
    }

    /// Check if all tests have passed so far
    pub fn is_success(&self) -> bool {
        self.success
    }

    /// Get list of failures
    pub fn failures(&self) -> &[String] {
        &self.failures
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_parse() {
        assert_eq!(RegTestMode::parse(""), RegTestMode::Compare);
        assert_eq!(RegTestMode::parse("GENERATE"), RegTestMode::Generate);
        assert_eq!(RegTestMode::parse("display"), RegTestMode::Display);
        assert_eq!(RegTestMode::parse("bogus"), RegTestMode::Compare);
    }

    #[test]
    fn test_compare_values() {
        let mut rp = RegParams::with_mode("params_values", RegTestMode::Display);
        assert!(rp.compare_values(1.0, 1.05, 0.1));
        assert!(!rp.compare_values(1.0, 2.0, 0.5));
        assert_eq!(rp.index(), 2);
        assert_eq!(rp.failures().len(), 1);
        assert!(!rp.cleanup());
    }

    #[test]
    fn test_compare_grids() {
        let mut rp = RegParams::with_mode("params_grids", RegTestMode::Display);
        let a = Grid8::new_filled(4, 4, 10).unwrap();
        let mut bm = a.to_mut();
        assert!(rp.compare_grids(&a, &a.clone()));

        bm.set_pixel(3, 2, 11).unwrap();
        let b: Grid8 = bm.into();
        assert!(!rp.compare_grids(&a, &b));
        assert!(rp.failures()[0].contains("(3, 2)"));

        let c = Grid8::new_filled(4, 5, 10).unwrap();
        assert!(!rp.compare_grids(&a, &c));
        assert!(!rp.is_success());
    }

    #[test]
    fn test_write_grid_display_mode() {
        let mut rp = RegParams::with_mode("params_write", RegTestMode::Display);
        let grid = Grid8::new_filled(3, 3, 99).unwrap();
        rp.write_grid_and_check(&grid).unwrap();
        let path = format!("{}/params_write.01.png", regout_dir());
        assert!(Path::new(&path).exists());
        assert!(rp.cleanup());
    }
}
