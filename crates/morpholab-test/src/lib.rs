//! morpholab-test - Regression test framework for morpholab
//!
//! Supports three modes, selected by the `REGTEST_MODE` environment
//! variable:
//!
//! - **Generate**: Create golden files for comparison
//! - **Compare**: Compare results with golden files (default)
//! - **Display**: Run tests without comparison (visual inspection)
//!
//! # Usage
//!
//! ```ignore
//! use morpholab_test::RegParams;
//!
//! let mut rp = RegParams::new("graymorph");
//! rp.compare_values(13.0, sel.member_count() as f64, 0.0);
//! assert!(rp.cleanup());
//! ```

mod error;
mod params;

pub use error::{TestError, TestResult};
pub use params::{RegParams, RegTestMode};

use morpholab_core::Grid8;

/// Get the path to the workspace root
fn workspace_root() -> String {
    let manifest_dir = env!("CARGO_MANIFEST_DIR");
    // morpholab-test is at crates/morpholab-test, so go up two directories
    format!("{}/../..", manifest_dir)
}

/// Get the path to the golden files directory
pub fn golden_dir() -> String {
    format!("{}/tests/golden", workspace_root())
}

/// Get the path to the regout (regression output) directory
pub fn regout_dir() -> String {
    format!("{}/tests/regout", workspace_root())
}

/// Deterministic 8-bit test image
///
/// A smooth diagonal ramp with a bright square, a dark disk and a sparse
/// lattice of isolated bright and dark pixels, so that every morphological
/// operation changes something.
pub fn test_pattern(width: u32, height: u32) -> Grid8 {
    let (w, h) = (width.max(1), height.max(1));
    let (cx, cy) = (w as i64 * 2 / 3, h as i64 / 2);
    let r = (w.min(h) / 6) as i64;
    Grid8::from_fn(w, h, |x, y| {
        let (xi, yi) = (x as i64, y as i64);
        if x % 11 == 5 && y % 13 == 6 {
            return 255;
        }
        if x % 17 == 3 && y % 7 == 2 {
            return 0;
        }
        if x >= w / 8 && x < w / 8 + w / 5 && y >= h / 6 && y < h / 6 + h / 4 {
            return 220;
        }
        if (xi - cx).pow(2) + (yi - cy).pow(2) <= r * r {
            return 30;
        }
        (60 + (x * 90 / w) + (y * 60 / h)) as u8
    })
    .expect("test pattern dimensions are non-zero")
}
