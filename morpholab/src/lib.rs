//! morpholab - Channel, histogram and gray morphology toolkit
//!
//! # Overview
//!
//! - Color grids split into blue, green and red channels
//! - 256-bin histograms and their line plot
//! - Gray morphology with rectangle, ellipse and cross elements
//! - PNG output, PNG/JPEG/BMP input
//! - A report runner that exports every intermediate for three images
//!
//! # Example
//!
//! ```
//! use morpholab::Grid8;
//! use morpholab::morph::{MorphSet, StructuringElement};
//!
//! let grid = Grid8::new_filled(16, 16, 100).unwrap();
//! let sel = StructuringElement::rectangle(3).unwrap();
//! let set = MorphSet::compute(&grid, &sel).unwrap();
//! assert_eq!(set.gradient.count_value(0), 256);
//! ```

// Core types are used everywhere
pub use morpholab_core::*;

pub use morpholab_io as io;
pub use morpholab_morph as morph;
pub use morpholab_report as report;
