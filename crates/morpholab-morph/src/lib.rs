//! morpholab-morph - Grayscale morphology for morpholab
//!
//! This crate provides:
//!
//! - Structuring elements (rectangle, ellipse, cross) of odd size
//! - Grayscale erosion and dilation with an ignore-out-of-bounds border
//! - Opening, closing, gradient, top-hat and bottom-hat
//! - [`MorphSet`] for computing the five report results in one call

mod error;
pub mod grayscale;
pub mod ops;
pub mod sel;

pub use error::{MorphError, MorphResult};
pub use grayscale::{
    ExtremaMaps, bottom_hat_gray, close_gray, dilate_gray, erode_gray, extrema_gray,
    gradient_gray, open_gray, subtract_gray, top_hat_gray,
};
pub use ops::{MorphOp, MorphSet};
pub use sel::{ElementShape, StructuringElement, normalize_size};
