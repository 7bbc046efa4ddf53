//! Error types for morpholab-morph

use thiserror::Error;

/// Errors that can occur during morphological operations
#[derive(Debug, Error)]
pub enum MorphError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] morpholab_core::Error),

    /// Invalid structuring element (zero or even size, no member cells)
    #[error("invalid structuring element: {0}")]
    InvalidElement(String),

    /// Grid with a zero width or height reached the engine
    #[error("dimension mismatch: cannot process a {width}x{height} grid")]
    DimensionMismatch { width: u32, height: u32 },

    /// Element shape tag outside the supported set
    #[error("unsupported element shape: {0:?} (expected rect, ellipse or cross)")]
    UnsupportedShape(String),
}

/// Result type for morphological operations
pub type MorphResult<T> = Result<T, MorphError>;
