//! Error types for morpholab-report

use thiserror::Error;

/// Errors that abort a report run
#[derive(Debug, Error)]
pub enum ReportError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] morpholab_core::Error),

    /// Morphology error (invalid element, degenerate grid)
    #[error("morphology error: {0}")]
    Morph(#[from] morpholab_morph::MorphError),

    /// Reading or writing an image failed
    #[error("image I/O error: {0}")]
    Io(#[from] morpholab_io::IoError),

    /// Configuration values that cannot produce a report
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Result type for report operations
pub type ReportResult<T> = Result<T, ReportError>;
