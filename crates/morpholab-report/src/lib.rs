//! morpholab-report - Channel, histogram and morphology report
//!
//! Drives the end-to-end run behind the `morpholab` binary:
//!
//! - [`ReportConfig`] - image size, element, directories, gray weights
//! - [`load_or_generate`] - input photograph or synthetic stand-in
//! - [`process_image`] - channel views, histogram plot, morphology results
//! - [`run`] - all three images in parallel, returning a [`ReportSummary`]

pub mod config;
mod error;
pub mod pipeline;
pub mod synth;

pub use config::ReportConfig;
pub use error::{ReportError, ReportResult};
pub use pipeline::{
    ImageArtifacts, ImageKind, ImageMetadata, ImageSource, ReportSummary, load_or_generate,
    process_image, run,
};
