//! morpholab-core - Basic data structures for morphological image processing
//!
//! This crate provides the fundamental data structures used throughout
//! morpholab:
//!
//! - [`Grid8`] / [`Grid8Mut`] - Single-channel 8-bit grid (immutable / mutable)
//! - [`RgbGrid`] / [`RgbGridMut`] - Three-channel color grid
//! - [`ChannelSet`] - Result of splitting a color grid into channels
//! - [`HistogramTable`] / [`ColorHistogram`] - 256-bin intensity histograms
//! - [`GrayWeights`] - Deterministic RGB to gray reduction

pub mod channel;
pub mod error;
pub mod grid;
pub mod histogram;

pub use channel::{ChannelSet, isolate_channel, isolated_views, split_channels};
pub use error::{Error, Result};
pub use grid::graphics::{Rgb, generate_line_points};
pub use grid::{Channel, GrayWeights, Grid8, Grid8Mut, RgbGrid, RgbGridMut};
pub use histogram::{ColorHistogram, HISTOGRAM_BINS, HistogramTable, render_histogram_plot};
