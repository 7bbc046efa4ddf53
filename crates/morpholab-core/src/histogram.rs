//! Intensity histograms
//!
//! Counts the occurrence of each of the 256 possible sample values in a
//! [`Grid8`]. Counting is commutative, so the table does not depend on
//! traversal order.

use crate::error::{Error, Result};
use crate::grid::graphics::Rgb;
use crate::grid::{Channel, Grid8, RgbGrid, RgbGridMut};

/// Number of bins, one per 8-bit level
pub const HISTOGRAM_BINS: usize = 256;

/// 256-bin frequency table of one single-channel grid
///
/// `sum(counts) == width * height` of the source grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistogramTable {
    counts: [u64; HISTOGRAM_BINS],
}

impl HistogramTable {
    /// Count every sample of `grid`.
    ///
    /// # Example
    ///
    /// ```
    /// use morpholab_core::{Grid8, HistogramTable};
    ///
    /// let grid = Grid8::new_filled(10, 10, 42).unwrap();
    /// let hist = HistogramTable::from_grid(&grid);
    /// assert_eq!(hist.get(42), 100);
    /// assert_eq!(hist.total(), 100);
    /// ```
    pub fn from_grid(grid: &Grid8) -> Self {
        let mut counts = [0u64; HISTOGRAM_BINS];
        for &v in grid.data() {
            counts[v as usize] += 1;
        }
        HistogramTable { counts }
    }

    /// Build from precomputed counts.
    pub fn from_counts(counts: [u64; HISTOGRAM_BINS]) -> Self {
        HistogramTable { counts }
    }

    /// All 256 counts, indexed by level.
    #[inline]
    pub fn counts(&self) -> &[u64; HISTOGRAM_BINS] {
        &self.counts
    }

    /// Count for one level.
    #[inline]
    pub fn get(&self, level: u8) -> u64 {
        self.counts[level as usize]
    }

    /// Sum of all counts.
    pub fn total(&self) -> u64 {
        self.counts.iter().sum()
    }

    /// Largest single-bin count.
    pub fn max_count(&self) -> u64 {
        self.counts.iter().copied().max().unwrap_or(0)
    }

    /// Most frequent level; the lowest one wins ties.
    pub fn mode(&self) -> u8 {
        let max = self.max_count();
        self.counts
            .iter()
            .position(|&c| c == max)
            .map_or(0, |i| i as u8)
    }

    /// Mean level, or `None` for an empty table.
    pub fn mean(&self) -> Option<f64> {
        let total = self.total();
        if total == 0 {
            return None;
        }
        let weighted: f64 = self
            .counts
            .iter()
            .enumerate()
            .map(|(level, &c)| level as f64 * c as f64)
            .sum();
        Some(weighted / total as f64)
    }
}

/// RGB channel histograms
///
/// Contains separate 256-bin tables for red, green, and blue channels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorHistogram {
    /// Red channel histogram
    pub red: HistogramTable,
    /// Green channel histogram
    pub green: HistogramTable,
    /// Blue channel histogram
    pub blue: HistogramTable,
}

impl ColorHistogram {
    /// Count every sample of each channel.
    pub fn from_rgb(rgb: &RgbGrid) -> Self {
        let mut red = [0u64; HISTOGRAM_BINS];
        let mut green = [0u64; HISTOGRAM_BINS];
        let mut blue = [0u64; HISTOGRAM_BINS];
        for px in rgb.data().chunks_exact(3) {
            red[px[0] as usize] += 1;
            green[px[1] as usize] += 1;
            blue[px[2] as usize] += 1;
        }
        ColorHistogram {
            red: HistogramTable::from_counts(red),
            green: HistogramTable::from_counts(green),
            blue: HistogramTable::from_counts(blue),
        }
    }

    /// Table for one channel.
    pub fn channel(&self, channel: Channel) -> &HistogramTable {
        match channel {
            Channel::Red => &self.red,
            Channel::Green => &self.green,
            Channel::Blue => &self.blue,
        }
    }
}

/// Draw histogram curves on a white 256-column canvas.
///
/// Each `(table, color)` becomes one polyline; the largest count among
/// all tables maps to the top row.
///
/// # Errors
///
/// Returns [`Error::InvalidParameter`] when `height` is 0 or no tables are
/// given.
pub fn render_histogram_plot(series: &[(&HistogramTable, Rgb)], height: u32) -> Result<RgbGrid> {
    if height == 0 {
        return Err(Error::InvalidParameter("plot height must be > 0".into()));
    }
    if series.is_empty() {
        return Err(Error::InvalidParameter("no histograms to plot".into()));
    }

    let peak = series
        .iter()
        .map(|(t, _)| t.max_count())
        .max()
        .unwrap_or(0)
        .max(1);
    let bottom = height as i32 - 1;
    let scale = |count: u64| bottom - ((count as f64 / peak as f64) * bottom as f64).round() as i32;

    let mut canvas = RgbGridMut::new_filled(HISTOGRAM_BINS as u32, height, (255, 255, 255))?;
    for (table, color) in series {
        let counts = table.counts();
        for level in 1..HISTOGRAM_BINS {
            let (x0, x1) = (level as i32 - 1, level as i32);
            canvas.draw_line(
                x0,
                scale(counts[level - 1]),
                x1,
                scale(counts[level]),
                1,
                *color,
            );
        }
    }
    Ok(canvas.into())
}
