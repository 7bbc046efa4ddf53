//! Three-channel RGB grids
//!
//! Functions for extracting and composing individual color channels.

use super::{Grid8, Grid8Mut, GridData, check_dimensions};
use crate::error::{Error, Result};
use std::fmt;
use std::sync::Arc;

/// Color channel selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Channel {
    /// Red (sample 0)
    Red,
    /// Green (sample 1)
    Green,
    /// Blue (sample 2)
    Blue,
}

impl Channel {
    /// All channels in storage order.
    pub const RGB: [Channel; 3] = [Channel::Red, Channel::Green, Channel::Blue];

    /// Blue-green-red order, the layout of the reference image exports.
    pub const BGR: [Channel; 3] = [Channel::Blue, Channel::Green, Channel::Red];

    /// Sample offset within a pixel.
    #[inline]
    pub fn offset(self) -> usize {
        match self {
            Channel::Red => 0,
            Channel::Green => 1,
            Channel::Blue => 2,
        }
    }

    /// One-letter tag used in file names (`R`, `G`, `B`).
    pub fn letter(self) -> &'static str {
        match self {
            Channel::Red => "R",
            Channel::Green => "G",
            Channel::Blue => "B",
        }
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.letter())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct RgbData {
    width: u32,
    height: u32,
    /// Interleaved R, G, B samples
    data: Vec<u8>,
}

impl RgbData {
    #[inline]
    fn index(&self, x: u32, y: u32) -> usize {
        (y as usize * self.width as usize + x as usize) * 3
    }
}

/// Immutable 3-channel grid with interleaved R, G, B samples.
///
/// All three channels share one width and height by construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RgbGrid {
    inner: Arc<RgbData>,
}

impl RgbGrid {
    /// Create a grid filled with one color.
    pub fn new_filled(width: u32, height: u32, rgb: (u8, u8, u8)) -> Result<Self> {
        Ok(RgbGridMut::new_filled(width, height, rgb)?.into())
    }

    /// Create a black grid.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        Self::new_filled(width, height, (0, 0, 0))
    }

    /// Build from interleaved R, G, B samples.
    pub fn from_interleaved(width: u32, height: u32, data: Vec<u8>) -> Result<Self> {
        check_dimensions(width, height)?;
        let expected = width as usize * height as usize * 3;
        if data.len() != expected {
            return Err(Error::BufferLength {
                expected,
                actual: data.len(),
            });
        }
        Ok(RgbGrid {
            inner: Arc::new(RgbData {
                width,
                height,
                data,
            }),
        })
    }

    /// Compose a color grid from three single-channel grids.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DimensionMismatch`] if the green or blue grid does
    /// not match the red grid's size.
    pub fn from_channels(red: &Grid8, green: &Grid8, blue: &Grid8) -> Result<Self> {
        for other in [green, blue] {
            if !red.sizes_equal(other) {
                return Err(Error::DimensionMismatch {
                    expected: red.dimensions(),
                    actual: other.dimensions(),
                });
            }
        }
        let data = red
            .data()
            .iter()
            .zip(green.data())
            .zip(blue.data())
            .flat_map(|((&r, &g), &b)| [r, g, b])
            .collect();
        Self::from_interleaved(red.width(), red.height(), data)
    }

    /// Get the width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.inner.width
    }

    /// Get the height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.inner.height
    }

    /// Get `(width, height)`.
    #[inline]
    pub fn dimensions(&self) -> (u32, u32) {
        (self.inner.width, self.inner.height)
    }

    /// Raw interleaved samples.
    #[inline]
    pub fn data(&self) -> &[u8] {
        &self.inner.data
    }

    /// Get the `(r, g, b)` triple at a pixel, or `None` outside the grid.
    pub fn get_rgb(&self, x: u32, y: u32) -> Option<(u8, u8, u8)> {
        if x >= self.inner.width || y >= self.inner.height {
            return None;
        }
        let i = self.inner.index(x, y);
        let d = &self.inner.data;
        Some((d[i], d[i + 1], d[i + 2]))
    }

    /// Extract one channel as a single-channel grid.
    pub fn channel(&self, channel: Channel) -> Grid8 {
        let offset = channel.offset();
        Grid8Mut {
            inner: GridData {
                width: self.inner.width,
                height: self.inner.height,
                data: self
                    .inner
                    .data
                    .chunks_exact(3)
                    .map(|px| px[offset])
                    .collect(),
            },
        }
        .into()
    }

    /// Create an independent mutable copy.
    pub fn to_mut(&self) -> RgbGridMut {
        RgbGridMut {
            inner: (*self.inner).clone(),
        }
    }
}

/// Mutable 3-channel grid
#[derive(Debug)]
pub struct RgbGridMut {
    inner: RgbData,
}

impl RgbGridMut {
    /// Create a mutable grid filled with one color.
    pub fn new_filled(width: u32, height: u32, rgb: (u8, u8, u8)) -> Result<Self> {
        check_dimensions(width, height)?;
        let n = width as usize * height as usize;
        let mut data = Vec::with_capacity(n * 3);
        for _ in 0..n {
            data.extend_from_slice(&[rgb.0, rgb.1, rgb.2]);
        }
        Ok(RgbGridMut {
            inner: RgbData {
                width,
                height,
                data,
            },
        })
    }

    /// Get the width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.inner.width
    }

    /// Get the height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.inner.height
    }

    /// Get the `(r, g, b)` triple at a pixel.
    pub fn get_rgb(&self, x: u32, y: u32) -> Option<(u8, u8, u8)> {
        if x >= self.inner.width || y >= self.inner.height {
            return None;
        }
        let i = self.inner.index(x, y);
        let d = &self.inner.data;
        Some((d[i], d[i + 1], d[i + 2]))
    }

    /// Set the color at a pixel.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfBounds`] outside the grid.
    pub fn set_rgb(&mut self, x: u32, y: u32, rgb: (u8, u8, u8)) -> Result<()> {
        if x >= self.inner.width || y >= self.inner.height {
            return Err(Error::OutOfBounds {
                x,
                y,
                width: self.inner.width,
                height: self.inner.height,
            });
        }
        self.set_rgb_unchecked(x, y, rgb);
        Ok(())
    }

    /// Set the color at a pixel, panicking outside the grid.
    #[inline]
    pub fn set_rgb_unchecked(&mut self, x: u32, y: u32, rgb: (u8, u8, u8)) {
        let i = self.inner.index(x, y);
        self.inner.data[i..i + 3].copy_from_slice(&[rgb.0, rgb.1, rgb.2]);
    }

    /// Set every pixel to one color.
    pub fn fill(&mut self, rgb: (u8, u8, u8)) {
        for px in self.inner.data.chunks_exact_mut(3) {
            px.copy_from_slice(&[rgb.0, rgb.1, rgb.2]);
        }
    }

    /// Mutable raw interleaved samples.
    #[inline]
    pub fn data_mut(&mut self) -> &mut [u8] {
        &mut self.inner.data
    }
}

impl From<RgbGridMut> for RgbGrid {
    fn from(grid: RgbGridMut) -> Self {
        RgbGrid {
            inner: Arc::new(grid.inner),
        }
    }
}
