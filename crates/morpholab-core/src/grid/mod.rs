//! Grid8 - single-channel 8-bit pixel grid
//!
//! `Grid8` is the fundamental data structure handed to the morphology
//! engine and the histogram builder.
//!
//! # Layout
//!
//! - Samples are stored row-major, one byte per pixel
//! - `width > 0` and `height > 0` always hold
//!
//! # Ownership model
//!
//! `Grid8` uses `Arc` for cheap cloning (shared ownership) and is never
//! modified once built. To produce new content, start from a
//! [`Grid8Mut`] ([`Grid8::to_mut`], [`Grid8::try_into_mut`] or
//! [`Grid8Mut::new`]) and convert it back with `Into<Grid8>`.

mod convert;
pub mod graphics;
mod rgb;

pub use convert::GrayWeights;
pub use rgb::{Channel, RgbGrid, RgbGridMut};

use crate::error::{Error, Result};
use std::sync::Arc;

/// Internal grid storage
#[derive(Debug, Clone, PartialEq, Eq)]
struct GridData {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl GridData {
    fn filled(width: u32, height: u32, value: u8) -> Result<Self> {
        check_dimensions(width, height)?;
        Ok(GridData {
            width,
            height,
            data: vec![value; width as usize * height as usize],
        })
    }

    #[inline]
    fn index(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }
}

/// Reject zero-area grids.
pub(crate) fn check_dimensions(width: u32, height: u32) -> Result<()> {
    if width == 0 || height == 0 {
        return Err(Error::InvalidDimension { width, height });
    }
    Ok(())
}

/// Single-channel 8-bit grid
///
/// # Examples
///
/// ```
/// use morpholab_core::Grid8;
///
/// let grid = Grid8::new_filled(5, 4, 100).unwrap();
/// assert_eq!(grid.width(), 5);
/// assert_eq!(grid.height(), 4);
/// assert_eq!(grid.get_pixel(2, 2), Some(100));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid8 {
    inner: Arc<GridData>,
}

impl Grid8 {
    /// Create a zero-filled grid.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if width or height is 0.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        Self::new_filled(width, height, 0)
    }

    /// Create a grid with every sample set to `value`.
    pub fn new_filled(width: u32, height: u32, value: u8) -> Result<Self> {
        Ok(Grid8 {
            inner: Arc::new(GridData::filled(width, height, value)?),
        })
    }

    /// Build a grid from a row-major sample buffer.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] for a zero dimension and
    /// [`Error::BufferLength`] when `data.len() != width * height`.
    pub fn from_vec(width: u32, height: u32, data: Vec<u8>) -> Result<Self> {
        check_dimensions(width, height)?;
        let expected = width as usize * height as usize;
        if data.len() != expected {
            return Err(Error::BufferLength {
                expected,
                actual: data.len(),
            });
        }
        Ok(Grid8 {
            inner: Arc::new(GridData {
                width,
                height,
                data,
            }),
        })
    }

    /// Build a grid by evaluating `f(x, y)` at every pixel.
    pub fn from_fn(width: u32, height: u32, mut f: impl FnMut(u32, u32) -> u8) -> Result<Self> {
        let mut grid = Grid8Mut::new(width, height)?;
        for y in 0..height {
            for x in 0..width {
                grid.set_pixel_unchecked(x, y, f(x, y));
            }
        }
        Ok(grid.into())
    }

    /// Get the grid width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.inner.width
    }

    /// Get the grid height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.inner.height
    }

    /// Get `(width, height)`.
    #[inline]
    pub fn dimensions(&self) -> (u32, u32) {
        (self.inner.width, self.inner.height)
    }

    /// Total number of pixels.
    #[inline]
    pub fn pixel_count(&self) -> usize {
        self.inner.data.len()
    }

    /// Raw row-major samples.
    #[inline]
    pub fn data(&self) -> &[u8] {
        &self.inner.data
    }

    /// Samples of row `y`.
    ///
    /// # Panics
    ///
    /// Panics if `y >= height`.
    #[inline]
    pub fn row(&self, y: u32) -> &[u8] {
        let start = self.inner.index(0, y);
        &self.inner.data[start..start + self.inner.width as usize]
    }

    /// Get a sample, or `None` outside the grid.
    #[inline]
    pub fn get_pixel(&self, x: u32, y: u32) -> Option<u8> {
        if x >= self.inner.width || y >= self.inner.height {
            return None;
        }
        Some(self.inner.data[self.inner.index(x, y)])
    }

    /// Get a sample without the `Option` wrapper.
    ///
    /// # Panics
    ///
    /// Panics (index out of range) when `(x, y)` is outside the grid.
    #[inline]
    pub fn pixel(&self, x: u32, y: u32) -> u8 {
        self.inner.data[self.inner.index(x, y)]
    }

    /// Check if two grids have the same width and height.
    pub fn sizes_equal(&self, other: &Grid8) -> bool {
        self.dimensions() == other.dimensions()
    }

    /// Number of samples equal to `value`.
    pub fn count_value(&self, value: u8) -> usize {
        self.inner.data.iter().filter(|&&v| v == value).count()
    }

    /// Photometric inverse (`255 - v`).
    pub fn invert(&self) -> Grid8 {
        let data = self.inner.data.iter().map(|&v| 255 - v).collect();
        Grid8 {
            inner: Arc::new(GridData {
                width: self.inner.width,
                height: self.inner.height,
                data,
            }),
        }
    }

    /// Get the number of strong references to the shared samples.
    #[inline]
    pub fn ref_count(&self) -> usize {
        Arc::strong_count(&self.inner)
    }

    /// Try to take mutable ownership of the samples.
    ///
    /// Succeeds only if this is the sole reference.
    pub fn try_into_mut(self) -> std::result::Result<Grid8Mut, Self> {
        match Arc::try_unwrap(self.inner) {
            Ok(data) => Ok(Grid8Mut { inner: data }),
            Err(arc) => Err(Grid8 { inner: arc }),
        }
    }

    /// Create an independent mutable copy.
    pub fn to_mut(&self) -> Grid8Mut {
        Grid8Mut {
            inner: (*self.inner).clone(),
        }
    }
}

/// Mutable single-channel grid
///
/// Convert back to an immutable [`Grid8`] using `Into<Grid8>`.
#[derive(Debug)]
pub struct Grid8Mut {
    inner: GridData,
}

impl Grid8Mut {
    /// Create a zero-filled mutable grid.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        Ok(Grid8Mut {
            inner: GridData::filled(width, height, 0)?,
        })
    }

    /// Get the grid width.
    #[inline]
    pub fn width(&self) -> u32 {
        self.inner.width
    }

    /// Get the grid height.
    #[inline]
    pub fn height(&self) -> u32 {
        self.inner.height
    }

    /// Get a sample, or `None` outside the grid.
    #[inline]
    pub fn get_pixel(&self, x: u32, y: u32) -> Option<u8> {
        if x >= self.inner.width || y >= self.inner.height {
            return None;
        }
        Some(self.inner.data[self.inner.index(x, y)])
    }

    /// Set a sample.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfBounds`] outside the grid.
    pub fn set_pixel(&mut self, x: u32, y: u32, value: u8) -> Result<()> {
        if x >= self.inner.width || y >= self.inner.height {
            return Err(Error::OutOfBounds {
                x,
                y,
                width: self.inner.width,
                height: self.inner.height,
            });
        }
        self.set_pixel_unchecked(x, y, value);
        Ok(())
    }

    /// Set a sample, panicking outside the grid.
    #[inline]
    pub fn set_pixel_unchecked(&mut self, x: u32, y: u32, value: u8) {
        let idx = self.inner.index(x, y);
        self.inner.data[idx] = value;
    }

    /// Set every sample to `value`.
    pub fn fill(&mut self, value: u8) {
        self.inner.data.fill(value);
    }

    /// Mutable samples of row `y`.
    #[inline]
    pub fn row_mut(&mut self, y: u32) -> &mut [u8] {
        let start = self.inner.index(0, y);
        let width = self.inner.width as usize;
        &mut self.inner.data[start..start + width]
    }

    /// Mutable raw samples.
    #[inline]
    pub fn data_mut(&mut self) -> &mut [u8] {
        &mut self.inner.data
    }
}

impl From<Grid8Mut> for Grid8 {
    fn from(grid: Grid8Mut) -> Self {
        Grid8 {
            inner: Arc::new(grid.inner),
        }
    }
}
