//! Grayscale morphological operations
//!
//! Implements erosion, dilation, and the operations derived from them for
//! single-channel [`Grid8`] grids and an arbitrary [`StructuringElement`].
//!
//! # Algorithm
//!
//! - **Erosion**: minimum sample value over the element's member offsets
//! - **Dilation**: maximum sample value over the element's member offsets
//! - **Opening**: erosion followed by dilation (removes small bright features)
//! - **Closing**: dilation followed by erosion (fills small dark features)
//! - **Gradient**: dilation minus erosion
//!
//! # Border policy
//!
//! Offsets whose translated coordinate falls outside the grid are ignored:
//! they neither lower an erosion nor raise a dilation. This is equivalent to
//! padding with 255 for erosion and with 0 for dilation. Because the origin
//! is always a member, at least one sample contributes at every pixel, so
//! `erode(I) <= I <= dilate(I)` holds everywhere including the border.
//!
//! Rectangle elements are separable: the clipped 2D window is the product
//! of a clipped row window and a clipped column window, so a row pass then
//! a column pass gives exactly the direct result in `O(W*H*size)`.

use crate::sel::{ElementShape, StructuringElement};
use crate::{MorphError, MorphResult};
use morpholab_core::{Grid8, Grid8Mut};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Extremum {
    Min,
    Max,
}

impl Extremum {
    #[inline]
    fn identity(self) -> u8 {
        match self {
            Extremum::Min => u8::MAX,
            Extremum::Max => u8::MIN,
        }
    }

    #[inline]
    fn combine(self, a: u8, b: u8) -> u8 {
        match self {
            Extremum::Min => a.min(b),
            Extremum::Max => a.max(b),
        }
    }
}

/// Per-pixel minimum and maximum over the element neighborhood
///
/// `min` is the erosion and `max` the dilation of the source grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtremaMaps {
    /// Neighborhood minimum (erosion)
    pub min: Grid8,
    /// Neighborhood maximum (dilation)
    pub max: Grid8,
}

fn check_inputs(grid: &Grid8, sel: &StructuringElement) -> MorphResult<()> {
    let (width, height) = grid.dimensions();
    if width == 0 || height == 0 {
        return Err(MorphError::DimensionMismatch { width, height });
    }
    if sel.member_count() == 0 {
        return Err(MorphError::InvalidElement(
            "structuring element has no member cells".to_string(),
        ));
    }
    Ok(())
}

fn filter_direct(grid: &Grid8, sel: &StructuringElement, ext: Extremum) -> MorphResult<Grid8> {
    let (w, h) = grid.dimensions();
    let (wi, hi) = (w as i32, h as i32);
    let offsets = sel.offsets();
    let src = grid.data();

    let mut out = Grid8Mut::new(w, h)?;
    let dst = out.data_mut();
    for y in 0..hi {
        for x in 0..wi {
            let mut acc = ext.identity();
            for &(dx, dy) in offsets {
                let (sx, sy) = (x + dx, y + dy);
                if sx >= 0 && sy >= 0 && sx < wi && sy < hi {
                    acc = ext.combine(acc, src[(sy * wi + sx) as usize]);
                }
            }
            dst[(y * wi + x) as usize] = acc;
        }
    }
    Ok(out.into())
}

/// Clipped running extremum along one axis of a row-major buffer.
///
/// `len` samples spaced `stride` apart starting at `start`.
fn run_1d(src: &[u8], dst: &mut [u8], start: usize, stride: usize, len: usize, r: usize, ext: Extremum) {
    for i in 0..len {
        let lo = i.saturating_sub(r);
        let hi = (i + r).min(len - 1);
        let mut acc = ext.identity();
        for j in lo..=hi {
            acc = ext.combine(acc, src[start + j * stride]);
        }
        dst[start + i * stride] = acc;
    }
}

fn filter_separable(grid: &Grid8, radius: u32, ext: Extremum) -> MorphResult<Grid8> {
    let (w, h) = grid.dimensions();
    let (wu, hu) = (w as usize, h as usize);
    let r = radius as usize;

    let mut rows = vec![0u8; wu * hu];
    for y in 0..hu {
        run_1d(grid.data(), &mut rows, y * wu, 1, wu, r, ext);
    }

    let mut out = Grid8Mut::new(w, h)?;
    let dst = out.data_mut();
    for x in 0..wu {
        run_1d(&rows, dst, x, wu, hu, r, ext);
    }
    Ok(out.into())
}

fn filter(grid: &Grid8, sel: &StructuringElement, ext: Extremum) -> MorphResult<Grid8> {
    check_inputs(grid, sel)?;
    match sel.shape() {
        ElementShape::Rectangle => filter_separable(grid, sel.radius(), ext),
        _ => filter_direct(grid, sel, ext),
    }
}

/// Erode a grayscale grid.
///
/// Each output pixel is the minimum of the in-bounds samples covered by
/// the element centered there. Shrinks bright regions.
///
/// # Errors
///
/// - [`MorphError::DimensionMismatch`] for a grid with zero width or height
/// - [`MorphError::InvalidElement`] for an element without member cells
pub fn erode_gray(grid: &Grid8, sel: &StructuringElement) -> MorphResult<Grid8> {
    log::debug!(
        "erode {}x{} with {} {}",
        grid.width(),
        grid.height(),
        sel.shape(),
        sel.size()
    );
    filter(grid, sel, Extremum::Min)
}

/// Dilate a grayscale grid.
///
/// Each output pixel is the maximum of the in-bounds samples covered by
/// the element centered there. Expands bright regions.
///
/// # Errors
///
/// Same conditions as [`erode_gray`].
pub fn dilate_gray(grid: &Grid8, sel: &StructuringElement) -> MorphResult<Grid8> {
    log::debug!(
        "dilate {}x{} with {} {}",
        grid.width(),
        grid.height(),
        sel.shape(),
        sel.size()
    );
    filter(grid, sel, Extremum::Max)
}

/// Compute the erosion and dilation maps in one neighborhood scan.
///
/// Rectangles use two separable passes instead, which is cheaper than a
/// shared direct scan.
pub fn extrema_gray(grid: &Grid8, sel: &StructuringElement) -> MorphResult<ExtremaMaps> {
    check_inputs(grid, sel)?;
    if sel.shape() == ElementShape::Rectangle {
        return Ok(ExtremaMaps {
            min: filter_separable(grid, sel.radius(), Extremum::Min)?,
            max: filter_separable(grid, sel.radius(), Extremum::Max)?,
        });
    }

    let (w, h) = grid.dimensions();
    let (wi, hi) = (w as i32, h as i32);
    let offsets = sel.offsets();
    let src = grid.data();

    let mut min = Grid8Mut::new(w, h)?;
    let mut max = Grid8Mut::new(w, h)?;
    let (dmin, dmax) = (min.data_mut(), max.data_mut());
    for y in 0..hi {
        for x in 0..wi {
            let (mut lo, mut hi_v) = (u8::MAX, u8::MIN);
            for &(dx, dy) in offsets {
                let (sx, sy) = (x + dx, y + dy);
                if sx >= 0 && sy >= 0 && sx < wi && sy < hi {
                    let v = src[(sy * wi + sx) as usize];
                    lo = lo.min(v);
                    hi_v = hi_v.max(v);
                }
            }
            let idx = (y * wi + x) as usize;
            dmin[idx] = lo;
            dmax[idx] = hi_v;
        }
    }
    Ok(ExtremaMaps {
        min: min.into(),
        max: max.into(),
    })
}

/// Open a grayscale grid (erosion followed by dilation).
///
/// Opening removes bright features smaller than the element. The result
/// is anti-extensive and idempotent.
pub fn open_gray(grid: &Grid8, sel: &StructuringElement) -> MorphResult<Grid8> {
    let eroded = erode_gray(grid, sel)?;
    dilate_gray(&eroded, sel)
}

/// Close a grayscale grid (dilation followed by erosion).
///
/// Closing fills dark features smaller than the element. The result is
/// extensive and idempotent.
pub fn close_gray(grid: &Grid8, sel: &StructuringElement) -> MorphResult<Grid8> {
    let dilated = dilate_gray(grid, sel)?;
    erode_gray(&dilated, sel)
}

/// Morphological gradient (dilation minus erosion).
///
/// Highlights edges; zero on flat regions.
pub fn gradient_gray(grid: &Grid8, sel: &StructuringElement) -> MorphResult<Grid8> {
    let maps = extrema_gray(grid, sel)?;
    subtract_gray(&maps.max, &maps.min)
}

/// Top-hat transform (original minus opening).
///
/// Extracts bright features smaller than the element.
pub fn top_hat_gray(grid: &Grid8, sel: &StructuringElement) -> MorphResult<Grid8> {
    let opened = open_gray(grid, sel)?;
    subtract_gray(grid, &opened)
}

/// Bottom-hat transform (closing minus original).
///
/// Extracts dark features smaller than the element.
pub fn bottom_hat_gray(grid: &Grid8, sel: &StructuringElement) -> MorphResult<Grid8> {
    let closed = close_gray(grid, sel)?;
    subtract_gray(&closed, grid)
}

/// Pixel-wise `a - b`, saturating at 0.
pub fn subtract_gray(a: &Grid8, b: &Grid8) -> MorphResult<Grid8> {
    if !a.sizes_equal(b) {
        return Err(morpholab_core::Error::DimensionMismatch {
            expected: a.dimensions(),
            actual: b.dimensions(),
        }
        .into());
    }
    let mut out = Grid8Mut::new(a.width(), a.height())?;
    for ((d, &x), &y) in out.data_mut().iter_mut().zip(a.data()).zip(b.data()) {
        *d = x.saturating_sub(y);
    }
    Ok(out.into())
}
