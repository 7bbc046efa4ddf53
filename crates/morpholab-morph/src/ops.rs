//! Named morphological operations
//!
//! [`MorphOp`] names each operation with a stable file-name stem, and
//! [`MorphSet`] bundles the five results produced for every report image.

use crate::MorphResult;
use crate::grayscale::{
    bottom_hat_gray, close_gray, dilate_gray, erode_gray, extrema_gray, gradient_gray, open_gray,
    subtract_gray, top_hat_gray,
};
use crate::sel::StructuringElement;
use morpholab_core::Grid8;
use std::fmt;

/// A grayscale morphological operation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MorphOp {
    Erode,
    Dilate,
    Open,
    Close,
    Gradient,
    TopHat,
    BottomHat,
}

impl MorphOp {
    /// The five operations rendered for every image, in report order.
    pub const REPORT: [MorphOp; 5] = [
        MorphOp::Erode,
        MorphOp::Dilate,
        MorphOp::Open,
        MorphOp::Close,
        MorphOp::Gradient,
    ];

    /// File-name stem used for exported results.
    pub fn stem(self) -> &'static str {
        match self {
            MorphOp::Erode => "erosao",
            MorphOp::Dilate => "dilatacao",
            MorphOp::Open => "abertura",
            MorphOp::Close => "fechamento",
            MorphOp::Gradient => "gradiente",
            MorphOp::TopHat => "tophat",
            MorphOp::BottomHat => "bottomhat",
        }
    }

    /// Apply this operation to `grid`.
    pub fn apply(self, grid: &Grid8, sel: &StructuringElement) -> MorphResult<Grid8> {
        match self {
            MorphOp::Erode => erode_gray(grid, sel),
            MorphOp::Dilate => dilate_gray(grid, sel),
            MorphOp::Open => open_gray(grid, sel),
            MorphOp::Close => close_gray(grid, sel),
            MorphOp::Gradient => gradient_gray(grid, sel),
            MorphOp::TopHat => top_hat_gray(grid, sel),
            MorphOp::BottomHat => bottom_hat_gray(grid, sel),
        }
    }
}

impl fmt::Display for MorphOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            MorphOp::Erode => "erosion",
            MorphOp::Dilate => "dilation",
            MorphOp::Open => "opening",
            MorphOp::Close => "closing",
            MorphOp::Gradient => "gradient",
            MorphOp::TopHat => "top-hat",
            MorphOp::BottomHat => "bottom-hat",
        };
        f.write_str(name)
    }
}

/// Erosion, dilation, opening, closing and gradient of one grid
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MorphSet {
    pub erosion: Grid8,
    pub dilation: Grid8,
    pub opening: Grid8,
    pub closing: Grid8,
    pub gradient: Grid8,
}

impl MorphSet {
    /// Compute all five results.
    ///
    /// Erosion and dilation come from a single extrema scan; opening and
    /// closing reuse them as their first stage.
    pub fn compute(grid: &Grid8, sel: &StructuringElement) -> MorphResult<Self> {
        let maps = extrema_gray(grid, sel)?;
        let opening = dilate_gray(&maps.min, sel)?;
        let closing = erode_gray(&maps.max, sel)?;
        let gradient = subtract_gray(&maps.max, &maps.min)?;
        Ok(MorphSet {
            erosion: maps.min,
            dilation: maps.max,
            opening,
            closing,
            gradient,
        })
    }

    /// Result for one of the [`MorphOp::REPORT`] operations.
    pub fn get(&self, op: MorphOp) -> Option<&Grid8> {
        match op {
            MorphOp::Erode => Some(&self.erosion),
            MorphOp::Dilate => Some(&self.dilation),
            MorphOp::Open => Some(&self.opening),
            MorphOp::Close => Some(&self.closing),
            MorphOp::Gradient => Some(&self.gradient),
            MorphOp::TopHat | MorphOp::BottomHat => None,
        }
    }

    /// `(op, result)` pairs in report order.
    pub fn iter(&self) -> impl Iterator<Item = (MorphOp, &Grid8)> {
        MorphOp::REPORT
            .into_iter()
            .filter_map(|op| self.get(op).map(|g| (op, g)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ElementShape;

    #[test]
    fn test_set_matches_individual_ops() {
        let grid = Grid8::from_fn(13, 9, |x, y| ((x * x + 7 * y) % 251) as u8).unwrap();
        for shape in ElementShape::ALL {
            let sel = StructuringElement::new(shape, 3).unwrap();
            let set = MorphSet::compute(&grid, &sel).unwrap();
            for (op, result) in set.iter() {
                assert_eq!(*result, op.apply(&grid, &sel).unwrap(), "{shape} {op}");
            }
        }
    }

    #[test]
    fn test_stems_unique() {
        let stems: Vec<_> = MorphOp::REPORT.iter().map(|op| op.stem()).collect();
        assert_eq!(
            stems,
            ["erosao", "dilatacao", "abertura", "fechamento", "gradiente"]
        );
        assert_eq!(MorphOp::TopHat.stem(), "tophat");
    }

    #[test]
    fn test_iter_order() {
        let grid = Grid8::new_filled(3, 3, 5).unwrap();
        let sel = StructuringElement::cross(3).unwrap();
        let set = MorphSet::compute(&grid, &sel).unwrap();
        let ops: Vec<_> = set.iter().map(|(op, _)| op).collect();
        assert_eq!(ops, MorphOp::REPORT);
        assert!(set.get(MorphOp::TopHat).is_none());
    }
}
