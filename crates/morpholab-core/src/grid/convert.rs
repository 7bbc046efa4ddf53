//! Color to gray reduction

use super::{Grid8, GridData, RgbGrid};
use crate::error::{Error, Result};
use std::sync::Arc;

/// Per-channel weights for RGB to gray conversion.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GrayWeights {
    pub red: f32,
    pub green: f32,
    pub blue: f32,
}

impl GrayWeights {
    /// ITU-R BT.601 luma weights.
    pub const LUMINANCE: GrayWeights = GrayWeights {
        red: 0.299,
        green: 0.587,
        blue: 0.114,
    };

    /// Equal weights.
    pub const AVERAGE: GrayWeights = GrayWeights {
        red: 1.0 / 3.0,
        green: 1.0 / 3.0,
        blue: 1.0 / 3.0,
    };

    /// Validate and rescale so the weights sum to 1.
    fn normalized(self) -> Result<GrayWeights> {
        if !(self.red.is_finite() && self.green.is_finite() && self.blue.is_finite()) {
            return Err(Error::InvalidParameter("weights must be finite".into()));
        }
        if self.red < 0.0 || self.green < 0.0 || self.blue < 0.0 {
            return Err(Error::InvalidParameter("weights must all be >= 0.0".into()));
        }
        let sum = self.red + self.green + self.blue;
        if sum <= 0.0 {
            return Err(Error::InvalidParameter(
                "at least one weight must be > 0.0".into(),
            ));
        }
        if (sum - 1.0).abs() > 0.0001 {
            return Ok(GrayWeights {
                red: self.red / sum,
                green: self.green / sum,
                blue: self.blue / sum,
            });
        }
        Ok(self)
    }
}

impl Default for GrayWeights {
    fn default() -> Self {
        GrayWeights::LUMINANCE
    }
}

impl RgbGrid {
    /// Reduce to a single channel with `round(wr*R + wg*G + wb*B)`.
    ///
    /// The mapping is deterministic: the same weights always give the
    /// same grid.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidParameter`] for negative or all-zero weights.
    pub fn to_gray(&self, weights: GrayWeights) -> Result<Grid8> {
        let w = weights.normalized()?;
        let data = self
            .data()
            .chunks_exact(3)
            .map(|px| {
                let v = w.red * px[0] as f32 + w.green * px[1] as f32 + w.blue * px[2] as f32;
                ((v + 0.5) as u32).min(255) as u8
            })
            .collect();
        Ok(Grid8 {
            inner: Arc::new(GridData {
                width: self.width(),
                height: self.height(),
                data,
            }),
        })
    }
}
