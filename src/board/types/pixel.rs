//! Screen scale used to map squares to pixels.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::error::ScaleError;

/// Default square size in pixels
pub const SIZE_SQUARE: f64 = 32.0;

/// Size of one board square on screen.
///
/// Passed explicitly to pixel conversions; there is no process-wide scale.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PixelScale {
    square_width: f64,
    square_height: f64,
}

impl PixelScale {
    /// Create a scale, rejecting non-positive or non-finite sizes.
    pub fn new(square_width: f64, square_height: f64) -> Result<Self, ScaleError> {
        if !(square_width.is_finite() && square_width > 0.0) {
            return Err(ScaleError::InvalidWidth {
                width: square_width,
            });
        }
        if !(square_height.is_finite() && square_height > 0.0) {
            return Err(ScaleError::InvalidHeight {
                height: square_height,
            });
        }
        Ok(PixelScale {
            square_width,
            square_height,
        })
    }

    /// Same size on both axes
    pub fn square(size: f64) -> Result<Self, ScaleError> {
        PixelScale::new(size, size)
    }

    #[inline]
    #[must_use]
    pub const fn square_width(&self) -> f64 {
        self.square_width
    }

    #[inline]
    #[must_use]
    pub const fn square_height(&self) -> f64 {
        self.square_height
    }

    // Deserialized values skip `new`, so conversions still check.
    #[inline]
    pub(crate) fn is_usable(&self) -> bool {
        self.square_width > 0.0 && self.square_height > 0.0
    }
}

impl Default for PixelScale {
    fn default() -> Self {
        PixelScale {
            square_width: SIZE_SQUARE,
            square_height: SIZE_SQUARE,
        }
    }
}
