//! Packed board coordinates.

use std::fmt;
use std::ops::{Add, AddAssign};
use std::str::FromStr;

use rand::distributions::{Distribution, Standard};
use rand::Rng;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::pixel::PixelScale;
use crate::board::error::SquareError;

// Any bit set here means one of the nibbles is >= 8.
const INVALID_MASK: u8 = 0x88;
const UNSET: u8 = 0x99;
const OUT_OF_RANGE: u8 = 0xFF;

/// Movement in a direction, as a signed (row, column) pair.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Delta {
    pub d_row: i32,
    pub d_col: i32,
}

impl Delta {
    #[must_use]
    pub const fn new(d_row: i32, d_col: i32) -> Self {
        Delta { d_row, d_col }
    }
}

/// One row up
pub const ADD_R: Delta = Delta::new(1, 0);
/// One column right
pub const ADD_C: Delta = Delta::new(0, 1);
/// One row down
pub const SUB_R: Delta = Delta::new(-1, 0);
/// One column left
pub const SUB_C: Delta = Delta::new(0, -1);

/// A square on the board packed into a single byte.
///
/// Encoding: high nibble = column (0 = file a), low nibble = row (0 = rank 1).
/// A coordinate is valid only when neither nibble has its top bit set, so the
/// two sentinels `0x99` and `0xFF` both read as invalid.
///
/// Ordering follows the packed byte, i.e. column first, then row.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Coordinate(u8);

impl Coordinate {
    /// Sentinel for "never set" / unparsable input
    pub const INVALID: Coordinate = Coordinate(UNSET);
    /// Sentinel produced when arithmetic leaves the board
    pub const OUT_OF_RANGE: Coordinate = Coordinate(OUT_OF_RANGE);

    #[inline]
    const fn pack(col: i32, row: i32, fallback: u8) -> Self {
        if col >= 0 && col < 8 && row >= 0 && row < 8 {
            Coordinate(((col as u8) << 4) | row as u8)
        } else {
            Coordinate(fallback)
        }
    }

    /// Create from column and row (both 0-7); anything else is invalid.
    #[inline]
    #[must_use]
    pub const fn new(col: i32, row: i32) -> Self {
        Coordinate::pack(col, row, UNSET)
    }

    /// Create from a linear index (0-63, a1=0, b1=1, ..., h8=63).
    #[inline]
    #[must_use]
    pub const fn from_index(index: i32) -> Self {
        if index >= 0 && index < 64 {
            Coordinate::new(index % 8, index / 8)
        } else {
            Coordinate::INVALID
        }
    }

    /// Parse algebraic text such as `"e4"`. The file letter is case-insensitive.
    ///
    /// Never fails: malformed text gives an invalid coordinate.
    #[must_use]
    pub fn from_text(text: &str) -> Self {
        Coordinate::from_bytes(text.as_bytes())
    }

    pub(crate) fn from_bytes(bytes: &[u8]) -> Self {
        let &[file, rank] = bytes else {
            return Coordinate::INVALID;
        };
        let col = match file {
            b'a'..=b'h' => file - b'a',
            b'A'..=b'H' => file - b'A',
            _ => return Coordinate::INVALID,
        };
        let row = match rank {
            b'1'..=b'8' => rank - b'1',
            _ => return Coordinate::INVALID,
        };
        Coordinate((col << 4) | row)
    }

    /// Locate the square under a screen point.
    ///
    /// Points left of or above the board, beyond it, or a non-positive scale
    /// all give an invalid coordinate.
    #[must_use]
    pub fn from_pixel(x: f64, y: f64, scale: &PixelScale) -> Self {
        if !scale.is_usable() || !x.is_finite() || !y.is_finite() {
            return Coordinate::OUT_OF_RANGE;
        }
        let col = (x / scale.square_width()).floor();
        let row = (y / scale.square_height()).floor();
        if !(0.0..8.0).contains(&col) || !(0.0..8.0).contains(&row) {
            return Coordinate::OUT_OF_RANGE;
        }
        Coordinate::pack(col as i32, row as i32, OUT_OF_RANGE)
    }

    #[inline]
    #[must_use]
    pub const fn is_valid(self) -> bool {
        self.0 & INVALID_MASK == 0
    }

    #[inline]
    #[must_use]
    pub const fn is_invalid(self) -> bool {
        !self.is_valid()
    }

    /// Column 0-7, or -1 when invalid
    #[inline]
    #[must_use]
    pub const fn col(self) -> i32 {
        if self.is_valid() {
            (self.0 >> 4) as i32
        } else {
            -1
        }
    }

    /// Row 0-7, or -1 when invalid
    #[inline]
    #[must_use]
    pub const fn row(self) -> i32 {
        if self.is_valid() {
            (self.0 & 0x0F) as i32
        } else {
            -1
        }
    }

    /// Linear index 0-63, or -1 when invalid
    #[inline]
    #[must_use]
    pub const fn to_index(self) -> i32 {
        if self.is_valid() {
            self.row() * 8 + self.col()
        } else {
            -1
        }
    }

    #[inline]
    #[must_use]
    pub const fn checked_index(self) -> Option<usize> {
        if self.is_valid() {
            Some(self.to_index() as usize)
        } else {
            None
        }
    }

    /// The packed byte, sentinels included
    #[inline]
    #[must_use]
    pub const fn raw(self) -> u8 {
        self.0
    }

    /// Algebraic text (`"e4"`), or `"--"` for an invalid coordinate.
    #[must_use]
    pub fn to_text(self) -> String {
        self.to_string()
    }

    /// A new coordinate moved by `delta`; invalid when it leaves the board.
    #[inline]
    #[must_use]
    pub const fn offset_by(self, delta: Delta) -> Self {
        if self.is_invalid() {
            return Coordinate::OUT_OF_RANGE;
        }
        Coordinate::pack(
            self.col() + delta.d_col,
            self.row() + delta.d_row,
            OUT_OF_RANGE,
        )
    }

    /// Move up or down in place.
    pub fn adjust_row(&mut self, d_row: i32) {
        *self = if self.is_valid() {
            Coordinate::pack(self.col(), self.row() + d_row, OUT_OF_RANGE)
        } else {
            Coordinate::OUT_OF_RANGE
        };
    }

    /// Move left or right in place.
    pub fn adjust_col(&mut self, d_col: i32) {
        *self = if self.is_valid() {
            Coordinate::pack(self.col() + d_col, self.row(), UNSET)
        } else {
            Coordinate::INVALID
        };
    }

    /// Top-left pixel of this square, or `None` when the square is invalid
    /// or the scale is not positive.
    #[must_use]
    pub fn to_pixel(self, scale: &PixelScale) -> Option<(f64, f64)> {
        if self.is_invalid() || !scale.is_usable() {
            return None;
        }
        Some((
            f64::from(self.col()) * scale.square_width(),
            f64::from(self.row()) * scale.square_height(),
        ))
    }
}

impl Default for Coordinate {
    fn default() -> Self {
        Coordinate::INVALID
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_valid() {
            write!(f, "{}{}", (b'a' + (self.0 >> 4)) as char, self.row() + 1)
        } else {
            f.write_str("--")
        }
    }
}

impl fmt::Debug for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_valid() {
            write!(f, "Coordinate({self})")
        } else {
            write!(f, "Coordinate(invalid {:#04x})", self.0)
        }
    }
}

impl Add<Delta> for Coordinate {
    type Output = Coordinate;

    fn add(self, rhs: Delta) -> Self::Output {
        self.offset_by(rhs)
    }
}

impl AddAssign<Delta> for Coordinate {
    fn add_assign(&mut self, rhs: Delta) {
        *self = self.offset_by(rhs);
    }
}

impl TryFrom<(usize, usize)> for Coordinate {
    type Error = SquareError;

    fn try_from((col, row): (usize, usize)) -> Result<Self, Self::Error> {
        if col >= 8 {
            return Err(SquareError::ColOutOfBounds { col });
        }
        if row >= 8 {
            return Err(SquareError::RowOutOfBounds { row });
        }
        Ok(Coordinate::new(col as i32, row as i32))
    }
}

impl TryFrom<usize> for Coordinate {
    type Error = SquareError;

    fn try_from(index: usize) -> Result<Self, Self::Error> {
        if index >= 64 {
            return Err(SquareError::IndexOutOfBounds { index });
        }
        Ok(Coordinate::from_index(index as i32))
    }
}

impl FromStr for Coordinate {
    type Err = SquareError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let coord = Coordinate::from_text(s);
        if coord.is_valid() {
            Ok(coord)
        } else {
            Err(SquareError::InvalidNotation {
                notation: s.to_string(),
            })
        }
    }
}

/// Uniformly random valid coordinates.
impl Distribution<Coordinate> for Standard {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Coordinate {
        Coordinate::from_index(rng.gen_range(0..64))
    }
}
