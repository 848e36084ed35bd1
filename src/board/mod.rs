//! Board coordinates and move notation.
//!
//! Coordinates pack a column and row into one byte with explicit invalid
//! sentinels; moves are read and written in smith notation.
//!
//! # Example
//! ```
//! use smith_notation::board::{Coordinate, MoveKind, MoveRecord, ADD_R};
//!
//! let e2 = Coordinate::from_text("e2");
//! assert_eq!((e2 + ADD_R).to_text(), "e3");
//!
//! let mv = MoveRecord::parse("e1g1c");
//! assert_eq!(mv.kind(), MoveKind::CastleKingside);
//! ```

mod error;
pub mod notation;
pub mod prelude;
mod types;

#[cfg(test)]
mod tests;

pub use error::{MoveParseError, ScaleError, SquareError};
pub use notation::NotationOptions;
pub use types::{
    Color, Coordinate, Delta, MoveKind, MoveRecord, Piece, PixelScale, ADD_C, ADD_R, SIZE_SQUARE,
    SUB_C, SUB_R,
};
