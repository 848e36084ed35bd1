//! Core types.
//!
//! - `Coordinate` and `Delta` - packed board square and signed offsets
//! - `PixelScale` - screen size of a square
//! - `Piece` and `Color` - piece kinds and side to move
//! - `MoveRecord` and `MoveKind` - one move in smith notation

mod coordinate;
mod moves;
mod piece;
mod pixel;

pub use coordinate::{Coordinate, Delta, ADD_C, ADD_R, SUB_C, SUB_R};
pub use moves::{MoveKind, MoveRecord};
pub use piece::{Color, Piece};
pub use pixel::{PixelScale, SIZE_SQUARE};
