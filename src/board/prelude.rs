//! Prelude module for convenient imports.
//!
//! This module re-exports the most commonly used types and functions.
//!
//! # Example
//! ```
//! use smith_notation::board::prelude::*;
//!
//! assert!(equal("e2e4", "e2e4q"));
//! ```

pub use super::notation::{equal, generate, less_than};
pub use super::{
    Color, Coordinate, Delta, MoveKind, MoveParseError, MoveRecord, NotationOptions, Piece,
    PixelScale, SquareError,
};
