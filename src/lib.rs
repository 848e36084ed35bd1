pub mod board;

pub use board::{Color, Coordinate, Delta, MoveKind, MoveRecord, NotationOptions, Piece};
