//! Piece and color types.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Chess piece kinds. "No piece" is expressed as `Option::<Piece>::None`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Piece {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl Piece {
    /// All piece kinds in index order
    pub const ALL: [Piece; 6] = [
        Piece::Pawn,
        Piece::Knight,
        Piece::Bishop,
        Piece::Rook,
        Piece::Queen,
        Piece::King,
    ];

    /// Pieces a pawn may promote to, queen first
    pub const PROMOTIONS: [Piece; 4] = [Piece::Queen, Piece::Rook, Piece::Bishop, Piece::Knight];

    /// Parse a piece from a lowercase capture letter (p, n, b, r, q, k)
    #[must_use]
    pub const fn from_capture_char(c: char) -> Option<Piece> {
        match c {
            'p' => Some(Piece::Pawn),
            'n' => Some(Piece::Knight),
            'b' => Some(Piece::Bishop),
            'r' => Some(Piece::Rook),
            'q' => Some(Piece::Queen),
            'k' => Some(Piece::King),
            _ => None,
        }
    }

    /// Parse a piece from an uppercase promotion letter (N, B, R, Q)
    #[must_use]
    pub const fn from_promotion_char(c: char) -> Option<Piece> {
        match c {
            'N' => Some(Piece::Knight),
            'B' => Some(Piece::Bishop),
            'R' => Some(Piece::Rook),
            'Q' => Some(Piece::Queen),
            _ => None,
        }
    }

    /// Convert piece to lowercase character
    #[inline]
    #[must_use]
    pub const fn to_char(self) -> char {
        match self {
            Piece::Pawn => 'p',
            Piece::Knight => 'n',
            Piece::Bishop => 'b',
            Piece::Rook => 'r',
            Piece::Queen => 'q',
            Piece::King => 'k',
        }
    }

    /// Uppercase letter used for promotions
    #[inline]
    #[must_use]
    pub const fn to_promotion_char(self) -> char {
        self.to_char().to_ascii_uppercase()
    }

    /// Returns true if a pawn may promote to this piece
    #[inline]
    #[must_use]
    pub const fn is_promotion_target(self) -> bool {
        matches!(
            self,
            Piece::Knight | Piece::Bishop | Piece::Rook | Piece::Queen
        )
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Piece::Pawn => "Pawn",
            Piece::Knight => "Knight",
            Piece::Bishop => "Bishop",
            Piece::Rook => "Rook",
            Piece::Queen => "Queen",
            Piece::King => "King",
        };
        f.write_str(name)
    }
}

/// Side to move.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Color {
    #[default]
    White,
    Black,
}

impl Color {
    /// Both colors (White first)
    pub const BOTH: [Color; 2] = [Color::White, Color::Black];

    /// Build from the "is white" flag used by engine front-ends
    #[inline]
    #[must_use]
    pub const fn from_is_white(white: bool) -> Self {
        if white {
            Color::White
        } else {
            Color::Black
        }
    }

    #[inline]
    #[must_use]
    pub const fn is_white(self) -> bool {
        matches!(self, Color::White)
    }

    /// Returns the opposite color
    #[inline]
    #[must_use]
    pub const fn opponent(self) -> Color {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::White => write!(f, "White"),
            Color::Black => write!(f, "Black"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capture_letters_round_trip() {
        for piece in Piece::ALL {
            assert_eq!(Piece::from_capture_char(piece.to_char()), Some(piece));
        }
    }

    #[test]
    fn test_promotion_letters_round_trip() {
        for piece in Piece::PROMOTIONS {
            assert_eq!(
                Piece::from_promotion_char(piece.to_promotion_char()),
                Some(piece)
            );
        }
    }

    #[test]
    fn test_case_matters() {
        assert_eq!(Piece::from_capture_char('Q'), None);
        assert_eq!(Piece::from_promotion_char('q'), None);
        assert_eq!(Piece::from_promotion_char('P'), None);
        assert_eq!(Piece::from_promotion_char('K'), None);
    }

    #[test]
    fn test_color_flag() {
        assert!(Color::from_is_white(true).is_white());
        assert_eq!(Color::from_is_white(false), Color::Black);
        assert_eq!(Color::White.opponent(), Color::Black);
        assert_eq!(Color::default(), Color::White);
    }
}
