//! Smith move notation.
//!
//! A move is written as source square, destination square and an optional
//! one- or two-letter suffix:
//!
//! | suffix            | meaning                                  |
//! |-------------------|------------------------------------------|
//! | (none)            | plain move                               |
//! | `p n b r q k`     | captures that piece                      |
//! | `N B R Q`         | promotes to that piece                   |
//! | `c` / `C`         | castles kingside / queenside             |
//! | `E`               | en passant                               |
//! | `xQ` or `Qx`      | captures `x` (one of `pnbrq`) and queens |
//!
//! # Examples
//! ```
//! use smith_notation::board::{notation, MoveKind, MoveRecord, Piece};
//!
//! let mv = MoveRecord::parse("e7d8pQ");
//! assert_eq!(mv.kind(), MoveKind::Simple);
//! assert_eq!(mv.capture(), Some(Piece::Pawn));
//! assert_eq!(mv.promotion(), Some(Piece::Queen));
//! assert!(notation::less_than("e2e3", "e2e4"));
//! ```

use std::collections::HashMap;

use once_cell::sync::Lazy;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::types::{Coordinate, MoveKind, MoveRecord, Piece};

/// Behaviour switches for reading and writing notation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct NotationOptions {
    /// Mark six-character moves with an unknown suffix as malformed. When
    /// off, such input leaves kind, capture and promotion as they were.
    pub strict_suffix: bool,
    /// Append the promotion letter when writing simple moves. When off,
    /// promotions are dropped from generated text.
    pub encode_promotion: bool,
}

impl NotationOptions {
    /// The historical behaviour: lenient suffixes, promotions not written.
    #[must_use]
    pub const fn legacy() -> Self {
        NotationOptions {
            strict_suffix: false,
            encode_promotion: false,
        }
    }
}

impl Default for NotationOptions {
    fn default() -> Self {
        NotationOptions {
            strict_suffix: true,
            encode_promotion: true,
        }
    }
}

/// What a suffix says about a move.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Suffix {
    pub(crate) kind: MoveKind,
    pub(crate) capture: Option<Piece>,
    pub(crate) promotion: Option<Piece>,
}

impl Suffix {
    const fn simple(capture: Option<Piece>, promotion: Option<Piece>) -> Self {
        Suffix {
            kind: MoveKind::Simple,
            capture,
            promotion,
        }
    }
}

static SUFFIXES: Lazy<HashMap<String, Suffix>> = Lazy::new(|| {
    let mut table = HashMap::new();
    table.insert(String::new(), Suffix::simple(None, None));

    for piece in Piece::ALL {
        table.insert(piece.to_char().to_string(), Suffix::simple(Some(piece), None));
    }
    for piece in Piece::PROMOTIONS {
        table.insert(
            piece.to_promotion_char().to_string(),
            Suffix::simple(None, Some(piece)),
        );
    }

    table.insert(
        "c".to_string(),
        Suffix {
            kind: MoveKind::CastleKingside,
            capture: None,
            promotion: None,
        },
    );
    table.insert(
        "C".to_string(),
        Suffix {
            kind: MoveKind::CastleQueenside,
            capture: None,
            promotion: None,
        },
    );
    table.insert(
        "E".to_string(),
        Suffix {
            kind: MoveKind::EnPassant,
            capture: Some(Piece::Pawn),
            promotion: None,
        },
    );

    // Capture with promotion: only queening is written, in either order.
    let queen = Piece::Queen.to_promotion_char();
    for captured in [Piece::Pawn, Piece::Knight, Piece::Bishop, Piece::Rook, Piece::Queen] {
        let entry = Suffix::simple(Some(captured), Some(Piece::Queen));
        let letter = captured.to_char();
        table.insert(format!("{letter}{queen}"), entry);
        table.insert(format!("{queen}{letter}"), entry);
    }

    table
});

/// Look up the suffix of a complete move text (4-6 bytes).
///
/// `None` for any other length and for unknown suffixes.
pub(crate) fn decode_suffix(text: &str) -> Option<Suffix> {
    if !(4..=6).contains(&text.len()) {
        return None;
    }
    text.get(4..).and_then(|suffix| SUFFIXES.get(suffix)).copied()
}

/// Write a move in smith notation.
///
/// Invalid squares are written as `--`, which no parser accepts.
#[must_use]
pub fn generate(
    source: Coordinate,
    dest: Coordinate,
    kind: MoveKind,
    capture: Option<Piece>,
    promotion: Option<Piece>,
    options: &NotationOptions,
) -> String {
    let mut text = String::with_capacity(6);
    text.push_str(&source.to_text());
    text.push_str(&dest.to_text());

    match kind {
        MoveKind::Simple => {
            if let Some(piece) = capture {
                text.push(piece.to_char());
            }
            if options.encode_promotion {
                if let Some(piece) = promotion {
                    text.push(piece.to_promotion_char());
                }
            }
        }
        MoveKind::EnPassant => text.push('E'),
        MoveKind::CastleKingside => text.push('c'),
        MoveKind::CastleQueenside => text.push('C'),
        MoveKind::Malformed => {}
    }

    #[cfg(feature = "logging")]
    log::trace!("generated smith move {text}");
    text
}

/// True when both moves have the same source and destination squares.
#[must_use]
pub fn equal(a: &str, b: &str) -> bool {
    MoveRecord::parse(a).same_squares(&MoveRecord::parse(b))
}

/// True when both moves share a source and `a` lands on a lower-indexed
/// square than `b`. Moves from different sources are never less than each
/// other.
#[must_use]
pub fn less_than(a: &str, b: &str) -> bool {
    matches!(
        MoveRecord::parse(a).destination_cmp(&MoveRecord::parse(b)),
        Some(std::cmp::Ordering::Less)
    )
}

#[inline]
pub(crate) fn log_malformed(_text: &str) {
    #[cfg(feature = "logging")]
    log::debug!("malformed smith move {_text:?}");
}

#[inline]
pub(crate) fn log_stale_suffix(_text: &str) {
    #[cfg(feature = "logging")]
    log::debug!("unknown suffix in {_text:?}, keeping previous move fields");
}
