//! Move records in smith notation.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::coordinate::Coordinate;
use super::piece::{Color, Piece};
use crate::board::error::MoveParseError;
use crate::board::notation::{self, NotationOptions};

/// Category of a move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum MoveKind {
    /// Ordinary move, possibly capturing and/or promoting
    Simple,
    EnPassant,
    CastleKingside,
    CastleQueenside,
    /// Text that does not follow the notation
    Malformed,
}

impl MoveKind {
    /// Returns true for either castling direction
    #[inline]
    #[must_use]
    pub const fn is_castling(self) -> bool {
        matches!(self, MoveKind::CastleKingside | MoveKind::CastleQueenside)
    }
}

/// One move: where it starts, where it ends, what kind it is, and its text.
///
/// The text is whatever the record was parsed from or last generated. The
/// `set_*` methods change fields only; call [`MoveRecord::regenerate_text`]
/// to bring the text back in line.
///
/// Records have no `PartialEq`; compare them by their squares
/// through [`MoveRecord::same_squares`] and [`MoveRecord::destination_cmp`].
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MoveRecord {
    source: Coordinate,
    dest: Coordinate,
    kind: MoveKind,
    capture: Option<Piece>,
    promotion: Option<Piece>,
    side: Color,
    text: String,
}

impl MoveRecord {
    /// Build a record from its parts and generate its text.
    #[must_use]
    pub fn new(
        source: Coordinate,
        dest: Coordinate,
        kind: MoveKind,
        capture: Option<Piece>,
        promotion: Option<Piece>,
        side: Color,
    ) -> Self {
        let mut record = MoveRecord {
            source,
            dest,
            kind,
            capture,
            promotion,
            side,
            text: String::new(),
        };
        record.regenerate_text(&NotationOptions::default());
        record
    }

    /// Parse smith text for White with the default options.
    ///
    /// Never fails; see [`MoveRecord::parse_with`].
    #[must_use]
    pub fn parse(text: &str) -> Self {
        MoveRecord::parse_with(text, Color::White, &NotationOptions::default())
    }

    /// Parse smith text.
    ///
    /// Bad input gives a record of kind [`MoveKind::Malformed`] whose squares
    /// are still read from the first four characters where possible.
    #[must_use]
    pub fn parse_with(text: &str, side: Color, options: &NotationOptions) -> Self {
        let mut record = MoveRecord {
            side,
            ..MoveRecord::default()
        };
        record.set_text(text, options);
        record
    }

    /// Replace the text and re-read every field except the side to move.
    ///
    /// In lenient mode an unrecognized two-letter suffix keeps the previous
    /// kind, capture and promotion.
    pub fn set_text(&mut self, text: &str, options: &NotationOptions) {
        let bytes = text.as_bytes();
        self.source = bytes
            .get(0..2)
            .map_or(Coordinate::INVALID, Coordinate::from_bytes);
        self.dest = bytes
            .get(2..4)
            .map_or(Coordinate::INVALID, Coordinate::from_bytes);
        self.text = text.to_string();

        match notation::decode_suffix(text) {
            Some(suffix) => {
                self.kind = suffix.kind;
                self.capture = suffix.capture;
                self.promotion = suffix.promotion;
            }
            None if text.len() == 6 && !options.strict_suffix => {
                notation::log_stale_suffix(text);
            }
            None => {
                notation::log_malformed(text);
                self.kind = MoveKind::Malformed;
                self.capture = None;
                self.promotion = None;
            }
        }
    }

    /// Rebuild the text from the current fields.
    pub fn regenerate_text(&mut self, options: &NotationOptions) -> &str {
        self.text = notation::generate(
            self.source,
            self.dest,
            self.kind,
            self.capture,
            self.promotion,
            options,
        );
        &self.text
    }

    #[inline]
    #[must_use]
    pub const fn source(&self) -> Coordinate {
        self.source
    }

    #[inline]
    #[must_use]
    pub const fn dest(&self) -> Coordinate {
        self.dest
    }

    #[inline]
    #[must_use]
    pub const fn kind(&self) -> MoveKind {
        self.kind
    }

    #[inline]
    #[must_use]
    pub const fn capture(&self) -> Option<Piece> {
        self.capture
    }

    #[inline]
    #[must_use]
    pub const fn promotion(&self) -> Option<Piece> {
        self.promotion
    }

    #[inline]
    #[must_use]
    pub const fn side(&self) -> Color {
        self.side
    }

    #[inline]
    #[must_use]
    pub const fn is_white(&self) -> bool {
        self.side.is_white()
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn set_source(&mut self, source: Coordinate) {
        self.source = source;
    }

    pub fn set_dest(&mut self, dest: Coordinate) {
        self.dest = dest;
    }

    pub fn set_kind(&mut self, kind: MoveKind) {
        self.kind = kind;
    }

    pub fn set_capture(&mut self, capture: Option<Piece>) {
        self.capture = capture;
    }

    pub fn set_promotion(&mut self, promotion: Option<Piece>) {
        self.promotion = promotion;
    }

    pub fn set_side(&mut self, side: Color) {
        self.side = side;
    }

    /// Returns true if this move captures a piece (including en passant)
    #[inline]
    #[must_use]
    pub const fn is_capture(&self) -> bool {
        self.capture.is_some()
    }

    /// Returns true when the kind is known and both squares are on the board
    #[inline]
    #[must_use]
    pub const fn is_well_formed(&self) -> bool {
        !matches!(self.kind, MoveKind::Malformed) && self.source.is_valid() && self.dest.is_valid()
    }

    /// Same source and same destination, by linear index.
    #[must_use]
    pub const fn same_squares(&self, other: &MoveRecord) -> bool {
        self.source.to_index() == other.source.to_index()
            && self.dest.to_index() == other.dest.to_index()
    }

    /// Order two moves from the same source by destination index.
    ///
    /// Moves from different sources are unordered (`None`), so this is not a
    /// general sort key.
    #[must_use]
    pub fn destination_cmp(&self, other: &MoveRecord) -> Option<Ordering> {
        if self.source.to_index() == other.source.to_index() {
            Some(self.dest.to_index().cmp(&other.dest.to_index()))
        } else {
            None
        }
    }
}

impl Default for MoveRecord {
    fn default() -> Self {
        MoveRecord {
            source: Coordinate::INVALID,
            dest: Coordinate::INVALID,
            kind: MoveKind::Malformed,
            capture: None,
            promotion: None,
            side: Color::White,
            text: String::new(),
        }
    }
}

impl fmt::Display for MoveRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// Strict parse: unlike [`MoveRecord::parse`], bad text is an error.
impl FromStr for MoveRecord {
    type Err = MoveParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if !(4..=6).contains(&s.len()) {
            return Err(MoveParseError::InvalidLength { len: s.len() });
        }
        let record = MoveRecord::parse(s);
        if record.source.is_invalid() || record.dest.is_invalid() {
            return Err(MoveParseError::InvalidSquare {
                notation: s.to_string(),
            });
        }
        if record.kind == MoveKind::Malformed {
            return Err(MoveParseError::UnknownSuffix {
                suffix: s.get(4..).unwrap_or_default().to_string(),
            });
        }
        Ok(record)
    }
}
