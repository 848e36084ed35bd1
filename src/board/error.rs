//! Error types for the strict coordinate and notation conversions.
//!
//! The total constructors (`Coordinate::from_text`, `MoveRecord::parse`, ...)
//! never fail; these errors are only produced by the `FromStr` / `TryFrom`
//! impls and by validated configuration.

use std::fmt;

/// Error type for square parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SquareError {
    /// Row out of bounds (must be 0-7)
    RowOutOfBounds { row: usize },
    /// Column out of bounds (must be 0-7)
    ColOutOfBounds { col: usize },
    /// Linear index out of bounds (must be 0-63)
    IndexOutOfBounds { index: usize },
    /// Invalid algebraic notation
    InvalidNotation { notation: String },
}

impl fmt::Display for SquareError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SquareError::RowOutOfBounds { row } => {
                write!(f, "Row {row} out of bounds (must be 0-7)")
            }
            SquareError::ColOutOfBounds { col } => {
                write!(f, "Column {col} out of bounds (must be 0-7)")
            }
            SquareError::IndexOutOfBounds { index } => {
                write!(f, "Index {index} out of bounds (must be 0-63)")
            }
            SquareError::InvalidNotation { notation } => {
                write!(f, "Invalid square notation '{notation}'")
            }
        }
    }
}

impl std::error::Error for SquareError {}

/// Error type for smith move parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveParseError {
    /// Move string has invalid length (must be 4-6 characters)
    InvalidLength { len: usize },
    /// Invalid square notation in move
    InvalidSquare { notation: String },
    /// Suffix matches none of the recognized forms
    UnknownSuffix { suffix: String },
}

impl fmt::Display for MoveParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveParseError::InvalidLength { len } => {
                write!(f, "Move must be 4-6 characters, found {len}")
            }
            MoveParseError::InvalidSquare { notation } => {
                write!(f, "Invalid square notation in '{notation}'")
            }
            MoveParseError::UnknownSuffix { suffix } => {
                write!(f, "Unknown move suffix '{suffix}'")
            }
        }
    }
}

impl std::error::Error for MoveParseError {}

/// Error type for pixel scale configuration
#[derive(Debug, Clone, PartialEq)]
pub enum ScaleError {
    /// Square width must be a positive, finite number of pixels
    InvalidWidth { width: f64 },
    /// Square height must be a positive, finite number of pixels
    InvalidHeight { height: f64 },
}

impl fmt::Display for ScaleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScaleError::InvalidWidth { width } => {
                write!(f, "Square width {width} must be positive")
            }
            ScaleError::InvalidHeight { height } => {
                write!(f, "Square height {height} must be positive")
            }
        }
    }
}

impl std::error::Error for ScaleError {}

#[cfg(test)]
mod tests {
    use super::*;

    // SquareError tests
    #[test]
    fn test_square_error_row_bounds() {
        let err = SquareError::RowOutOfBounds { row: 9 };
        assert!(err.to_string().contains('9'));
    }

    #[test]
    fn test_square_error_col_bounds() {
        let err = SquareError::ColOutOfBounds { col: 10 };
        assert!(err.to_string().contains("10"));
    }

    #[test]
    fn test_square_error_index_bounds() {
        let err = SquareError::IndexOutOfBounds { index: 64 };
        assert!(err.to_string().contains("64"));
    }

    #[test]
    fn test_square_error_invalid_notation() {
        let err = SquareError::InvalidNotation {
            notation: "xyz".to_string(),
        };
        assert!(err.to_string().contains("xyz"));
    }

    // MoveParseError tests
    #[test]
    fn test_move_error_invalid_length() {
        let err = MoveParseError::InvalidLength { len: 3 };
        assert!(err.to_string().contains('3'));
    }

    #[test]
    fn test_move_error_invalid_square() {
        let err = MoveParseError::InvalidSquare {
            notation: "z9z9".to_string(),
        };
        assert!(err.to_string().contains("z9z9"));
    }

    #[test]
    fn test_move_error_unknown_suffix() {
        let err = MoveParseError::UnknownSuffix {
            suffix: "xX".to_string(),
        };
        assert!(err.to_string().contains("'xX'"));
    }

    #[test]
    fn test_scale_error_mentions_value() {
        let err = ScaleError::InvalidHeight { height: -2.0 };
        assert!(err.to_string().contains("-2"));
    }

    #[test]
    fn test_error_clone() {
        let err = MoveParseError::InvalidLength { len: 7 };
        let cloned = err.clone();
        assert_eq!(err, cloned);
    }
}
