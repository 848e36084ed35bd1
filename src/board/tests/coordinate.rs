//! Coordinate packing and conversion tests.

use crate::board::{Coordinate, Delta, PixelScale, SquareError, ADD_C, ADD_R, SUB_C, SUB_R};

#[test]
fn test_text_round_trip_all_squares() {
    for col in 0..8 {
        for row in 0..8 {
            let coord = Coordinate::new(col, row);
            assert!(coord.is_valid());
            assert_eq!(Coordinate::from_text(&coord.to_text()), coord);
        }
    }
}

#[test]
fn test_index_round_trip() {
    for i in 0..64 {
        let coord = Coordinate::from_index(i);
        assert!(coord.is_valid(), "index {i} should be valid");
        assert_eq!(coord.to_index(), i);
        assert_eq!(coord.col(), i % 8);
        assert_eq!(coord.row(), i / 8);
    }
}

#[test]
fn test_known_squares() {
    assert_eq!(Coordinate::from_text("a1").to_index(), 0);
    assert_eq!(Coordinate::from_text("h1").to_index(), 7);
    assert_eq!(Coordinate::from_text("h8").to_index(), 63);

    let e4 = Coordinate::from_text("e4");
    assert_eq!(e4.col(), 4);
    assert_eq!(e4.row(), 3);
    assert_eq!(e4.raw(), 0x43);
    assert_eq!(e4.to_string(), "e4");
}

#[test]
fn test_uppercase_file_accepted() {
    assert_eq!(Coordinate::from_text("E4"), Coordinate::from_text("e4"));
    assert_eq!(Coordinate::from_text("H8"), Coordinate::new(7, 7));
}

#[test]
fn test_invalid_text() {
    for text in ["i9", "a9", "z1", "", "a", "a0", "e44", "4e", "é1"] {
        assert!(
            Coordinate::from_text(text).is_invalid(),
            "{text:?} should be invalid"
        );
    }
}

#[test]
fn test_invalid_col_row() {
    assert!(Coordinate::new(8, 0).is_invalid());
    assert!(Coordinate::new(0, 8).is_invalid());
    assert!(Coordinate::new(-1, 3).is_invalid());
    assert!(Coordinate::new(3, -1).is_invalid());
}

#[test]
fn test_invalid_index() {
    assert!(Coordinate::from_index(-1).is_invalid());
    assert!(Coordinate::from_index(64).is_invalid());
}

#[test]
fn test_accessors_report_minus_one_when_invalid() {
    let bad = Coordinate::INVALID;
    assert_eq!(bad.col(), -1);
    assert_eq!(bad.row(), -1);
    assert_eq!(bad.to_index(), -1);
    assert_eq!(bad.checked_index(), None);
    assert_eq!(bad.to_text(), "--");
}

#[test]
fn test_both_sentinels_are_invalid() {
    assert!(Coordinate::INVALID.is_invalid());
    assert!(Coordinate::OUT_OF_RANGE.is_invalid());
    assert_eq!(Coordinate::INVALID.raw(), 0x99);
    assert_eq!(Coordinate::OUT_OF_RANGE.raw(), 0xFF);
    assert_eq!(Coordinate::default(), Coordinate::INVALID);
}

#[test]
fn test_offset_off_the_board() {
    let a4 = Coordinate::from_text("a4");
    assert!(a4.offset_by(Delta::new(0, -1)).is_invalid());

    let c8 = Coordinate::from_text("c8");
    assert!(c8.offset_by(Delta::new(1, 0)).is_invalid());
}

#[test]
fn test_offset_does_not_mutate() {
    let d4 = Coordinate::from_text("d4");
    let e6 = d4.offset_by(Delta::new(2, 1));
    assert_eq!(e6.to_text(), "e6");
    assert_eq!(d4.to_text(), "d4");
}

#[test]
fn test_unit_deltas() {
    let d4 = Coordinate::from_text("d4");
    assert_eq!((d4 + ADD_R).to_text(), "d5");
    assert_eq!((d4 + SUB_R).to_text(), "d3");
    assert_eq!((d4 + ADD_C).to_text(), "e4");
    assert_eq!((d4 + SUB_C).to_text(), "c4");

    let mut walker = d4;
    walker += ADD_R;
    walker += ADD_C;
    assert_eq!(walker.to_text(), "e5");
}

#[test]
fn test_offset_of_invalid_stays_invalid() {
    // (-1, -1) + (1, 1) would land on a1 if the sentinel were used as numbers
    assert!(Coordinate::INVALID.offset_by(Delta::new(1, 1)).is_invalid());
}

#[test]
fn test_adjust_row_and_col() {
    let mut coord = Coordinate::from_text("b2");
    coord.adjust_row(3);
    assert_eq!(coord.to_text(), "b5");
    coord.adjust_col(-1);
    assert_eq!(coord.to_text(), "a5");

    coord.adjust_col(-1);
    assert!(coord.is_invalid());
    assert_eq!(coord.raw(), 0x99);

    let mut top = Coordinate::from_text("h8");
    top.adjust_row(1);
    assert!(top.is_invalid());
    assert_eq!(top.raw(), 0xFF);

    top.adjust_row(-1);
    assert!(top.is_invalid());
}

#[test]
fn test_ordering_is_column_major() {
    let a8 = Coordinate::from_text("a8");
    let b1 = Coordinate::from_text("b1");
    let a1 = Coordinate::from_text("a1");
    assert!(a8 < b1);
    assert!(a1 < a8);

    let mut squares = vec![b1, a8, a1];
    squares.sort();
    assert_eq!(squares, vec![a1, a8, b1]);
}

#[test]
fn test_to_pixel() {
    let scale = PixelScale::new(32.0, 40.0).unwrap();
    let c2 = Coordinate::from_text("c2");
    assert_eq!(c2.to_pixel(&scale), Some((64.0, 40.0)));
    assert_eq!(Coordinate::INVALID.to_pixel(&scale), None);
}

#[test]
fn test_from_pixel() {
    let scale = PixelScale::default();
    assert_eq!(Coordinate::from_pixel(65.0, 33.0, &scale).to_text(), "c2");
    assert_eq!(Coordinate::from_pixel(0.0, 0.0, &scale).to_text(), "a1");
    assert!(Coordinate::from_pixel(-0.5, 10.0, &scale).is_invalid());
    assert!(Coordinate::from_pixel(256.0, 10.0, &scale).is_invalid());
    assert!(Coordinate::from_pixel(f64::NAN, 10.0, &scale).is_invalid());
}

#[test]
fn test_pixel_scale_rejects_non_positive() {
    assert!(PixelScale::new(0.0, 32.0).is_err());
    assert!(PixelScale::new(32.0, -1.0).is_err());
    assert!(PixelScale::square(f64::INFINITY).is_err());
    assert_eq!(PixelScale::square(16.0).unwrap().square_height(), 16.0);
}

#[test]
fn test_strict_conversions() {
    assert_eq!("e4".parse::<Coordinate>(), Ok(Coordinate::new(4, 3)));
    assert_eq!(
        "e9".parse::<Coordinate>(),
        Err(SquareError::InvalidNotation {
            notation: "e9".to_string()
        })
    );
    assert_eq!(Coordinate::try_from((7usize, 0usize)), Ok(Coordinate::new(7, 0)));
    assert_eq!(
        Coordinate::try_from((8usize, 0usize)),
        Err(SquareError::ColOutOfBounds { col: 8 })
    );
    assert_eq!(
        Coordinate::try_from((0usize, 9usize)),
        Err(SquareError::RowOutOfBounds { row: 9 })
    );
    assert_eq!(Coordinate::try_from(63usize), Ok(Coordinate::new(7, 7)));
    assert_eq!(
        Coordinate::try_from(64usize),
        Err(SquareError::IndexOutOfBounds { index: 64 })
    );
}

#[test]
fn test_random_coordinates_are_valid() {
    use rand::prelude::*;

    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..200 {
        let coord: Coordinate = rng.gen();
        assert!(coord.is_valid());
    }
}
