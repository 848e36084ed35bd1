//! Board module tests.
//!
//! Tests are organized into separate files by category:
//! - `coordinate.rs` - Packing, sentinels and conversions of coordinates
//! - `notation.rs` - Decoding and generating smith notation
//! - `edge_cases.rs` - Malformed input and option switches
//! - `proptest.rs` - Property-based tests

mod coordinate;
