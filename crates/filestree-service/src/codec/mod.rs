//! Conversion between entries and the flat row table.

pub mod rows;

pub use rows::{decode_row, decode_rows, encode_entries, encode_entry};
