//! Flat row representation exchanged with the remote row store.
//!
//! A row is four string cells: `[id, parent-id-or-empty, type-code, name]`.
//! A table with no entries travels as a single row with zero cells.

/// One flat record of the remote table.
pub type Row = Vec<String>;

/// The table shape used to represent "no entries" on the wire.
pub fn empty_table() -> Vec<Row> {
    vec![Row::new()]
}

/// Returns `true` if every row in the table is empty.
pub fn is_empty_table(rows: &[Row]) -> bool {
    rows.iter().all(|row| row.is_empty())
}
