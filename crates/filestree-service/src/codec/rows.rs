//! Row codec.
//!
//! Row layout: `[id, parent-id-or-empty, type-code, name]`. Decoding is
//! lenient: a row whose id does not parse is dropped, an unparsable parent
//! means root, and missing trailing cells read as empty strings (the
//! remote may trim trailing blanks). Identifiers must be in the hyphenated
//! form, either case; any other spelling counts as unparsable.

use tracing::debug;

use filestree_core::types::EntryId;
use filestree_core::types::row::Row;
use filestree_entity::{Entry, EntryType};

const ID: usize = 0;
const PARENT: usize = 1;
const TYPE: usize = 2;
const NAME: usize = 3;

fn cell(row: &Row, index: usize) -> &str {
    row.get(index).map(String::as_str).unwrap_or("")
}

/// Decode one row, or `None` if its id cell is not an identifier.
pub fn decode_row(row: &Row) -> Option<Entry> {
    let id = cell(row, ID).parse::<EntryId>().ok()?;
    let parent_id = cell(row, PARENT).parse::<EntryId>().ok();
    let entry_type = EntryType::from_code(cell(row, TYPE));
    Some(Entry::new(id, parent_id, entry_type, cell(row, NAME)))
}

/// Decode a table into entries, in row order.
///
/// The empty-table sentinel (one row with zero cells) and any other row
/// without a valid id produce nothing.
pub fn decode_rows(rows: &[Row]) -> Vec<Entry> {
    let mut entries = Vec::with_capacity(rows.len());
    for (index, row) in rows.iter().enumerate() {
        match decode_row(row) {
            Some(entry) => entries.push(entry),
            None if row.is_empty() => {}
            None => debug!(row = index, cell = cell(row, ID), "Skipping row without a valid id"),
        }
    }
    entries
}

/// Encode one entry as a row.
pub fn encode_entry(entry: &Entry) -> Row {
    vec![
        entry.id.to_string(),
        entry.parent_id.map(|p| p.to_string()).unwrap_or_default(),
        entry.entry_type.code().to_string(),
        entry.name.clone(),
    ]
}

/// Encode entries as a table, one row per entry in input order.
///
/// No entries encode to no rows; writing that table clears the remote.
pub fn encode_entries(entries: &[Entry]) -> Vec<Row> {
    entries.iter().map(encode_entry).collect()
}
