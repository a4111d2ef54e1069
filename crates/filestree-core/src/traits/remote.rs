//! Remote row-store trait for pluggable table backends.

use async_trait::async_trait;

use crate::result::AppResult;
use crate::types::row::Row;

/// Trait for the remote flat-row table the entry store is synchronized with.
///
/// Implementations live in `filestree-storage`. Both calls are full-table
/// operations: there is no partial read or partial update.
#[async_trait]
pub trait RowRemote: Send + Sync + std::fmt::Debug + 'static {
    /// Return the provider type name (e.g., "local", "memory").
    fn provider_type(&self) -> &str;

    /// Fetch the whole row table.
    ///
    /// An empty table is returned as a single row with zero cells.
    async fn fetch_rows(&self) -> AppResult<Vec<Row>>;

    /// Replace the whole row table: clear, then set `rows`.
    async fn write_rows(&self, rows: Vec<Row>) -> AppResult<()>;
}
