//! In-memory row provider.
//!
//! Holds the table in process memory. Besides serving sessions that do not
//! want a file, it records every write and can be told to fail or stall,
//! which is what the sync tests observe.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::debug;

use filestree_core::error::AppError;
use filestree_core::result::AppResult;
use filestree_core::traits::remote::RowRemote;
use filestree_core::types::row::{Row, empty_table, is_empty_table};

/// Process-local row table.
#[derive(Debug, Default)]
pub struct MemoryRowRemote {
    /// Current table contents.
    rows: RwLock<Vec<Row>>,
    /// Every table passed to `write_rows`, oldest first.
    writes: RwLock<Vec<Vec<Row>>>,
    /// Number of `fetch_rows` calls.
    fetches: AtomicUsize,
    /// Calls currently inside `fetch_rows` or `write_rows`.
    in_flight: AtomicUsize,
    /// Highest value `in_flight` has reached.
    max_in_flight: AtomicUsize,
    /// Fail the next fetch.
    fail_fetch: AtomicBool,
    /// Fail every write while set.
    fail_writes: AtomicBool,
    /// Artificial latency applied to each call.
    latency: Option<Duration>,
}

impl MemoryRowRemote {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a table pre-filled with `rows`.
    pub fn with_rows(rows: Vec<Row>) -> Self {
        Self {
            rows: RwLock::new(rows),
            ..Self::default()
        }
    }

    /// Delay every fetch and write by `latency`.
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = Some(latency);
        self
    }

    /// Make the next `fetch_rows` call fail.
    pub fn fail_next_fetch(&self) {
        self.fail_fetch.store(true, Ordering::SeqCst);
    }

    /// Make `write_rows` fail until switched off again.
    pub fn set_fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    /// Current table contents.
    pub async fn rows(&self) -> Vec<Row> {
        self.rows.read().await.clone()
    }

    /// Every table written so far, oldest first.
    pub async fn writes(&self) -> Vec<Vec<Row>> {
        self.writes.read().await.clone()
    }

    /// Number of `write_rows` calls, failed ones included.
    pub async fn write_count(&self) -> usize {
        self.writes.read().await.len()
    }

    /// Number of `fetch_rows` calls.
    pub fn fetch_count(&self) -> usize {
        self.fetches.load(Ordering::SeqCst)
    }

    /// Highest number of calls that were ever running at once.
    pub fn max_in_flight(&self) -> usize {
        self.max_in_flight.load(Ordering::SeqCst)
    }

    async fn enter(&self) {
        let now = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.max_in_flight.fetch_max(now, Ordering::SeqCst);
        if let Some(latency) = self.latency {
            tokio::time::sleep(latency).await;
        }
    }

    fn leave(&self) {
        self.in_flight.fetch_sub(1, Ordering::SeqCst);
    }
}

#[async_trait]
impl RowRemote for MemoryRowRemote {
    fn provider_type(&self) -> &str {
        "memory"
    }

    async fn fetch_rows(&self) -> AppResult<Vec<Row>> {
        self.fetches.fetch_add(1, Ordering::SeqCst);
        self.enter().await;
        let result = if self.fail_fetch.swap(false, Ordering::SeqCst) {
            Err(AppError::remote_fetch("Memory table fetch failed"))
        } else {
            let rows = self.rows.read().await;
            if is_empty_table(&rows) {
                Ok(empty_table())
            } else {
                Ok(rows.clone())
            }
        };
        self.leave();
        result
    }

    async fn write_rows(&self, rows: Vec<Row>) -> AppResult<()> {
        self.enter().await;
        self.writes.write().await.push(rows.clone());
        let result = if self.fail_writes.load(Ordering::SeqCst) {
            Err(AppError::remote_write("Memory table write failed"))
        } else {
            debug!(rows = rows.len(), "Replaced memory table");
            *self.rows.write().await = rows;
            Ok(())
        };
        self.leave();
        result
    }
}
