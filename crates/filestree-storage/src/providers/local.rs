//! Local JSON file row provider.
//!
//! The table is stored as a JSON array of string arrays. Writes go to a
//! sibling temp file first and are renamed over the table, so a reader
//! never sees a half-written table.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::fs;
use tracing::debug;

use filestree_core::error::{AppError, ErrorKind};
use filestree_core::result::AppResult;
use filestree_core::traits::remote::RowRemote;
use filestree_core::types::row::{Row, empty_table, is_empty_table};

/// Row table persisted in a local JSON file.
#[derive(Debug, Clone)]
pub struct LocalRowRemote {
    /// Path of the table file.
    path: PathBuf,
}

impl LocalRowRemote {
    /// Create a provider for the table at `path`, creating parent
    /// directories as needed. The file itself is created on first write.
    pub async fn new(path: impl AsRef<Path>) -> AppResult<Self> {
        let path = path.as_ref().to_path_buf();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).await.map_err(|e| {
                AppError::with_source(
                    ErrorKind::Storage,
                    format!("Failed to create table directory: {}", parent.display()),
                    e,
                )
            })?;
        }
        Ok(Self { path })
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

#[async_trait]
impl RowRemote for LocalRowRemote {
    fn provider_type(&self) -> &str {
        "local"
    }

    async fn fetch_rows(&self) -> AppResult<Vec<Row>> {
        let raw = match fs::read(&self.path).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "Table file missing, reading as empty");
                return Ok(empty_table());
            }
            Err(e) => {
                return Err(AppError::with_source(
                    ErrorKind::RemoteFetch,
                    format!("Failed to read table: {}", self.path.display()),
                    e,
                ));
            }
        };

        let rows: Vec<Row> = serde_json::from_slice(&raw).map_err(|e| {
            AppError::with_source(
                ErrorKind::RemoteFetch,
                format!("Table file is not a row array: {}", self.path.display()),
                e,
            )
        })?;

        debug!(path = %self.path.display(), rows = rows.len(), "Fetched rows");
        if is_empty_table(&rows) {
            return Ok(empty_table());
        }
        Ok(rows)
    }

    async fn write_rows(&self, rows: Vec<Row>) -> AppResult<()> {
        let body = serde_json::to_vec_pretty(&rows).map_err(|e| {
            AppError::with_source(ErrorKind::RemoteWrite, "Failed to encode row table", e)
        })?;

        let temp = self.temp_path();
        fs::write(&temp, body).await.map_err(|e| {
            AppError::with_source(
                ErrorKind::RemoteWrite,
                format!("Failed to write table: {}", temp.display()),
                e,
            )
        })?;
        fs::rename(&temp, &self.path).await.map_err(|e| {
            AppError::with_source(
                ErrorKind::RemoteWrite,
                format!("Failed to replace table: {}", self.path.display()),
                e,
            )
        })?;

        debug!(path = %self.path.display(), rows = rows.len(), "Wrote rows");
        Ok(())
    }
}
