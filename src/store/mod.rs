//! Record store for download persistence.
//!
//! This module provides `SQLite`-backed storage for download records as
//! they move through their lifecycle (downloading → paused/completed/failed/cancelled).
//!
//! # Overview
//!
//! The store consists of:
//! - [`DownloadStore`] - Main interface for record operations
//! - [`DownloadRecord`] - Individual download entry with stream metadata
//! - [`DownloadStatus`] - Record lifecycle states
//! - [`DownloadRepository`] - Trait seam for swapping the backing store
//! - [`MemoryStore`] - In-memory repository for tests and ephemeral runs
//! - [`StoreError`] - Operation error types
//!
//! # Example
//!
//! ```ignore
//! use streamcatch_core::store::{DownloadStore, DownloadStatus, NewDownload};
//! use streamcatch_core::Database;
//! use std::path::Path;
//!
//! let db = Database::new(Path::new("library.db")).await?;
//! let store = DownloadStore::new(db);
//!
//! // Create a record; every download starts out `downloading`
//! let record = store
//!     .insert(&NewDownload {
//!         stream_url: "https://kick.com/alice",
//!         download_date: "2025-01-10T12:00:00.000Z",
//!         ..NewDownload::default()
//!     })
//!     .await?;
//!
//! // Move it through its lifecycle
//! let paused = store.update_status(record.id, DownloadStatus::Paused).await?;
//! ```

mod error;
mod memory;
mod record;
mod repository;
mod settings;

pub use error::StoreError;
pub use memory::MemoryStore;
pub use record::{DownloadRecord, DownloadStatus, NewDownload, UNTITLED_STREAM};
pub use repository::DownloadRepository;
pub use settings::{
    CONCURRENT_DOWNLOADS_RANGE, DEFAULT_CONCURRENT_DOWNLOADS, DEFAULT_DOWNLOAD_PATH,
    DEFAULT_QUALITY, QUALITY_CHOICES, Settings, SettingsError,
};

use crate::db::Database;
use sqlx::Row;
use tracing::instrument;

/// Result type for store operations.
pub type Result<T> = std::result::Result<T, StoreError>;

/// Record store for downloads.
///
/// Provides atomic operations for managing download records backed by
/// `SQLite` with WAL mode for concurrent access. Reads of the settings
/// table live in [`settings`](self::settings) alongside the [`Settings`] type.
#[derive(Debug, Clone)]
pub struct DownloadStore {
    db: Database,
}

impl DownloadStore {
    /// Creates a new record store with the given database connection.
    #[must_use]
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    pub(crate) fn db(&self) -> &Database {
        &self.db
    }

    /// Creates a download record with `downloading` status.
    ///
    /// # Returns
    ///
    /// The freshly inserted record, id assigned by the database.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Database`] if the insert fails.
    #[instrument(skip(self, new), fields(url = %new.stream_url))]
    pub async fn insert(&self, new: &NewDownload<'_>) -> Result<DownloadRecord> {
        let record = sqlx::query_as::<_, DownloadRecord>(
            r"INSERT INTO downloads (
                stream_url,
                stream_title,
                download_date,
                status,
                thumbnail,
                quality,
                duration
              )
              VALUES (?, ?, ?, ?, ?, ?, ?)
              RETURNING *",
        )
        .bind(new.stream_url)
        .bind(new.stream_title)
        .bind(new.download_date)
        .bind(DownloadStatus::Downloading)
        .bind(new.thumbnail)
        .bind(new.quality)
        .bind(new.duration)
        .fetch_one(self.db.pool())
        .await?;

        Ok(record)
    }

    /// Gets a download record by ID.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Database`] if the query fails.
    #[instrument(skip(self))]
    pub async fn get(&self, id: i64) -> Result<Option<DownloadRecord>> {
        let record = sqlx::query_as::<_, DownloadRecord>(r"SELECT * FROM downloads WHERE id = ?")
            .bind(id)
            .fetch_optional(self.db.pool())
            .await?;

        Ok(record)
    }

    /// Lists every record, newest submission first.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Database`] if the query fails.
    #[instrument(skip(self))]
    pub async fn list_all(&self) -> Result<Vec<DownloadRecord>> {
        let records = sqlx::query_as::<_, DownloadRecord>(
            r"SELECT * FROM downloads ORDER BY download_date DESC, id DESC",
        )
        .fetch_all(self.db.pool())
        .await?;

        Ok(records)
    }

    /// Lists records with `downloading` or `paused` status, newest first.
    ///
    /// This is the active downloads view; completed, failed, and cancelled
    /// records only appear in history.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Database`] if the query fails.
    #[instrument(skip(self))]
    pub async fn list_active(&self) -> Result<Vec<DownloadRecord>> {
        let records = sqlx::query_as::<_, DownloadRecord>(
            r"SELECT * FROM downloads
              WHERE status IN (?, ?)
              ORDER BY download_date DESC, id DESC",
        )
        .bind(DownloadStatus::Downloading)
        .bind(DownloadStatus::Paused)
        .fetch_all(self.db.pool())
        .await?;

        Ok(records)
    }

    /// Lists records with a specific status, newest first.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Database`] if the query fails.
    #[instrument(skip(self))]
    pub async fn list_by_status(&self, status: DownloadStatus) -> Result<Vec<DownloadRecord>> {
        let records = sqlx::query_as::<_, DownloadRecord>(
            r"SELECT * FROM downloads
              WHERE status = ?
              ORDER BY download_date DESC, id DESC",
        )
        .bind(status)
        .fetch_all(self.db.pool())
        .await?;

        Ok(records)
    }

    /// Sets a record's status and returns the refreshed row.
    ///
    /// Status is the only field touched; everything else on the record
    /// survives the update unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::RecordNotFound`] if no record exists with the given ID.
    /// Returns [`StoreError::Database`] if the update fails.
    #[instrument(skip(self))]
    pub async fn update_status(&self, id: i64, status: DownloadStatus) -> Result<DownloadRecord> {
        // Atomic UPDATE...RETURNING so the caller sees exactly what was written
        let record = sqlx::query_as::<_, DownloadRecord>(
            r"UPDATE downloads
              SET status = ?
              WHERE id = ?
              RETURNING *",
        )
        .bind(status)
        .bind(id)
        .fetch_optional(self.db.pool())
        .await?;

        record.ok_or(StoreError::RecordNotFound(id))
    }

    /// Marks a record completed and stores the saved file outcome.
    ///
    /// Passing `None` for a file field leaves the stored value untouched,
    /// so a completion without outcome data is a pure status change.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::RecordNotFound`] if no record exists with the given ID.
    /// Returns [`StoreError::Database`] if the update fails.
    #[instrument(skip(self, file_path))]
    pub async fn complete_with_file(
        &self,
        id: i64,
        file_path: Option<&str>,
        file_size: Option<i64>,
    ) -> Result<DownloadRecord> {
        let record = sqlx::query_as::<_, DownloadRecord>(
            r"UPDATE downloads
              SET status = ?,
                  file_path = COALESCE(?, file_path),
                  file_size = COALESCE(?, file_size)
              WHERE id = ?
              RETURNING *",
        )
        .bind(DownloadStatus::Completed)
        .bind(file_path)
        .bind(file_size)
        .bind(id)
        .fetch_optional(self.db.pool())
        .await?;

        record.ok_or(StoreError::RecordNotFound(id))
    }

    /// Counts records by status.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Database`] if the query fails.
    #[instrument(skip(self))]
    pub async fn count_by_status(&self, status: DownloadStatus) -> Result<i64> {
        let result = sqlx::query(r"SELECT COUNT(*) as count FROM downloads WHERE status = ?")
            .bind(status)
            .fetch_one(self.db.pool())
            .await?;

        Ok(result.get("count"))
    }
}
