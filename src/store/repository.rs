//! Repository seam for download record persistence.
//!
//! This trait keeps the concrete [`DownloadStore`] API intact while letting
//! higher-level orchestration (lifecycle controller, command flows) depend on
//! an abstract data access boundary. [`MemoryStore`](super::MemoryStore)
//! implements the same contract for tests and ephemeral runs.

use async_trait::async_trait;

use super::{DownloadRecord, DownloadStatus, DownloadStore, NewDownload, Result};

/// Data-access contract for download record operations.
#[async_trait]
pub trait DownloadRepository: Send + Sync {
    /// Creates a record with `downloading` status and returns it.
    async fn insert(&self, new: &NewDownload<'_>) -> Result<DownloadRecord>;

    /// Gets a record by ID.
    async fn get(&self, id: i64) -> Result<Option<DownloadRecord>>;

    /// Returns every record, newest submission first.
    async fn list_all(&self) -> Result<Vec<DownloadRecord>>;

    /// Returns records in `downloading` or `paused` status, newest first.
    async fn list_active(&self) -> Result<Vec<DownloadRecord>>;

    /// Returns records in a specific status, newest first.
    async fn list_by_status(&self, status: DownloadStatus) -> Result<Vec<DownloadRecord>>;

    /// Sets a record's status and returns the refreshed record.
    async fn update_status(&self, id: i64, status: DownloadStatus) -> Result<DownloadRecord>;

    /// Marks a record completed, storing the file outcome when given.
    async fn complete_with_file(
        &self,
        id: i64,
        file_path: Option<&str>,
        file_size: Option<i64>,
    ) -> Result<DownloadRecord>;

    /// Returns the count of records in a status.
    async fn count_by_status(&self, status: DownloadStatus) -> Result<i64>;
}

#[async_trait]
impl DownloadRepository for DownloadStore {
    async fn insert(&self, new: &NewDownload<'_>) -> Result<DownloadRecord> {
        DownloadStore::insert(self, new).await
    }

    async fn get(&self, id: i64) -> Result<Option<DownloadRecord>> {
        DownloadStore::get(self, id).await
    }

    async fn list_all(&self) -> Result<Vec<DownloadRecord>> {
        DownloadStore::list_all(self).await
    }

    async fn list_active(&self) -> Result<Vec<DownloadRecord>> {
        DownloadStore::list_active(self).await
    }

    async fn list_by_status(&self, status: DownloadStatus) -> Result<Vec<DownloadRecord>> {
        DownloadStore::list_by_status(self, status).await
    }

    async fn update_status(&self, id: i64, status: DownloadStatus) -> Result<DownloadRecord> {
        DownloadStore::update_status(self, id, status).await
    }

    async fn complete_with_file(
        &self,
        id: i64,
        file_path: Option<&str>,
        file_size: Option<i64>,
    ) -> Result<DownloadRecord> {
        DownloadStore::complete_with_file(self, id, file_path, file_size).await
    }

    async fn count_by_status(&self, status: DownloadStatus) -> Result<i64> {
        DownloadStore::count_by_status(self, status).await
    }
}
