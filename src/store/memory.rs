//! In-memory download repository.
//!
//! Backs the same [`DownloadRepository`] contract as the `SQLite` store with
//! a plain table behind a mutex. Used by tests and ephemeral runs where no
//! library file should be written.

use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;

use super::{DownloadRecord, DownloadRepository, DownloadStatus, NewDownload, Result, StoreError};

#[derive(Debug, Default)]
struct MemoryInner {
    next_id: i64,
    records: Vec<DownloadRecord>,
}

/// In-memory record table with auto-incremented integer ids.
///
/// Behavior matches [`DownloadStore`](super::DownloadStore) exactly: ids
/// start at 1, new records begin `downloading`, and listings come back
/// newest submission first.
#[derive(Debug, Default)]
pub struct MemoryStore {
    inner: Mutex<MemoryInner>,
}

impl MemoryStore {
    /// Creates an empty in-memory store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<MutexGuard<'_, MemoryInner>> {
        self.inner
            .lock()
            .map_err(|_| StoreError::Database("memory store lock poisoned".to_string()))
    }
}

/// Newest submission first: `download_date` descending, ties broken by id descending.
fn sort_newest_first(records: &mut [DownloadRecord]) {
    records.sort_by(|a, b| {
        b.download_date
            .cmp(&a.download_date)
            .then(b.id.cmp(&a.id))
    });
}

#[async_trait]
impl DownloadRepository for MemoryStore {
    async fn insert(&self, new: &NewDownload<'_>) -> Result<DownloadRecord> {
        let mut inner = self.lock()?;
        inner.next_id += 1;

        let record = DownloadRecord {
            id: inner.next_id,
            stream_url: new.stream_url.to_string(),
            stream_title: new.stream_title.map(ToString::to_string),
            download_date: new.download_date.to_string(),
            file_size: None,
            file_path: None,
            status: DownloadStatus::Downloading,
            thumbnail: new.thumbnail.map(ToString::to_string),
            quality: new.quality.map(ToString::to_string),
            duration: new.duration,
        };

        inner.records.push(record.clone());
        Ok(record)
    }

    async fn get(&self, id: i64) -> Result<Option<DownloadRecord>> {
        let inner = self.lock()?;
        Ok(inner.records.iter().find(|r| r.id == id).cloned())
    }

    async fn list_all(&self) -> Result<Vec<DownloadRecord>> {
        let inner = self.lock()?;
        let mut records = inner.records.clone();
        sort_newest_first(&mut records);
        Ok(records)
    }

    async fn list_active(&self) -> Result<Vec<DownloadRecord>> {
        let inner = self.lock()?;
        let mut records: Vec<DownloadRecord> = inner
            .records
            .iter()
            .filter(|r| r.status.is_active())
            .cloned()
            .collect();
        sort_newest_first(&mut records);
        Ok(records)
    }

    async fn list_by_status(&self, status: DownloadStatus) -> Result<Vec<DownloadRecord>> {
        let inner = self.lock()?;
        let mut records: Vec<DownloadRecord> = inner
            .records
            .iter()
            .filter(|r| r.status == status)
            .cloned()
            .collect();
        sort_newest_first(&mut records);
        Ok(records)
    }

    async fn update_status(&self, id: i64, status: DownloadStatus) -> Result<DownloadRecord> {
        let mut inner = self.lock()?;
        let record = inner
            .records
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or(StoreError::RecordNotFound(id))?;

        record.status = status;
        Ok(record.clone())
    }

    async fn complete_with_file(
        &self,
        id: i64,
        file_path: Option<&str>,
        file_size: Option<i64>,
    ) -> Result<DownloadRecord> {
        let mut inner = self.lock()?;
        let record = inner
            .records
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or(StoreError::RecordNotFound(id))?;

        record.status = DownloadStatus::Completed;
        // None leaves the stored value untouched, matching the SQL COALESCE
        if let Some(path) = file_path {
            record.file_path = Some(path.to_string());
        }
        if let Some(size) = file_size {
            record.file_size = Some(size);
        }
        Ok(record.clone())
    }

    async fn count_by_status(&self, status: DownloadStatus) -> Result<i64> {
        let inner = self.lock()?;
        Ok(inner.records.iter().filter(|r| r.status == status).count() as i64)
    }
}
