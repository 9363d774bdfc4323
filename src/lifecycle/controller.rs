//! Download lifecycle controller.

use std::sync::Arc;

use thiserror::Error;
use tracing::{info, instrument};

use super::{LifecycleAction, TransitionError, next_status};
use crate::clock::Clock;
use crate::parser::StreamUrl;
use crate::probe::StreamMetadata;
use crate::store::{DownloadRecord, DownloadRepository, NewDownload, StoreError};

/// Result type for controller operations.
pub type Result<T> = std::result::Result<T, LifecycleError>;

/// Errors surfaced by lifecycle operations.
#[derive(Debug, Error)]
pub enum LifecycleError {
    /// No record exists with the requested id.
    #[error(
        "download record not found: id {0}\n  Suggestion: The record may have been removed or the ID is incorrect"
    )]
    RecordNotFound(i64),

    /// The record's current status does not accept the action.
    #[error(transparent)]
    Rejected(#[from] TransitionError),

    /// The chosen quality is not offered for the stream.
    #[error(
        "quality '{quality}' is not offered for this stream\n  Suggestion: Pick one of: {available}"
    )]
    QualityNotOffered {
        /// The quality label that was requested
        quality: String,
        /// Comma-separated list of offered labels
        available: String,
    },

    /// The record store failed.
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Everything needed to create a download record.
#[derive(Debug, Clone)]
pub struct SubmitRequest<'a> {
    /// The validated stream URL.
    pub url: &'a StreamUrl,
    /// Probe metadata, when a probe ran.
    pub metadata: Option<&'a StreamMetadata>,
    /// Requested quality label.
    pub quality: Option<&'a str>,
}

/// Saved-file details recorded at completion.
#[derive(Debug, Clone)]
pub struct FileOutcome<'a> {
    /// Path the file was saved to.
    pub path: &'a str,
    /// File size in bytes.
    pub size: Option<i64>,
}

/// Coordinates record creation and status transitions.
///
/// All record mutation funnels through here: [`submit`](Self::submit) creates
/// records, and every status change is validated by
/// [`next_status`] before anything touches the store. On a store failure
/// nothing is retried and nothing rolls back; the record keeps its last
/// stored status and the error surfaces to the caller.
pub struct LifecycleController {
    repo: Arc<dyn DownloadRepository>,
    clock: Arc<dyn Clock>,
}

impl LifecycleController {
    /// Creates a controller over the given repository and clock.
    #[must_use]
    pub fn new(repo: Arc<dyn DownloadRepository>, clock: Arc<dyn Clock>) -> Self {
        Self { repo, clock }
    }

    /// Creates a record for a submitted stream.
    ///
    /// Every download starts out `downloading`, stamped with the clock's
    /// current time. When both a quality and probe metadata are present, the
    /// quality must be one of the offered labels.
    ///
    /// # Errors
    ///
    /// Returns [`LifecycleError::QualityNotOffered`] when the requested
    /// quality is not in the probe's list, or [`LifecycleError::Store`] when
    /// the insert fails.
    #[instrument(skip(self, request), fields(url = %request.url))]
    pub async fn submit(&self, request: &SubmitRequest<'_>) -> Result<DownloadRecord> {
        if let Some(quality) = request.quality
            && let Some(metadata) = request.metadata
            && !metadata.offers_quality(quality)
        {
            return Err(LifecycleError::QualityNotOffered {
                quality: quality.to_string(),
                available: metadata.qualities.join(", "),
            });
        }

        let download_date = self.clock.timestamp();
        let new = NewDownload {
            stream_url: request.url.as_str(),
            stream_title: request.metadata.map(|m| m.title.as_str()),
            download_date: &download_date,
            thumbnail: request.metadata.map(|m| m.thumbnail.as_str()),
            quality: request.quality,
            duration: request.metadata.map(|m| m.duration_secs),
        };

        let record = self.repo.insert(&new).await?;
        info!(id = record.id, url = %record.stream_url, "download submitted");
        Ok(record)
    }

    /// Applies a lifecycle action to a record.
    ///
    /// The record is read, the transition is checked against the table, and
    /// only then is the status update issued; an illegal action never reaches
    /// the store. The returned record is the refreshed row as written.
    ///
    /// # Errors
    ///
    /// Returns [`LifecycleError::RecordNotFound`] for an unknown id,
    /// [`LifecycleError::Rejected`] when the current status does not accept
    /// the action, or [`LifecycleError::Store`] when the update fails.
    #[instrument(skip(self))]
    pub async fn apply(&self, id: i64, action: LifecycleAction) -> Result<DownloadRecord> {
        let record = self
            .repo
            .get(id)
            .await?
            .ok_or(LifecycleError::RecordNotFound(id))?;

        let next = next_status(record.status, action)?;
        let updated = self.repo.update_status(id, next).await?;
        info!(id, from = %record.status, to = %updated.status, "status changed");
        Ok(updated)
    }

    /// Halts an in-flight download.
    ///
    /// # Errors
    ///
    /// See [`apply`](Self::apply).
    pub async fn pause(&self, id: i64) -> Result<DownloadRecord> {
        self.apply(id, LifecycleAction::Pause).await
    }

    /// Picks a paused download back up.
    ///
    /// # Errors
    ///
    /// See [`apply`](Self::apply).
    pub async fn resume(&self, id: i64) -> Result<DownloadRecord> {
        self.apply(id, LifecycleAction::Resume).await
    }

    /// Abandons a download for good.
    ///
    /// # Errors
    ///
    /// See [`apply`](Self::apply).
    pub async fn cancel(&self, id: i64) -> Result<DownloadRecord> {
        self.apply(id, LifecycleAction::Cancel).await
    }

    /// Restarts a failed download from the top.
    ///
    /// # Errors
    ///
    /// See [`apply`](Self::apply).
    pub async fn retry(&self, id: i64) -> Result<DownloadRecord> {
        self.apply(id, LifecycleAction::Retry).await
    }

    /// Records a finished transfer, storing the file outcome when given.
    ///
    /// Without an outcome this is a pure status change; the record's file
    /// fields keep whatever they held.
    ///
    /// # Errors
    ///
    /// See [`apply`](Self::apply).
    #[instrument(skip(self, outcome))]
    pub async fn complete(
        &self,
        id: i64,
        outcome: Option<&FileOutcome<'_>>,
    ) -> Result<DownloadRecord> {
        let record = self
            .repo
            .get(id)
            .await?
            .ok_or(LifecycleError::RecordNotFound(id))?;

        next_status(record.status, LifecycleAction::Complete)?;

        let (path, size) = match outcome {
            Some(outcome) => (Some(outcome.path), outcome.size),
            None => (None, None),
        };
        let updated = self.repo.complete_with_file(id, path, size).await?;
        info!(id, from = %record.status, "download completed");
        Ok(updated)
    }

    /// Records a broken transfer.
    ///
    /// # Errors
    ///
    /// See [`apply`](Self::apply).
    pub async fn fail(&self, id: i64) -> Result<DownloadRecord> {
        self.apply(id, LifecycleAction::Fail).await
    }
}
