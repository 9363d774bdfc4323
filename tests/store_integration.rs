//! Integration tests for the download store.
//!
//! These tests verify record and settings operations against a real
//! SQLite database.

use streamcatch_core::store::DownloadStore;
use streamcatch_core::{Database, DownloadStatus, NewDownload, Settings, StoreError};
use tempfile::TempDir;

/// Helper to create a test database with migrations applied.
async fn setup_test_db() -> (Database, TempDir) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let db_path = temp_dir.path().join("test.db");

    let db = Database::new(&db_path)
        .await
        .expect("Failed to create database");

    (db, temp_dir)
}

fn new_download<'a>(url: &'a str, date: &'a str) -> NewDownload<'a> {
    NewDownload {
        stream_url: url,
        download_date: date,
        ..NewDownload::default()
    }
}

// ==================== Basic Operations ====================

#[tokio::test]
async fn test_insert_creates_downloading_record() {
    let (db, _temp_dir) = setup_test_db().await;
    let store = DownloadStore::new(db);

    let record = store
        .insert(&NewDownload {
            stream_url: "https://kick.com/alice",
            stream_title: Some("Weekend Gaming Stream"),
            download_date: "2025-01-10T12:00:00.000Z",
            thumbnail: Some("https://example.com/thumb.jpg"),
            quality: Some("1080p60"),
            duration: Some(7200),
        })
        .await
        .expect("Failed to insert");

    assert!(record.id > 0);
    assert_eq!(record.status, DownloadStatus::Downloading);
    assert_eq!(record.stream_url, "https://kick.com/alice");
    assert_eq!(record.stream_title.as_deref(), Some("Weekend Gaming Stream"));
    assert_eq!(record.quality.as_deref(), Some("1080p60"));
    assert_eq!(record.duration, Some(7200));
    assert!(record.file_path.is_none());
    assert!(record.file_size.is_none());
}

#[tokio::test]
async fn test_get_unknown_id_returns_none() {
    let (db, _temp_dir) = setup_test_db().await;
    let store = DownloadStore::new(db);

    let found = store.get(4242).await.expect("Failed to query");
    assert!(found.is_none());
}

#[tokio::test]
async fn test_list_all_orders_newest_first() {
    let (db, _temp_dir) = setup_test_db().await;
    let store = DownloadStore::new(db);

    store
        .insert(&new_download(
            "https://kick.com/old",
            "2025-01-08T09:00:00.000Z",
        ))
        .await
        .expect("Failed to insert");
    store
        .insert(&new_download(
            "https://kick.com/newest",
            "2025-01-10T12:00:00.000Z",
        ))
        .await
        .expect("Failed to insert");
    store
        .insert(&new_download(
            "https://kick.com/middle",
            "2025-01-09T18:30:00.000Z",
        ))
        .await
        .expect("Failed to insert");

    let records = store.list_all().await.expect("Failed to list");
    let urls: Vec<&str> = records.iter().map(|r| r.stream_url.as_str()).collect();
    assert_eq!(
        urls,
        vec![
            "https://kick.com/newest",
            "https://kick.com/middle",
            "https://kick.com/old"
        ]
    );
}

#[tokio::test]
async fn test_list_all_breaks_date_ties_by_id() {
    let (db, _temp_dir) = setup_test_db().await;
    let store = DownloadStore::new(db);

    let first = store
        .insert(&new_download(
            "https://kick.com/first",
            "2025-01-10T12:00:00.000Z",
        ))
        .await
        .expect("Failed to insert");
    let second = store
        .insert(&new_download(
            "https://kick.com/second",
            "2025-01-10T12:00:00.000Z",
        ))
        .await
        .expect("Failed to insert");

    let records = store.list_all().await.expect("Failed to list");
    assert_eq!(records[0].id, second.id);
    assert_eq!(records[1].id, first.id);
}

// ==================== Status Views ====================

#[tokio::test]
async fn test_list_active_keeps_downloading_and_paused_only() {
    let (db, _temp_dir) = setup_test_db().await;
    let store = DownloadStore::new(db);

    let running = store
        .insert(&new_download(
            "https://kick.com/running",
            "2025-01-10T12:00:04.000Z",
        ))
        .await
        .expect("Failed to insert");
    let paused = store
        .insert(&new_download(
            "https://kick.com/paused",
            "2025-01-10T12:00:03.000Z",
        ))
        .await
        .expect("Failed to insert");
    let done = store
        .insert(&new_download(
            "https://kick.com/done",
            "2025-01-10T12:00:02.000Z",
        ))
        .await
        .expect("Failed to insert");
    let gone = store
        .insert(&new_download(
            "https://kick.com/gone",
            "2025-01-10T12:00:01.000Z",
        ))
        .await
        .expect("Failed to insert");

    store
        .update_status(paused.id, DownloadStatus::Paused)
        .await
        .expect("Failed to pause");
    store
        .update_status(done.id, DownloadStatus::Completed)
        .await
        .expect("Failed to complete");
    store
        .update_status(gone.id, DownloadStatus::Cancelled)
        .await
        .expect("Failed to cancel");

    let active = store.list_active().await.expect("Failed to list active");
    let ids: Vec<i64> = active.iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![running.id, paused.id]);
}

#[tokio::test]
async fn test_list_by_status_filters_exactly() {
    let (db, _temp_dir) = setup_test_db().await;
    let store = DownloadStore::new(db);

    let a = store
        .insert(&new_download(
            "https://kick.com/a",
            "2025-01-10T12:00:02.000Z",
        ))
        .await
        .expect("Failed to insert");
    let b = store
        .insert(&new_download(
            "https://kick.com/b",
            "2025-01-10T12:00:01.000Z",
        ))
        .await
        .expect("Failed to insert");
    store
        .update_status(b.id, DownloadStatus::Failed)
        .await
        .expect("Failed to update");

    let failed = store
        .list_by_status(DownloadStatus::Failed)
        .await
        .expect("Failed to list");
    assert_eq!(failed.len(), 1);
    assert_eq!(failed[0].id, b.id);

    let downloading = store
        .list_by_status(DownloadStatus::Downloading)
        .await
        .expect("Failed to list");
    assert_eq!(downloading.len(), 1);
    assert_eq!(downloading[0].id, a.id);
}

#[tokio::test]
async fn test_count_by_status_tracks_updates() {
    let (db, _temp_dir) = setup_test_db().await;
    let store = DownloadStore::new(db);

    for i in 0..3 {
        store
            .insert(&new_download(
                "https://kick.com/alice",
                &format!("2025-01-10T12:00:0{i}.000Z"),
            ))
            .await
            .expect("Failed to insert");
    }
    store
        .update_status(1, DownloadStatus::Completed)
        .await
        .expect("Failed to update");

    let downloading = store
        .count_by_status(DownloadStatus::Downloading)
        .await
        .expect("Failed to count");
    let completed = store
        .count_by_status(DownloadStatus::Completed)
        .await
        .expect("Failed to count");
    let failed = store
        .count_by_status(DownloadStatus::Failed)
        .await
        .expect("Failed to count");

    assert_eq!(downloading, 2);
    assert_eq!(completed, 1);
    assert_eq!(failed, 0);
}

// ==================== Updates ====================

#[tokio::test]
async fn test_update_status_returns_refreshed_row() {
    let (db, _temp_dir) = setup_test_db().await;
    let store = DownloadStore::new(db);

    let record = store
        .insert(&new_download(
            "https://kick.com/alice",
            "2025-01-10T12:00:00.000Z",
        ))
        .await
        .expect("Failed to insert");

    let updated = store
        .update_status(record.id, DownloadStatus::Paused)
        .await
        .expect("Failed to update");

    assert_eq!(updated.id, record.id);
    assert_eq!(updated.status, DownloadStatus::Paused);
    assert_eq!(updated.stream_url, record.stream_url);
    assert_eq!(updated.download_date, record.download_date);
}

#[tokio::test]
async fn test_update_status_unknown_id_is_record_not_found() {
    let (db, _temp_dir) = setup_test_db().await;
    let store = DownloadStore::new(db);

    let result = store.update_status(99, DownloadStatus::Paused).await;
    match result {
        Err(StoreError::RecordNotFound(id)) => assert_eq!(id, 99),
        other => panic!("expected RecordNotFound, got {other:?}"),
    }
}

#[tokio::test]
async fn test_complete_with_file_stores_outcome() {
    let (db, _temp_dir) = setup_test_db().await;
    let store = DownloadStore::new(db);

    let record = store
        .insert(&new_download(
            "https://kick.com/alice",
            "2025-01-10T12:00:00.000Z",
        ))
        .await
        .expect("Failed to insert");

    let done = store
        .complete_with_file(record.id, Some("./downloads/alice.mp4"), Some(1_048_576))
        .await
        .expect("Failed to complete");

    assert_eq!(done.status, DownloadStatus::Completed);
    assert_eq!(done.file_path.as_deref(), Some("./downloads/alice.mp4"));
    assert_eq!(done.file_size, Some(1_048_576));
}

#[tokio::test]
async fn test_complete_with_file_none_preserves_stored_fields() {
    let (db, _temp_dir) = setup_test_db().await;
    let store = DownloadStore::new(db);

    let record = store
        .insert(&new_download(
            "https://kick.com/alice",
            "2025-01-10T12:00:00.000Z",
        ))
        .await
        .expect("Failed to insert");
    store
        .complete_with_file(record.id, Some("./downloads/alice.mp4"), Some(2048))
        .await
        .expect("Failed to complete");

    // A second write with no outcome must not blank the stored file fields
    let again = store
        .complete_with_file(record.id, None, None)
        .await
        .expect("Failed to re-complete");
    assert_eq!(again.file_path.as_deref(), Some("./downloads/alice.mp4"));
    assert_eq!(again.file_size, Some(2048));
}

// ==================== Persistence Across Reopen ====================

#[tokio::test]
async fn test_records_survive_reopening_the_database() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let db_path = temp_dir.path().join("library.db");

    {
        let db = Database::new(&db_path)
            .await
            .expect("Failed to create database");
        let store = DownloadStore::new(db);
        store
            .insert(&NewDownload {
                stream_url: "https://kick.com/alice",
                stream_title: Some("Weekend Gaming Stream"),
                download_date: "2025-01-10T12:00:00.000Z",
                ..NewDownload::default()
            })
            .await
            .expect("Failed to insert");
    }

    let db = Database::new(&db_path)
        .await
        .expect("Failed to reopen database");
    let store = DownloadStore::new(db);

    let records = store.list_all().await.expect("Failed to list");
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].stream_url, "https://kick.com/alice");
    assert_eq!(records[0].status, DownloadStatus::Downloading);
}

#[tokio::test]
async fn test_settings_survive_reopening_the_database() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let db_path = temp_dir.path().join("library.db");

    {
        let db = Database::new(&db_path)
            .await
            .expect("Failed to create database");
        let store = DownloadStore::new(db);
        store
            .update_settings(&Settings {
                default_quality: "720p".to_string(),
                notify_on_complete: false,
                ..Settings::default()
            })
            .await
            .expect("Failed to save settings");
    }

    let db = Database::new(&db_path)
        .await
        .expect("Failed to reopen database");
    let store = DownloadStore::new(db);

    let settings = store.settings().await.expect("Failed to read settings");
    assert_eq!(settings.default_quality, "720p");
    assert!(!settings.notify_on_complete);
    assert_eq!(settings.download_path, "./downloads");
}
