//! Shared command context: the opened library and the services over it.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context as _, Result};
use tracing::debug;

use streamcatch_core::clock::Clock;
use streamcatch_core::{
    Database, DownloadStore, LifecycleController, SystemClock, TerminalNotifier,
};

/// Directory the library database lives in by default.
pub const DEFAULT_DB_DIR: &str = ".streamcatch";

/// Default library database file name.
pub const DEFAULT_DB_FILE: &str = "library.db";

/// Services shared by every command handler.
pub struct AppContext {
    pub store: Arc<DownloadStore>,
    pub controller: LifecycleController,
    pub clock: Arc<dyn Clock>,
    pub notifier: TerminalNotifier,
}

/// Opens (or creates) the download library and wires the services over it.
///
/// Without an explicit path the library lives at `.streamcatch/library.db`
/// under the current directory; missing parent directories are created.
pub async fn open_context(db: Option<&Path>) -> Result<AppContext> {
    let path = match db {
        Some(path) => path.to_path_buf(),
        None => PathBuf::from(DEFAULT_DB_DIR).join(DEFAULT_DB_FILE),
    };

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create {}", parent.display()))?;
    }

    debug!(path = %path.display(), "opening download library");
    let db = Database::new(&path).await?;
    let store = Arc::new(DownloadStore::new(db));
    let clock: Arc<dyn Clock> = Arc::new(SystemClock);
    let controller = LifecycleController::new(store.clone(), clock.clone());

    Ok(AppContext {
        store,
        controller,
        clock,
        notifier: TerminalNotifier,
    })
}
