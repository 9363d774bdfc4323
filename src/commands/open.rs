//! Open command handler: reveal where a finished download landed.
//!
//! Nothing is launched; the handler reports the location it would open.

use anyhow::Result;

use streamcatch_core::{DownloadEvent, DownloadStatus, LifecycleError, Notifier};

use super::context::AppContext;

pub async fn run_open_command(ctx: &AppContext, id: i64) -> Result<()> {
    let record = ctx
        .store
        .get(id)
        .await?
        .ok_or(LifecycleError::RecordNotFound(id))?;

    if record.status != DownloadStatus::Completed {
        println!(
            "What: Cannot open download #{id}\nWhy: It is {} and only completed downloads have a finished file\nFix: Wait for it to complete, or mark it complete with a saved path.",
            record.status.as_str()
        );
        return Ok(());
    }

    let Some(path) = record.file_path.as_deref() else {
        println!(
            "What: Cannot open download #{id}\nWhy: The record has no saved file path\nFix: Re-run 'streamcatch complete {id} --path <file>' to record where the file landed."
        );
        return Ok(());
    };

    ctx.notifier.notify(&DownloadEvent::OpenLocation { path });
    Ok(())
}
