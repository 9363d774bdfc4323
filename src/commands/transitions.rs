//! Status transition command handlers: pause, resume, cancel, retry,
//! complete, and fail.

use anyhow::Result;

use streamcatch_core::{DownloadEvent, FileOutcome, LifecycleAction, Notifier};

use super::context::AppContext;
use crate::cli::CompleteArgs;

/// Applies a lifecycle action to a record and announces the outcome.
pub async fn run_transition_command(
    ctx: &AppContext,
    id: i64,
    action: LifecycleAction,
) -> Result<()> {
    let record = ctx.controller.apply(id, action).await?;
    ctx.notifier
        .notify(&DownloadEvent::for_action(action, record.display_title()));
    Ok(())
}

/// Marks a download complete, recording where the file landed when given.
///
/// The completion announcement honors the stored notify_on_complete flag.
pub async fn run_complete_command(ctx: &AppContext, args: &CompleteArgs) -> Result<()> {
    let outcome = args.path.as_deref().map(|path| FileOutcome {
        path,
        size: args.size,
    });
    let record = ctx.controller.complete(args.id, outcome.as_ref()).await?;

    let settings = ctx.store.settings().await?;
    if settings.notify_on_complete {
        ctx.notifier.notify(&DownloadEvent::Completed {
            title: record.display_title(),
        });
    }

    Ok(())
}
