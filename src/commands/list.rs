//! List command handler: show active downloads with simulated progress.

use anyhow::Result;

use streamcatch_core::{DownloadStatus, ProgressSource, RandomProgress};

use super::context::AppContext;
use super::render::{self, record_block, terminal_width};

pub async fn run_list_command(ctx: &AppContext) -> Result<()> {
    let records = ctx.store.list_active().await?;
    if records.is_empty() {
        println!("{}", render::NO_ACTIVE_GUIDANCE);
        return Ok(());
    }

    // No transfer actually runs, so running rows show a sampled percentage
    let progress = RandomProgress;
    let now = ctx.clock.now();
    let width = terminal_width();

    for record in &records {
        let percent = (record.status == DownloadStatus::Downloading).then(|| progress.sample());
        for line in record_block(record, percent, now, width) {
            println!("{line}");
        }
    }

    Ok(())
}
