//! History command handler: browse and filter every recorded download.

use anyhow::Result;

use streamcatch_core::{
    DownloadStatus, FixedProgress, HistoryQuery, ProgressSource, filter_records,
};

use super::context::AppContext;
use super::render::{self, record_block, terminal_width};
use crate::cli::HistoryArgs;

/// Percentage shown for rows still downloading. History is a snapshot, so
/// there is no live transfer to sample; a fixed midway value stands in.
const HISTORY_PROGRESS_PLACEHOLDER: u8 = 45;

pub async fn run_history_command(ctx: &AppContext, args: &HistoryArgs) -> Result<()> {
    let records = ctx.store.list_all().await?;
    let query = HistoryQuery {
        status: args.status,
        search: args.search.clone(),
    };
    let hits = filter_records(&records, &query);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&hits)?);
        return Ok(());
    }

    if hits.is_empty() {
        println!("{}", render::NO_DOWNLOADS_GUIDANCE);
        return Ok(());
    }

    let placeholder = FixedProgress(HISTORY_PROGRESS_PLACEHOLDER);
    let now = ctx.clock.now();
    let width = terminal_width();

    for record in &hits {
        let percent =
            (record.status == DownloadStatus::Downloading).then(|| placeholder.sample());
        for line in record_block(record, percent, now, width) {
            println!("{line}");
        }
    }

    Ok(())
}
