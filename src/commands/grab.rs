//! Grab command handler: validate the URL, probe the stream, start tracking.

use std::time::Duration;

use anyhow::Result;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::debug;

use streamcatch_core::{
    DownloadEvent, MockProber, Notifier, StreamProber, StreamUrl, SubmitRequest,
};

use super::context::AppContext;
use super::render::{format_duration, terminal_width, truncate_to_width};
use crate::cli::GrabArgs;

pub async fn run_grab_command(ctx: &AppContext, args: &GrabArgs) -> Result<()> {
    let url = StreamUrl::parse(&args.url)?;
    debug!(channel = url.channel(), "stream URL accepted");

    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::with_template("{spinner} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    spinner.enable_steady_tick(Duration::from_millis(100));
    spinner.set_message(format!(
        "Fetching stream information for {}...",
        url.channel()
    ));

    let prober = MockProber::new(ctx.clock.clone());
    let probed = prober.probe(&url).await;
    spinner.finish_and_clear();
    let metadata = probed?;

    let width = terminal_width();
    println!("{}", truncate_to_width(&metadata.title, width));
    println!("channel = {}", metadata.channel);
    println!(
        "duration = {}",
        format_duration(Some(metadata.duration_secs))
    );
    println!("live = {}", if metadata.is_live { "yes" } else { "no" });
    println!("qualities = {}", metadata.qualities.join(", "));

    // Same default the quality picker lands on: best offered label
    let quality = args
        .quality
        .as_deref()
        .unwrap_or_else(|| metadata.best_quality().unwrap_or("best"));

    let record = ctx
        .controller
        .submit(&SubmitRequest {
            url: &url,
            metadata: Some(&metadata),
            quality: Some(quality),
        })
        .await?;

    ctx.notifier.notify(&DownloadEvent::Started {
        title: record.display_title(),
    });
    println!("Saved as download #{} at quality {quality}", record.id);

    Ok(())
}
