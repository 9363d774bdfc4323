//! Settings command handlers: show and update stored preferences.

use anyhow::Result;

use streamcatch_core::Settings;

use super::context::AppContext;
use crate::cli::SettingsSetArgs;

fn print_settings(settings: &Settings) {
    println!("download_path = {}", settings.download_path);
    println!("default_quality = {}", settings.default_quality);
    println!("concurrent_downloads = {}", settings.concurrent_downloads);
    println!("notify_on_complete = {}", settings.notify_on_complete);
}

pub async fn run_settings_show_command(ctx: &AppContext) -> Result<()> {
    let settings = ctx.store.settings().await?;
    print_settings(&settings);
    Ok(())
}

/// Applies the given overrides on top of the stored settings, validates the
/// result, and persists it.
pub async fn run_settings_set_command(ctx: &AppContext, args: &SettingsSetArgs) -> Result<()> {
    let mut settings = ctx.store.settings().await?;

    if let Some(path) = &args.download_path {
        settings.download_path = path.clone();
    }
    if let Some(quality) = &args.quality {
        settings.default_quality = quality.clone();
    }
    if let Some(concurrent) = args.concurrent {
        settings.concurrent_downloads = concurrent;
    }
    if let Some(notify) = args.notify {
        settings.notify_on_complete = notify;
    }
    settings.validate()?;

    let saved = ctx.store.update_settings(&settings).await?;
    println!("Settings saved successfully");
    print_settings(&saved);

    Ok(())
}
