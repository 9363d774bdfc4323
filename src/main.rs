//! CLI entry point for the streamcatch tool.

use anyhow::Result;
use clap::Parser;
use tracing::{debug, info};

use streamcatch_core::LifecycleAction;

mod cli;
mod commands;

use cli::{Args, Command, SettingsCommand};

#[tokio::main]
async fn main() -> Result<()> {
    // Parse CLI arguments first (before tracing, so --help works without logs)
    let args = Args::parse();

    // Determine log level based on verbose/quiet flags
    // Priority: RUST_LOG env var > quiet flag > verbose flag > default (info)
    let default_level = if args.quiet {
        "error"
    } else {
        match args.verbose {
            0 => "info",
            1 => "debug",
            _ => "trace",
        }
    };

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level));

    tracing_subscriber::fmt().with_env_filter(filter).init();

    debug!(?args, "CLI arguments parsed");

    let Some(command) = args.command else {
        info!("No command provided. Try 'streamcatch grab <url>' to start a download.");
        info!("Example: streamcatch grab https://kick.com/channelname");
        return Ok(());
    };

    let ctx = commands::open_context(args.db.as_deref()).await?;

    match command {
        Command::Grab(grab) => commands::run_grab_command(&ctx, &grab).await?,
        Command::List => commands::run_list_command(&ctx).await?,
        Command::History(history) => commands::run_history_command(&ctx, &history).await?,
        Command::Pause(arg) => {
            commands::run_transition_command(&ctx, arg.id, LifecycleAction::Pause).await?;
        }
        Command::Resume(arg) => {
            commands::run_transition_command(&ctx, arg.id, LifecycleAction::Resume).await?;
        }
        Command::Cancel(arg) => {
            commands::run_transition_command(&ctx, arg.id, LifecycleAction::Cancel).await?;
        }
        Command::Retry(arg) => {
            commands::run_transition_command(&ctx, arg.id, LifecycleAction::Retry).await?;
        }
        Command::Complete(complete) => commands::run_complete_command(&ctx, &complete).await?,
        Command::Fail(arg) => {
            commands::run_transition_command(&ctx, arg.id, LifecycleAction::Fail).await?;
        }
        Command::Open(arg) => commands::run_open_command(&ctx, arg.id).await?,
        Command::Settings { command } => match command {
            SettingsCommand::Show => commands::run_settings_show_command(&ctx).await?,
            SettingsCommand::Set(set) => commands::run_settings_set_command(&ctx, &set).await?,
        },
    }

    Ok(())
}
