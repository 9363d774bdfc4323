//! CLI argument definitions using clap derive macros.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use streamcatch_core::StatusFilter;

/// Queue, track, and browse Kick stream downloads.
///
/// Streamcatch validates a stream URL, looks up what is behind it, and
/// tracks the download through pause, resume, cancel, retry, and
/// completion, with a searchable history of everything it ever grabbed.
#[derive(Parser, Debug)]
#[command(name = "streamcatch")]
#[command(author, version, about)]
pub struct Args {
    /// Increase output verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Path to the download library database (default: .streamcatch/library.db)
    #[arg(long, value_name = "PATH", global = true)]
    pub db: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Validate a stream URL, look up its metadata, and start a download
    Grab(GrabArgs),
    /// Show active downloads (downloading or paused)
    List,
    /// Browse the full download history
    History(HistoryArgs),
    /// Pause a running download
    Pause(IdArg),
    /// Resume a paused download
    Resume(IdArg),
    /// Cancel a running or paused download
    Cancel(IdArg),
    /// Restart a failed download
    Retry(IdArg),
    /// Mark a download as finished and record where its file landed
    Complete(CompleteArgs),
    /// Mark a download as failed
    Fail(IdArg),
    /// Show where a completed download's file would open
    Open(IdArg),
    /// Inspect or change stored settings
    Settings {
        #[command(subcommand)]
        command: SettingsCommand,
    },
}

#[derive(clap::Args, Debug)]
pub struct GrabArgs {
    /// Stream URL, e.g. https://kick.com/channelname
    pub url: String,

    /// Quality label to download (defaults to the best offered)
    #[arg(long, value_name = "LABEL")]
    pub quality: Option<String>,
}

#[derive(clap::Args, Debug)]
pub struct HistoryArgs {
    /// Only show downloads with this status
    /// (all, downloading, paused, completed, failed, cancelled)
    #[arg(long, default_value = "all")]
    pub status: StatusFilter,

    /// Case-insensitive search over stream titles and URLs
    #[arg(long, value_name = "TERM")]
    pub search: Option<String>,

    /// Print matching records as JSON instead of the table view
    #[arg(long)]
    pub json: bool,
}

#[derive(clap::Args, Debug)]
pub struct IdArg {
    /// Record id as shown by list and history
    pub id: i64,
}

#[derive(clap::Args, Debug)]
pub struct CompleteArgs {
    /// Record id as shown by list and history
    pub id: i64,

    /// Path the finished file was saved to
    #[arg(long, value_name = "PATH")]
    pub path: Option<String>,

    /// Size of the finished file in bytes
    #[arg(long, value_name = "BYTES", value_parser = clap::value_parser!(i64).range(0..), requires = "path")]
    pub size: Option<i64>,
}

#[derive(Subcommand, Debug)]
pub enum SettingsCommand {
    /// Print the stored settings
    Show,
    /// Update one or more settings
    Set(SettingsSetArgs),
}

#[derive(clap::Args, Debug)]
pub struct SettingsSetArgs {
    /// Directory downloaded files are written to
    #[arg(long, value_name = "DIR")]
    pub download_path: Option<String>,

    /// Preferred quality for new downloads (best, 1080p, 720p, 480p, 360p, worst)
    #[arg(long, value_name = "LABEL")]
    pub quality: Option<String>,

    /// How many downloads may run at once (1-5)
    #[arg(long, value_name = "N", value_parser = clap::value_parser!(i64).range(1..=5))]
    pub concurrent: Option<i64>,

    /// Whether finished downloads are announced (true or false)
    #[arg(long, value_name = "BOOL")]
    pub notify: Option<bool>,
}
