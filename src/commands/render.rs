//! CLI output formatting and display helpers.

use chrono::{DateTime, Utc};

use streamcatch_core::DownloadRecord;

/// Message when the history view has nothing to show.
pub const NO_DOWNLOADS_GUIDANCE: &str = "No downloads found";

/// Message when no download is currently running or paused.
pub const NO_ACTIVE_GUIDANCE: &str =
    "No active downloads. Start one with 'streamcatch grab <url>'.";

/// Returns terminal width from COLUMNS, or 80 if unset/invalid.
pub fn terminal_width() -> usize {
    std::env::var("COLUMNS")
        .ok()
        .and_then(|value| value.parse::<usize>().ok())
        .filter(|width| *width >= 20)
        .unwrap_or(80)
}

/// Truncates text to at most `width` chars, appending ellipsis if truncated.
pub fn truncate_to_width(text: &str, width: usize) -> String {
    let text_len = text.chars().count();
    if text_len <= width {
        return text.to_string();
    }
    if width == 0 {
        return String::new();
    }
    if width == 1 {
        return "…".to_string();
    }

    let mut output: String = text.chars().take(width - 1).collect();
    output.push('…');
    output
}

/// Formats a byte count as a human-readable size with two decimals.
///
/// Missing and zero sizes both read as unknown.
pub fn format_file_size(bytes: Option<i64>) -> String {
    const UNITS: [&str; 4] = ["B", "KB", "MB", "GB"];

    let Some(bytes) = bytes.filter(|b| *b > 0) else {
        return "Unknown size".to_string();
    };

    let mut size = bytes as f64;
    let mut unit = 0;
    while size >= 1024.0 && unit < UNITS.len() - 1 {
        size /= 1024.0;
        unit += 1;
    }
    format!("{size:.2} {}", UNITS[unit])
}

/// Formats a duration in seconds as "2h 0s" style, dropping zero components
/// except the trailing seconds.
pub fn format_duration(seconds: Option<i64>) -> String {
    let Some(seconds) = seconds.filter(|s| *s > 0) else {
        return "Unknown duration".to_string();
    };

    let hours = seconds / 3600;
    let minutes = (seconds % 3600) / 60;
    let remaining = seconds % 60;

    let mut parts = Vec::new();
    if hours > 0 {
        parts.push(format!("{hours}h"));
    }
    if minutes > 0 {
        parts.push(format!("{minutes}m"));
    }
    parts.push(format!("{remaining}s"));
    parts.join(" ")
}

/// Rough "how long ago" label for a stored RFC 3339 date.
///
/// Dates that fail to parse are shown verbatim.
pub fn age_label(date: &str, now: DateTime<Utc>) -> String {
    let Ok(parsed) = DateTime::parse_from_rfc3339(date) else {
        return date.to_string();
    };

    let elapsed = now.signed_duration_since(parsed.with_timezone(&Utc));
    let minutes = elapsed.num_minutes();
    if minutes < 1 {
        return "just now".to_string();
    }
    if minutes < 60 {
        return plural(minutes, "minute");
    }
    let hours = elapsed.num_hours();
    if hours < 24 {
        return plural(hours, "hour");
    }
    plural(elapsed.num_days(), "day")
}

fn plural(count: i64, unit: &str) -> String {
    if count == 1 {
        format!("1 {unit} ago")
    } else {
        format!("{count} {unit}s ago")
    }
}

/// Renders one record as an indented block, card style.
///
/// The first line carries id, status, and title; the URL and the fact row
/// follow. File size, duration, and quality only appear when stored, and a
/// progress line is added only when a percentage is given.
pub fn record_block(
    record: &DownloadRecord,
    progress: Option<u8>,
    now: DateTime<Utc>,
    width: usize,
) -> Vec<String> {
    let title = truncate_to_width(record.display_title(), width.saturating_sub(20));
    let mut lines = vec![format!(
        "#{:<5} {:<12} {title}",
        record.id,
        record.status.as_str()
    )];
    lines.push(format!("       {}", record.stream_url));

    let mut facts = vec![age_label(&record.download_date, now)];
    if record.file_size.is_some() {
        facts.push(format_file_size(record.file_size));
    }
    if record.duration.is_some() {
        facts.push(format_duration(record.duration));
    }
    if let Some(quality) = record.quality.as_deref() {
        facts.push(format!("Quality: {quality}"));
    }
    lines.push(format!("       {}", facts.join(" | ")));

    if let Some(progress) = progress {
        lines.push(format!("       progress: {progress}%"));
    }
    lines
}
