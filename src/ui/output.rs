//! Output formatting and display logic for xlsx-linkcheck

use serde_json::json;

use crate::config::Config;
use crate::core::constants::output_formats;
use crate::scan::{ScanOutcome, ScanSummary};
use crate::ui::color::{Colors, colorize, emphasize};
use crate::workbook::ColumnInfo;

/// Display configuration information in a user-friendly format
pub fn display_config_info(config: &Config) {
    let rows = [
        (
            "Using timeout (seconds)",
            config.timeout_duration().as_secs().to_string(),
        ),
        ("Max redirects", config.redirect_limit().to_string()),
        (
            "Pause poll interval (ms)",
            config.pause_poll_duration().as_millis().to_string(),
        ),
        ("User agent", config.user_agent_or_default().to_string()),
    ];

    for (label, value) in rows {
        println!(
            "{}: {}",
            emphasize(label, Colors::BRIGHT_CYAN),
            colorize(&value, Colors::BRIGHT_WHITE)
        );
    }
    if let Some(ref proxy) = config.proxy {
        println!(
            "{}: {}",
            emphasize("Proxy", Colors::BRIGHT_CYAN),
            colorize(proxy, Colors::BRIGHT_WHITE)
        );
    }
    if config.skip_ssl_verification.unwrap_or(false) {
        println!(
            "{}",
            colorize("SSL verification disabled", Colors::BRIGHT_YELLOW)
        );
    }
    println!();
}

pub fn render_sheets(sheets: &[String], output_format: &str) -> String {
    match output_format {
        output_formats::JSON => json!({ "sheets": sheets }).to_string(),
        _ => sheets.join("\n"),
    }
}

pub fn render_columns(columns: &[ColumnInfo], output_format: &str) -> String {
    match output_format {
        output_formats::JSON => json!({ "columns": columns }).to_string(),
        _ => columns
            .iter()
            .map(|c| format!("{:>4}  {}", c.index, c.label()))
            .collect::<Vec<_>>()
            .join("\n"),
    }
}

pub fn render_summary(summary: &ScanSummary, output_format: &str) -> String {
    match output_format {
        output_formats::JSON => render_json_summary(summary),
        _ => render_text_summary(summary),
    }
}

/// Print the final summary. Quiet text output keeps only failures.
pub fn display_summary(summary: &ScanSummary, output_format: &str, quiet: bool) {
    if quiet && output_format == output_formats::TEXT && summary.outcome != ScanOutcome::Failed {
        return;
    }
    println!("{}", render_summary(summary, output_format));
}

fn render_json_summary(summary: &ScanSummary) -> String {
    let elapsed_ms = (summary.finished_at - summary.started_at).num_milliseconds();
    json!({
        "outcome": summary.outcome,
        "file": summary.file_path,
        "sheet": summary.sheet,
        "column": summary.column,
        "status_column": summary.status_column,
        "saved": summary.saved(),
        "links": {
            "total": summary.progress.total,
            "processed": summary.progress.processed,
            "valid": summary.progress.valid,
            "invalid": summary.progress.invalid,
            "percent": summary.progress.percent,
        },
        "error": summary.error,
        "started_at": summary.started_at.to_rfc3339(),
        "elapsed_ms": elapsed_ms,
    })
    .to_string()
}

fn render_text_summary(summary: &ScanSummary) -> String {
    let progress = &summary.progress;
    let heading = match summary.outcome {
        ScanOutcome::Completed => format!(
            "{} {}",
            colorize("✅", Colors::BRIGHT_GREEN),
            emphasize("Scan complete", Colors::BRIGHT_GREEN)
        ),
        ScanOutcome::Canceled => format!(
            "{} {}",
            colorize("⏹", Colors::BRIGHT_YELLOW),
            emphasize("Scan canceled", Colors::BRIGHT_YELLOW)
        ),
        ScanOutcome::Failed => format!(
            "{} {}",
            colorize("❌", Colors::BRIGHT_RED),
            emphasize("Scan failed", Colors::BRIGHT_RED)
        ),
    };

    let mut lines = vec![heading];
    if let Some(ref error) = summary.error {
        lines.push(format!("  {}", colorize(error, Colors::BRIGHT_RED)));
        return lines.join("\n");
    }

    lines.push(format!(
        "  Rows processed: {}  (well-formed links: {})",
        progress.processed, progress.total
    ));
    lines.push(format!(
        "  {}  {}",
        colorize(&format!("Valid: {}", progress.valid), Colors::BRIGHT_GREEN),
        colorize(&format!("Invalid: {}", progress.invalid), Colors::BRIGHT_RED)
    ));
    if let Some(ref column) = summary.status_column {
        lines.push(format!(
            "  Statuses written to column {} of '{}' in {}",
            column,
            summary.sheet,
            summary.file_path.display()
        ));
    }
    lines.join("\n")
}
