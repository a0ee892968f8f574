use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

use crate::scan::{ScanOutcome, ScanProgress, ScanSummary};

const BAR_TEMPLATE: &str =
    "{spinner:.green} [{elapsed_precise}] [{bar:40.yellow/red}] {pos:>3}% {msg}";
const PAUSED_TEMPLATE: &str = "⏸ [{elapsed_precise}] [{bar:40.dim}] {pos:>3}% {msg}";

/// Terminal progress bar driven by scan events.
///
/// The bar tracks the scan percentage rather than row counts; rows with a
/// malformed link are processed without counting toward the total, so a
/// count-based bar could overflow.
pub struct ProgressReporter {
    bar: Option<ProgressBar>,
    enabled: bool,
}

impl ProgressReporter {
    pub fn new(enabled: bool) -> Self {
        Self { bar: None, enabled }
    }

    pub fn start(&mut self, total_links: usize) {
        if !self.enabled {
            return;
        }

        let pb = ProgressBar::new(100);
        apply_style(&pb, BAR_TEMPLATE);
        pb.set_message(format!("checking {total_links} links"));
        pb.enable_steady_tick(Duration::from_millis(120));
        self.bar = Some(pb);
    }

    pub fn update(&self, progress: &ScanProgress) {
        if let Some(ref pb) = self.bar {
            pb.set_position(u64::from(progress.percent));
            pb.set_message(progress_message(progress));
        }
    }

    pub fn paused(&self) {
        if let Some(ref pb) = self.bar {
            pb.disable_steady_tick();
            apply_style(pb, PAUSED_TEMPLATE);
            pb.println("⏸ Paused. Press 'r' to resume or 'c' to cancel.");
        }
    }

    pub fn resumed(&self) {
        if let Some(ref pb) = self.bar {
            apply_style(pb, BAR_TEMPLATE);
            pb.enable_steady_tick(Duration::from_millis(120));
            pb.println("▶ Resumed");
        }
    }

    pub fn finish(&self, summary: &ScanSummary) {
        if let Some(ref pb) = self.bar {
            let message = match summary.outcome {
                ScanOutcome::Completed => "✓ Scan complete".to_string(),
                ScanOutcome::Canceled => format!(
                    "✗ Scan canceled after {} rows",
                    summary.progress.processed
                ),
                ScanOutcome::Failed => "✗ Scan failed".to_string(),
            };
            pb.finish_with_message(message);
        }
    }

    pub fn abandon(&self, message: &str) {
        if let Some(ref pb) = self.bar {
            pb.abandon_with_message(format!("✗ {message}"));
        }
    }

    /// Print above the bar, or plainly when no bar is shown.
    pub fn log_info(&self, message: &str) {
        match self.bar {
            Some(ref pb) => pb.println(format!("ℹ {message}")),
            None if self.enabled => println!("ℹ {message}"),
            None => {}
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }
}

fn apply_style(pb: &ProgressBar, template: &str) {
    match ProgressStyle::with_template(template) {
        Ok(style) => pb.set_style(style.progress_chars("#>-")),
        Err(e) => log::warn!("Invalid progress template: {e}"),
    }
}

fn progress_message(progress: &ScanProgress) -> String {
    format!(
        "{} rows · {} valid · {} invalid",
        progress.processed, progress.valid, progress.invalid
    )
}
