use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt;
use std::path::PathBuf;

use crate::scan::state::ScanProgress;

/// How a scan ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ScanOutcome {
    Completed,
    Canceled,
    Failed,
}

impl fmt::Display for ScanOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ScanOutcome::Completed => "completed",
            ScanOutcome::Canceled => "canceled",
            ScanOutcome::Failed => "failed",
        };
        write!(f, "{label}")
    }
}

/// Final report of a scan, returned by the worker and carried by terminal events.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScanSummary {
    pub outcome: ScanOutcome,
    pub progress: ScanProgress,
    pub file_path: PathBuf,
    pub sheet: String,
    pub column: String,
    /// Letter of the appended column, if the scan got that far
    pub status_column: Option<String>,
    pub error: Option<String>,
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
}

impl ScanSummary {
    /// Whether the annotated workbook was written back.
    pub fn saved(&self) -> bool {
        self.outcome != ScanOutcome::Failed
    }
}

/// Notifications delivered to the caller while a scan runs.
#[derive(Debug, Clone, PartialEq)]
pub enum ScanEvent {
    /// Pre-pass finished; `total` well-formed links will be probed
    Started { total: usize },
    /// One more row has a status
    ProgressUpdated(ScanProgress),
    /// Worker observed the pause flag and is waiting
    Paused,
    /// Worker left the pause wait and continues with the next row
    Resumed,
    /// Every row processed and the workbook saved
    Completed(ScanSummary),
    /// Cancellation observed; processed rows saved, the rest left blank
    Canceled(ScanSummary),
    /// Fatal error; the workbook was not saved by this scan
    Failed { message: String },
    /// Reserved for connectivity detection; never emitted
    ConnectionLost,
    /// Reserved for connectivity detection; never emitted
    ConnectionRestored,
}

impl ScanEvent {
    /// No further events follow a terminal one.
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            ScanEvent::Completed(_) | ScanEvent::Canceled(_) | ScanEvent::Failed { .. }
        )
    }
}
