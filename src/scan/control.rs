use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use crate::scan::state::{ScanProgress, percent_of};

/// Commands a caller can send to a running scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanCommand {
    Pause,
    Resume,
    Cancel,
}

/// Flags and counters shared between the caller and the scan worker.
///
/// The worker reads the flags once per row; the caller flips them from any
/// thread. Counters mirror the worker's state for display and may be read
/// mid-update, so treat a snapshot as approximate.
#[derive(Debug, Default)]
pub struct ScanControl {
    paused: AtomicBool,
    canceled: AtomicBool,
    total: AtomicUsize,
    processed: AtomicUsize,
    valid: AtomicUsize,
    invalid: AtomicUsize,
}

impl ScanControl {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn apply(&self, command: ScanCommand) {
        match command {
            ScanCommand::Pause => self.paused.store(true, Ordering::Release),
            ScanCommand::Resume => self.paused.store(false, Ordering::Release),
            ScanCommand::Cancel => self.canceled.store(true, Ordering::Release),
        }
    }

    pub fn pause(&self) {
        self.apply(ScanCommand::Pause);
    }

    pub fn resume(&self) {
        self.apply(ScanCommand::Resume);
    }

    pub fn cancel(&self) {
        self.apply(ScanCommand::Cancel);
    }

    /// Flip between paused and running, returning the new paused state.
    pub fn toggle_pause(&self) -> bool {
        !self.paused.fetch_xor(true, Ordering::AcqRel)
    }

    pub fn is_paused(&self) -> bool {
        self.paused.load(Ordering::Acquire)
    }

    pub fn is_canceled(&self) -> bool {
        self.canceled.load(Ordering::Acquire)
    }

    pub(crate) fn publish(&self, progress: &ScanProgress) {
        self.total.store(progress.total, Ordering::Relaxed);
        self.valid.store(progress.valid, Ordering::Relaxed);
        self.invalid.store(progress.invalid, Ordering::Relaxed);
        self.processed.store(progress.processed, Ordering::Release);
    }

    /// Latest counters published by the worker.
    pub fn snapshot(&self) -> ScanProgress {
        let processed = self.processed.load(Ordering::Acquire);
        let total = self.total.load(Ordering::Relaxed);
        ScanProgress {
            total,
            processed,
            valid: self.valid.load(Ordering::Relaxed),
            invalid: self.invalid.load(Ordering::Relaxed),
            percent: percent_of(processed, total),
        }
    }
}
