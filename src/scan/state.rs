use serde::Serialize;

use crate::core::types::LinkStatus;

/// Counters carried by every progress event.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ScanProgress {
    pub total: usize,
    pub processed: usize,
    pub valid: usize,
    pub invalid: usize,
    pub percent: u8,
}

impl ScanProgress {
    /// Rows still waiting for a status. Malformed rows count as processed but
    /// not toward `total`, so this saturates at zero.
    pub fn remaining(&self) -> usize {
        self.total.saturating_sub(self.processed)
    }
}

/// `floor(processed / total * 100)`, 0 when nothing is probeable, capped at 100.
pub fn percent_of(processed: usize, total: usize) -> u8 {
    if total == 0 {
        return 0;
    }
    let pct = (processed as u128 * 100) / total as u128;
    pct.min(100) as u8
}

/// Worker-local aggregate of one scan.
///
/// `total_links` is fixed at construction; every recorded row bumps
/// `processed_links` and exactly one of `valid_links` / `invalid_links`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanState {
    total_links: usize,
    processed_links: usize,
    valid_links: usize,
    invalid_links: usize,
}

impl ScanState {
    pub fn new(total_links: usize) -> Self {
        Self {
            total_links,
            processed_links: 0,
            valid_links: 0,
            invalid_links: 0,
        }
    }

    /// Account for one processed row and return the new snapshot.
    pub fn record(&mut self, status: &LinkStatus) -> ScanProgress {
        if status.is_valid() {
            self.valid_links += 1;
        } else {
            self.invalid_links += 1;
        }
        self.processed_links += 1;
        debug_assert_eq!(self.valid_links + self.invalid_links, self.processed_links);
        self.progress()
    }

    pub fn progress(&self) -> ScanProgress {
        ScanProgress {
            total: self.total_links,
            processed: self.processed_links,
            valid: self.valid_links,
            invalid: self.invalid_links,
            percent: percent_of(self.processed_links, self.total_links),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_percent_of() {
        assert_eq!(percent_of(0, 0), 0);
        assert_eq!(percent_of(5, 0), 0);
        assert_eq!(percent_of(1, 3), 33);
        assert_eq!(percent_of(2, 3), 66);
        assert_eq!(percent_of(3, 3), 100);
        // Malformed rows can push processed past total
        assert_eq!(percent_of(7, 3), 100);
    }

    #[test]
    fn test_record_keeps_counters_consistent() {
        let mut state = ScanState::new(3);
        let statuses = [
            LinkStatus::Valid,
            LinkStatus::FormatInvalid,
            LinkStatus::HttpStatus(404),
            LinkStatus::TransportError("timed out".to_string()),
            LinkStatus::Valid,
        ];

        for status in &statuses {
            let progress = state.record(status);
            assert_eq!(progress.valid + progress.invalid, progress.processed);
            assert_eq!(progress.total, 3);
        }

        let progress = state.progress();
        assert_eq!(progress.processed, 5);
        assert_eq!(progress.valid, 2);
        assert_eq!(progress.invalid, 3);
        assert_eq!(progress.percent, 100);
        assert_eq!(progress.remaining(), 0);
    }

    #[test]
    fn test_new_state_is_empty() {
        let progress = ScanState::new(10).progress();
        assert_eq!(progress, ScanProgress {
            total: 10,
            ..Default::default()
        });
        assert_eq!(progress.remaining(), 10);
    }
}
