use chrono::Utc;
use std::sync::Arc;
use tokio::sync::mpsc::{UnboundedReceiver, UnboundedSender, unbounded_channel};
use tokio::task::JoinHandle;
use tokio::time::{Duration, Instant, sleep};

use crate::config::Config;
use crate::core::error::{LinkCheckError, Result};
use crate::core::types::{ColumnRef, LinkStatus, ScanRequest};
use crate::reporting::logging;
use crate::scan::control::{ScanCommand, ScanControl};
use crate::scan::events::{ScanEvent, ScanOutcome, ScanSummary};
use crate::scan::state::{ScanProgress, ScanState};
use crate::validation::{HttpProbe, ProbeLink, is_well_formed};
use crate::workbook::LinkSheet;

/// Starts scans on background tasks.
#[derive(Clone)]
pub struct Scanner {
    probe: Arc<dyn ProbeLink>,
    poll_interval: Duration,
}

impl std::fmt::Debug for Scanner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Scanner")
            .field("poll_interval", &self.poll_interval)
            .finish_non_exhaustive()
    }
}

impl Scanner {
    pub fn new(probe: Arc<dyn ProbeLink>, poll_interval: Duration) -> Self {
        Self {
            probe,
            poll_interval,
        }
    }

    /// Scanner backed by [`HttpProbe`] built from `config`.
    pub fn from_config(config: &Config) -> Result<Self> {
        let probe = HttpProbe::from_config(config)?;
        Ok(Self::new(Arc::new(probe), config.pause_poll_duration()))
    }

    /// Spawn a scan and return immediately. Must be called within a tokio runtime.
    pub fn start(&self, request: ScanRequest) -> ScanHandle {
        self.start_with_control(request, Arc::new(ScanControl::new()))
    }

    /// Like [`Scanner::start`], with a control block the caller created up front.
    pub fn start_with_control(&self, request: ScanRequest, control: Arc<ScanControl>) -> ScanHandle {
        let (events_tx, events_rx) = unbounded_channel();
        let worker = ScanWorker {
            request,
            probe: self.probe.clone(),
            control: control.clone(),
            events: events_tx,
            poll_interval: self.poll_interval,
        };

        let task = tokio::spawn(worker.run());

        ScanHandle {
            control,
            events: events_rx,
            task,
        }
    }
}

/// Caller's side of a running scan: commands in, events out.
#[derive(Debug)]
pub struct ScanHandle {
    control: Arc<ScanControl>,
    events: UnboundedReceiver<ScanEvent>,
    task: JoinHandle<ScanSummary>,
}

impl ScanHandle {
    pub fn send(&self, command: ScanCommand) {
        self.control.apply(command);
    }

    pub fn pause(&self) {
        self.send(ScanCommand::Pause);
    }

    pub fn resume(&self) {
        self.send(ScanCommand::Resume);
    }

    pub fn cancel(&self) {
        self.send(ScanCommand::Cancel);
    }

    /// Shared control block, for issuing commands from another task.
    pub fn control(&self) -> Arc<ScanControl> {
        self.control.clone()
    }

    /// Next event, or `None` once the worker has finished and the queue is drained.
    pub async fn next_event(&mut self) -> Option<ScanEvent> {
        self.events.recv().await
    }

    /// Wait for the worker and return its summary. Undelivered events are dropped.
    pub async fn wait(self) -> Result<ScanSummary> {
        self.task
            .await
            .map_err(|e| LinkCheckError::Worker(e.to_string()))
    }
}

struct ScanWorker {
    request: ScanRequest,
    probe: Arc<dyn ProbeLink>,
    control: Arc<ScanControl>,
    events: UnboundedSender<ScanEvent>,
    poll_interval: Duration,
}

struct LoopResult {
    outcome: ScanOutcome,
    progress: ScanProgress,
    status_column: ColumnRef,
}

impl ScanWorker {
    fn emit(&self, event: ScanEvent) {
        // A caller that dropped the receiver just stops listening
        let _ = self.events.send(event);
    }

    async fn run(self) -> ScanSummary {
        let started_at = Utc::now();
        let timer = Instant::now();

        let result = self.drive().await;
        let finished_at = Utc::now();

        let mut summary = ScanSummary {
            outcome: ScanOutcome::Failed,
            progress: self.control.snapshot(),
            file_path: self.request.file_path.clone(),
            sheet: self.request.sheet_name.clone(),
            column: self.request.column.letter(),
            status_column: None,
            error: None,
            started_at,
            finished_at,
        };

        match result {
            Ok(done) => {
                summary.outcome = done.outcome;
                summary.progress = done.progress;
                summary.status_column = Some(done.status_column.letter());
                logging::log_scan_finished(
                    &done.outcome.to_string(),
                    done.progress.processed,
                    done.progress.valid,
                    done.progress.invalid,
                    timer.elapsed().as_millis(),
                );
                let event = match done.outcome {
                    ScanOutcome::Canceled => ScanEvent::Canceled(summary.clone()),
                    _ => ScanEvent::Completed(summary.clone()),
                };
                self.emit(event);
            }
            Err(e) => {
                logging::log_error("Scan failed", Some(&e));
                let message = e.to_string();
                summary.error = Some(message.clone());
                self.emit(ScanEvent::Failed { message });
            }
        }

        summary
    }

    async fn drive(&self) -> Result<LoopResult> {
        let request = self.request.clone();
        let (mut sheet, rows) = tokio::task::spawn_blocking(move || -> Result<_> {
            let sheet = LinkSheet::open(&request)?;
            let rows = sheet.rows()?;
            Ok((sheet, rows))
        })
        .await
        .map_err(|e| LinkCheckError::Worker(e.to_string()))??;

        let status_column = sheet.append_status_column()?;

        let total_links = rows
            .iter()
            .filter(|row| is_well_formed(row.value.as_deref()))
            .count();
        let mut state = ScanState::new(total_links);
        self.control.publish(&state.progress());

        logging::log_scan_start(&self.request, total_links, rows.len());
        self.emit(ScanEvent::Started { total: total_links });

        let mut outcome = ScanOutcome::Completed;
        for row in &rows {
            if self.control.is_canceled() {
                outcome = ScanOutcome::Canceled;
                break;
            }

            if self.control.is_paused() && !self.wait_while_paused(&state).await {
                outcome = ScanOutcome::Canceled;
                break;
            }

            let value = row.value.as_deref();
            let status = match value {
                Some(url) if is_well_formed(value) => self.probe.probe(url).await,
                _ => LinkStatus::FormatInvalid,
            };

            sheet.write_status(row.index, &status)?;
            let progress = state.record(&status);
            self.control.publish(&progress);
            logging::log_row_result(row.index, value, &status);
            self.emit(ScanEvent::ProgressUpdated(progress));
        }

        let path = sheet.path().to_path_buf();
        tokio::task::spawn_blocking(move || sheet.save())
            .await
            .map_err(|e| LinkCheckError::Worker(e.to_string()))??;
        logging::log_save(&path, &status_column.letter());

        Ok(LoopResult {
            outcome,
            progress: state.progress(),
            status_column,
        })
    }

    /// Sleep in `poll_interval` steps until resumed. Returns false if canceled meanwhile.
    async fn wait_while_paused(&self, state: &ScanState) -> bool {
        let processed = state.progress().processed;
        logging::log_pause_change(true, processed);
        self.emit(ScanEvent::Paused);

        while self.control.is_paused() {
            if self.control.is_canceled() {
                return false;
            }
            sleep(self.poll_interval).await;
        }

        if self.control.is_canceled() {
            return false;
        }

        logging::log_pause_change(false, processed);
        self.emit(ScanEvent::Resumed);
        true
    }
}
