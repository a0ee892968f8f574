//! Scan orchestration
//!
//! A scan walks one column of one worksheet on a background task, annotates
//! each data row with its [`LinkStatus`](crate::LinkStatus), and reports
//! through an event channel. Callers steer it with pause, resume and cancel
//! commands applied to a shared [`ScanControl`].

pub mod control;
pub mod events;
pub mod orchestrator;
pub mod state;

// Re-export commonly used items
pub use control::{ScanCommand, ScanControl};
pub use events::{ScanEvent, ScanOutcome, ScanSummary};
pub use orchestrator::{ScanHandle, Scanner};
pub use state::{ScanProgress, ScanState};
