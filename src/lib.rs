//! Check the hyperlinks stored in a spreadsheet column.
//!
//! Every data row of the chosen column is checked for syntax, probed with an
//! HTTP `HEAD` request when well-formed, and annotated in a `Link Status`
//! column appended to the worksheet. Scans run in the background and can be
//! paused, resumed, or canceled while they report progress.
//!
//! ```no_run
//! use xlsx_linkcheck::{Config, ScanEvent, ScanRequest, Scanner};
//!
//! # async fn run() -> xlsx_linkcheck::Result<()> {
//! let scanner = Scanner::from_config(&Config::default())?;
//! let mut handle = scanner.start(ScanRequest::parse("links.xlsx", "Sheet1", "B")?);
//!
//! while let Some(event) = handle.next_event().await {
//!     if let ScanEvent::ProgressUpdated(progress) = event {
//!         println!("{}%", progress.percent);
//!     }
//! }
//! let summary = handle.wait().await?;
//! println!("{} valid", summary.progress.valid);
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod core;
pub mod reporting;
pub mod scan;
pub mod ui;
pub mod validation;
pub mod workbook;

// Re-export commonly used items
pub use config::{CliConfig, Config};
pub use core::{ColumnRef, LinkCheckError, LinkStatus, Result, Row, ScanRequest};
pub use scan::{
    ScanCommand, ScanControl, ScanEvent, ScanHandle, ScanOutcome, ScanProgress, ScanSummary,
    Scanner,
};
pub use validation::{HttpProbe, ProbeLink, is_well_formed};
pub use workbook::{ColumnInfo, list_columns, list_sheets};
