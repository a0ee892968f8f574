use crate::config::Config;
use crate::core::types::{LinkStatus, ScanRequest};
use log::{debug, error, info, warn};
use std::path::Path;

/// Initialize the logger with appropriate level based on verbosity
///
/// `RUST_LOG` wins over `--verbose`; `--quiet` silences everything.
pub fn init_logger(verbose: bool, quiet: bool) {
    let env_filter_set = std::env::var_os(env_logger::DEFAULT_FILTER_ENV).is_some();
    let mut builder = env_logger::Builder::from_default_env();

    if let Some(level) = level_override(verbose, quiet, env_filter_set) {
        builder.filter_level(level);
    }

    builder
        .format_timestamp(None)
        .format_module_path(false)
        .format_target(false)
        .init();

    debug!("Logger initialized (verbose={verbose}, quiet={quiet}, RUST_LOG set={env_filter_set})");
}

/// Global level to force on top of the environment filter, if any.
fn level_override(verbose: bool, quiet: bool, env_filter_set: bool) -> Option<log::LevelFilter> {
    if quiet {
        Some(log::LevelFilter::Off)
    } else if env_filter_set {
        None
    } else if verbose {
        Some(log::LevelFilter::Debug)
    } else {
        // Only show structured logs in verbose mode
        Some(log::LevelFilter::Off)
    }
}

/// Log configuration information
pub fn log_config_info(config: &Config) {
    info!(
        "Configuration: timeout={}s, max_redirects={}, pause_poll={}ms",
        config.timeout_duration().as_secs(),
        config.redirect_limit(),
        config.pause_poll_duration().as_millis()
    );
    info!(
        "HTTP: user_agent={}, proxy={}, skip_ssl={}",
        config.user_agent_or_default(),
        config.proxy.as_deref().unwrap_or("none"),
        config.skip_ssl_verification.unwrap_or(false)
    );
}

/// Log the start of a scan once the pre-pass has counted the links
pub fn log_scan_start(request: &ScanRequest, total_links: usize, data_rows: usize) {
    info!(
        "Scanning '{}' sheet '{}' column {}: {total_links} well-formed link(s) in {data_rows} row(s)",
        request.file_path.display(),
        request.sheet_name,
        request.column
    );
}

/// Log the outcome recorded for one row
pub fn log_row_result(row: u32, value: Option<&str>, status: &LinkStatus) {
    let value = value.unwrap_or("<empty>");
    match status {
        LinkStatus::Valid => debug!("✓ row {row}: {value}"),
        other => debug!("✗ row {row}: {value} -> {other}"),
    }
}

pub fn log_probe_response(url: &str, status: u16) {
    debug!("HEAD {url} -> {status}");
}

pub fn log_probe_failure(url: &str, description: &str) {
    debug!("HEAD {url} failed: {description}");
}

pub fn log_pause_change(paused: bool, processed: usize) {
    if paused {
        info!("Scan paused after {processed} row(s)");
    } else {
        info!("Scan resumed after {processed} row(s)");
    }
}

/// Log scan termination
pub fn log_scan_finished(
    outcome: &str,
    processed: usize,
    valid: usize,
    invalid: usize,
    duration_ms: u128,
) {
    if invalid == 0 {
        info!("✅ Scan {outcome}: {valid}/{processed} rows valid ({duration_ms}ms)");
    } else {
        warn!(
            "❌ Scan {outcome}: {valid}/{processed} rows valid, {invalid} invalid ({duration_ms}ms)"
        );
    }
}

/// Log the on-disk save of the annotated workbook
pub fn log_save(path: &Path, column: &str) {
    info!(
        "Saved '{}' with statuses in column {column}",
        path.display()
    );
}

/// Log error information
pub fn log_error(message: &str, source: Option<&dyn std::error::Error>) {
    match source {
        Some(err) => error!("{message}: {err}"),
        None => error!("{message}"),
    }
}

/// Log warning information
pub fn log_warning(message: &str) {
    warn!("{message}");
}
