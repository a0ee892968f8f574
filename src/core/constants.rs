/// Application-wide constants to avoid magic values throughout the codebase.
///
/// This module centralizes the literal strings and numbers used across the
/// scanner, so the wire format of the status column lives in one place.
/// Output format constants
pub mod output_formats {
    /// Text output format - human readable summary
    pub const TEXT: &str = "text";
    /// JSON output format - structured output for automation
    pub const JSON: &str = "json";

    /// Default output format
    pub const DEFAULT: &str = TEXT;

    /// All valid output formats
    pub const ALL: [&str; 2] = [TEXT, JSON];
}

/// HTTP status code constants
pub mod http_status {
    /// HTTP 200 OK - the only status treated as a live link
    pub const OK: u16 = 200;
}

/// Timeout and duration constants
pub mod timeouts {
    /// Default probe timeout in seconds
    pub const DEFAULT_TIMEOUT_SECONDS: u64 = 5;
    /// Maximum accepted probe timeout in seconds (24 hours)
    pub const MAX_TIMEOUT_SECONDS: u64 = 86_400;
    /// Default interval between pause checks in milliseconds
    pub const DEFAULT_PAUSE_POLL_MS: u64 = 1000;
    /// Maximum accepted pause poll interval in milliseconds
    pub const MAX_PAUSE_POLL_MS: u64 = 60_000;
}

/// HTTP client defaults
pub mod http {
    /// Default number of redirects followed by one HEAD request
    pub const DEFAULT_MAX_REDIRECTS: usize = 10;
    /// Upper bound for the configurable redirect limit
    pub const MAX_REDIRECTS_LIMIT: usize = 50;
}

/// Worksheet layout constants
pub mod sheet {
    /// Header text written above the appended status column
    pub const STATUS_HEADER: &str = "Link Status";
    /// Row holding the column headers (1-indexed)
    pub const HEADER_ROW: u32 = 1;
    /// First row holding candidate links (1-indexed)
    pub const FIRST_DATA_ROW: u32 = 2;
}

/// Status strings written to the status column
pub mod status_text {
    /// Cell value did not pass the syntactic URL check
    pub const MALFORMED: &str = "Invalid (malformed URL)";
    /// Probe answered 200
    pub const VALID: &str = "Valid";
    /// Prefix for non-200 statuses, followed by the code and `)`
    pub const CODE_PREFIX: &str = "Invalid (Code: ";
    /// Prefix for transport failures, followed by the description and `)`
    pub const ERROR_PREFIX: &str = "Invalid (Error: ";
}

/// Configuration file constants
pub mod config_files {
    /// Name of the configuration file searched in the working directory
    pub const FILE_NAME: &str = ".xlsx-linkcheck.toml";
    /// How many parent directories are searched for a config file
    pub const PARENT_SEARCH_DEPTH: usize = 3;
}

/// Error message constants
pub mod error_messages {
    /// Fallback when a transport error carries no message
    pub const UNKNOWN_ERROR: &str = "Unknown error";
}
