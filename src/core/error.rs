use std::fmt;

/// Errors that abort a scan or a CLI command.
///
/// Per-row problems (malformed links, HTTP statuses, transport failures) are
/// never represented here; they end up as a [`LinkStatus`](crate::LinkStatus)
/// in the status column instead.
#[derive(Debug)]
pub enum LinkCheckError {
    /// IO error (file operations, etc.)
    Io(std::io::Error),

    /// Configuration error
    Config(String),

    /// HTTP client error
    Http(reqwest::Error),

    /// TOML parsing error
    TomlParsing(toml::de::Error),

    /// Workbook could not be opened or parsed
    Workbook(String),

    /// Named worksheet is missing from the workbook
    SheetNotFound(String),

    /// Column lies outside the used range of the worksheet
    ColumnNotFound(String),

    /// Column identifier is neither a letter nor a 1-based index
    InvalidColumn(String),

    /// Annotated workbook could not be written back
    Save(String),

    /// Background scan task stopped unexpectedly
    Worker(String),
}

impl fmt::Display for LinkCheckError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LinkCheckError::Io(err) => write!(f, "IO error: {err}"),
            LinkCheckError::Config(msg) => write!(f, "Configuration error: {msg}"),
            LinkCheckError::Http(err) => write!(f, "HTTP error: {err}"),
            LinkCheckError::TomlParsing(err) => write!(f, "TOML parsing error: {err}"),
            LinkCheckError::Workbook(msg) => write!(f, "Workbook error: {msg}"),
            LinkCheckError::SheetNotFound(name) => write!(f, "Sheet not found: {name}"),
            LinkCheckError::ColumnNotFound(col) => write!(f, "Column not found: {col}"),
            LinkCheckError::InvalidColumn(col) => write!(f, "Invalid column: {col}"),
            LinkCheckError::Save(msg) => write!(f, "Save error: {msg}"),
            LinkCheckError::Worker(msg) => write!(f, "Scan worker error: {msg}"),
        }
    }
}

impl std::error::Error for LinkCheckError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LinkCheckError::Io(err) => Some(err),
            LinkCheckError::Http(err) => Some(err),
            LinkCheckError::TomlParsing(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for LinkCheckError {
    fn from(err: std::io::Error) -> Self {
        LinkCheckError::Io(err)
    }
}

impl From<reqwest::Error> for LinkCheckError {
    fn from(err: reqwest::Error) -> Self {
        LinkCheckError::Http(err)
    }
}

impl From<toml::de::Error> for LinkCheckError {
    fn from(err: toml::de::Error) -> Self {
        LinkCheckError::TomlParsing(err)
    }
}

/// Type alias for Results using LinkCheckError
pub type Result<T> = std::result::Result<T, LinkCheckError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_error_display() {
        let config_error = LinkCheckError::Config("Invalid timeout".to_string());
        assert_eq!(
            format!("{config_error}"),
            "Configuration error: Invalid timeout"
        );

        let sheet_error = LinkCheckError::SheetNotFound("Links".to_string());
        assert_eq!(format!("{sheet_error}"), "Sheet not found: Links");
    }

    #[test]
    fn test_error_from_io() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "test");
        let err = LinkCheckError::from(io_error);

        match err {
            LinkCheckError::Io(_) => {} // Expected
            _ => panic!("Expected Io variant"),
        }
    }

    #[test]
    fn test_error_from_toml() {
        let toml_error = toml::from_str::<toml::Value>("invalid toml [").unwrap_err();
        let err = LinkCheckError::from(toml_error);

        match err {
            LinkCheckError::TomlParsing(_) => {} // Expected
            _ => panic!("Expected TomlParsing variant"),
        }
    }

    #[test]
    fn test_string_error_variants_display() {
        let errors = vec![
            LinkCheckError::Config("Bad config".to_string()),
            LinkCheckError::Workbook("Corrupt zip".to_string()),
            LinkCheckError::SheetNotFound("Missing".to_string()),
            LinkCheckError::ColumnNotFound("Z".to_string()),
            LinkCheckError::InvalidColumn("#".to_string()),
            LinkCheckError::Save("Read-only".to_string()),
            LinkCheckError::Worker("panicked".to_string()),
        ];

        for error in errors {
            let display_str = format!("{error}");
            assert!(!display_str.is_empty());
            assert!(display_str.contains(":"));
        }
    }

    #[test]
    fn test_error_source() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "test");
        let err = LinkCheckError::Io(io_error);
        assert!(err.source().is_some());

        let config_error = LinkCheckError::Config("test".to_string());
        assert!(config_error.source().is_none());
    }

    #[test]
    fn test_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<LinkCheckError>();
    }
}
