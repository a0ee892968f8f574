use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::core::constants::{http_status, status_text};
use crate::core::error::LinkCheckError;

/// Largest column index an xlsx worksheet can hold (`XFD`).
pub const MAX_COLUMN_INDEX: u32 = 16_384;

/// A worksheet column, stored as a 1-based index.
///
/// Parsed from either a spreadsheet letter (`A`, `aa`) or a 1-based number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ColumnRef(u32);

impl ColumnRef {
    /// Create a column reference from a 1-based index.
    pub fn from_index(index: u32) -> Result<Self, LinkCheckError> {
        if index == 0 || index > MAX_COLUMN_INDEX {
            return Err(LinkCheckError::InvalidColumn(format!(
                "{index} is outside 1..={MAX_COLUMN_INDEX}"
            )));
        }
        Ok(Self(index))
    }

    /// 1-based column index.
    pub fn index(&self) -> u32 {
        self.0
    }

    /// Spreadsheet letter for this column (1 -> `A`, 27 -> `AA`).
    pub fn letter(&self) -> String {
        let mut n = self.0;
        let mut letters = Vec::new();
        while n > 0 {
            let rem = ((n - 1) % 26) as u8;
            letters.push((b'A' + rem) as char);
            n = (n - 1) / 26;
        }
        letters.iter().rev().collect()
    }
}

impl FromStr for ColumnRef {
    type Err = LinkCheckError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(LinkCheckError::InvalidColumn(
                "column identifier cannot be empty".to_string(),
            ));
        }

        if trimmed.chars().all(|c| c.is_ascii_digit()) {
            let index: u32 = trimmed
                .parse()
                .map_err(|_| LinkCheckError::InvalidColumn(trimmed.to_string()))?;
            return Self::from_index(index);
        }

        if trimmed.chars().all(|c| c.is_ascii_alphabetic()) {
            let mut index: u32 = 0;
            for c in trimmed.chars() {
                let digit = (c.to_ascii_uppercase() as u8 - b'A' + 1) as u32;
                index = index
                    .checked_mul(26)
                    .and_then(|v| v.checked_add(digit))
                    .ok_or_else(|| LinkCheckError::InvalidColumn(trimmed.to_string()))?;
            }
            return Self::from_index(index);
        }

        Err(LinkCheckError::InvalidColumn(format!(
            "'{trimmed}' is neither a column letter nor a 1-based index"
        )))
    }
}

impl fmt::Display for ColumnRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

/// Immutable input of one scan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanRequest {
    /// Workbook to read and annotate in place
    pub file_path: PathBuf,
    /// Worksheet holding the links
    pub sheet_name: String,
    /// Column holding the links
    pub column: ColumnRef,
}

impl ScanRequest {
    pub fn new<P: AsRef<Path>>(file_path: P, sheet_name: &str, column: ColumnRef) -> Self {
        Self {
            file_path: file_path.as_ref().to_path_buf(),
            sheet_name: sheet_name.to_string(),
            column,
        }
    }

    /// Build a request from a textual column identifier.
    pub fn parse<P: AsRef<Path>>(
        file_path: P,
        sheet_name: &str,
        column: &str,
    ) -> Result<Self, LinkCheckError> {
        Ok(Self::new(file_path, sheet_name, column.parse()?))
    }
}

/// One data row of the scanned column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    /// 1-based worksheet row, always >= 2
    pub index: u32,
    /// Raw cell text, `None` for an empty cell
    pub value: Option<String>,
}

impl Row {
    pub fn new(index: u32, value: Option<String>) -> Self {
        let value = value.filter(|v| !v.is_empty());
        Self { index, value }
    }
}

/// Outcome recorded for one processed row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinkStatus {
    /// Value did not pass the syntactic check; no request was sent
    FormatInvalid,
    /// HEAD request answered 200
    Valid,
    /// HEAD request answered with another status
    HttpStatus(u16),
    /// Request failed before a status was received
    TransportError(String),
}

impl LinkStatus {
    /// Classify an HTTP status code.
    pub fn from_status_code(code: u16) -> Self {
        if code == http_status::OK {
            LinkStatus::Valid
        } else {
            LinkStatus::HttpStatus(code)
        }
    }

    pub fn is_valid(&self) -> bool {
        matches!(self, LinkStatus::Valid)
    }
}

impl fmt::Display for LinkStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LinkStatus::FormatInvalid => write!(f, "{}", status_text::MALFORMED),
            LinkStatus::Valid => write!(f, "{}", status_text::VALID),
            LinkStatus::HttpStatus(code) => write!(f, "{}{code})", status_text::CODE_PREFIX),
            LinkStatus::TransportError(desc) => {
                write!(f, "{}{desc})", status_text::ERROR_PREFIX)
            }
        }
    }
}
