//! Workbook access
//!
//! Loading the scanned column, appending the status column, the single
//! on-disk save, and the metadata lookups used to pick a sheet and column.

pub mod sheet;

use serde::Serialize;
use std::path::Path;

use crate::core::constants::sheet as layout;
use crate::core::error::{LinkCheckError, Result};
use crate::core::types::ColumnRef;

pub use sheet::LinkSheet;

/// A selectable column of a worksheet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColumnInfo {
    pub index: u32,
    pub letter: String,
    pub header: Option<String>,
}

impl ColumnInfo {
    fn new(column: ColumnRef, header: Option<String>) -> Self {
        Self {
            index: column.index(),
            letter: column.letter(),
            header: header.filter(|h| !h.trim().is_empty()),
        }
    }

    /// Label shown to a user choosing a column, e.g. `URL (B)` or `Column B`.
    pub fn label(&self) -> String {
        match self.header {
            Some(ref header) => format!("{header} ({})", self.letter),
            None => format!("Column {}", self.letter),
        }
    }
}

/// Sheet names in workbook order.
pub fn list_sheets<P: AsRef<Path>>(path: P) -> Result<Vec<String>> {
    let book = sheet::read_book(path.as_ref())?;
    Ok(book
        .get_sheet_collection()
        .iter()
        .map(|worksheet| worksheet.get_name().to_string())
        .collect())
}

/// Used columns of `sheet_name` with their header text.
pub fn list_columns<P: AsRef<Path>>(path: P, sheet_name: &str) -> Result<Vec<ColumnInfo>> {
    let book = sheet::read_book(path.as_ref())?;
    let worksheet = book
        .get_sheet_by_name(sheet_name)
        .ok_or_else(|| LinkCheckError::SheetNotFound(sheet_name.to_string()))?;

    (1..=worksheet.get_highest_column())
        .map(|index| {
            let column = ColumnRef::from_index(index)?;
            let header = worksheet.get_value((index, layout::HEADER_ROW));
            Ok(ColumnInfo::new(column, Some(header)))
        })
        .collect()
}

#[cfg(test)]
pub(crate) mod test_support {
    use std::path::Path;

    /// Write a workbook with a "Links" sheet: header `URL` in A1, `Notes` in B1,
    /// and one link per data row in column A. Empty strings leave the cell blank.
    pub fn write_links_book(path: &Path, links: &[&str]) {
        let mut book = umya_spreadsheet::new_file();
        let worksheet = book.new_sheet("Links").unwrap();
        worksheet.get_cell_mut((1, 1)).set_value("URL");
        worksheet.get_cell_mut((2, 1)).set_value("Notes");
        for (i, link) in links.iter().enumerate() {
            if !link.is_empty() {
                worksheet.get_cell_mut((1, i as u32 + 2)).set_value(*link);
            }
        }
        umya_spreadsheet::writer::xlsx::write(&book, path).unwrap();
    }

    /// Read one cell back from disk (1-based column and row).
    pub fn cell(path: &Path, sheet: &str, column: u32, row: u32) -> String {
        let book = umya_spreadsheet::reader::xlsx::read(path).unwrap();
        book.get_sheet_by_name(sheet)
            .unwrap()
            .get_value((column, row))
    }

    pub fn highest_column(path: &Path, sheet: &str) -> u32 {
        let book = umya_spreadsheet::reader::xlsx::read(path).unwrap();
        book.get_sheet_by_name(sheet).unwrap().get_highest_column()
    }
}

#[cfg(test)]
mod tests {
    use super::test_support::write_links_book;
    use super::*;

    #[test]
    fn test_list_sheets() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("links.xlsx");
        write_links_book(&path, &["https://example.com"]);

        let sheets = list_sheets(&path).unwrap();
        assert_eq!(sheets, vec!["Sheet1".to_string(), "Links".to_string()]);
    }

    #[test]
    fn test_list_columns_labels() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("links.xlsx");
        write_links_book(&path, &["https://example.com"]);

        let columns = list_columns(&path, "Links").unwrap();
        let labels: Vec<String> = columns.iter().map(ColumnInfo::label).collect();
        assert_eq!(labels, vec!["URL (A)".to_string(), "Notes (B)".to_string()]);
    }

    #[test]
    fn test_list_columns_without_header() {
        let info = ColumnInfo::new(ColumnRef::from_index(3).unwrap(), Some(String::new()));
        assert_eq!(info.label(), "Column C");
    }

    #[test]
    fn test_list_columns_missing_sheet() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("links.xlsx");
        write_links_book(&path, &["https://example.com"]);

        assert!(matches!(
            list_columns(&path, "Other"),
            Err(LinkCheckError::SheetNotFound(_))
        ));
    }

    #[test]
    fn test_list_sheets_missing_file() {
        assert!(matches!(
            list_sheets("/no/such/workbook.xlsx"),
            Err(LinkCheckError::Workbook(_))
        ));
    }
}
