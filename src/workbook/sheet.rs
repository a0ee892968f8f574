use std::fs;
use std::path::{Path, PathBuf};

use umya_spreadsheet::{Spreadsheet, Worksheet, reader, writer};

use crate::core::constants::sheet;
use crate::core::error::{LinkCheckError, Result};
use crate::core::types::{ColumnRef, LinkStatus, Row, ScanRequest};
use crate::reporting::logging;

/// The worksheet under scan, held in memory until the single save.
pub struct LinkSheet {
    book: Spreadsheet,
    path: PathBuf,
    sheet_name: String,
    column: ColumnRef,
    last_row: u32,
    status_column: Option<ColumnRef>,
}

impl std::fmt::Debug for LinkSheet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LinkSheet")
            .field("path", &self.path)
            .field("sheet_name", &self.sheet_name)
            .field("column", &self.column)
            .field("last_row", &self.last_row)
            .field("status_column", &self.status_column)
            .finish()
    }
}

pub(crate) fn read_book(path: &Path) -> Result<Spreadsheet> {
    reader::xlsx::read(path).map_err(|e| {
        LinkCheckError::Workbook(format!("Could not open '{}': {e}", path.display()))
    })
}

impl LinkSheet {
    /// Load the workbook and resolve the requested sheet and column.
    ///
    /// Fails when the file cannot be read, the sheet does not exist, or the
    /// column lies beyond the sheet's last used column.
    pub fn open(request: &ScanRequest) -> Result<Self> {
        let book = read_book(&request.file_path)?;
        let worksheet = book
            .get_sheet_by_name(&request.sheet_name)
            .ok_or_else(|| LinkCheckError::SheetNotFound(request.sheet_name.clone()))?;

        let highest_column = worksheet.get_highest_column();
        if request.column.index() > highest_column {
            return Err(LinkCheckError::ColumnNotFound(format!(
                "{} (sheet '{}' has {highest_column} column(s))",
                request.column, request.sheet_name
            )));
        }
        let last_row = worksheet.get_highest_row();

        Ok(Self {
            book,
            path: request.file_path.clone(),
            sheet_name: request.sheet_name.clone(),
            column: request.column,
            last_row,
            status_column: None,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Column holding the statuses, once appended.
    pub fn status_column(&self) -> Option<ColumnRef> {
        self.status_column
    }

    fn worksheet(&self) -> Result<&Worksheet> {
        self.book
            .get_sheet_by_name(&self.sheet_name)
            .ok_or_else(|| LinkCheckError::SheetNotFound(self.sheet_name.clone()))
    }

    fn worksheet_mut(&mut self) -> Result<&mut Worksheet> {
        let name = self.sheet_name.clone();
        self.book
            .get_sheet_by_name_mut(&name)
            .ok_or(LinkCheckError::SheetNotFound(name))
    }

    /// Data rows (2..=last used row) of the scanned column, in order.
    pub fn rows(&self) -> Result<Vec<Row>> {
        let worksheet = self.worksheet()?;
        let column = self.column.index();

        Ok((sheet::FIRST_DATA_ROW..=self.last_row)
            .map(|index| Row::new(index, Some(worksheet.get_value((column, index)))))
            .collect())
    }

    /// Append the status column after the last used column and write its header.
    ///
    /// Calling this on an already annotated sheet adds a further column; earlier
    /// status columns are left alone.
    pub fn append_status_column(&mut self) -> Result<ColumnRef> {
        let worksheet = self.worksheet_mut()?;
        let status_column = ColumnRef::from_index(worksheet.get_highest_column() + 1)?;

        worksheet
            .get_cell_mut((status_column.index(), sheet::HEADER_ROW))
            .set_value(sheet::STATUS_HEADER);

        self.status_column = Some(status_column);
        Ok(status_column)
    }

    /// Record one row's status in memory.
    pub fn write_status(&mut self, row: u32, status: &LinkStatus) -> Result<()> {
        let status_column = self.status_column.ok_or_else(|| {
            LinkCheckError::Workbook("status column has not been appended".to_string())
        })?;
        let worksheet = self.worksheet_mut()?;
        worksheet
            .get_cell_mut((status_column.index(), row))
            .set_value(status.to_string());
        Ok(())
    }

    /// Write the workbook back over its source file.
    ///
    /// The snapshot goes to a temporary file next to the original and is then
    /// renamed into place, so readers see either the old file or the new one.
    pub fn save(&self) -> Result<()> {
        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };

        let tmp = tempfile::Builder::new()
            .prefix(".linkcheck-")
            .suffix(".xlsx")
            .tempfile_in(&dir)
            .map_err(|e| {
                LinkCheckError::Save(format!(
                    "Could not create temporary file in '{}': {e}",
                    dir.display()
                ))
            })?;

        writer::xlsx::write(&self.book, tmp.path()).map_err(|e| {
            LinkCheckError::Save(format!("Could not write '{}': {e}", self.path.display()))
        })?;

        if let Ok(metadata) = fs::metadata(&self.path)
            && let Err(e) = fs::set_permissions(tmp.path(), metadata.permissions())
        {
            logging::log_warning(&format!(
                "Could not carry permissions over to '{}': {e}",
                self.path.display()
            ));
        }

        tmp.persist(&self.path).map_err(|e| {
            LinkCheckError::Save(format!(
                "Could not replace '{}': {}",
                self.path.display(),
                e.error
            ))
        })?;

        Ok(())
    }
}
