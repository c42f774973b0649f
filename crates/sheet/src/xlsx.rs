use crate::book::Book;
use crate::cell::CellValue;
use crate::error::{Result, SheetError};
use crate::sheet::Sheet;
use calamine::{open_workbook, Data, Reader, Xlsx, XlsxError};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Convert calamine Data to CellValue.
///
/// Datetime cells are materialized as real dates, not Excel serial
/// numbers; downstream classification depends on this.
fn data_to_cell_value(data: &Data) -> CellValue {
    match data {
        Data::Empty => CellValue::Null,
        Data::Bool(b) => CellValue::Bool(*b),
        Data::Int(i) => CellValue::Int(*i),
        Data::Float(f) => CellValue::Float(*f),
        Data::String(s) => CellValue::String(s.clone()),
        Data::DateTime(dt) => match dt.as_datetime() {
            Some(naive) => CellValue::Date(naive),
            None => CellValue::Float(dt.as_f64()),
        },
        Data::DateTimeIso(s) | Data::DurationIso(s) => CellValue::String(s.clone()),
        Data::Error(e) => CellValue::String(format!("#ERROR: {e:?}")),
    }
}

fn parse_error(e: &XlsxError) -> SheetError {
    SheetError::Parse(e.to_string())
}

impl Book {
    /// Load a book from an Excel file (all sheets, raw grids)
    ///
    /// # Errors
    ///
    /// Returns error if the file cannot be opened or parsed as a workbook.
    pub fn from_xlsx<P: AsRef<Path>>(path: P) -> Result<Self> {
        let mut workbook: Xlsx<BufReader<File>> =
            open_workbook(path.as_ref()).map_err(|e| parse_error(&e))?;

        let sheet_names: Vec<String> = workbook.sheet_names().to_vec();
        let mut book = Book::new();

        for sheet_name in sheet_names {
            let range = workbook
                .worksheet_range(&sheet_name)
                .map_err(|e| parse_error(&e))?;

            let data: Vec<Vec<CellValue>> = range
                .rows()
                .map(|row| row.iter().map(data_to_cell_value).collect())
                .collect();

            let mut sheet = Sheet::with_name(&sheet_name);
            *sheet.data_mut() = data;
            book.add_sheet(&sheet_name, sheet)?;
        }

        Ok(book)
    }

    /// Get sheet names from an Excel file without loading data
    ///
    /// # Errors
    ///
    /// Returns error if the file cannot be opened.
    pub fn xlsx_sheet_names<P: AsRef<Path>>(path: P) -> Result<Vec<String>> {
        let workbook: Xlsx<BufReader<File>> =
            open_workbook(path.as_ref()).map_err(|e| parse_error(&e))?;

        Ok(workbook.sheet_names().to_vec())
    }
}
