//! Blank-row-delimited sub-table detection over raw sheet grids.
//!
//! Analytics exports often stack several small tables in one sheet,
//! separated by blank rows. The scanner walks the grid once and emits a
//! [`DetectedTable`] per contiguous non-blank region, treating the first
//! row of each region as its header row.

use serde::{Deserialize, Serialize};
use socialdash_sheet::{Book, CellValue, Sheet};
use socialdash_types::TableMeta;
use tracing::debug;

/// Placeholder tab some exports carry; never scanned.
pub const RESERVED_SHEET_NAME: &str = "sheet1";

/// One contiguous sub-table within a sheet, immutable after the scan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetectedTable {
    pub meta: TableMeta,
    /// Trimmed header strings from the region's first row. May be wider
    /// or narrower than individual data rows; missing cells read as null.
    pub headers: Vec<String>,
    pub rows: Vec<Vec<CellValue>>,
}

fn is_blank_row(row: Option<&Vec<CellValue>>) -> bool {
    row.map_or(true, |cells| cells.iter().all(CellValue::is_blank))
}

/// Split one sheet's raw grid into detected sub-tables.
///
/// Regions with no data rows (header only) or with an entirely empty
/// header row are discarded silently; sparse noise rows are expected in
/// this format and are not an error.
#[must_use]
pub fn scan_sheet(sheet: &Sheet) -> Vec<DetectedTable> {
    let grid = sheet.data();
    let mut tables = Vec::new();
    let mut current_start: Option<usize> = None;
    let mut table_index = 0;

    // One past the end acts as a sentinel blank row closing any open region.
    for i in 0..=grid.len() {
        let row = grid.get(i);

        match current_start {
            None => {
                if !is_blank_row(row) {
                    current_start = Some(i);
                }
            }
            Some(start) => {
                if i == grid.len() || is_blank_row(row) {
                    let end_row = i - 1;
                    if end_row > start {
                        let headers: Vec<String> = grid[start]
                            .iter()
                            .map(|cell| cell.as_str().trim().to_string())
                            .collect();
                        let data_rows = &grid[start + 1..=end_row];

                        if headers.iter().any(|h| !h.is_empty()) && !data_rows.is_empty() {
                            tables.push(DetectedTable {
                                meta: TableMeta {
                                    sheet_name: sheet.name().to_string(),
                                    table_index,
                                    header_row: start,
                                    start_row: start,
                                    end_row,
                                },
                                headers,
                                rows: data_rows.to_vec(),
                            });
                            table_index += 1;
                        }
                    }
                    current_start = None;
                }
            }
        }
    }

    debug!(
        sheet = sheet.name(),
        tables = tables.len(),
        "scanned sheet for sub-tables"
    );
    tables
}

/// Scan every sheet of a book, in tab order. Sheets whose name
/// case-insensitively equals [`RESERVED_SHEET_NAME`] are skipped.
#[must_use]
pub fn scan_book(book: &Book) -> Vec<DetectedTable> {
    book.sheets()
        .filter(|(name, _)| !name.eq_ignore_ascii_case(RESERVED_SHEET_NAME))
        .flat_map(|(_, sheet)| scan_sheet(sheet))
        .collect()
}
