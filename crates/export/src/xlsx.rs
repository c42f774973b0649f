//! Five-tab report workbook writer.

use crate::error::Result;
use rust_xlsxwriter::{Workbook, Worksheet};
use socialdash_core::{MergedDataset, NormalizedTable};
use socialdash_sheet::CellValue;
use std::path::Path;
use tracing::debug;

fn write_cell(worksheet: &mut Worksheet, row: u32, col: u16, cell: &CellValue) -> Result<()> {
    match cell {
        CellValue::Null => {}
        CellValue::Bool(b) => {
            worksheet.write_boolean(row, col, *b)?;
        }
        CellValue::Int(i) => {
            // Excel stores all numbers as f64; integers beyond 2^53
            // lose precision.
            worksheet.write_number(row, col, *i as f64)?;
        }
        CellValue::Float(f) => {
            worksheet.write_number(row, col, *f)?;
        }
        CellValue::String(s) => {
            worksheet.write_string(row, col, s)?;
        }
        CellValue::Date(_) => {
            worksheet.write_string(row, col, cell.as_str())?;
        }
    }
    Ok(())
}

fn write_table(worksheet: &mut Worksheet, table: &NormalizedTable) -> Result<()> {
    for (col_idx, column) in table.columns.iter().enumerate() {
        let col = u16::try_from(col_idx).map_err(overflow)?;
        worksheet.write_string(0, col, column)?;
    }

    for (row_idx, row) in table.rows.iter().enumerate() {
        let row_num = u32::try_from(row_idx + 1).map_err(overflow)?;
        for (col_idx, column) in table.columns.iter().enumerate() {
            let col_num = u16::try_from(col_idx).map_err(overflow)?;
            let cell = row.get(column).unwrap_or(&CellValue::Null);
            write_cell(worksheet, row_num, col_num, cell)?;
        }
    }

    Ok(())
}

fn overflow<E>(_: E) -> std::io::Error {
    std::io::Error::new(std::io::ErrorKind::Other, "cell index overflow")
}

/// Write the merged dataset as a five-tab workbook, one tab per metric
/// type in report order, each with a header row followed by data rows
/// in the table's column order.
pub fn write_report_xlsx<P: AsRef<Path>>(dataset: &MergedDataset, path: P) -> Result<()> {
    let mut workbook = Workbook::new();

    for (metric, table) in dataset.tabs() {
        let worksheet = workbook.add_worksheet();
        worksheet.set_name(metric.tab_title())?;
        write_table(worksheet, table)?;
        debug!(
            tab = metric.tab_title(),
            rows = table.rows.len(),
            columns = table.columns.len(),
            "wrote report tab"
        );
    }

    workbook.save(path.as_ref())?;
    Ok(())
}
