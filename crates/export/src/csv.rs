//! CSV writer for a single merged table.

use crate::error::Result;
use socialdash_core::NormalizedTable;
use socialdash_sheet::CellValue;
use std::path::Path;

/// Write one table as CSV: a header record of canonical column names,
/// then one record per row in column order. Nulls become empty fields
/// and dates ISO-8601 strings.
pub fn write_table_csv<P: AsRef<Path>>(table: &NormalizedTable, path: P) -> Result<()> {
    let mut writer = csv::Writer::from_path(path.as_ref())?;

    writer.write_record(&table.columns)?;

    for row in &table.rows {
        let record: Vec<String> = table
            .columns
            .iter()
            .map(|column| row.get(column).unwrap_or(&CellValue::Null).as_str())
            .collect();
        writer.write_record(&record)?;
    }

    writer.flush()?;
    Ok(())
}
