//! Per-sheet metadata assembly for the simpler row-object load path.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use socialdash_core::{classify_column, classify_sheet_name, normalize_header, ClassifierConfig};
use socialdash_sheet::{Book, CellValue};
use socialdash_types::{ColumnMeta, Platform, SheetKind};
use tracing::debug;

/// Metadata for one logical spreadsheet tab.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SheetMeta {
    pub name: String,
    pub platform: Platform,
    pub kind: SheetKind,
    pub row_count: usize,
    pub columns: Vec<ColumnMeta>,
}

/// One tab's row records plus its metadata. Owned exclusively by the
/// [`WorkbookData`] it belongs to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SheetData {
    pub name: String,
    pub rows: Vec<IndexMap<String, CellValue>>,
    pub meta: SheetMeta,
}

/// All sheets of a loaded workbook, in tab order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkbookData {
    pub sheets: Vec<SheetData>,
}

/// Build sheet metadata from its row records: per-column value
/// sampling for type classification, header normalization, and
/// platform/kind inference from the sheet name.
#[must_use]
pub fn build_sheet_meta(
    name: &str,
    rows: &[IndexMap<String, CellValue>],
    config: &ClassifierConfig,
) -> SheetMeta {
    let column_names: Vec<String> = rows
        .first()
        .map(|row| row.keys().cloned().collect())
        .unwrap_or_default();

    let columns = column_names
        .into_iter()
        .map(|column| {
            let values: Vec<CellValue> = rows
                .iter()
                .map(|row| row.get(&column).cloned().unwrap_or(CellValue::Null))
                .collect();
            ColumnMeta {
                normalized_name: normalize_header(&column),
                column_type: classify_column(&values, config),
                name: column,
            }
        })
        .collect();

    let (platform, kind) = classify_sheet_name(name);

    SheetMeta {
        name: name.to_string(),
        platform,
        kind,
        row_count: rows.len(),
        columns,
    }
}

/// Load every sheet of a book through the row-object view.
#[must_use]
pub fn load_workbook_data(book: &Book) -> WorkbookData {
    let config = ClassifierConfig::default();

    let sheets = book
        .sheets()
        .map(|(name, sheet)| {
            let rows = sheet.records();
            let meta = build_sheet_meta(name, &rows, &config);
            debug!(
                sheet = name,
                rows = meta.row_count,
                columns = meta.columns.len(),
                "loaded sheet"
            );
            SheetData {
                name: name.to_string(),
                rows,
                meta,
            }
        })
        .collect();

    WorkbookData { sheets }
}
