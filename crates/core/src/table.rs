//! Detected-table densification onto the canonical column schema.

use crate::classify::classify_sheet_name;
use crate::metric::metric_type_for;
use crate::normalize::normalize_header;
use crate::scan::DetectedTable;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use socialdash_sheet::CellValue;
use socialdash_types::{MetricType, Platform, TableMeta};

/// Table metadata enriched with inferred platform, metric type and a
/// human-readable table type tag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizedTableMeta {
    #[serde(flatten)]
    pub table: TableMeta,
    pub platform: Platform,
    pub metric_type: MetricType,
    pub table_type: String,
}

/// A table reconciled onto canonical column names.
///
/// `columns` is an insertion-ordered set; every row carries an entry
/// (possibly null) for every column in it. Rows are densified relative
/// to this table's own columns only, not relative to other tables.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NormalizedTable {
    pub meta: NormalizedTableMeta,
    pub columns: Vec<String>,
    pub rows: Vec<IndexMap<String, CellValue>>,
}

impl NormalizedTable {
    /// A well-formed table with no columns and no rows, used when a
    /// merge finds no contributing tables.
    #[must_use]
    pub fn empty(metric_type: MetricType) -> Self {
        NormalizedTable {
            meta: NormalizedTableMeta {
                table: TableMeta {
                    sheet_name: "virtual".to_string(),
                    table_index: 0,
                    header_row: 0,
                    start_row: 0,
                    end_row: 0,
                },
                platform: Platform::Unknown,
                metric_type,
                table_type: format!("{metric_type}_merged"),
            },
            columns: Vec::new(),
            rows: Vec::new(),
        }
    }
}

/// Turn a detected table into a normalized one: headers mapped to
/// canonical names, rows re-keyed and null-filled, platform and metric
/// type inferred from the sheet name.
///
/// When two raw headers normalize to the same canonical name, the
/// first (leftmost) column claims it and later ones are dropped.
/// Columns with a blank header are dropped as well.
#[must_use]
pub fn normalize_table(detected: &DetectedTable) -> NormalizedTable {
    let (platform, _) = classify_sheet_name(&detected.meta.sheet_name);
    let metric_type = metric_type_for(&detected.meta.sheet_name);

    // (source column index, canonical name), first claim wins.
    let mut columns: Vec<(usize, String)> = Vec::new();
    for (idx, raw) in detected.headers.iter().enumerate() {
        if raw.trim().is_empty() {
            continue;
        }
        let canonical = normalize_header(raw);
        if !columns.iter().any(|(_, name)| *name == canonical) {
            columns.push((idx, canonical));
        }
    }

    let rows = detected
        .rows
        .iter()
        .map(|row| {
            columns
                .iter()
                .map(|(idx, name)| {
                    let cell = row.get(*idx).cloned().unwrap_or(CellValue::Null);
                    (name.clone(), cell)
                })
                .collect()
        })
        .collect();

    NormalizedTable {
        meta: NormalizedTableMeta {
            table: detected.meta.clone(),
            platform,
            metric_type,
            table_type: format!(
                "{}_{}",
                detected.meta.sheet_name.to_lowercase(),
                detected.meta.table_index
            ),
        },
        columns: columns.into_iter().map(|(_, name)| name).collect(),
        rows,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn detected(sheet: &str, headers: Vec<&str>, rows: Vec<Vec<CellValue>>) -> DetectedTable {
        DetectedTable {
            meta: TableMeta {
                sheet_name: sheet.to_string(),
                table_index: 0,
                header_row: 0,
                start_row: 0,
                end_row: rows.len(),
            },
            headers: headers.into_iter().map(String::from).collect(),
            rows,
        }
    }

    #[test]
    fn test_headers_canonicalized_and_rows_rekeyed() {
        let table = normalize_table(&detected(
            "Facebook",
            vec!["Date", "organic_reach", "Sum of Reach_1"],
            vec![vec!["2024-01-01".into(), CellValue::Int(10), CellValue::Int(500)]],
        ));

        assert_eq!(table.columns, vec!["Date", "Organic Reach", "Reach (Sum)"]);
        assert_eq!(table.rows[0]["Organic Reach"], CellValue::Int(10));
        assert_eq!(table.meta.platform, Platform::Facebook);
        assert_eq!(table.meta.metric_type, MetricType::Overview);
        assert_eq!(table.meta.table_type, "facebook_0");
    }

    #[test]
    fn test_ragged_rows_null_filled() {
        let table = normalize_table(&detected(
            "Facebook",
            vec!["A", "B"],
            vec![vec![CellValue::Int(1)]],
        ));

        assert_eq!(table.rows[0]["A"], CellValue::Int(1));
        assert_eq!(table.rows[0]["B"], CellValue::Null);
    }

    #[test]
    fn test_duplicate_canonical_first_claim_wins() {
        // "Month" and "Month_2" both normalize to "Month".
        let table = normalize_table(&detected(
            "Calculations",
            vec!["Month", "Month_2"],
            vec![vec!["Jan".into(), "Feb".into()]],
        ));

        assert_eq!(table.columns, vec!["Month"]);
        assert_eq!(table.rows[0]["Month"], CellValue::String("Jan".to_string()));
    }

    #[test]
    fn test_unrostered_sheet_is_other() {
        let table = normalize_table(&detected("Random Notes", vec!["A"], vec![vec![1.into()]]));
        assert_eq!(table.meta.metric_type, MetricType::Other);
        assert_eq!(table.meta.platform, Platform::Unknown);
    }

    #[test]
    fn test_empty_factory_shape() {
        let empty = NormalizedTable::empty(MetricType::Reach);
        assert!(empty.columns.is_empty());
        assert!(empty.rows.is_empty());
        assert_eq!(empty.meta.table_type, "reach_merged");
        assert_eq!(empty.meta.table.sheet_name, "virtual");
    }
}
