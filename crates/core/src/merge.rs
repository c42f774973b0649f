//! Cross-table merging: union columns across tables sharing a metric
//! type, concatenate rows, null-pad the gaps.

use crate::table::NormalizedTable;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use socialdash_sheet::CellValue;
use socialdash_types::MetricType;

/// The five merged report tables, one per destination tab.
///
/// Built fresh per request and never cached; each table's `columns` is
/// the union of its contributors' columns and its `rows` their ordered
/// concatenation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MergedDataset {
    pub overview: NormalizedTable,
    pub reach: NormalizedTable,
    pub views: NormalizedTable,
    pub impressions: NormalizedTable,
    pub engagement: NormalizedTable,
}

impl MergedDataset {
    /// Tables paired with their metric type, in report-tab order.
    #[must_use]
    pub fn tabs(&self) -> [(MetricType, &NormalizedTable); 5] {
        [
            (MetricType::Overview, &self.overview),
            (MetricType::Reach, &self.reach),
            (MetricType::Views, &self.views),
            (MetricType::Impressions, &self.impressions),
            (MetricType::Engagement, &self.engagement),
        ]
    }
}

/// Merge all tables tagged with `metric_type` into one wide table.
///
/// Column set is the union of contributing tables' columns in
/// first-seen order; rows are concatenated in table-then-row order,
/// with null for columns a source table lacks. Zero contributing
/// tables yield a well-formed empty table, not an error.
#[must_use]
pub fn merge_by_metric_type(
    tables: &[NormalizedTable],
    metric_type: MetricType,
) -> NormalizedTable {
    let contributing: Vec<&NormalizedTable> = tables
        .iter()
        .filter(|t| t.meta.metric_type == metric_type)
        .collect();

    let mut columns: Vec<String> = Vec::new();
    for table in &contributing {
        for column in &table.columns {
            if !columns.contains(column) {
                columns.push(column.clone());
            }
        }
    }

    let mut rows: Vec<IndexMap<String, CellValue>> = Vec::new();
    for table in &contributing {
        for row in &table.rows {
            let merged_row = columns
                .iter()
                .map(|column| {
                    let value = row.get(column).cloned().unwrap_or(CellValue::Null);
                    (column.clone(), value)
                })
                .collect();
            rows.push(merged_row);
        }
    }

    let meta = contributing
        .first()
        .map_or_else(|| NormalizedTable::empty(metric_type).meta, |t| t.meta.clone());

    NormalizedTable {
        meta,
        columns,
        rows,
    }
}

/// Merge everything: one table per mergeable metric type.
#[must_use]
pub fn build_merged_dataset(tables: &[NormalizedTable]) -> MergedDataset {
    MergedDataset {
        overview: merge_by_metric_type(tables, MetricType::Overview),
        reach: merge_by_metric_type(tables, MetricType::Reach),
        views: merge_by_metric_type(tables, MetricType::Views),
        impressions: merge_by_metric_type(tables, MetricType::Impressions),
        engagement: merge_by_metric_type(tables, MetricType::Engagement),
    }
}
