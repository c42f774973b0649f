//! # socialdash-core
//!
//! The heuristic table-detection and column-normalization pipeline.
//!
//! Analytics exports from Facebook/Instagram/YouTube arrive as ad-hoc
//! workbooks: several blank-row-delimited tables per sheet, header
//! spellings that drift between exports, and rollup tabs mixed in with
//! daily data. This crate reconstructs a normalized tabular model from
//! that input:
//!
//! 1. [`scan::scan_book`] splits raw grids into [`scan::DetectedTable`]s.
//! 2. [`classify`] infers column semantic types and sheet platform/kind.
//! 3. [`normalize::normalize_header`] reconciles header spellings onto
//!    canonical display names.
//! 4. [`table::normalize_table`] densifies detected tables onto their
//!    canonical column sets.
//! 5. [`metric`] tags tables with one of the five report categories and
//!    [`merge`] unions them into per-metric datasets.
//! 6. [`report`] extracts the fixed-schema tabs the publish path writes.
//!
//! Everything here is synchronous, CPU-bound and pure with respect to
//! its inputs; malformed input degrades to empty results, never errors.

pub mod classify;
pub mod merge;
pub mod metric;
pub mod normalize;
pub mod report;
pub mod scan;
pub mod table;

pub use classify::{classify_column, classify_sheet_name, ClassifierConfig};
pub use merge::{build_merged_dataset, merge_by_metric_type, MergedDataset};
pub use metric::metric_type_for;
pub use normalize::normalize_header;
pub use report::build_report_dataset;
pub use scan::{scan_book, scan_sheet, DetectedTable};
pub use table::{normalize_table, NormalizedTable, NormalizedTableMeta};
