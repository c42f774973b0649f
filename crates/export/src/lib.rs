//! # socialdash-export
//!
//! File writers for the merged report dataset: the five-tab XLSX
//! workbook the publish path produces, and per-table CSV.

pub mod csv;
pub mod error;
pub mod xlsx;

pub use csv::write_table_csv;
pub use error::{ExportError, Result};
pub use xlsx::write_report_xlsx;
