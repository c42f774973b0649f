//! # socialdash-model
//!
//! The row-object view of a workbook and the dashboard model built on
//! top of it. [`load_workbook_data`] classifies and normalizes every
//! sheet into [`SheetData`]; [`build_dashboard_model`] arranges five
//! fixed chart sections over the result.

pub mod dashboard;
pub mod load;

pub use dashboard::{build_dashboard_model, DashboardModel, MAX_CHARTS_PER_SECTION};
pub use load::{build_sheet_meta, load_workbook_data, SheetData, SheetMeta, WorkbookData};
