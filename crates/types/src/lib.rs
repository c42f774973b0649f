//! # socialdash-types
//!
//! Shared type definitions for the socialdash pipeline.
//!
//! This crate provides the enums and descriptive structs used across the
//! socialdash ecosystem without any dependencies on higher-level crates
//! like sheet or core.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Social platform a sheet's data belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Facebook,
    Instagram,
    Youtube,
    Unknown,
}

impl Platform {
    /// Display label used in report rows ("Facebook", not "facebook").
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Platform::Facebook => "Facebook",
            Platform::Instagram => "Instagram",
            Platform::Youtube => "Youtube",
            Platform::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Structural kind of a sheet, inferred from its name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SheetKind {
    /// Per-day aggregate metrics for one platform (sheet named exactly
    /// "Facebook", "Instagram" or "Youtube").
    PlatformMain,
    /// Per-post metrics (sheet name ending in `_post`).
    PostLevel,
    /// Monthly rollups ("Calculations", "Instagram_Source").
    MonthlySummary,
    Other,
}

/// One of the five fixed report categories a table is assigned to for
/// merging, plus `Other` for tables that belong to none of them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MetricType {
    Overview,
    Reach,
    Views,
    Impressions,
    Engagement,
    Other,
}

impl MetricType {
    /// The five mergeable metric types, in report-tab order.
    pub const MERGEABLE: [MetricType; 5] = [
        MetricType::Overview,
        MetricType::Reach,
        MetricType::Views,
        MetricType::Impressions,
        MetricType::Engagement,
    ];

    /// Destination tab title for this metric ("Overview", "Reach", ...).
    #[must_use]
    pub fn tab_title(&self) -> &'static str {
        match self {
            MetricType::Overview => "Overview",
            MetricType::Reach => "Reach",
            MetricType::Views => "Views",
            MetricType::Impressions => "Impressions",
            MetricType::Engagement => "Engagement",
            MetricType::Other => "Other",
        }
    }

    /// Lowercase identifier used in `table_type` strings and JSON.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            MetricType::Overview => "overview",
            MetricType::Reach => "reach",
            MetricType::Views => "views",
            MetricType::Impressions => "impressions",
            MetricType::Engagement => "engagement",
            MetricType::Other => "other",
        }
    }
}

impl fmt::Display for MetricType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Semantic type of a column, inferred by sampling its values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnType {
    Date,
    Numeric,
    Categorical,
    Text,
    Mixed,
    Empty,
}

/// Metadata for a single column of a sheet or detected table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnMeta {
    /// Raw header string as it appears in the source.
    pub name: String,
    /// Canonical display name after normalization.
    pub normalized_name: String,
    #[serde(rename = "type")]
    pub column_type: ColumnType,
}

/// Location of a detected sub-table within its sheet.
///
/// Row indices are zero-based positions in the raw grid; `header_row`
/// always equals `start_row` (the first row of the region is the header).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableMeta {
    pub sheet_name: String,
    pub table_index: usize,
    pub header_row: usize,
    pub start_row: usize,
    pub end_row: usize,
}

/// Dashboard section identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionId {
    Overview,
    Reach,
    Views,
    Impressions,
    Engagement,
}

/// Chart widget type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartType {
    Line,
    Bar,
    Pie,
    Scatter,
    Table,
    Kpi,
}

/// Role a bound column plays in a chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartFieldRole {
    X,
    Y,
    Series,
    Value,
}

/// A single column binding in a chart specification.
///
/// The column is referenced by canonical name; it may not exist in the
/// currently loaded workbook, in which case the renderer shows an
/// empty/absent state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartField {
    pub role: ChartFieldRole,
    pub column: String,
}

impl ChartField {
    #[must_use]
    pub fn new(role: ChartFieldRole, column: impl Into<String>) -> Self {
        ChartField {
            role,
            column: column.into(),
        }
    }
}

/// Declarative chart specification. Holds no data, only column-name
/// bindings resolved against whatever rows are passed to the renderer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartConfig {
    pub id: String,
    pub section: SectionId,
    pub title: String,
    #[serde(rename = "type")]
    pub chart_type: ChartType,
    pub fields: Vec<ChartField>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub platforms: Option<Vec<String>>,
}

/// One dashboard section with its ordered chart specifications.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionModel {
    pub id: SectionId,
    pub title: String,
    pub charts: Vec<ChartConfig>,
}
