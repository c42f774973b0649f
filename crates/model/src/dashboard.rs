//! Dashboard model assembly: five fixed sections of declarative chart
//! specifications bound to canonical column names.
//!
//! Sections are built unconditionally; a chart may reference a column
//! the loaded workbook never produces (e.g. "Watch Time", "Sentiment").
//! Those bindings are deliberate: the rendering collaborator shows an
//! empty state for unresolved columns, and dropping them here would
//! silently change the dashboard layout between workbooks.

use crate::load::{SheetData, WorkbookData};
use serde::{Deserialize, Serialize};
use socialdash_types::{
    ChartConfig, ChartField, ChartFieldRole, ChartType, ColumnType, SectionId, SectionModel,
    SheetKind,
};
use tracing::debug;

/// Each section is capped at this many chart specifications.
pub const MAX_CHARTS_PER_SECTION: usize = 6;

/// Platform filter attached to cross-platform time series.
const PLATFORM_FILTER: [&str; 3] = ["facebook", "instagram", "youtube"];

/// Fallback date-axis binding when no date column is classified.
const DATE_FALLBACK: &str = "Date";

/// The full dashboard: loaded sheets plus the five section models.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardModel {
    pub sheets: Vec<SheetData>,
    pub sections: Vec<SectionModel>,
}

/// Raw name of the first column classified as a date, if any.
fn pick_first_date_column(sheet: &SheetData) -> Option<&str> {
    sheet
        .meta
        .columns
        .iter()
        .find(|c| c.column_type == ColumnType::Date)
        .map(|c| c.name.as_str())
}

/// Date axis for most sections: the first date column on the first
/// platform-main sheet in sheet order.
fn main_sheet_date_column(sheets: &[SheetData]) -> Option<&str> {
    sheets
        .iter()
        .find(|s| s.meta.kind == SheetKind::PlatformMain)
        .and_then(pick_first_date_column)
}

fn field(role: ChartFieldRole, column: &str) -> ChartField {
    ChartField::new(role, column)
}

fn chart(
    id: &str,
    section: SectionId,
    title: &str,
    chart_type: ChartType,
    fields: Vec<ChartField>,
) -> ChartConfig {
    ChartConfig {
        id: id.to_string(),
        section,
        title: title.to_string(),
        chart_type,
        fields,
        platforms: None,
    }
}

fn with_platforms(mut config: ChartConfig) -> ChartConfig {
    config.platforms = Some(PLATFORM_FILTER.iter().map(|p| (*p).to_string()).collect());
    config
}

fn section(id: SectionId, title: &str, mut charts: Vec<ChartConfig>) -> SectionModel {
    charts.truncate(MAX_CHARTS_PER_SECTION);
    SectionModel {
        id,
        title: title.to_string(),
        charts,
    }
}

fn build_overview_section(sheets: &[SheetData]) -> SectionModel {
    let mut charts = vec![chart(
        "overview-kpis",
        SectionId::Overview,
        "All Platforms KPIs",
        ChartType::Kpi,
        vec![
            field(ChartFieldRole::Value, "Followers"),
            field(ChartFieldRole::Value, "Total Impressions"),
            field(ChartFieldRole::Value, "Reach"),
            field(ChartFieldRole::Value, "Engagement Rate"),
            field(ChartFieldRole::Value, "Video Views"),
        ],
    )];

    let date_col = main_sheet_date_column(sheets);
    if let Some(date_col) = date_col {
        charts.push(with_platforms(chart(
            "overview-time-series",
            SectionId::Overview,
            "Followers / Reach / Impressions Over Time",
            ChartType::Line,
            vec![
                field(ChartFieldRole::X, date_col),
                field(ChartFieldRole::Y, "Followers"),
                field(ChartFieldRole::Y, "Reach"),
                field(ChartFieldRole::Y, "Total Impressions"),
            ],
        )));
    }

    charts.push(chart(
        "overview-platform-comparison",
        SectionId::Overview,
        "Platform Comparison (Impressions / Reach / Video Views)",
        ChartType::Bar,
        vec![
            field(ChartFieldRole::X, "Platform"),
            field(ChartFieldRole::Y, "Total Impressions"),
        ],
    ));

    charts.push(chart(
        "overview-engagement-rate",
        SectionId::Overview,
        "Engagement Rate Over Time",
        ChartType::Line,
        vec![
            field(ChartFieldRole::X, date_col.unwrap_or(DATE_FALLBACK)),
            field(ChartFieldRole::Y, "Engagement Rate"),
        ],
    ));

    section(SectionId::Overview, "Overview", charts)
}

fn build_reach_section(sheets: &[SheetData]) -> SectionModel {
    let mut charts = vec![chart(
        "reach-kpis",
        SectionId::Reach,
        "Reach KPIs",
        ChartType::Kpi,
        vec![
            field(ChartFieldRole::Value, "Reach"),
            field(ChartFieldRole::Value, "Organic Reach"),
            field(ChartFieldRole::Value, "Paid Reach"),
            field(ChartFieldRole::Value, "Viral Reach"),
        ],
    )];

    // This section resolves its axis from the mains by exact name,
    // Facebook first.
    let date_col = ["Facebook", "Instagram", "Youtube"]
        .iter()
        .filter_map(|name| sheets.iter().find(|s| s.meta.name == *name))
        .find_map(pick_first_date_column)
        .unwrap_or(DATE_FALLBACK);

    charts.push(with_platforms(chart(
        "reach-time-series",
        SectionId::Reach,
        "Reach Over Time by Platform",
        ChartType::Line,
        vec![
            field(ChartFieldRole::X, date_col),
            field(ChartFieldRole::Y, "Reach"),
        ],
    )));

    charts.push(chart(
        "reach-breakdown",
        SectionId::Reach,
        "Reach Breakdown (Organic / Paid / Viral)",
        ChartType::Pie,
        vec![
            field(ChartFieldRole::Series, "Reach Type"),
            field(ChartFieldRole::Value, "Reach"),
        ],
    ));

    charts.push(chart(
        "reach-top-posts",
        SectionId::Reach,
        "Top Posts By Reach",
        ChartType::Bar,
        vec![
            field(ChartFieldRole::X, "Post"),
            field(ChartFieldRole::Y, "Reach"),
        ],
    ));

    section(SectionId::Reach, "Detailed Reach", charts)
}

fn build_views_section(sheets: &[SheetData]) -> SectionModel {
    let date_col = main_sheet_date_column(sheets).unwrap_or(DATE_FALLBACK);

    let charts = vec![
        chart(
            "views-kpis",
            SectionId::Views,
            "Views KPIs",
            ChartType::Kpi,
            vec![
                field(ChartFieldRole::Value, "Views"),
                field(ChartFieldRole::Value, "Video Views"),
                field(ChartFieldRole::Value, "Watch Time"),
                field(ChartFieldRole::Value, "Average View Duration"),
            ],
        ),
        chart(
            "views-time-series",
            SectionId::Views,
            "Views Over Time",
            ChartType::Line,
            vec![
                field(ChartFieldRole::X, date_col),
                field(ChartFieldRole::Y, "Video Views"),
            ],
        ),
        chart(
            "views-top-videos",
            SectionId::Views,
            "Top Videos By Views",
            ChartType::Bar,
            vec![
                field(ChartFieldRole::X, "Post"),
                field(ChartFieldRole::Y, "Video Views"),
            ],
        ),
        chart(
            "views-monthly-summary",
            SectionId::Views,
            "Monthly Views Summary",
            ChartType::Bar,
            vec![
                field(ChartFieldRole::X, "Month"),
                field(ChartFieldRole::Y, "Post Video Views (Sum)"),
            ],
        ),
        chart(
            "views-scatter-reach-vs-views",
            SectionId::Views,
            "Reach vs Video Views",
            ChartType::Scatter,
            vec![
                field(ChartFieldRole::X, "Reach"),
                field(ChartFieldRole::Y, "Video Views"),
            ],
        ),
    ];

    section(SectionId::Views, "Detailed Views", charts)
}

fn build_impressions_section(sheets: &[SheetData]) -> SectionModel {
    let date_col = main_sheet_date_column(sheets).unwrap_or(DATE_FALLBACK);

    let charts = vec![
        chart(
            "impressions-kpis",
            SectionId::Impressions,
            "Impressions KPIs",
            ChartType::Kpi,
            vec![
                field(ChartFieldRole::Value, "Total Impressions"),
                field(ChartFieldRole::Value, "Organic Impressions"),
                field(ChartFieldRole::Value, "Paid Impressions"),
                field(ChartFieldRole::Value, "Viral Impressions"),
            ],
        ),
        chart(
            "impressions-time-series",
            SectionId::Impressions,
            "Impressions Over Time",
            ChartType::Line,
            vec![
                field(ChartFieldRole::X, date_col),
                field(ChartFieldRole::Y, "Total Impressions"),
            ],
        ),
        chart(
            "impressions-breakdown",
            SectionId::Impressions,
            "Impressions Breakdown (Organic / Paid / Viral)",
            ChartType::Pie,
            vec![
                field(ChartFieldRole::Series, "Impression Type"),
                field(ChartFieldRole::Value, "Total Impressions"),
            ],
        ),
        chart(
            "impressions-monthly",
            SectionId::Impressions,
            "Monthly Impressions Summary",
            ChartType::Bar,
            vec![
                field(ChartFieldRole::X, "Month"),
                field(ChartFieldRole::Y, "Total Impressions (Sum)"),
            ],
        ),
    ];

    section(SectionId::Impressions, "Detailed Impressions", charts)
}

fn build_engagement_section(sheets: &[SheetData]) -> SectionModel {
    let date_col = main_sheet_date_column(sheets).unwrap_or(DATE_FALLBACK);

    let charts = vec![
        chart(
            "engagement-kpis",
            SectionId::Engagement,
            "Engagement KPIs",
            ChartType::Kpi,
            vec![
                field(ChartFieldRole::Value, "Likes"),
                field(ChartFieldRole::Value, "Comments"),
                field(ChartFieldRole::Value, "Saves"),
                field(ChartFieldRole::Value, "Shares"),
                field(ChartFieldRole::Value, "Engagement Rate"),
            ],
        ),
        chart(
            "engagement-time-series",
            SectionId::Engagement,
            "Engagement Over Time",
            ChartType::Line,
            vec![
                field(ChartFieldRole::X, date_col),
                field(ChartFieldRole::Y, "Likes"),
                field(ChartFieldRole::Y, "Comments"),
                field(ChartFieldRole::Y, "Shares"),
            ],
        ),
        chart(
            "engagement-leaderboard",
            SectionId::Engagement,
            "Post-Level Engagement Leaderboard",
            ChartType::Bar,
            vec![
                field(ChartFieldRole::X, "Post"),
                field(ChartFieldRole::Y, "Engagement"),
            ],
        ),
        chart(
            "engagement-sentiment",
            SectionId::Engagement,
            "Sentiment Breakdown",
            ChartType::Bar,
            vec![
                field(ChartFieldRole::X, "Sentiment"),
                field(ChartFieldRole::Y, "Count"),
            ],
        ),
    ];

    section(SectionId::Engagement, "Detailed Engagement", charts)
}

/// Assemble the dashboard model: zero-row sheets filtered out, five
/// fixed sections built from what remains.
#[must_use]
pub fn build_dashboard_model(workbook: WorkbookData) -> DashboardModel {
    let sheets: Vec<SheetData> = workbook
        .sheets
        .into_iter()
        .filter(|s| s.meta.row_count > 0)
        .collect();

    let sections = vec![
        build_overview_section(&sheets),
        build_reach_section(&sheets),
        build_views_section(&sheets),
        build_impressions_section(&sheets),
        build_engagement_section(&sheets),
    ];

    debug!(sheets = sheets.len(), "built dashboard model");
    DashboardModel { sheets, sections }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::load::load_workbook_data;
    use chrono::NaiveDate;
    use socialdash_sheet::{Book, CellValue, Sheet};

    fn date(day: u32) -> CellValue {
        CellValue::Date(
            NaiveDate::from_ymd_opt(2024, 1, day)
                .unwrap()
                .and_hms_opt(0, 0, 0)
                .unwrap(),
        )
    }

    fn workbook_with_dates() -> WorkbookData {
        let mut book = Book::new();
        book.add_sheet(
            "Facebook",
            Sheet::from_data(vec![
                vec!["Day".into(), "Reach".into()],
                vec![date(1), CellValue::Int(500)],
            ]),
        )
        .unwrap();
        load_workbook_data(&book)
    }

    #[test]
    fn test_five_sections_capped_at_six() {
        let model = build_dashboard_model(workbook_with_dates());
        assert_eq!(model.sections.len(), 5);
        for section in &model.sections {
            assert!(!section.charts.is_empty());
            assert!(section.charts.len() <= MAX_CHARTS_PER_SECTION);
        }
    }

    #[test]
    fn test_date_axis_resolved_from_platform_main() {
        let model = build_dashboard_model(workbook_with_dates());
        let overview = &model.sections[0];

        let time_series = overview
            .charts
            .iter()
            .find(|c| c.id == "overview-time-series")
            .expect("time series present when a date column exists");
        assert_eq!(time_series.fields[0].column, "Day");
        assert_eq!(
            time_series.platforms.as_deref(),
            Some(&PLATFORM_FILTER.map(String::from)[..])
        );
    }

    #[test]
    fn test_date_axis_falls_back_to_literal() {
        let mut book = Book::new();
        // No date-typed column anywhere.
        book.add_sheet(
            "Facebook",
            Sheet::from_data(vec![
                vec!["Reach".into()],
                vec![CellValue::Int(500)],
            ]),
        )
        .unwrap();
        let model = build_dashboard_model(load_workbook_data(&book));

        let overview = &model.sections[0];
        assert!(overview
            .charts
            .iter()
            .all(|c| c.id != "overview-time-series"));

        let engagement_rate = overview
            .charts
            .iter()
            .find(|c| c.id == "overview-engagement-rate")
            .unwrap();
        assert_eq!(engagement_rate.fields[0].column, "Date");
    }

    #[test]
    fn test_zero_row_sheets_filtered() {
        let mut book = Book::new();
        book.add_sheet("Empty", Sheet::new()).unwrap();
        let model = build_dashboard_model(load_workbook_data(&book));
        assert!(model.sheets.is_empty());
        assert_eq!(model.sections.len(), 5);
    }

    #[test]
    fn test_aspirational_bindings_preserved() {
        let model = build_dashboard_model(workbook_with_dates());

        let views_kpis = &model.sections[2].charts[0];
        let bound: Vec<&str> = views_kpis.fields.iter().map(|f| f.column.as_str()).collect();
        assert!(bound.contains(&"Watch Time"));
        assert!(bound.contains(&"Average View Duration"));

        let sentiment = model.sections[4]
            .charts
            .iter()
            .find(|c| c.id == "engagement-sentiment")
            .unwrap();
        assert_eq!(sentiment.fields[0].column, "Sentiment");
    }

    #[test]
    fn test_model_serializes() {
        let model = build_dashboard_model(workbook_with_dates());
        let json = serde_json::to_string(&model).unwrap();
        assert!(json.contains("overview-kpis"));
        assert!(json.contains("\"type\":\"kpi\""));
    }
}
