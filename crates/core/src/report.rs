//! Canonical report extraction for the publish path.
//!
//! Each destination tab has a fixed column schema; values are pulled
//! out of the source sheets' row records through ordered alias lists
//! (first alias present with a value of the expected primitive kind
//! wins, later aliases are never consulted once one matches).

use crate::merge::MergedDataset;
use crate::table::NormalizedTable;
use indexmap::IndexMap;
use socialdash_sheet::{Book, CellValue};
use socialdash_types::{MetricType, Platform};
use tracing::debug;

/// Declared column order for the Overview tab.
pub const OVERVIEW_COLUMNS: [&str; 7] = [
    "Platform",
    "Date",
    "Followers",
    "TotalImpressions",
    "Reach",
    "EngagementRate",
    "VideoViews",
];

/// Declared column order for the Reach tab.
pub const REACH_COLUMNS: [&str; 8] = [
    "Platform",
    "Date",
    "ProfileName",
    "Post",
    "Reach",
    "OrganicReach",
    "PaidReach",
    "ViralReach",
];

/// Declared column order for the Views tab.
pub const VIEWS_COLUMNS: [&str; 7] = [
    "Platform",
    "Date",
    "ProfileName",
    "Post",
    "Views",
    "VideoViews",
    "WatchTimeMinutes",
];

/// Declared column order for the Impressions tab.
pub const IMPRESSIONS_COLUMNS: [&str; 9] = [
    "Platform",
    "Date",
    "ProfileName",
    "Post",
    "TotalImpressions",
    "OrganicImpressions",
    "PaidImpressions",
    "ViralImpressions",
    "Month",
];

/// Declared column order for the Engagement tab.
pub const ENGAGEMENT_COLUMNS: [&str; 10] = [
    "Platform",
    "Date",
    "ProfileName",
    "Post",
    "Likes",
    "Comments",
    "Saves",
    "Shares",
    "EngagementRate",
    "NetSentimentScore",
];

type Record = IndexMap<String, CellValue>;

/// First alias holding a numeric value wins; no match is null.
fn get_number(record: &Record, keys: &[&str]) -> CellValue {
    for key in keys {
        if let Some(value) = record.get(*key) {
            if value.is_numeric() {
                return value.clone();
            }
        }
    }
    CellValue::Null
}

/// First alias holding a non-blank string wins; no match is null.
fn get_string(record: &Record, keys: &[&str]) -> CellValue {
    for key in keys {
        if let Some(value) = record.get(*key) {
            if value.as_text().is_some() {
                return value.clone();
            }
        }
    }
    CellValue::Null
}

/// The raw value under a key, whatever its kind.
fn get_raw(record: &Record, key: &str) -> CellValue {
    record.get(key).cloned().unwrap_or(CellValue::Null)
}

/// Row records of a named sheet; a missing sheet contributes nothing.
fn sheet_records(book: &Book, name: &str) -> Vec<Record> {
    book.get_sheet(name).map_or_else(Vec::new, |s| s.records())
}

fn row(columns: &[&str], values: Vec<CellValue>) -> Record {
    columns
        .iter()
        .map(|c| (*c).to_string())
        .zip(values)
        .collect()
}

fn report_table(metric_type: MetricType, columns: &[&str], rows: Vec<Record>) -> NormalizedTable {
    let mut table = NormalizedTable::empty(metric_type);
    table.columns = columns.iter().map(|c| (*c).to_string()).collect();
    table.rows = rows;
    table
}

struct OverviewSource {
    platform: Platform,
    sheet_name: &'static str,
    date_key: &'static str,
    followers_keys: &'static [&'static str],
    impressions_keys: &'static [&'static str],
    reach_keys: &'static [&'static str],
    engagement_rate_keys: &'static [&'static str],
    video_views_keys: &'static [&'static str],
}

const OVERVIEW_SOURCES: [OverviewSource; 3] = [
    OverviewSource {
        platform: Platform::Facebook,
        sheet_name: "Facebook",
        date_key: "Date",
        followers_keys: &["Followers", "Fans"],
        impressions_keys: &["Total Impressions", "Impressions"],
        reach_keys: &["Reach"],
        engagement_rate_keys: &[],
        video_views_keys: &["Video Views"],
    },
    OverviewSource {
        platform: Platform::Instagram,
        sheet_name: "Instagram",
        date_key: "Date",
        followers_keys: &["Followers"],
        impressions_keys: &["Total Impressions", "Impressions"],
        reach_keys: &["Reach"],
        engagement_rate_keys: &["Engagement Rate (Shares + Saves)"],
        video_views_keys: &["Post Video Views", "Views"],
    },
    OverviewSource {
        platform: Platform::Youtube,
        sheet_name: "Youtube",
        date_key: "Date",
        followers_keys: &["Followers Count"],
        impressions_keys: &[],
        reach_keys: &[],
        engagement_rate_keys: &[],
        video_views_keys: &["videoViews", "Video Views"],
    },
];

/// Main-sheet sources shared by the Reach/Views/Engagement builders.
const MAIN_SOURCES: [(Platform, &str); 3] = [
    (Platform::Facebook, "Facebook"),
    (Platform::Instagram, "Instagram"),
    (Platform::Youtube, "Youtube"),
];

/// Post-sheet sources; dates live under "Created Time (UTC)" and the
/// post identity under "Perma Link" falling back to "Text".
const POST_SOURCES: [(Platform, &str); 3] = [
    (Platform::Facebook, "facebook_post"),
    (Platform::Instagram, "instagram_post"),
    (Platform::Youtube, "youtube_post"),
];

const POST_DATE_KEY: &str = "Created Time (UTC)";
const POST_KEYS: &[&str] = &["Perma Link", "Text"];

fn build_overview(book: &Book) -> NormalizedTable {
    let mut rows = Vec::new();

    for source in &OVERVIEW_SOURCES {
        for record in sheet_records(book, source.sheet_name) {
            rows.push(row(
                &OVERVIEW_COLUMNS,
                vec![
                    source.platform.label().into(),
                    get_raw(&record, source.date_key),
                    get_number(&record, source.followers_keys),
                    get_number(&record, source.impressions_keys),
                    get_number(&record, source.reach_keys),
                    get_number(&record, source.engagement_rate_keys),
                    get_number(&record, source.video_views_keys),
                ],
            ));
        }
    }

    report_table(MetricType::Overview, &OVERVIEW_COLUMNS, rows)
}

fn build_reach(book: &Book) -> NormalizedTable {
    let mut rows = Vec::new();

    for (platform, sheet_name) in MAIN_SOURCES {
        for record in sheet_records(book, sheet_name) {
            rows.push(row(
                &REACH_COLUMNS,
                vec![
                    platform.label().into(),
                    get_raw(&record, "Date"),
                    get_string(&record, &["Profile Name"]),
                    CellValue::Null,
                    get_number(&record, &["Reach"]),
                    get_number(&record, &["Organic Reach"]),
                    get_number(&record, &["Paid Reach"]),
                    get_number(&record, &["Viral Reach"]),
                ],
            ));
        }
    }

    for (platform, sheet_name) in POST_SOURCES {
        for record in sheet_records(book, sheet_name) {
            rows.push(row(
                &REACH_COLUMNS,
                vec![
                    platform.label().into(),
                    get_raw(&record, POST_DATE_KEY),
                    get_string(&record, &["Profile Name"]),
                    get_string(&record, POST_KEYS),
                    get_number(&record, &["Reach"]),
                    get_number(&record, &["Organic Reach"]),
                    get_number(&record, &["Paid Reach"]),
                    get_number(&record, &["Viral Reach"]),
                ],
            ));
        }
    }

    report_table(MetricType::Reach, &REACH_COLUMNS, rows)
}

fn build_views(book: &Book) -> NormalizedTable {
    let mut rows = Vec::new();

    for (platform, sheet_name) in MAIN_SOURCES {
        for record in sheet_records(book, sheet_name) {
            rows.push(row(
                &VIEWS_COLUMNS,
                vec![
                    platform.label().into(),
                    get_raw(&record, "Date"),
                    get_string(&record, &["Profile Name"]),
                    CellValue::Null,
                    get_number(&record, &["Views"]),
                    get_number(&record, &["Video Views", "Post Video Views", "videoViews"]),
                    get_number(&record, &["Estimated Minutes Watched"]),
                ],
            ));
        }
    }

    for (platform, sheet_name) in POST_SOURCES {
        for record in sheet_records(book, sheet_name) {
            rows.push(row(
                &VIEWS_COLUMNS,
                vec![
                    platform.label().into(),
                    get_raw(&record, POST_DATE_KEY),
                    get_string(&record, &["Profile Name"]),
                    get_string(&record, POST_KEYS),
                    get_number(&record, &["Views"]),
                    get_number(&record, &["Video Views"]),
                    get_number(&record, &["Estimated Minutes Watched"]),
                ],
            ));
        }
    }

    for record in sheet_records(book, "Calculations") {
        rows.push(row(
            &VIEWS_COLUMNS,
            vec![
                "All".into(),
                CellValue::Null,
                CellValue::Null,
                CellValue::Null,
                CellValue::Null,
                get_number(&record, &["SUM of Post Video Views_1"]),
                CellValue::Null,
            ],
        ));
    }

    for record in sheet_records(book, "Instagram_Source") {
        rows.push(row(
            &VIEWS_COLUMNS,
            vec![
                Platform::Instagram.label().into(),
                CellValue::Null,
                CellValue::Null,
                CellValue::Null,
                get_number(&record, &["Video Views"]),
                get_number(&record, &["SUM of Post Video Views"]),
                CellValue::Null,
            ],
        ));
    }

    report_table(MetricType::Views, &VIEWS_COLUMNS, rows)
}

fn build_impressions(book: &Book) -> NormalizedTable {
    let mut rows = Vec::new();

    // Youtube exports carry no impressions; only the FB/IG mains feed this tab.
    for (platform, sheet_name) in [
        (Platform::Facebook, "Facebook"),
        (Platform::Instagram, "Instagram"),
    ] {
        for record in sheet_records(book, sheet_name) {
            rows.push(row(
                &IMPRESSIONS_COLUMNS,
                vec![
                    platform.label().into(),
                    get_raw(&record, "Date"),
                    get_string(&record, &["Profile Name"]),
                    CellValue::Null,
                    get_number(&record, &["Total Impressions", "Impressions"]),
                    get_number(&record, &["Organic Impressions"]),
                    get_number(&record, &["Paid Impressions"]),
                    get_number(&record, &["Viral Impressions"]),
                    CellValue::Null,
                ],
            ));
        }
    }

    for record in sheet_records(book, "Calculations") {
        rows.push(row(
            &IMPRESSIONS_COLUMNS,
            vec![
                "All".into(),
                CellValue::Null,
                CellValue::Null,
                CellValue::Null,
                get_number(&record, &["SUM of Total Impressions_1"]),
                CellValue::Null,
                CellValue::Null,
                CellValue::Null,
                get_string(&record, &["Month_1", "Month"]),
            ],
        ));
    }

    for record in sheet_records(book, "Instagram_Source") {
        rows.push(row(
            &IMPRESSIONS_COLUMNS,
            vec![
                Platform::Instagram.label().into(),
                CellValue::Null,
                CellValue::Null,
                CellValue::Null,
                CellValue::Null,
                CellValue::Null,
                CellValue::Null,
                CellValue::Null,
                get_string(&record, &["Month_1", "Month"]),
            ],
        ));
    }

    report_table(MetricType::Impressions, &IMPRESSIONS_COLUMNS, rows)
}

fn build_engagement(book: &Book) -> NormalizedTable {
    let mut rows = Vec::new();

    for (platform, sheet_name) in MAIN_SOURCES {
        for record in sheet_records(book, sheet_name) {
            rows.push(row(
                &ENGAGEMENT_COLUMNS,
                vec![
                    platform.label().into(),
                    get_raw(&record, "Date"),
                    get_string(&record, &["Profile Name"]),
                    CellValue::Null,
                    get_number(&record, &["Likes"]),
                    get_number(&record, &["Comments"]),
                    get_number(&record, &["Saves"]),
                    get_number(&record, &["Shares"]),
                    get_number(&record, &["Engagement Rate (Shares + Saves)"]),
                    get_number(&record, &["Net Sentiment Score"]),
                ],
            ));
        }
    }

    for (platform, sheet_name) in POST_SOURCES {
        for record in sheet_records(book, sheet_name) {
            rows.push(row(
                &ENGAGEMENT_COLUMNS,
                vec![
                    platform.label().into(),
                    get_raw(&record, POST_DATE_KEY),
                    get_string(&record, &["Profile Name"]),
                    get_string(&record, POST_KEYS),
                    get_number(&record, &["Likes", "Video Likes"]),
                    get_number(&record, &["Comments", "Video Comments"]),
                    get_number(&record, &["Saves"]),
                    get_number(&record, &["Shares"]),
                    CellValue::Null,
                    get_number(&record, &["Net Sentiment Score", "Net Sentiment Score_1"]),
                ],
            ));
        }
    }

    report_table(MetricType::Engagement, &ENGAGEMENT_COLUMNS, rows)
}

/// Build the five canonical report tables from a workbook.
///
/// Cannot fail: absent sheets and columns simply contribute nothing.
#[must_use]
pub fn build_report_dataset(book: &Book) -> MergedDataset {
    let dataset = MergedDataset {
        overview: build_overview(book),
        reach: build_reach(book),
        views: build_views(book),
        impressions: build_impressions(book),
        engagement: build_engagement(book),
    };

    debug!(
        overview = dataset.overview.rows.len(),
        reach = dataset.reach.rows.len(),
        views = dataset.views.rows.len(),
        impressions = dataset.impressions.rows.len(),
        engagement = dataset.engagement.rows.len(),
        "built canonical report dataset"
    );
    dataset
}
