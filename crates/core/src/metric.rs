//! Metric-type tagging: fixed sheet-name rosters per report tab.

use socialdash_types::MetricType;

/// Platform main sheets (per-day aggregates).
pub const MAIN_SHEETS: [&str; 3] = ["Facebook", "Instagram", "Youtube"];

/// Per-post sheets.
pub const POST_SHEETS: [&str; 3] = ["facebook_post", "instagram_post", "youtube_post"];

/// Monthly rollup sheets.
pub const SUMMARY_SHEETS: [&str; 2] = ["Calculations", "Instagram_Source"];

/// Source sheet roster for the Overview tab.
pub const OVERVIEW_SOURCES: [&str; 3] = MAIN_SHEETS;

/// Source sheet roster for the Reach tab.
pub const REACH_SOURCES: [&str; 6] = [
    "Facebook",
    "Instagram",
    "Youtube",
    "facebook_post",
    "instagram_post",
    "youtube_post",
];

/// Source sheet roster for the Views tab.
pub const VIEWS_SOURCES: [&str; 8] = [
    "Facebook",
    "Instagram",
    "Youtube",
    "facebook_post",
    "instagram_post",
    "youtube_post",
    "Calculations",
    "Instagram_Source",
];

/// Source sheet roster for the Impressions tab.
pub const IMPRESSIONS_SOURCES: [&str; 4] =
    ["Facebook", "Instagram", "Calculations", "Instagram_Source"];

/// Source sheet roster for the Engagement tab.
pub const ENGAGEMENT_SOURCES: [&str; 6] = REACH_SOURCES;

/// Roster for a given metric type. `Other` has no sources.
#[must_use]
pub fn roster(metric_type: MetricType) -> &'static [&'static str] {
    match metric_type {
        MetricType::Overview => &OVERVIEW_SOURCES,
        MetricType::Reach => &REACH_SOURCES,
        MetricType::Views => &VIEWS_SOURCES,
        MetricType::Impressions => &IMPRESSIONS_SOURCES,
        MetricType::Engagement => &ENGAGEMENT_SOURCES,
        MetricType::Other => &[],
    }
}

/// Assign a sheet to a metric category: the first roster (in fixed
/// Overview → Engagement order) containing the sheet name wins; sheets
/// on no roster are `Other`. Absence from a roster is not an error;
/// the sheet simply contributes no rows to that tab.
#[must_use]
pub fn metric_type_for(sheet_name: &str) -> MetricType {
    MetricType::MERGEABLE
        .into_iter()
        .find(|metric| {
            roster(*metric)
                .iter()
                .any(|source| source.eq_ignore_ascii_case(sheet_name))
        })
        .unwrap_or(MetricType::Other)
}
