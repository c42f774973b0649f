//! Column-type and sheet-name classification heuristics.

use regex::Regex;
use socialdash_sheet::CellValue;
use socialdash_types::{ColumnType, Platform, SheetKind};
use std::collections::HashSet;
use std::sync::OnceLock;

/// Thresholds for the column-type heuristic.
///
/// The defaults are behavior-parity constants, not tuned values: a
/// 200-value sample taken from the top of the column, and the 0.6/50
/// categorical cutoffs, are carried over from the source export tooling
/// this pipeline replaces.
#[derive(Debug, Clone)]
pub struct ClassifierConfig {
    /// At most this many populated values are sampled, in column order.
    pub sample_cap: usize,
    /// A string column is categorical only if distinct/sample is below this.
    pub categorical_max_ratio: f64,
    /// ... and the distinct count does not exceed this.
    pub categorical_max_distinct: usize,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        ClassifierConfig {
            sample_cap: 200,
            categorical_max_ratio: 0.6,
            categorical_max_distinct: 50,
        }
    }
}

/// Infer the semantic type of a column from its values.
///
/// Order-dependent by construction: only the first `sample_cap`
/// populated values are consulted, a deliberate bias toward early rows
/// on huge sheets. A column whose sampled prefix is numeric but turns
/// textual later is misclassified, and that is accepted behavior.
#[must_use]
pub fn classify_column(values: &[CellValue], config: &ClassifierConfig) -> ColumnType {
    // Only null and truly-empty strings are excluded from the sample;
    // a whitespace-only string still counts as a string value.
    let sample: Vec<&CellValue> = values
        .iter()
        .filter(|v| match v {
            CellValue::Null => false,
            CellValue::String(s) => !s.is_empty(),
            _ => true,
        })
        .take(config.sample_cap)
        .collect();

    if sample.is_empty() {
        return ColumnType::Empty;
    }

    if sample.iter().all(|v| matches!(v, CellValue::Date(_))) {
        return ColumnType::Date;
    }

    if sample.iter().all(|v| v.is_numeric()) {
        return ColumnType::Numeric;
    }

    if sample.iter().all(|v| matches!(v, CellValue::String(_))) {
        let distinct: HashSet<&str> = sample
            .iter()
            .filter_map(|v| match v {
                CellValue::String(s) => Some(s.as_str()),
                _ => None,
            })
            .collect();
        let ratio = distinct.len() as f64 / sample.len() as f64;
        if ratio < config.categorical_max_ratio
            && distinct.len() <= config.categorical_max_distinct
        {
            return ColumnType::Categorical;
        }
        return ColumnType::Text;
    }

    ColumnType::Mixed
}

fn post_suffix_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?i)_post$").expect("valid regex"))
}

fn monthly_summary_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?i)calculations|source").expect("valid regex"))
}

/// Platform substring probes, in fixed priority order (first match wins).
const PLATFORM_PROBES: [(&str, Platform); 3] = [
    ("facebook", Platform::Facebook),
    ("instagram", Platform::Instagram),
    ("youtube", Platform::Youtube),
];

/// Infer platform and structural kind from a sheet's name.
#[must_use]
pub fn classify_sheet_name(name: &str) -> (Platform, SheetKind) {
    let lower = name.to_lowercase();

    let platform = PLATFORM_PROBES
        .iter()
        .find(|(probe, _)| lower.contains(probe))
        .map_or(Platform::Unknown, |(_, platform)| *platform);

    let kind = if post_suffix_re().is_match(name) {
        SheetKind::PostLevel
    } else if monthly_summary_re().is_match(name) {
        SheetKind::MonthlySummary
    } else if PLATFORM_PROBES.iter().any(|(probe, _)| lower == *probe) {
        SheetKind::PlatformMain
    } else {
        SheetKind::Other
    };

    (platform, kind)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn date(day: u32) -> CellValue {
        CellValue::Date(
            NaiveDate::from_ymd_opt(2024, 1, day)
                .unwrap()
                .and_hms_opt(0, 0, 0)
                .unwrap(),
        )
    }

    #[test]
    fn test_all_null_is_empty() {
        let values = vec![CellValue::Null; 10];
        assert_eq!(
            classify_column(&values, &ClassifierConfig::default()),
            ColumnType::Empty
        );
    }

    #[test]
    fn test_fifty_distinct_dates() {
        let values: Vec<CellValue> = (1..=31).map(date).chain((1..=19).map(date)).collect();
        assert_eq!(values.len(), 50);
        assert_eq!(
            classify_column(&values, &ClassifierConfig::default()),
            ColumnType::Date
        );
    }

    #[test]
    fn test_numeric_column() {
        let values: Vec<CellValue> = (0..10).map(CellValue::Int).collect();
        assert_eq!(
            classify_column(&values, &ClassifierConfig::default()),
            ColumnType::Numeric
        );
    }

    #[test]
    fn test_repeated_categories() {
        // 5 distinct strings over 20 rows: ratio 0.25, distinct 5.
        let values: Vec<CellValue> = (0..20)
            .map(|i| CellValue::String(format!("cat{}", i % 5)))
            .collect();
        assert_eq!(
            classify_column(&values, &ClassifierConfig::default()),
            ColumnType::Categorical
        );
    }

    #[test]
    fn test_distinct_long_strings_are_text() {
        let values: Vec<CellValue> = (0..20)
            .map(|i| CellValue::String(format!("a fairly long unique caption number {i}")))
            .collect();
        assert_eq!(
            classify_column(&values, &ClassifierConfig::default()),
            ColumnType::Text
        );
    }

    #[test]
    fn test_mixed_scalars() {
        let values = vec![CellValue::Int(1), CellValue::String("x".to_string())];
        assert_eq!(
            classify_column(&values, &ClassifierConfig::default()),
            ColumnType::Mixed
        );
        // Booleans are neither numeric nor string for classification.
        let values = vec![CellValue::Bool(true), CellValue::Int(1)];
        assert_eq!(
            classify_column(&values, &ClassifierConfig::default()),
            ColumnType::Mixed
        );
    }

    #[test]
    fn test_sample_cap_bias() {
        // First 200 populated values numeric, text after: still Numeric.
        let mut values: Vec<CellValue> = (0..200).map(CellValue::Int).collect();
        values.push(CellValue::String("late arrival".to_string()));
        assert_eq!(
            classify_column(&values, &ClassifierConfig::default()),
            ColumnType::Numeric
        );
    }

    #[test]
    fn test_nulls_and_empty_strings_excluded_from_sample() {
        let values = vec![
            CellValue::Null,
            CellValue::String(String::new()),
            CellValue::Int(3),
        ];
        assert_eq!(
            classify_column(&values, &ClassifierConfig::default()),
            ColumnType::Numeric
        );
    }

    #[test]
    fn test_whitespace_string_stays_in_sample() {
        // A whitespace-only cell is a string value, so mixing it with a
        // number yields Mixed rather than Numeric.
        let values = vec![CellValue::String(" ".to_string()), CellValue::Int(1)];
        assert_eq!(
            classify_column(&values, &ClassifierConfig::default()),
            ColumnType::Mixed
        );
    }

    #[test]
    fn test_platform_priority_order() {
        assert_eq!(classify_sheet_name("Facebook").0, Platform::Facebook);
        assert_eq!(classify_sheet_name("My Instagram Data").0, Platform::Instagram);
        // "facebook" wins over "instagram" when both appear.
        assert_eq!(
            classify_sheet_name("instagram_vs_facebook").0,
            Platform::Facebook
        );
        assert_eq!(classify_sheet_name("Totals").0, Platform::Unknown);
    }

    #[test]
    fn test_sheet_kinds() {
        assert_eq!(classify_sheet_name("facebook_post").1, SheetKind::PostLevel);
        assert_eq!(classify_sheet_name("FACEBOOK_POST").1, SheetKind::PostLevel);
        assert_eq!(classify_sheet_name("Calculations").1, SheetKind::MonthlySummary);
        assert_eq!(
            classify_sheet_name("Instagram_Source").1,
            SheetKind::MonthlySummary
        );
        assert_eq!(classify_sheet_name("Facebook").1, SheetKind::PlatformMain);
        assert_eq!(classify_sheet_name("youtube").1, SheetKind::PlatformMain);
        assert_eq!(classify_sheet_name("Summary 2024").1, SheetKind::Other);
    }

    #[test]
    fn test_post_suffix_beats_platform_main() {
        let (platform, kind) = classify_sheet_name("youtube_post");
        assert_eq!(platform, Platform::Youtube);
        assert_eq!(kind, SheetKind::PostLevel);
    }
}
