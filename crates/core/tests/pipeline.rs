//! End-to-end pipeline tests: raw grids in, merged datasets out.

use chrono::NaiveDate;
use socialdash_core::{
    build_merged_dataset, build_report_dataset, normalize_table, scan_book, NormalizedTable,
};
use socialdash_sheet::{Book, CellValue, Sheet};
use socialdash_types::{MetricType, Platform};

fn date(day: u32) -> CellValue {
    CellValue::Date(
        NaiveDate::from_ymd_opt(2024, 1, day)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap(),
    )
}

/// A workbook in the shape real exports take: a daily table and a
/// monthly rollup stacked in one sheet, a post sheet, and the
/// placeholder tab.
fn sample_book() -> Book {
    let mut book = Book::new();

    book.add_sheet(
        "Facebook",
        Sheet::from_data(vec![
            vec!["Date".into(), "Followers".into(), "Reach".into()],
            vec![date(1), CellValue::Int(100), CellValue::Int(500)],
            vec![date(2), CellValue::Int(110), CellValue::Int(510)],
            vec![CellValue::Null, CellValue::Null, CellValue::Null],
            vec!["Month".into(), "Sum of Reach".into(), CellValue::Null],
            vec!["Jan".into(), CellValue::Int(15000), CellValue::Null],
        ]),
    )
    .unwrap();

    book.add_sheet(
        "facebook_post",
        Sheet::from_data(vec![
            vec![
                "Created Time (UTC)".into(),
                "Perma Link".into(),
                "Reach".into(),
            ],
            vec![date(1), "p1".into(), CellValue::Int(50)],
        ]),
    )
    .unwrap();

    book.add_sheet(
        "Sheet1",
        Sheet::from_data(vec![vec!["Noise"], vec!["ignored"]]),
    )
    .unwrap();

    book
}

/// The two-sheet shape from the canonical reach walkthrough: a plain
/// two-row Facebook main and one Facebook post.
fn scenario_book() -> Book {
    let mut book = Book::new();

    book.add_sheet(
        "Facebook",
        Sheet::from_data(vec![
            vec!["Date".into(), "Followers".into(), "Reach".into()],
            vec![date(1), CellValue::Int(100), CellValue::Int(500)],
            vec![date(2), CellValue::Int(110), CellValue::Int(510)],
        ]),
    )
    .unwrap();

    book.add_sheet(
        "facebook_post",
        Sheet::from_data(vec![
            vec![
                "Created Time (UTC)".into(),
                "Perma Link".into(),
                "Reach".into(),
            ],
            vec![date(1), "p1".into(), CellValue::Int(50)],
        ]),
    )
    .unwrap();

    book
}

#[test]
fn scan_then_normalize_then_merge() {
    let book = sample_book();

    let detected = scan_book(&book);
    // Facebook splits into two sub-tables; the post sheet is one;
    // Sheet1 is reserved and never scanned.
    assert_eq!(detected.len(), 3);
    assert_eq!(detected[0].meta.sheet_name, "Facebook");
    assert_eq!(detected[1].meta.sheet_name, "Facebook");
    assert_eq!(detected[1].meta.table_index, 1);
    assert_eq!(detected[2].meta.sheet_name, "facebook_post");

    let normalized: Vec<NormalizedTable> = detected.iter().map(normalize_table).collect();
    assert_eq!(normalized[1].columns, vec!["Month", "Reach (Sum)"]);
    assert_eq!(normalized[0].meta.platform, Platform::Facebook);
    assert_eq!(normalized[0].meta.metric_type, MetricType::Overview);
    assert_eq!(normalized[2].meta.metric_type, MetricType::Reach);

    let dataset = build_merged_dataset(&normalized);
    // Both Facebook sub-tables are tagged overview; their columns union.
    assert_eq!(
        dataset.overview.columns,
        vec!["Date", "Followers", "Reach", "Month", "Reach (Sum)"]
    );
    assert_eq!(dataset.overview.rows.len(), 3);
    assert_eq!(dataset.overview.rows[2]["Followers"], CellValue::Null);
    assert_eq!(
        dataset.overview.rows[2]["Month"],
        CellValue::String("Jan".to_string())
    );

    // The post table lands on the reach tab.
    assert_eq!(dataset.reach.rows.len(), 1);
    assert_eq!(
        dataset.reach.rows[0]["Perma Link"],
        CellValue::String("p1".to_string())
    );

    // Unfed tabs are present and well-formed.
    assert!(dataset.views.rows.is_empty());
    assert!(dataset.impressions.rows.is_empty());
    assert!(dataset.engagement.rows.is_empty());
}

#[test]
fn merge_is_deterministic() {
    let book = sample_book();
    let tables: Vec<NormalizedTable> = scan_book(&book).iter().map(normalize_table).collect();
    assert_eq!(build_merged_dataset(&tables), build_merged_dataset(&tables));
}

#[test]
fn report_dataset_reach_scenario() {
    let dataset = build_report_dataset(&scenario_book());

    // Two main rows plus one post row, all Facebook, all with Reach.
    assert_eq!(dataset.reach.rows.len(), 3);
    for row in &dataset.reach.rows {
        assert_eq!(row["Platform"], CellValue::String("Facebook".to_string()));
        assert!(row["Reach"].is_numeric());
        assert_eq!(row["ProfileName"], CellValue::Null);
    }
    assert_eq!(dataset.reach.rows[0]["Post"], CellValue::Null);
    assert_eq!(dataset.reach.rows[1]["Post"], CellValue::Null);
    assert_eq!(
        dataset.reach.rows[2]["Post"],
        CellValue::String("p1".to_string())
    );
    assert_eq!(dataset.reach.rows[2]["Date"], date(1));
}

#[test]
fn report_dataset_stacked_sheet_rollup_rows() {
    // The record view of a multi-table sheet keeps the rollup rows but
    // never manufactures a record for the blank separator row.
    let dataset = build_report_dataset(&sample_book());

    // 4 Facebook records (2 daily + 2 rollup) plus 1 post record.
    assert_eq!(dataset.reach.rows.len(), 5);
    for row in &dataset.reach.rows {
        assert_eq!(row["Platform"], CellValue::String("Facebook".to_string()));
    }
    // Rollup rows carry no Reach value, only the daily rows do.
    let numeric_reach = dataset
        .reach
        .rows
        .iter()
        .filter(|row| row["Reach"].is_numeric())
        .count();
    assert_eq!(numeric_reach, 3);
    // No all-null record: every row has its Date or a rollup value.
    assert!(dataset
        .reach
        .rows
        .iter()
        .all(|row| row.values().any(|v| !v.is_null())));
}

#[test]
fn pipeline_tolerates_empty_book() {
    let book = Book::new();
    assert!(scan_book(&book).is_empty());
    let dataset = build_merged_dataset(&[]);
    for (_, table) in dataset.tabs() {
        assert!(table.columns.is_empty());
        assert!(table.rows.is_empty());
    }
}
