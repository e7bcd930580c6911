//! End-to-end aggregation tests: backend JSON body in, rendered report out.

use reportdash_core::{api_error, extract, Report, ReportRows};
use serde_json::json;

// ---------------------------------------------------------------------------
// success path
// ---------------------------------------------------------------------------

#[test]
fn array_body_aggregates_into_sorted_report() {
    let body = json!({
        "message": "Total summary calculated and saved successfully.",
        "data": [
            { "date": "2024-01-02", "total_bet": 100.0, "total_win": 50.0,
              "reel_spins": 10, "social_spins": 5, "total_spins": 15,
              "rtp": 50.0, "ggr_eur": 10.0, "ggr_gbp": 8.0 },
            { "date": "2024-01-01", "total_bet": 200.0, "total_win": 150.0,
              "reel_spins": 20, "social_spins": 10, "total_spins": 30,
              "rtp": 75.0, "ggr_eur": 20.0, "ggr_gbp": 15.0 }
        ]
    });

    assert_eq!(api_error(&body), None);
    let rows: ReportRows = extract(&body, "data").unwrap();
    let report = Report::build(rows.into_records());

    assert_eq!(report.rows.len(), 2);
    assert_eq!(report.rows[0].date, "2024-01-01");
    assert_eq!(report.rows[1].date, "2024-01-02");
    assert_eq!(report.totals.total_bet, 300.0);
    assert_eq!(report.totals.total_win, 200.0);
    assert_eq!(report.totals.total_spins, 45);
    assert_eq!(
        report.spreadsheet_filename(),
        "total_summary_2024-01-01_to_2024-01-02.xlsx"
    );
}

#[test]
fn mapping_body_uses_record_dates_not_mapping_keys() {
    // The mapping keys sort the other way around than the record dates;
    // the date range must come from the records themselves.
    let body = json!({
        "data": {
            "x": { "date": "2024-01-02", "total_bet": 100.0, "total_win": 50.0,
                   "ggr_eur": 10.0, "ggr_gbp": 8.0 },
            "y": { "date": "2024-01-01", "total_bet": 200.0, "total_win": 150.0,
                   "ggr_eur": 20.0, "ggr_gbp": 15.0 }
        }
    });

    let rows: ReportRows = extract(&body, "data").unwrap();
    let report = Report::build(rows.into_records());

    assert_eq!(report.totals.total_bet, 300.0);
    assert_eq!(report.totals.total_win, 200.0);
    assert!((report.totals.avg_rtp() - 66.666_666_666).abs() < 1e-6);
    assert_eq!(report.totals.min_date.as_deref(), Some("2024-01-01"));
    assert_eq!(report.totals.max_date.as_deref(), Some("2024-01-02"));
    assert_eq!(
        report.spreadsheet_filename(),
        "total_summary_2024-01-01_to_2024-01-02.xlsx"
    );
}

#[test]
fn partial_records_render_without_errors() {
    let body = json!({
        "data": [
            { "date": "2024-01-01" },
            { "date": "2024-01-02", "total_bet": 50.0 }
        ]
    });

    let rows: ReportRows = extract(&body, "data").unwrap();
    let report = Report::build(rows.into_records());

    assert_eq!(report.rows[0].cells[1], "0.00");
    assert_eq!(report.rows[0].cells[5], "0");
    assert_eq!(report.rows[1].cells[1], "50.00");
    assert_eq!(report.totals.total_bet, 50.0);
}

// ---------------------------------------------------------------------------
// error and edge paths
// ---------------------------------------------------------------------------

#[test]
fn error_body_is_detected_before_any_aggregation() {
    let body = json!({ "error": "No data available for total summary." });
    assert_eq!(
        api_error(&body),
        Some("No data available for total summary.".to_string())
    );
}

#[test]
fn empty_mapping_yields_empty_report_with_null_range() {
    let body = json!({ "data": {} });
    let rows: ReportRows = extract(&body, "data").unwrap();
    let report = Report::build(rows.into_records());

    assert!(report.is_empty());
    assert_eq!(report.totals.total_bet, 0.0);
    assert_eq!(report.totals.avg_rtp(), 0.0);
    assert_eq!(report.totals.min_date, None);
    assert_eq!(report.totals.max_date, None);
}
