//! Data models for the reporting backend's JSON payloads

use std::collections::BTreeMap;

use serde::{de::DeserializeOwned, Deserialize, Serialize};
use serde_json::Value;

use crate::error::{ReportDashError, Result};

/// One per-date row of the full report dataset.
///
/// Every numeric field is zero-defaulted: the backend omits fields it has
/// no data for, and a missing value must render as zero rather than fail
/// the parse. `date` defaults to empty for the same reason.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DailyMetrics {
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub total_bet: f64,
    #[serde(default)]
    pub total_win: f64,
    #[serde(default)]
    pub reel_spins: u64,
    #[serde(default)]
    pub social_spins: u64,
    #[serde(default)]
    pub total_spins: u64,
    #[serde(default)]
    pub rtp: f64,
    #[serde(default)]
    pub ggr_eur: f64,
    #[serde(default)]
    pub ggr_gbp: f64,
}

/// Latest-day snapshot, the `metrics` payload of `/load_latest_data`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SnapshotMetrics {
    /// Date the snapshot covers, as reported by the backend.
    #[serde(default)]
    pub latest_data: String,
    #[serde(default)]
    pub total_bet: f64,
    #[serde(default)]
    pub total_win: f64,
    #[serde(default)]
    pub reel_spins: u64,
    #[serde(default)]
    pub social_spins: u64,
    #[serde(default)]
    pub total_spins: u64,
    #[serde(default)]
    pub rtp: f64,
    #[serde(default)]
    pub ggr_eur: f64,
    #[serde(default)]
    pub ggr_gbp: f64,
}

/// One column of the latest-vs-cumulative comparison, also the payload of
/// `/generate_all_metrics`. The cumulative side carries the covered date
/// range; the latest side only knows its own date.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SummaryMetrics {
    #[serde(default)]
    pub total_players: u64,
    #[serde(default)]
    pub total_bet: f64,
    #[serde(default)]
    pub total_win: f64,
    #[serde(default)]
    pub total_spins: u64,
    #[serde(default)]
    pub social_spins: u64,
    #[serde(default)]
    pub reel_spins: u64,
    #[serde(default)]
    pub rtp: f64,
    #[serde(default)]
    pub ggr_eur: f64,
    #[serde(default)]
    pub ggr_gbp: f64,
    #[serde(default)]
    pub min_date: Option<String>,
    #[serde(default)]
    pub max_date: Option<String>,
}

/// Both columns of the `/get_total_summary_data` comparison.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TotalSummary {
    pub latest: SummaryMetrics,
    pub cumulative: SummaryMetrics,
}

impl TotalSummary {
    /// Pull both metric columns out of an already error-checked body.
    pub fn from_body(body: &Value) -> Result<Self> {
        Ok(Self {
            latest: extract(body, "latest_date_metrics")?,
            cumulative: extract(body, "cumulative_metrics")?,
        })
    }
}

/// The `data` field of `/calculate_total_summary`.
///
/// The contract is a mapping from arbitrary keys to records, but the
/// deployed backend returns a plain array. Both forms are accepted, and in
/// both the outer key is discarded: each record's own `date` field is the
/// display key. The two may legitimately differ upstream.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ReportRows {
    List(Vec<DailyMetrics>),
    Map(BTreeMap<String, DailyMetrics>),
}

impl ReportRows {
    pub fn into_records(self) -> Vec<DailyMetrics> {
        match self {
            ReportRows::List(records) => records,
            ReportRows::Map(map) => map.into_values().collect(),
        }
    }
}

/// Application-level error carried in a response body, if any.
pub fn api_error(body: &Value) -> Option<String> {
    match body.get("error") {
        None | Some(Value::Null) => None,
        Some(Value::String(message)) => Some(message.clone()),
        Some(other) => Some(other.to_string()),
    }
}

/// Deserialize one named field out of an error-checked response body.
pub fn extract<T: DeserializeOwned>(body: &Value, field: &str) -> Result<T> {
    let value = body.get(field).cloned().ok_or_else(|| {
        ReportDashError::InvalidData(format!("response is missing the `{field}` field"))
    })?;
    Ok(serde_json::from_value(value)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn daily_metrics_defaults_missing_fields_to_zero() {
        let record: DailyMetrics =
            serde_json::from_value(json!({ "date": "2024-01-02", "total_bet": 100.0 })).unwrap();
        assert_eq!(record.date, "2024-01-02");
        assert_eq!(record.total_bet, 100.0);
        assert_eq!(record.total_win, 0.0);
        assert_eq!(record.reel_spins, 0);
        assert_eq!(record.rtp, 0.0);
        assert_eq!(record.ggr_gbp, 0.0);
    }

    #[test]
    fn daily_metrics_tolerates_missing_date() {
        let record: DailyMetrics = serde_json::from_value(json!({ "total_bet": 5.0 })).unwrap();
        assert_eq!(record.date, "");
    }

    #[test]
    fn report_rows_accepts_array_form() {
        let rows: ReportRows = serde_json::from_value(json!([
            { "date": "2024-01-01", "total_bet": 1.0 },
            { "date": "2024-01-02", "total_bet": 2.0 },
        ]))
        .unwrap();
        let records = rows.into_records();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].date, "2024-01-01");
    }

    #[test]
    fn report_rows_accepts_mapping_form_and_discards_keys() {
        let rows: ReportRows = serde_json::from_value(json!({
            "opaque-key-9": { "date": "2024-01-01", "total_bet": 1.0 },
            "opaque-key-1": { "date": "2024-01-02", "total_bet": 2.0 },
        }))
        .unwrap();
        let records = rows.into_records();
        assert_eq!(records.len(), 2);
        // the mapping keys are gone; only the records' own dates survive
        let dates: Vec<&str> = records.iter().map(|r| r.date.as_str()).collect();
        assert!(dates.contains(&"2024-01-01"));
        assert!(dates.contains(&"2024-01-02"));
    }

    #[test]
    fn api_error_reads_string_errors() {
        let body = json!({ "error": "not found" });
        assert_eq!(api_error(&body), Some("not found".to_string()));
    }

    #[test]
    fn api_error_ignores_missing_and_null() {
        assert_eq!(api_error(&json!({ "message": "ok" })), None);
        assert_eq!(api_error(&json!({ "error": null })), None);
    }

    #[test]
    fn total_summary_from_body_reads_both_columns() {
        let body = json!({
            "message": "Latest and Total summary fetched successfully.",
            "latest_date_metrics": {
                "total_players": 12, "total_bet": 50.5, "max_date": "2024-02-02"
            },
            "cumulative_metrics": {
                "total_players": 90, "total_bet": 900.25,
                "min_date": "2024-01-01", "max_date": "2024-02-02"
            }
        });
        let summary = TotalSummary::from_body(&body).unwrap();
        assert_eq!(summary.latest.total_players, 12);
        assert_eq!(summary.latest.max_date.as_deref(), Some("2024-02-02"));
        assert_eq!(summary.cumulative.total_bet, 900.25);
        assert_eq!(summary.cumulative.min_date.as_deref(), Some("2024-01-01"));
        // fields the backend did not send come back zeroed
        assert_eq!(summary.latest.ggr_gbp, 0.0);
    }

    #[test]
    fn extract_reports_missing_field() {
        let body = json!({ "message": "ok" });
        let result: Result<SnapshotMetrics> = extract(&body, "metrics");
        assert!(matches!(result, Err(ReportDashError::InvalidData(_))));
    }

    #[test]
    fn snapshot_metrics_parses_full_payload() {
        let metrics: SnapshotMetrics = serde_json::from_value(json!({
            "latest_data": "2024-02-02",
            "total_bet": 120.5, "total_win": 80.25,
            "reel_spins": 40, "social_spins": 10, "total_spins": 50,
            "rtp": 66.597, "ggr_eur": 40.25, "ggr_gbp": 34.1
        }))
        .unwrap();
        assert_eq!(metrics.latest_data, "2024-02-02");
        assert_eq!(metrics.total_spins, 50);
        assert_eq!(metrics.rtp, 66.597);
    }
}
