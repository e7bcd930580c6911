//! HTTP client for the reporting backend.
//!
//! Blocking reqwest client with a cookie store: the backend tracks the
//! login session in a cookie, so one client instance spans login through
//! logout and a session reset simply builds a fresh client. Workers run
//! on background threads, so blocking here never stalls the UI.

use std::path::PathBuf;

use reqwest::header::CONTENT_TYPE;
use serde_json::Value;

use reportdash_core::{
    api_error, extract, Report, ReportDashError, ReportRows, Result, SnapshotMetrics,
    SummaryMetrics, TotalSummary,
};

#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::blocking::Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(server_url: &str) -> Result<Self> {
        let http = reqwest::blocking::Client::builder()
            .cookie_store(true)
            .build()
            .map_err(net)?;
        Ok(Self {
            http,
            base_url: server_url.trim_end_matches('/').to_string(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// GET a JSON body and reject it if it carries an `error` field.
    fn get_json(&self, path: &str) -> Result<Value> {
        let body: Value = self.http.get(self.url(path)).send().map_err(net)?.json().map_err(net)?;
        match api_error(&body) {
            Some(message) => Err(ReportDashError::Api(message)),
            None => Ok(body),
        }
    }

    /// POST credentials. Any non-error body counts as success; the
    /// session rides on the cookie from here on.
    pub fn login(&self, username: &str, password: &str) -> Result<()> {
        let body: Value = self
            .http
            .post(self.url("/login"))
            .json(&serde_json::json!({ "username": username, "password": password }))
            .send()
            .map_err(net)?
            .json()
            .map_err(net)?;
        match api_error(&body) {
            Some(message) => Err(ReportDashError::Api(message)),
            None => Ok(()),
        }
    }

    /// POST the logout. Returns the server's `message` when it sends one;
    /// the caller only resets the session in that case.
    pub fn logout(&self) -> Result<Option<String>> {
        let body: Value = self
            .http
            .post(self.url("/logout"))
            .send()
            .map_err(net)?
            .json()
            .map_err(net)?;
        Ok(body
            .get("message")
            .and_then(Value::as_str)
            .map(str::to_string))
    }

    /// Latest vs cumulative comparison for the summary view.
    pub fn total_summary(&self) -> Result<TotalSummary> {
        let body = self.get_json("/get_total_summary_data")?;
        TotalSummary::from_body(&body)
    }

    /// Most recent day's metrics.
    pub fn latest_snapshot(&self) -> Result<SnapshotMetrics> {
        let body = self.get_json("/load_latest_data")?;
        extract(&body, "metrics")
    }

    /// Full per-date dataset, aggregated client-side into the report.
    pub fn full_report(&self) -> Result<Report> {
        let body = self.get_json("/calculate_total_summary")?;
        let rows: ReportRows = extract(&body, "data")?;
        Ok(Report::build(rows.into_records()))
    }

    /// All-time totals across every stored report.
    pub fn all_time_metrics(&self) -> Result<SummaryMetrics> {
        let body = self.get_json("/generate_all_metrics")?;
        extract(&body, "metrics")
    }

    /// Server-rendered metrics graphs as PNG bytes. Failures come back as
    /// JSON or plain text depending on where the backend tripped, so
    /// anything that is not an image is surfaced as an error.
    pub fn metrics_graph(&self) -> Result<Vec<u8>> {
        let response = self
            .http
            .get(self.url("/get_player_metrics_graphs"))
            .send()
            .map_err(net)?;

        let status = response.status();
        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_string();
        let bytes = response.bytes().map_err(net)?;

        if content_type.starts_with("image/") {
            return Ok(bytes.to_vec());
        }

        let text = String::from_utf8_lossy(&bytes);
        if let Ok(body) = serde_json::from_str::<Value>(&text) {
            if let Some(message) = api_error(&body) {
                return Err(ReportDashError::Api(message));
            }
        }
        Err(ReportDashError::Api(format!(
            "Graph request failed ({}): {}",
            status,
            text.trim()
        )))
    }

    /// Upload report workbooks as one multipart payload, field `files`.
    /// No client-side validation of type or size; the server decides.
    pub fn upload_reports(&self, paths: &[PathBuf]) -> Result<String> {
        let mut form = reqwest::blocking::multipart::Form::new();
        for path in paths {
            form = form.file("files", path)?;
        }

        let body: Value = self
            .http
            .post(self.url("/generate_all_reports"))
            .multipart(form)
            .send()
            .map_err(net)?
            .json()
            .map_err(net)?;
        match api_error(&body) {
            Some(message) => Err(ReportDashError::Api(message)),
            None => Ok(body
                .get("message")
                .and_then(Value::as_str)
                .unwrap_or("Upload complete.")
                .to_string()),
        }
    }
}

fn net(err: reqwest::Error) -> ReportDashError {
    ReportDashError::Network(err.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_loses_its_trailing_slash() {
        let client = ApiClient::new("http://localhost:5000/").unwrap();
        assert_eq!(client.url("/login"), "http://localhost:5000/login");
    }

    #[test]
    fn base_url_without_slash_is_kept_as_is() {
        let client = ApiClient::new("https://reports.internal").unwrap();
        assert_eq!(
            client.url("/load_latest_data"),
            "https://reports.internal/load_latest_data"
        );
    }
}
