//! Client-side aggregation behind the complete report view.
//!
//! The backend hands back one record per date; everything derived from
//! them (running totals, the covered date range, the weighted average
//! RTP) is recomputed from scratch on every invocation and never
//! persisted.

use crate::models::DailyMetrics;

/// Column headers shared by the on-screen table, the clipboard text and
/// the spreadsheet export.
pub const REPORT_HEADERS: [&str; 9] = [
    "Date",
    "Total Bet",
    "Total Win",
    "Reel Spins",
    "Social Spins",
    "Total Spins",
    "RTP (%)",
    "GGR (EUR)",
    "GGR (GBP)",
];

/// Format a monetary amount the way the report table displays it.
pub fn format_amount(value: f64) -> String {
    format!("{value:.2}")
}

/// Format an RTP percentage, suffix included.
pub fn format_rtp(value: f64) -> String {
    format!("{value:.2}%")
}

/// One rendered report row: the display key plus the nine formatted cells.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportRow {
    pub date: String,
    pub cells: [String; 9],
}

impl ReportRow {
    fn from_record(record: &DailyMetrics) -> Self {
        Self {
            date: record.date.clone(),
            cells: [
                record.date.clone(),
                format_amount(record.total_bet),
                format_amount(record.total_win),
                record.reel_spins.to_string(),
                record.social_spins.to_string(),
                record.total_spins.to_string(),
                format_rtp(record.rtp),
                format_amount(record.ggr_eur),
                format_amount(record.ggr_gbp),
            ],
        }
    }
}

/// Running totals accumulated over one full pass of the dataset.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReportTotals {
    pub total_bet: f64,
    pub total_win: f64,
    pub total_spins: u64,
    pub social_spins: u64,
    pub reel_spins: u64,
    pub ggr_eur: f64,
    pub ggr_gbp: f64,
    pub min_date: Option<String>,
    pub max_date: Option<String>,
}

impl ReportTotals {
    /// Bet-weighted average RTP over the whole range: total win over
    /// total bet, NOT a mean of the per-day RTP values. Days with higher
    /// turnover weigh proportionally more.
    pub fn avg_rtp(&self) -> f64 {
        if self.total_bet > 0.0 {
            (self.total_win / self.total_bet) * 100.0
        } else {
            0.0
        }
    }

    fn track_date(&mut self, date: &str) {
        // Plain lexicographic comparison; valid because the backend emits
        // ISO-style date strings. Not validated.
        match &self.min_date {
            Some(min) if date >= min.as_str() => {}
            _ => self.min_date = Some(date.to_string()),
        }
        match &self.max_date {
            Some(max) if date <= max.as_str() => {}
            _ => self.max_date = Some(date.to_string()),
        }
    }
}

/// The fully aggregated report: one row per input record plus totals.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Report {
    pub rows: Vec<ReportRow>,
    pub totals: ReportTotals,
}

impl Report {
    /// Build the report from the backend's records.
    ///
    /// The display key is each record's own `date` field, never the key
    /// the record arrived under. Rows are sorted by that key so the
    /// output does not depend on the backend's enumeration order.
    pub fn build(mut records: Vec<DailyMetrics>) -> Self {
        records.sort_by(|a, b| a.date.cmp(&b.date));

        let mut totals = ReportTotals::default();
        let mut rows = Vec::with_capacity(records.len());

        for record in &records {
            rows.push(ReportRow::from_record(record));

            totals.total_bet += record.total_bet;
            totals.total_win += record.total_win;
            totals.total_spins += record.total_spins;
            totals.social_spins += record.social_spins;
            totals.reel_spins += record.reel_spins;
            totals.ggr_eur += record.ggr_eur;
            totals.ggr_gbp += record.ggr_gbp;
            totals.track_date(&record.date);
        }

        Self { rows, totals }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Tab- and newline-separated text of the table, header first; this
    /// is what the "Copy To Clipboard" action puts on the clipboard.
    pub fn clipboard_text(&self) -> String {
        let mut text = REPORT_HEADERS.join("\t");
        for row in &self.rows {
            text.push('\n');
            text.push_str(&row.cells.join("\t"));
        }
        text
    }

    /// File name for the spreadsheet export, observed date range embedded.
    pub fn spreadsheet_filename(&self) -> String {
        let min = self.totals.min_date.as_deref().unwrap_or("unknown");
        let max = self.totals.max_date.as_deref().unwrap_or("unknown");
        format!("total_summary_{min}_to_{max}.xlsx")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(date: &str, bet: f64, win: f64) -> DailyMetrics {
        DailyMetrics {
            date: date.to_string(),
            total_bet: bet,
            total_win: win,
            ..Default::default()
        }
    }

    #[test]
    fn totals_are_exact_sums_over_all_records() {
        let report = Report::build(vec![
            DailyMetrics {
                date: "2024-01-01".into(),
                total_bet: 10.5,
                total_win: 4.25,
                reel_spins: 100,
                social_spins: 20,
                total_spins: 120,
                rtp: 40.48,
                ggr_eur: 6.25,
                ggr_gbp: 5.5,
            },
            DailyMetrics {
                date: "2024-01-02".into(),
                total_bet: 20.25,
                total_win: 15.0,
                reel_spins: 50,
                social_spins: 30,
                total_spins: 80,
                rtp: 74.07,
                ggr_eur: 5.25,
                ggr_gbp: 4.0,
            },
        ]);

        assert_eq!(report.totals.total_bet, 30.75);
        assert_eq!(report.totals.total_win, 19.25);
        assert_eq!(report.totals.total_spins, 200);
        assert_eq!(report.totals.social_spins, 50);
        assert_eq!(report.totals.reel_spins, 150);
        assert_eq!(report.totals.ggr_eur, 11.5);
        assert_eq!(report.totals.ggr_gbp, 9.5);
    }

    #[test]
    fn avg_rtp_is_weighted_not_a_mean_of_rows() {
        // Per-row RTPs are 50% and 75%; the bet-weighted average is not
        // their midpoint.
        let report = Report::build(vec![
            record("2024-01-01", 100.0, 50.0),
            record("2024-01-02", 300.0, 225.0),
        ]);
        assert!((report.totals.avg_rtp() - 68.75).abs() < 1e-9);
    }

    #[test]
    fn avg_rtp_is_exactly_zero_without_turnover() {
        let mut a = record("2024-01-01", 0.0, 0.0);
        a.rtp = 95.0; // per-row RTP must not leak into the average
        let report = Report::build(vec![a]);
        assert_eq!(report.totals.avg_rtp(), 0.0);
    }

    #[test]
    fn worked_example_matches_expected_aggregate() {
        let mut x = record("2024-01-02", 100.0, 50.0);
        x.ggr_eur = 10.0;
        x.ggr_gbp = 8.0;
        let mut y = record("2024-01-01", 200.0, 150.0);
        y.ggr_eur = 20.0;
        y.ggr_gbp = 15.0;

        let report = Report::build(vec![x, y]);

        assert_eq!(report.totals.total_bet, 300.0);
        assert_eq!(report.totals.total_win, 200.0);
        assert_eq!(format_rtp(report.totals.avg_rtp()), "66.67%");
        assert_eq!(report.totals.min_date.as_deref(), Some("2024-01-01"));
        assert_eq!(report.totals.max_date.as_deref(), Some("2024-01-02"));
        assert_eq!(
            report.spreadsheet_filename(),
            "total_summary_2024-01-01_to_2024-01-02.xlsx"
        );
    }

    #[test]
    fn rows_are_sorted_by_their_own_date() {
        let report = Report::build(vec![
            record("2024-03-01", 1.0, 0.0),
            record("2024-01-01", 1.0, 0.0),
            record("2024-02-01", 1.0, 0.0),
        ]);
        let dates: Vec<&str> = report.rows.iter().map(|r| r.date.as_str()).collect();
        assert_eq!(dates, ["2024-01-01", "2024-02-01", "2024-03-01"]);
    }

    #[test]
    fn missing_fields_render_as_zero_per_field_type() {
        let report = Report::build(vec![DailyMetrics {
            date: "2024-01-01".into(),
            ..Default::default()
        }]);
        let cells = &report.rows[0].cells;
        assert_eq!(cells[1], "0.00"); // Total Bet
        assert_eq!(cells[3], "0"); // Reel Spins
        assert_eq!(cells[6], "0.00%"); // RTP
        assert_eq!(cells[8], "0.00"); // GGR (GBP)
    }

    #[test]
    fn empty_input_yields_empty_report_with_open_range() {
        let report = Report::build(Vec::new());
        assert!(report.is_empty());
        assert_eq!(report.totals, ReportTotals::default());
        assert_eq!(report.totals.min_date, None);
        assert_eq!(report.totals.max_date, None);
        assert_eq!(report.totals.avg_rtp(), 0.0);
    }

    #[test]
    fn clipboard_text_is_header_plus_tab_separated_rows() {
        let mut x = record("2024-01-02", 100.0, 50.0);
        x.total_spins = 7;
        let report = Report::build(vec![x]);

        let text = report.clipboard_text();
        let mut lines = text.lines();
        assert_eq!(
            lines.next().unwrap(),
            "Date\tTotal Bet\tTotal Win\tReel Spins\tSocial Spins\tTotal Spins\tRTP (%)\tGGR (EUR)\tGGR (GBP)"
        );
        assert_eq!(
            lines.next().unwrap(),
            "2024-01-02\t100.00\t50.00\t0\t0\t7\t0.00%\t0.00\t0.00"
        );
        assert_eq!(lines.next(), None);
    }
}
