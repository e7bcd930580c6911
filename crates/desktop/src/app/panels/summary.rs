//! Fixed-schema metric tables - summary comparison, latest snapshot and
//! all-time totals. Values are shown as the backend provided them; the
//! only client-side computation lives in the complete report.

use eframe::egui;

use reportdash_core::{SnapshotMetrics, SummaryMetrics, TotalSummary};

use crate::app::ReportDashApp;

impl ReportDashApp {
    pub(crate) fn render_summary_view(&mut self, ui: &mut egui::Ui, summary: &TotalSummary) {
        let latest = &summary.latest;
        let cumulative = &summary.cumulative;

        ui.vertical_centered(|ui| ui.heading("Summary Report"));
        ui.add_space(12.0);

        // Both column headers take their dates from the cumulative side,
        // which is the one that knows the full covered range
        let min_date = cumulative.min_date.as_deref().unwrap_or("n/a");
        let max_date = cumulative.max_date.as_deref().unwrap_or("n/a");

        egui::Grid::new("summary_table")
            .num_columns(3)
            .striped(true)
            .min_col_width(160.0)
            .spacing([24.0, 6.0])
            .show(ui, |ui| {
                ui.strong("Metrics");
                ui.strong(format!("Latest Values ({max_date})"));
                ui.strong(format!("Cumulative Values ({min_date} ~ {max_date})"));
                ui.end_row();

                ui.label("Total Players");
                ui.label(latest.total_players.to_string());
                ui.label(cumulative.total_players.to_string());
                ui.end_row();

                for ((label, latest_value), (_, cumulative_value)) in
                    metric_rows(latest).into_iter().zip(metric_rows(cumulative))
                {
                    ui.label(label);
                    ui.label(latest_value);
                    ui.label(cumulative_value);
                    ui.end_row();
                }
            });
    }

    pub(crate) fn render_latest_view(&mut self, ui: &mut egui::Ui, metrics: &SnapshotMetrics) {
        ui.vertical_centered(|ui| ui.heading("Latest Metrics"));
        ui.add_space(12.0);

        let rows = [
            ("Total Bet", metrics.total_bet.to_string()),
            ("Total Win", metrics.total_win.to_string()),
            ("Reel Spins", metrics.reel_spins.to_string()),
            ("Social Spins", metrics.social_spins.to_string()),
            ("Total Spins", metrics.total_spins.to_string()),
            ("RTP (%)", format!("{}%", metrics.rtp)),
            ("GGR (EUR)", metrics.ggr_eur.to_string()),
            ("GGR (GBP)", metrics.ggr_gbp.to_string()),
        ];

        egui::Grid::new("latest_table")
            .num_columns(2)
            .striped(true)
            .min_col_width(160.0)
            .spacing([24.0, 6.0])
            .show(ui, |ui| {
                ui.strong("Metrics");
                ui.strong(format!("Values ({})", metrics.latest_data));
                ui.end_row();

                for (label, value) in rows {
                    ui.label(label);
                    ui.label(value);
                    ui.end_row();
                }
            });
    }

    pub(crate) fn render_all_time_view(&mut self, ui: &mut egui::Ui, metrics: &SummaryMetrics) {
        ui.vertical_centered(|ui| ui.heading("All-Time Metrics"));
        ui.add_space(12.0);

        egui::Grid::new("all_time_table")
            .num_columns(2)
            .striped(true)
            .min_col_width(160.0)
            .spacing([24.0, 6.0])
            .show(ui, |ui| {
                ui.strong("Metrics");
                ui.strong("Values");
                ui.end_row();

                for (label, value) in metric_rows(metrics) {
                    ui.label(label);
                    ui.label(value);
                    ui.end_row();
                }
            });
    }
}

/// The eight shared metric rows of a summary column, in display order.
fn metric_rows(metrics: &SummaryMetrics) -> [(&'static str, String); 8] {
    [
        ("Total Bet", metrics.total_bet.to_string()),
        ("Total Win", metrics.total_win.to_string()),
        ("Total Spins", metrics.total_spins.to_string()),
        ("Social Spins", metrics.social_spins.to_string()),
        ("Reel Spins", metrics.reel_spins.to_string()),
        ("RTP (%)", format!("{}%", metrics.rtp)),
        ("GGR (EUR)", metrics.ggr_eur.to_string()),
        ("GGR (GBP)", metrics.ggr_gbp.to_string()),
    ]
}
