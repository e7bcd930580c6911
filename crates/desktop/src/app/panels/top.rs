//! Top toolbar panel - report action buttons and status

use eframe::egui;
use egui_phosphor::regular;

use crate::app::ReportDashApp;

impl ReportDashApp {
    pub(crate) fn render_top_panel(&mut self, ctx: &egui::Context) {
        let is_busy = self.state.is_busy();

        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading("GGR Report Dashboard");
                ui.separator();

                if ui
                    .add_enabled(
                        !is_busy,
                        egui::Button::new(format!("{} Summary Report", regular::CHART_BAR)),
                    )
                    .on_hover_text("Latest vs cumulative metrics")
                    .clicked()
                {
                    self.start_fetch_summary();
                }

                if ui
                    .add_enabled(
                        !is_busy,
                        egui::Button::new(format!("{} Latest Metrics", regular::CALENDAR_CHECK)),
                    )
                    .on_hover_text("Most recent day's metrics")
                    .clicked()
                {
                    self.start_fetch_latest();
                }

                if ui
                    .add_enabled(
                        !is_busy,
                        egui::Button::new(format!("{} Complete Report", regular::TABLE)),
                    )
                    .on_hover_text("Per-date breakdown with totals and export")
                    .clicked()
                {
                    self.start_fetch_report();
                }

                if ui
                    .add_enabled(
                        !is_busy,
                        egui::Button::new(format!("{} All-Time Metrics", regular::SIGMA)),
                    )
                    .clicked()
                {
                    self.start_fetch_all_time();
                }

                if ui
                    .add_enabled(
                        !is_busy,
                        egui::Button::new(format!("{} Metrics Graphs", regular::CHART_LINE_UP)),
                    )
                    .clicked()
                {
                    self.start_fetch_graph();
                }

                if ui
                    .add_enabled(
                        !is_busy,
                        egui::Button::new(format!("{} Upload Reports", regular::UPLOAD_SIMPLE)),
                    )
                    .clicked()
                {
                    self.open_upload_form();
                }

                ui.separator();

                if is_busy {
                    ui.spinner();
                }
                let status = ui.label(&self.status);
                if let Some(refreshed) = self.last_refreshed {
                    status.on_hover_text(format!(
                        "Last refreshed {}",
                        refreshed.format("%Y-%m-%d %H:%M:%S")
                    ));
                }

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui
                        .add_enabled(
                            !is_busy,
                            egui::Button::new(format!("{} Logout", regular::SIGN_OUT)),
                        )
                        .clicked()
                    {
                        self.start_logout();
                    }
                });
            });
        });
    }
}
