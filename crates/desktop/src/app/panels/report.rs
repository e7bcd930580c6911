//! Complete report panel - per-date table, accumulated totals and the
//! clipboard / spreadsheet export actions

use std::path::Path;

use eframe::egui;
use egui_extras::{Column, TableBuilder};
use egui_phosphor::regular;

use reportdash_core::{export, format_amount, format_rtp, Report, REPORT_HEADERS};

use crate::app::ReportDashApp;

impl ReportDashApp {
    pub(crate) fn render_report_view(&mut self, ui: &mut egui::Ui, report: &Report) {
        ui.vertical_centered(|ui| ui.heading("Total Summary Report"));
        ui.add_space(8.0);

        // Export actions, top-right above the table
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui
                .add_enabled(
                    !report.is_empty(),
                    egui::Button::new(format!("{} Download Report", regular::DOWNLOAD_SIMPLE)),
                )
                .on_hover_text("Save the table as an .xlsx workbook")
                .clicked()
            {
                self.save_report_spreadsheet(report);
            }

            if ui
                .button(format!("{} Copy To Clipboard", regular::CLIPBOARD_TEXT))
                .clicked()
            {
                ui.ctx().copy_text(report.clipboard_text());
                self.alert = Some("Table data copied to clipboard!".to_string());
            }
        });

        ui.add_space(4.0);

        if report.is_empty() {
            ui.label("No report rows were returned.");
        } else {
            self.render_report_table(ui, report);
        }

        ui.add_space(12.0);
        render_totals_block(ui, report);
    }

    fn render_report_table(&mut self, ui: &mut egui::Ui, report: &Report) {
        let text_height = egui::TextStyle::Body
            .resolve(ui.style())
            .size
            .max(ui.spacing().interact_size.y);

        let mut table = TableBuilder::new(ui)
            .striped(true)
            .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
            .column(Column::auto().at_least(90.0)); // Date
        for _ in 1..REPORT_HEADERS.len() {
            table = table.column(Column::remainder().at_least(70.0));
        }

        table
            .header(20.0, |mut header| {
                for title in REPORT_HEADERS {
                    header.col(|ui| {
                        ui.strong(title);
                    });
                }
            })
            .body(|body| {
                body.rows(text_height, report.rows.len(), |mut row| {
                    let cells = &report.rows[row.index()].cells;
                    for cell in cells {
                        row.col(|ui| {
                            ui.label(cell);
                        });
                    }
                });
            });
    }

    fn save_report_spreadsheet(&mut self, report: &Report) {
        match export::write_report_xlsx(report, Path::new(".")) {
            Ok(path) => {
                self.alert = Some(format!("Report saved to {}", path.display()));
            }
            Err(err) => {
                tracing::error!("Failed to write report spreadsheet: {err}");
                self.alert = Some("An error occurred while saving the report.".to_string());
            }
        }
    }
}

fn render_totals_block(ui: &mut egui::Ui, report: &Report) {
    let totals = &report.totals;

    egui::Frame::group(ui.style()).show(ui, |ui| {
        ui.vertical_centered(|ui| ui.heading("Total Summary"));
        ui.add_space(8.0);

        let lines = [
            ("Total Bet:", format_amount(totals.total_bet)),
            ("Total Win:", format_amount(totals.total_win)),
            ("Total Spins:", totals.total_spins.to_string()),
            ("Social Spins:", totals.social_spins.to_string()),
            ("Reel Spins:", totals.reel_spins.to_string()),
            ("RTP:", format_rtp(totals.avg_rtp())),
            ("GGR (EUR):", format_amount(totals.ggr_eur)),
            ("GGR (GBP):", format_amount(totals.ggr_gbp)),
        ];

        for (label, value) in lines {
            ui.horizontal(|ui| {
                ui.strong(label);
                ui.label(value);
            });
        }
    });
}
