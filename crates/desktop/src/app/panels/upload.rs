//! Upload form - send daily report workbooks to the backend

use std::path::PathBuf;

use eframe::egui;
use egui_phosphor::regular;

use crate::app::ReportDashApp;

impl ReportDashApp {
    pub(crate) fn render_upload_view(&mut self, ui: &mut egui::Ui) {
        let is_busy = self.state.is_busy();

        ui.vertical_centered(|ui| ui.heading("Upload Files"));
        ui.add_space(8.0);
        ui.label("Add report files by path, or drop them onto the window.");
        ui.add_space(8.0);

        ui.horizontal(|ui| {
            let response = ui.add(
                egui::TextEdit::singleline(&mut self.upload_path_input)
                    .desired_width(360.0)
                    .hint_text("path/to/reports_2024-01-01.xlsx"),
            );
            let entered =
                response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));

            if (ui.button(format!("{} Add", regular::PLUS)).clicked() || entered)
                && !self.upload_path_input.trim().is_empty()
            {
                let path = PathBuf::from(self.upload_path_input.trim());
                if !self.upload_paths.contains(&path) {
                    self.upload_paths.push(path);
                }
                self.upload_path_input.clear();
            }
        });

        ui.add_space(8.0);

        let mut remove: Option<usize> = None;
        for (idx, path) in self.upload_paths.iter().enumerate() {
            ui.horizontal(|ui| {
                if ui.small_button(regular::TRASH.to_string()).clicked() {
                    remove = Some(idx);
                }
                ui.label(path.display().to_string());
            });
        }
        if let Some(idx) = remove {
            self.upload_paths.remove(idx);
        }

        if self.upload_paths.is_empty() {
            ui.label(
                egui::RichText::new("No files selected yet.").color(egui::Color32::GRAY),
            );
        }

        ui.add_space(12.0);

        if ui
            .add_enabled(
                !is_busy && !self.upload_paths.is_empty(),
                egui::Button::new(format!("{} Upload Files", regular::UPLOAD_SIMPLE)),
            )
            .clicked()
        {
            self.start_upload();
        }

        // The server's message or error, verbatim
        if let Some(response) = self.upload_response.clone() {
            ui.add_space(8.0);
            ui.label(response);
        }
    }
}
