//! Login panel - the session gate shown before the main tool

use eframe::egui;
use egui_phosphor::regular;

use crate::app::ReportDashApp;
use crate::ui::AppState;

impl ReportDashApp {
    pub(crate) fn render_login_panel(&mut self, ctx: &egui::Context) {
        let is_busy = self.state.is_busy();

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.add_space(120.0);
                ui.heading("GGR Report Dashboard");
                ui.add_space(24.0);

                let mut submitted = false;

                egui::Grid::new("login_form")
                    .num_columns(2)
                    .spacing([12.0, 10.0])
                    .show(ui, |ui| {
                        ui.label("Username:");
                        ui.add(
                            egui::TextEdit::singleline(&mut self.username)
                                .desired_width(200.0)
                                .hint_text("username"),
                        );
                        ui.end_row();

                        ui.label("Password:");
                        let response = ui.add(
                            egui::TextEdit::singleline(&mut self.password)
                                .desired_width(200.0)
                                .password(true),
                        );
                        if response.lost_focus()
                            && ui.input(|i| i.key_pressed(egui::Key::Enter))
                        {
                            submitted = true;
                        }
                        ui.end_row();

                        ui.label("Server:");
                        if ui
                            .add(
                                egui::TextEdit::singleline(&mut self.config.server_url)
                                    .desired_width(200.0)
                                    .hint_text("http://127.0.0.1:5000"),
                            )
                            .changed()
                        {
                            let _ = self.config.save();
                        }
                        ui.end_row();
                    });

                ui.add_space(16.0);

                let can_submit = !is_busy && self.config.is_valid();
                if ui
                    .add_enabled(
                        can_submit,
                        egui::Button::new(format!("{} Sign In", regular::SIGN_IN)),
                    )
                    .clicked()
                {
                    submitted = true;
                }

                if submitted && can_submit {
                    self.start_login();
                }

                ui.add_space(12.0);

                if self.state == AppState::LoggingIn {
                    ui.horizontal(|ui| {
                        ui.spinner();
                        ui.label("Signing in...");
                    });
                }

                if let Some(error) = &self.login_error {
                    ui.colored_label(egui::Color32::RED, error);
                }
            });
        });
    }
}
