//! Main application module

mod panels;
mod state;

use std::path::PathBuf;

use eframe::egui;

use crate::api::ApiClient;
use crate::config::Config;
use crate::ui::{AppState, ContentView, TaskHandle};

pub struct ReportDashApp {
    pub(crate) config: Config,
    pub(crate) api: ApiClient,

    pub(crate) state: AppState,
    pub(crate) status: String,
    pub(crate) content: ContentView,
    pub(crate) task: Option<TaskHandle>,
    // Monotonic request generation; stale worker results are discarded
    pub(crate) generation: u64,

    // Session gate
    pub(crate) logged_in: bool,
    pub(crate) username: String,
    pub(crate) password: String,
    pub(crate) login_error: Option<String>,

    // Modal notice shown for fetch failures and confirmations
    pub(crate) alert: Option<String>,

    // Upload form
    pub(crate) upload_paths: Vec<PathBuf>,
    pub(crate) upload_path_input: String,
    pub(crate) upload_response: Option<String>,

    pub(crate) last_refreshed: Option<chrono::DateTime<chrono::Local>>,
}

impl ReportDashApp {
    pub fn new() -> Self {
        let config = Config::load();
        let api = ApiClient::new(&config.server_url).expect("Failed to build HTTP client");
        let username = config.username.clone();

        Self {
            config,
            api,
            state: AppState::Idle,
            status: "Ready".to_string(),
            content: ContentView::Welcome,
            task: None,
            generation: 0,
            logged_in: false,
            username,
            password: String::new(),
            login_error: None,
            alert: None,
            upload_paths: Vec::new(),
            upload_path_input: String::new(),
            upload_response: None,
            last_refreshed: None,
        }
    }

    /// Full state reset after logout: fresh client, fresh cookie jar,
    /// back to the login view. Only the pending notice survives.
    pub(crate) fn reset_session(&mut self) {
        let alert = self.alert.take();
        *self = Self::new();
        self.alert = alert;
    }

    fn render_alert(&mut self, ctx: &egui::Context) {
        let Some(message) = self.alert.clone() else {
            return;
        };

        let mut dismissed = false;
        egui::Window::new("Notice")
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                ui.add_space(8.0);
                ui.label(message);
                ui.add_space(12.0);
                ui.vertical_centered(|ui| {
                    if ui.button("OK").clicked() {
                        dismissed = true;
                    }
                });
            });

        if dismissed {
            self.alert = None;
        }
    }

    /// Files dropped onto the window feed the upload form.
    fn collect_dropped_files(&mut self, ctx: &egui::Context) {
        if !matches!(self.content, ContentView::Upload) {
            return;
        }
        let dropped = ctx.input(|i| i.raw.dropped_files.clone());
        for file in dropped {
            if let Some(path) = file.path {
                if !self.upload_paths.contains(&path) {
                    self.upload_paths.push(path);
                }
            }
        }
    }
}

impl eframe::App for ReportDashApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.check_progress(ctx);

        // Keep polling the worker channel while something is in flight
        if self.state.is_busy() {
            ctx.request_repaint();
        }

        if self.logged_in {
            self.render_top_panel(ctx);
            self.render_content_panel(ctx);
            self.collect_dropped_files(ctx);
        } else {
            self.render_login_panel(ctx);
        }

        self.render_alert(ctx);
    }
}
