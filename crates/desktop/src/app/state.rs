//! Background operations - spawning fetch workers and draining results

use std::sync::mpsc::{channel, TryRecvError};
use std::thread;

use eframe::egui;
use reportdash_core::ReportDashError;

use crate::api::ApiClient;
use crate::ui::{AppState, ContentView, GraphView, TaskHandle, TaskResult};

use super::ReportDashApp;

impl ReportDashApp {
    /// Spawn one worker and install its receiver. Replacing the previous
    /// handle drops the old receiver, so an earlier worker still running
    /// sends into the void; the generation check in `check_progress`
    /// catches anything that slips through before the swap.
    fn spawn_task<F>(&mut self, state: AppState, job: F)
    where
        F: FnOnce() -> TaskResult + Send + 'static,
    {
        self.generation += 1;
        let generation = self.generation;
        let (tx, rx) = channel();
        self.task = Some(TaskHandle {
            generation,
            receiver: rx,
        });
        self.state = state;
        self.status = state.label().to_string();

        thread::spawn(move || {
            let _ = tx.send((generation, job()));
        });
    }

    pub(crate) fn start_login(&mut self) {
        if self.state.is_busy() {
            return;
        }
        self.login_error = None;

        // Fresh client per attempt: picks up server URL edits and starts
        // with an empty cookie jar
        match ApiClient::new(&self.config.server_url) {
            Ok(api) => self.api = api,
            Err(err) => {
                tracing::error!("Failed to build HTTP client: {err}");
                self.login_error = Some("Network error. Please try again later.".to_string());
                return;
            }
        }

        let api = self.api.clone();
        let username = self.username.trim().to_string();
        let password = self.password.trim().to_string();
        self.spawn_task(AppState::LoggingIn, move || {
            TaskResult::Login(api.login(&username, &password))
        });
    }

    pub(crate) fn start_logout(&mut self) {
        if self.state.is_busy() {
            return;
        }
        let api = self.api.clone();
        self.spawn_task(AppState::LoggingOut, move || TaskResult::Logout(api.logout()));
    }

    pub(crate) fn start_fetch_summary(&mut self) {
        if self.state.is_busy() {
            return;
        }
        self.content = ContentView::Loading;
        let api = self.api.clone();
        self.spawn_task(AppState::FetchingSummary, move || {
            TaskResult::Summary(api.total_summary())
        });
    }

    pub(crate) fn start_fetch_latest(&mut self) {
        if self.state.is_busy() {
            return;
        }
        self.content = ContentView::Loading;
        let api = self.api.clone();
        self.spawn_task(AppState::FetchingLatest, move || {
            TaskResult::Latest(api.latest_snapshot())
        });
    }

    pub(crate) fn start_fetch_report(&mut self) {
        if self.state.is_busy() {
            return;
        }
        self.content = ContentView::Loading;
        let api = self.api.clone();
        self.spawn_task(AppState::BuildingReport, move || {
            TaskResult::Report(api.full_report())
        });
    }

    pub(crate) fn start_fetch_all_time(&mut self) {
        if self.state.is_busy() {
            return;
        }
        self.content = ContentView::Loading;
        let api = self.api.clone();
        self.spawn_task(AppState::FetchingAllTime, move || {
            TaskResult::AllTime(api.all_time_metrics())
        });
    }

    pub(crate) fn start_fetch_graph(&mut self) {
        if self.state.is_busy() {
            return;
        }
        self.content = ContentView::Loading;
        let api = self.api.clone();
        self.spawn_task(AppState::FetchingGraph, move || {
            TaskResult::Graph(api.metrics_graph())
        });
    }

    /// The upload form stays on screen; only the toolbar shows progress.
    pub(crate) fn start_upload(&mut self) {
        if self.state.is_busy() || self.upload_paths.is_empty() {
            return;
        }
        self.upload_response = None;
        let api = self.api.clone();
        let paths = self.upload_paths.clone();
        self.spawn_task(AppState::Uploading, move || {
            TaskResult::Upload(api.upload_reports(&paths))
        });
    }

    /// Switching to the upload form is local; no request involved.
    pub(crate) fn open_upload_form(&mut self) {
        self.content = ContentView::Upload;
        self.upload_response = None;
    }

    /// Drain the worker channel. Results from superseded generations are
    /// dropped so a slow response can never overwrite a newer view.
    pub(crate) fn check_progress(&mut self, ctx: &egui::Context) {
        let Some(handle) = &self.task else {
            return;
        };
        let (generation, result) = match handle.receiver.try_recv() {
            Ok(message) => message,
            Err(TryRecvError::Empty) => return,
            Err(TryRecvError::Disconnected) => {
                // Worker died without reporting; never leave the loading
                // placeholder or the busy state behind
                self.task = None;
                self.state = AppState::Idle;
                self.status = "Ready".to_string();
                if matches!(self.content, ContentView::Loading) {
                    self.content = ContentView::Welcome;
                }
                tracing::error!("Background worker exited without a result");
                self.alert = Some("Something went wrong. Please try again later.".to_string());
                return;
            }
        };
        if generation != self.generation {
            return; // stale worker
        }

        self.task = None;
        self.state = AppState::Idle;
        self.status = "Ready".to_string();

        match result {
            TaskResult::Login(Ok(())) => {
                self.logged_in = true;
                self.password.clear();
                if self.config.username != self.username {
                    self.config.username = self.username.clone();
                    let _ = self.config.save();
                }
                // Landing view: the summary report, fetched right away
                self.start_fetch_summary();
            }
            TaskResult::Login(Err(ReportDashError::Api(message))) => {
                self.login_error = Some(message);
            }
            TaskResult::Login(Err(err)) => {
                tracing::error!("Login failed: {err}");
                self.login_error = Some("Network error. Please try again later.".to_string());
            }

            TaskResult::Logout(Ok(Some(message))) => {
                self.alert = Some(message);
                self.reset_session();
            }
            TaskResult::Logout(Ok(None)) => {}
            TaskResult::Logout(Err(err)) => {
                tracing::error!("Logout failed: {err}");
                self.alert = Some("An error occurred while signing out.".to_string());
            }

            TaskResult::Summary(Ok(summary)) => {
                self.content = ContentView::Summary(summary);
                self.mark_refreshed();
            }
            TaskResult::Summary(Err(err)) => {
                self.content_failure("Error fetching the summary report", err);
            }

            TaskResult::Latest(Ok(metrics)) => {
                self.content = ContentView::Latest(metrics);
                self.mark_refreshed();
            }
            TaskResult::Latest(Err(err)) => {
                self.content_failure("Error loading the latest metrics", err);
            }

            TaskResult::Report(Ok(report)) => {
                self.content = ContentView::Report(report);
                self.mark_refreshed();
            }
            TaskResult::Report(Err(err)) => {
                self.content_failure("Error generating the complete report", err);
            }

            TaskResult::AllTime(Ok(metrics)) => {
                self.content = ContentView::AllTime(metrics);
                self.mark_refreshed();
            }
            TaskResult::AllTime(Err(err)) => {
                self.content_failure("Error fetching the all-time metrics", err);
            }

            TaskResult::Graph(Ok(bytes)) => {
                let uri = format!("bytes://metrics_graph/{generation}.png");
                ctx.include_bytes(uri.clone(), bytes.clone());
                self.content = ContentView::Graph(GraphView { uri, bytes });
                self.mark_refreshed();
            }
            TaskResult::Graph(Err(err)) => {
                self.content_failure("Error generating the metrics graphs", err);
            }

            TaskResult::Upload(Ok(message)) => {
                self.upload_response = Some(message);
            }
            // The server's message or error is shown verbatim under the form
            TaskResult::Upload(Err(ReportDashError::Api(message))) => {
                self.upload_response = Some(message);
            }
            TaskResult::Upload(Err(err)) => {
                tracing::error!("Upload failed: {err}");
                self.upload_response =
                    Some("An error occurred while uploading the files.".to_string());
            }
        }
    }

    /// Clear the loading placeholder and surface the failure. Application
    /// errors are shown verbatim; transport errors get a generic notice
    /// and the detail goes to the log.
    fn content_failure(&mut self, context: &str, err: ReportDashError) {
        self.content = ContentView::Welcome;
        match err {
            ReportDashError::Api(message) => self.alert = Some(message),
            other => {
                tracing::error!("{context}: {other}");
                self.alert = Some(format!("{context}. Please try again later."));
            }
        }
    }

    fn mark_refreshed(&mut self) {
        let now = chrono::Local::now();
        self.status = format!("Updated {}", now.format("%H:%M:%S"));
        self.last_refreshed = Some(now);
    }
}
