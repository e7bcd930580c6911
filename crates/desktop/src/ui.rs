//! Shared UI state types for the dashboard app

use std::sync::mpsc::Receiver;

use reportdash_core::{
    Report, ReportDashError, SnapshotMetrics, SummaryMetrics, TotalSummary,
};

/// What the app is currently waiting on. One background task at a time;
/// the toolbar actions are disabled while busy.
#[derive(Clone, Copy, PartialEq)]
pub enum AppState {
    Idle,
    LoggingIn,
    LoggingOut,
    FetchingSummary,
    FetchingLatest,
    BuildingReport,
    FetchingAllTime,
    FetchingGraph,
    Uploading,
}

impl AppState {
    pub fn is_busy(&self) -> bool {
        !matches!(self, AppState::Idle)
    }

    pub fn label(&self) -> &'static str {
        match self {
            AppState::Idle => "Ready",
            AppState::LoggingIn => "Signing in...",
            AppState::LoggingOut => "Signing out...",
            AppState::FetchingSummary => "Fetching summary report...",
            AppState::FetchingLatest => "Loading latest metrics...",
            AppState::BuildingReport => "Generating complete report...",
            AppState::FetchingAllTime => "Fetching all-time metrics...",
            AppState::FetchingGraph => "Rendering metrics graphs...",
            AppState::Uploading => "Uploading report files...",
        }
    }
}

/// Terminal message from a background worker.
pub enum TaskResult {
    Login(Result<(), ReportDashError>),
    Logout(Result<Option<String>, ReportDashError>),
    Summary(Result<TotalSummary, ReportDashError>),
    Latest(Result<SnapshotMetrics, ReportDashError>),
    Report(Result<Report, ReportDashError>),
    AllTime(Result<SummaryMetrics, ReportDashError>),
    Graph(Result<Vec<u8>, ReportDashError>),
    Upload(Result<String, ReportDashError>),
}

/// Receiver for the one in-flight worker. Results are tagged with the
/// generation that spawned them; anything older than the app's current
/// generation is dropped unread.
pub struct TaskHandle {
    pub generation: u64,
    pub receiver: Receiver<(u64, TaskResult)>,
}

/// The most recent graph image. Bytes are retained for the download
/// action; the URI keys egui's bytes loader per request generation so a
/// newer fetch supersedes the old texture.
pub struct GraphView {
    pub uri: String,
    pub bytes: Vec<u8>,
}

/// What the shared content region is showing. Each fetch replaces the
/// whole view; at most one is ever active.
pub enum ContentView {
    Welcome,
    /// Placeholder while a content fetch is in flight. Always replaced,
    /// on the failure path too.
    Loading,
    Summary(TotalSummary),
    Latest(SnapshotMetrics),
    Report(Report),
    AllTime(SummaryMetrics),
    Graph(GraphView),
    Upload,
}
