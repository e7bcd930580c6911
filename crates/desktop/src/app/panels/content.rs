//! Central content region - one view active at a time

use eframe::egui;

use crate::app::ReportDashApp;
use crate::ui::ContentView;

impl ReportDashApp {
    pub(crate) fn render_content_panel(&mut self, ctx: &egui::Context) {
        // Move the view out for the frame so the render methods can take
        // &mut self for their actions, then put it back. None of them
        // replaces the content directly; view changes go through
        // check_progress or the toolbar.
        let content = std::mem::replace(&mut self.content, ContentView::Welcome);

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui| match &content {
                    ContentView::Welcome => {
                        ui.add_space(40.0);
                        ui.vertical_centered(|ui| {
                            ui.label("Pick a report from the toolbar to get started.");
                        });
                    }
                    ContentView::Loading => {
                        ui.add_space(40.0);
                        ui.vertical_centered(|ui| {
                            ui.spinner();
                            ui.add_space(8.0);
                            ui.strong("Loading, please wait...");
                        });
                    }
                    ContentView::Summary(summary) => self.render_summary_view(ui, summary),
                    ContentView::Latest(metrics) => self.render_latest_view(ui, metrics),
                    ContentView::Report(report) => self.render_report_view(ui, report),
                    ContentView::AllTime(metrics) => self.render_all_time_view(ui, metrics),
                    ContentView::Graph(graph) => self.render_graph_view(ui, graph),
                    ContentView::Upload => self.render_upload_view(ui),
                });
        });

        self.content = content;
    }
}
