//! Graph panel - displays the server-rendered metrics image

use eframe::egui;
use egui_phosphor::regular;

use crate::app::ReportDashApp;
use crate::ui::GraphView;

/// File the download action writes the received bytes to, unchanged.
const GRAPH_FILE_NAME: &str = "generated_graph.png";

impl ReportDashApp {
    pub(crate) fn render_graph_view(&mut self, ui: &mut egui::Ui, graph: &GraphView) {
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui
                .button(format!("{} Download Graphs", regular::DOWNLOAD_SIMPLE))
                .clicked()
            {
                match std::fs::write(GRAPH_FILE_NAME, &graph.bytes) {
                    Ok(()) => {
                        self.alert = Some(format!("Graph saved to {GRAPH_FILE_NAME}"));
                    }
                    Err(err) => {
                        tracing::error!("Failed to save graph image: {err}");
                        self.alert =
                            Some("An error occurred while saving the graph.".to_string());
                    }
                }
            }
        });

        ui.add_space(8.0);

        // The bytes were registered with egui's loader under this URI
        // when the fetch completed
        ui.add(
            egui::Image::new(egui::ImageSource::Uri(graph.uri.clone().into()))
                .max_width(ui.available_width()),
        );
    }
}
