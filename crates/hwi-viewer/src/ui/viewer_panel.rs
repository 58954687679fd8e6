use super::{controls, grid};
use crate::viewer::state::HwiViewerState;
use eframe::egui;
use log::error;
use std::path::PathBuf;

pub struct HwiViewerPanel {
    pending_file: Option<PathBuf>,
}

impl HwiViewerPanel {
    pub fn new() -> Self {
        Self { pending_file: None }
    }

    pub fn show(&mut self, ctx: &egui::Context, state: &mut HwiViewerState) {
        if let Some(path) = self.pending_file.take() {
            if let Err(e) = state.open_container(path.clone()) {
                error!("Failed to load {}: {}", path.display(), e);
            }
        }

        egui::TopBottomPanel::bottom("status_panel").show(ctx, |ui| {
            show_status(ui, state);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            controls::show_controls(ui, state, &mut self.pending_file);
            ui.separator();
            grid::show_grid(ui, state);
        });
    }
}

impl Default for HwiViewerPanel {
    fn default() -> Self {
        Self::new()
    }
}

fn show_status(ui: &mut egui::Ui, state: &HwiViewerState) {
    ui.horizontal(|ui| {
        match state.container_path() {
            Some(path) => ui.label(format!("{}", path.display())),
            None => ui.label("No file loaded"),
        };

        ui.separator();

        let stats = state.cache_stats();
        ui.label(format!(
            "{} pages, {} rendered",
            state.page_count(),
            stats.cached_pages
        ));
    });
}
