use crate::constants::WINDOW_SIZE;
use crate::error::Result;
use crate::ui::viewer_panel::HwiViewerPanel;
use crate::viewer::state::HwiViewerState;
use eframe::egui;
use std::path::PathBuf;

pub struct HwiViewerWidget {
    viewer_state: HwiViewerState,
    viewer_panel: HwiViewerPanel,
}

impl HwiViewerWidget {
    pub fn new() -> Self {
        Self {
            viewer_state: HwiViewerState::default(),
            viewer_panel: HwiViewerPanel::default(),
        }
    }

    pub fn show(&mut self, ctx: &egui::Context) {
        self.viewer_panel.show(ctx, &mut self.viewer_state);
    }

    pub fn state(&self) -> &HwiViewerState {
        &self.viewer_state
    }

    pub fn state_mut(&mut self) -> &mut HwiViewerState {
        &mut self.viewer_state
    }

    pub fn open_container(&mut self, path: PathBuf) -> Result<()> {
        self.viewer_state.open_container(path)
    }

    pub fn page_count(&self) -> usize {
        self.viewer_state.page_count()
    }

    pub fn visible_pages(&self) -> [Option<usize>; WINDOW_SIZE] {
        self.viewer_state.visible_pages()
    }
}

impl Default for HwiViewerWidget {
    fn default() -> Self {
        Self::new()
    }
}
