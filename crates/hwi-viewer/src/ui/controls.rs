use crate::constants::WINDOW_SIZE;
use crate::viewer::state::HwiViewerState;
use eframe::egui;
use std::path::PathBuf;

pub fn show_controls(
    ui: &mut egui::Ui,
    state: &mut HwiViewerState,
    pending_file: &mut Option<PathBuf>,
) {
    ui.horizontal(|ui| {
        if ui.button("Load .HWI File").clicked() {
            if let Some(path) = rfd::FileDialog::new()
                .add_filter("HWI", &["hwi"])
                .pick_file()
            {
                *pending_file = Some(path);
            }
        }

        ui.separator();

        if ui
            .add_enabled(state.can_retreat(), egui::Button::new("Previous"))
            .clicked()
        {
            state.prev_window();
        }

        if ui
            .add_enabled(state.can_advance(), egui::Button::new("Next"))
            .clicked()
        {
            state.next_window();
        }

        if state.page_count() > 0 {
            ui.separator();
            let first = state.window_start() + 1;
            let last = (state.window_start() + WINDOW_SIZE).min(state.page_count());
            ui.label(format!("Pages {}-{} / {}", first, last, state.page_count()));
        }
    });
}
