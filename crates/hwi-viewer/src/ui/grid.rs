use crate::constants::{
    GRID_COLUMNS, GRID_ROWS, SLOT_BORDER_COLOR, SLOT_BORDER_WIDTH, SLOT_SPACING,
};
use crate::viewer::state::HwiViewerState;
use eframe::egui;

/// The fixed 2x2 page grid. Each slot shows either a rendered page scaled
/// to fit while preserving aspect ratio, or a placeholder message.
pub fn show_grid(ui: &mut egui::Ui, state: &mut HwiViewerState) {
    let viewport = ui.available_rect_before_wrap();
    let slot_width = (viewport.width() - SLOT_SPACING) / GRID_COLUMNS as f32;
    let slot_height = (viewport.height() - SLOT_SPACING) / GRID_ROWS as f32;

    for (slot, page) in state.visible_pages().into_iter().enumerate() {
        let col = slot % GRID_COLUMNS;
        let row = slot / GRID_COLUMNS;
        let min = egui::pos2(
            viewport.min.x + col as f32 * (slot_width + SLOT_SPACING),
            viewport.min.y + row as f32 * (slot_height + SLOT_SPACING),
        );
        let rect = egui::Rect::from_min_size(min, egui::vec2(slot_width, slot_height));

        show_slot(ui, state, slot, page, rect);
    }
}

fn show_slot(
    ui: &mut egui::Ui,
    state: &mut HwiViewerState,
    slot: usize,
    page: Option<usize>,
    rect: egui::Rect,
) {
    ui.painter().rect_stroke(
        rect,
        egui::CornerRadius::ZERO,
        egui::Stroke::new(SLOT_BORDER_WIDTH, SLOT_BORDER_COLOR),
        egui::StrokeKind::Inside,
    );

    let text = if let Some(message) = state.last_error() {
        message.to_string()
    } else if let Some(page_index) = page {
        match state.page_texture(ui.ctx(), page_index) {
            Ok(texture) => {
                draw_page_texture(ui, &texture, rect);
                return;
            }
            Err(e) => format!("Failed to render page {}: {}", page_index + 1, e),
        }
    } else if state.is_document_loaded() {
        format!("Page {} does not exist.", state.window_start() + slot + 1)
    } else {
        format!("Page {} will be displayed here", slot + 1)
    };

    ui.put(rect, egui::Label::new(text));
}

fn draw_page_texture(ui: &mut egui::Ui, texture: &egui::TextureHandle, rect: egui::Rect) {
    let page_size = texture.size_vec2();
    let scale = (rect.width() / page_size.x)
        .min(rect.height() / page_size.y)
        .min(1.0);
    let fitted = page_size * scale;
    let image_rect = egui::Rect::from_center_size(rect.center(), fitted);

    let image_widget = egui::Image::new(texture).fit_to_exact_size(fitted);
    ui.put(image_rect, image_widget);
}
