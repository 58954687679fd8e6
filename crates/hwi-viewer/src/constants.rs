use egui::Color32;

/// Number of pages shown at once. Navigation always moves in whole-window
/// steps, so the window start stays a multiple of this.
pub const WINDOW_SIZE: usize = 4;

pub const GRID_COLUMNS: usize = 2;
pub const GRID_ROWS: usize = 2;

pub const SLOT_SPACING: f32 = 8.0;
pub const SLOT_BORDER_COLOR: Color32 = Color32::BLACK;
pub const SLOT_BORDER_WIDTH: f32 = 1.0;

pub const DEFAULT_WINDOW_WIDTH: f32 = 1200.0;
pub const DEFAULT_WINDOW_HEIGHT: f32 = 800.0;
