pub mod controls;
pub mod grid;
pub mod viewer_panel;
