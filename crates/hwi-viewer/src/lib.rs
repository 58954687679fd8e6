pub mod app;
pub mod constants;
pub mod container;
pub mod error;
pub mod ui;
pub mod viewer;
pub mod widget;

pub use container::ExtractedPdf;
pub use error::{HwiError, Result};
pub use viewer::page_window::PageWindow;
pub use viewer::state::HwiViewerState;
pub use widget::HwiViewerWidget;
