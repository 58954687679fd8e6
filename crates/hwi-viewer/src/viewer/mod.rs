pub mod cache;
pub mod page_window;
pub mod pdf_loader;
pub mod state;
