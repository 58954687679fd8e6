use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug, Clone)]
pub enum HwiError {
    #[error("File not found: {0}")]
    FileNotFound(PathBuf),

    #[error("Failed to read HWI archive: {0}")]
    ArchiveRead(String),

    #[error("No PDF found in the HWI file.")]
    NoPdfFound,

    #[error("Failed to extract PDF payload: {0}")]
    ExtractFailed(String),

    #[error("Invalid PDF file: {0}")]
    InvalidPdf(String),

    #[error("Render failed: {0}")]
    RenderFailed(String),

    #[error("Page out of range")]
    PageOutOfRange,
}

pub type Result<T> = std::result::Result<T, HwiError>;
