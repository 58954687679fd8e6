use super::cache::{CacheStats, PageCache};
use super::page_window::PageWindow;
use super::pdf_loader::PdfDocument;
use crate::constants::WINDOW_SIZE;
use crate::container::{self, ExtractedPdf};
use crate::error::{HwiError, Result};
use image::RgbaImage;
use log::info;
use std::path::PathBuf;
use std::rc::Rc;

/// Everything one loaded container amounts to: the document handle, the
/// extraction scope keeping its payload on disk, and the page window into
/// it. Replaced wholesale on each successful load; a failed load leaves all
/// of it untouched and only records an error message for the display.
#[derive(Debug, Default)]
pub struct HwiViewerState {
    container_path: Option<PathBuf>,
    window: PageWindow,
    document: Option<Rc<PdfDocument>>,
    extracted: Option<ExtractedPdf>,
    cache: PageCache,
    last_error: Option<String>,
}

impl HwiViewerState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn open_container(&mut self, path: PathBuf) -> Result<()> {
        match self.try_open(path) {
            Ok(()) => {
                self.last_error = None;
                Ok(())
            }
            Err(e) => {
                self.last_error = Some(e.to_string());
                Err(e)
            }
        }
    }

    fn try_open(&mut self, path: PathBuf) -> Result<()> {
        let extracted = container::extract_pdf(&path)?;
        let document = PdfDocument::load(extracted.pdf_path())?;

        info!(
            "Loaded {} ({} pages)",
            path.display(),
            document.page_count()
        );

        // Replacing the previous extraction drops its scratch directory.
        self.container_path = Some(path);
        self.extracted = Some(extracted);
        self.document = Some(document);
        self.window.reset();
        self.cache.clear();
        Ok(())
    }

    pub fn container_path(&self) -> Option<&PathBuf> {
        self.container_path.as_ref()
    }

    pub fn is_document_loaded(&self) -> bool {
        self.document.is_some()
    }

    pub fn page_count(&self) -> usize {
        self.document
            .as_ref()
            .map_or(0, |d| d.page_count() as usize)
    }

    pub fn window_start(&self) -> usize {
        self.window.start()
    }

    pub fn visible_pages(&self) -> [Option<usize>; WINDOW_SIZE] {
        self.window.visible_indices(self.page_count())
    }

    pub fn next_window(&mut self) {
        let page_count = self.page_count();
        self.window.advance(page_count);
    }

    pub fn prev_window(&mut self) {
        self.window.retreat();
    }

    pub fn can_advance(&self) -> bool {
        self.window.can_advance(self.page_count())
    }

    pub fn can_retreat(&self) -> bool {
        self.window.can_retreat()
    }

    pub fn rendered_page(&mut self, page_index: usize) -> Result<Rc<RgbaImage>> {
        if let Some(image) = self.cache.get(page_index) {
            return Ok(image);
        }

        let document = self.document.as_ref().ok_or(HwiError::PageOutOfRange)?;
        let image = Rc::new(document.render_page_to_image(page_index)?);
        self.cache.put(page_index, image.clone());
        Ok(image)
    }

    /// Texture for one page, uploaded at most once per load. The cache keeps
    /// the handle alive so repaints reuse it instead of re-uploading.
    pub fn page_texture(
        &mut self,
        ctx: &egui::Context,
        page_index: usize,
    ) -> Result<egui::TextureHandle> {
        if let Some(texture) = self.cache.texture(page_index) {
            return Ok(texture);
        }

        let image = self.rendered_page(page_index)?;
        let size = [image.width() as usize, image.height() as usize];
        let color_image = egui::ColorImage::from_rgba_unmultiplied(size, image.as_raw());
        let texture = ctx.load_texture(
            format!("hwi_page_{}", page_index),
            color_image,
            Default::default(),
        );
        self.cache.put_texture(page_index, texture.clone());
        Ok(texture)
    }

    pub fn cache_stats(&self) -> CacheStats {
        self.cache.stats()
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    pub fn clear_error(&mut self) {
        self.last_error = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use std::io::Write;
    use tempfile::TempDir;
    use zip::write::FileOptions;
    use zip::ZipWriter;

    fn archive_without_pdf(dir: &TempDir) -> PathBuf {
        let path = dir.path().join("empty.hwi");
        let mut writer = ZipWriter::new(File::create(&path).unwrap());
        writer.start_file("notes.txt", FileOptions::default()).unwrap();
        writer.write_all(b"no payload here").unwrap();
        writer.finish().unwrap();
        path
    }

    fn archive_with_pdf(dir: &TempDir, page_count: usize) -> PathBuf {
        let path = dir.path().join("doc.hwi");
        let mut writer = ZipWriter::new(File::create(&path).unwrap());
        writer.start_file("doc.pdf", FileOptions::default()).unwrap();
        writer.write_all(&minimal_pdf(page_count)).unwrap();
        writer.finish().unwrap();
        path
    }

    /// Hand-built PDF with `page_count` blank US-letter pages.
    fn minimal_pdf(page_count: usize) -> Vec<u8> {
        let mut buf: Vec<u8> = Vec::new();
        let mut offsets: Vec<usize> = Vec::new();
        buf.extend_from_slice(b"%PDF-1.4\n");

        offsets.push(buf.len());
        buf.extend_from_slice(b"1 0 obj << /Type /Catalog /Pages 2 0 R >> endobj\n");

        let kids: Vec<String> = (0..page_count).map(|i| format!("{} 0 R", i + 3)).collect();
        offsets.push(buf.len());
        buf.extend_from_slice(
            format!(
                "2 0 obj << /Type /Pages /Kids [{}] /Count {} >> endobj\n",
                kids.join(" "),
                page_count
            )
            .as_bytes(),
        );

        for i in 0..page_count {
            offsets.push(buf.len());
            buf.extend_from_slice(
                format!(
                    "{} 0 obj << /Type /Page /Parent 2 0 R /MediaBox [0 0 612 792] >> endobj\n",
                    i + 3
                )
                .as_bytes(),
            );
        }

        let xref_pos = buf.len();
        let total_objects = page_count + 3;
        buf.extend_from_slice(format!("xref\n0 {}\n", total_objects).as_bytes());
        buf.extend_from_slice(b"0000000000 65535 f \n");
        for offset in &offsets {
            buf.extend_from_slice(format!("{:010} 00000 n \n", offset).as_bytes());
        }
        buf.extend_from_slice(
            format!(
                "trailer << /Size {} /Root 1 0 R >>\nstartxref\n{}\n%%EOF\n",
                total_objects, xref_pos
            )
            .as_bytes(),
        );
        buf
    }

    #[test]
    fn test_fresh_state_has_no_document() {
        let state = HwiViewerState::new();
        assert!(!state.is_document_loaded());
        assert_eq!(state.page_count(), 0);
        assert_eq!(state.visible_pages(), [None, None, None, None]);
        assert!(!state.can_advance());
        assert!(!state.can_retreat());
        assert!(state.last_error().is_none());
    }

    #[test]
    fn test_navigation_without_document_is_noop() {
        let mut state = HwiViewerState::new();
        state.next_window();
        state.prev_window();
        assert_eq!(state.window_start(), 0);
    }

    #[test]
    fn test_open_container_without_pdf_records_error() {
        let dir = TempDir::new().unwrap();
        let path = archive_without_pdf(&dir);

        let mut state = HwiViewerState::new();
        let result = state.open_container(path);

        assert!(matches!(result, Err(HwiError::NoPdfFound)));
        assert_eq!(state.last_error(), Some("No PDF found in the HWI file."));
        assert!(!state.is_document_loaded());
        assert_eq!(state.window_start(), 0);
        assert!(!state.can_advance());
        assert!(!state.can_retreat());
    }

    #[test]
    fn test_open_missing_container_records_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("absent.hwi");

        let mut state = HwiViewerState::new();
        let result = state.open_container(path);

        assert!(matches!(result, Err(HwiError::FileNotFound(_))));
        assert!(state.last_error().unwrap().contains("File not found"));
        assert!(state.container_path().is_none());
    }

    #[test]
    fn test_rendered_page_without_document() {
        let mut state = HwiViewerState::new();
        assert!(matches!(
            state.rendered_page(0),
            Err(HwiError::PageOutOfRange)
        ));
    }

    #[test]
    #[ignore = "needs the pdfium native library"]
    fn test_reload_resets_window() {
        let dir = TempDir::new().unwrap();
        let path = archive_with_pdf(&dir, 10);

        let mut state = HwiViewerState::new();
        state.open_container(path.clone()).unwrap();
        assert_eq!(state.page_count(), 10);

        state.next_window();
        assert_eq!(state.window_start(), 4);

        state.open_container(path).unwrap();
        assert_eq!(state.window_start(), 0);
        assert_eq!(
            state.visible_pages(),
            [Some(0), Some(1), Some(2), Some(3)]
        );
    }

    #[test]
    fn test_clear_error() {
        let dir = TempDir::new().unwrap();
        let path = archive_without_pdf(&dir);

        let mut state = HwiViewerState::new();
        let _ = state.open_container(path);
        assert!(state.last_error().is_some());

        state.clear_error();
        assert!(state.last_error().is_none());
    }
}
