use crate::error::{HwiError, Result};
use image::RgbaImage;
use pdfium_render::prelude::*;
use std::path::{Path, PathBuf};
use std::rc::Rc;

fn bind_pdfium() -> Result<Pdfium> {
    let exe_dir = std::env::current_exe()
        .ok()
        .and_then(|p| p.parent().map(Path::to_path_buf));

    let bindings = match exe_dir {
        Some(dir) => {
            Pdfium::bind_to_library(Pdfium::pdfium_platform_library_name_at_path(&dir))
                .or_else(|_| Pdfium::bind_to_system_library())
        }
        None => Pdfium::bind_to_system_library(),
    }
    .map_err(|e| HwiError::InvalidPdf(format!("Failed to bind to pdfium: {}", e)))?;

    Ok(Pdfium::new(bindings))
}

pub struct PdfDocument {
    file_path: PathBuf,
    page_count: u16,
    pdfium: Pdfium,
}

impl std::fmt::Debug for PdfDocument {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PdfDocument")
            .field("file_path", &self.file_path)
            .field("page_count", &self.page_count)
            .finish()
    }
}

impl PdfDocument {
    pub fn load(path: &Path) -> Result<Rc<Self>> {
        if !path.exists() {
            return Err(HwiError::FileNotFound(path.to_path_buf()));
        }

        let pdfium = bind_pdfium()?;

        let page_count = {
            let document = pdfium
                .load_pdf_from_file(path, None)
                .map_err(|e| HwiError::InvalidPdf(format!("Failed to load PDF: {}", e)))?;
            document.pages().len()
        };

        Ok(Rc::new(PdfDocument {
            file_path: path.to_path_buf(),
            page_count,
            pdfium,
        }))
    }

    pub fn page_count(&self) -> u16 {
        self.page_count
    }

    /// Renders one page to an RGBA image at the page's native point size.
    /// `index` must be below `page_count`.
    pub fn render_page_to_image(&self, index: usize) -> Result<RgbaImage> {
        if index >= self.page_count as usize {
            return Err(HwiError::PageOutOfRange);
        }

        let document = self
            .pdfium
            .load_pdf_from_file(&self.file_path, None)
            .map_err(|e| HwiError::RenderFailed(format!("Failed to load PDF: {}", e)))?;

        let page = document
            .pages()
            .get(index as u16)
            .map_err(|_| HwiError::PageOutOfRange)?;

        let width = page.width().value.round().max(1.0) as u32;
        let height = page.height().value.round().max(1.0) as u32;

        let mut bitmap = PdfBitmap::empty(
            width as i32,
            height as i32,
            PdfBitmapFormat::BGRA,
            self.pdfium.bindings(),
        )
        .map_err(|e| HwiError::RenderFailed(format!("Failed to create bitmap: {:?}", e)))?;

        page.render_into_bitmap(&mut bitmap, width as i32, height as i32, None)
            .map_err(|e| HwiError::RenderFailed(format!("Failed to render bitmap: {:?}", e)))?;

        let pixels = bitmap.as_raw_bytes();
        let mut rgba_image = RgbaImage::new(width, height);

        for (i, chunk) in pixels.chunks(4).enumerate() {
            if i < (width * height) as usize && chunk.len() == 4 {
                let x = i as u32 % width;
                let y = i as u32 / width;
                rgba_image.put_pixel(x, y, image::Rgba([chunk[2], chunk[1], chunk[0], chunk[3]]));
            }
        }

        Ok(rgba_image)
    }
}
