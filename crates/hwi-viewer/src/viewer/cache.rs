use egui::TextureHandle;
use image::RgbaImage;
use std::collections::HashMap;
use std::rc::Rc;

#[derive(Debug, Clone, Copy, Default)]
pub struct CacheStats {
    pub cached_pages: usize,
    pub hits: u64,
    pub misses: u64,
}

/// Rendered-page cache keyed by page index. The grid redraws every frame,
/// so pages are rasterized once per load instead of once per frame, and the
/// uploaded GPU texture is kept alongside the pixels so repaints reuse it.
/// Cleared whenever a new document is installed.
#[derive(Default)]
pub struct PageCache {
    pages: HashMap<usize, Rc<RgbaImage>>,
    textures: HashMap<usize, TextureHandle>,
    stats: CacheStats,
}

impl std::fmt::Debug for PageCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PageCache")
            .field("cached_pages", &self.pages.len())
            .field("cached_textures", &self.textures.len())
            .field("stats", &self.stats)
            .finish()
    }
}

impl PageCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&mut self, page_index: usize) -> Option<Rc<RgbaImage>> {
        match self.pages.get(&page_index) {
            Some(image) => {
                self.stats.hits += 1;
                Some(image.clone())
            }
            None => {
                self.stats.misses += 1;
                None
            }
        }
    }

    pub fn put(&mut self, page_index: usize, image: Rc<RgbaImage>) {
        self.pages.insert(page_index, image);
        self.stats.cached_pages = self.pages.len();
    }

    pub fn texture(&self, page_index: usize) -> Option<TextureHandle> {
        self.textures.get(&page_index).cloned()
    }

    pub fn put_texture(&mut self, page_index: usize, texture: TextureHandle) {
        self.textures.insert(page_index, texture);
    }

    pub fn clear(&mut self) {
        self.pages.clear();
        self.textures.clear();
        self.stats.cached_pages = 0;
    }

    pub fn stats(&self) -> CacheStats {
        self.stats
    }
}
