use crate::constants::WINDOW_SIZE;

/// Zero-based offset of the first page shown in the grid. Navigation moves
/// in whole-window steps only, so the offset is always a multiple of
/// `WINDOW_SIZE`. Out-of-precondition calls are defined no-ops, never
/// errors.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PageWindow {
    start: usize,
}

impl PageWindow {
    pub fn new() -> Self {
        Self { start: 0 }
    }

    pub fn start(&self) -> usize {
        self.start
    }

    pub fn reset(&mut self) {
        self.start = 0;
    }

    /// One entry per display slot. Slot `i` holds `Some(start + i)` when
    /// that page exists, `None` otherwise, so `Some` entries always form a
    /// strictly increasing prefix.
    pub fn visible_indices(&self, page_count: usize) -> [Option<usize>; WINDOW_SIZE] {
        std::array::from_fn(|i| {
            let index = self.start + i;
            (index < page_count).then_some(index)
        })
    }

    pub fn can_advance(&self, page_count: usize) -> bool {
        self.start + WINDOW_SIZE < page_count
    }

    pub fn can_retreat(&self) -> bool {
        self.start > 0
    }

    pub fn advance(&mut self, page_count: usize) {
        if self.can_advance(page_count) {
            self.start += WINDOW_SIZE;
        }
    }

    pub fn retreat(&mut self) {
        if self.start >= WINDOW_SIZE {
            self.start -= WINDOW_SIZE;
        }
    }
}
