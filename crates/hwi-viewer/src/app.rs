use crate::widget::HwiViewerWidget;
use eframe::egui;

pub struct HwiViewerApp {
    widget: HwiViewerWidget,
}

impl HwiViewerApp {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Default for HwiViewerApp {
    fn default() -> Self {
        Self {
            widget: HwiViewerWidget::new(),
        }
    }
}

impl eframe::App for HwiViewerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.widget.show(ctx);
    }
}
