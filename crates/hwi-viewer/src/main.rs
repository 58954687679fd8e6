use eframe::egui;
use hwi_viewer::app::HwiViewerApp;
use hwi_viewer::constants::{DEFAULT_WINDOW_HEIGHT, DEFAULT_WINDOW_WIDTH};
use simplelog::{ColorChoice, Config, LevelFilter, TermLogger, TerminalMode};

fn main() -> eframe::Result<()> {
    let _ = TermLogger::init(
        LevelFilter::Info,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    );

    let options = eframe::NativeOptions {
        vsync: true,
        renderer: eframe::Renderer::Glow,
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([DEFAULT_WINDOW_WIDTH, DEFAULT_WINDOW_HEIGHT])
            .with_title("HWI Viewer"),
        ..Default::default()
    };

    eframe::run_native(
        "HWI Viewer",
        options,
        Box::new(|_cc| Ok(Box::new(HwiViewerApp::default()))),
    )
}
