mod app;
mod config;
mod logging;
mod settings;
mod window;

use app::RootWindow;
use config::{MIN_HEIGHT, MIN_WIDTH};
use eframe::egui;
use window::WindowKind;

fn main() -> eframe::Result<()> {
    logging::init();
    let config = config::load_or_default();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(WindowKind::Root.title())
            .with_inner_size([config.window.width, config.window.height])
            .with_min_inner_size([MIN_WIDTH, MIN_HEIGHT]),
        ..Default::default()
    };

    eframe::run_native(
        WindowKind::Root.title(),
        options,
        Box::new(move |cc| Ok(Box::new(RootWindow::new(cc, &config)))),
    )
}
