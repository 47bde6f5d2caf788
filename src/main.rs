//! Funkin Launcher - rhythm-game engine launcher and mod manager
//!
//! Pick an engine and version, manage mod directories, start the game with
//! a mod selected.

use eframe::egui;

mod app;
mod ui;

use app::LauncherApp;
use funkin_launcher::logging::{init_logger, log_info};

fn main() -> eframe::Result<()> {
    // Log files go to logs/ in the working directory
    init_logger();
    log_info("Funkin Launcher starting up...");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([850.0, 700.0])
            .with_min_inner_size([600.0, 400.0])
            .with_title(format!("Funkin Launcher - v{}", env!("CARGO_PKG_VERSION"))),
        ..Default::default()
    };

    eframe::run_native(
        "Funkin Launcher",
        options,
        Box::new(|_cc| Ok(Box::new(LauncherApp::default()))),
    )
}
