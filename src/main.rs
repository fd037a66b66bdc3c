//! Gomoku GUI
//!
//! Two players share the mouse. Click an intersection to place a stone; once
//! the game ends, click the board or press "New Game" to start over.

use gomoku::ui::{GomokuApp, BOARD_EXTENT};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), eframe::Error> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    info!("starting Gomoku");

    // Board plus panel padding and the status bar
    let width = BOARD_EXTENT + 20.0;
    let height = BOARD_EXTENT + 70.0;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([width, height])
            .with_min_inner_size([width, height])
            .with_title("Gomoku"),
        ..Default::default()
    };

    eframe::run_native(
        "Gomoku",
        options,
        Box::new(|cc| Ok(Box::new(GomokuApp::new(cc)))),
    )
}
