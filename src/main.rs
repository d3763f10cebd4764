//! Spendview - Expense Tracker & Pie Chart Viewer
//!
//! A Rust application for entering labeled expense rows and plotting them
//! as a pie chart.

mod charts;
mod data;
mod gui;

use eframe::egui;
use gui::SpendviewApp;
use log::info;

fn main() -> eframe::Result<()> {
    // RUST_LOG controls verbosity
    env_logger::init();
    info!("starting spendview");

    // Configure native options
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([800.0, 600.0])
            .with_min_inner_size([640.0, 480.0])
            .with_title("Spendview"),
        ..Default::default()
    };

    // Run the application
    eframe::run_native(
        "Spendview",
        options,
        Box::new(|cc| Ok(Box::new(SpendviewApp::new(cc)))),
    )
}
