//! Chart Coach - CSV Upload & Bad-vs-Good Chart Comparison Viewer
//!
//! A Rust application that loads a CSV file and shows, for each chart type,
//! a deliberately flawed rendering next to a corrected one.

mod charts;
mod data;
mod gui;
mod mode;

use eframe::egui;
use gui::ChartCoachApp;

fn main() -> eframe::Result<()> {
    // Configure native options
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1400.0, 800.0])
            .with_min_inner_size([1200.0, 700.0])
            .with_title("Chart Coach"),
        ..Default::default()
    };

    // Run the application
    eframe::run_native(
        "Chart Coach",
        options,
        Box::new(|cc| Ok(Box::new(ChartCoachApp::new(cc)))),
    )
}
