//! Stackchart Studio - Stacked Bar & Area Chart Editor
//!
//! Edit a small categorical dataset, view it as a stacked bar or area chart,
//! and export the chart and its legend as PNG images.

mod charts;
mod config;
mod data;
mod export;
mod gui;
mod logging;

use eframe::egui;
use gui::StackChartApp;

fn main() -> eframe::Result<()> {
    logging::init_logging();

    // Configure native options
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1400.0, 900.0])
            .with_min_inner_size([1000.0, 700.0])
            .with_title("Stackchart Studio"),
        ..Default::default()
    };

    eframe::run_native(
        "Stackchart Studio",
        options,
        Box::new(|cc| Ok(Box::new(StackChartApp::new(cc)))),
    )
}
