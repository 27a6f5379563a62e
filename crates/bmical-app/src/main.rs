//! Bmical desktop application using egui/eframe.
//!
//! This is the main entry point for the desktop BMI calculator.

use eframe::{
    NativeOptions,
    egui::{self, Vec2},
};

use crate::app::BmicalApp;

mod app;

fn main() -> eframe::Result<()> {
    const APP_ID: &str = "io.github.bmical";

    better_panic::install();
    env_logger::init();

    let options = NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_app_id(APP_ID)
            .with_resizable(true)
            .with_inner_size(Vec2::new(400.0, 360.0))
            .with_min_inner_size(Vec2::new(300.0, 280.0)),
        ..Default::default()
    };
    eframe::run_native(
        "Bmical",
        options,
        Box::new(|cc| Ok(Box::new(BmicalApp::new(cc)))),
    )
}
