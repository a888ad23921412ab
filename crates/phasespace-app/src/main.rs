//! Phase space - simple harmonic oscillators in physical and phase space

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use phasespace_app::{load_settings, PhaseSpaceApp};

fn main() -> eframe::Result<()> {
    // Log to stdout; RUST_LOG=debug shows oscillator and parameter events
    env_logger::init();

    let settings = load_settings();

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1400.0, 900.0])
            .with_min_inner_size([800.0, 600.0])
            .with_title("Phase Space"),
        ..Default::default()
    };

    eframe::run_native(
        "Phase Space",
        native_options,
        Box::new(move |cc| Ok(Box::new(PhaseSpaceApp::new(cc, settings)?))),
    )
}
