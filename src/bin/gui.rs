// src/bin/gui.rs
#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]
use board_cards::{gui, loge};
use eframe::egui::ViewportBuilder;

fn main() {
    let options = eframe::NativeOptions {
        viewport: ViewportBuilder::default()
            .with_title("Board Cards")
            .with_inner_size([1100.0, 720.0])
            .with_min_inner_size([720.0, 420.0]),
        ..Default::default()
    };

    if let Err(e) = gui::run(options) {
        loge!("GUI failed: {}", e);
        eprintln!("GUI failed: {}", e);
        std::process::exit(1);
    }
}
