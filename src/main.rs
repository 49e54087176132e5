// src/main.rs
#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]
use eframe::egui::{Vec2, ViewportBuilder};

use gavel::config::consts::{WINDOW_H, WINDOW_W};
use gavel::gui;

fn main() {
    let options = eframe::NativeOptions {
        viewport: ViewportBuilder::default()
            .with_inner_size(Vec2::new(WINDOW_W, WINDOW_H))
            .with_min_inner_size(Vec2::new(WINDOW_W, WINDOW_H)),
        ..Default::default()
    };

    if let Err(e) = gui::run(options) {
        eprintln!("GUI failed: {}", e);
        std::process::exit(1);
    }
}
