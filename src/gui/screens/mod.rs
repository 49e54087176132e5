// src/gui/screens/mod.rs
pub mod guess;
pub mod loading;
pub mod menu;
pub mod review;

use eframe::egui;

use super::app::App;

pub const FAILURE_COLOR: egui::Color32 = egui::Color32::from_rgb(0xed, 0x21, 0x4a);
pub const SUCCESS_COLOR: egui::Color32 = egui::Color32::from_rgb(0x00, 0xd1, 0x76);

/// YES/NO overlay before abandoning the current screen.
pub fn confirm(ui: &mut egui::Ui, app: &mut App) {
    ui.vertical_centered(|ui| {
        ui.add_space(180.0);
        ui.label("Return to main menu?");
        ui.add_space(20.0);
        ui.horizontal(|ui| {
            ui.add_space(ui.available_width() / 2.0 - 80.0);
            if ui.button("YES").clicked() {
                app.return_to_menu();
            }
            ui.add_space(40.0);
            if ui.button("NO").clicked() {
                app.confirm_exit = false;
            }
        });
    });
}

/// Terminal "collection failed" state; back to the menu is the only way out.
pub fn failed(ui: &mut egui::Ui, app: &mut App) {
    ui.vertical_centered(|ui| {
        ui.add_space(180.0);
        ui.colored_label(FAILURE_COLOR, &app.failure);
        ui.add_space(20.0);
        if ui.button("BACK TO MENU").clicked() {
            app.return_to_menu();
        }
    });
}
