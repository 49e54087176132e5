// src/gui/screens/loading.rs
use std::time::Duration;

use eframe::egui;

use crate::gui::app::{App, Screen};
use crate::session::Phase;

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    match app.session.poll() {
        Phase::Idle | Phase::Collecting => {
            let limit = app.state.options.limit.max(1);
            let done = app.session.collected();

            ui.vertical_centered(|ui| {
                ui.add_space(150.0);
                ui.label(app.status.lock().unwrap().clone());
                ui.add_space(10.0);
                ui.add(
                    egui::ProgressBar::new(done as f32 / limit as f32)
                        .desired_width(540.0),
                );
                ui.add_space(25.0);
                if ui.button("GO BACK").clicked() {
                    app.confirm_exit = true;
                }
            });

            // keep polling even when no worker event fires
            ui.ctx().request_repaint_after(Duration::from_millis(200));
        }
        Phase::Complete => {
            if app.session.collected() == 0 {
                // exhausted before anything was collected
                app.failure = s!("No works could be collected for this filter");
                app.screen = Screen::Failed;
            } else {
                logf!("Session: {} work(s) ready", app.session.collected());
                app.active = 0;
                app.screen = Screen::Guess;
            }
        }
        Phase::Failed(e) => {
            app.failure = format!("Collection failed: {e}");
            app.screen = Screen::Failed;
        }
    }
}
