// src/gui/screens/guess.rs
use eframe::egui::{self, load::SizedTexture, Vec2};

use super::FAILURE_COLOR;
use crate::gui::app::{App, Screen};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let (path, dw, dh, total) = {
        let works = app.session.works.lock().unwrap();
        let Some(w) = works.get(app.active) else {
            drop(works);
            app.return_to_menu();
            return;
        };
        (w.path.clone(), w.disp_width, w.disp_height, works.len())
    };

    ui.vertical_centered(|ui| {
        // only filled in when a guess fails validation
        if !app.guess_error.is_empty() {
            ui.colored_label(FAILURE_COLOR, &app.guess_error);
        }

        if let Some(tex) = app.texture_for(&ui.ctx().clone(), app.active, &path) {
            ui.image(SizedTexture::new(
                tex.id(),
                Vec2::new(dw as f32, dh as f32),
            ));
        }

        ui.add_space(15.0);
        let mut submitted = false;
        ui.horizontal(|ui| {
            ui.add_space(ui.available_width() / 2.0 - 120.0);
            ui.label("Enter your guess: $");
            let resp = ui.add(egui::TextEdit::singleline(&mut app.guess_text).desired_width(100.0));
            submitted = resp.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
        });

        ui.add_space(10.0);
        let last = app.active + 1 == total;
        ui.horizontal(|ui| {
            ui.add_space(ui.available_width() / 2.0 - 80.0);
            if ui.button(if last { "FINISH" } else { "NEXT" }).clicked() {
                submitted = true;
            }
            ui.add_space(40.0);
            if ui.button("EXIT").clicked() {
                app.confirm_exit = true;
            }
        });

        if submitted {
            log_guess(app, total);
        }
    });
}

/// Record the typed guess on the active work and advance.
fn log_guess(app: &mut App, total: usize) {
    let text = app.guess_text.trim().to_string();
    if text.is_empty() || !text.chars().all(|c| c.is_ascii_digit()) {
        app.guess_error = s!("Guess must be numeric characters [0-9] only");
        return;
    }
    let Ok(value) = text.parse::<u64>() else {
        app.guess_error = s!("That guess is too large");
        return;
    };

    {
        let mut works = app.session.works.lock().unwrap();
        if let Some(w) = works.get_mut(app.active) {
            w.guess = Some(value);
        }
    }

    app.guess_text.clear();
    app.guess_error.clear();
    app.active += 1;
    if app.active >= total {
        logf!("Game: all {total} guesses in, showing results");
        app.active = 0;
        app.screen = Screen::Review;
    }
}
