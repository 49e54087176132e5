// src/gui/screens/review.rs
use eframe::egui::{self, load::SizedTexture, RichText, Vec2};

use super::{FAILURE_COLOR, SUCCESS_COLOR};
use crate::gui::app::{App, Screen};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let (art, path, rw, rh, lower, upper, guess, keep, right, total) = {
        let works = app.session.works.lock().unwrap();
        let Some(w) = works.get(app.active) else {
            drop(works);
            app.return_to_menu();
            return;
        };
        (
            w.art.clone(),
            w.path.clone(),
            w.review_width,
            w.review_height,
            w.lower_bound,
            w.upper_bound,
            w.guess,
            w.keep,
            w.guessed_right(),
            works.len(),
        )
    };

    let active = app.active;
    ui.columns(2, |cols| {
        if let Some(tex) = app.texture_for(&cols[0].ctx().clone(), active, &path) {
            cols[0].image(SizedTexture::new(
                tex.id(),
                Vec2::new(rw as f32, rh as f32),
            ));
        }

        let ui = &mut cols[1];
        ui.add_space(20.0);

        let (artist, title) = split_title(&art.title);
        if !artist.is_empty() {
            ui.label(format!("Artist: {artist}"));
            ui.add_space(10.0);
        }
        ui.label(format!("Title: {title}"));
        ui.add_space(10.0);

        let (low, high) = art.prices;
        let price = if low == high {
            format!("${low}")
        } else {
            format!("${low} - ${high}")
        };
        ui.label(format!("Actual price: {price}"));
        ui.add_space(10.0);
        ui.label(format!("Valid Guesses: ${lower} \u{2264} N \u{2264} ${upper}"));
        ui.add_space(10.0);

        ui.label("You guessed");
        let guess_text = match guess {
            Some(g) => format!("${g}"),
            None => s!("nothing"),
        };
        let color = if right { SUCCESS_COLOR } else { FAILURE_COLOR };
        ui.label(RichText::new(guess_text).color(color).size(28.0).strong());
        ui.add_space(10.0);

        let mut keep_flag = keep;
        ui.checkbox(&mut keep_flag, "Keep on device?");
        if keep_flag != keep {
            let mut works = app.session.works.lock().unwrap();
            if let Some(w) = works.get_mut(active) {
                w.keep = keep_flag;
            }
        }

        ui.add_space(20.0);
        let last = active + 1 == total;
        ui.horizontal(|ui| {
            if ui.button(if last { "FINISH" } else { "NEXT" }).clicked() {
                if last {
                    app.return_to_menu();
                } else {
                    app.active += 1;
                }
            }
            ui.add_space(20.0);
            if ui.button("EXIT").clicked() {
                app.confirm_exit = true;
            }
        });
    });
}

/// `"Artist - Work (2001)"` → artist and the rest; no separator
/// means the whole thing is the title.
fn split_title(title: &str) -> (String, String) {
    match title.split_once(" - ") {
        Some((artist, rest)) => (artist.trim().to_string(), rest.trim().to_string()),
        None => (s!(), title.trim().to_string()),
    }
}
