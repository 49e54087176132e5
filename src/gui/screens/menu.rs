// src/gui/screens/menu.rs
use eframe::egui::{self, ComboBox, Slider};

use crate::config::consts::{MAX_WORKS, MIN_WORKS};
use crate::config::options::{Difficulty, SourceKind};
use crate::gui::app::App;
use crate::scrape;

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    // late cleanup from a cancelled or finished session
    if app.session.settled() && app.session.collected() > 0 {
        app.session.discard_works();
    }

    ui.vertical_centered(|ui| {
        ui.add_space(40.0);
        ui.heading("Gavel");
        ui.label("Configure the game to your liking below and click Start");
        ui.add_space(20.0);

        let opts = &mut app.state.options;

        ui.horizontal(|ui| {
            ui.add_space(ui.available_width() / 2.0 - 160.0);
            ui.label("Institution:");
            let before = opts.source;
            for src in [SourceKind::Artsy, SourceKind::Sothebys] {
                ui.radio_value(&mut opts.source, src, src.label());
            }
            if opts.source != before {
                opts.filter_index = 0;
            }
        });

        let labels = scrape::filter_labels(opts.source);
        ui.horizontal(|ui| {
            ui.add_space(ui.available_width() / 2.0 - 160.0);
            ui.label(opts.source.filter_label());
            ComboBox::from_id_salt("filter")
                .selected_text(labels[opts.filter_index.min(labels.len() - 1)])
                .show_ui(ui, |ui| {
                    for (i, label) in labels.iter().enumerate() {
                        ui.selectable_value(&mut opts.filter_index, i, *label);
                    }
                });
        });

        ui.horizontal(|ui| {
            ui.add_space(ui.available_width() / 2.0 - 160.0);
            ui.label("Number of works to retrieve:");
            ui.add(Slider::new(&mut opts.limit, MIN_WORKS..=MAX_WORKS));
        });

        ui.horizontal(|ui| {
            ui.add_space(ui.available_width() / 2.0 - 160.0);
            ui.label("Difficulty Level:");
            for d in Difficulty::ALL {
                ui.radio_value(&mut opts.difficulty, d, d.label());
            }
        });
        ui.label(opts.difficulty.description());
        ui.add_space(20.0);

        if ui.button("START").clicked() {
            app.start_collecting(&ui.ctx().clone());
        }
    });
}
