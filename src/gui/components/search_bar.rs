// src/gui/components/search_bar.rs
//
// Sticky search: BioTrack/product box, Clear, type filter, result count.
// Every edit refilters synchronously.

use eframe::egui::{self, RichText};

use crate::config::consts::TYPE_ALL;
use crate::filter::TypeFilter;
use crate::gui::app::App;

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.add_space(4.0);
    ui.label(RichText::new("search biotrack number").heading().strong());
    ui.weak("or scroll down to find your product");

    let mut changed = false;

    ui.horizontal(|ui| {
        let resp = ui.add(
            egui::TextEdit::singleline(&mut app.state.gui.search)
                .hint_text("e.g., TR-1234 or \"Chili\"")
                .desired_width((ui.available_width() - 220.0).max(160.0)),
        );
        if resp.changed() {
            changed = true;
        }

        if ui.button("Clear").clicked() {
            app.state.gui.search.clear();
            changed = true;
            resp.request_focus();
        }

        let current = s!(app.state.gui.type_filter.as_str());
        let mut picked = current.clone();
        egui::ComboBox::from_id_salt("type_filter")
            .selected_text(join!("Type: ", &current))
            .show_ui(ui, |ui| {
                ui.selectable_value(&mut picked, s!(TYPE_ALL), TYPE_ALL);
                for t in &app.types {
                    ui.selectable_value(&mut picked, t.clone(), t.as_str());
                }
            });
        if picked != current {
            logf!("UI: Type filter → {}", picked);
            app.state.gui.type_filter = TypeFilter::parse(&picked);
            changed = true;
        }
    });

    if changed {
        app.refilter();
    }

    ui.small(app.view.summary(&app.catalog));
    ui.add_space(4.0);
}
