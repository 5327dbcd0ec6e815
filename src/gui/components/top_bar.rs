// src/gui/components/top_bar.rs
//
// Brand header + source controls (path/URL, layout, match strategy, tokenizer).
// Layout or tokenizer changes reload the source; a strategy change only refilters.

use eframe::egui::{self, RichText};

use crate::config::consts::{APP_TITLE, BRAND};
use crate::csv::TokenizeMode;
use crate::filter::MatchStrategy;
use crate::gui::app::App;
use crate::specs::SchemaKind;

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.add_space(4.0);
    ui.horizontal(|ui| {
        ui.vertical(|ui| {
            ui.label(RichText::new(BRAND).strong().size(16.0));
            ui.weak(join!(APP_TITLE, " - Browser"));
        });
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.label(RichText::new(app.origin_label()).small());
        });
    });

    let mut reload = false;
    let mut refilter = false;

    ui.horizontal_wrapped(|ui| {
        ui.label("Source:");
        let resp = ui.add(
            egui::TextEdit::singleline(&mut app.state.gui.source_input)
                .hint_text("data/lots.csv or http://…")
                .desired_width(280.0),
        );
        if resp.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
            reload = true;
        }
        if ui.button("Load").clicked() {
            reload = true;
        }

        ui.separator();

        let load = &mut app.state.options.load;
        let prev_schema = load.schema;
        egui::ComboBox::from_id_salt("schema")
            .selected_text(load.schema.spec().label())
            .show_ui(ui, |ui| {
                for k in SchemaKind::ALL {
                    ui.selectable_value(&mut load.schema, k, k.spec().label());
                }
            });
        if load.schema != prev_schema {
            logf!("UI: Schema {} → {}", prev_schema.as_str(), load.schema.as_str());
            reload = true;
        }

        let prev_strategy = load.strategy;
        let auto = format!("Auto ({})", load.schema.spec().default_strategy().as_str());
        let shown = load.strategy.map(|s| s!(s.as_str())).unwrap_or_else(|| auto.clone());
        egui::ComboBox::from_id_salt("match")
            .selected_text(join!("Match: ", &shown))
            .show_ui(ui, |ui| {
                ui.selectable_value(&mut load.strategy, None, auto);
                ui.selectable_value(&mut load.strategy, Some(MatchStrategy::FieldScoped), "fields");
                ui.selectable_value(&mut load.strategy, Some(MatchStrategy::Haystack), "haystack");
            });
        if load.strategy != prev_strategy {
            logf!("UI: Match strategy → {:?}", load.strategy);
            refilter = true;
        }

        let mut split = load.tokenize == TokenizeMode::Lines;
        if ui
            .checkbox(&mut split, "Split lines")
            .on_hover_text("Parse each physical line on its own (no multi-line fields)")
            .changed()
        {
            load.tokenize = if split { TokenizeMode::Lines } else { TokenizeMode::Records };
            reload = true;
        }
    });

    ui.horizontal(|ui| {
        ui.small(&app.status);
    });
    ui.add_space(2.0);

    if reload {
        app.reload();
    } else if refilter {
        app.refilter();
        app.save_prefs();
    }
}
