// src/gui/components/card_list.rs
//
// One full-width card per kept record, built from `render::Card`.
// Purely a view; the only App write is clearing `scroll_to` once honoured.

use eframe::egui::{self, Color32, RichText};

use crate::gui::app::App;
use crate::render::{build_card, Card};

const THC: Color32 = Color32::from_rgb(0x43, 0x38, 0xCA);
const CBD: Color32 = Color32::from_rgb(0x04, 0x78, 0x57);
const TOTAL: Color32 = Color32::from_rgb(0x0E, 0x74, 0x90);
const ERROR: Color32 = Color32::from_rgb(0xDC, 0x35, 0x45);

/// Replaces the results area when the source could not be loaded.
pub fn error_panel(ui: &mut egui::Ui, msg: &str) {
    ui.add_space(40.0);
    ui.vertical_centered(|ui| {
        egui::Frame::group(ui.style()).show(ui, |ui| {
            ui.label(RichText::new("Error").heading().color(ERROR));
            ui.label(RichText::new(msg).color(ERROR));
        });
    });
}

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    if app.view.is_no_results(&app.catalog) {
        ui.add_space(24.0);
        ui.vertical_centered(|ui| {
            ui.label(app.view.no_results_line());
        });
        return;
    }

    let scroll_to = app.scroll_to.take();

    egui::ScrollArea::vertical()
        .id_salt("cards")
        .auto_shrink([false, false])
        .show(ui, |ui| {
            for (pos, rec) in app.view.records(&app.catalog).enumerate() {
                let card = build_card(&app.catalog, rec);
                let resp = card_frame(ui, &card, pos);
                if scroll_to == Some(pos) {
                    resp.scroll_to_me(Some(egui::Align::TOP));
                }
                ui.add_space(6.0);
            }
        });
}

fn card_frame(ui: &mut egui::Ui, card: &Card, pos: usize) -> egui::Response {
    let id = card.anchor.clone().unwrap_or_else(|| format!("row-{pos}"));
    egui::Frame::group(ui.style())
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.push_id(id, |ui| card_body(ui, card));
        })
        .response
}

fn card_body(ui: &mut egui::Ui, card: &Card) {
    ui.horizontal(|ui| {
        ui.vertical(|ui| {
            ui.label(RichText::new(&card.title).strong().size(18.0));
            ui.weak(&card.subtitle);
            ui.horizontal_wrapped(|ui| {
                for chip in &card.chips {
                    ui.label(RichText::new(format!("{}: {}", chip.label, chip.value)).small().monospace());
                }
            });
        });
        ui.with_layout(egui::Layout::right_to_left(egui::Align::TOP), |ui| {
            match &card.document_url {
                Some(url) => { ui.hyperlink_to("View COA", url); }
                None => { ui.add_enabled(false, egui::Button::new("No COA")); }
            }
        });
    });

    if !card.potency.is_empty() {
        ui.add_space(4.0);
        ui.horizontal_wrapped(|ui| {
            for (i, p) in card.potency.iter().enumerate() {
                let color = [THC, CBD, TOTAL][i.min(2)];
                egui::Frame::group(ui.style()).show(ui, |ui| {
                    ui.label(RichText::new(&p.label).color(color));
                    ui.label(RichText::new(&p.value).strong().color(color));
                });
            }
        });
    }

    if !card.facts.is_empty() {
        ui.add_space(4.0);
        ui.horizontal_wrapped(|ui| {
            for f in &card.facts {
                ui.weak(&f.label);
                ui.label(&f.value);
                ui.add_space(12.0);
            }
        });
    }

    if !card.tiles.is_empty() {
        ui.add_space(4.0);
        egui::Grid::new("tiles")
            .num_columns(2)
            .spacing([16.0, 4.0])
            .striped(true)
            .show(ui, |ui| {
                for (i, t) in card.tiles.iter().enumerate() {
                    ui.vertical(|ui| {
                        ui.weak(&t.label);
                        if t.link {
                            ui.hyperlink_to("Open COA", &t.value);
                        } else {
                            ui.add(egui::Label::new(&t.value).wrap());
                        }
                    });
                    if i % 2 == 1 {
                        ui.end_row();
                    }
                }
            });
    }
}
