// src/gui/components/data_table.rs
//
// Raw table of the kept rows (every column, header order).
// Purely a view over Catalog + FilteredView.

use eframe::egui::{self, Align, Layout, RichText, TextWrapMode};
use egui_extras::{Column, TableBuilder};

use crate::gui::app::App;

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    if app.view.is_no_results(&app.catalog) {
        ui.add_space(24.0);
        ui.vertical_centered(|ui| {
            ui.label(app.view.no_results_line());
        });
        return;
    }

    let ds = app.catalog.dataset();
    let cols = ds.header_count();
    let bindings = app.catalog.bindings();

    {
        let s = &mut ui.style_mut().spacing.scroll;
        s.floating = false;           // reserve space instead of overlaying content
        s.bar_width = 10.0;
    }

    let avail_h = ui.available_height();
    egui::ScrollArea::horizontal()
        .id_salt("table_hscroll")
        .max_height(avail_h)
        .show(ui, |ui| {
            let mut table = TableBuilder::new(ui)
                .striped(true)
                .min_scrolled_height(0.0)
                .id_salt(("table_state", app.catalog.kind().as_str(), cols));
            for ci in 0..cols {
                // Bound columns a bit wider; they carry the interesting values.
                let w = if bindings.claims(ci) { 160.0 } else { 110.0 };
                table = table.column(Column::initial(w).resizable(true).clip(true).at_least(30.0));
            }

            table
                .header(24.0, |mut header| {
                    for name in &ds.columns {
                        header.col(|ui| {
                            ui.style_mut().wrap_mode = Some(TextWrapMode::Extend);
                            ui.add(egui::Label::new(RichText::new(name).strong()).selectable(false));
                        });
                    }
                })
                .body(|body| {
                    body.rows(20.0, app.view.len(), |mut row| {
                        let Some(rec) = app.view.rec_ix.get(row.index()).and_then(|&i| app.catalog.records().get(i)) else {
                            return;
                        };
                        let Some(data) = ds.rows.get(rec.row) else { return };
                        for cell in data {
                            row.col(|ui| {
                                ui.style_mut().wrap_mode = Some(TextWrapMode::Extend);
                                ui.with_layout(Layout::left_to_right(Align::Center), |ui| {
                                    ui.label(cell);
                                });
                            });
                        }
                    });
                });
        });
}
