// src/gui/components/tabs.rs
//
// Cards / Table switch. Both views read the same FilteredView, so switching
// never refilters.

use eframe::egui;

use crate::config::state::ViewMode;
use crate::gui::app::App;

const TABS: [(ViewMode, &str); 2] = [(ViewMode::Cards, "Cards"), (ViewMode::Table, "Table")];

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.horizontal_wrapped(|ui| {
        ui.spacing_mut().item_spacing.x = 8.0;

        let cur = app.state.gui.view;
        for (mode, title) in TABS {
            let selected = mode == cur;
            if ui.selectable_label(selected, title).clicked() && !selected {
                logf!("UI: View {} → {}", cur.as_str(), mode.as_str());
                app.state.gui.view = mode;
                app.save_prefs();
            }
        }
    });
}
