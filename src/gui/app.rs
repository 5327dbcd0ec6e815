// src/gui/app.rs
use std::{error::Error, path::Path};

use eframe::egui;

use crate::{
    config::{
        consts::{APP_TITLE, DEFAULT_SOURCE, DEMO_ROWS},
        saved::{self, SavedPrefs},
        state::{AppState, ViewMode},
    },
    core::net,
    data::{Catalog, FilteredView, Origin},
    deeplink::{find_anchor, DeepLink},
    file,
    filter::{MatchStrategy, TypeFilter},
    gui::components::{card_list, data_table, search_bar, tabs, top_bar},
};

/// Defaults overlaid with `.store/gui.cfg`.
pub fn initial_state() -> AppState {
    let mut state = AppState::default();
    saved::load(&saved::default_path()).apply(&mut state);
    state.gui.source_input = state.options.load.source.clone();
    state
}

pub fn run(
    options: eframe::NativeOptions,
    state: AppState,
    link: Option<DeepLink>,
) -> Result<(), Box<dyn Error>> {
    eframe::run_native(
        APP_TITLE,
        options,
        Box::new(move |_cc| Ok(Box::new(App::new(state, link)))),
    )?;
    Ok(())
}

pub struct App {
    // single source of truth (UI thread only)
    pub state: AppState,

    // current snapshot + what the search shows of it
    pub catalog: Catalog,
    pub view: FilteredView,

    // `type` choices for the filter box, rebuilt per load
    pub types: Vec<String>,

    /// Startup load failed: the error panel replaces the results
    pub load_error: Option<String>,
    pub status: String,

    /// View position to scroll into view on the next frame
    pub scroll_to: Option<usize>,
}

impl App {
    pub fn new(state: AppState, link: Option<DeepLink>) -> Self {
        let mut app = Self {
            state,
            catalog: Catalog::demo(DEMO_ROWS),
            view: FilteredView::default(),
            types: Vec::new(),
            load_error: None,
            status: s!("Demo data"),
            scroll_to: None,
        };

        let src = app.state.options.load.source.clone();
        let missing_default =
            src == DEFAULT_SOURCE && !net::is_http(&src) && !Path::new(&src).exists();
        if missing_default {
            logf!("Init: {} not found, showing demo data", src);
        } else {
            match app.read_catalog() {
                Ok(cat) => app.set_catalog(cat),
                Err(e) => {
                    loge!("Init: load failed: {}", e);
                    app.load_error = Some(format!("Error loading product data: {}", e));
                    app.status = s!("Load failed");
                }
            }
        }

        app.refresh_types();
        app.refilter();
        if let Some(link) = link {
            app.apply_link(&link);
        }
        logf!("Init: {} records, origin={:?}", app.catalog.len(), app.catalog.origin());
        app
    }

    fn read_catalog(&self) -> Result<Catalog, Box<dyn Error>> {
        let load = &self.state.options.load;
        let text = file::read_source(&load.source)?;
        Catalog::load_text(&text, &load.source, load)
    }

    fn set_catalog(&mut self, cat: Catalog) {
        let r = cat.report();
        let mut status = format!(
            "CSV loaded: {} · Loaded at {}",
            plural!(r.rows, "row"),
            cat.loaded_at().format("%b %-d, %Y %H:%M")
        );
        if !r.skipped.is_empty() {
            status.push_str(&format!(" · {} skipped", plural!(r.skipped.len(), "malformed row")));
        }
        if r.truncated {
            status.push_str(" · row cap reached");
        }
        self.status = status;
        self.catalog = cat;
        self.load_error = None;
    }

    /// User-triggered (re)load of the source box. Failure falls back to demo rows.
    pub fn reload(&mut self) {
        let src = self.state.gui.source_input.trim().to_string();
        self.state.options.load.source = src;
        match self.read_catalog() {
            Ok(cat) => {
                self.set_catalog(cat);
                self.save_prefs();
            }
            Err(e) => {
                loge!("Load: {}", e);
                self.catalog = Catalog::demo(DEMO_ROWS);
                self.load_error = None;
                self.status = format!("Load failed ({}); showing demo data", e);
            }
        }
        self.refresh_types();
        self.refilter();
    }

    pub fn strategy(&self) -> MatchStrategy {
        self.state
            .options
            .load
            .strategy
            .unwrap_or_else(|| self.catalog.spec().default_strategy())
    }

    fn refresh_types(&mut self) {
        self.types = self.catalog.types().into_iter().map(String::from).collect();
        let keep = match &self.state.gui.type_filter {
            TypeFilter::All => true,
            TypeFilter::Exact(t) => self.types.contains(t),
        };
        if !keep {
            self.state.gui.type_filter = TypeFilter::All;
        }
    }

    /// Recompute the filtered view from scratch.
    pub fn refilter(&mut self) {
        let gui = &self.state.gui;
        self.view = self.catalog.filter(&gui.search, &gui.type_filter, self.strategy());
        logd!("Filter: {:?} → {} of {}", gui.search, self.view.len(), self.catalog.len());
    }

    pub fn clear_search(&mut self) {
        if !self.state.gui.search.is_empty() {
            self.state.gui.search.clear();
            self.refilter();
        }
    }

    /// Seed the search from `?q=` and scroll to `#anchor` (or the first hit).
    pub fn apply_link(&mut self, link: &DeepLink) {
        if let Some(q) = &link.search {
            self.state.gui.search = q.clone();
            self.refilter();
            if !self.view.is_empty() {
                self.scroll_to = Some(0);
            }
        }
        if let Some(frag) = &link.fragment {
            match find_anchor(&self.catalog, &self.view, frag) {
                Some(pos) => self.scroll_to = Some(pos),
                None => logw!("Deep link: no card for #{}", frag),
            }
        }
    }

    pub fn origin_label(&self) -> &'static str {
        match self.catalog.origin() {
            Origin::Csv => "CSV loaded",
            Origin::Demo => "Demo data",
        }
    }

    pub fn save_prefs(&self) {
        let path = saved::default_path();
        if let Err(e) = saved::save(&path, &SavedPrefs::from_state(&self.state)) {
            logw!("Prefs: could not write {}: {}", path.display(), e);
        }
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if ctx.input(|i| i.key_pressed(egui::Key::Escape)) {
            self.clear_search();
        }

        if let Some(rect) = ctx.input(|i| i.viewport().inner_rect) {
            self.state.gui.window_w = rect.width().round() as u32;
            self.state.gui.window_h = rect.height().round() as u32;
        }
        if ctx.input(|i| i.viewport().close_requested()) {
            self.save_prefs();
        }

        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            top_bar::draw(ui, self);
        });

        egui::TopBottomPanel::top("search_bar").show(ctx, |ui| {
            search_bar::draw(ui, self);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            if let Some(err) = &self.load_error {
                card_list::error_panel(ui, err);
                return;
            }
            tabs::draw(ui, self);
            ui.separator();
            match self.state.gui.view {
                ViewMode::Cards => card_list::draw(ui, self),
                ViewMode::Table => data_table::draw(ui, self),
            }
        });
    }
}
