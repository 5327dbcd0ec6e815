// src/config/saved.rs
//
// GUI preferences persisted as `key=value` lines in `.store/gui.cfg`.
// Unknown keys and bad values are ignored; a missing file means defaults.

use std::{fs, io, path::{Path, PathBuf}};

use super::consts::{GUI_CONFIG_FILE, STORE_DIR};
use super::state::{AppState, ViewMode};
use crate::csv::TokenizeMode;
use crate::filter::MatchStrategy;
use crate::specs::SchemaKind;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SavedPrefs {
    pub source: Option<String>,
    pub schema: Option<SchemaKind>,
    pub strategy: Option<MatchStrategy>,
    pub tokenize: Option<TokenizeMode>,
    pub view: Option<ViewMode>,
    pub window: Option<(u32, u32)>,
}

pub fn default_path() -> PathBuf {
    Path::new(STORE_DIR).join(GUI_CONFIG_FILE)
}

pub fn load(path: &Path) -> SavedPrefs {
    match fs::read_to_string(path) {
        Ok(text) => parse(&text),
        Err(_) => SavedPrefs::default(),
    }
}

pub fn parse(text: &str) -> SavedPrefs {
    let mut cfg = SavedPrefs::default();
    for line in text.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') { continue; }
        let Some((key, val)) = line.split_once('=') else { continue };
        let val = val.trim();
        match key.trim() {
            "source" if !val.is_empty() => cfg.source = Some(s!(val)),
            "schema" => cfg.schema = SchemaKind::parse(val),
            "match" => cfg.strategy = MatchStrategy::parse(val),
            "tokenize" => cfg.tokenize = TokenizeMode::parse(val),
            "view" => cfg.view = ViewMode::parse(val),
            "window" => {
                cfg.window = val.split_once('x').and_then(|(w, h)| {
                    Some((w.trim().parse::<u32>().ok()?, h.trim().parse::<u32>().ok()?))
                });
            }
            _ => {}
        }
    }
    cfg
}

pub fn render(cfg: &SavedPrefs) -> String {
    let mut s = s!();
    if let Some(v) = &cfg.source { s.push_str(&format!("source={}\n", v)); }
    if let Some(v) = cfg.schema { s.push_str(&format!("schema={}\n", v.as_str())); }
    if let Some(v) = cfg.strategy { s.push_str(&format!("match={}\n", v.as_str())); }
    if let Some(v) = cfg.tokenize { s.push_str(&format!("tokenize={}\n", v.as_str())); }
    if let Some(v) = cfg.view { s.push_str(&format!("view={}\n", v.as_str())); }
    if let Some((w, h)) = cfg.window { s.push_str(&format!("window={}x{}\n", w, h)); }
    s
}

pub fn save(path: &Path, cfg: &SavedPrefs) -> io::Result<()> {
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)?;
    }
    fs::write(path, render(cfg))
}

impl SavedPrefs {
    pub fn from_state(st: &AppState) -> Self {
        let load = &st.options.load;
        Self {
            source: Some(load.source.clone()).filter(|s| !s.is_empty()),
            schema: Some(load.schema),
            strategy: load.strategy,
            tokenize: Some(load.tokenize),
            view: Some(st.gui.view),
            window: Some((st.gui.window_w, st.gui.window_h)),
        }
    }

    /// Overlay saved values onto `st`; absent keys leave it untouched.
    pub fn apply(&self, st: &mut AppState) {
        let load = &mut st.options.load;
        if let Some(v) = &self.source { load.source = v.clone(); }
        if let Some(v) = self.schema { load.schema = v; }
        if self.strategy.is_some() { load.strategy = self.strategy; }
        if let Some(v) = self.tokenize { load.tokenize = v; }
        if let Some(v) = self.view { st.gui.view = v; }
        if let Some((w, h)) = self.window {
            st.gui.window_w = w;
            st.gui.window_h = h;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ignores_unknown_and_bad_values() {
        let cfg = parse("# prefs\nschema=legacy\nmatch=best\nfoo=bar\nwindow=900x700\nview=table\n");
        assert_eq!(cfg.schema, Some(SchemaKind::Legacy));
        assert_eq!(cfg.strategy, None);
        assert_eq!(cfg.window, Some((900, 700)));
        assert_eq!(cfg.view, Some(ViewMode::Table));
    }

    #[test]
    fn render_then_parse_keeps_values() {
        let cfg = SavedPrefs {
            source: Some(s!("http://example.com/lots.csv")),
            schema: Some(SchemaKind::Inferred),
            strategy: Some(MatchStrategy::Haystack),
            tokenize: Some(TokenizeMode::Lines),
            view: Some(ViewMode::Cards),
            window: Some((1200, 800)),
        };
        assert_eq!(parse(&render(&cfg)), cfg);
    }

    #[test]
    fn save_and_load_file() {
        let dir = std::env::temp_dir().join(format!("compliance_hub_cfg_{}", std::process::id()));
        let path = dir.join("gui.cfg");
        let cfg = SavedPrefs { schema: Some(SchemaKind::Lots), ..SavedPrefs::default() };
        save(&path, &cfg).unwrap();
        assert_eq!(load(&path), cfg);
        let _ = fs::remove_dir_all(dir);
    }
}
