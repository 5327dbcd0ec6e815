// src/config/state.rs
use super::options::AppOptions;
use crate::filter::TypeFilter;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ViewMode {
    #[default]
    Cards,
    Table,
}

impl ViewMode {
    pub fn as_str(self) -> &'static str {
        match self { ViewMode::Cards => "cards", ViewMode::Table => "table" }
    }
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "cards" => Some(ViewMode::Cards),
            "table" => Some(ViewMode::Table),
            _ => None,
        }
    }
}

#[derive(Clone, Debug)]
pub struct GuiState {
    /// Live search box text (un-normalized)
    pub search: String,
    pub type_filter: TypeFilter,
    pub view: ViewMode,

    pub window_w: u32,
    pub window_h: u32,

    /// Source box text; loaded on Enter / Load
    pub source_input: String,
}

impl Default for GuiState {
    fn default() -> Self {
        Self {
            search: s!(),
            type_filter: TypeFilter::All,
            view: ViewMode::default(),
            window_w: 1100,
            window_h: 800,
            source_input: s!(),
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct AppState {
    pub options: AppOptions,
    pub gui: GuiState,
}
