// src/config/options.rs
use std::path::PathBuf;

use super::consts::*;
use crate::csv::TokenizeMode;
use crate::filter::MatchStrategy;
use crate::specs::SchemaKind;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppOptions {
    pub load: LoadOptions,
    pub export: ExportOptions,
}

impl Default for AppOptions {
    fn default() -> Self {
        Self {
            load: LoadOptions::default(),
            export: ExportOptions::default(),
        }
    }
}

/// How a source is read and interpreted.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LoadOptions {
    /// Local path or plain http:// URL
    pub source: String,
    pub schema: SchemaKind,
    /// None → the schema's default strategy
    pub strategy: Option<MatchStrategy>,
    pub tokenize: TokenizeMode,
    pub max_rows: usize,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            source: s!(DEFAULT_SOURCE),
            schema: SchemaKind::default(),
            strategy: None,
            tokenize: TokenizeMode::default(),
            max_rows: MAX_ROWS,
        }
    }
}

impl LoadOptions {
    pub fn effective_strategy(&self) -> MatchStrategy {
        self.strategy
            .unwrap_or_else(|| self.schema.spec().default_strategy())
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ExportFormat {
    /// Rendered cards, for reading
    #[default]
    Text,
    Csv,
    Tsv,
}

impl ExportFormat {
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" | "txt" => Some(ExportFormat::Text),
            "csv" => Some(ExportFormat::Csv),
            "tsv" => Some(ExportFormat::Tsv),
            _ => None,
        }
    }
    pub fn ext(&self) -> &'static str {
        match self { ExportFormat::Text => "txt", ExportFormat::Csv => "csv", ExportFormat::Tsv => "tsv" }
    }
    /// Field separator for tabular formats.
    pub fn delim(&self) -> Option<char> {
        match self {
            ExportFormat::Text => None,
            ExportFormat::Csv => Some(','),
            ExportFormat::Tsv => Some('\t'),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportOptions {
    pub format: ExportFormat,
    /// None → stdout
    pub out_path: Option<PathBuf>,
    pub include_headers: bool,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            format: ExportFormat::default(),
            out_path: None,
            include_headers: true,
        }
    }
}
