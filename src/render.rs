// src/render.rs
//
// Presentation-neutral card model. The GUI draws it with egui widgets,
// the CLI prints it as text. Values are already formatted here.

use std::fmt::Write as _;

use chrono::NaiveDate;

use crate::core::sanitize::{anchor_id, titleize};
use crate::data::Catalog;
use crate::infer::SemanticRole;
use crate::record::Record;
use crate::specs::{FieldSpec, SchemaSpec, Source};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Fact {
    pub label: String,
    pub value: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Tile {
    pub label: String,
    pub value: String,
    /// Value is a web link ("Open COA")
    pub link: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Card {
    /// `lot-<id>` scroll target, when the identifier survives sanitizing
    pub anchor: Option<String>,
    pub title: String,
    pub subtitle: String,
    pub chips: Vec<Fact>,
    pub facts: Vec<Fact>,
    pub potency: Vec<Fact>,
    pub tiles: Vec<Tile>,
    /// "View COA" target; None renders a disabled "No COA"
    pub document_url: Option<String>,
}

/// "Aug 18, 2025" for ISO / US dates; anything else unchanged.
pub fn format_date(raw: &str) -> String {
    let t = raw.trim();
    const FORMATS: [&str; 4] = ["%Y-%m-%d", "%m/%d/%Y", "%Y/%m/%d", "%m-%d-%Y"];
    // Timestamps: keep the date part.
    let date_part = t.split(['T', ' ']).next().unwrap_or(t);
    FORMATS
        .iter()
        .find_map(|f| NaiveDate::parse_from_str(date_part, f).ok())
        .map(|d| d.format("%b %-d, %Y").to_string())
        .unwrap_or_else(|| s!(raw))
}

fn is_blank(v: &str) -> bool {
    v.is_empty() || v == "-" || v == "None"
}

fn is_link(v: &str) -> bool {
    v.starts_with("http://") || v.starts_with("https://")
}

/// Resolve one field against a record and its raw row.
fn field_value(spec: &FieldSpec, rec: &Record, cat: &Catalog) -> String {
    let v = match spec.source {
        Source::Role(SemanticRole::Identifier) => s!(rec.identifier()),
        Source::Role(role) => s!(rec.get(role)),
        Source::Column(aliases) => cat
            .raw(rec)
            .and_then(|raw| raw.get_first(aliases))
            .map(String::from)
            .unwrap_or_default(),
    };
    if spec.date && !v.is_empty() { format_date(&v) } else { v }
}

fn facts(specs: &[FieldSpec], rec: &Record, cat: &Catalog) -> Vec<Fact> {
    specs
        .iter()
        .filter_map(|f| {
            let value = field_value(f, rec, cat);
            (!value.is_empty()).then(|| Fact { label: s!(f.label), value })
        })
        .collect()
}

pub fn build_card(cat: &Catalog, rec: &Record) -> Card {
    let spec: &dyn SchemaSpec = cat.spec();

    let potency = spec
        .potency()
        .iter()
        .filter_map(|f| {
            let raw = field_value(f, rec, cat);
            if raw.is_empty() { return None; }
            Some(Fact { label: s!(f.label), value: spec.format_potency(&raw, rec) })
        })
        .collect();

    let mut tiles: Vec<Tile> = spec
        .tiles()
        .iter()
        .map(|f| (f.label, field_value(f, rec, cat)))
        .filter(|(_, v)| !(spec.hide_blank_tiles() && is_blank(v)))
        .map(|(label, value)| Tile { label: s!(label), link: is_link(&value), value })
        .collect();

    if let Some(raw) = cat.raw(rec) {
        for col in cat.extra_columns() {
            let (Some(name), Some(value)) = (cat.dataset().columns.get(col), raw.at(col)) else {
                continue;
            };
            tiles.push(Tile {
                label: titleize(name),
                link: is_link(value),
                value: if value.is_empty() { s!("-") } else { s!(value) },
            });
        }
    }

    let doc = rec.get(SemanticRole::DocumentUrl);

    Card {
        anchor: anchor_id(rec.identifier()),
        title: rec.display_name(spec.strain_fallback()),
        subtitle: spec.subtitle(rec),
        chips: facts(spec.chips(), rec, cat),
        facts: facts(spec.facts(), rec, cat),
        potency,
        tiles,
        document_url: (!doc.is_empty()).then(|| s!(doc)),
    }
}

/// Plain-text card for the CLI.
pub fn card_text(card: &Card) -> String {
    let mut out = s!();
    let _ = writeln!(out, "{}", card.title);
    let _ = writeln!(out, "  {}", card.subtitle);
    for c in &card.chips {
        let _ = writeln!(out, "  [{}: {}]", c.label, c.value);
    }
    if !card.potency.is_empty() {
        let line = card
            .potency
            .iter()
            .map(|p| format!("{} {}", p.label, p.value))
            .collect::<Vec<_>>()
            .join(" | ");
        let _ = writeln!(out, "  {}", line);
    }
    for f in &card.facts {
        let _ = writeln!(out, "  {:<14} {}", f.label, f.value);
    }
    for t in &card.tiles {
        let _ = writeln!(out, "  {:<14} {}", t.label, t.value);
    }
    match &card.document_url {
        Some(url) => { let _ = writeln!(out, "  COA: {}", url); }
        None => { let _ = writeln!(out, "  No COA"); }
    }
    out
}
