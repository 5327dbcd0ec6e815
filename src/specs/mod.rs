// src/specs/mod.rs
//! # Schema “specs” module
//!
//! Each spec describes **one CSV layout** and how its rows become cards.
//! A spec decides *which column is which* (fixed names or inference) and
//! *what a card shows* (facts, potency, detail tiles). It never touches I/O.
//!
//! ## What lives here
//! - **Bindings**: fixed column names → semantic roles (`lots`, `legacy`) or the
//!   regex inference table (`inferred`).
//! - **Row policy**: fixed layouts drop rows with the wrong field count;
//!   the inferred layout pads/truncates.
//! - **Card layout** as data (`FieldSpec` lists) so the GUI and the CLI render
//!   the same card.
//! - **Default match strategy** for the search box.
//!
//! ## What does **not** live here
//! - Reading the source (`file.rs`), tokenizing (`csv.rs`), or filtering (`filter.rs`).
//! - Drawing. `render.rs` turns a spec + record into a presentation-neutral `Card`.
//!
//! ## Typical call chain
//! ```text
//! file::read_source → csv::tokenize → store::materialize(spec.row_policy())
//!                   → spec.bind(columns) → record::map_records → filter → render
//! ```
//!
//! ## Current specs
//! - `lots` – current fixed layout (BioTrackID, Product, …, poison control).
//! - `legacy` – older fixed layout (BioTrack_ID, Product_Name, …, COA_URL).
//! - `inferred` – any layout; columns bound by pattern, leftovers shown as tiles.
//!
//! The two fixed layouts are never merged; configuration picks exactly one.

use crate::filter::MatchStrategy;
use crate::infer::{Bindings, SemanticRole};
use crate::record::Record;
use crate::store::RowPolicy;

pub mod inferred;
pub mod legacy;
pub mod lots;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum SchemaKind {
    #[default]
    Lots,
    Legacy,
    Inferred,
}

impl SchemaKind {
    pub const ALL: [SchemaKind; 3] = [SchemaKind::Lots, SchemaKind::Legacy, SchemaKind::Inferred];

    pub fn as_str(self) -> &'static str {
        match self {
            SchemaKind::Lots => "lots",
            SchemaKind::Legacy => "legacy",
            SchemaKind::Inferred => "inferred",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "lots" | "v2" => Some(SchemaKind::Lots),
            "legacy" | "v1" => Some(SchemaKind::Legacy),
            "inferred" | "auto" => Some(SchemaKind::Inferred),
            _ => None,
        }
    }

    pub fn spec(self) -> &'static dyn SchemaSpec {
        spec_for(self)
    }
}

/// Where a card field reads its value from.
#[derive(Clone, Copy, Debug)]
pub enum Source {
    /// Resolved role value on the Record
    Role(SemanticRole),
    /// Raw column by name; first non-empty alias wins
    Column(&'static [&'static str]),
}

/// One labelled value on a card.
#[derive(Clone, Copy, Debug)]
pub struct FieldSpec {
    pub label: &'static str,
    pub source: Source,
    /// Display as "Mon D, YYYY" when parseable
    pub date: bool,
}

impl FieldSpec {
    pub const fn role(label: &'static str, role: SemanticRole) -> Self {
        Self { label, source: Source::Role(role), date: false }
    }
    pub const fn column(label: &'static str, aliases: &'static [&'static str]) -> Self {
        Self { label, source: Source::Column(aliases), date: false }
    }
    pub const fn dated(self) -> Self {
        Self { date: true, ..self }
    }
}

/// Potency bubbles shared by every layout.
pub const POTENCY: &[FieldSpec] = &[
    FieldSpec::role("THC Total", SemanticRole::ThcTotal),
    FieldSpec::role("CBD Total", SemanticRole::CbdTotal),
    FieldSpec::role("Total Cannabinoids", SemanticRole::CannabinoidsTotal),
];

pub trait SchemaSpec: Send + Sync + 'static {
    fn label(&self) -> &'static str;
    fn kind(&self) -> SchemaKind;

    /// Header a well-formed file of this layout carries. Empty for `inferred`.
    fn expected_columns(&self) -> &'static [&'static str] { &[] }

    /// Role bindings for the loaded header.
    fn bind(&self, columns: &[String]) -> Bindings;

    fn row_policy(&self) -> RowPolicy { RowPolicy::Strict }

    fn default_strategy(&self) -> MatchStrategy { MatchStrategy::FieldScoped }

    /// Title falls back to "<strain> - Item" before "Item".
    fn strain_fallback(&self) -> bool { false }

    /// Line under the title: strain (or "-"), then " • type" when present.
    fn subtitle(&self, rec: &Record) -> String {
        let strain = rec.get(SemanticRole::Strain);
        let strain = if strain.is_empty() { "-" } else { strain };
        let kind = rec.kind();
        if kind.is_empty() { s!(strain) } else { format!("{strain} • {kind}") }
    }

    fn chips(&self) -> &'static [FieldSpec];
    fn facts(&self) -> &'static [FieldSpec];
    fn potency(&self) -> &'static [FieldSpec] { POTENCY }
    fn tiles(&self) -> &'static [FieldSpec] { &[] }

    /// Potency value as shown on the card.
    fn format_potency(&self, value: &str, _rec: &Record) -> String { s!(value) }

    /// Hide tiles whose value is empty, "-" or "None".
    fn hide_blank_tiles(&self) -> bool { true }

    /// Render every column no role claims as an extra tile.
    fn extra_tiles(&self) -> bool { false }
}

pub fn spec_for(kind: SchemaKind) -> &'static dyn SchemaSpec {
    static LOTS: lots::Lots = lots::Lots;
    static LEGACY: legacy::Legacy = legacy::Legacy;
    static INFERRED: inferred::Inferred = inferred::Inferred;
    match kind {
        SchemaKind::Lots => &LOTS,
        SchemaKind::Legacy => &LEGACY,
        SchemaKind::Inferred => &INFERRED,
    }
}

/// Bind fixed column names. Names are compared exactly (after the
/// materializer's trim); the first alias present wins.
pub(crate) fn bind_named(columns: &[String], table: &[(SemanticRole, &[&str])]) -> Bindings {
    let mut b = Bindings::default();
    for (role, names) in table {
        if let Some(ix) = names
            .iter()
            .find_map(|n| columns.iter().position(|c| c == n))
        {
            b.set(*role, ix);
        }
    }
    b
}

/// Names from `expected` missing in `columns`, in declared order.
pub fn missing_columns<'a>(expected: &[&'a str], columns: &[String]) -> Vec<&'a str> {
    expected
        .iter()
        .filter(|e| !columns.iter().any(|c| c == *e))
        .copied()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kinds_round_trip_names() {
        for k in SchemaKind::ALL {
            assert_eq!(SchemaKind::parse(k.as_str()), Some(k));
            assert_eq!(k.spec().kind(), k);
        }
        assert_eq!(SchemaKind::parse("V1"), Some(SchemaKind::Legacy));
        assert_eq!(SchemaKind::parse("csv"), None);
    }

    #[test]
    fn named_binding_takes_first_alias_present() {
        let cols = vec![s!("poison contorl"), s!("Tag")];
        let table: &[(SemanticRole, &[&str])] = &[(SemanticRole::Identifier, &["BioTrackID", "Tag"])];
        let b = bind_named(&cols, table);
        assert_eq!(b.get(SemanticRole::Identifier), Some(1));
    }
}
