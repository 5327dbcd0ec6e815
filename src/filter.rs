// src/filter.rs
//
// Search filter: type filter + normalized free-text term → kept record positions.
//
// Order is always the original record order. An empty (after normalizing)
// term keeps everything the type filter keeps; a term matching nothing yields
// an empty list, which callers present as "No results for …".

use crate::config::consts::TYPE_ALL;
use crate::core::normalize::{normalize, normalize_id};
use crate::infer::SemanticRole;
use crate::record::Record;
use crate::store::DataSet;

/// How the search term is matched against a record.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MatchStrategy {
    /// OR over identifier (separators ignored), product name, strain, manufacturer.
    FieldScoped,
    /// One normalized string of the mapped fields plus every raw value.
    Haystack,
}

impl MatchStrategy {
    pub fn as_str(self) -> &'static str {
        match self {
            MatchStrategy::FieldScoped => "fields",
            MatchStrategy::Haystack => "haystack",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "fields" | "field" | "field-scoped" => Some(MatchStrategy::FieldScoped),
            "haystack" | "all-fields" => Some(MatchStrategy::Haystack),
            _ => None,
        }
    }
}

/// `all` keeps every record; otherwise exact, un-normalized equality on `type`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum TypeFilter {
    #[default]
    All,
    Exact(String),
}

impl TypeFilter {
    pub fn parse(s: &str) -> Self {
        if s == TYPE_ALL { TypeFilter::All } else { TypeFilter::Exact(s!(s)) }
    }

    pub fn as_str(&self) -> &str {
        match self {
            TypeFilter::All => TYPE_ALL,
            TypeFilter::Exact(t) => t,
        }
    }

    #[inline]
    pub fn keeps(&self, rec: &Record) -> bool {
        match self {
            TypeFilter::All => true,
            TypeFilter::Exact(t) => rec.kind() == t,
        }
    }
}

/// One filter request.
#[derive(Clone, Debug)]
pub struct Query<'a> {
    pub search: &'a str,
    pub kind: &'a TypeFilter,
    pub strategy: MatchStrategy,
    /// Haystack display name uses the "<strain> - Item" fallback
    pub strain_fallback: bool,
}

/// Positions (into `records`) of the records the query keeps.
pub fn filter_indices(records: &[Record], ds: &DataSet, q: &Query<'_>) -> Vec<usize> {
    let term = normalize(q.search);
    let id_term = normalize_id(q.search);

    records
        .iter()
        .enumerate()
        .filter(|(_, rec)| q.kind.keeps(rec))
        .filter(|(_, rec)| {
            if term.is_empty() {
                return true;
            }
            match q.strategy {
                MatchStrategy::FieldScoped => field_match(rec, &term, &id_term),
                MatchStrategy::Haystack => {
                    haystack(rec, ds, q.strain_fallback).contains(term.as_str())
                }
            }
        })
        .map(|(i, _)| i)
        .collect()
}

fn field_match(rec: &Record, term: &str, id_term: &str) -> bool {
    let id = rec.get(SemanticRole::Identifier);
    if normalize_id(id).contains(id_term) {
        return true;
    }
    [SemanticRole::ProductName, SemanticRole::Strain, SemanticRole::Manufacturer]
        .iter()
        .any(|r| normalize(rec.get(*r)).contains(term))
}

/// Normalized search text for one record.
pub fn haystack(rec: &Record, ds: &DataSet, strain_fallback: bool) -> String {
    let mut parts: Vec<String> = vec![
        s!(rec.identifier()),
        rec.display_name(strain_fallback),
        s!(rec.get(SemanticRole::Strain)),
        s!(rec.get(SemanticRole::Batch)),
        s!(rec.get(SemanticRole::TestDate)),
        s!(rec.get(SemanticRole::Lab)),
    ];
    if let Some(raw) = ds.row(rec.row) {
        parts.extend(raw.values().map(String::from));
    }
    normalize(&parts.join(" "))
}
