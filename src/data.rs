// src/data.rs
//
// Catalog and the view layer on top of it.
//
// - Catalog: one loaded snapshot (dataset, bindings, records, load report).
//            Built once per load and replaced wholesale; never mutated.
// - FilteredView: record positions kept by the current search + type filter,
//                 recomputed from scratch on every change.

use std::error::Error;

use chrono::{DateTime, Local};

use crate::config::options::LoadOptions;
use crate::csv::tokenize;
use crate::filter::{filter_indices, MatchStrategy, Query, TypeFilter};
use crate::infer::Bindings;
use crate::record::{extra_columns, map_records, Record};
use crate::specs::{missing_columns, SchemaKind, SchemaSpec};
use crate::store::{materialize, DataSet, LoadReport, RawRow};

/// Where the current rows came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Origin {
    Demo,
    Csv,
}

impl Origin {
    pub fn label(self) -> &'static str {
        match self { Origin::Demo => "demo", Origin::Csv => "from CSV" }
    }
}

#[derive(Clone, Debug)]
pub struct Catalog {
    kind: SchemaKind,
    origin: Origin,
    source: String,
    ds: DataSet,
    bindings: Bindings,
    records: Vec<Record>,
    report: LoadReport,
    loaded_at: DateTime<Local>,
}

impl Catalog {
    /// Tokenize, materialize, bind and map one CSV text.
    /// Empty text or a missing header is an error; bad rows are not.
    pub fn load_text(text: &str, source: &str, opts: &LoadOptions) -> Result<Self, Box<dyn Error>> {
        let text = text.strip_prefix('\u{feff}').unwrap_or(text);
        if text.trim().is_empty() {
            return Err(format!("No data in {}", source).into());
        }
        let spec = opts.schema.spec();
        let rows = tokenize(text, opts.tokenize);
        let (ds, report) = materialize(rows, spec.row_policy(), Some(opts.max_rows))?;

        let missing = missing_columns(spec.expected_columns(), &ds.columns);
        if !missing.is_empty() {
            logw!("Load: {} layout, missing columns: {}", spec.kind().as_str(), missing.join(", "));
        }

        let mut cat = Self::from_dataset(opts.schema, ds, Origin::Csv, source);
        logf!(
            "Load: {} rows, {} columns from {} ({} skipped, {} blank{})",
            report.rows,
            report.columns,
            source,
            report.skipped.len(),
            report.dropped_empty,
            if report.truncated { ", truncated" } else { "" }
        );
        cat.report = report;
        Ok(cat)
    }

    /// Wrap an already-shaped dataset (demo rows, tests).
    pub fn from_dataset(kind: SchemaKind, ds: DataSet, origin: Origin, source: &str) -> Self {
        let bindings = kind.spec().bind(&ds.columns);
        for (role, col) in bindings.bound() {
            logd!("Bind: {} → {:?}", role.key(), ds.columns.get(col));
        }
        let records = map_records(&ds, &bindings);
        let report = LoadReport {
            rows: ds.row_count(),
            columns: ds.header_count(),
            ..LoadReport::default()
        };
        Self {
            kind,
            origin,
            source: s!(source),
            ds,
            bindings,
            records,
            report,
            loaded_at: Local::now(),
        }
    }

    /// Generated sample rows shown before any CSV is loaded.
    pub fn demo(count: usize) -> Self {
        Self::from_dataset(SchemaKind::Inferred, crate::demo::sample_dataset(count), Origin::Demo, "demo")
    }

    pub fn kind(&self) -> SchemaKind { self.kind }
    pub fn spec(&self) -> &'static dyn SchemaSpec { self.kind.spec() }
    pub fn origin(&self) -> Origin { self.origin }
    pub fn source(&self) -> &str { &self.source }
    pub fn dataset(&self) -> &DataSet { &self.ds }
    pub fn bindings(&self) -> &Bindings { &self.bindings }
    pub fn records(&self) -> &[Record] { &self.records }
    pub fn report(&self) -> &LoadReport { &self.report }
    pub fn loaded_at(&self) -> DateTime<Local> { self.loaded_at }

    pub fn len(&self) -> usize { self.records.len() }
    pub fn is_empty(&self) -> bool { self.records.is_empty() }

    /// Raw key/value view behind a record.
    pub fn raw(&self, rec: &Record) -> Option<RawRow<'_>> {
        self.ds.row(rec.row)
    }

    /// Column indices shown as extra tiles (empty unless the layout wants them).
    pub fn extra_columns(&self) -> Vec<usize> {
        if self.spec().extra_tiles() {
            extra_columns(&self.ds, &self.bindings)
        } else {
            Vec::new()
        }
    }

    /// Distinct non-empty `type` values, first-appearance order.
    pub fn types(&self) -> Vec<&str> {
        let mut out: Vec<&str> = Vec::new();
        for r in &self.records {
            let t = r.kind();
            if !t.is_empty() && !out.contains(&t) {
                out.push(t);
            }
        }
        out
    }

    pub fn filter(&self, search: &str, kind: &TypeFilter, strategy: MatchStrategy) -> FilteredView {
        let q = Query {
            search,
            kind,
            strategy,
            strain_fallback: self.spec().strain_fallback(),
        };
        FilteredView {
            rec_ix: filter_indices(&self.records, &self.ds, &q),
            term: s!(search),
        }
    }
}

/// Positions into `Catalog::records()` kept by one search.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FilteredView {
    pub rec_ix: Vec<usize>,
    /// Search text as typed, for the "No results for …" line
    pub term: String,
}

impl FilteredView {
    pub fn len(&self) -> usize { self.rec_ix.len() }
    pub fn is_empty(&self) -> bool { self.rec_ix.is_empty() }

    /// Empty because nothing matched (as opposed to an empty catalog).
    pub fn is_no_results(&self, cat: &Catalog) -> bool {
        self.is_empty() && !cat.is_empty()
    }

    pub fn records<'a>(&'a self, cat: &'a Catalog) -> impl Iterator<Item = &'a Record> + 'a {
        self.rec_ix.iter().filter_map(move |&i| cat.records().get(i))
    }

    /// "N result(s) (from CSV|demo)"
    pub fn summary(&self, cat: &Catalog) -> String {
        format!("{} ({})", plural!(self.len(), "result"), cat.origin().label())
    }

    /// "No results for "<term>"."
    pub fn no_results_line(&self) -> String {
        format!("No results for \"{}\". Check the package label for your BioTrack number.", self.term)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_text_is_an_error() {
        assert!(Catalog::load_text("  \n", "x.csv", &LoadOptions::default()).is_err());
    }

    #[test]
    fn header_only_loads_empty() {
        let cat = Catalog::load_text("BioTrackID,Product\n", "x.csv", &LoadOptions::default()).unwrap();
        assert!(cat.is_empty());
        let v = cat.filter("", &TypeFilter::All, MatchStrategy::FieldScoped);
        assert!(!v.is_no_results(&cat));
    }

    #[test]
    fn summary_pluralizes() {
        let cat = Catalog::demo(1);
        let v = cat.filter("", &TypeFilter::All, MatchStrategy::Haystack);
        assert_eq!(v.summary(&cat), "1 result (demo)");
    }
}
