// src/store.rs
//
// Row materialization: header row + tokenized data rows → DataSet.
//
// - Column names and values are trimmed.
// - Duplicate header names share one column; the later cell wins.
// - Header cells that are empty after trimming are not addressable.
// - Strict policy drops rows whose field count differs from the header's,
//   lenient policy pads/truncates and drops rows with no values at all.

use std::error::Error;

use crate::csv::CsvRow;

/// Canonical table for one loaded source. Replaced wholesale on reload.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DataSet {
    /// Unique column names, first-appearance order.
    pub columns: Vec<String>,
    /// Values aligned with `columns`.
    pub rows: Vec<Vec<String>>,
}

/// Borrowed ordered key/value view of one row.
#[derive(Clone, Copy, Debug)]
pub struct RawRow<'a> {
    columns: &'a [String],
    values: &'a [String],
}

impl<'a> RawRow<'a> {
    pub fn get(&self, column: &str) -> Option<&'a str> {
        let ix = self.columns.iter().position(|c| c == column)?;
        self.values.get(ix).map(|v| v.as_str())
    }

    pub fn at(&self, ix: usize) -> Option<&'a str> {
        self.values.get(ix).map(|v| v.as_str())
    }

    /// First non-empty value among `aliases` (e.g. a misspelled fallback column).
    pub fn get_first(&self, aliases: &[&str]) -> Option<&'a str> {
        aliases.iter().filter_map(|a| self.get(a)).find(|v| !v.is_empty())
    }

    pub fn iter(self) -> impl Iterator<Item = (&'a str, &'a str)> + 'a {
        self.columns
            .iter()
            .zip(self.values.iter())
            .map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn values(self) -> impl Iterator<Item = &'a str> + 'a {
        self.values.iter().map(|v| v.as_str())
    }

    pub fn len(&self) -> usize { self.columns.len() }
    pub fn is_empty(&self) -> bool { self.columns.is_empty() }
}

impl DataSet {
    /// Build directly from already-shaped data (demo rows, tests).
    /// Rows are padded/truncated to the column count.
    pub fn from_rows(columns: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        let n = columns.len();
        let rows = rows
            .into_iter()
            .map(|mut r| {
                r.resize(n, s!());
                r
            })
            .collect();
        Self { columns, rows }
    }

    pub fn row(&self, ix: usize) -> Option<RawRow<'_>> {
        self.rows.get(ix).map(|values| RawRow { columns: &self.columns, values })
    }

    pub fn iter_rows(&self) -> impl Iterator<Item = RawRow<'_>> {
        self.rows.iter().map(|values| RawRow { columns: &self.columns, values })
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    pub fn row_count(&self) -> usize { self.rows.len() }
    pub fn header_count(&self) -> usize { self.columns.len() }
    pub fn is_empty(&self) -> bool { self.rows.is_empty() }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RowPolicy {
    /// Fixed schemas: field count must equal the header's.
    Strict,
    /// Variable schema: pad/truncate, drop all-empty rows.
    Lenient,
}

/// Why a row was left out.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RowDiagnostic {
    /// 1-based line the row started on
    pub line: usize,
    pub expected: usize,
    pub actual: usize,
}

impl std::fmt::Display for RowDiagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Row {} has {} fields but expected {}", self.line, self.actual, self.expected)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LoadReport {
    pub rows: usize,
    pub columns: usize,
    pub skipped: Vec<RowDiagnostic>,
    pub dropped_empty: usize,
    pub truncated: bool,
}

/// Zip the header (first row) with every data row.
/// Errors only when there is no header at all.
pub fn materialize(
    mut rows: Vec<CsvRow>,
    policy: RowPolicy,
    max_rows: Option<usize>,
) -> Result<(DataSet, LoadReport), Box<dyn Error>> {
    if rows.is_empty() {
        return Err("CSV has no header row".into());
    }
    let header = rows.remove(0).fields;
    let width = header.len();

    // header index → column slot
    let mut columns: Vec<String> = Vec::with_capacity(width);
    let mut slots: Vec<Option<usize>> = Vec::with_capacity(width);
    for name in &header {
        let name = name.trim();
        if name.is_empty() {
            slots.push(None);
            continue;
        }
        let slot = match columns.iter().position(|c| c == name) {
            Some(ix) => {
                logd!("Load: duplicate header {:?}, later cells win", name);
                ix
            }
            None => {
                columns.push(s!(name));
                columns.len() - 1
            }
        };
        slots.push(Some(slot));
    }

    let mut report = LoadReport { columns: columns.len(), ..LoadReport::default() };
    let mut out: Vec<Vec<String>> = Vec::with_capacity(rows.len());

    for row in rows {
        if policy == RowPolicy::Strict && row.fields.len() != width {
            let diag = RowDiagnostic { line: row.line, expected: width, actual: row.fields.len() };
            logw!("Load: {}", diag);
            report.skipped.push(diag);
            continue;
        }

        let mut values = vec![s!(); columns.len()];
        for (i, slot) in slots.iter().enumerate() {
            if let (Some(c), Some(v)) = (slot, row.fields.get(i)) {
                values[*c] = s!(v.trim());
            }
        }

        if policy == RowPolicy::Lenient && values.iter().all(|v| v.is_empty()) {
            report.dropped_empty += 1;
            continue;
        }

        if max_rows.is_some_and(|cap| out.len() >= cap) {
            report.truncated = true;
            break;
        }
        out.push(values);
    }

    if report.truncated {
        logw!("Load: row cap reached, kept first {} rows", out.len());
    }
    report.rows = out.len();
    Ok((DataSet { columns, rows: out }, report))
}
