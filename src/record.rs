// src/record.rs
//
// Record mapping: one DataSet row + role bindings → owned Record.
// Records are rebuilt on every load; `row` points back into the DataSet
// for the raw key/value view.

use crate::infer::{Bindings, SemanticRole};
use crate::store::{DataSet, RawRow};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Record {
    /// Index of the source row in the DataSet
    pub row: usize,
    values: [String; SemanticRole::COUNT],
}

impl Record {
    /// Resolve every bound role for one raw row. Unbound roles and
    /// missing cells read as empty.
    pub fn from_raw(row: usize, raw: RawRow<'_>, bindings: &Bindings) -> Self {
        let mut rec = Record { row, ..Record::default() };
        for (role, col) in bindings.bound() {
            if let Some(v) = raw.at(col) {
                rec.values[role.index()] = s!(v);
            }
        }
        rec
    }

    /// Build from explicit role values (demo rows, tests).
    pub fn with_values(row: usize, pairs: &[(SemanticRole, &str)]) -> Self {
        let mut rec = Record { row, ..Record::default() };
        for (role, v) in pairs {
            rec.values[role.index()] = s!(*v);
        }
        rec
    }

    #[inline]
    pub fn get(&self, role: SemanticRole) -> &str {
        &self.values[role.index()]
    }

    pub fn kind(&self) -> &str { self.get(SemanticRole::Type) }

    /// Product name, else "<strain> - Item" (when allowed), else "Item".
    pub fn display_name(&self, strain_fallback: bool) -> String {
        let name = self.get(SemanticRole::ProductName);
        if !name.is_empty() {
            return s!(name);
        }
        let strain = self.get(SemanticRole::Strain);
        if strain_fallback && !strain.is_empty() {
            return join!(strain, " - Item");
        }
        s!("Item")
    }

    /// Identifier, falling back to the batch value.
    pub fn identifier(&self) -> &str {
        let id = self.get(SemanticRole::Identifier);
        if id.is_empty() { self.get(SemanticRole::Batch) } else { id }
    }
}

/// Project every row of `ds` into a Record.
pub fn map_records(ds: &DataSet, bindings: &Bindings) -> Vec<Record> {
    ds.iter_rows()
        .enumerate()
        .map(|(i, raw)| Record::from_raw(i, raw, bindings))
        .collect()
}

/// Column indices no bound role claims, in header order.
pub fn extra_columns(ds: &DataSet, bindings: &Bindings) -> Vec<usize> {
    (0..ds.header_count()).filter(|c| !bindings.claims(*c)).collect()
}
