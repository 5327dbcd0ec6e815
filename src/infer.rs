// src/infer.rs
//! Field inference: guess which CSV column plays which semantic role.
//!
//! Vendor exports name the same thing many ways ("BioTrackID", "Tracking #",
//! "UID", "Tag"), so roles are bound by intent rather than by literal name.
//! Each role owns an ordered list of case-insensitive patterns. For every role,
//! columns are visited in header order and each column is tested against the
//! role's patterns in order; the first `(column, pattern)` hit wins.
//!
//! This is first-match, not best-match. A "Test Notes" column may well be
//! bound as a test date; the value shape is never checked.

use std::error::Error;
use std::sync::OnceLock;

use regex::{Regex, RegexBuilder};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SemanticRole {
    Identifier,
    ProductName,
    Strain,
    Type,
    Batch,
    TestDate,
    Lab,
    ThcTotal,
    CbdTotal,
    CannabinoidsTotal,
    DocumentUrl,
    /// Fixed schemas only; the inference table has no patterns for it.
    Manufacturer,
}

impl SemanticRole {
    pub const COUNT: usize = 12;

    pub const ALL: [SemanticRole; Self::COUNT] = [
        SemanticRole::Identifier,
        SemanticRole::ProductName,
        SemanticRole::Strain,
        SemanticRole::Type,
        SemanticRole::Batch,
        SemanticRole::TestDate,
        SemanticRole::Lab,
        SemanticRole::ThcTotal,
        SemanticRole::CbdTotal,
        SemanticRole::CannabinoidsTotal,
        SemanticRole::DocumentUrl,
        SemanticRole::Manufacturer,
    ];

    #[inline]
    pub fn index(self) -> usize { self as usize }

    pub fn key(self) -> &'static str {
        match self {
            SemanticRole::Identifier => "identifier",
            SemanticRole::ProductName => "productName",
            SemanticRole::Strain => "strain",
            SemanticRole::Type => "type",
            SemanticRole::Batch => "batch",
            SemanticRole::TestDate => "testDate",
            SemanticRole::Lab => "lab",
            SemanticRole::ThcTotal => "thcTotal",
            SemanticRole::CbdTotal => "cbdTotal",
            SemanticRole::CannabinoidsTotal => "cannabinoidsTotal",
            SemanticRole::DocumentUrl => "documentUrl",
            SemanticRole::Manufacturer => "manufacturer",
        }
    }
}

/// Default pattern lists, in priority order.
pub const DEFAULT_PATTERNS: &[(SemanticRole, &[&str])] = &[
    (SemanticRole::Identifier, &["biotrack", r"bio\s*track", "tracking", "uid", "barcode", "tag"]),
    (SemanticRole::ProductName, &["product.*name", "item.*name", "name"]),
    (SemanticRole::Strain, &["strain"]),
    (SemanticRole::Type, &["type", "category", "class"]),
    (SemanticRole::Batch, &["batch", "lot"]),
    (
        SemanticRole::TestDate,
        &["test.*date", "coa.*date", "date.*tested", "manufacture date", "package date", "date$"],
    ),
    (SemanticRole::Lab, &["lab", "laboratory", "testing lab"]),
    (SemanticRole::ThcTotal, &["thc.*total", "total.*thc", "thc$"]),
    (SemanticRole::CbdTotal, &["cbd.*total", "total.*cbd", "cbd$"]),
    (SemanticRole::CannabinoidsTotal, &["total.*cannabinoids", "cannabinoids.*total", "cannabinoids$"]),
    (SemanticRole::DocumentUrl, &["pdf", "coa", "url", "link"]),
];

/// Compiled, ordered patterns per role.
#[derive(Clone, Debug)]
pub struct PatternTable {
    roles: Vec<(SemanticRole, Vec<Regex>)>,
}

impl PatternTable {
    /// Compile a table; every pattern is case-insensitive.
    pub fn new(spec: &[(SemanticRole, &[&str])]) -> Result<Self, Box<dyn Error>> {
        let mut roles = Vec::with_capacity(spec.len());
        for (role, patterns) in spec {
            let mut compiled = Vec::with_capacity(patterns.len());
            for p in patterns.iter() {
                let re = RegexBuilder::new(p)
                    .case_insensitive(true)
                    .build()
                    .map_err(|e| format!("Bad pattern for {}: {}", role.key(), e))?;
                compiled.push(re);
            }
            roles.push((*role, compiled));
        }
        Ok(Self { roles })
    }

    pub fn patterns(&self, role: SemanticRole) -> Option<&[Regex]> {
        self.roles
            .iter()
            .find(|(r, _)| *r == role)
            .map(|(_, p)| p.as_slice())
    }

    /// First column (header order) matching any of the role's patterns.
    pub fn infer_column<S: AsRef<str>>(&self, role: SemanticRole, columns: &[S]) -> Option<usize> {
        let patterns = self.patterns(role)?;
        columns
            .iter()
            .position(|c| patterns.iter().any(|re| re.is_match(c.as_ref())))
    }

    /// Bind every role independently.
    pub fn infer<S: AsRef<str>>(&self, columns: &[S]) -> Bindings {
        let mut b = Bindings::default();
        for (role, _) in &self.roles {
            if let Some(ix) = self.infer_column(*role, columns) {
                b.set(*role, ix);
            }
        }
        b
    }
}

/// Shared default table, compiled once.
pub fn default_table() -> &'static PatternTable {
    static TABLE: OnceLock<PatternTable> = OnceLock::new();
    TABLE.get_or_init(|| match PatternTable::new(DEFAULT_PATTERNS) {
        Ok(t) => t,
        // Built-in patterns are literals; a failure here is a programming error.
        Err(e) => panic!("default inference patterns must compile: {e}"),
    })
}

/// Role → column index, at most one column per role.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Bindings {
    slots: [Option<usize>; SemanticRole::COUNT],
}

impl Bindings {
    pub fn get(&self, role: SemanticRole) -> Option<usize> {
        self.slots[role.index()]
    }

    pub fn set(&mut self, role: SemanticRole, column: usize) {
        self.slots[role.index()] = Some(column);
    }

    pub fn is_bound(&self, role: SemanticRole) -> bool {
        self.get(role).is_some()
    }

    /// Column indices claimed by any bound role.
    pub fn claimed(&self) -> impl Iterator<Item = usize> + '_ {
        self.slots.iter().flatten().copied()
    }

    pub fn claims(&self, column: usize) -> bool {
        self.claimed().any(|c| c == column)
    }

    pub fn bound(&self) -> impl Iterator<Item = (SemanticRole, usize)> + '_ {
        SemanticRole::ALL
            .iter()
            .filter_map(move |r| self.get(*r).map(|c| (*r, c)))
    }
}

/// Infer with the default table.
pub fn infer_bindings<S: AsRef<str>>(columns: &[S]) -> Bindings {
    default_table().infer(columns)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn col<'a>(cols: &'a [&'a str], b: &Bindings, role: SemanticRole) -> Option<&'a str> {
        b.get(role).map(|i| cols[i])
    }

    #[test]
    fn vendor_identifier_names() {
        for name in ["BioTrackID", "Bio Track #", "Tracking #", "UID", "Barcode", "Tag"] {
            let cols = ["Product", name];
            let b = infer_bindings(&cols);
            assert_eq!(col(&cols, &b, SemanticRole::Identifier), Some(name));
        }
    }

    #[test]
    fn column_order_beats_pattern_order() {
        // "date$" is the last test-date pattern, but its column comes first.
        let cols = ["Harvest date", "Test Date"];
        let b = infer_bindings(&cols);
        assert_eq!(col(&cols, &b, SemanticRole::TestDate), Some("Harvest date"));
    }

    #[test]
    fn manufacturer_is_never_inferred() {
        let cols = ["Manufacturer", "manufactured by"];
        let b = infer_bindings(&cols);
        assert!(!b.is_bound(SemanticRole::Manufacturer));
    }

    #[test]
    fn bad_pattern_is_an_error() {
        assert!(PatternTable::new(&[(SemanticRole::Strain, &["(unclosed"])]).is_err());
    }
}
