// src/specs/lots.rs
//! Current fixed layout ("V2").
//!
//! Header:
//! `BioTrackID, Product, Strain, Type, TotalTHC, TotalCBD, TotalCannabinoids, PdfUrl,
//!  manufactured by, Manufacture date, package date, expiration date, Testing lab,
//!  Grown by, Pesticides used, solvents used, intended use, warning 1, warning 2,
//!  poison control`
//!
//! Older exports misspell the last column as `poison contorl`; both are read.

use crate::infer::{Bindings, SemanticRole};
use crate::specs::{bind_named, FieldSpec, SchemaKind, SchemaSpec};

pub const COLUMNS: &[&str] = &[
    "BioTrackID",
    "Product",
    "Strain",
    "Type",
    "TotalTHC",
    "TotalCBD",
    "TotalCannabinoids",
    "PdfUrl",
    "manufactured by",
    "Manufacture date",
    "package date",
    "expiration date",
    "Testing lab",
    "Grown by",
    "Pesticides used",
    "solvents used",
    "intended use",
    "warning 1",
    "warning 2",
    "poison control",
];

const ROLES: &[(SemanticRole, &[&str])] = &[
    (SemanticRole::Identifier, &["BioTrackID"]),
    (SemanticRole::ProductName, &["Product"]),
    (SemanticRole::Strain, &["Strain"]),
    (SemanticRole::Type, &["Type"]),
    (SemanticRole::ThcTotal, &["TotalTHC"]),
    (SemanticRole::CbdTotal, &["TotalCBD"]),
    (SemanticRole::CannabinoidsTotal, &["TotalCannabinoids"]),
    (SemanticRole::DocumentUrl, &["PdfUrl"]),
    (SemanticRole::Manufacturer, &["manufactured by"]),
    (SemanticRole::Lab, &["Testing lab"]),
];

const CHIPS: &[FieldSpec] = &[FieldSpec::role("BioTrack number", SemanticRole::Identifier)];

const FACTS: &[FieldSpec] = &[
    FieldSpec::column("Manufactured", &["Manufacture date"]).dated(),
    FieldSpec::column("Packaged", &["package date"]).dated(),
    FieldSpec::role("Lab", SemanticRole::Lab),
    FieldSpec::role("Manufacturer", SemanticRole::Manufacturer),
];

const TILES: &[FieldSpec] = &[
    FieldSpec::role("Type", SemanticRole::Type),
    FieldSpec::column("Expiration Date", &["expiration date"]).dated(),
    FieldSpec::column("Grown By", &["Grown by"]),
    FieldSpec::column("Pesticides Used", &["Pesticides used"]),
    FieldSpec::column("Solvents Used", &["solvents used"]),
    FieldSpec::column("Intended Use", &["intended use"]),
    FieldSpec::column("Warning 1", &["warning 1"]),
    FieldSpec::column("Warning 2", &["warning 2"]),
    FieldSpec::column("Poison Control", &["poison control", "poison contorl"]),
];

pub struct Lots;

impl SchemaSpec for Lots {
    fn label(&self) -> &'static str { "Lots (current)" }
    fn kind(&self) -> SchemaKind { SchemaKind::Lots }

    fn expected_columns(&self) -> &'static [&'static str] { COLUMNS }

    fn bind(&self, columns: &[String]) -> Bindings {
        bind_named(columns, ROLES)
    }

    fn chips(&self) -> &'static [FieldSpec] { CHIPS }
    fn facts(&self) -> &'static [FieldSpec] { FACTS }
    fn tiles(&self) -> &'static [FieldSpec] { TILES }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn binds_every_role_it_declares() {
        let cols: Vec<String> = COLUMNS.iter().map(|c| s!(*c)).collect();
        let b = Lots.bind(&cols);
        for (role, _) in ROLES {
            assert!(b.is_bound(*role), "{} unbound", role.key());
        }
        assert!(!b.is_bound(SemanticRole::Batch));
        assert_eq!(b.get(SemanticRole::DocumentUrl), Some(7));
    }
}
