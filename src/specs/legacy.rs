// src/specs/legacy.rs
//! Older fixed layout ("V1").
//!
//! Header:
//! `BioTrack_ID, Product_Name, Strain, Product_Type, Net_Contents, Manufacturer,
//!  License_Number, THC, CBD, Total_Cannabinoids, Test_Date, Lab_Name, COA_URL`
//!
//! Potency columns hold bare numbers. They read as a percentage, or as
//! mg/serving for edible-like product types. Values that already carry a
//! unit are shown untouched.

use crate::core::normalize;
use crate::infer::{Bindings, SemanticRole};
use crate::record::Record;
use crate::specs::{bind_named, FieldSpec, SchemaKind, SchemaSpec};

pub const COLUMNS: &[&str] = &[
    "BioTrack_ID",
    "Product_Name",
    "Strain",
    "Product_Type",
    "Net_Contents",
    "Manufacturer",
    "License_Number",
    "THC",
    "CBD",
    "Total_Cannabinoids",
    "Test_Date",
    "Lab_Name",
    "COA_URL",
];

const ROLES: &[(SemanticRole, &[&str])] = &[
    (SemanticRole::Identifier, &["BioTrack_ID"]),
    (SemanticRole::ProductName, &["Product_Name"]),
    (SemanticRole::Strain, &["Strain"]),
    (SemanticRole::Type, &["Product_Type"]),
    (SemanticRole::Manufacturer, &["Manufacturer"]),
    (SemanticRole::ThcTotal, &["THC"]),
    (SemanticRole::CbdTotal, &["CBD"]),
    (SemanticRole::CannabinoidsTotal, &["Total_Cannabinoids"]),
    (SemanticRole::TestDate, &["Test_Date"]),
    (SemanticRole::Lab, &["Lab_Name"]),
    (SemanticRole::DocumentUrl, &["COA_URL"]),
];

/// Product types dosed per serving rather than by weight.
const EDIBLE_TYPES: &[&str] = &["edible", "gummy", "chocolate", "beverage", "tincture", "capsule"];

const CHIPS: &[FieldSpec] = &[FieldSpec::role("BioTrack number", SemanticRole::Identifier)];

const FACTS: &[FieldSpec] = &[
    FieldSpec::role("Manufacturer", SemanticRole::Manufacturer),
    FieldSpec::column("License", &["License_Number"]),
    FieldSpec::column("Net Contents", &["Net_Contents"]),
    FieldSpec::role("Tested", SemanticRole::TestDate).dated(),
    FieldSpec::role("Lab", SemanticRole::Lab),
];

pub struct Legacy;

pub fn is_edible_like(kind: &str) -> bool {
    let kind = normalize(kind);
    EDIBLE_TYPES.iter().any(|t| kind.contains(t))
}

fn has_unit(value: &str) -> bool {
    value.chars().any(|c| c == '%' || c.is_alphabetic())
}

impl SchemaSpec for Legacy {
    fn label(&self) -> &'static str { "Legacy (V1)" }
    fn kind(&self) -> SchemaKind { SchemaKind::Legacy }

    fn expected_columns(&self) -> &'static [&'static str] { COLUMNS }

    fn bind(&self, columns: &[String]) -> Bindings {
        bind_named(columns, ROLES)
    }

    fn chips(&self) -> &'static [FieldSpec] { CHIPS }
    fn facts(&self) -> &'static [FieldSpec] { FACTS }

    fn format_potency(&self, value: &str, rec: &Record) -> String {
        let value = value.trim();
        if value.is_empty() || has_unit(value) || value.parse::<f64>().is_err() {
            return s!(value);
        }
        if is_edible_like(rec.kind()) {
            format!("{value} mg/serving")
        } else {
            format!("{value}%")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rec(kind: &str) -> Record {
        Record::with_values(0, &[(SemanticRole::Type, kind)])
    }

    #[test]
    fn potency_units_follow_product_type() {
        assert_eq!(Legacy.format_potency("21.4", &rec("Flower")), "21.4%");
        assert_eq!(Legacy.format_potency("10", &rec("Gummy")), "10 mg/serving");
        assert_eq!(Legacy.format_potency("5", &rec("Infused Beverage")), "5 mg/serving");
    }

    #[test]
    fn values_with_units_pass_through() {
        assert_eq!(Legacy.format_potency("23%", &rec("Flower")), "23%");
        assert_eq!(Legacy.format_potency("10 mg", &rec("Edible")), "10 mg");
        assert_eq!(Legacy.format_potency("ND", &rec("Flower")), "ND");
        assert_eq!(Legacy.format_potency("", &rec("Flower")), "");
    }
}
