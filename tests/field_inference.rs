// tests/field_inference.rs
//
// Pattern-based column binding on vendor headers, and what the inferred
// layout renders from it.

use compliance_hub::config::options::LoadOptions;
use compliance_hub::data::Catalog;
use compliance_hub::filter::{MatchStrategy, TypeFilter};
use compliance_hub::infer::{infer_bindings, Bindings, PatternTable, SemanticRole};
use compliance_hub::render::build_card;
use compliance_hub::specs::SchemaKind;

const VENDOR: [&str; 11] = [
    "Tracking #",
    "Item Name",
    "Category",
    "Lot",
    "COA Date",
    "Laboratory",
    "THC",
    "CBD",
    "Cannabinoids",
    "Link",
    "Moisture",
];

fn bound<'a>(cols: &[&'a str], b: &Bindings, role: SemanticRole) -> Option<&'a str> {
    b.get(role).map(|i| cols[i])
}

#[test]
fn vendor_header_binds_by_intent() {
    let b = infer_bindings(&VENDOR);
    assert_eq!(bound(&VENDOR, &b, SemanticRole::Identifier), Some("Tracking #"));
    assert_eq!(bound(&VENDOR, &b, SemanticRole::ProductName), Some("Item Name"));
    assert_eq!(bound(&VENDOR, &b, SemanticRole::Type), Some("Category"));
    assert_eq!(bound(&VENDOR, &b, SemanticRole::Batch), Some("Lot"));
    assert_eq!(bound(&VENDOR, &b, SemanticRole::TestDate), Some("COA Date"));
    assert_eq!(bound(&VENDOR, &b, SemanticRole::Lab), Some("Laboratory"));
    assert_eq!(bound(&VENDOR, &b, SemanticRole::ThcTotal), Some("THC"));
    assert_eq!(bound(&VENDOR, &b, SemanticRole::CbdTotal), Some("CBD"));
    assert_eq!(bound(&VENDOR, &b, SemanticRole::CannabinoidsTotal), Some("Cannabinoids"));
    assert_eq!(bound(&VENDOR, &b, SemanticRole::Strain), None);
    assert_eq!(bound(&VENDOR, &b, SemanticRole::Manufacturer), None);
}

#[test]
fn earlier_column_wins_over_better_pattern() {
    // "COA Date" comes before "Link" and matches the `coa` document pattern.
    let b = infer_bindings(&VENDOR);
    assert_eq!(bound(&VENDOR, &b, SemanticRole::DocumentUrl), Some("COA Date"));
}

#[test]
fn identifier_spellings() {
    for header in ["BioTrackID", "Bio Track Number", "UID", "Package Tag", "barcode"] {
        let cols = [header, "Name"];
        let b = infer_bindings(&cols);
        assert_eq!(b.get(SemanticRole::Identifier), Some(0), "{header}");
    }
}

#[test]
fn custom_table_and_repeatability() {
    let table: &[(SemanticRole, &[&str])] = &[
        (SemanticRole::Identifier, &["^sku$"]),
        (SemanticRole::ProductName, &["title", "name"]),
    ];
    let t = PatternTable::new(table).expect("valid patterns");
    let cols = ["Name", "SKU", "Title"];
    let first = t.infer(&cols);
    assert_eq!(first.get(SemanticRole::Identifier), Some(1));
    // Column order, not pattern order: "Name" precedes "Title".
    assert_eq!(first.get(SemanticRole::ProductName), Some(0));
    assert!(!first.is_bound(SemanticRole::Strain));
    for _ in 0..10 {
        assert_eq!(t.infer(&cols), first);
    }
}

const VENDOR_CSV: &str = "\
Tracking #,Item Name,Category,Lot,COA Date,Laboratory,THC,CBD,Cannabinoids,Link,Moisture
TAG-77,Night Shade 1g,flower,L-9,2025-06-01,Verity Labs,24.0%,0.2%,27.9%,https://example.com/77.pdf,11%
TAG-78,,edible,L-10,2025-06-03,Verity Labs,10 mg,,,,
,,,,,,,,,,
TAG-79,Short Row
";

#[test]
fn inferred_catalog_is_lenient() {
    let opts = LoadOptions { schema: SchemaKind::Inferred, ..LoadOptions::default() };
    let cat = Catalog::load_text(VENDOR_CSV, "vendor.csv", &opts).expect("load");

    assert_eq!(cat.len(), 3);
    assert_eq!(cat.report().dropped_empty, 1);
    assert!(cat.report().skipped.is_empty());
    assert_eq!(cat.spec().default_strategy(), MatchStrategy::Haystack);

    // "Link" lost the document role to "COA Date"; both it and "Moisture" are extras.
    assert_eq!(cat.extra_columns(), vec![9, 10]);

    let card = build_card(&cat, &cat.records()[0]);
    assert_eq!(card.title, "Night Shade 1g");
    assert_eq!(card.subtitle, "-");
    assert_eq!(card.anchor.as_deref(), Some("lot-tag-77"));
    let moisture = card.tiles.iter().find(|t| t.label == "Moisture").expect("extra tile");
    assert_eq!(moisture.value, "11%");

    let short = build_card(&cat, &cat.records()[2]);
    assert_eq!(short.title, "Short Row");
    let moisture = short.tiles.iter().find(|t| t.label == "Moisture").expect("extra tile");
    assert_eq!(moisture.value, "-");
}

#[test]
fn inferred_haystack_search() {
    let opts = LoadOptions { schema: SchemaKind::Inferred, ..LoadOptions::default() };
    let cat = Catalog::load_text(VENDOR_CSV, "vendor.csv", &opts).expect("load");
    let strategy = opts.effective_strategy();

    assert_eq!(cat.filter("l-10", &TypeFilter::All, strategy).rec_ix, vec![1]);
    assert_eq!(cat.filter("11%", &TypeFilter::All, strategy).rec_ix, vec![0]);
    assert_eq!(cat.filter("verity", &TypeFilter::parse("edible"), strategy).rec_ix, vec![1]);
}
