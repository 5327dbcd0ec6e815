// tests/fixed_schemas.rs
//
// The two fixed layouts, loaded from CSV text and rendered to cards.

use compliance_hub::config::options::LoadOptions;
use compliance_hub::data::Catalog;
use compliance_hub::filter::{MatchStrategy, TypeFilter};
use compliance_hub::infer::SemanticRole;
use compliance_hub::render::{build_card, Card};
use compliance_hub::specs::{legacy, SchemaKind};

const LOTS_CSV: &str = include_str!("../data/lots.csv");

fn opts(schema: SchemaKind) -> LoadOptions {
    LoadOptions { schema, ..LoadOptions::default() }
}

fn card_for(cat: &Catalog, id: &str) -> Card {
    let rec = cat
        .records()
        .iter()
        .find(|r| r.get(SemanticRole::Identifier) == id)
        .expect("record present");
    build_card(cat, rec)
}

fn value<'a>(facts: &'a [compliance_hub::render::Fact], label: &str) -> Option<&'a str> {
    facts.iter().find(|f| f.label == label).map(|f| f.value.as_str())
}

#[test]
fn lots_file_loads_every_row() {
    let cat = Catalog::load_text(LOTS_CSV, "data/lots.csv", &opts(SchemaKind::Lots)).expect("load");
    assert_eq!(cat.len(), 5);
    assert!(cat.report().skipped.is_empty());
    assert_eq!(cat.types(), vec!["Flower", "Pre-Roll", "Edible", "Vape", "Tincture"]);
    assert_eq!(cat.spec().default_strategy(), MatchStrategy::FieldScoped);
}

#[test]
fn lots_card_layout() {
    let cat = Catalog::load_text(LOTS_CSV, "data/lots.csv", &opts(SchemaKind::Lots)).expect("load");
    let card = card_for(&cat, "BT-000118");

    assert_eq!(card.anchor.as_deref(), Some("lot-bt-000118"));
    assert_eq!(card.title, "Blue Dream Flower 3.5g");
    assert_eq!(card.subtitle, "Blue Dream • Flower");
    assert_eq!(value(&card.chips, "BioTrack number"), Some("BT-000118"));
    assert_eq!(value(&card.facts, "Manufactured"), Some("Mar 2, 2025"));
    assert_eq!(value(&card.facts, "Packaged"), Some("Mar 9, 2025"));
    assert_eq!(value(&card.facts, "Lab"), Some("Verity Labs"));
    assert_eq!(value(&card.facts, "Manufacturer"), Some("Canvas Organics"));
    assert_eq!(value(&card.potency, "THC Total"), Some("21.4"));
    assert_eq!(
        card.document_url.as_deref(),
        Some("https://example.com/coa/BT-000118.pdf")
    );

    let labels: Vec<&str> = card.tiles.iter().map(|t| t.label.as_str()).collect();
    // "None" values are hidden.
    assert!(!labels.contains(&"Pesticides Used"));
    assert!(!labels.contains(&"Solvents Used"));
    let poison = card.tiles.iter().find(|t| t.label == "Poison Control").expect("alias read");
    assert_eq!(poison.value, "1-800-222-1222");
    let expiry = card.tiles.iter().find(|t| t.label == "Expiration Date").expect("expiry");
    assert_eq!(expiry.value, "Mar 9, 2026");
    let warning = card.tiles.iter().find(|t| t.label == "Warning 1").expect("warning");
    assert!(warning.value.contains('\n'));
}

#[test]
fn lots_card_omits_unbound_and_empty_fields() {
    let cat = Catalog::load_text(LOTS_CSV, "data/lots.csv", &opts(SchemaKind::Lots)).expect("load");

    let gummies = card_for(&cat, "BT-000120");
    assert_eq!(gummies.title, "Calm Gummies, 10ct");
    assert_eq!(value(&gummies.facts, "Manufactured"), Some("Mar 11, 2025"));
    assert_eq!(gummies.potency.len(), 2);
    assert_eq!(gummies.document_url, None);

    let tincture = card_for(&cat, "BT-000122");
    let labels: Vec<&str> = tincture.tiles.iter().map(|t| t.label.as_str()).collect();
    assert!(!labels.contains(&"Expiration Date"));
    assert!(!labels.contains(&"Warning 1"));
    assert!(labels.contains(&"Intended Use"));
}

#[test]
fn lots_search_by_manufacturer_and_strain() {
    let cat = Catalog::load_text(LOTS_CSV, "data/lots.csv", &opts(SchemaKind::Lots)).expect("load");
    let kitchen = cat.filter("canvas kitchen", &TypeFilter::All, MatchStrategy::FieldScoped);
    assert_eq!(kitchen.len(), 2);
    let gelato = cat.filter("GELATO", &TypeFilter::All, MatchStrategy::FieldScoped);
    assert_eq!(gelato.len(), 1);
    let id = cat.filter("bt 000121", &TypeFilter::All, MatchStrategy::FieldScoped);
    assert_eq!(id.rec_ix, gelato.rec_ix);
}

const LEGACY_CSV: &str = "\
BioTrack_ID,Product_Name,Strain,Product_Type,Net_Contents,Manufacturer,License_Number,THC,CBD,Total_Cannabinoids,Test_Date,Lab_Name,COA_URL
BT-1001,Sunset Haze 3.5g,Sunset Haze,Flower,3.5 g,Canvas Organics,LIC-0042,27.1,0.1,31.5,2024-11-02,Verity Labs,https://example.com/coa/1001.pdf
BT-1002,Mango Chili Gummies,,Gummy,10 x 10 mg,Canvas Kitchen,LIC-0043,10,0,10,11/05/2024,Verity Labs,
BT-1003,Broken row,Strain,Flower
";

#[test]
fn legacy_layout_formats_potency_by_type() {
    let cat = Catalog::load_text(LEGACY_CSV, "legacy.csv", &opts(SchemaKind::Legacy)).expect("load");
    assert_eq!(cat.len(), 2);
    assert_eq!(cat.report().skipped.len(), 1);
    assert_eq!(cat.report().skipped[0].line, 4);

    let flower = card_for(&cat, "BT-1001");
    assert_eq!(value(&flower.potency, "THC Total"), Some("27.1%"));
    assert_eq!(value(&flower.facts, "License"), Some("LIC-0042"));
    assert_eq!(value(&flower.facts, "Net Contents"), Some("3.5 g"));
    assert_eq!(value(&flower.facts, "Tested"), Some("Nov 2, 2024"));

    let gummy = card_for(&cat, "BT-1002");
    assert!(legacy::is_edible_like("Gummy"));
    assert_eq!(value(&gummy.potency, "THC Total"), Some("10 mg/serving"));
    assert_eq!(value(&gummy.potency, "CBD Total"), Some("0 mg/serving"));
    assert_eq!(gummy.subtitle, "- • Gummy");
    assert_eq!(gummy.document_url, None);
    assert!(gummy.tiles.is_empty());
}

#[test]
fn fixed_layouts_are_not_merged() {
    // A current-layout file read as legacy binds almost nothing.
    let cat = Catalog::load_text(LOTS_CSV, "data/lots.csv", &opts(SchemaKind::Legacy)).expect("load");
    assert!(!cat.bindings().is_bound(SemanticRole::Identifier));
    assert!(!cat.bindings().is_bound(SemanticRole::ProductName));
    assert!(cat.bindings().is_bound(SemanticRole::Strain));

    let card = build_card(&cat, &cat.records()[0]);
    assert_eq!(card.title, "Item");
    assert_eq!(card.anchor, None);
    assert!(card.chips.is_empty());
}
