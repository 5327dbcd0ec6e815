// tests/search_filter.rs
//
// Search + type filter over the four mock lots, under both match strategies.

use compliance_hub::data::{Catalog, Origin};
use compliance_hub::demo::mock_dataset;
use compliance_hub::filter::{MatchStrategy, TypeFilter};
use compliance_hub::infer::SemanticRole;
use compliance_hub::specs::SchemaKind;

const STRATEGIES: [MatchStrategy; 2] = [MatchStrategy::FieldScoped, MatchStrategy::Haystack];

fn mock() -> Catalog {
    Catalog::from_dataset(SchemaKind::Inferred, mock_dataset(), Origin::Demo, "mock")
}

fn ids(cat: &Catalog, search: &str, kind: &str, strategy: MatchStrategy) -> Vec<String> {
    cat.filter(search, &TypeFilter::parse(kind), strategy)
        .records(cat)
        .map(|r| r.get(SemanticRole::Identifier).to_string())
        .collect()
}

#[test]
fn sample_set_expectations() {
    let cat = mock();
    for st in STRATEGIES {
        assert_eq!(ids(&cat, "", "all", st).len(), 4, "{st:?}");
        assert_eq!(ids(&cat, "TR-ABCD-0004", "all", st), vec!["TR-ABCD-0004"], "{st:?}");
        assert_eq!(ids(&cat, "PINE", "concentrate", st), vec!["TR-ABCD-0002"], "{st:?}");
        assert!(ids(&cat, "not-a-real-batch", "all", st).is_empty(), "{st:?}");

        let sunset = cat.filter("sunset", &TypeFilter::All, st);
        let names: Vec<&str> = sunset
            .records(&cat)
            .map(|r| r.get(SemanticRole::ProductName))
            .collect();
        assert_eq!(names.len(), 1, "{st:?}");
        assert!(names[0].contains("Sunset"));

        let flower = cat.filter("", &TypeFilter::parse("flower"), st);
        assert_eq!(flower.len(), 2, "{st:?}");
        assert!(flower.records(&cat).all(|r| r.kind() == "flower"));
    }
}

#[test]
fn identifier_match_ignores_separators() {
    let cat = mock();
    for term in ["tr abcd0004", "TR\u{2013}ABCD\u{2013}0004", "trabcd 0004"] {
        assert_eq!(
            ids(&cat, term, "all", MatchStrategy::FieldScoped),
            vec!["TR-ABCD-0004"],
            "{term:?}"
        );
    }
    // The haystack keeps separators, but dashes are still folded.
    assert_eq!(
        ids(&cat, "TR\u{2013}ABCD\u{2013}0004", "all", MatchStrategy::Haystack),
        vec!["TR-ABCD-0004"]
    );
}

#[test]
fn results_keep_dataset_order() {
    let cat = mock();
    for st in STRATEGIES {
        let view = cat.filter("tr-abcd", &TypeFilter::All, st);
        assert_eq!(view.rec_ix, vec![0, 1, 2, 3], "{st:?}");
    }
}

#[test]
fn empty_term_keeps_the_type_filtered_set() {
    let cat = mock();
    for kind in ["flower", "concentrate", "edible", "Flower"] {
        for st in STRATEGIES {
            let all = cat.filter("", &TypeFilter::parse(kind), st);
            let blank = cat.filter("   ", &TypeFilter::parse(kind), st);
            assert_eq!(all.rec_ix, blank.rec_ix, "{kind} {st:?}");
            let expected = cat.records().iter().filter(|r| r.kind() == kind).count();
            assert_eq!(blank.len(), expected);
        }
    }
}

#[test]
fn no_results_condition() {
    let cat = mock();
    let view = cat.filter("zzz", &TypeFilter::All, MatchStrategy::FieldScoped);
    assert!(view.is_no_results(&cat));
    assert_eq!(
        view.no_results_line(),
        "No results for \"zzz\". Check the package label for your BioTrack number."
    );
    assert_eq!(view.summary(&cat), "0 results (demo)");

    let one = cat.filter("pine", &TypeFilter::All, MatchStrategy::FieldScoped);
    assert!(!one.is_no_results(&cat));
    assert_eq!(one.summary(&cat), "1 result (demo)");
}

#[test]
fn haystack_reaches_unbound_columns() {
    let cat = mock();
    // Field-scoped search skips the lab.
    assert_eq!(ids(&cat, "mocklab", "all", MatchStrategy::Haystack).len(), 4);
    assert!(ids(&cat, "mocklab", "all", MatchStrategy::FieldScoped).is_empty());
    // Batch codes too.
    assert_eq!(
        ids(&cat, "e2409", "all", MatchStrategy::Haystack),
        vec!["TR-ABCD-0003"]
    );
}

#[test]
fn inference_is_deterministic() {
    let cat = mock();
    for _ in 0..5 {
        assert_eq!(mock().bindings(), cat.bindings());
    }
}
