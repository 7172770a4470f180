use std::collections::HashSet;

use querysheet::{verify, Catalog, Outcome, Section};

fn rendered(catalog: &Catalog, name: &str) -> String {
    catalog.get(name).unwrap().run().to_string()
}

#[test]
fn every_snippet_matches_its_annotation() {
    let catalog = Catalog::new();
    let summary = verify(catalog.snippets());

    let mismatches: Vec<String> = summary
        .failures()
        .map(|r| format!("{}: expected {}, got {}", r.name, r.expected, r.actual))
        .collect();
    assert!(mismatches.is_empty(), "mismatches:\n{}", mismatches.join("\n"));
    assert_eq!(summary.total, catalog.len());
}

#[test]
fn snippet_names_are_unique() {
    let catalog = Catalog::new();
    let mut seen = HashSet::new();
    for snippet in catalog.snippets() {
        assert!(seen.insert(snippet.name), "duplicate snippet {}", snippet.name);
    }
}

#[test]
fn every_section_is_demonstrated() {
    let catalog = Catalog::new();
    assert_eq!(catalog.sections(), Section::ALL);
    for section in Section::ALL {
        assert!(
            !catalog.section(section).is_empty(),
            "section {section} has no snippets"
        );
    }
}

#[test]
fn snippets_are_grouped_by_section() {
    let catalog = Catalog::new();
    let order: Vec<u32> = catalog
        .snippets()
        .iter()
        .map(|s| s.section as u32)
        .collect();
    assert!(order.windows(2).all(|w| w[0] <= w[1]));
}

#[test]
fn documented_results() {
    let catalog = Catalog::new();
    assert_eq!(rendered(&catalog, "any_numbers"), "true");
    assert_eq!(rendered(&catalog, "any_names"), "true");
    assert_eq!(rendered(&catalog, "any_in_empty"), "false");
    assert_eq!(rendered(&catalog, "any_even_numbers"), "false");
    assert_eq!(rendered(&catalog, "count_greater_than_three"), "5");
    assert_eq!(rendered(&catalog, "count_greater_than_four"), "4");
    assert_eq!(rendered(&catalog, "sum_numbers"), "15");
    assert_eq!(
        rendered(&catalog, "sum_that_overflows"),
        "error: arithmetic operation resulted in an overflow"
    );
}

#[test]
fn single_without_a_match_fails() {
    let catalog = Catalog::new();
    let outcome = catalog.get("single_greater_than_ten").unwrap().run();
    assert!(outcome.is_failure());
    assert_eq!(
        outcome,
        Outcome::Failure("sequence contains no matching element".to_string())
    );
}

#[test]
fn failure_annotations_are_failures() {
    let catalog = Catalog::new();
    let failures = catalog.failures();
    assert!(!failures.is_empty());
    for snippet in failures {
        assert!(snippet.run().is_failure(), "{} should fail", snippet.name);
    }
}

#[test]
fn unknown_snippet_is_an_error() {
    let catalog = Catalog::new();
    let err = catalog.get("no_such_snippet").unwrap_err();
    assert_eq!(err.to_string(), "no snippet named 'no_such_snippet'");
}
