//! any, all, count, contains.

use querysheet_query::{CaseInsensitive, EqualityComparer, Fields, Query};

use crate::catalog::{Section, Snippet};
use crate::outcome::Outcome;
use crate::records::{names, people, products, Person, Product};

pub(super) fn snippets() -> Vec<Snippet> {
    vec![
        Snippet::new(Section::Any, "any_numbers", "true", any_numbers),
        Snippet::new(Section::Any, "any_even_numbers", "false", any_even_numbers),
        Snippet::new(Section::Any, "any_names", "true", any_names),
        Snippet::new(Section::Any, "any_names_starting_with_b", "true", any_names_starting_with_b),
        Snippet::new(Section::Any, "any_adult", "true", any_adult),
        Snippet::new(Section::Any, "any_in_empty", "false", any_in_empty),
        Snippet::new(Section::All, "all_positive", "true", all_positive),
        Snippet::new(Section::All, "all_even", "false", all_even),
        Snippet::new(Section::All, "all_adults", "true", all_adults),
        Snippet::new(Section::All, "all_in_empty", "true", all_in_empty),
        Snippet::new(Section::Count, "count_numbers", "5", count_numbers),
        Snippet::new(Section::Count, "count_greater_than_three", "5", count_greater_than_three),
        Snippet::new(Section::Count, "count_greater_than_four", "4", count_greater_than_four),
        Snippet::new(Section::Count, "count_expensive_products", "2", count_expensive_products),
        Snippet::new(Section::Count, "count_names_containing_a", "1", count_names_containing_a),
        Snippet::new(Section::Contains, "contains_three", "true", contains_three),
        Snippet::new(Section::Contains, "contains_dave", "false", contains_dave),
        Snippet::new(Section::Contains, "contains_alice_ignoring_case", "true", contains_alice_ignoring_case),
        Snippet::new(Section::Contains, "contains_product_named_mouse", "true", contains_product_named_mouse),
    ]
}

fn any_numbers() -> Outcome {
    let numbers = [1, 2, 3, 4, 5];
    numbers.iter().next().is_some().into()
}

fn any_even_numbers() -> Outcome {
    let numbers = [1, 3, 5, 7, 9];
    numbers.iter().any(|n| n % 2 == 0).into()
}

fn any_names() -> Outcome {
    names().iter().next().is_some().into()
}

fn any_names_starting_with_b() -> Outcome {
    let names = ["Bob", "Bella", "Ben"];
    names.iter().any(|name| name.starts_with('B')).into()
}

fn any_adult() -> Outcome {
    Query::new()
        .and_gte(Person::AGE, 18u32)
        .build()
        .any(&people(), Person::accessor)
        .into()
}

fn any_in_empty() -> Outcome {
    let numbers: Vec<i32> = Vec::new();
    numbers.iter().next().is_some().into()
}

fn all_positive() -> Outcome {
    [1, 2, 3, 4, 5].iter().all(|n| *n > 0).into()
}

fn all_even() -> Outcome {
    [2, 4, 6, 7].iter().all(|n| n % 2 == 0).into()
}

fn all_adults() -> Outcome {
    Query::new()
        .and_gte(Person::AGE, 18u32)
        .build()
        .all(&people(), Person::accessor)
        .into()
}

fn all_in_empty() -> Outcome {
    let numbers: [i32; 0] = [];
    numbers.iter().all(|n| *n > 100).into()
}

fn count_numbers() -> Outcome {
    [1, 2, 3, 4, 5].len().into()
}

fn count_greater_than_three() -> Outcome {
    [4, 5, 6, 7, 8].iter().filter(|n| **n > 3).count().into()
}

fn count_greater_than_four() -> Outcome {
    [4, 5, 6, 7, 8].iter().filter(|n| **n > 4).count().into()
}

fn count_expensive_products() -> Outcome {
    Query::new()
        .and_gt(Product::PRICE, 100.0f64)
        .build()
        .count(&products(), Product::accessor)
        .into()
}

fn count_names_containing_a() -> Outcome {
    names().iter().filter(|name| name.contains('a')).count().into()
}

fn contains_three() -> Outcome {
    [1, 2, 3, 4, 5].contains(&3).into()
}

fn contains_dave() -> Outcome {
    names().contains(&"Dave".to_string()).into()
}

fn contains_alice_ignoring_case() -> Outcome {
    names()
        .iter()
        .any(|name| CaseInsensitive.equals(name.as_str(), "alice"))
        .into()
}

fn contains_product_named_mouse() -> Outcome {
    Query::new()
        .and_eq(Product::NAME, "Mouse")
        .build()
        .any(&products(), Product::accessor)
        .into()
}
