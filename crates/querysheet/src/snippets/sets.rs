//! distinct, except, concat, append, prepend, insert.

use querysheet_query::{set, CaseInsensitive};

use super::name_list;
use crate::catalog::{Section, Snippet};
use crate::outcome::Outcome;
use crate::records::{employees, names, people, products, Named};

pub(super) fn snippets() -> Vec<Snippet> {
    vec![
        Snippet::new(Section::Distinct, "distinct_numbers", "[1, 2, 3]", distinct_numbers),
        Snippet::new(Section::Distinct, "distinct_names_ignoring_case", "[Alice, Bob]", distinct_names_ignoring_case),
        Snippet::new(Section::Distinct, "distinct_employees_by_salary", "[Alice, Bob, Charlie]", distinct_employees_by_salary),
        Snippet::new(Section::Except, "except_numbers", "[1, 3, 5]", except_numbers),
        Snippet::new(Section::Except, "except_removes_duplicates", "[1, 2]", except_removes_duplicates),
        Snippet::new(Section::Except, "except_people_by_name", "[Alice, Charlie]", except_people_by_name),
        Snippet::new(Section::Except, "except_names_ignoring_case", "[Alice, Charlie]", except_names_ignoring_case),
        Snippet::new(Section::Concat, "concat_numbers", "[1, 2, 3, 4, 5]", concat_numbers),
        Snippet::new(Section::Concat, "concat_keeps_duplicates", "[1, 2, 2, 3]", concat_keeps_duplicates),
        Snippet::new(Section::Concat, "append_number", "[1, 2, 3, 4]", append_number),
        Snippet::new(Section::Concat, "prepend_number", "[0, 1, 2, 3]", prepend_number),
        Snippet::new(Section::Concat, "insert_name", "[Alice, Zoe, Bob, Charlie]", insert_name),
        Snippet::new(
            Section::Concat,
            "insert_out_of_range",
            "error: index 10 is out of range for a sequence of length 3",
            insert_out_of_range,
        ),
        Snippet::new(
            Section::Concat,
            "chain_names_and_products",
            "[Alice, Bob, Charlie, Laptop, Mouse, Keyboard, Monitor]",
            chain_names_and_products,
        ),
    ]
}

fn distinct_numbers() -> Outcome {
    set::distinct(&[1, 2, 2, 3, 3, 3]).into()
}

fn distinct_names_ignoring_case() -> Outcome {
    let names = ["Alice", "alice", "Bob", "BOB"].map(String::from);
    set::distinct_with(&names, &CaseInsensitive).into()
}

fn distinct_employees_by_salary() -> Outcome {
    name_list(&set::distinct_by(&employees(), |e| e.salary))
}

fn except_numbers() -> Outcome {
    set::except(&[1, 2, 3, 4, 5], &[2, 4]).into()
}

/// The result is a set: the repeated 1 appears once.
fn except_removes_duplicates() -> Outcome {
    set::except(&[1, 1, 2, 3], &[3]).into()
}

fn except_people_by_name() -> Outcome {
    let removed = ["Bob".to_string()];
    name_list(&set::except_by(&people(), &removed, |p| p.name.clone()))
}

fn except_names_ignoring_case() -> Outcome {
    let removed = vec!["BOB".to_string()];
    set::except_with(&names(), &removed, &CaseInsensitive).into()
}

fn concat_numbers() -> Outcome {
    set::concat(&[1, 2, 3], &[4, 5]).into()
}

fn concat_keeps_duplicates() -> Outcome {
    set::concat(&[1, 2], &[2, 3]).into()
}

fn append_number() -> Outcome {
    set::append(&[1, 2, 3], 4).into()
}

fn prepend_number() -> Outcome {
    set::prepend(&[1, 2, 3], 0).into()
}

fn insert_name() -> Outcome {
    set::insert_at(&names(), 1, "Zoe".to_string()).into()
}

fn insert_out_of_range() -> Outcome {
    set::insert_at(&names(), 10, "Zoe".to_string()).into()
}

fn chain_names_and_products() -> Outcome {
    let products = products();
    names()
        .into_iter()
        .chain(products.iter().map(|p| p.name().to_string()))
        .collect::<Vec<_>>()
        .into()
}
