//! element at, first, last, single.
//!
//! These are the primitives with documented failure conditions; several
//! snippets exist only to show the failure.

use querysheet_query::{element, Fields, Query};

use crate::catalog::{Section, Snippet};
use crate::outcome::Outcome;
use crate::records::{numbers, people, Person};

const NO_ELEMENTS: &str = "error: sequence contains no elements";
const NO_MATCH: &str = "error: sequence contains no matching element";
const MANY_ELEMENTS: &str = "error: sequence contains more than one element";
const MANY_MATCHES: &str = "error: sequence contains more than one matching element";

pub(super) fn snippets() -> Vec<Snippet> {
    vec![
        Snippet::new(Section::ElementAt, "element_at_two", "30", element_at_two),
        Snippet::new(
            Section::ElementAt,
            "element_at_out_of_range",
            "error: index 10 is out of range for a sequence of length 5",
            element_at_out_of_range,
        ),
        Snippet::new(Section::ElementAt, "element_at_or_default_out_of_range", "0", element_at_or_default_out_of_range),
        Snippet::new(Section::ElementAt, "element_at_from_end", "50", element_at_from_end),
        Snippet::new(Section::ElementAt, "element_at_person", "Bob", element_at_person),
        Snippet::new(Section::First, "first_number", "1", first_number),
        Snippet::new(Section::First, "first_even", "2", first_even),
        Snippet::new(Section::First, "first_greater_than_ten", NO_MATCH, first_greater_than_ten),
        Snippet::new(Section::First, "first_or_default_greater_than_ten", "0", first_or_default_greater_than_ten),
        Snippet::new(Section::First, "first_person_older_than_26", "Bob", first_person_older_than_26),
        Snippet::new(Section::First, "first_of_empty", NO_ELEMENTS, first_of_empty),
        Snippet::new(Section::Last, "last_number", "5", last_number),
        Snippet::new(Section::Last, "last_even", "4", last_even),
        Snippet::new(Section::Last, "last_greater_than_ten", NO_MATCH, last_greater_than_ten),
        Snippet::new(Section::Last, "last_or_default_greater_than_ten", "0", last_or_default_greater_than_ten),
        Snippet::new(Section::Last, "oldest_by_ordering", "Bob", oldest_by_ordering),
        Snippet::new(Section::Single, "single_of_one", "42", single_of_one),
        Snippet::new(Section::Single, "single_equal_to_three", "3", single_equal_to_three),
        Snippet::new(Section::Single, "single_of_many", MANY_ELEMENTS, single_of_many),
        Snippet::new(Section::Single, "single_greater_than_three", MANY_MATCHES, single_greater_than_three),
        Snippet::new(Section::Single, "single_greater_than_ten", NO_MATCH, single_greater_than_ten),
        Snippet::new(Section::Single, "single_or_default_greater_than_ten", "0", single_or_default_greater_than_ten),
        Snippet::new(Section::Single, "single_or_default_of_many", MANY_ELEMENTS, single_or_default_of_many),
        Snippet::new(Section::Single, "age_of_the_only_bob", "30", age_of_the_only_bob),
    ]
}

fn tens() -> [i32; 5] {
    [10, 20, 30, 40, 50]
}

fn element_at_two() -> Outcome {
    element::element_at(&tens(), 2).copied().into()
}

fn element_at_out_of_range() -> Outcome {
    element::element_at(&tens(), 10).copied().into()
}

fn element_at_or_default_out_of_range() -> Outcome {
    element::element_at_or_default(&tens(), 10).into()
}

fn element_at_from_end() -> Outcome {
    element::element_at_from_end(&tens(), 1).copied().into()
}

fn element_at_person() -> Outcome {
    element::element_at(&people(), 1)
        .map(|p| p.name.clone())
        .into()
}

fn first_number() -> Outcome {
    element::first(&numbers()).copied().into()
}

fn first_even() -> Outcome {
    element::first_where(&numbers(), |n| *n % 2 == 0)
        .copied()
        .into()
}

fn first_greater_than_ten() -> Outcome {
    element::first_where(&numbers(), |n| **n > 10)
        .copied()
        .into()
}

fn first_or_default_greater_than_ten() -> Outcome {
    element::first_or_default(&numbers(), |n| **n > 10).into()
}

fn first_person_older_than_26() -> Outcome {
    Query::new()
        .and_gt(Person::AGE, 26u32)
        .build()
        .first(&people(), Person::accessor)
        .map(|p| p.name.clone())
        .into()
}

fn first_of_empty() -> Outcome {
    let empty: Vec<i32> = Vec::new();
    element::first(&empty).copied().into()
}

fn last_number() -> Outcome {
    element::last(&numbers()).copied().into()
}

fn last_even() -> Outcome {
    element::last_where(&numbers(), |n| *n % 2 == 0)
        .copied()
        .into()
}

fn last_greater_than_ten() -> Outcome {
    element::last_where(&numbers(), |n| **n > 10)
        .copied()
        .into()
}

fn last_or_default_greater_than_ten() -> Outcome {
    element::last_or_default(&numbers(), |n| **n > 10).into()
}

fn oldest_by_ordering() -> Outcome {
    Query::new()
        .order_asc(Person::AGE)
        .build()
        .last(&people(), Person::accessor)
        .map(|p| p.name.clone())
        .into()
}

fn single_of_one() -> Outcome {
    element::single(&[42]).copied().into()
}

fn single_equal_to_three() -> Outcome {
    element::single_where(&numbers(), |n| *n == 3)
        .copied()
        .into()
}

fn single_of_many() -> Outcome {
    element::single(&numbers()).copied().into()
}

fn single_greater_than_three() -> Outcome {
    element::single_where(&numbers(), |n| *n > 3)
        .copied()
        .into()
}

fn single_greater_than_ten() -> Outcome {
    element::single_where(&numbers(), |n| *n > 10)
        .copied()
        .into()
}

fn single_or_default_greater_than_ten() -> Outcome {
    element::single_or_default_where(&numbers(), |n| *n > 10).into()
}

fn single_or_default_of_many() -> Outcome {
    element::single_or_default(&[1, 2]).into()
}

fn age_of_the_only_bob() -> Outcome {
    Query::new()
        .and_eq(Person::NAME, "Bob")
        .build()
        .single(&people(), Person::accessor)
        .map(|p| p.age)
        .into()
}
