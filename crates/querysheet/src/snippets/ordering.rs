//! order by, then by, descending, reverse.

use querysheet_query::{Dir, Fields, Query};

use super::name_list;
use crate::catalog::{Section, Snippet};
use crate::outcome::Outcome;
use crate::records::{employees, names, people, products, Employee, Person, Product};

pub(super) fn snippets() -> Vec<Snippet> {
    vec![
        Snippet::new(Section::OrderBy, "order_numbers", "[1, 2, 3, 4, 5]", order_numbers),
        Snippet::new(Section::OrderBy, "order_numbers_descending", "[5, 4, 3, 2, 1]", order_numbers_descending),
        Snippet::new(Section::OrderBy, "order_names_by_length", "[Bob, Alice, Charlie]", order_names_by_length),
        Snippet::new(Section::OrderBy, "order_people_by_age", "[Charlie, Alice, Bob]", order_people_by_age),
        Snippet::new(Section::OrderBy, "order_people_by_age_descending", "[Bob, Alice, Charlie]", order_people_by_age_descending),
        Snippet::new(Section::OrderBy, "order_employees_by_salary_then_name", "[Bob, Diana, Charlie, Alice]", order_employees_by_salary_then_name),
        Snippet::new(Section::OrderBy, "order_products_by_price", "[Mouse, Keyboard, Monitor, Laptop]", order_products_by_price),
        Snippet::new(Section::OrderBy, "reverse_names", "[Charlie, Bob, Alice]", reverse_names),
    ]
}

fn order_numbers() -> Outcome {
    let mut numbers = vec![5, 3, 1, 4, 2];
    numbers.sort();
    numbers.into()
}

fn order_numbers_descending() -> Outcome {
    let mut numbers = vec![5, 3, 1, 4, 2];
    numbers.sort_by(|a, b| b.cmp(a));
    numbers.into()
}

fn order_names_by_length() -> Outcome {
    let mut names = vec!["Charlie", "Bob", "Alice"];
    names.sort_by_key(|name| name.len());
    names.into_iter().map(String::from).collect::<Vec<_>>().into()
}

fn order_people_by_age() -> Outcome {
    let people = people();
    let query = Query::new().order_asc(Person::AGE).build();
    name_list(query.filter(&people, Person::accessor))
}

fn order_people_by_age_descending() -> Outcome {
    let people = people();
    let query = Query::new().order_by(Person::AGE, Dir::Desc).build();
    name_list(query.filter(&people, Person::accessor))
}

fn order_employees_by_salary_then_name() -> Outcome {
    let employees = employees();
    let query = Query::new()
        .order_desc(Employee::SALARY)
        .order_asc(Employee::NAME)
        .build();
    name_list(query.filter(&employees, Employee::accessor))
}

fn order_products_by_price() -> Outcome {
    let products = products();
    let query = Query::new().order_asc(Product::PRICE).build();
    name_list(query.filter(&products, Product::accessor))
}

fn reverse_names() -> Outcome {
    names().into_iter().rev().collect::<Vec<_>>().into()
}
