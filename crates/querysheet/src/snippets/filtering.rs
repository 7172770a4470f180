//! where, take, skip, of type.

use querysheet_query::{of_type, partition, Fields, Query};

use super::name_list;
use crate::catalog::{Section, Snippet};
use crate::outcome::Outcome;
use crate::records::{
    creatures, employees, numbers, people, products, Bird, Cat, Creature, Dog, Employee, Person,
    Product,
};

pub(super) fn snippets() -> Vec<Snippet> {
    vec![
        Snippet::new(Section::Where, "where_even", "[2, 4, 6, 8, 10]", where_even),
        Snippet::new(Section::Where, "where_older_than_21", "[Alice, Bob]", where_older_than_21),
        Snippet::new(Section::Where, "where_cheaper_than_100", "[Mouse, Keyboard]", where_cheaper_than_100),
        Snippet::new(Section::Where, "where_name_matches_pattern", "[Alice, Bob]", where_name_matches_pattern),
        Snippet::new(Section::Where, "where_value_exceeds_index", "[3, 5]", where_value_exceeds_index),
        Snippet::new(Section::Where, "where_salary_in_range", "[Bob, Charlie, Diana]", where_salary_in_range),
        Snippet::new(Section::Take, "take_three", "[1, 2, 3]", take_three),
        Snippet::new(Section::Take, "take_more_than_available", "[1, 2, 3, 4, 5]", take_more_than_available),
        Snippet::new(Section::Take, "take_while_less_than_four", "[1, 2, 3]", take_while_less_than_four),
        Snippet::new(Section::Take, "take_last_two", "[4, 5]", take_last_two),
        Snippet::new(Section::Take, "take_two_cheapest_products", "[Mouse, Keyboard]", take_two_cheapest_products),
        Snippet::new(Section::Skip, "skip_two", "[3, 4, 5]", skip_two),
        Snippet::new(Section::Skip, "skip_more_than_available", "[]", skip_more_than_available),
        Snippet::new(Section::Skip, "skip_while_less_than_three", "[3, 4, 1]", skip_while_less_than_three),
        Snippet::new(Section::Skip, "skip_last_two", "[1, 2, 3]", skip_last_two),
        Snippet::new(Section::Skip, "skip_oldest_person", "[Alice, Charlie]", skip_oldest_person),
        Snippet::new(Section::OfType, "of_type_dogs", "[Rex, Buddy]", of_type_dogs),
        Snippet::new(Section::OfType, "of_type_cat_lives", "[9]", of_type_cat_lives),
        Snippet::new(Section::OfType, "of_type_bird_colors", "[Yellow]", of_type_bird_colors),
        Snippet::new(Section::OfType, "creatures_that_are_pets", "[Rex, Whiskers, Buddy]", creatures_that_are_pets),
    ]
}

fn where_even() -> Outcome {
    (1..=10).filter(|n| n % 2 == 0).collect::<Vec<i32>>().into()
}

fn where_older_than_21() -> Outcome {
    let people = people();
    let query = Query::new().and_gt(Person::AGE, 21u32).build();
    name_list(query.filter(&people, Person::accessor))
}

fn where_cheaper_than_100() -> Outcome {
    let products = products();
    let query = Query::new().and_lt(Product::PRICE, 100.0f64).build();
    name_list(query.filter(&products, Product::accessor))
}

fn where_name_matches_pattern() -> Outcome {
    let people = people();
    match Query::new().and_regex(Person::NAME, "^[AB]") {
        Ok(query) => name_list(query.build().filter(&people, Person::accessor)),
        Err(err) => err.into(),
    }
}

/// Keeps values larger than their own position.
fn where_value_exceeds_index() -> Outcome {
    let numbers = [0, 3, 1, 5, 2];
    numbers
        .iter()
        .enumerate()
        .filter(|(index, n)| **n > *index as i32)
        .map(|(_, n)| *n)
        .collect::<Vec<_>>()
        .into()
}

fn where_salary_in_range() -> Outcome {
    let employees = employees();
    let query = Query::new()
        .and_gte(Employee::SALARY, 55000u32)
        .and_lte(Employee::SALARY, 60000u32)
        .build();
    name_list(query.filter(&employees, Employee::accessor))
}

fn take_three() -> Outcome {
    partition::take(&numbers(), 3).to_vec().into()
}

fn take_more_than_available() -> Outcome {
    partition::take(&numbers(), 10).to_vec().into()
}

fn take_while_less_than_four() -> Outcome {
    [1, 2, 3, 4, 5, 1]
        .into_iter()
        .take_while(|n| *n < 4)
        .collect::<Vec<i32>>()
        .into()
}

fn take_last_two() -> Outcome {
    partition::take_last(&numbers(), 2).to_vec().into()
}

fn take_two_cheapest_products() -> Outcome {
    let products = products();
    let query = Query::new().order_asc(Product::PRICE).take(2).build();
    name_list(query.filter(&products, Product::accessor))
}

fn skip_two() -> Outcome {
    partition::skip(&numbers(), 2).to_vec().into()
}

fn skip_more_than_available() -> Outcome {
    partition::skip(&numbers(), 10).to_vec().into()
}

fn skip_while_less_than_three() -> Outcome {
    [1, 2, 3, 4, 1]
        .into_iter()
        .skip_while(|n| *n < 3)
        .collect::<Vec<i32>>()
        .into()
}

fn skip_last_two() -> Outcome {
    partition::skip_last(&numbers(), 2).to_vec().into()
}

fn skip_oldest_person() -> Outcome {
    let people = people();
    let query = Query::new().order_desc(Person::AGE).skip(1).build();
    name_list(query.filter(&people, Person::accessor))
}

fn of_type_dogs() -> Outcome {
    let creatures = creatures();
    let dogs: Vec<&Dog> = of_type(&creatures);
    name_list(dogs)
}

fn of_type_cat_lives() -> Outcome {
    let creatures = creatures();
    let cats: Vec<&Cat> = of_type(&creatures);
    cats.iter().map(|cat| cat.lives).collect::<Vec<_>>().into()
}

fn of_type_bird_colors() -> Outcome {
    let creatures = creatures();
    let birds: Vec<&Bird> = of_type(&creatures);
    birds
        .iter()
        .map(|bird| bird.color.clone())
        .collect::<Vec<_>>()
        .into()
}

fn creatures_that_are_pets() -> Outcome {
    let creatures = creatures();
    let query = Query::new()
        .and_in(Creature::KIND, [Creature::DOG, Creature::CAT])
        .build();
    name_list(query.filter(&creatures, Creature::accessor))
}
