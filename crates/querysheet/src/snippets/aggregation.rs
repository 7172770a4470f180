//! min, max, sum, average.

use querysheet_query::aggregate;

use crate::catalog::{Section, Snippet};
use crate::outcome::Outcome;
use crate::records::{employees, numbers, people, products, Named};

pub(super) fn snippets() -> Vec<Snippet> {
    vec![
        Snippet::new(Section::Min, "min_number", "1", min_number),
        Snippet::new(Section::Min, "min_age", "20", min_age),
        Snippet::new(Section::Min, "youngest_person", "Charlie", youngest_person),
        Snippet::new(Section::Min, "cheapest_product", "Mouse", cheapest_product),
        Snippet::new(Section::Min, "min_of_empty", "error: sequence contains no elements", min_of_empty),
        Snippet::new(Section::Max, "max_number", "9", max_number),
        Snippet::new(Section::Max, "max_price", "1200.0", max_price),
        Snippet::new(Section::Max, "oldest_person", "Bob", oldest_person),
        Snippet::new(Section::Max, "highest_paid_employee", "Bob", highest_paid_employee),
        Snippet::new(Section::Max, "max_of_empty", "error: sequence contains no elements", max_of_empty),
        Snippet::new(Section::Sum, "sum_numbers", "15", sum_numbers),
        Snippet::new(Section::Sum, "sum_salaries", "225000", sum_salaries),
        Snippet::new(Section::Sum, "sum_prices", "1500.0", sum_prices),
        Snippet::new(Section::Sum, "sum_even_numbers", "30", sum_even_numbers),
        Snippet::new(Section::Sum, "sum_of_empty", "0", sum_of_empty),
        Snippet::new(
            Section::Sum,
            "sum_that_overflows",
            "error: arithmetic operation resulted in an overflow",
            sum_that_overflows,
        ),
        Snippet::new(Section::Average, "average_numbers", "3.0", average_numbers),
        Snippet::new(Section::Average, "average_age", "25.0", average_age),
        Snippet::new(Section::Average, "average_price", "375.0", average_price),
        Snippet::new(Section::Average, "average_salary", "56250.0", average_salary),
        Snippet::new(Section::Average, "average_of_empty", "error: sequence contains no elements", average_of_empty),
    ]
}

fn min_number() -> Outcome {
    aggregate::min(&[5, 3, 8, 1, 9]).into()
}

fn min_age() -> Outcome {
    let ages: Vec<u32> = people().iter().map(|p| p.age).collect();
    aggregate::min(&ages).into()
}

fn youngest_person() -> Outcome {
    aggregate::min_by_key(&people(), |p| p.age)
        .map(|p| p.name.clone())
        .into()
}

fn cheapest_product() -> Outcome {
    aggregate::min_by_key(&products(), |p| p.price)
        .map(|p| p.name().to_string())
        .into()
}

fn min_of_empty() -> Outcome {
    let empty: [i32; 0] = [];
    aggregate::min(&empty).into()
}

fn max_number() -> Outcome {
    aggregate::max(&[5, 3, 8, 1, 9]).into()
}

fn max_price() -> Outcome {
    let prices: Vec<f64> = products().iter().map(|p| p.price).collect();
    aggregate::max(&prices).into()
}

fn oldest_person() -> Outcome {
    aggregate::max_by_key(&people(), |p| p.age)
        .map(|p| p.name.clone())
        .into()
}

/// Bob and Diana share the top salary; the first one wins.
fn highest_paid_employee() -> Outcome {
    aggregate::max_by_key(&employees(), |e| e.salary)
        .map(|e| e.name.clone())
        .into()
}

fn max_of_empty() -> Outcome {
    let empty: Vec<f64> = Vec::new();
    aggregate::max(&empty).into()
}

fn sum_numbers() -> Outcome {
    aggregate::sum(&numbers()).into()
}

fn sum_salaries() -> Outcome {
    aggregate::sum_by(&employees(), |e| e.salary).into()
}

fn sum_prices() -> Outcome {
    aggregate::sum_by(&products(), |p| p.price).into()
}

fn sum_even_numbers() -> Outcome {
    (1..=10).filter(|n| n % 2 == 0).sum::<i32>().into()
}

fn sum_of_empty() -> Outcome {
    let empty: Vec<i32> = Vec::new();
    aggregate::sum(&empty).into()
}

fn sum_that_overflows() -> Outcome {
    aggregate::sum(&[i32::MAX, 1]).into()
}

fn average_numbers() -> Outcome {
    aggregate::average(&numbers()).into()
}

fn average_age() -> Outcome {
    aggregate::average_by(&people(), |p| f64::from(p.age)).into()
}

fn average_price() -> Outcome {
    aggregate::average_by(&products(), |p| p.price).into()
}

fn average_salary() -> Outcome {
    aggregate::average_by(&employees(), |e| f64::from(e.salary)).into()
}

fn average_of_empty() -> Outcome {
    let empty: Vec<i32> = Vec::new();
    aggregate::average(&empty).into()
}
