//! The cheatsheet itself, one module per family of operations.
//!
//! Each snippet builds its literal input, applies one primitive and returns
//! the result as an [`Outcome`]. The annotation next to it in the table is
//! what the cheatsheet promises the reader.

mod aggregation;
mod element;
mod filtering;
mod ordering;
mod quantifiers;
mod sets;

use crate::catalog::Snippet;
use crate::outcome::Outcome;
use crate::records::Named;

/// Every snippet, grouped by module.
pub(crate) fn all() -> Vec<Snippet> {
    [
        quantifiers::snippets(),
        ordering::snippets(),
        aggregation::snippets(),
        element::snippets(),
        filtering::snippets(),
        sets::snippets(),
    ]
    .concat()
}

/// Projects records to their names.
fn name_list<'a, T, I>(items: I) -> Outcome
where
    T: Named + 'a,
    I: IntoIterator<Item = &'a T>,
{
    items
        .into_iter()
        .map(|item| item.name().to_string())
        .collect::<Vec<_>>()
        .into()
}
