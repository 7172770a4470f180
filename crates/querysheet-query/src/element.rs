//! Positional and unique-element retrieval.
//!
//! The plain functions fail with a [`QueryError`] when the requested element
//! does not exist. The `_or_default` variants hand back `T::default()`
//! instead, except that `single_or_default` still refuses ambiguous input.

use crate::error::{QueryError, Result};

/// The first element.
///
/// # Errors
///
/// [`QueryError::NoElements`] when `items` is empty.
pub fn first<T>(items: &[T]) -> Result<&T> {
    items.first().ok_or(QueryError::NoElements)
}

/// The first element satisfying `predicate`.
///
/// # Errors
///
/// [`QueryError::NoMatch`] when nothing matches, including on empty input.
pub fn first_where<T, P>(items: &[T], predicate: P) -> Result<&T>
where
    P: FnMut(&&T) -> bool,
{
    items
        .iter()
        .find(predicate)
        .ok_or(QueryError::NoMatch)
}

/// Like [`first_where`] but no match yields `T::default()`.
pub fn first_or_default<T, P>(items: &[T], predicate: P) -> T
where
    T: Clone + Default,
    P: FnMut(&&T) -> bool,
{
    items.iter().find(predicate).cloned().unwrap_or_default()
}

/// The last element.
///
/// # Errors
///
/// [`QueryError::NoElements`] when `items` is empty.
pub fn last<T>(items: &[T]) -> Result<&T> {
    items.last().ok_or(QueryError::NoElements)
}

/// The last element satisfying `predicate`, scanning from the back.
///
/// # Errors
///
/// [`QueryError::NoMatch`] when nothing matches, including on empty input.
pub fn last_where<T, P>(items: &[T], predicate: P) -> Result<&T>
where
    P: FnMut(&&T) -> bool,
{
    items
        .iter()
        .rev()
        .find(predicate)
        .ok_or(QueryError::NoMatch)
}

/// Like [`last_where`] but no match yields `T::default()`.
pub fn last_or_default<T, P>(items: &[T], predicate: P) -> T
where
    T: Clone + Default,
    P: FnMut(&&T) -> bool,
{
    items.iter().rev().find(predicate).cloned().unwrap_or_default()
}

/// The only element of `items`.
///
/// # Errors
///
/// [`QueryError::NoElements`] when empty, [`QueryError::MoreThanOneElement`]
/// when longer than one.
pub fn single<T>(items: &[T]) -> Result<&T> {
    match items {
        [only] => Ok(only),
        [] => Err(QueryError::NoElements),
        _ => Err(QueryError::MoreThanOneElement),
    }
}

/// The only element satisfying `predicate`.
///
/// Scanning stops at the second match.
///
/// # Errors
///
/// [`QueryError::NoMatch`] when nothing matches, [`QueryError::MoreThanOneMatch`]
/// on a second match.
pub fn single_where<T, P>(items: &[T], mut predicate: P) -> Result<&T>
where
    P: FnMut(&T) -> bool,
{
    let mut matches = items.iter().filter(|item| predicate(item));
    match (matches.next(), matches.next()) {
        (Some(only), None) => Ok(only),
        (None, _) => Err(QueryError::NoMatch),
        (Some(_), Some(_)) => Err(QueryError::MoreThanOneMatch),
    }
}

/// Like [`single`] but an empty slice yields `T::default()`.
pub fn single_or_default<T>(items: &[T]) -> Result<T>
where
    T: Clone + Default,
{
    match items {
        [] => Ok(T::default()),
        [only] => Ok(only.clone()),
        _ => Err(QueryError::MoreThanOneElement),
    }
}

/// Like [`single_where`] but no match yields `T::default()`.
pub fn single_or_default_where<T, P>(items: &[T], predicate: P) -> Result<T>
where
    T: Clone + Default,
    P: FnMut(&T) -> bool,
{
    match single_where(items, predicate) {
        Ok(only) => Ok(only.clone()),
        Err(QueryError::NoMatch) => Ok(T::default()),
        Err(err) => Err(err),
    }
}

/// Element at zero-based `index`.
///
/// # Errors
///
/// [`QueryError::IndexOutOfRange`] when `index >= items.len()`.
pub fn element_at<T>(items: &[T], index: usize) -> Result<&T> {
    items.get(index).ok_or(QueryError::IndexOutOfRange {
        index,
        len: items.len(),
    })
}

/// Element counted from the end: `1` is the last element.
///
/// `0` is never valid, matching a `^0` index one past the end.
pub fn element_at_from_end<T>(items: &[T], index: usize) -> Result<&T> {
    items
        .len()
        .checked_sub(index)
        .filter(|_| index > 0)
        .and_then(|at| items.get(at))
        .ok_or(QueryError::IndexOutOfRange {
            index,
            len: items.len(),
        })
}

/// Like [`element_at`] but out-of-range yields `T::default()`.
pub fn element_at_or_default<T>(items: &[T], index: usize) -> T
where
    T: Clone + Default,
{
    items.get(index).cloned().unwrap_or_default()
}
