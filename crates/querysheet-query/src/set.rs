//! Set-style operations and sequence joining.
//!
//! `distinct*` and `except*` keep the first occurrence of each element and
//! preserve input order. They return owned vectors; the inputs are left
//! untouched.

use std::collections::{HashMap, HashSet};
use std::hash::Hash;

use crate::comparer::EqualityComparer;
use crate::error::{QueryError, Result};

/// Distinct elements by `Eq`, first occurrence kept.
pub fn distinct<T>(items: &[T]) -> Vec<T>
where
    T: Eq + Hash + Clone,
{
    distinct_by(items, |item| item.clone())
}

/// Deduplicates by a projected key.
pub fn distinct_by<T, K, F>(items: &[T], key: F) -> Vec<T>
where
    T: Clone,
    K: Eq + Hash,
    F: Fn(&T) -> K,
{
    let mut seen = HashSet::new();
    items
        .iter()
        .filter(|item| seen.insert(key(*item)))
        .cloned()
        .collect()
}

/// Deduplicates with a custom [`EqualityComparer`].
pub fn distinct_with<T, C>(items: &[T], comparer: &C) -> Vec<T>
where
    T: Clone,
    C: EqualityComparer<T>,
{
    let mut seen = Seen::new(comparer);
    items
        .iter()
        .filter(|item| seen.insert(*item))
        .cloned()
        .collect()
}

/// Distinct elements of `items` that do not occur in `removed`.
pub fn except<T>(items: &[T], removed: &[T]) -> Vec<T>
where
    T: Eq + Hash + Clone,
{
    except_by(items, removed, |item| item.clone())
}

/// Distinct-by-key elements of `items` whose key is not in `removed_keys`.
pub fn except_by<T, K, F>(items: &[T], removed_keys: &[K], key: F) -> Vec<T>
where
    T: Clone,
    K: Eq + Hash + Clone,
    F: Fn(&T) -> K,
{
    let mut seen: HashSet<K> = removed_keys.iter().cloned().collect();
    items
        .iter()
        .filter(|item| seen.insert(key(*item)))
        .cloned()
        .collect()
}

/// Like [`except`] with equality decided by `comparer`.
pub fn except_with<T, C>(items: &[T], removed: &[T], comparer: &C) -> Vec<T>
where
    T: Clone,
    C: EqualityComparer<T>,
{
    let mut seen = Seen::new(comparer);
    for item in removed {
        seen.insert(item);
    }
    items
        .iter()
        .filter(|item| seen.insert(*item))
        .cloned()
        .collect()
}

/// `first` followed by `second`, duplicates kept.
pub fn concat<T: Clone>(first: &[T], second: &[T]) -> Vec<T> {
    first.iter().chain(second).cloned().collect()
}

/// Copy of `items` with `value` added at the end.
pub fn append<T: Clone>(items: &[T], value: T) -> Vec<T> {
    let mut out = items.to_vec();
    out.push(value);
    out
}

/// Copy of `items` with `value` added at the front.
pub fn prepend<T: Clone>(items: &[T], value: T) -> Vec<T> {
    std::iter::once(value).chain(items.iter().cloned()).collect()
}

/// Inserts `value` before position `index`. `index == len` appends.
///
/// # Errors
///
/// [`QueryError::IndexOutOfRange`] when `index > len`.
pub fn insert_at<T: Clone>(items: &[T], index: usize, value: T) -> Result<Vec<T>> {
    if index > items.len() {
        return Err(QueryError::IndexOutOfRange {
            index,
            len: items.len(),
        });
    }
    let mut out = items.to_vec();
    out.insert(index, value);
    Ok(out)
}

/// Membership set driven by an [`EqualityComparer`].
struct Seen<'c, 'a, T, C> {
    comparer: &'c C,
    buckets: HashMap<u64, Vec<&'a T>>,
}

impl<'c, 'a, T, C> Seen<'c, 'a, T, C>
where
    C: EqualityComparer<T>,
{
    fn new(comparer: &'c C) -> Self {
        Seen {
            comparer,
            buckets: HashMap::new(),
        }
    }

    /// Records `item`; `false` if an equal item was already recorded.
    fn insert(&mut self, item: &'a T) -> bool {
        let bucket = self
            .buckets
            .entry(self.comparer.hash_key(item))
            .or_default();
        if bucket.iter().any(|known| self.comparer.equals(known, item)) {
            return false;
        }
        bucket.push(item);
        true
    }
}
