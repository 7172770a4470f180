//! Custom equality for set operations.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

/// Equality plus a hash consistent with it.
///
/// Implementations must return the same `hash_key` for any two values that
/// `equals` reports as equal.
///
/// ```
/// use querysheet_query::{CaseInsensitive, EqualityComparer};
///
/// assert!(CaseInsensitive.equals(&"Bob", &"BOB"));
/// assert_eq!(CaseInsensitive.hash_key(&"Bob"), CaseInsensitive.hash_key(&"bob"));
/// ```
pub trait EqualityComparer<T: ?Sized> {
    fn equals(&self, a: &T, b: &T) -> bool;

    fn hash_key(&self, value: &T) -> u64;
}

/// Compares strings ignoring case (Unicode lowercase folding).
#[derive(Debug, Clone, Copy, Default)]
pub struct CaseInsensitive;

impl<S> EqualityComparer<S> for CaseInsensitive
where
    S: AsRef<str> + ?Sized,
{
    fn equals(&self, a: &S, b: &S) -> bool {
        a.as_ref().to_lowercase() == b.as_ref().to_lowercase()
    }

    fn hash_key(&self, value: &S) -> u64 {
        let mut hasher = DefaultHasher::new();
        value.as_ref().to_lowercase().hash(&mut hasher);
        hasher.finish()
    }
}
