//! Prefix and suffix slicing.
//!
//! All four helpers saturate: asking for more than the slice holds returns
//! the whole slice (or nothing), never an error. The conditional forms
//! (`take_while`, `skip_while`) are plain [`Iterator`] adapters.

/// The first `n` elements, or all of them when `n` exceeds the length.
pub fn take<T>(items: &[T], n: usize) -> &[T] {
    &items[..n.min(items.len())]
}

/// Everything after the first `n` elements.
pub fn skip<T>(items: &[T], n: usize) -> &[T] {
    &items[n.min(items.len())..]
}

/// The last `n` elements.
pub fn take_last<T>(items: &[T], n: usize) -> &[T] {
    &items[items.len().saturating_sub(n)..]
}

/// Everything except the last `n` elements.
pub fn skip_last<T>(items: &[T], n: usize) -> &[T] {
    &items[..items.len().saturating_sub(n)]
}
