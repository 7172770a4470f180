//! Extrema, sums and averages.
//!
//! Extrema are defined on `PartialOrd` so float prices work; incomparable
//! pairs (NaN) never replace the current candidate. On ties the earliest
//! element wins. Integer sums are checked and report overflow as an error.

use std::cmp::Ordering;

use crate::error::{QueryError, Result};

/// Smallest value.
///
/// # Errors
///
/// [`QueryError::NoElements`] when `items` is empty.
pub fn min<T>(items: &[T]) -> Result<T>
where
    T: PartialOrd + Copy,
{
    extreme_by(items, |v| *v, Ordering::Less).copied()
}

/// Largest value. Fails like [`min`].
pub fn max<T>(items: &[T]) -> Result<T>
where
    T: PartialOrd + Copy,
{
    extreme_by(items, |v| *v, Ordering::Greater).copied()
}

/// Element with the smallest key.
pub fn min_by_key<T, K, F>(items: &[T], key: F) -> Result<&T>
where
    K: PartialOrd,
    F: Fn(&T) -> K,
{
    extreme_by(items, key, Ordering::Less)
}

/// Element with the largest key.
pub fn max_by_key<T, K, F>(items: &[T], key: F) -> Result<&T>
where
    K: PartialOrd,
    F: Fn(&T) -> K,
{
    extreme_by(items, key, Ordering::Greater)
}

/// Numeric types that can be summed with overflow detection.
pub trait CheckedSum: Copy {
    const ZERO: Self;

    /// `None` when the addition overflows.
    fn checked_sum(self, rhs: Self) -> Option<Self>;
}

macro_rules! checked_sum_int {
    ($($ty:ty),+) => {
        $(
            impl CheckedSum for $ty {
                const ZERO: Self = 0;

                fn checked_sum(self, rhs: Self) -> Option<Self> {
                    self.checked_add(rhs)
                }
            }
        )+
    };
}

checked_sum_int!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

macro_rules! checked_sum_float {
    ($($ty:ty),+) => {
        $(
            // Floats saturate to infinity rather than overflow.
            impl CheckedSum for $ty {
                const ZERO: Self = 0.0;

                fn checked_sum(self, rhs: Self) -> Option<Self> {
                    Some(self + rhs)
                }
            }
        )+
    };
}

checked_sum_float!(f32, f64);

/// Sum of all values. An empty slice sums to zero.
///
/// # Errors
///
/// [`QueryError::Overflow`] when an integer total leaves the type's range.
pub fn sum<T: CheckedSum>(items: &[T]) -> Result<T> {
    sum_by(items, |v| *v)
}

/// Sum of `selector` over all elements. Fails like [`sum`].
pub fn sum_by<T, N, F>(items: &[T], selector: F) -> Result<N>
where
    N: CheckedSum,
    F: Fn(&T) -> N,
{
    items
        .iter()
        .try_fold(N::ZERO, |total, item| total.checked_sum(selector(item)))
        .ok_or(QueryError::Overflow)
}

/// Arithmetic mean as `f64`.
///
/// # Errors
///
/// [`QueryError::NoElements`] when `items` is empty.
pub fn average<T>(items: &[T]) -> Result<f64>
where
    T: Copy + Into<f64>,
{
    average_by(items, |v| (*v).into())
}

/// Mean of `selector` over all elements. Fails like [`average`].
pub fn average_by<T, F>(items: &[T], selector: F) -> Result<f64>
where
    F: Fn(&T) -> f64,
{
    if items.is_empty() {
        return Err(QueryError::NoElements);
    }
    let total: f64 = items.iter().map(selector).sum();
    Ok(total / items.len() as f64)
}

fn extreme_by<T, K, F>(items: &[T], key: F, wanted: Ordering) -> Result<&T>
where
    K: PartialOrd,
    F: Fn(&T) -> K,
{
    let (head, rest) = items.split_first().ok_or(QueryError::NoElements)?;
    let mut best = (head, key(head));
    for item in rest {
        let candidate = key(item);
        if candidate.partial_cmp(&best.1) == Some(wanted) {
            best = (item, candidate);
        }
    }
    Ok(best.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extrema_of_numbers() {
        let numbers = [5, 3, 8, 1, 9];
        assert_eq!(min(&numbers), Ok(1));
        assert_eq!(max(&numbers), Ok(9));
        assert_eq!(max(&[25.5, 1200.0, 75.0]), Ok(1200.0));
    }

    #[test]
    fn extrema_of_empty_fail() {
        let empty: [i32; 0] = [];
        assert_eq!(min(&empty), Err(QueryError::NoElements));
        assert_eq!(max(&empty), Err(QueryError::NoElements));
    }

    #[test]
    fn ties_keep_the_first_element() {
        let salaries = [("Alice", 50), ("Bob", 60), ("Diana", 60), ("Eve", 50)];
        assert_eq!(max_by_key(&salaries, |s| s.1).unwrap().0, "Bob");
        assert_eq!(min_by_key(&salaries, |s| s.1).unwrap().0, "Alice");
    }

    #[test]
    fn nan_never_wins() {
        assert_eq!(max(&[1.0, f64::NAN, 3.0]), Ok(3.0));
    }

    #[test]
    fn sums() {
        assert_eq!(sum(&[1, 2, 3, 4, 5]), Ok(15));
        assert_eq!(sum::<i32>(&[]), Ok(0));
        assert_eq!(sum_by(&[("a", 1.5), ("b", 2.5)], |p| p.1), Ok(4.0));
    }

    #[test]
    fn integer_overflow_is_an_error() {
        assert_eq!(sum(&[i32::MAX, 1]), Err(QueryError::Overflow));
        assert_eq!(sum(&[u8::MAX, 0]), Ok(u8::MAX));
        assert_eq!(sum_by(&[200u8, 100], |n| *n), Err(QueryError::Overflow));
        assert_eq!(sum(&[i64::MIN, -1]), Err(QueryError::Overflow));
    }

    #[test]
    fn float_sums_reach_infinity() {
        assert_eq!(sum(&[f64::MAX, f64::MAX]), Ok(f64::INFINITY));
    }

    #[test]
    fn averages() {
        assert_eq!(average(&[1, 2, 3, 4, 5]), Ok(3.0));
        assert_eq!(average_by(&[(20u32,), (30,)], |p| f64::from(p.0)), Ok(25.0));
        assert_eq!(average::<i32>(&[]), Err(QueryError::NoElements));
    }
}
