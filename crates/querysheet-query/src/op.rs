//! Comparison operators used by clauses.

use std::cmp::Ordering;
use std::fmt;

/// Comparison operator for a [`Clause`](crate::Clause).
///
/// - `Eq`, `Ne` apply to every value kind.
/// - `StartsWith`, `EndsWith`, `Contains`, `Regex` apply to strings.
/// - `Gt`, `Gte`, `Lt`, `Lte` apply to numbers.
/// - `In` tests an enum discriminant against a set.
/// - `Is` reads better on booleans and behaves as `Eq`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Op {
    Eq,
    Ne,
    StartsWith,
    EndsWith,
    Contains,
    Regex,
    Gt,
    Gte,
    Lt,
    Lte,
    In,
    Is,
}

impl Op {
    /// Maps aliases onto their canonical operator (`Is` becomes `Eq`).
    pub fn normalize(self) -> Op {
        match self {
            Op::Is => Op::Eq,
            other => other,
        }
    }

    /// Evaluates an ordering-based operator against `field.cmp(clause)`.
    ///
    /// Operators that are not ordering-based evaluate to `false`.
    pub fn eval_ordering(self, ordering: Ordering) -> bool {
        match self.normalize() {
            Op::Eq => ordering == Ordering::Equal,
            Op::Ne => ordering != Ordering::Equal,
            Op::Gt => ordering == Ordering::Greater,
            Op::Gte => ordering != Ordering::Less,
            Op::Lt => ordering == Ordering::Less,
            Op::Lte => ordering != Ordering::Greater,
            _ => false,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Op::Eq => "eq",
            Op::Ne => "ne",
            Op::StartsWith => "startswith",
            Op::EndsWith => "endswith",
            Op::Contains => "contains",
            Op::Regex => "regex",
            Op::Gt => "gt",
            Op::Gte => "gte",
            Op::Lt => "lt",
            Op::Lte => "lte",
            Op::In => "in",
            Op::Is => "is",
        }
    }
}

impl fmt::Display for Op {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn is_normalizes_to_eq() {
        assert_eq!(Op::Is.normalize(), Op::Eq);
        assert_eq!(Op::Gt.normalize(), Op::Gt);
    }

    #[test]
    fn ordering_table() {
        let cases = [
            (Op::Eq, [false, true, false]),
            (Op::Ne, [true, false, true]),
            (Op::Gt, [false, false, true]),
            (Op::Gte, [false, true, true]),
            (Op::Lt, [true, false, false]),
            (Op::Lte, [true, true, false]),
            (Op::Contains, [false, false, false]),
        ];
        let orderings = [Ordering::Less, Ordering::Equal, Ordering::Greater];

        for (op, expected) in cases {
            for (ordering, want) in orderings.iter().zip(expected) {
                assert_eq!(op.eval_ordering(*ordering), want, "{op} on {ordering:?}");
            }
        }
    }

    #[test]
    fn display_uses_short_names() {
        assert_eq!(Op::StartsWith.to_string(), "startswith");
        assert_eq!(Op::In.to_string(), "in");
    }
}
