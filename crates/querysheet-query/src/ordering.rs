//! Sort keys for query results.
//!
//! A query holds a list of [`OrderBy`] keys. The first is the primary key,
//! every following key only breaks ties left by the ones before it, which is
//! the "order by ... then by ..." chain of the cheatsheet.

use std::cmp::Ordering;
use std::fmt;

use crate::value::Value;

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Dir {
    #[default]
    Asc,
    Desc,
}

impl Dir {
    /// Reverses `ordering` for `Desc`, passes it through for `Asc`.
    pub fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            Dir::Asc => ordering,
            Dir::Desc => ordering.reverse(),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Dir::Asc => "asc",
            Dir::Desc => "desc",
        }
    }
}

impl fmt::Display for Dir {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One sort key: a field and a direction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderBy {
    pub field: String,
    pub dir: Dir,
}

impl OrderBy {
    pub fn new(field: impl Into<String>, dir: Dir) -> Self {
        OrderBy {
            field: field.into(),
            dir,
        }
    }

    pub fn asc(field: impl Into<String>) -> Self {
        OrderBy::new(field, Dir::Asc)
    }

    pub fn desc(field: impl Into<String>) -> Self {
        OrderBy::new(field, Dir::Desc)
    }

    /// Compares two field values in this key's direction.
    ///
    /// Missing values sort last in either direction. Returns `None` when the
    /// values cannot be compared.
    pub fn compare(&self, a: &Value<'_>, b: &Value<'_>) -> Option<Ordering> {
        if a.is_none() || b.is_none() {
            return compare_values(a, b);
        }
        compare_values(a, b).map(|ordering| self.dir.apply(ordering))
    }
}

/// Compares two values of the same kind.
///
/// Missing values sort after present ones. Mismatched kinds and NaN give
/// `None`.
pub fn compare_values(a: &Value<'_>, b: &Value<'_>) -> Option<Ordering> {
    match (a, b) {
        (Value::String(a), Value::String(b)) => Some(a.cmp(b)),
        (Value::Number(a), Value::Number(b)) => a.compare(*b),
        (Value::Enum(a), Value::Enum(b)) => Some(a.cmp(b)),
        (Value::Bool(a), Value::Bool(b)) => Some(a.cmp(b)),
        (Value::None, Value::None) => Some(Ordering::Equal),
        (Value::None, _) => Some(Ordering::Greater),
        (_, Value::None) => Some(Ordering::Less),
        _ => None,
    }
}

/// Compares two records key by key until one key decides.
///
/// Keys that cannot compare their values count as ties.
pub fn compare_by_orderings<T, F>(a: &T, b: &T, orderings: &[OrderBy], accessor: &F) -> Ordering
where
    for<'a> F: Fn(&'a T, &str) -> Value<'a>,
{
    orderings
        .iter()
        .filter_map(|key| key.compare(&accessor(a, &key.field), &accessor(b, &key.field)))
        .find(|ordering| *ordering != Ordering::Equal)
        .unwrap_or(Ordering::Equal)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::Number;

    struct Employee {
        name: &'static str,
        salary: u32,
    }

    fn accessor<'a>(employee: &'a Employee, field: &str) -> Value<'a> {
        match field {
            "name" => Value::String(employee.name),
            "salary" => Value::Number(Number::from(employee.salary)),
            _ => Value::None,
        }
    }

    #[test]
    fn dir_apply_and_display() {
        assert_eq!(Dir::Asc.apply(Ordering::Less), Ordering::Less);
        assert_eq!(Dir::Desc.apply(Ordering::Less), Ordering::Greater);
        assert_eq!(Dir::Desc.apply(Ordering::Equal), Ordering::Equal);
        assert_eq!(Dir::default(), Dir::Asc);
        assert_eq!(Dir::Desc.to_string(), "desc");
    }

    #[test]
    fn missing_values_sort_last() {
        let some = Value::String("Alice");
        assert_eq!(compare_values(&Value::None, &some), Some(Ordering::Greater));
        assert_eq!(compare_values(&some, &Value::None), Some(Ordering::Less));
        assert_eq!(
            compare_values(&Value::None, &Value::None),
            Some(Ordering::Equal)
        );
    }

    #[test]
    fn missing_values_sort_last_when_descending() {
        let present = Value::Number(Number::U64(5));
        let key = OrderBy::desc("age");
        assert_eq!(key.compare(&Value::None, &present), Some(Ordering::Greater));
        assert_eq!(key.compare(&present, &Value::None), Some(Ordering::Less));

        struct Row {
            name: &'static str,
            age: Option<u32>,
        }
        fn row_accessor<'a>(row: &'a Row, field: &str) -> Value<'a> {
            match (field, row.age) {
                ("name", _) => Value::String(row.name),
                ("age", Some(age)) => Value::Number(Number::from(age)),
                _ => Value::None,
            }
        }

        let mut rows = vec![
            Row { name: "a", age: None },
            Row { name: "b", age: Some(3) },
            Row { name: "c", age: Some(5) },
        ];
        let keys = vec![OrderBy::desc("age")];
        rows.sort_by(|x, y| compare_by_orderings(x, y, &keys, &row_accessor));
        let names: Vec<_> = rows.iter().map(|r| r.name).collect();
        assert_eq!(names, ["c", "b", "a"]);
    }

    #[test]
    fn mismatched_kinds_are_incomparable() {
        let s = Value::String("Alice");
        let n = Value::Number(Number::I64(25));
        assert_eq!(compare_values(&s, &n), None);
        assert_eq!(OrderBy::asc("x").compare(&s, &n), None);
    }

    #[test]
    fn secondary_key_breaks_ties() {
        let bob = Employee {
            name: "Bob",
            salary: 60000,
        };
        let diana = Employee {
            name: "Diana",
            salary: 60000,
        };
        let alice = Employee {
            name: "Alice",
            salary: 50000,
        };
        let keys = vec![OrderBy::desc("salary"), OrderBy::asc("name")];

        assert_eq!(
            compare_by_orderings(&bob, &diana, &keys, &accessor),
            Ordering::Less
        );
        assert_eq!(
            compare_by_orderings(&alice, &bob, &keys, &accessor),
            Ordering::Greater
        );
        assert_eq!(
            compare_by_orderings(&bob, &bob, &keys, &accessor),
            Ordering::Equal
        );
    }

    #[test]
    fn unknown_key_is_a_tie() {
        let a = Employee {
            name: "A",
            salary: 1,
        };
        let b = Employee {
            name: "B",
            salary: 2,
        };
        let keys = vec![OrderBy::asc("missing"), OrderBy::asc("salary")];
        assert_eq!(
            compare_by_orderings(&a, &b, &keys, &accessor),
            Ordering::Less
        );
    }
}
