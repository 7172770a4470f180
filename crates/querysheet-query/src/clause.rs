//! Single filter predicates.

use regex::Regex;

use crate::op::Op;
use crate::value::{Number, Value};

/// A filter predicate: field name, operator, comparison value.
///
/// ```
/// use querysheet_query::{Clause, Op, Value};
///
/// let clause = Clause::new("name", Op::StartsWith, "B");
/// assert!(clause.matches(&Value::String("Bella")));
/// assert!(!clause.matches(&Value::String("Alice")));
/// ```
#[derive(Debug, Clone)]
pub struct Clause {
    pub field: String,
    pub op: Op,
    pub value: ClauseValue,
}

impl Clause {
    pub fn new(field: impl Into<String>, op: Op, value: impl Into<ClauseValue>) -> Self {
        Clause {
            field: field.into(),
            op,
            value: value.into(),
        }
    }

    /// Evaluates this clause against a field value.
    ///
    /// Missing fields and kind mismatches never match, not even for `Ne`.
    pub fn matches(&self, field_value: &Value<'_>) -> bool {
        match (&self.value, field_value) {
            (ClauseValue::String(pattern), Value::String(s)) => self.match_string(s, pattern),
            (ClauseValue::Regex(regex), Value::String(s)) => {
                self.op == Op::Regex && regex.is_match(s)
            }
            (ClauseValue::Number(clause), Value::Number(field)) => field
                .compare(*clause)
                .is_some_and(|ordering| self.op.eval_ordering(ordering)),
            (ClauseValue::Enum(clause), Value::Enum(field)) => match self.op.normalize() {
                Op::Eq => field == clause,
                Op::Ne => field != clause,
                _ => false,
            },
            (ClauseValue::EnumSet(set), Value::Enum(field)) => {
                self.op == Op::In && set.contains(field)
            }
            (ClauseValue::Bool(clause), Value::Bool(field)) => match self.op.normalize() {
                Op::Eq => field == clause,
                Op::Ne => field != clause,
                _ => false,
            },
            _ => false,
        }
    }

    fn match_string(&self, field: &str, pattern: &str) -> bool {
        match self.op.normalize() {
            Op::Eq => field == pattern,
            Op::Ne => field != pattern,
            Op::StartsWith => field.starts_with(pattern),
            Op::EndsWith => field.ends_with(pattern),
            Op::Contains => field.contains(pattern),
            _ => false,
        }
    }
}

/// Owned comparison value stored inside a clause.
#[derive(Debug, Clone)]
pub enum ClauseValue {
    String(String),
    Number(Number),
    Enum(u32),
    /// Discriminant set for `Op::In`.
    EnumSet(Vec<u32>),
    Bool(bool),
    Regex(Regex),
}

impl From<String> for ClauseValue {
    fn from(s: String) -> Self {
        ClauseValue::String(s)
    }
}

impl From<&str> for ClauseValue {
    fn from(s: &str) -> Self {
        ClauseValue::String(s.to_string())
    }
}

impl From<Number> for ClauseValue {
    fn from(n: Number) -> Self {
        ClauseValue::Number(n)
    }
}

impl From<bool> for ClauseValue {
    fn from(b: bool) -> Self {
        ClauseValue::Bool(b)
    }
}

impl From<Regex> for ClauseValue {
    fn from(r: Regex) -> Self {
        ClauseValue::Regex(r)
    }
}

impl From<Vec<u32>> for ClauseValue {
    fn from(v: Vec<u32>) -> Self {
        ClauseValue::EnumSet(v)
    }
}

macro_rules! clause_number_from {
    ($($ty:ty),+) => {
        $(
            impl From<$ty> for ClauseValue {
                fn from(n: $ty) -> Self {
                    ClauseValue::Number(Number::from(n))
                }
            }
        )+
    };
}

clause_number_from!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f32, f64);
