//! Runtime field values.
//!
//! [`Value`] is what a [`Fields`](crate::Fields) implementation hands back for
//! a named field. Clauses and orderings only ever look at records through it.

use std::cmp::Ordering;

/// Field value borrowed from a record.
///
/// # Example
///
/// ```
/// use querysheet_query::{Number, Value};
///
/// struct Person {
///     name: String,
///     age: u32,
/// }
///
/// fn accessor<'a>(person: &'a Person, field: &str) -> Value<'a> {
///     match field {
///         "name" => Value::String(&person.name),
///         "age" => Value::Number(Number::from(person.age)),
///         _ => Value::None,
///     }
/// }
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Value<'a> {
    /// String value (borrowed).
    String(&'a str),
    /// Numeric value.
    Number(Number),
    /// Discriminant of a closed set of variants.
    Enum(u32),
    /// Boolean value.
    Bool(bool),
    /// Field absent or not queryable.
    None,
}

impl Value<'_> {
    pub fn is_none(&self) -> bool {
        matches!(self, Value::None)
    }
}

/// Numeric value keeping the precision class of its source.
///
/// Mixed comparisons (an `i32` age against a `u64` literal, a salary against
/// a float threshold) go through `f64`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    I64(i64),
    U64(u64),
    F64(f64),
}

impl Number {
    pub fn to_f64(self) -> f64 {
        match self {
            Number::I64(n) => n as f64,
            Number::U64(n) => n as f64,
            Number::F64(n) => n,
        }
    }

    /// Compares two numbers. `None` only when a NaN is involved.
    pub fn compare(self, other: Number) -> Option<Ordering> {
        match (self, other) {
            (Number::I64(a), Number::I64(b)) => Some(a.cmp(&b)),
            (Number::U64(a), Number::U64(b)) => Some(a.cmp(&b)),
            (Number::F64(a), Number::F64(b)) => a.partial_cmp(&b),
            _ => self.to_f64().partial_cmp(&other.to_f64()),
        }
    }
}

impl PartialOrd for Number {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.compare(*other)
    }
}

macro_rules! number_from {
    ($variant:ident as $wide:ty: $($ty:ty),+) => {
        $(
            impl From<$ty> for Number {
                fn from(n: $ty) -> Self {
                    Number::$variant(n as $wide)
                }
            }
        )+
    };
}

number_from!(I64 as i64: i8, i16, i32, i64, isize);
number_from!(U64 as u64: u8, u16, u32, u64, usize);
number_from!(F64 as f64: f32, f64);
