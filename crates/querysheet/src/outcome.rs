//! What a snippet evaluates to, and how that is written down.

use std::fmt;

use querysheet_query::QueryError;
use serde::Serialize;

/// The value a snippet produces.
///
/// Failures of the underlying primitive are outcomes too, so a snippet that
/// demonstrates "single over two elements fails" still has something to
/// compare against its annotation.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum Outcome {
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
    List(Vec<Outcome>),
    Failure(String),
}

impl Outcome {
    pub fn is_failure(&self) -> bool {
        matches!(self, Outcome::Failure(_))
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Bool(b) => write!(f, "{b}"),
            Outcome::Int(n) => write!(f, "{n}"),
            // Debug keeps the fractional part: 3.0 rather than 3.
            Outcome::Float(x) => write!(f, "{x:?}"),
            Outcome::Text(s) => f.write_str(s),
            Outcome::List(items) => {
                f.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{item}")?;
                }
                f.write_str("]")
            }
            Outcome::Failure(message) => write!(f, "error: {message}"),
        }
    }
}

impl From<bool> for Outcome {
    fn from(b: bool) -> Self {
        Outcome::Bool(b)
    }
}

macro_rules! outcome_from_int {
    ($($ty:ty),+) => {
        $(
            impl From<$ty> for Outcome {
                fn from(n: $ty) -> Self {
                    Outcome::Int(i64::from(n))
                }
            }
        )+
    };
}

outcome_from_int!(i8, i16, i32, i64, u8, u16, u32);

impl From<usize> for Outcome {
    fn from(n: usize) -> Self {
        i64::try_from(n).map_or_else(|_| Outcome::Text(n.to_string()), Outcome::Int)
    }
}

impl From<f64> for Outcome {
    fn from(x: f64) -> Self {
        Outcome::Float(x)
    }
}

impl From<&str> for Outcome {
    fn from(s: &str) -> Self {
        Outcome::Text(s.to_string())
    }
}

impl From<String> for Outcome {
    fn from(s: String) -> Self {
        Outcome::Text(s)
    }
}

impl<T: Into<Outcome>> From<Vec<T>> for Outcome {
    fn from(items: Vec<T>) -> Self {
        Outcome::List(items.into_iter().map(Into::into).collect())
    }
}

impl From<QueryError> for Outcome {
    fn from(err: QueryError) -> Self {
        Outcome::Failure(err.to_string())
    }
}

impl<T: Into<Outcome>> From<Result<T, QueryError>> for Outcome {
    fn from(result: Result<T, QueryError>) -> Self {
        result.map_or_else(Outcome::from, Into::into)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scalars_render_plainly() {
        assert_eq!(Outcome::from(true).to_string(), "true");
        assert_eq!(Outcome::from(15).to_string(), "15");
        assert_eq!(Outcome::from("Alice").to_string(), "Alice");
    }

    #[test]
    fn floats_keep_their_fraction() {
        assert_eq!(Outcome::from(3.0).to_string(), "3.0");
        assert_eq!(Outcome::from(25.5).to_string(), "25.5");
        assert_eq!(Outcome::from(1200.0).to_string(), "1200.0");
    }

    #[test]
    fn lists_render_comma_separated() {
        assert_eq!(Outcome::from(vec![1, 2, 3]).to_string(), "[1, 2, 3]");
        assert_eq!(Outcome::from(Vec::<i32>::new()).to_string(), "[]");
        assert_eq!(
            Outcome::from(vec!["Alice".to_string(), "Bob".to_string()]).to_string(),
            "[Alice, Bob]"
        );
    }

    #[test]
    fn query_errors_become_failures() {
        let failed: Outcome = Err::<i32, _>(QueryError::NoMatch).into();
        assert!(failed.is_failure());
        assert_eq!(
            failed.to_string(),
            "error: sequence contains no matching element"
        );

        let ok: Outcome = Ok::<_, QueryError>(42).into();
        assert_eq!(ok, Outcome::Int(42));
    }

    #[test]
    fn serializes_with_kind_tags() {
        let json = serde_json::to_value(Outcome::from(vec![1, 2])).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "kind": "list",
                "value": [{"kind": "int", "value": 1}, {"kind": "int", "value": 2}]
            })
        );
    }
}
