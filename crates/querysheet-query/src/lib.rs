//! Eager query helpers for the querysheet cheatsheet.
//!
//! Two layers live here:
//!
//! - A clause-based [`Query`] over named record fields (through [`Fields`]),
//!   with AND/OR/NOT groups, multi-key ordering and skip/take paging.
//! - Slice helpers for the sequence primitives the standard [`Iterator`] API
//!   does not spell out: element retrieval with documented failures
//!   ([`element`]), extrema and averages ([`aggregate`]), suffix slicing
//!   ([`partition`]), set operations with custom equality ([`set`]) and
//!   type filtering over tagged enums ([`of_type`]).
//!
//! Everything is eager and works on slices. Where `Iterator` already has the
//! operation (`any`, `all`, `filter`, `take_while`, `chain`...) use it
//! directly.
//!
//! # Quick Start
//!
//! ```rust
//! use querysheet_query::{element, Fields, Number, Query, QueryError, Value};
//!
//! struct Person {
//!     name: &'static str,
//!     age: u32,
//! }
//!
//! impl Fields for Person {
//!     fn field(&self, name: &str) -> Value<'_> {
//!         match name {
//!             "name" => Value::String(self.name),
//!             "age" => Value::Number(Number::from(self.age)),
//!             _ => Value::None,
//!         }
//!     }
//! }
//!
//! let people = [
//!     Person { name: "Alice", age: 25 },
//!     Person { name: "Bob", age: 30 },
//!     Person { name: "Charlie", age: 20 },
//! ];
//!
//! let adults = Query::new().and_gte("age", 18u32).build();
//! assert!(adults.all(&people, Person::accessor));
//!
//! let youngest = Query::new().order_asc("age").build();
//! assert_eq!(youngest.first(&people, Person::accessor).unwrap().name, "Charlie");
//!
//! assert_eq!(
//!     element::single_where(&[1, 2, 3, 4, 5], |n| *n > 10),
//!     Err(QueryError::NoMatch)
//! );
//! ```

pub mod aggregate;
mod clause;
mod comparer;
pub mod element;
mod error;
mod op;
mod ordering;
pub mod partition;
mod query;
pub mod set;
mod traits;
mod value;

pub use clause::{Clause, ClauseValue};
pub use comparer::{CaseInsensitive, EqualityComparer};
pub use error::{QueryError, Result};
pub use op::Op;
pub use ordering::{compare_by_orderings, compare_values, Dir, OrderBy};
pub use query::Query;
pub use traits::{of_type, Discriminant, Fields, Variant};
pub use value::{Number, Value};
