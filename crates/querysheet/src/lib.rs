//! # querysheet
//!
//! A runnable cheatsheet of sequence query operations: any, all, count,
//! contains, ordering, aggregates, element access, filtering, partitioning,
//! type filtering and set operations, each shown over small literal
//! collections of people, employees, products and creatures.
//!
//! Every [`Snippet`] carries the output the cheatsheet promises. Running it
//! yields an [`Outcome`] whose rendering must match that annotation exactly,
//! which [`verify`] checks for the whole [`Catalog`].
//!
//! ```
//! use querysheet::{Catalog, Section};
//!
//! let catalog = Catalog::new();
//! let sum = catalog.get("sum_numbers").unwrap();
//! assert_eq!(sum.section, Section::Sum);
//! assert_eq!(sum.run().to_string(), sum.expected);
//! ```
//!
//! The queries themselves live in the `querysheet-query` crate.

pub mod catalog;
pub mod cli;
pub mod logging;
pub mod outcome;
pub mod records;
pub mod verify;

mod snippets;

pub use catalog::{Catalog, CatalogError, Section, Snippet};
pub use outcome::Outcome;
pub use verify::{check, verify, Report, Summary};
