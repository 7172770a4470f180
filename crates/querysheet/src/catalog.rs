//! The snippet catalog.
//!
//! A [`Snippet`] is one annotated demonstration: a section, a unique name,
//! the output written next to it in the cheatsheet, and the function that
//! computes the real output. [`Catalog`] owns every snippet and answers
//! lookups using the same query engine the snippets demonstrate.

use std::fmt;

use clap::ValueEnum;
use querysheet_query::{Discriminant, Fields, Number, Query, Value};
use serde::Serialize;
use thiserror::Error;
use tracing::debug;

use crate::outcome::Outcome;
use crate::snippets;

/// Operation group a snippet belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Section {
    Any,
    All,
    Count,
    Contains,
    OrderBy,
    Min,
    Max,
    Sum,
    Average,
    ElementAt,
    First,
    Last,
    Single,
    Where,
    Take,
    Skip,
    OfType,
    Distinct,
    Except,
    Concat,
}

impl Section {
    pub const ALL: [Section; 20] = [
        Section::Any,
        Section::All,
        Section::Count,
        Section::Contains,
        Section::OrderBy,
        Section::Min,
        Section::Max,
        Section::Sum,
        Section::Average,
        Section::ElementAt,
        Section::First,
        Section::Last,
        Section::Single,
        Section::Where,
        Section::Take,
        Section::Skip,
        Section::OfType,
        Section::Distinct,
        Section::Except,
        Section::Concat,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Section::Any => "any",
            Section::All => "all",
            Section::Count => "count",
            Section::Contains => "contains",
            Section::OrderBy => "order-by",
            Section::Min => "min",
            Section::Max => "max",
            Section::Sum => "sum",
            Section::Average => "average",
            Section::ElementAt => "element-at",
            Section::First => "first",
            Section::Last => "last",
            Section::Single => "single",
            Section::Where => "where",
            Section::Take => "take",
            Section::Skip => "skip",
            Section::OfType => "of-type",
            Section::Distinct => "distinct",
            Section::Except => "except",
            Section::Concat => "concat",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl Discriminant for Section {
    fn discriminant(&self) -> u32 {
        *self as u32
    }
}

/// One annotated demonstration.
#[derive(Debug, Clone, Copy)]
pub struct Snippet {
    pub section: Section,
    pub name: &'static str,
    /// Rendered output the cheatsheet promises.
    pub expected: &'static str,
    compute: fn() -> Outcome,
}

impl Snippet {
    pub const SECTION: &'static str = "section";
    pub const NAME: &'static str = "name";

    pub const fn new(
        section: Section,
        name: &'static str,
        expected: &'static str,
        compute: fn() -> Outcome,
    ) -> Self {
        Snippet {
            section,
            name,
            expected,
            compute,
        }
    }

    /// Evaluates the snippet.
    pub fn run(&self) -> Outcome {
        let outcome = (self.compute)();
        debug!(section = %self.section, snippet = self.name, %outcome, "snippet evaluated");
        outcome
    }
}

impl Fields for Snippet {
    fn field(&self, name: &str) -> Value<'_> {
        match name {
            Snippet::SECTION => self.section.value(),
            Snippet::NAME => Value::String(self.name),
            "expected" => Value::String(self.expected),
            "failure" => Value::Bool(self.expected.starts_with("error:")),
            "order" => Value::Number(Number::from(self.section.discriminant())),
            _ => Value::None,
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error("no snippet named '{0}'")]
    UnknownSnippet(String),

    #[error("snippet '{name}' belongs to section '{actual}', not '{requested}'")]
    SectionMismatch {
        name: String,
        requested: Section,
        actual: Section,
    },
}

/// Every snippet of the cheatsheet, in presentation order.
#[derive(Debug, Clone)]
pub struct Catalog {
    snippets: Vec<Snippet>,
}

impl Default for Catalog {
    fn default() -> Self {
        Catalog::new()
    }
}

impl Catalog {
    pub fn new() -> Self {
        Catalog::from_snippets(snippets::all())
    }

    /// Builds a catalog from arbitrary snippets, ordered by section.
    pub fn from_snippets(snippets: Vec<Snippet>) -> Self {
        let ordered = Query::new()
            .order_asc("order")
            .build()
            .filter_cloned(&snippets, Snippet::accessor);
        Catalog { snippets: ordered }
    }

    pub fn snippets(&self) -> &[Snippet] {
        &self.snippets
    }

    pub fn len(&self) -> usize {
        self.snippets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snippets.is_empty()
    }

    /// Snippets of one section, in catalog order.
    pub fn section(&self, section: Section) -> Vec<&Snippet> {
        Query::new()
            .and_in(Snippet::SECTION, [section.discriminant()])
            .build()
            .filter(&self.snippets, Snippet::accessor)
    }

    /// Sections that hold at least one snippet.
    pub fn sections(&self) -> Vec<Section> {
        Section::ALL
            .into_iter()
            .filter(|section| {
                Query::new()
                    .and_in(Snippet::SECTION, [section.discriminant()])
                    .build()
                    .any(&self.snippets, Snippet::accessor)
            })
            .collect()
    }

    /// Looks a snippet up by name.
    pub fn get(&self, name: &str) -> Result<&Snippet, CatalogError> {
        Query::new()
            .and_eq(Snippet::NAME, name)
            .build()
            .find(&self.snippets, Snippet::accessor)
            .ok_or_else(|| CatalogError::UnknownSnippet(name.to_string()))
    }

    /// Narrows the catalog by optional section and name.
    pub fn select(
        &self,
        section: Option<Section>,
        name: Option<&str>,
    ) -> Result<Vec<&Snippet>, CatalogError> {
        match (section, name) {
            (_, Some(name)) => {
                let snippet = self.get(name)?;
                match section {
                    Some(requested) if requested != snippet.section => {
                        Err(CatalogError::SectionMismatch {
                            name: name.to_string(),
                            requested,
                            actual: snippet.section,
                        })
                    }
                    _ => Ok(vec![snippet]),
                }
            }
            (Some(section), None) => Ok(self.section(section)),
            (None, None) => Ok(self.snippets.iter().collect()),
        }
    }

    /// Snippets whose annotation is a failure.
    pub fn failures(&self) -> Vec<&Snippet> {
        Query::new()
            .and_eq("failure", true)
            .build()
            .filter(&self.snippets, Snippet::accessor)
    }
}
