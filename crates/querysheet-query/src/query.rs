//! Query builder and executor.
//!
//! A [`Query`] is built fluently, then run against a slice with a field
//! accessor (usually [`Fields::accessor`](crate::Fields::accessor)).
//! Execution is eager: every method walks the slice once and returns owned
//! results or references into it.

use regex::Regex;

use crate::clause::{Clause, ClauseValue};
use crate::error::{QueryError, Result};
use crate::op::Op;
use crate::ordering::{compare_by_orderings, Dir, OrderBy};
use crate::value::Value;

/// Filter, order and page a collection.
///
/// ```text
/// match = (all AND clauses match)
///       ∧ (at least one OR clause matches, OR no OR clauses exist)
///       ∧ (no NOT clause matches)
/// ```
///
/// # Example
///
/// ```
/// use querysheet_query::{Number, Query, Value};
///
/// struct Person {
///     name: &'static str,
///     age: u32,
/// }
///
/// fn accessor<'a>(p: &'a Person, field: &str) -> Value<'a> {
///     match field {
///         "name" => Value::String(p.name),
///         "age" => Value::Number(Number::from(p.age)),
///         _ => Value::None,
///     }
/// }
///
/// let people = [
///     Person { name: "Alice", age: 25 },
///     Person { name: "Bob", age: 30 },
///     Person { name: "Charlie", age: 20 },
/// ];
///
/// let older = Query::new().and_gt("age", 21u32).order_desc("age").build();
/// let names: Vec<_> = older.filter(&people, accessor).iter().map(|p| p.name).collect();
/// assert_eq!(names, ["Bob", "Alice"]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Query {
    and_clauses: Vec<Clause>,
    or_clauses: Vec<Clause>,
    not_clauses: Vec<Clause>,
    orderings: Vec<OrderBy>,
    skip: Option<usize>,
    take: Option<usize>,
}

macro_rules! shorthand {
    ($group:ident: $($name:ident => $op:ident),+ $(,)?) => {
        $(
            #[doc = concat!("Adds a `", stringify!($group), "` clause with `Op::", stringify!($op), "`.")]
            pub fn $name(self, field: &str, value: impl Into<ClauseValue>) -> Self {
                self.$group(field, Op::$op, value)
            }
        )+
    };
}

impl Query {
    /// Creates an empty query, which matches everything.
    pub fn new() -> Self {
        Query::default()
    }

    /// Adds an AND clause. All AND clauses must match.
    pub fn and(mut self, field: &str, op: Op, value: impl Into<ClauseValue>) -> Self {
        self.and_clauses.push(Clause::new(field, op, value));
        self
    }

    /// Adds an OR clause. At least one OR clause must match, if any exist.
    pub fn or(mut self, field: &str, op: Op, value: impl Into<ClauseValue>) -> Self {
        self.or_clauses.push(Clause::new(field, op, value));
        self
    }

    /// Adds a NOT clause. No NOT clause may match.
    pub fn not(mut self, field: &str, op: Op, value: impl Into<ClauseValue>) -> Self {
        self.not_clauses.push(Clause::new(field, op, value));
        self
    }

    shorthand!(and:
        and_eq => Eq,
        and_ne => Ne,
        and_gt => Gt,
        and_gte => Gte,
        and_lt => Lt,
        and_lte => Lte,
        and_contains => Contains,
        and_startswith => StartsWith,
        and_endswith => EndsWith,
    );

    shorthand!(or:
        or_eq => Eq,
        or_ne => Ne,
        or_gt => Gt,
        or_gte => Gte,
        or_lt => Lt,
        or_lte => Lte,
        or_contains => Contains,
        or_startswith => StartsWith,
        or_endswith => EndsWith,
    );

    shorthand!(not:
        not_eq => Eq,
        not_ne => Ne,
        not_gt => Gt,
        not_gte => Gte,
        not_lt => Lt,
        not_lte => Lte,
        not_contains => Contains,
        not_startswith => StartsWith,
        not_endswith => EndsWith,
    );

    /// Adds an AND regex clause.
    ///
    /// # Errors
    ///
    /// Returns [`QueryError::InvalidRegex`] when the pattern does not compile.
    pub fn and_regex(self, field: &str, pattern: &str) -> Result<Self> {
        let regex = Regex::new(pattern)?;
        Ok(self.and(field, Op::Regex, regex))
    }

    /// Adds an OR regex clause.
    pub fn or_regex(self, field: &str, pattern: &str) -> Result<Self> {
        let regex = Regex::new(pattern)?;
        Ok(self.or(field, Op::Regex, regex))
    }

    /// Adds a NOT regex clause.
    pub fn not_regex(self, field: &str, pattern: &str) -> Result<Self> {
        let regex = Regex::new(pattern)?;
        Ok(self.not(field, Op::Regex, regex))
    }

    /// Adds an AND clause requiring the discriminant to be in `values`.
    pub fn and_in<I>(self, field: &str, values: I) -> Self
    where
        I: IntoIterator<Item = u32>,
    {
        let set: Vec<u32> = values.into_iter().collect();
        self.and(field, Op::In, ClauseValue::EnumSet(set))
    }

    /// Adds a NOT clause excluding discriminants in `values`.
    pub fn not_in<I>(self, field: &str, values: I) -> Self
    where
        I: IntoIterator<Item = u32>,
    {
        let set: Vec<u32> = values.into_iter().collect();
        self.not(field, Op::In, ClauseValue::EnumSet(set))
    }

    /// Adds a sort key. Keys added later break ties of earlier ones.
    pub fn order_by(mut self, field: &str, dir: Dir) -> Self {
        self.orderings.push(OrderBy::new(field, dir));
        self
    }

    pub fn order_asc(self, field: &str) -> Self {
        self.order_by(field, Dir::Asc)
    }

    pub fn order_desc(self, field: &str) -> Self {
        self.order_by(field, Dir::Desc)
    }

    /// Skips the first `n` results (after ordering).
    pub fn skip(mut self, n: usize) -> Self {
        self.skip = Some(n);
        self
    }

    /// Keeps at most `n` results (after skipping).
    pub fn take(mut self, n: usize) -> Self {
        self.take = Some(n);
        self
    }

    /// Finalizes the query.
    pub fn build(self) -> Self {
        self
    }

    pub fn and_clauses(&self) -> &[Clause] {
        &self.and_clauses
    }

    pub fn or_clauses(&self) -> &[Clause] {
        &self.or_clauses
    }

    pub fn not_clauses(&self) -> &[Clause] {
        &self.not_clauses
    }

    pub fn orderings(&self) -> &[OrderBy] {
        &self.orderings
    }

    pub fn get_skip(&self) -> Option<usize> {
        self.skip
    }

    pub fn get_take(&self) -> Option<usize> {
        self.take
    }

    /// `true` if the query has no clauses and therefore matches everything.
    pub fn is_empty(&self) -> bool {
        self.and_clauses.is_empty() && self.or_clauses.is_empty() && self.not_clauses.is_empty()
    }

    /// Tests one item against the clause groups.
    pub fn matches<T, F>(&self, item: &T, accessor: F) -> bool
    where
        for<'a> F: Fn(&'a T, &str) -> Value<'a>,
    {
        let hit = |clause: &Clause| clause.matches(&accessor(item, &clause.field));

        self.and_clauses.iter().all(hit)
            && (self.or_clauses.is_empty() || self.or_clauses.iter().any(hit))
            && !self.not_clauses.iter().any(hit)
    }

    /// Returns matching items, ordered, then skipped and taken.
    ///
    /// Ordering is stable, so items with equal keys keep their input order.
    pub fn filter<'a, T, F>(&self, items: &'a [T], accessor: F) -> Vec<&'a T>
    where
        for<'b> F: Fn(&'b T, &str) -> Value<'b>,
    {
        let mut results: Vec<&'a T> = items
            .iter()
            .filter(|item| self.matches(*item, &accessor))
            .collect();

        if !self.orderings.is_empty() {
            results.sort_by(|a, b| compare_by_orderings(*a, *b, &self.orderings, &accessor));
        }

        results
            .into_iter()
            .skip(self.skip.unwrap_or(0))
            .take(self.take.unwrap_or(usize::MAX))
            .collect()
    }

    pub fn filter_cloned<T, F>(&self, items: &[T], accessor: F) -> Vec<T>
    where
        T: Clone,
        for<'a> F: Fn(&'a T, &str) -> Value<'a>,
    {
        self.filter(items, accessor).into_iter().cloned().collect()
    }

    /// Retains matching items in place. Ordering, skip and take are ignored.
    pub fn filter_mut<T, F>(&self, items: &mut Vec<T>, accessor: F)
    where
        for<'a> F: Fn(&'a T, &str) -> Value<'a>,
    {
        items.retain(|item| self.matches(item, &accessor));
    }

    pub fn count<T, F>(&self, items: &[T], accessor: F) -> usize
    where
        for<'a> F: Fn(&'a T, &str) -> Value<'a>,
    {
        items
            .iter()
            .filter(|item| self.matches(*item, &accessor))
            .count()
    }

    pub fn any<T, F>(&self, items: &[T], accessor: F) -> bool
    where
        for<'a> F: Fn(&'a T, &str) -> Value<'a>,
    {
        items.iter().any(|item| self.matches(item, &accessor))
    }

    /// `true` if every item matches. Vacuously `true` for an empty slice.
    pub fn all<T, F>(&self, items: &[T], accessor: F) -> bool
    where
        for<'a> F: Fn(&'a T, &str) -> Value<'a>,
    {
        items.iter().all(|item| self.matches(item, &accessor))
    }

    /// First matching item in input order, if any.
    pub fn find<'a, T, F>(&self, items: &'a [T], accessor: F) -> Option<&'a T>
    where
        for<'b> F: Fn(&'b T, &str) -> Value<'b>,
    {
        items.iter().find(|item| self.matches(*item, &accessor))
    }

    pub fn position<T, F>(&self, items: &[T], accessor: F) -> Option<usize>
    where
        for<'a> F: Fn(&'a T, &str) -> Value<'a>,
    {
        items.iter().position(|item| self.matches(item, &accessor))
    }

    /// First result of [`filter`](Self::filter).
    ///
    /// # Errors
    ///
    /// [`QueryError::NoMatch`] when a query with clauses finds nothing, even
    /// on empty input. [`QueryError::NoElements`] when a clause-free query
    /// yields nothing.
    pub fn first<'a, T, F>(&self, items: &'a [T], accessor: F) -> Result<&'a T>
    where
        for<'b> F: Fn(&'b T, &str) -> Value<'b>,
    {
        self.expect_results(self.filter(items, accessor).first().copied())
    }

    /// Last result of [`filter`](Self::filter). Fails like [`first`](Self::first).
    pub fn last<'a, T, F>(&self, items: &'a [T], accessor: F) -> Result<&'a T>
    where
        for<'b> F: Fn(&'b T, &str) -> Value<'b>,
    {
        self.expect_results(self.filter(items, accessor).last().copied())
    }

    /// The only result of [`filter`](Self::filter).
    ///
    /// # Errors
    ///
    /// Fails like [`first`](Self::first) when nothing matches, and with
    /// [`QueryError::MoreThanOneMatch`] (or `MoreThanOneElement` for an
    /// empty query) when several items do.
    pub fn single<'a, T, F>(&self, items: &'a [T], accessor: F) -> Result<&'a T>
    where
        for<'b> F: Fn(&'b T, &str) -> Value<'b>,
    {
        match self.filter(items, accessor).as_slice() {
            [only] => Ok(*only),
            [] => self.expect_results(None),
            _ if self.is_empty() => Err(QueryError::MoreThanOneElement),
            _ => Err(QueryError::MoreThanOneMatch),
        }
    }

    fn expect_results<'a, T>(&self, found: Option<&'a T>) -> Result<&'a T> {
        match found {
            Some(item) => Ok(item),
            None if self.is_empty() => Err(QueryError::NoElements),
            None => Err(QueryError::NoMatch),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::Number;

    #[derive(Debug, Clone, PartialEq)]
    struct Product {
        name: &'static str,
        price: f64,
        category: u32,
        in_stock: bool,
    }

    fn accessor<'a>(product: &'a Product, field: &str) -> Value<'a> {
        match field {
            "name" => Value::String(product.name),
            "price" => Value::Number(Number::F64(product.price)),
            "category" => Value::Enum(product.category),
            "in_stock" => Value::Bool(product.in_stock),
            _ => Value::None,
        }
    }

    fn catalog() -> Vec<Product> {
        vec![
            Product {
                name: "Laptop",
                price: 1200.0,
                category: 0,
                in_stock: true,
            },
            Product {
                name: "Mouse",
                price: 25.5,
                category: 1,
                in_stock: true,
            },
            Product {
                name: "Keyboard",
                price: 75.0,
                category: 1,
                in_stock: false,
            },
            Product {
                name: "Monitor",
                price: 199.5,
                category: 0,
                in_stock: true,
            },
        ]
    }

    fn names(results: &[&Product]) -> Vec<&'static str> {
        results.iter().map(|p| p.name).collect()
    }

    #[test]
    fn empty_query_matches_all() {
        let products = catalog();
        let query = Query::new().build();
        assert!(query.is_empty());
        assert_eq!(query.filter(&products, accessor).len(), 4);
    }

    #[test]
    fn and_clauses_all_apply() {
        let products = catalog();
        let query = Query::new()
            .and_lt("price", 100.0f64)
            .and_eq("in_stock", true)
            .build();
        assert_eq!(names(&query.filter(&products, accessor)), ["Mouse"]);
    }

    #[test]
    fn or_and_not_groups() {
        let products = catalog();
        let query = Query::new()
            .or_startswith("name", "M")
            .or_startswith("name", "K")
            .not_eq("in_stock", false)
            .build();
        assert_eq!(
            names(&query.filter(&products, accessor)),
            ["Mouse", "Monitor"]
        );
    }

    #[test]
    fn enum_set_clauses() {
        let products = catalog();
        let peripherals = Query::new().and_in("category", [1]).build();
        assert_eq!(peripherals.count(&products, accessor), 2);

        let others = Query::new().not_in("category", [1]).build();
        assert_eq!(
            names(&others.filter(&products, accessor)),
            ["Laptop", "Monitor"]
        );
    }

    #[test]
    fn regex_clauses() {
        let products = catalog();
        let query = Query::new().and_regex("name", "^M.*e$").unwrap().build();
        assert_eq!(names(&query.filter(&products, accessor)), ["Mouse"]);

        let not_m = Query::new().not_regex("name", "^M").unwrap().build();
        assert_eq!(names(&not_m.filter(&products, accessor)), ["Laptop", "Keyboard"]);

        let either = Query::new()
            .or_regex("name", "^L")
            .unwrap()
            .or_regex("name", "^K")
            .unwrap()
            .build();
        assert_eq!(either.count(&products, accessor), 2);

        assert!(matches!(
            Query::new().and_regex("name", "("),
            Err(QueryError::InvalidRegex(_))
        ));
    }

    #[test]
    fn ordering_then_paging() {
        let products = catalog();
        let query = Query::new().order_desc("price").skip(1).take(2).build();
        assert_eq!(
            names(&query.filter(&products, accessor)),
            ["Monitor", "Keyboard"]
        );
    }

    #[test]
    fn secondary_ordering() {
        let products = catalog();
        let query = Query::new()
            .order_asc("category")
            .order_asc("name")
            .build();
        assert_eq!(
            names(&query.filter(&products, accessor)),
            ["Laptop", "Monitor", "Keyboard", "Mouse"]
        );
    }

    #[test]
    fn skip_past_the_end_is_empty() {
        let products = catalog();
        let query = Query::new().skip(10).build();
        assert!(query.filter(&products, accessor).is_empty());
    }

    #[test]
    fn quantifiers() {
        let products = catalog();
        let pricey = Query::new().and_gt("price", 100.0f64).build();
        assert!(pricey.any(&products, accessor));
        assert!(!pricey.all(&products, accessor));
        assert!(pricey.all(&[] as &[Product], accessor));
        assert_eq!(pricey.count(&products, accessor), 2);
    }

    #[test]
    fn find_and_position() {
        let products = catalog();
        let query = Query::new().and_contains("name", "o").build();
        assert_eq!(query.find(&products, accessor).map(|p| p.name), Some("Laptop"));
        assert_eq!(query.position(&products, accessor), Some(0));

        let none = Query::new().and_eq("name", "Tablet").build();
        assert_eq!(none.position(&products, accessor), None);
    }

    #[test]
    fn filter_cloned_and_mut() {
        let mut products = catalog();
        let query = Query::new().and_eq("in_stock", true).order_asc("price").build();
        let cloned = query.filter_cloned(&products, accessor);
        assert_eq!(cloned[0].name, "Mouse");

        query.filter_mut(&mut products, accessor);
        assert_eq!(products.len(), 3);
        assert_eq!(products[0].name, "Laptop");
    }

    #[test]
    fn first_last_single() {
        let products = catalog();
        let cheap = Query::new().and_lt("price", 100.0f64).build();
        assert_eq!(cheap.first(&products, accessor).unwrap().name, "Mouse");
        assert_eq!(cheap.last(&products, accessor).unwrap().name, "Keyboard");
        assert_eq!(cheap.single(&products, accessor), Err(QueryError::MoreThanOneMatch));

        let laptop = Query::new().and_eq("name", "Laptop").build();
        assert_eq!(laptop.single(&products, accessor).unwrap().price, 1200.0);

        let absent = Query::new().and_eq("name", "Tablet").build();
        assert_eq!(absent.first(&products, accessor), Err(QueryError::NoMatch));
        assert_eq!(absent.single(&products, accessor), Err(QueryError::NoMatch));
    }

    #[test]
    fn clauses_over_empty_input_report_no_match() {
        let nothing: &[Product] = &[];
        let cheap = Query::new().and_lt("price", 100.0f64).build();
        assert_eq!(cheap.first(nothing, accessor), Err(QueryError::NoMatch));
        assert_eq!(cheap.last(nothing, accessor), Err(QueryError::NoMatch));
        assert_eq!(cheap.single(nothing, accessor), Err(QueryError::NoMatch));
    }

    #[test]
    fn unfiltered_failures_report_elements() {
        let products = catalog();
        let everything = Query::new().build();
        assert_eq!(
            everything.single(&products, accessor),
            Err(QueryError::MoreThanOneElement)
        );
        assert_eq!(
            everything.first(&[] as &[Product], accessor),
            Err(QueryError::NoElements)
        );
    }

    #[test]
    fn introspection() {
        let query = Query::new()
            .and_eq("a", "1")
            .or_eq("b", "2")
            .not_eq("c", "3")
            .order_asc("d")
            .skip(5)
            .take(10)
            .build();

        assert_eq!(query.and_clauses().len(), 1);
        assert_eq!(query.or_clauses().len(), 1);
        assert_eq!(query.not_clauses().len(), 1);
        assert_eq!(query.orderings().len(), 1);
        assert_eq!(query.get_skip(), Some(5));
        assert_eq!(query.get_take(), Some(10));
        assert!(!query.is_empty());
    }
}
