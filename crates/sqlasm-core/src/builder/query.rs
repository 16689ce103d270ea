//! Single-statement builder state and the shared rendering machinery.

use std::collections::BTreeMap;
use std::fmt;
use std::marker::PhantomData;

use tracing::debug;

use super::fragment;
use super::value::{SqlValue, ToSqlValue};
use crate::dialect::{Dialect, Placeholders};
use crate::error::{BuildError, Result};

// Typestate markers

/// Marker: No table specified yet.
#[derive(Debug, Clone, Copy)]
pub struct NoTable;
/// Marker: Table has been specified.
#[derive(Debug, Clone, Copy)]
pub struct HasTable;

/// A rendered statement and the values for its placeholders.
///
/// The two halves belong together: `args[i]` is the value for the `i`-th
/// placeholder of `sql`, counting left to right.
#[derive(Debug, Clone, PartialEq)]
pub struct BoundStatement {
    /// Statement text, terminated by a single `;`.
    pub sql: String,
    /// Bound arguments in placeholder order.
    pub args: Vec<SqlValue>,
}

impl BoundStatement {
    /// Splits the statement into its text and arguments.
    #[must_use]
    pub fn into_parts(self) -> (String, Vec<SqlValue>) {
        (self.sql, self.args)
    }
}

#[derive(Debug, Clone)]
pub(super) struct Predicate {
    sql: String,
    args: Vec<SqlValue>,
}

/// Builder for one SQL statement against one table.
///
/// Configure it in any order, then call exactly one of
/// [`select`](Self::select), [`count`](Self::count),
/// [`insert`](Self::insert), [`update`](Self::update) or
/// [`delete`](Self::delete). These consume the builder, so a rendered
/// builder cannot be reconfigured or rendered again. Clone it first to render
/// several statements from one configuration.
///
/// Uses the typestate pattern to ensure that rendering is only available
/// once a table has been named.
pub struct QueryBuilder<'d, Table> {
    pub(super) dialect: &'d dyn Dialect,
    pub(super) table: String,
    pub(super) fields: Vec<String>,
    pub(super) force_index: Option<String>,
    pub(super) predicates: Vec<Predicate>,
    pub(super) order_by: Option<String>,
    pub(super) limit: Option<u64>,
    pub(super) offset: Option<u64>,
    pub(super) hint: Option<String>,
    _state: PhantomData<Table>,
}

impl<'d> QueryBuilder<'d, NoTable> {
    /// Creates an empty builder for `dialect`.
    #[must_use]
    pub fn new(dialect: &'d dyn Dialect) -> Self {
        Self {
            dialect,
            table: String::new(),
            fields: vec![],
            force_index: None,
            predicates: vec![],
            order_by: None,
            limit: None,
            offset: None,
            hint: None,
            _state: PhantomData,
        }
    }

    /// Specifies the target table. The name is quoted by the dialect.
    #[must_use]
    pub fn table(self, table: &str) -> QueryBuilder<'d, HasTable> {
        QueryBuilder {
            dialect: self.dialect,
            table: String::from(table),
            fields: self.fields,
            force_index: self.force_index,
            predicates: self.predicates,
            order_by: self.order_by,
            limit: self.limit,
            offset: self.offset,
            hint: self.hint,
            _state: PhantomData,
        }
    }
}

impl<'d, Table> QueryBuilder<'d, Table> {
    /// Specifies the projected fields of a SELECT, rendered verbatim.
    ///
    /// Defaults to `*`.
    #[must_use]
    pub fn fields(mut self, cols: &[&str]) -> Self {
        self.fields = cols.iter().map(|s| String::from(*s)).collect();
        self
    }

    /// Adds a `force index(<index>)` hint after the table of a SELECT.
    #[must_use]
    pub fn force_index(mut self, index: &str) -> Self {
        self.force_index = non_empty(index);
        self
    }

    /// Adds a WHERE predicate, conjoined with earlier ones using `AND`.
    ///
    /// The first predicate renders as `WHERE (<fragment>)`, later ones
    /// append ` AND (<fragment>)`. Write every bound value as `?` whatever
    /// the dialect; `args` must supply one value per `?`, in order.
    ///
    /// Predicates are the only place positional arguments enter the builder.
    /// INSERT and UPDATE values come from their parameter maps.
    #[must_use]
    pub fn and_where<I>(mut self, fragment: impl Into<String>, args: I) -> Self
    where
        I: IntoIterator,
        I::Item: ToSqlValue,
    {
        self.predicates.push(Predicate {
            sql: fragment.into(),
            args: args.into_iter().map(ToSqlValue::to_sql_value).collect(),
        });
        self
    }

    /// Sets the ORDER BY fragment, rendered verbatim.
    #[must_use]
    pub fn order_by(mut self, order: &str) -> Self {
        self.order_by = non_empty(order);
        self
    }

    /// Sets LIMIT.
    #[must_use]
    pub const fn limit(mut self, n: u64) -> Self {
        self.limit = Some(n);
        self
    }

    /// Sets OFFSET.
    #[must_use]
    pub const fn offset(mut self, n: u64) -> Self {
        self.offset = Some(n);
        self
    }

    /// Sets raw text placed before SELECT (for optimizer hints such as
    /// `/*+ MAX_EXECUTION_TIME(1000) */`).
    #[must_use]
    pub fn hint(mut self, hint: &str) -> Self {
        self.hint = non_empty(hint);
        self
    }

    /// Returns true if at least one WHERE predicate was added.
    #[must_use]
    pub const fn has_where_clause(&self) -> bool {
        !self.predicates.is_empty()
    }
}

impl QueryBuilder<'_, HasTable> {
    pub(super) fn quoted_table(&self) -> Result<String> {
        if self.table.trim().is_empty() {
            return Err(BuildError::EmptyTable);
        }
        Ok(self.dialect.quote_identifier(&self.table))
    }
}

impl<Table> Clone for QueryBuilder<'_, Table> {
    fn clone(&self) -> Self {
        Self {
            dialect: self.dialect,
            table: self.table.clone(),
            fields: self.fields.clone(),
            force_index: self.force_index.clone(),
            predicates: self.predicates.clone(),
            order_by: self.order_by.clone(),
            limit: self.limit,
            offset: self.offset,
            hint: self.hint.clone(),
            _state: PhantomData,
        }
    }
}

impl<Table> fmt::Debug for QueryBuilder<'_, Table> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QueryBuilder")
            .field("dialect", &self.dialect.name())
            .field("table", &self.table)
            .field("fields", &self.fields)
            .field("force_index", &self.force_index)
            .field("predicates", &self.predicates)
            .field("order_by", &self.order_by)
            .field("limit", &self.limit)
            .field("offset", &self.offset)
            .field("hint", &self.hint)
            .finish()
    }
}

fn non_empty(s: &str) -> Option<String> {
    let s = s.trim();
    (!s.is_empty()).then(|| String::from(s))
}

/// Sorts a parameter map by column name.
///
/// Input iteration order never reaches the output: a `HashMap` and a
/// `Vec` of the same pairs render identically.
pub(super) fn sorted_params<I, K, V, T>(
    params: I,
    statement: &'static str,
    convert: impl Fn(V) -> T,
) -> Result<BTreeMap<String, T>>
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
{
    let mut sorted = BTreeMap::new();
    for (column, value) in params {
        let column = column.into();
        if column.is_empty() {
            return Err(BuildError::EmptyColumn);
        }
        if sorted.contains_key(&column) {
            return Err(BuildError::DuplicateColumn(column));
        }
        sorted.insert(column, convert(value));
    }
    if sorted.is_empty() {
        return Err(BuildError::NoAssignments { statement });
    }
    Ok(sorted)
}

/// Accumulates statement text and arguments while a statement is rendered.
///
/// Placeholders are issued strictly in the order segments are rendered,
/// which is the order they appear in the text.
pub(super) struct Assembly<'d> {
    dialect: &'d dyn Dialect,
    placeholders: Placeholders,
    segments: Vec<String>,
    args: Vec<SqlValue>,
}

impl<'d> Assembly<'d> {
    pub(super) fn new(dialect: &'d dyn Dialect) -> Self {
        Self {
            dialect,
            placeholders: dialect.placeholders(),
            segments: vec![],
            args: vec![],
        }
    }

    /// Appends a segment; blank segments are dropped.
    pub(super) fn push(&mut self, segment: &str) {
        let segment = segment.trim();
        if !segment.is_empty() {
            self.segments.push(String::from(segment));
        }
    }

    pub(super) fn quote(&self, identifier: &str) -> String {
        self.dialect.quote_identifier(identifier)
    }

    /// Binds a single value and returns its placeholder token.
    pub(super) fn bind(&mut self, value: SqlValue) -> String {
        self.args.push(value);
        self.placeholders.next_token()
    }

    /// Renumbers a caller fragment and binds its arguments.
    pub(super) fn splice(&mut self, sql: &str, args: Vec<SqlValue>) -> Result<String> {
        if sql.trim().is_empty() {
            return Err(BuildError::EmptyFragment);
        }
        let rendered = fragment::rewrite(sql, args.len(), &mut self.placeholders)?;
        self.args.extend(args);
        Ok(rendered)
    }

    /// Renders `WHERE (p1) AND (p2) ...`, or an empty string without predicates.
    pub(super) fn where_clause(&mut self, predicates: Vec<Predicate>) -> Result<String> {
        let mut parts = Vec::with_capacity(predicates.len());
        for predicate in predicates {
            parts.push(format!("({})", self.splice(&predicate.sql, predicate.args)?));
        }
        if parts.is_empty() {
            return Ok(String::new());
        }
        Ok(format!("WHERE {}", parts.join(" AND ")))
    }

    /// Joins the segments and terminates the statement.
    pub(super) fn finish(self, statement: &'static str) -> BoundStatement {
        let mut sql = self.segments.join(" ");
        sql.truncate(sql.trim_end().len());
        sql.push(';');

        debug_assert_eq!(self.placeholders.issued(), self.args.len());
        debug!(
            dialect = self.dialect.name(),
            args = self.args.len(),
            "assembled {statement}: {sql}"
        );

        BoundStatement {
            sql,
            args: self.args,
        }
    }
}
