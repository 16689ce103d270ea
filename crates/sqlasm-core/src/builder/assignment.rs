//! Values assigned to columns by INSERT and UPDATE.

use super::value::{SqlValue, ToSqlValue};

/// A literal SQL fragment carrying its own bound arguments.
///
/// Used as an UPDATE value when the new column value is an expression
/// (`visits + ?`, `now()`, ...) rather than a single bound scalar. Write
/// placeholders as `?`; they are renumbered for the target dialect.
///
/// **Warning**: the fragment is trusted verbatim. Never build it from user
/// input; pass user input through `args` instead.
#[derive(Debug, Clone, PartialEq)]
pub struct RawExpr {
    sql: String,
    args: Vec<SqlValue>,
}

impl RawExpr {
    /// The SQL fragment as written.
    #[must_use]
    pub fn sql(&self) -> &str {
        &self.sql
    }

    /// The fragment's own arguments, in placeholder order.
    #[must_use]
    pub fn args(&self) -> &[SqlValue] {
        &self.args
    }

    /// Splits the expression into its SQL text and arguments.
    #[must_use]
    pub fn into_parts(self) -> (String, Vec<SqlValue>) {
        (self.sql, self.args)
    }
}

/// Creates a raw expression from SQL text and its arguments.
#[must_use]
pub fn raw<I>(sql: impl Into<String>, args: I) -> RawExpr
where
    I: IntoIterator,
    I::Item: ToSqlValue,
{
    RawExpr {
        sql: sql.into(),
        args: args.into_iter().map(ToSqlValue::to_sql_value).collect(),
    }
}

/// The right-hand side of `"column" = ...` in an UPDATE.
#[derive(Debug, Clone, PartialEq)]
pub enum Assignment {
    /// Bind a single value through a placeholder.
    Value(SqlValue),
    /// Splice a raw expression and bind its arguments.
    Raw(RawExpr),
}

impl<T: ToSqlValue> From<T> for Assignment {
    fn from(value: T) -> Self {
        Self::Value(value.to_sql_value())
    }
}

impl From<RawExpr> for Assignment {
    fn from(expr: RawExpr) -> Self {
        Self::Raw(expr)
    }
}
