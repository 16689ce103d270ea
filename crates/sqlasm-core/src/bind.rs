//! Binding rendered arguments onto `sqlx` queries.

use sqlx::query::Query;
use sqlx::sqlite::{Sqlite, SqliteArguments};

use crate::builder::{BoundStatement, SqlValue};

/// Binds `args` onto a SQLite query, in order.
#[must_use]
pub fn bind_sqlite<'q>(
    mut query: Query<'q, Sqlite, SqliteArguments<'q>>,
    args: Vec<SqlValue>,
) -> Query<'q, Sqlite, SqliteArguments<'q>> {
    for arg in args {
        query = match arg {
            SqlValue::Null => query.bind(None::<String>),
            SqlValue::Bool(b) => query.bind(b),
            SqlValue::Int(n) => query.bind(n),
            SqlValue::Float(x) => query.bind(x),
            SqlValue::Text(s) => query.bind(s),
            SqlValue::Blob(bytes) => query.bind(bytes),
        };
    }
    query
}

impl BoundStatement {
    /// Prepares this statement as a SQLite query with its arguments bound.
    #[must_use]
    pub fn to_sqlite_query(&self) -> Query<'_, Sqlite, SqliteArguments<'_>> {
        bind_sqlite(sqlx::query(&self.sql), self.args.clone())
    }
}
