//! INSERT rendering.

use super::query::{sorted_params, Assembly, BoundStatement, HasTable, QueryBuilder};
use super::value::ToSqlValue;
use crate::error::{BuildError, Result};

impl QueryBuilder<'_, HasTable> {
    /// Builds `INSERT INTO <table> ("a","b") VALUES(?,?);` from a parameter map.
    ///
    /// Columns are sorted lexicographically and values are bound in that
    /// same order, whatever the iteration order of `params`.
    ///
    /// # Errors
    ///
    /// Fails on an empty table, an empty map, an empty or duplicated column
    /// name, or when WHERE predicates were added (INSERT has no WHERE clause
    /// for their arguments to land in).
    pub fn insert<I, K, V>(self, params: I) -> Result<BoundStatement>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: ToSqlValue,
    {
        if self.has_where_clause() {
            return Err(BuildError::WhereNotSupported { statement: "INSERT" });
        }
        let table = self.quoted_table()?;
        let params = sorted_params(params, "INSERT", ToSqlValue::to_sql_value)?;
        let mut asm = Assembly::new(self.dialect);

        let mut columns = Vec::with_capacity(params.len());
        let mut values = Vec::with_capacity(params.len());
        for (column, value) in params {
            columns.push(asm.quote(&column));
            values.push(asm.bind(value));
        }

        asm.push("INSERT INTO");
        asm.push(&table);
        asm.push(&format!("({})", columns.join(",")));
        asm.push(&format!("VALUES({})", values.join(",")));

        Ok(asm.finish("INSERT"))
    }
}
