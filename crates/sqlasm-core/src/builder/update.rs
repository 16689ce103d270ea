//! UPDATE rendering.

use super::assignment::Assignment;
use super::query::{sorted_params, Assembly, BoundStatement, HasTable, QueryBuilder};
use crate::error::Result;

impl QueryBuilder<'_, HasTable> {
    /// Builds `UPDATE <table> SET "a"=?,"b"=<expr>[ WHERE ..];` from a parameter map.
    ///
    /// Columns are sorted lexicographically. Plain values bind through a
    /// placeholder; [`RawExpr`](super::RawExpr) values are spliced in and bind
    /// their own arguments.
    ///
    /// Arguments follow the text for every dialect: all SET arguments (in
    /// column order) come first, then the WHERE arguments (in predicate
    /// order). Numbered dialects count straight through, so the first
    /// predicate placeholder continues from the last SET placeholder.
    ///
    /// # Errors
    ///
    /// Fails on an empty table, an empty map, an empty or duplicated column
    /// name, or an empty or mis-counted raw expression or predicate.
    pub fn update<I, K, V>(self, params: I) -> Result<BoundStatement>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<Assignment>,
    {
        let table = self.quoted_table()?;
        let params = sorted_params(params, "UPDATE", |value: V| -> Assignment { value.into() })?;
        let mut asm = Assembly::new(self.dialect);

        let mut sets = Vec::with_capacity(params.len());
        for (column, assignment) in params {
            let value = match assignment {
                Assignment::Value(value) => asm.bind(value),
                Assignment::Raw(expr) => {
                    let (sql, args) = expr.into_parts();
                    asm.splice(&sql, args)?
                }
            };
            sets.push(format!("{}={value}", asm.quote(&column)));
        }
        let where_sql = asm.where_clause(self.predicates)?;

        asm.push("UPDATE");
        asm.push(&table);
        asm.push("SET");
        asm.push(&sets.join(","));
        asm.push(&where_sql);

        Ok(asm.finish("UPDATE"))
    }
}

#[cfg(test)]
mod tests {
    use crate::builder::{raw, Assignment, QueryBuilder, SqlValue};
    use crate::dialect::{GenericDialect, PostgresDialect};
    use crate::error::BuildError;

    fn text(s: &str) -> SqlValue {
        SqlValue::Text(String::from(s))
    }

    #[test]
    fn test_update_generic() {
        let dialect = GenericDialect::new();
        let stmt = QueryBuilder::new(&dialect)
            .table("users")
            .and_where("id = ?", [5])
            .update([("name", "Bob")])
            .unwrap();

        assert_eq!(stmt.sql, "UPDATE \"users\" SET \"name\"=? WHERE (id = ?);");
        assert_eq!(stmt.args, vec![text("Bob"), SqlValue::Int(5)]);
    }

    #[test]
    fn test_update_postgres() {
        let dialect = PostgresDialect::new();
        let stmt = QueryBuilder::new(&dialect)
            .table("users")
            .and_where("id = ?", [5])
            .update([("name", "Bob")])
            .unwrap();

        assert_eq!(stmt.sql, "UPDATE \"users\" SET \"name\"=$1 WHERE (id = $2);");
        assert_eq!(stmt.args, vec![text("Bob"), SqlValue::Int(5)]);
    }

    #[test]
    fn test_update_raw_expression() {
        let dialect = PostgresDialect::new();
        let stmt = QueryBuilder::new(&dialect)
            .table("posts")
            .and_where("id = ?", [9])
            .update(vec![
                ("visits", Assignment::from(raw("visits + ?", [1]))),
                ("title", Assignment::from("Hello")),
                ("edited_at", Assignment::from(raw("now()", Vec::<SqlValue>::new()))),
            ])
            .unwrap();

        assert_eq!(
            stmt.sql,
            "UPDATE \"posts\" SET \"edited_at\"=now(),\"title\"=$1,\"visits\"=visits + $2 WHERE (id = $3);"
        );
        assert_eq!(
            stmt.args,
            vec![text("Hello"), SqlValue::Int(1), SqlValue::Int(9)]
        );
    }

    #[test]
    fn test_update_without_where() {
        let dialect = GenericDialect::new();
        let stmt = QueryBuilder::new(&dialect)
            .table("flags")
            .update([("enabled", false)])
            .unwrap();

        assert_eq!(stmt.sql, "UPDATE \"flags\" SET \"enabled\"=?;");
        assert_eq!(stmt.args, vec![SqlValue::Bool(false)]);
    }

    #[test]
    fn test_update_raw_mismatch_fails() {
        let dialect = GenericDialect::new();
        let err = QueryBuilder::new(&dialect)
            .table("posts")
            .update([("visits", raw("visits + ?", Vec::<SqlValue>::new()))])
            .unwrap_err();

        assert_eq!(
            err,
            BuildError::PlaceholderMismatch {
                fragment: String::from("visits + ?"),
                placeholders: 1,
                args: 0,
            }
        );
    }

    #[test]
    fn test_update_empty_raw_fails() {
        let dialect = GenericDialect::new();
        let err = QueryBuilder::new(&dialect)
            .table("posts")
            .update([("visits", raw(" ", Vec::<SqlValue>::new()))])
            .unwrap_err();
        assert_eq!(err, BuildError::EmptyFragment);
    }

    #[test]
    fn test_update_rejects_empty_map() {
        let dialect = GenericDialect::new();
        let err = QueryBuilder::new(&dialect)
            .table("users")
            .update(Vec::<(&str, Assignment)>::new())
            .unwrap_err();
        assert_eq!(err, BuildError::NoAssignments { statement: "UPDATE" });
    }
}
