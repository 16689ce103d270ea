//! DELETE rendering.

use super::query::{Assembly, BoundStatement, HasTable, QueryBuilder};
use crate::error::Result;

impl QueryBuilder<'_, HasTable> {
    /// Builds `DELETE FROM <table>[ WHERE ..];`.
    ///
    /// **Warning**: without a predicate this deletes every row.
    ///
    /// # Errors
    ///
    /// Fails on an empty table or an empty or mis-counted predicate.
    pub fn delete(self) -> Result<BoundStatement> {
        let table = self.quoted_table()?;
        let mut asm = Assembly::new(self.dialect);

        asm.push("DELETE FROM");
        asm.push(&table);
        let where_sql = asm.where_clause(self.predicates)?;
        asm.push(&where_sql);

        Ok(asm.finish("DELETE"))
    }
}

#[cfg(test)]
mod tests {
    use crate::builder::{QueryBuilder, SqlValue};
    use crate::dialect::{GenericDialect, PostgresDialect};

    #[test]
    fn test_simple_delete() {
        let dialect = GenericDialect::new();
        let stmt = QueryBuilder::new(&dialect)
            .table("orders")
            .and_where("status = ?", ["cancelled"])
            .delete()
            .unwrap();

        assert_eq!(stmt.sql, "DELETE FROM \"orders\" WHERE (status = ?);");
        assert_eq!(stmt.args, vec![SqlValue::Text(String::from("cancelled"))]);
    }

    #[test]
    fn test_delete_all() {
        let dialect = GenericDialect::new();
        let stmt = QueryBuilder::new(&dialect).table("temp_data").delete().unwrap();

        assert_eq!(stmt.sql, "DELETE FROM \"temp_data\";");
        assert!(stmt.args.is_empty());
    }

    #[test]
    fn test_delete_postgres_multiple_predicates() {
        let dialect = PostgresDialect::new();
        let stmt = QueryBuilder::new(&dialect)
            .table("orders")
            .and_where("status = ?", ["cancelled"])
            .and_where("created_at < ?", ["2024-01-01"])
            .delete()
            .unwrap();

        assert_eq!(
            stmt.sql,
            "DELETE FROM \"orders\" WHERE (status = $1) AND (created_at < $2);"
        );
        assert_eq!(stmt.args.len(), 2);
    }

    #[test]
    fn test_delete_sql_injection_prevention() {
        let dialect = GenericDialect::new();
        let malicious = "1; DROP TABLE users; --";
        let stmt = QueryBuilder::new(&dialect)
            .table("users")
            .and_where("id = ?", [malicious])
            .delete()
            .unwrap();

        assert_eq!(stmt.sql, "DELETE FROM \"users\" WHERE (id = ?);");
        assert!(matches!(&stmt.args[0], SqlValue::Text(s) if s == malicious));
    }
}
