//! SELECT and COUNT rendering.

use super::query::{Assembly, BoundStatement, HasTable, QueryBuilder};
use crate::error::{BuildError, Result};

impl QueryBuilder<'_, HasTable> {
    /// Builds the SELECT statement.
    ///
    /// `[<hint>] SELECT <fields> FROM <table>[ force index(..)][ WHERE ..][ ORDER BY ..][ LIMIT n][ OFFSET n];`
    ///
    /// # Errors
    ///
    /// Fails on an empty table, an empty or mis-counted predicate, or a
    /// force-index hint on a dialect without index hints.
    pub fn select(self) -> Result<BoundStatement> {
        let table = self.quoted_table()?;
        let mut asm = Assembly::new(self.dialect);

        asm.push(self.hint.as_deref().unwrap_or_default());
        asm.push("SELECT");
        if self.fields.is_empty() {
            asm.push("*");
        } else {
            asm.push(&self.fields.join(", "));
        }
        asm.push("FROM");
        asm.push(&table);

        if let Some(ref index) = self.force_index {
            if !self.dialect.supports_index_hints() {
                return Err(BuildError::IndexHintUnsupported {
                    dialect: self.dialect.name(),
                });
            }
            asm.push(&format!("force index({index})"));
        }

        let where_sql = asm.where_clause(self.predicates)?;
        asm.push(&where_sql);

        if let Some(ref order) = self.order_by {
            asm.push(&format!("ORDER BY {order}"));
        }
        if let Some(n) = self.limit {
            asm.push(&format!("LIMIT {n}"));
        }
        if let Some(n) = self.offset {
            asm.push(&format!("OFFSET {n}"));
        }

        Ok(asm.finish("SELECT"))
    }

    /// Builds `[<hint>] SELECT count(*) FROM <table>[ WHERE ..];`.
    ///
    /// Fields, ordering, paging and the index hint do not apply.
    ///
    /// # Errors
    ///
    /// Fails on an empty table or an empty or mis-counted predicate.
    pub fn count(self) -> Result<BoundStatement> {
        let table = self.quoted_table()?;
        let mut asm = Assembly::new(self.dialect);

        asm.push(self.hint.as_deref().unwrap_or_default());
        asm.push("SELECT count(*) FROM");
        asm.push(&table);
        let where_sql = asm.where_clause(self.predicates)?;
        asm.push(&where_sql);

        Ok(asm.finish("COUNT"))
    }
}
