//! Statement builder.
//!
//! One [`QueryBuilder`] renders one statement. Configuration calls may come
//! in any order; a terminal call (`select`, `count`, `insert`, `update`,
//! `delete`) consumes the builder and returns a [`BoundStatement`].
//!
//! # Example
//!
//! ```rust
//! use sqlasm_core::builder::{QueryBuilder, SqlValue};
//! use sqlasm_core::dialect::PostgresDialect;
//!
//! let dialect = PostgresDialect::new();
//! let stmt = QueryBuilder::new(&dialect)
//!     .table("users")
//!     .and_where("id = ?", [5])
//!     .update([("name", "Bob")])
//!     .unwrap();
//!
//! assert_eq!(stmt.sql, r#"UPDATE "users" SET "name"=$1 WHERE (id = $2);"#);
//! assert_eq!(stmt.args, vec![SqlValue::Text("Bob".into()), SqlValue::Int(5)]);
//! ```

mod assignment;
mod delete;
mod fragment;
mod insert;
mod query;
mod select;
mod update;
pub mod value;

pub use assignment::{raw, Assignment, RawExpr};
pub use fragment::count_placeholders;
pub use query::{BoundStatement, HasTable, NoTable, QueryBuilder};
pub use value::{SqlValue, ToSqlValue};
