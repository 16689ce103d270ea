//! # sqlasm-core
//!
//! A dialect-aware assembler for parameterized SQL statements.
//!
//! This crate provides:
//! - A [`Dialect`] trait deciding identifier quoting and placeholder style
//! - A single-shot [`QueryBuilder`] rendering SELECT, COUNT, INSERT, UPDATE
//!   and DELETE statements
//! - Protection against SQL injection: identifiers are quoted and values are
//!   always bound, never inlined
//!
//! ## Argument ordering
//!
//! Every rendered statement comes back as a [`BoundStatement`] whose
//! arguments line up one to one with the placeholders in its text, read left
//! to right. Predicates and raw expressions are written with `?`; the builder
//! renumbers them for the dialect, so the same call chain is correct for
//! `?` and `$N` dialects alike:
//!
//! ```rust
//! use sqlasm_core::{GenericDialect, PostgresDialect, QueryBuilder, SqlValue};
//!
//! let generic = GenericDialect::new();
//! let (sql, args) = QueryBuilder::new(&generic)
//!     .table("users")
//!     .and_where("id = ?", [5])
//!     .update([("name", "Bob")])
//!     .unwrap()
//!     .into_parts();
//! assert_eq!(sql, r#"UPDATE "users" SET "name"=? WHERE (id = ?);"#);
//!
//! let postgres = PostgresDialect::new();
//! let stmt = QueryBuilder::new(&postgres)
//!     .table("users")
//!     .and_where("id = ?", [5])
//!     .update([("name", "Bob")])
//!     .unwrap();
//! assert_eq!(stmt.sql, r#"UPDATE "users" SET "name"=$1 WHERE (id = $2);"#);
//! assert_eq!(stmt.args, args);
//! ```
//!
//! ## Typestate
//!
//! Rendering is only available once a table is named, and rendering
//! consumes the builder:
//!
//! ```compile_fail
//! use sqlasm_core::{GenericDialect, QueryBuilder};
//!
//! let dialect = GenericDialect::new();
//! let _ = QueryBuilder::new(&dialect).select(); // no table yet
//! ```

#[cfg(feature = "sqlx-sqlite")]
pub mod bind;
pub mod builder;
pub mod dialect;
pub mod error;

pub use builder::{raw, Assignment, BoundStatement, QueryBuilder, RawExpr, SqlValue, ToSqlValue};
pub use dialect::{Dialect, GenericDialect, PlaceholderStyle, Placeholders, PostgresDialect};
pub use error::{BuildError, Result};
