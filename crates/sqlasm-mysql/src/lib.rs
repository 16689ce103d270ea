//! # sqlasm-mysql
//!
//! MySQL dialect for `sqlasm-core`.
//!
//! # How MySQL differs from other dialects
//!
//! - **Identifier quoting**: MySQL quotes identifiers with backticks
//!   (`` ` ``) unless `ANSI_QUOTES` is enabled. See [identifiers].
//! - **[Index hints]**: `FORCE INDEX (...)` after a table name steers the
//!   optimizer to a named index.
//! - **Placeholders**: prepared statements use positional `?` markers.
//!
//! [identifiers]: https://dev.mysql.com/doc/refman/8.0/en/identifiers.html
//! [Index hints]: https://dev.mysql.com/doc/refman/8.0/en/index-hints.html
//!
//! ## Example
//!
//! ```rust
//! use sqlasm_core::QueryBuilder;
//! use sqlasm_mysql::MySqlDialect;
//!
//! let dialect = MySqlDialect::new();
//! let stmt = QueryBuilder::new(&dialect)
//!     .table("orders")
//!     .force_index("idx_status")
//!     .and_where("status = ?", ["open"])
//!     .select()
//!     .unwrap();
//!
//! assert_eq!(
//!     stmt.sql,
//!     "SELECT * FROM `orders` force index(idx_status) WHERE (status = ?);"
//! );
//! ```

mod dialect;

pub use dialect::MySqlDialect;
