//! PostgreSQL dialect.

use super::{Dialect, PlaceholderStyle};

/// PostgreSQL dialect.
///
/// Bound values are numbered (`$1`, `$2`, ...) in the order they appear in
/// the statement text. PostgreSQL has no `force index` hint.
#[derive(Debug, Default, Clone, Copy)]
pub struct PostgresDialect;

impl PostgresDialect {
    /// Creates a new PostgreSQL dialect.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Dialect for PostgresDialect {
    fn name(&self) -> &'static str {
        "postgres"
    }

    fn placeholder_style(&self) -> PlaceholderStyle {
        PlaceholderStyle::DollarNumbered
    }

    fn supports_index_hints(&self) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_postgres_dialect() {
        let dialect = PostgresDialect::new();
        assert_eq!(dialect.name(), "postgres");
        assert_eq!(dialect.quote_identifier("order"), "\"order\"");
        assert_eq!(dialect.placeholder_style(), PlaceholderStyle::DollarNumbered);
        assert!(!dialect.supports_index_hints());
    }
}
