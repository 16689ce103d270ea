//! SQL Dialect support.
//!
//! A dialect decides how identifiers are quoted and how bound values are
//! marked in statement text. Dialects are stateless and shared by reference;
//! anything that counts (numbered placeholders) lives in a [`Placeholders`]
//! generator created for a single statement.

mod generic;
mod postgres;

pub use generic::GenericDialect;
pub use postgres::PostgresDialect;

/// How a dialect marks bound values in statement text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaceholderStyle {
    /// `?` for every value (SQLite, MySQL, ODBC style).
    QuestionMark,
    /// `$1`, `$2`, ... numbered in order of appearance (PostgreSQL).
    DollarNumbered,
}

/// Per-statement placeholder generator.
///
/// Each call to [`next_token`](Self::next_token) yields the token for the
/// next bound value. For numbered styles the counter starts at 1 and is
/// never shared between statements.
#[derive(Debug, Clone)]
pub struct Placeholders {
    style: PlaceholderStyle,
    issued: usize,
}

impl Placeholders {
    /// Creates a generator that has issued no tokens yet.
    #[must_use]
    pub const fn new(style: PlaceholderStyle) -> Self {
        Self { style, issued: 0 }
    }

    /// Returns the token for the next bound value.
    pub fn next_token(&mut self) -> String {
        self.issued += 1;
        match self.style {
            PlaceholderStyle::QuestionMark => String::from("?"),
            PlaceholderStyle::DollarNumbered => format!("${}", self.issued),
        }
    }

    /// Number of tokens issued so far.
    #[must_use]
    pub const fn issued(&self) -> usize {
        self.issued
    }
}

/// Trait for SQL dialect-specific behavior.
///
/// Implementations must be stateless: a single instance is shared by every
/// builder targeting that dialect, possibly across threads.
pub trait Dialect: Send + Sync {
    /// Returns the name of the dialect.
    fn name(&self) -> &'static str;

    /// Returns the identifier quote character (e.g., `"` for standard SQL, `` ` `` for MySQL).
    fn identifier_quote(&self) -> char {
        '"'
    }

    /// Quotes an identifier, doubling any embedded quote character.
    ///
    /// Never fails: any input becomes a single quoted token.
    fn quote_identifier(&self, name: &str) -> String {
        let quote = self.identifier_quote();
        let mut quoted = String::with_capacity(name.len() + 2);
        quoted.push(quote);
        for c in name.chars() {
            if c == quote {
                quoted.push(quote);
            }
            quoted.push(c);
        }
        quoted.push(quote);
        quoted
    }

    /// Returns the parameter placeholder style.
    fn placeholder_style(&self) -> PlaceholderStyle {
        PlaceholderStyle::QuestionMark
    }

    /// Returns a fresh placeholder generator for one statement.
    fn placeholders(&self) -> Placeholders {
        Placeholders::new(self.placeholder_style())
    }

    /// Returns whether `force index(...)` table hints are accepted.
    fn supports_index_hints(&self) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_question_mark_placeholders_never_change() {
        let mut placeholders = Placeholders::new(PlaceholderStyle::QuestionMark);
        assert_eq!(placeholders.next_token(), "?");
        assert_eq!(placeholders.next_token(), "?");
        assert_eq!(placeholders.issued(), 2);
    }

    #[test]
    fn test_dollar_placeholders_count_from_one() {
        let mut placeholders = Placeholders::new(PlaceholderStyle::DollarNumbered);
        assert_eq!(placeholders.next_token(), "$1");
        assert_eq!(placeholders.next_token(), "$2");
        assert_eq!(placeholders.next_token(), "$3");
    }

    #[test]
    fn test_generators_are_independent() {
        let dialect = PostgresDialect::new();
        let mut first = dialect.placeholders();
        let mut second = dialect.placeholders();
        assert_eq!(first.next_token(), "$1");
        assert_eq!(first.next_token(), "$2");
        assert_eq!(second.next_token(), "$1");
    }

    #[test]
    fn test_quote_identifier_escapes_quote_char() {
        let dialect = GenericDialect::new();
        assert_eq!(dialect.quote_identifier("users"), "\"users\"");
        assert_eq!(dialect.quote_identifier("we\"ird"), "\"we\"\"ird\"");
        assert_eq!(
            dialect.quote_identifier("x\"; DROP TABLE t; --"),
            "\"x\"\"; DROP TABLE t; --\""
        );
    }

    #[test]
    fn test_dialects_are_object_safe() {
        let dialects: [&dyn Dialect; 2] = [&GenericDialect, &PostgresDialect];
        let names: Vec<&str> = dialects.iter().map(|d| d.name()).collect();
        assert_eq!(names, ["generic", "postgres"]);
    }
}
