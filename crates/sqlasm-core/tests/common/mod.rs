#![allow(dead_code)]

use sqlasm_core::builder::count_placeholders;
use sqlasm_core::{BoundStatement, PlaceholderStyle};

/// Collects the `$N` numbers of a rendered statement, in text order.
pub fn dollar_numbers(sql: &str) -> Vec<usize> {
    let mut numbers = vec![];
    let mut chars = sql.char_indices().peekable();
    while let Some((_, c)) = chars.next() {
        if c != '$' {
            continue;
        }
        let mut digits = String::new();
        while let Some(&(_, d)) = chars.peek() {
            if !d.is_ascii_digit() {
                break;
            }
            digits.push(d);
            chars.next();
        }
        if let Ok(n) = digits.parse() {
            numbers.push(n);
        }
    }
    numbers
}

/// Asserts the invariants every rendered statement must hold:
/// a single trailing `;` with no whitespace before it, and exactly one
/// placeholder per argument (numbered 1..=n for `$N` dialects).
pub fn assert_well_formed(stmt: &BoundStatement, style: PlaceholderStyle) {
    let sql = &stmt.sql;
    assert!(sql.ends_with(';'), "missing terminator: {sql}");
    assert!(!sql.ends_with(";;"), "doubled terminator: {sql}");
    let body = &sql[..sql.len() - 1];
    assert_eq!(body, body.trim_end(), "whitespace before terminator: {sql:?}");
    assert!(!sql.contains("  "), "doubled space: {sql:?}");

    match style {
        PlaceholderStyle::QuestionMark => {
            assert_eq!(
                count_placeholders(body),
                stmt.args.len(),
                "placeholder/argument mismatch: {sql}"
            );
        }
        PlaceholderStyle::DollarNumbered => {
            let expected: Vec<usize> = (1..=stmt.args.len()).collect();
            assert_eq!(dollar_numbers(body), expected, "bad numbering: {sql}");
        }
    }
}
