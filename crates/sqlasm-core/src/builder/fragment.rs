//! Placeholder rewriting for caller-supplied SQL fragments.
//!
//! Predicates and raw expressions are written with `?` for every bound
//! value regardless of dialect. When a statement is rendered each `?` is
//! replaced by the dialect's next token, so numbering always follows text
//! order. `??` stands for a literal `?`. Question marks inside `'...'`,
//! `E'...'` (backslash escapes honoured), `"..."`, `` `...` ``, `-- ...`
//! line comments and `/* ... */` block comments are left alone. Block
//! comments do not nest. Fragments are wrapped in parentheses when rendered,
//! so a line comment should end with a newline.

use crate::dialect::Placeholders;
use crate::error::{BuildError, Result};

/// Counts the bind placeholders in a fragment.
#[must_use]
pub fn count_placeholders(fragment: &str) -> usize {
    let mut count = 0;
    scan(fragment, |piece| {
        if let Piece::Placeholder = piece {
            count += 1;
        }
    });
    count
}

/// Rewrites the placeholders of `fragment`, checking them against `args`.
pub(crate) fn rewrite(fragment: &str, args: usize, placeholders: &mut Placeholders) -> Result<String> {
    let found = count_placeholders(fragment);
    if found != args {
        return Err(BuildError::PlaceholderMismatch {
            fragment: fragment.to_string(),
            placeholders: found,
            args,
        });
    }

    let mut out = String::with_capacity(fragment.len() + args * 2);
    scan(fragment, |piece| match piece {
        Piece::Text(text) => out.push_str(text),
        Piece::LiteralQuestion => out.push('?'),
        Piece::Placeholder => out.push_str(&placeholders.next_token()),
    });
    Ok(out)
}

enum Piece<'a> {
    Text(&'a str),
    Placeholder,
    LiteralQuestion,
}

#[derive(Clone, Copy)]
enum State {
    Code,
    Quoted(u8),
    Escaped,
    LineComment,
    BlockComment,
}

fn scan<'a>(fragment: &'a str, mut emit: impl FnMut(Piece<'a>)) {
    let bytes = fragment.as_bytes();
    let mut state = State::Code;
    let mut start = 0;
    let mut i = 0;

    while i < bytes.len() {
        let b = bytes[i];
        let next = bytes.get(i + 1).copied();
        match state {
            // A doubled quote inside a quoted run closes and reopens it,
            // which leaves the state unchanged.
            State::Quoted(q) if b == q => state = State::Code,
            State::Quoted(_) => {}
            State::Escaped => match b {
                b'\\' => i += 1,
                b'\'' if next == Some(b'\'') => i += 1,
                b'\'' => state = State::Code,
                _ => {}
            },
            State::LineComment => {
                if b == b'\n' {
                    state = State::Code;
                }
            }
            State::BlockComment => {
                if b == b'*' && next == Some(b'/') {
                    state = State::Code;
                    i += 1;
                }
            }
            State::Code => match b {
                b'\'' if starts_escape_string(bytes, i) => state = State::Escaped,
                b'\'' | b'"' | b'`' => state = State::Quoted(b),
                b'-' if next == Some(b'-') => {
                    state = State::LineComment;
                    i += 1;
                }
                b'/' if next == Some(b'*') => {
                    state = State::BlockComment;
                    i += 1;
                }
                b'?' => {
                    emit(Piece::Text(&fragment[start..i]));
                    if next == Some(b'?') {
                        emit(Piece::LiteralQuestion);
                        i += 1;
                    } else {
                        emit(Piece::Placeholder);
                    }
                    start = i + 1;
                }
                _ => {}
            },
        }
        i += 1;
    }
    emit(Piece::Text(&fragment[start..]));
}

/// True when the quote at `i` opens an `E'...'` string: it follows a lone
/// `E` or `e` that is not the tail of a longer word.
fn starts_escape_string(bytes: &[u8], i: usize) -> bool {
    let Some(prefix) = i.checked_sub(1).map(|p| bytes[p]) else {
        return false;
    };
    if !matches!(prefix, b'E' | b'e') {
        return false;
    }
    i.checked_sub(2)
        .map(|p| bytes[p])
        .is_none_or(|before| !(before.is_ascii_alphanumeric() || before == b'_'))
}
