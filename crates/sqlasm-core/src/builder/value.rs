//! Bound argument values.
//!
//! Values never appear in statement text; they travel next to it in the
//! argument list of a [`BoundStatement`](super::BoundStatement).

use std::fmt;

/// A value bound to a placeholder.
#[derive(Debug, Clone, PartialEq)]
pub enum SqlValue {
    /// NULL value.
    Null,
    /// Boolean value.
    Bool(bool),
    /// Integer value.
    Int(i64),
    /// Float value.
    Float(f64),
    /// Text value.
    Text(String),
    /// Binary blob value.
    Blob(Vec<u8>),
}

/// Debug-friendly rendering used in logs and the command line. This is not
/// an escaping routine; values are always bound, never inlined.
impl fmt::Display for SqlValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => f.write_str("NULL"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Int(n) => write!(f, "{n}"),
            Self::Float(x) => write!(f, "{x}"),
            Self::Text(s) => write!(f, "{s:?}"),
            Self::Blob(bytes) => {
                f.write_str("x'")?;
                for byte in bytes {
                    write!(f, "{byte:02X}")?;
                }
                f.write_str("'")
            }
        }
    }
}

/// Trait for types that can be converted to SQL values.
pub trait ToSqlValue {
    /// Converts the value to a `SqlValue`.
    fn to_sql_value(self) -> SqlValue;
}

impl ToSqlValue for SqlValue {
    fn to_sql_value(self) -> SqlValue {
        self
    }
}

macro_rules! to_sql_value {
    ($variant:ident: $($ty:ty),+ => $conv:expr) => {
        $(
            impl ToSqlValue for $ty {
                fn to_sql_value(self) -> SqlValue {
                    SqlValue::$variant($conv(self))
                }
            }
        )+
    };
}

to_sql_value!(Bool: bool => std::convert::identity);
to_sql_value!(Int: i8, i16, i32, i64, u8, u16, u32 => i64::from);
to_sql_value!(Float: f32, f64 => f64::from);
to_sql_value!(Text: String, &str, &String, char => String::from);
to_sql_value!(Blob: Vec<u8>, &[u8] => Vec::from);

impl<T: ToSqlValue> ToSqlValue for Option<T> {
    fn to_sql_value(self) -> SqlValue {
        self.map_or(SqlValue::Null, ToSqlValue::to_sql_value)
    }
}
