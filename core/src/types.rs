//! Typed query arguments for the address builder.
//!
//! # Design
//! Call sites pass keys and values as one flat, heterogeneous list (see
//! `query_args!`). Each element is a `QueryValue` so integers, booleans and
//! floats keep their type until the moment they are rendered into the query
//! string.

use std::fmt;

/// A single query key or value.
#[derive(Debug, Clone, PartialEq)]
pub enum QueryValue {
    Str(String),
    Int(i64),
    UInt(u64),
    Bool(bool),
    Float(f64),
}

impl fmt::Display for QueryValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QueryValue::Str(s) => f.write_str(s),
            QueryValue::Int(n) => write!(f, "{n}"),
            QueryValue::UInt(n) => write!(f, "{n}"),
            QueryValue::Bool(b) => write!(f, "{b}"),
            QueryValue::Float(x) => f.write_str(&format_float(*x)),
        }
    }
}

/// Shortest round-trip digits, switching to exponent form (`1e+21`,
/// `1e-05`) when the decimal exponent is below -4 or at least 21.
fn format_float(x: f64) -> String {
    if x.is_nan() {
        return "NaN".to_string();
    }
    if x.is_infinite() {
        return if x > 0.0 { "+Inf" } else { "-Inf" }.to_string();
    }
    if x == 0.0 {
        return format!("{x}");
    }
    let sci = format!("{x:e}");
    let Some((mantissa, exp)) = sci.split_once('e') else {
        return format!("{x}");
    };
    let exp: i32 = exp.parse().unwrap_or(0);
    if (-4..21).contains(&exp) {
        return format!("{x}");
    }
    let sign = if exp < 0 { '-' } else { '+' };
    format!("{mantissa}e{sign}{:02}", exp.abs())
}

impl From<&str> for QueryValue {
    fn from(s: &str) -> Self {
        QueryValue::Str(s.to_string())
    }
}

impl From<String> for QueryValue {
    fn from(s: String) -> Self {
        QueryValue::Str(s)
    }
}

impl From<&String> for QueryValue {
    fn from(s: &String) -> Self {
        QueryValue::Str(s.clone())
    }
}

impl From<bool> for QueryValue {
    fn from(b: bool) -> Self {
        QueryValue::Bool(b)
    }
}

impl From<f32> for QueryValue {
    fn from(x: f32) -> Self {
        QueryValue::Float(f64::from(x))
    }
}

impl From<f64> for QueryValue {
    fn from(x: f64) -> Self {
        QueryValue::Float(x)
    }
}

macro_rules! from_signed {
    ($($t:ty),*) => {
        $(impl From<$t> for QueryValue {
            fn from(n: $t) -> Self {
                QueryValue::Int(n as i64)
            }
        })*
    };
}

macro_rules! from_unsigned {
    ($($t:ty),*) => {
        $(impl From<$t> for QueryValue {
            fn from(n: $t) -> Self {
                QueryValue::UInt(n as u64)
            }
        })*
    };
}

from_signed!(i8, i16, i32, i64, isize);
from_unsigned!(u8, u16, u32, u64, usize);

/// Build a `[QueryValue; N]` from alternating keys and values of mixed types.
///
/// ```
/// use request_core::{query_args, Address};
///
/// let addr = Address::new("postgres", "localhost");
/// let url = addr.build("dbname", &query_args!["pool_max_conns", 25, "sslmode", "disable"]);
/// assert_eq!(url, "postgres://localhost/dbname?pool_max_conns=25&sslmode=disable");
/// ```
#[macro_export]
macro_rules! query_args {
    () => {
        [] as [$crate::QueryValue; 0]
    };
    ($($arg:expr),+ $(,)?) => {
        [$($crate::QueryValue::from($arg)),+]
    };
}
