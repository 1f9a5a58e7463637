//! Dynamically-typed label values.
//!
//! `FemtoValue` is the closed set of value shapes the formatter knows how to
//! render. Conversions from the common primitive types are provided so label
//! maps can be built from plain literals; anything outside the modeled set
//! goes through [`FemtoValue::other`] and the fallback rendering rule.

use std::collections::HashMap;
use std::error::Error;
use std::fmt;

use chrono::{DateTime, FixedOffset, TimeZone};

/// Label mapping attached to a single log call.
///
/// Deliberately unordered: [`FemtoLogger`](crate::FemtoLogger) sorts the keys
/// itself when encoding, so insertion order never leaks into the output.
pub type Labels = HashMap<String, FemtoValue>;

/// A single label value, tagged by the formatting rule that applies to it.
///
/// The variant order mirrors the formatter's dispatch priority: an absent
/// value always renders as `<nil>`, even when it is an absent error.
pub enum FemtoValue {
    /// The "no value" case, e.g. an absent error or empty optional.
    Nil,
    /// Rendered quoted, with quotes, backslashes and control characters
    /// escaped.
    Str(String),
    /// Unsigned integers of any width up to 64 bits, widened on conversion.
    Uint(u64),
    /// Signed integers of any width up to 64 bits, widened on conversion.
    Int(i64),
    /// Rendered in general notation at 6 significant digits of 32-bit
    /// precision.
    Float32(f32),
    /// Rendered in general notation at 6 significant digits of 64-bit
    /// precision.
    Float64(f64),
    /// Rendered in UTC as RFC 3339 with second resolution and a `Z` suffix,
    /// whatever the original offset.
    Time(DateTime<FixedOffset>),
    /// A failure value; its description is rendered quoted.
    Error(Box<dyn Error + Send + Sync>),
    /// A value exposing a custom textual representation, rendered quoted.
    Stringable(Box<dyn fmt::Display + Send + Sync>),
    /// Fallback token for unmodeled types, rendered bare unless it contains
    /// whitespace.
    Other(String),
}

impl FemtoValue {
    /// Wrap a present error value.
    pub fn error<E>(err: E) -> Self
    where
        E: Error + Send + Sync + 'static,
    {
        Self::Error(Box::new(err))
    }

    /// Wrap an optional error value, mapping absence to [`FemtoValue::Nil`].
    pub fn opt_error<E>(err: Option<E>) -> Self
    where
        E: Error + Send + Sync + 'static,
    {
        match err {
            Some(err) => Self::error(err),
            None => Self::Nil,
        }
    }

    /// Wrap a value whose `Display` output is its canonical representation.
    pub fn stringable<D>(value: D) -> Self
    where
        D: fmt::Display + Send + Sync + 'static,
    {
        Self::Stringable(Box::new(value))
    }

    /// Capture an unmodeled value through its `Debug` rendering.
    ///
    /// The rendering happens once, here; whether the token ends up quoted is
    /// decided by the formatter's whitespace rule.
    pub fn other<D>(value: D) -> Self
    where
        D: fmt::Debug,
    {
        Self::Other(format!("{value:?}"))
    }
}

impl fmt::Debug for FemtoValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&crate::formatter::format(self))
    }
}

impl From<&str> for FemtoValue {
    fn from(value: &str) -> Self {
        Self::Str(value.to_owned())
    }
}

impl From<String> for FemtoValue {
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}

macro_rules! from_unsigned {
    ($($ty:ty),+) => {$(
        impl From<$ty> for FemtoValue {
            fn from(value: $ty) -> Self {
                Self::Uint(value as u64)
            }
        }
    )+};
}

macro_rules! from_signed {
    ($($ty:ty),+) => {$(
        impl From<$ty> for FemtoValue {
            fn from(value: $ty) -> Self {
                Self::Int(value as i64)
            }
        }
    )+};
}

from_unsigned!(u8, u16, u32, u64, usize);
from_signed!(i8, i16, i32, i64, isize);

impl From<f32> for FemtoValue {
    fn from(value: f32) -> Self {
        Self::Float32(value)
    }
}

impl From<f64> for FemtoValue {
    fn from(value: f64) -> Self {
        Self::Float64(value)
    }
}

impl<Tz: TimeZone> From<DateTime<Tz>> for FemtoValue {
    fn from(value: DateTime<Tz>) -> Self {
        Self::Time(value.fixed_offset())
    }
}

impl From<bool> for FemtoValue {
    fn from(value: bool) -> Self {
        Self::Other(if value { "true" } else { "false" }.to_owned())
    }
}

impl From<char> for FemtoValue {
    fn from(value: char) -> Self {
        Self::Other(value.to_string())
    }
}

impl<T: Into<FemtoValue>> From<Option<T>> for FemtoValue {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => value.into(),
            None => Self::Nil,
        }
    }
}
