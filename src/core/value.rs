//! Values accepted by a log call
//!
//! A log call takes a slice of `LogValue`s. Most argument types convert with
//! `From`, so the macros can take them as-is. Three kinds need an explicit
//! constructor because they borrow the caller's value and defer its rendering:
//! `LogValue::custom`, `LogValue::failure` and `LogValue::dump`.

use super::tag::Tag;
use std::borrow::Cow;
use std::fmt;

/// Custom stringification for a type.
///
/// Implement this to control exactly what a value looks like in a log line,
/// for instance to redact secrets or to print a compact summary instead of
/// the full debug dump.
///
/// # Example
///
/// ```
/// use sak::{Logify, LogValue};
///
/// struct Credentials {
///     user: String,
///     password: String,
/// }
///
/// impl Logify for Credentials {
///     fn logify(&self) -> String {
///         format!("user={} password=<redacted>", self.user)
///     }
/// }
///
/// let creds = Credentials { user: "ann".into(), password: "hunter2".into() };
/// let value = LogValue::custom(&creds);
/// assert!(matches!(value, LogValue::Custom(_)));
/// ```
pub trait Logify {
    fn logify(&self) -> String;
}

/// One argument of a log call
#[derive(Clone)]
pub enum LogValue<'a> {
    /// Rendered through `Logify`
    Custom(&'a dyn Logify),
    /// Facility / severity / code for the call; not part of the message
    Tag(Tag),
    Text(Cow<'a, str>),
    Int(i64),
    UInt(u64),
    Float(f64),
    /// Rendered as the error's `Display` message
    Failure(&'a dyn std::error::Error),
    /// Best-effort debug dump of an arbitrary value
    Dump {
        value: &'a dyn fmt::Debug,
        type_name: &'static str,
    },
}

impl<'a> LogValue<'a> {
    /// Use the value's own `Logify` rendering
    pub fn custom<T: Logify>(value: &'a T) -> Self {
        LogValue::Custom(value)
    }

    /// Log an error by its message
    pub fn failure<E: std::error::Error>(error: &'a E) -> Self {
        LogValue::Failure(error)
    }

    /// Dump any `Debug` value.
    ///
    /// The dump is the pretty (`{:#?}`) form and is never truncated; passing
    /// a huge structure produces a huge line.
    pub fn dump<T: fmt::Debug>(value: &'a T) -> Self {
        LogValue::Dump {
            value,
            type_name: std::any::type_name::<T>(),
        }
    }
}

impl fmt::Debug for LogValue<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogValue::Custom(_) => f.write_str("Custom(..)"),
            LogValue::Tag(tag) => f.debug_tuple("Tag").field(tag).finish(),
            LogValue::Text(s) => f.debug_tuple("Text").field(s).finish(),
            LogValue::Int(i) => f.debug_tuple("Int").field(i).finish(),
            LogValue::UInt(u) => f.debug_tuple("UInt").field(u).finish(),
            LogValue::Float(fl) => f.debug_tuple("Float").field(fl).finish(),
            LogValue::Failure(e) => f.debug_tuple("Failure").field(&e.to_string()).finish(),
            LogValue::Dump { type_name, .. } => {
                f.debug_struct("Dump").field("type_name", type_name).finish()
            }
        }
    }
}

impl<'a> From<&'a str> for LogValue<'a> {
    fn from(s: &'a str) -> Self {
        LogValue::Text(Cow::Borrowed(s))
    }
}

impl<'a> From<&'a String> for LogValue<'a> {
    fn from(s: &'a String) -> Self {
        LogValue::Text(Cow::Borrowed(s.as_str()))
    }
}

impl From<String> for LogValue<'_> {
    fn from(s: String) -> Self {
        LogValue::Text(Cow::Owned(s))
    }
}

impl<'a> From<Cow<'a, str>> for LogValue<'a> {
    fn from(s: Cow<'a, str>) -> Self {
        LogValue::Text(s)
    }
}

impl From<Tag> for LogValue<'_> {
    fn from(tag: Tag) -> Self {
        LogValue::Tag(tag)
    }
}

impl From<&Tag> for LogValue<'_> {
    fn from(tag: &Tag) -> Self {
        LogValue::Tag(tag.clone())
    }
}

macro_rules! impl_from_signed {
    ($($t:ty),*) => {
        $(impl From<$t> for LogValue<'_> {
            fn from(i: $t) -> Self {
                LogValue::Int(i as i64)
            }
        })*
    };
}

macro_rules! impl_from_unsigned {
    ($($t:ty),*) => {
        $(impl From<$t> for LogValue<'_> {
            fn from(u: $t) -> Self {
                LogValue::UInt(u as u64)
            }
        })*
    };
}

impl_from_signed!(i8, i16, i32, i64, isize);
impl_from_unsigned!(u8, u16, u32, u64, usize);

impl From<f32> for LogValue<'_> {
    fn from(f: f32) -> Self {
        LogValue::Float(f64::from(f))
    }
}

impl From<f64> for LogValue<'_> {
    fn from(f: f64) -> Self {
        LogValue::Float(f)
    }
}

impl<'a> From<&'a std::io::Error> for LogValue<'a> {
    fn from(e: &'a std::io::Error) -> Self {
        LogValue::Failure(e)
    }
}

impl<'a> From<&'a super::error::SakError> for LogValue<'a> {
    fn from(e: &'a super::error::SakError) -> Self {
        LogValue::Failure(e)
    }
}
