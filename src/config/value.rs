//! Value kinds understood by the cache and their parsers.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::CacheError;

/// Discriminator naming the type a raw configuration string converts to.
///
/// `Empty` and `Object` are valid discriminators without a parser; asking a
/// retriever for them is reported as unsupported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[non_exhaustive]
pub enum ValueKind {
    Empty,
    Object,
    Boolean,
    Char,
    SByte,
    Byte,
    Int16,
    UInt16,
    Int32,
    UInt32,
    Int64,
    UInt64,
    Single,
    Double,
    Decimal,
    DateTime,
    String,
}

/// Converts a raw string into a [`ConfigValue`].
pub type Parser = fn(&str) -> Result<ConfigValue, String>;

impl ValueKind {
    /// Parser for this kind, `None` when the kind cannot be parsed.
    pub fn parser(self) -> Option<Parser> {
        let parser: Parser = match self {
            Self::Empty | Self::Object => return None,
            Self::Boolean => |raw| parse_bool(raw).map(ConfigValue::Boolean),
            Self::Char => |raw| parse_char(raw).map(ConfigValue::Char),
            Self::SByte => |raw| parse_trimmed(raw).map(ConfigValue::SByte),
            Self::Byte => |raw| parse_trimmed(raw).map(ConfigValue::Byte),
            Self::Int16 => |raw| parse_trimmed(raw).map(ConfigValue::Int16),
            Self::UInt16 => |raw| parse_trimmed(raw).map(ConfigValue::UInt16),
            Self::Int32 => |raw| parse_trimmed(raw).map(ConfigValue::Int32),
            Self::UInt32 => |raw| parse_trimmed(raw).map(ConfigValue::UInt32),
            Self::Int64 => |raw| parse_trimmed(raw).map(ConfigValue::Int64),
            Self::UInt64 => |raw| parse_trimmed(raw).map(ConfigValue::UInt64),
            Self::Single => |raw| parse_trimmed(raw).map(ConfigValue::Single),
            Self::Double => |raw| parse_trimmed(raw).map(ConfigValue::Double),
            Self::Decimal => |raw| parse_trimmed(raw).map(ConfigValue::Decimal),
            Self::DateTime => |raw| parse_date_time(raw).map(ConfigValue::DateTime),
            Self::String => |raw| Ok(ConfigValue::String(raw.to_owned())),
        };
        Some(parser)
    }

    pub fn is_supported(self) -> bool {
        self.parser().is_some()
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

fn parse_trimmed<T>(raw: &str) -> Result<T, String>
where
    T: FromStr,
    T::Err: fmt::Display,
{
    raw.trim().parse().map_err(|e: T::Err| e.to_string())
}

fn parse_bool(raw: &str) -> Result<bool, String> {
    let raw = raw.trim();
    if raw.eq_ignore_ascii_case("true") {
        Ok(true)
    } else if raw.eq_ignore_ascii_case("false") {
        Ok(false)
    } else {
        Err(format!("'{raw}' is not a boolean"))
    }
}

fn parse_char(raw: &str) -> Result<char, String> {
    let mut chars = raw.chars();
    match (chars.next(), chars.next()) {
        (Some(ch), None) => Ok(ch),
        _ => Err(format!("'{raw}' is not a single character")),
    }
}

const DATE_TIME_FORMATS: [&str; 4] = [
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M:%S%.f",
];

fn parse_date_time(raw: &str) -> Result<NaiveDateTime, String> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Ok(dt.naive_utc());
    }
    for format in DATE_TIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(raw, format) {
            return Ok(dt);
        }
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .ok_or_else(|| format!("'{raw}' is not a recognized date-time"))
}

/// A parsed configuration value.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum ConfigValue {
    Boolean(bool),
    Char(char),
    SByte(i8),
    Byte(u8),
    Int16(i16),
    UInt16(u16),
    Int32(i32),
    UInt32(u32),
    Int64(i64),
    UInt64(u64),
    Single(f32),
    Double(f64),
    Decimal(Decimal),
    DateTime(NaiveDateTime),
    String(String),
}

impl ConfigValue {
    pub fn kind(&self) -> ValueKind {
        match self {
            Self::Boolean(_) => ValueKind::Boolean,
            Self::Char(_) => ValueKind::Char,
            Self::SByte(_) => ValueKind::SByte,
            Self::Byte(_) => ValueKind::Byte,
            Self::Int16(_) => ValueKind::Int16,
            Self::UInt16(_) => ValueKind::UInt16,
            Self::Int32(_) => ValueKind::Int32,
            Self::UInt32(_) => ValueKind::UInt32,
            Self::Int64(_) => ValueKind::Int64,
            Self::UInt64(_) => ValueKind::UInt64,
            Self::Single(_) => ValueKind::Single,
            Self::Double(_) => ValueKind::Double,
            Self::Decimal(_) => ValueKind::Decimal,
            Self::DateTime(_) => ValueKind::DateTime,
            Self::String(_) => ValueKind::String,
        }
    }

    /// Converts into the Rust type mapped to this value's kind.
    pub fn into_typed<T: CacheValue>(self) -> Result<T, CacheError> {
        let kind = self.kind();
        T::from_config_value(self).ok_or(CacheError::TypeMismatch {
            kind,
            requested: T::KIND,
        })
    }
}

/// Rust types that can be stored in and retrieved from the cache.
///
/// The mapping from type to [`ValueKind`] is fixed at compile time.
pub trait CacheValue: Sized + 'static {
    const KIND: ValueKind;

    fn from_config_value(value: ConfigValue) -> Option<Self>;

    fn into_config_value(self) -> ConfigValue;
}

macro_rules! cache_value {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl CacheValue for $ty {
                const KIND: ValueKind = ValueKind::$variant;

                fn from_config_value(value: ConfigValue) -> Option<Self> {
                    match value {
                        ConfigValue::$variant(inner) => Some(inner),
                        _ => None,
                    }
                }

                fn into_config_value(self) -> ConfigValue {
                    ConfigValue::$variant(self)
                }
            }
        )*
    };
}

cache_value! {
    bool => Boolean,
    char => Char,
    i8 => SByte,
    u8 => Byte,
    i16 => Int16,
    u16 => UInt16,
    i32 => Int32,
    u32 => UInt32,
    i64 => Int64,
    u64 => UInt64,
    f32 => Single,
    f64 => Double,
    Decimal => Decimal,
    NaiveDateTime => DateTime,
    String => String,
}
