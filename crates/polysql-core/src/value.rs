//! Dynamic values carried by parameters.
//!
//! A [`Value`] is the closed set of things a placeholder can be replaced
//! with. Dialects turn values into SQL literals; see
//! [`Dialect::format_value`](crate::dialect::Dialect::format_value).

use std::fmt;

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use rust_decimal::Decimal;

/// A value that can be substituted into SQL text.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// NULL value.
    Null,
    /// Boolean value.
    Bool(bool),
    /// Integer value.
    Int(i64),
    /// Float value.
    Float(f64),
    /// Exact decimal value.
    Decimal(Decimal),
    /// Text value.
    Text(String),
    /// Single character value.
    Char(char),
    /// Date and time without time zone.
    DateTime(NaiveDateTime),
    /// Enum member with its encodings.
    Enum(EnumValue),
}

impl Value {
    /// Returns true for [`Value::Null`].
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }
}

/// Plain textual form, used for numerics and as the formatter fallback.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => Ok(()),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Int(n) => write!(f, "{n}"),
            Self::Float(x) => write!(f, "{x}"),
            Self::Decimal(d) => write!(f, "{d}"),
            Self::Text(s) => f.write_str(s),
            Self::Char(c) => write!(f, "{c}"),
            Self::DateTime(dt) => write!(f, "{}", dt.format("%Y/%m/%d %H:%M:%S")),
            Self::Enum(e) => f.write_str(&e.name),
        }
    }
}

/// An enum member captured with every encoding a column rule may ask for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumValue {
    /// Underlying integer ordinal.
    pub ordinal: i64,
    /// Symbolic member name.
    pub name: String,
    /// Human-readable description, if one is attached.
    pub description: Option<String>,
    /// Canonical string tag, if one is attached.
    pub string_value: Option<String>,
}

impl EnumValue {
    /// Creates an enum value with only an ordinal and a name.
    #[must_use]
    pub fn new(ordinal: i64, name: impl Into<String>) -> Self {
        Self {
            ordinal,
            name: name.into(),
            description: None,
            string_value: None,
        }
    }

    /// Attaches a description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Attaches a string tag.
    #[must_use]
    pub fn with_string_value(mut self, string_value: impl Into<String>) -> Self {
        self.string_value = Some(string_value.into());
        self
    }

    /// Description, falling back to the member name.
    #[must_use]
    pub fn description_or_name(&self) -> &str {
        self.description.as_deref().unwrap_or(&self.name)
    }

    /// String tag, falling back to the member name.
    #[must_use]
    pub fn string_value_or_name(&self) -> &str {
        self.string_value.as_deref().unwrap_or(&self.name)
    }
}

/// Metadata for fieldless enums stored in SQL columns.
///
/// Usually implemented with `#[derive(SqlEnum)]`.
pub trait SqlEnum: Copy {
    /// Underlying integer ordinal.
    fn ordinal(self) -> i64;

    /// Symbolic member name.
    fn name(self) -> &'static str;

    /// Attached description.
    fn description(self) -> Option<&'static str> {
        None
    }

    /// Attached canonical string tag.
    fn string_value(self) -> Option<&'static str> {
        None
    }

    /// Captures the member as an [`EnumValue`].
    fn to_enum_value(self) -> EnumValue {
        EnumValue {
            ordinal: self.ordinal(),
            name: String::from(self.name()),
            description: self.description().map(String::from),
            string_value: self.string_value().map(String::from),
        }
    }
}

/// Trait for types that can be converted to values.
pub trait ToValue {
    /// Converts into a [`Value`].
    fn to_value(self) -> Value;
}

impl ToValue for Value {
    fn to_value(self) -> Value {
        self
    }
}

impl ToValue for EnumValue {
    fn to_value(self) -> Value {
        Value::Enum(self)
    }
}

impl ToValue for bool {
    fn to_value(self) -> Value {
        Value::Bool(self)
    }
}

impl ToValue for i64 {
    fn to_value(self) -> Value {
        Value::Int(self)
    }
}

macro_rules! impl_to_value_int {
    ($($ty:ty),+) => {
        $(
            impl ToValue for $ty {
                fn to_value(self) -> Value {
                    Value::Int(i64::from(self))
                }
            }
        )+
    };
}

impl_to_value_int!(i32, i16, i8, u32, u16, u8);

impl ToValue for f64 {
    fn to_value(self) -> Value {
        Value::Float(self)
    }
}

impl ToValue for f32 {
    fn to_value(self) -> Value {
        Value::Float(f64::from(self))
    }
}

impl ToValue for Decimal {
    fn to_value(self) -> Value {
        Value::Decimal(self)
    }
}

impl ToValue for String {
    fn to_value(self) -> Value {
        Value::Text(self)
    }
}

impl ToValue for &str {
    fn to_value(self) -> Value {
        Value::Text(String::from(self))
    }
}

impl ToValue for &String {
    fn to_value(self) -> Value {
        Value::Text(self.clone())
    }
}

impl ToValue for char {
    fn to_value(self) -> Value {
        Value::Char(self)
    }
}

impl ToValue for NaiveDateTime {
    fn to_value(self) -> Value {
        Value::DateTime(self)
    }
}

impl ToValue for NaiveDate {
    fn to_value(self) -> Value {
        Value::DateTime(self.and_time(chrono::NaiveTime::MIN))
    }
}

impl ToValue for DateTime<Utc> {
    fn to_value(self) -> Value {
        Value::DateTime(self.naive_utc())
    }
}

impl<T: ToValue> ToValue for Option<T> {
    fn to_value(self) -> Value {
        match self {
            Some(v) => v.to_value(),
            None => Value::Null,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Copy)]
    enum Status {
        Active,
        Retired,
    }

    impl SqlEnum for Status {
        fn ordinal(self) -> i64 {
            self as i64
        }

        fn name(self) -> &'static str {
            match self {
                Self::Active => "Active",
                Self::Retired => "Retired",
            }
        }

        fn description(self) -> Option<&'static str> {
            match self {
                Self::Active => Some("Currently active"),
                Self::Retired => None,
            }
        }
    }

    #[test]
    fn test_to_value_conversions() {
        assert_eq!(true.to_value(), Value::Bool(true));
        assert_eq!(42_i32.to_value(), Value::Int(42));
        assert_eq!(7_u8.to_value(), Value::Int(7));
        assert_eq!(2.5_f64.to_value(), Value::Float(2.5));
        assert_eq!("hi".to_value(), Value::Text(String::from("hi")));
        assert_eq!('x'.to_value(), Value::Char('x'));
        assert_eq!(None::<i32>.to_value(), Value::Null);
        assert_eq!(Some(3_i64).to_value(), Value::Int(3));
    }

    #[test]
    fn test_date_converts_to_midnight() {
        let date = NaiveDate::from_ymd_opt(2024, 2, 29).unwrap();
        let Value::DateTime(dt) = date.to_value() else {
            panic!("expected a date-time value");
        };
        assert_eq!(dt.to_string(), "2024-02-29 00:00:00");
    }

    #[test]
    fn test_sql_enum_capture() {
        let value = Status::Active.to_enum_value();
        assert_eq!(value.ordinal, 0);
        assert_eq!(value.name, "Active");
        assert_eq!(value.description_or_name(), "Currently active");
        assert_eq!(value.string_value_or_name(), "Active");

        let retired = Status::Retired.to_enum_value();
        assert_eq!(retired.ordinal, 1);
        assert_eq!(retired.description_or_name(), "Retired");
    }

    #[test]
    fn test_display() {
        assert_eq!(Value::Int(-5).to_string(), "-5");
        assert_eq!(Value::Float(1.0).to_string(), "1");
        assert_eq!(Value::Float(0.25).to_string(), "0.25");
        assert_eq!(Value::Null.to_string(), "");
        assert_eq!(
            Value::Enum(EnumValue::new(3, "Gold")).to_string(),
            "Gold"
        );
    }
}
