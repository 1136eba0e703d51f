//! SQL Dialect support.
//!
//! Different databases quote identifiers, reserve keywords and spell
//! literals differently. This module provides a trait for that behavior and
//! one profile per supported database. Everything else in the crate only
//! talks to `&dyn Dialect`.

mod access;
mod db2;
mod mysql;
mod oracle;
mod sqlserver;

use std::collections::HashSet;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::schema::{ColumnRule, EnumEncoding};
use crate::value::Value;

pub use access::AccessDialect;
pub use db2::Db2Dialect;
pub use mysql::MySqlDialect;
pub use oracle::OracleDialect;
pub use sqlserver::SqlServerDialect;

/// How identifiers are quoted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuoteMode {
    /// Never quote.
    Never,
    /// Quote only reserved words.
    #[default]
    Auto,
    /// Always quote.
    Always,
}

/// A case-insensitive set of reserved words.
#[derive(Debug, Clone)]
pub struct ReservedWords {
    words: HashSet<&'static str>,
}

impl ReservedWords {
    /// Builds a set from upper-case words.
    #[must_use]
    pub fn new(words: &'static [&'static str]) -> Self {
        Self {
            words: words.iter().copied().collect(),
        }
    }

    /// Returns true if `word` matches an entry, ignoring ASCII case.
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word.to_ascii_uppercase().as_str())
    }

    /// Number of distinct words.
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Returns true if the set is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

/// Trait for SQL dialect-specific behavior.
///
/// Implementors supply the quote characters, the reserved-word table and the
/// date-time literal; the remaining methods have defaults shared by every
/// supported database.
pub trait Dialect: Send + Sync {
    /// Returns the name of the dialect.
    fn name(&self) -> &'static str;

    /// Opening identifier quote.
    fn quote_prefix(&self) -> char;

    /// Closing identifier quote.
    fn quote_suffix(&self) -> char;

    /// Reserved words that `QuoteMode::Auto` quotes.
    fn reserved_words(&self) -> &ReservedWords;

    /// Formats a date-time literal.
    fn format_datetime(&self, value: &NaiveDateTime) -> String;

    /// Statement terminator appended on request.
    fn statement_terminator(&self) -> &'static str {
        ";"
    }

    /// The NULL literal.
    fn null_literal(&self) -> &'static str {
        "NULL"
    }

    /// Formats a boolean literal.
    fn format_bool(&self, value: bool) -> &'static str {
        if value {
            "1"
        } else {
            "0"
        }
    }

    /// Formats a quoted string literal, doubling embedded quotes.
    fn format_text(&self, value: &str, _rule: ColumnRule) -> String {
        format!("'{}'", value.replace('\'', "''"))
    }

    /// Formats any value as a literal of this dialect.
    ///
    /// Never fails: values without a native literal form are rendered as a
    /// quoted string of their textual form.
    fn format_value(&self, value: &Value, rule: ColumnRule) -> String {
        match value {
            Value::Null => String::from(self.null_literal()),
            Value::Text(s) => self.format_text(s, rule),
            Value::Char(c) => self.format_text(c.encode_utf8(&mut [0; 4]), rule),
            Value::Enum(e) => match rule.enum_encoding() {
                EnumEncoding::Ordinal => e.ordinal.to_string(),
                EnumEncoding::Name => self.format_text(&e.name, rule),
                EnumEncoding::Description => self.format_text(e.description_or_name(), rule),
                EnumEncoding::StringValue => self.format_text(e.string_value_or_name(), rule),
            },
            Value::Bool(b) => String::from(self.format_bool(*b)),
            Value::DateTime(dt) => self.format_datetime(dt),
            Value::Float(f) if !f.is_finite() => {
                warn!(dialect = self.name(), value = %f, "non-finite float rendered as text");
                self.format_text(&value.to_string(), rule)
            }
            Value::Int(_) | Value::Float(_) | Value::Decimal(_) => value.to_string(),
        }
    }

    /// Returns true if `word` is reserved, ignoring ASCII case.
    fn is_reserved(&self, word: &str) -> bool {
        self.reserved_words().contains(word)
    }

    /// Quotes an identifier according to `mode`.
    fn quote(&self, word: &str, mode: QuoteMode) -> String {
        match mode {
            QuoteMode::Always => self.quote_identifier(word),
            QuoteMode::Auto if self.is_reserved(word) => self.quote_identifier(word),
            QuoteMode::Auto | QuoteMode::Never => String::from(word),
        }
    }

    /// Wraps an identifier in this dialect's quotes unconditionally.
    fn quote_identifier(&self, word: &str) -> String {
        format!("{}{word}{}", self.quote_prefix(), self.quote_suffix())
    }
}

/// The supported databases, for selecting a profile from configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DialectKind {
    /// Microsoft SQL Server.
    #[default]
    SqlServer,
    /// Oracle Database.
    Oracle,
    /// MySQL.
    MySql,
    /// Microsoft Access.
    Access,
    /// IBM DB2.
    Db2,
}

impl DialectKind {
    /// Every supported dialect.
    pub const ALL: [Self; 5] = [
        Self::SqlServer,
        Self::Oracle,
        Self::MySql,
        Self::Access,
        Self::Db2,
    ];

    /// Returns the shared profile for this dialect.
    #[must_use]
    pub fn profile(self) -> &'static dyn Dialect {
        match self {
            Self::SqlServer => &SqlServerDialect,
            Self::Oracle => &OracleDialect,
            Self::MySql => &MySqlDialect,
            Self::Access => &AccessDialect,
            Self::Db2 => &Db2Dialect,
        }
    }
}

/// `yyyy/MM/dd HH:mm:ss.fff`, shared by several dialects.
pub(crate) fn datetime_millis(value: &NaiveDateTime) -> String {
    value.format("%Y/%m/%d %H:%M:%S%.3f").to_string()
}

/// `TO_DATE('yyyy/MM/dd HH:mm:ss','YYYY/MM/DD HH24:MI:SS')`.
pub(crate) fn to_date_call(value: &NaiveDateTime) -> String {
    format!(
        "TO_DATE('{}','YYYY/MM/DD HH24:MI:SS')",
        value.format("%Y/%m/%d %H:%M:%S")
    )
}
