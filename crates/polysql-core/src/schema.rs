//! Tables, columns and parameters.
//!
//! These are the identifiers and named values that clauses are built from.
//! A [`Parameter`] is a [`Column`] paired with a [`Value`].

use std::fmt;
use std::ops::{BitOr, BitOrAssign};

use crate::dialect::{Dialect, QuoteMode};
use crate::value::{ToValue, Value};

/// Creates a column with no special rule.
#[must_use]
pub fn column(name: &str) -> Column {
    Column::new(name)
}

/// Creates a parameter with no special rule.
#[must_use]
pub fn param<T: ToValue>(name: &str, value: T) -> Parameter {
    Parameter::new(name, value)
}

/// Bit flags controlling how a value is encoded for its column.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct ColumnRule(u8);

impl ColumnRule {
    /// No special rule.
    pub const NONE: Self = Self(0);
    /// Use a varchar literal instead of nvarchar (SQL Server only).
    pub const USE_VARCHAR_TYPE: Self = Self(1);
    /// Store enums by their symbolic name.
    pub const ENUM_TO_STRING: Self = Self(2);
    /// Store enums by their description.
    pub const ENUM_DESCRIPTION: Self = Self(8);
    /// Store enums by their description, matched case-insensitively on read.
    pub const ENUM_DESCRIPTION_IGNORE_CASE: Self = Self(16 | 8);
    /// Store enums by their string tag.
    pub const ENUM_STRING_VALUE: Self = Self(32);
    /// Store enums by their string tag, matched case-insensitively on read.
    pub const ENUM_STRING_VALUE_IGNORE_CASE: Self = Self(64 | 32);

    /// Returns the raw bits.
    #[must_use]
    pub const fn bits(self) -> u8 {
        self.0
    }

    /// Builds a rule from raw bits, dropping unknown bits.
    #[must_use]
    pub const fn from_bits_truncate(bits: u8) -> Self {
        Self(bits & 0b0111_1011)
    }

    /// Returns true if no flag is set.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Returns true if every flag of `other` is set in `self`.
    #[must_use]
    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    /// Returns the union of both rules.
    #[must_use]
    pub const fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    /// Returns the enum encoding selected by this rule.
    ///
    /// When several families are set the first of name, description and
    /// string tag wins.
    #[must_use]
    pub const fn enum_encoding(self) -> EnumEncoding {
        if self.contains(Self::ENUM_TO_STRING) {
            EnumEncoding::Name
        } else if self.contains(Self::ENUM_DESCRIPTION) {
            EnumEncoding::Description
        } else if self.contains(Self::ENUM_STRING_VALUE) {
            EnumEncoding::StringValue
        } else {
            EnumEncoding::Ordinal
        }
    }
}

impl BitOr for ColumnRule {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        self.union(rhs)
    }
}

impl BitOrAssign for ColumnRule {
    fn bitor_assign(&mut self, rhs: Self) {
        *self = self.union(rhs);
    }
}

/// How an enum value is written to SQL.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnumEncoding {
    /// Unquoted integer ordinal.
    Ordinal,
    /// Quoted symbolic name.
    Name,
    /// Quoted description.
    Description,
    /// Quoted string tag.
    StringValue,
}

/// A table reference.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Table {
    /// Table name.
    pub name: String,
}

impl Table {
    /// Creates a table reference.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// Renders the table name under the given quoting mode.
    #[must_use]
    pub fn to_sql(&self, dialect: &dyn Dialect, mode: QuoteMode) -> String {
        dialect.quote(&self.name, mode)
    }
}

impl From<&str> for Table {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for Table {
    fn from(name: String) -> Self {
        Self::new(name)
    }
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// A column reference with its encoding rule.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Column {
    /// Column name.
    pub name: String,
    /// Encoding rule for values of this column.
    pub rule: ColumnRule,
}

impl Column {
    /// Creates a column with no special rule.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            rule: ColumnRule::NONE,
        }
    }

    /// Creates a column with the given rule.
    #[must_use]
    pub fn with_rule(name: impl Into<String>, rule: ColumnRule) -> Self {
        Self {
            name: name.into(),
            rule,
        }
    }

    /// Pairs this column with a value.
    #[must_use]
    pub fn value<T: ToValue>(self, value: T) -> Parameter {
        Parameter {
            column: self,
            value: value.to_value(),
        }
    }

    /// Renders the column name under the given quoting mode.
    #[must_use]
    pub fn to_sql(&self, dialect: &dyn Dialect, mode: QuoteMode) -> String {
        dialect.quote(&self.name, mode)
    }
}

impl From<&str> for Column {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl fmt::Display for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// A named, typed value.
///
/// Parameters are matched to placeholders by exact, case-sensitive name.
#[derive(Debug, Clone, PartialEq)]
pub struct Parameter {
    /// Column the value belongs to; its name is the parameter name.
    pub column: Column,
    /// The value.
    pub value: Value,
}

impl Parameter {
    /// Creates a parameter with no special rule.
    #[must_use]
    pub fn new<T: ToValue>(name: impl Into<String>, value: T) -> Self {
        Column::new(name).value(value)
    }

    /// Creates a parameter with the given rule.
    #[must_use]
    pub fn with_rule<T: ToValue>(name: impl Into<String>, value: T, rule: ColumnRule) -> Self {
        Column::with_rule(name, rule).value(value)
    }

    /// Parameter name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.column.name
    }

    /// Encoding rule.
    #[must_use]
    pub const fn rule(&self) -> ColumnRule {
        self.column.rule
    }

    /// Formats the value as a literal of the given dialect.
    #[must_use]
    pub fn to_literal(&self, dialect: &dyn Dialect) -> String {
        dialect.format_value(&self.value, self.column.rule)
    }
}

impl fmt::Display for Parameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.column.name, self.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dialect::{MySqlDialect, SqlServerDialect};

    #[test]
    fn test_column_rule_implied_flags() {
        assert!(ColumnRule::ENUM_DESCRIPTION_IGNORE_CASE.contains(ColumnRule::ENUM_DESCRIPTION));
        assert!(ColumnRule::ENUM_STRING_VALUE_IGNORE_CASE.contains(ColumnRule::ENUM_STRING_VALUE));
        assert!(!ColumnRule::ENUM_DESCRIPTION.contains(ColumnRule::ENUM_DESCRIPTION_IGNORE_CASE));
        assert!(ColumnRule::NONE.is_empty());
    }

    #[test]
    fn test_column_rule_union() {
        let mut rule = ColumnRule::USE_VARCHAR_TYPE | ColumnRule::ENUM_TO_STRING;
        assert_eq!(rule.bits(), 3);
        rule |= ColumnRule::ENUM_STRING_VALUE;
        assert!(rule.contains(ColumnRule::ENUM_STRING_VALUE));
        assert_eq!(ColumnRule::from_bits_truncate(0xFF).bits(), 0b0111_1011);
    }

    #[test]
    fn test_enum_encoding_selection() {
        assert_eq!(ColumnRule::NONE.enum_encoding(), EnumEncoding::Ordinal);
        assert_eq!(
            ColumnRule::USE_VARCHAR_TYPE.enum_encoding(),
            EnumEncoding::Ordinal
        );
        assert_eq!(ColumnRule::ENUM_TO_STRING.enum_encoding(), EnumEncoding::Name);
        assert_eq!(
            ColumnRule::ENUM_DESCRIPTION_IGNORE_CASE.enum_encoding(),
            EnumEncoding::Description
        );
        assert_eq!(
            ColumnRule::ENUM_STRING_VALUE.enum_encoding(),
            EnumEncoding::StringValue
        );
    }

    #[test]
    fn test_parameter_accessors() {
        let p = Parameter::with_rule("Name", "x", ColumnRule::USE_VARCHAR_TYPE);
        assert_eq!(p.name(), "Name");
        assert_eq!(p.rule(), ColumnRule::USE_VARCHAR_TYPE);
        assert_eq!(p.to_string(), "Name:x");
        assert_eq!(p.to_literal(&SqlServerDialect), "'x'");
        assert_eq!(param("Id", 5_i32).to_literal(&MySqlDialect), "5");
    }

    #[test]
    fn test_identifier_to_sql() {
        let table = Table::from("Order");
        assert_eq!(table.to_sql(&SqlServerDialect, QuoteMode::Auto), "[Order]");
        assert_eq!(table.to_sql(&SqlServerDialect, QuoteMode::Never), "Order");
        assert_eq!(column("Id").to_sql(&MySqlDialect, QuoteMode::Always), "\"Id\"");
    }
}
