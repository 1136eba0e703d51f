//! Schema descriptors for records.
//!
//! A [`Record`] describes how a Rust struct maps onto a table: the table
//! name, one [`ColumnSchema`] per mapped field and the field values in
//! column order. Statement builders use it to derive column lists, key
//! filters and assignments without hand-written parameter lists.
//!
//! Usually implemented with `#[derive(Record)]` from `polysql-derive`.

use crate::schema::{Column, ColumnRule, Parameter, Table};
use crate::value::Value;

/// Which way a column is converted between a record and the database.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ConvertDirection {
    /// Written to the database only.
    ToDb,
    /// Read from the database only.
    FromDb,
    /// Both read and written.
    #[default]
    TwoWay,
}

impl ConvertDirection {
    /// Returns true if columns of this direction are written.
    #[must_use]
    pub const fn writes(self) -> bool {
        matches!(self, Self::ToDb | Self::TwoWay)
    }

    /// Returns true if columns of this direction are read.
    #[must_use]
    pub const fn reads(self) -> bool {
        matches!(self, Self::FromDb | Self::TwoWay)
    }

    /// Returns true if a column of this direction takes part in `requested`.
    #[must_use]
    pub const fn includes(self, requested: Self) -> bool {
        match requested {
            Self::ToDb => self.writes(),
            Self::FromDb => self.reads(),
            Self::TwoWay => true,
        }
    }
}

/// Static description of one mapped column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnSchema {
    /// Column name.
    pub name: &'static str,
    /// Encoding rule for the column's values.
    pub rule: ColumnRule,
    /// Whether the column is part of the primary key.
    pub primary_key: bool,
    /// Conversion direction.
    pub direction: ConvertDirection,
}

impl ColumnSchema {
    /// A two-way, non-key column with no rule.
    #[must_use]
    pub const fn new(name: &'static str) -> Self {
        Self {
            name,
            rule: ColumnRule::NONE,
            primary_key: false,
            direction: ConvertDirection::TwoWay,
        }
    }

    /// Marks the column as part of the primary key.
    #[must_use]
    pub const fn primary_key(mut self) -> Self {
        self.primary_key = true;
        self
    }

    /// Sets the encoding rule.
    #[must_use]
    pub const fn rule(mut self, rule: ColumnRule) -> Self {
        self.rule = rule;
        self
    }

    /// Sets the conversion direction.
    #[must_use]
    pub const fn direction(mut self, direction: ConvertDirection) -> Self {
        self.direction = direction;
        self
    }

    /// The column reference, carrying the rule.
    #[must_use]
    pub fn column(&self) -> Column {
        Column::with_rule(self.name, self.rule)
    }
}

/// A struct mapped onto a table.
pub trait Record {
    /// Table name.
    const TABLE: &'static str;

    /// Mapped columns, in field order.
    fn columns() -> &'static [ColumnSchema];

    /// Current field values, one per entry of [`Record::columns`].
    ///
    /// The returned vector must have the same length as `columns()`, in
    /// the same order.
    fn values(&self) -> Vec<Value>;

    /// The table reference.
    fn table() -> Table {
        Table::new(Self::TABLE)
    }

    /// Parameters for every column taking part in `direction`.
    fn to_parameters(&self, direction: ConvertDirection) -> Vec<Parameter> {
        parameters_where(self, |schema| schema.direction.includes(direction))
    }

    /// Parameters for the primary-key columns.
    fn primary_key(&self) -> Vec<Parameter> {
        parameters_where(self, |schema| schema.primary_key)
    }

    /// Parameters for the written, non-key columns.
    fn non_primary_key(&self) -> Vec<Parameter> {
        parameters_where(self, |schema| {
            !schema.primary_key && schema.direction.writes()
        })
    }
}

fn parameters_where<R: Record + ?Sized>(
    record: &R,
    keep: impl Fn(&ColumnSchema) -> bool,
) -> Vec<Parameter> {
    let columns = R::columns();
    let values = record.values();
    debug_assert_eq!(
        columns.len(),
        values.len(),
        "record `{}` returned {} values for {} columns",
        R::TABLE,
        values.len(),
        columns.len()
    );
    columns
        .iter()
        .zip(values)
        .filter(|(schema, _)| keep(*schema))
        .map(|(schema, value)| schema.column().value(value))
        .collect()
}
