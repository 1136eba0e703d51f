//! DELETE statement builder.

use std::marker::PhantomData;

use super::{push_clause, with_terminator, Command, HasTable, NoTable};
use crate::clause::{Clause, ScriptFragment};
use crate::dialect::{Dialect, QuoteMode};
use crate::error::{Error, Result};
use crate::record::Record;
use crate::schema::{Column, Parameter, Table};
use crate::value::ToValue;

/// A DELETE statement builder.
///
/// Renders as `Delete From <table><filter>`. A DELETE without a filter
/// deletes every row; nothing prevents that.
#[derive(Debug, Clone)]
pub struct Delete<T> {
    table: Option<Table>,
    quote_mode: QuoteMode,
    filter: Option<Clause>,
    _state: PhantomData<T>,
}

impl Delete<NoTable> {
    /// Creates a new DELETE builder.
    #[must_use]
    pub fn new() -> Self {
        Self {
            table: None,
            quote_mode: QuoteMode::default(),
            filter: None,
            _state: PhantomData,
        }
    }

    /// Specifies the table to delete from.
    #[must_use]
    pub fn from(self, table: impl Into<Table>) -> Delete<HasTable> {
        Delete {
            table: Some(table.into()),
            quote_mode: self.quote_mode,
            filter: self.filter,
            _state: PhantomData,
        }
    }
}

impl Default for Delete<NoTable> {
    fn default() -> Self {
        Self::new()
    }
}

impl Delete<HasTable> {
    /// Deletes the row identified by the key of `record`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingPrimaryKey`] if the record has no key column.
    pub fn from_record<R: Record>(record: &R) -> Result<Self> {
        let key = record.primary_key();
        if key.is_empty() {
            return Err(Error::MissingPrimaryKey {
                table: String::from(R::TABLE),
            });
        }
        Ok(Delete::new().from(R::table()).where_and(key))
    }
}

impl<T> Delete<T> {
    /// Sets how identifiers are quoted.
    #[must_use]
    pub const fn quote_mode(mut self, mode: QuoteMode) -> Self {
        self.quote_mode = mode;
        self
    }

    /// Filters on `column = value` for every parameter, joined with `And`.
    #[must_use]
    pub fn where_and(mut self, parameters: impl IntoIterator<Item = Parameter>) -> Self {
        self.filter = Some(Clause::WhereParams(parameters.into_iter().collect()));
        self
    }

    /// Filters on a single column.
    #[must_use]
    pub fn where_one(self, column: impl Into<Column>, value: impl ToValue) -> Self {
        let column: Column = column.into();
        self.where_and([column.value(value)])
    }

    /// Filters with a strict script.
    #[must_use]
    pub fn where_script(
        mut self,
        script: impl Into<String>,
        parameters: impl IntoIterator<Item = Parameter>,
    ) -> Self {
        self.filter = Some(Clause::WhereScript(ScriptFragment::new(script, parameters)));
        self
    }

    /// Filters with a lenient script.
    #[must_use]
    pub fn where_script_lenient(
        mut self,
        script: impl Into<String>,
        parameters: impl IntoIterator<Item = Parameter>,
    ) -> Self {
        self.filter = Some(Clause::WhereScript(ScriptFragment::lenient(script, parameters)));
        self
    }

    /// Returns true if a filter is set.
    #[must_use]
    pub const fn has_where_clause(&self) -> bool {
        self.filter.is_some()
    }
}

impl Command for Delete<HasTable> {
    fn render_with(&self, dialect: &dyn Dialect, terminate: bool) -> Result<String> {
        let mut sql = String::from("Delete From ");
        if let Some(table) = &self.table {
            sql.push_str(&table.to_sql(dialect, self.quote_mode));
        }
        push_clause(&mut sql, self.filter.as_ref(), dialect, self.quote_mode)?;
        Ok(with_terminator(sql, dialect, terminate))
    }
}
