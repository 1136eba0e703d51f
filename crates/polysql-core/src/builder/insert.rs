//! INSERT statement builder.

use std::marker::PhantomData;

use super::{push_clause, with_terminator, Command, HasTable, NoTable};
use crate::clause::{Clause, InsertScript};
use crate::dialect::{Dialect, QuoteMode};
use crate::error::Result;
use crate::record::{ConvertDirection, Record};
use crate::schema::{Parameter, Table};

/// An INSERT statement builder.
///
/// Renders as `Insert Into <table> ( <columns> ) Values ( <values> )`.
#[derive(Debug, Clone)]
pub struct Insert<T> {
    table: Option<Table>,
    quote_mode: QuoteMode,
    values: Option<Clause>,
    _state: PhantomData<T>,
}

impl Insert<NoTable> {
    /// Creates a new INSERT builder.
    #[must_use]
    pub fn new() -> Self {
        Self {
            table: None,
            quote_mode: QuoteMode::default(),
            values: None,
            _state: PhantomData,
        }
    }

    /// Specifies the table to insert into.
    #[must_use]
    pub fn into_table(self, table: impl Into<Table>) -> Insert<HasTable> {
        Insert {
            table: Some(table.into()),
            quote_mode: self.quote_mode,
            values: self.values,
            _state: PhantomData,
        }
    }
}

impl Default for Insert<NoTable> {
    fn default() -> Self {
        Self::new()
    }
}

impl Insert<HasTable> {
    /// Inserts every written column of `record`.
    #[must_use]
    pub fn from_record<R: Record>(record: &R) -> Self {
        Insert::new()
            .into_table(R::table())
            .values(record.to_parameters(ConvertDirection::ToDb))
    }
}

impl<T> Insert<T> {
    /// Sets how identifiers are quoted.
    #[must_use]
    pub const fn quote_mode(mut self, mode: QuoteMode) -> Self {
        self.quote_mode = mode;
        self
    }

    /// Inserts one value per parameter, named by the parameter.
    #[must_use]
    pub fn values(mut self, parameters: impl IntoIterator<Item = Parameter>) -> Self {
        self.values = Some(Clause::InsertValuesParams(parameters.into_iter().collect()));
        self
    }

    /// Inserts with a column script and a value script sharing `parameters`.
    ///
    /// The strict check covers both scripts together.
    #[must_use]
    pub fn values_script(
        self,
        columns: impl Into<String>,
        values: impl Into<String>,
        parameters: impl IntoIterator<Item = Parameter>,
    ) -> Self {
        self.with_script(columns.into(), values.into(), parameters, true)
    }

    /// Like [`Insert::values_script`] without the strict check.
    #[must_use]
    pub fn values_script_lenient(
        self,
        columns: impl Into<String>,
        values: impl Into<String>,
        parameters: impl IntoIterator<Item = Parameter>,
    ) -> Self {
        self.with_script(columns.into(), values.into(), parameters, false)
    }

    fn with_script(
        mut self,
        columns: String,
        values: String,
        parameters: impl IntoIterator<Item = Parameter>,
        strict: bool,
    ) -> Self {
        self.values = Some(Clause::InsertValuesScript(InsertScript {
            columns,
            values,
            parameters: parameters.into_iter().collect(),
            strict,
        }));
        self
    }

    /// The values clause, if set.
    #[must_use]
    pub const fn values_clause(&self) -> Option<&Clause> {
        self.values.as_ref()
    }
}

impl Command for Insert<HasTable> {
    fn render_with(&self, dialect: &dyn Dialect, terminate: bool) -> Result<String> {
        let mut sql = String::from("Insert Into ");
        if let Some(table) = &self.table {
            sql.push_str(&table.to_sql(dialect, self.quote_mode));
        }
        push_clause(&mut sql, self.values.as_ref(), dialect, self.quote_mode)?;
        Ok(with_terminator(sql, dialect, terminate))
    }
}
