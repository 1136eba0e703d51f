//! UPDATE statement builder.

use std::marker::PhantomData;

use super::{push_clause, with_terminator, Command, HasTable, NoTable};
use crate::clause::{Clause, ScriptFragment};
use crate::dialect::{Dialect, QuoteMode};
use crate::error::{Error, Result};
use crate::record::Record;
use crate::schema::{Column, Parameter, Table};
use crate::value::ToValue;

/// An UPDATE statement builder.
///
/// Renders as `Update <table><assignments><filter>`.
#[derive(Debug, Clone)]
pub struct Update<T> {
    table: Option<Table>,
    quote_mode: QuoteMode,
    assignment: Option<Clause>,
    filter: Option<Clause>,
    _state: PhantomData<T>,
}

impl Update<NoTable> {
    /// Creates a new UPDATE builder.
    #[must_use]
    pub fn new() -> Self {
        Self {
            table: None,
            quote_mode: QuoteMode::default(),
            assignment: None,
            filter: None,
            _state: PhantomData,
        }
    }

    /// Specifies the table to update.
    #[must_use]
    pub fn table(self, table: impl Into<Table>) -> Update<HasTable> {
        Update {
            table: Some(table.into()),
            quote_mode: self.quote_mode,
            assignment: self.assignment,
            filter: self.filter,
            _state: PhantomData,
        }
    }
}

impl Default for Update<NoTable> {
    fn default() -> Self {
        Self::new()
    }
}

impl Update<HasTable> {
    /// Assigns every written non-key column of `record`, filtered by its key.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingPrimaryKey`] if the record has no key column
    /// and [`Error::NoAssignableColumns`] if it has nothing to assign.
    pub fn from_record<R: Record>(record: &R) -> Result<Self> {
        let key = record.primary_key();
        if key.is_empty() {
            return Err(Error::MissingPrimaryKey {
                table: String::from(R::TABLE),
            });
        }
        let assignments = record.non_primary_key();
        if assignments.is_empty() {
            return Err(Error::NoAssignableColumns {
                table: String::from(R::TABLE),
            });
        }
        Ok(Update::new()
            .table(R::table())
            .set(assignments)
            .where_and(key))
    }
}

impl<T> Update<T> {
    /// Sets how identifiers are quoted.
    #[must_use]
    pub const fn quote_mode(mut self, mode: QuoteMode) -> Self {
        self.quote_mode = mode;
        self
    }

    /// Assigns `column = value` for every parameter.
    #[must_use]
    pub fn set(mut self, parameters: impl IntoIterator<Item = Parameter>) -> Self {
        self.assignment = Some(Clause::SetParams(parameters.into_iter().collect()));
        self
    }

    /// Assigns a single column.
    #[must_use]
    pub fn set_one(self, column: impl Into<Column>, value: impl ToValue) -> Self {
        let column: Column = column.into();
        self.set([column.value(value)])
    }

    /// Assigns with a strict script.
    #[must_use]
    pub fn set_script(
        mut self,
        script: impl Into<String>,
        parameters: impl IntoIterator<Item = Parameter>,
    ) -> Self {
        self.assignment = Some(Clause::SetScript(ScriptFragment::new(script, parameters)));
        self
    }

    /// Assigns with a lenient script.
    #[must_use]
    pub fn set_script_lenient(
        mut self,
        script: impl Into<String>,
        parameters: impl IntoIterator<Item = Parameter>,
    ) -> Self {
        self.assignment = Some(Clause::SetScript(ScriptFragment::lenient(script, parameters)));
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

    /// The assignment clause, if set.
    #[must_use]
    pub const fn assignment(&self) -> Option<&Clause> {
        self.assignment.as_ref()
    }

    /// The filter clause, if set.
    #[must_use]
    pub const fn filter(&self) -> Option<&Clause> {
        self.filter.as_ref()
    }
}

impl Command for Update<HasTable> {
    fn render_with(&self, dialect: &dyn Dialect, terminate: bool) -> Result<String> {
        let mut sql = String::from("Update ");
        if let Some(table) = &self.table {
            sql.push_str(&table.to_sql(dialect, self.quote_mode));
        }
        push_clause(&mut sql, self.assignment.as_ref(), dialect, self.quote_mode)?;
        push_clause(&mut sql, self.filter.as_ref(), dialect, self.quote_mode)?;
        Ok(with_terminator(sql, dialect, terminate))
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;
    use crate::dialect::{Db2Dialect, MySqlDialect, SqlServerDialect};
    use crate::schema::param;

    #[test]
    fn test_simple_update() {
        let sql = Update::new()
            .table("Users")
            .set([param("Name", "Bob"), param("Active", false)])
            .where_one("Id", 3)
            .render(&MySqlDialect)
            .unwrap();
        assert_eq!(sql, "Update Users Set \"Name\" = 'Bob', Active = False Where Id = 3");
    }

    #[test]
    fn test_update_date_and_terminator() {
        let when = NaiveDate::from_ymd_opt(2024, 5, 6)
            .unwrap()
            .and_hms_opt(7, 8, 9)
            .unwrap();
        let sql = Update::new()
            .table("Jobs")
            .set_one("RunAt", when)
            .where_script("Id = :Id", [param("Id", 1)])
            .render_terminated(&Db2Dialect)
            .unwrap();
        assert_eq!(
            sql,
            "Update Jobs Set RunAt = TO_DATE('2024/05/06 07:08:09','YYYY/MM/DD HH24:MI:SS') Where Id = 1;"
        );
    }

    #[test]
    fn test_update_set_script() {
        let sql = Update::new()
            .table("Stock")
            .set_script("Qty = Qty - :N", [param("N", 2)])
            .where_and([param("Sku", "A-1")])
            .render(&SqlServerDialect)
            .unwrap();
        assert_eq!(sql, "Update Stock Set Qty = Qty - 2 Where Sku = N'A-1'");
    }

    #[test]
    fn test_update_set_script_lenient() {
        let update = Update::new()
            .table("T")
            .set_script_lenient("A = :A", [])
            .where_script_lenient("B = :B", [param("B", 1), param("C", 2)]);
        assert_eq!(
            update.render(&SqlServerDialect).unwrap(),
            "Update T Set A = :A Where B = 1"
        );
        assert!(update.assignment().is_some());
        assert!(update.filter().is_some());
    }

    #[test]
    fn test_update_without_filter() {
        let sql = Update::new()
            .table("T")
            .set_one("A", 1)
            .render(&SqlServerDialect)
            .unwrap();
        assert_eq!(sql, "Update T Set A = 1");
    }
}
