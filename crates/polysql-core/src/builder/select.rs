//! SELECT statement builder.

use std::marker::PhantomData;

use super::{push_clause, with_terminator, Command, HasTable, NoTable};
use crate::clause::{Clause, ScriptFragment};
use crate::dialect::{Dialect, QuoteMode};
use crate::error::Result;
use crate::record::Record;
use crate::schema::{Column, Parameter, Table};
use crate::value::ToValue;

/// A SELECT statement builder.
///
/// Renders as `<projection> From <table><filter><ordering>`. The builder
/// does not require a projection; leaving it out yields ` From <table>`.
#[derive(Debug, Clone)]
pub struct Select<T> {
    table: Option<Table>,
    quote_mode: QuoteMode,
    projection: Option<Clause>,
    filter: Option<Clause>,
    ordering: Option<Clause>,
    _state: PhantomData<T>,
}

impl Select<NoTable> {
    /// Creates a new SELECT builder.
    #[must_use]
    pub fn new() -> Self {
        Self {
            table: None,
            quote_mode: QuoteMode::default(),
            projection: None,
            filter: None,
            ordering: None,
            _state: PhantomData,
        }
    }

    /// Specifies the table to select from.
    #[must_use]
    pub fn from(self, table: impl Into<Table>) -> Select<HasTable> {
        Select {
            table: Some(table.into()),
            quote_mode: self.quote_mode,
            projection: self.projection,
            filter: self.filter,
            ordering: self.ordering,
            _state: PhantomData,
        }
    }
}

impl Default for Select<NoTable> {
    fn default() -> Self {
        Self::new()
    }
}

impl Select<HasTable> {
    /// Selects every readable column of a record's table.
    #[must_use]
    pub fn from_record<R: Record>() -> Self {
        let columns = R::columns()
            .iter()
            .filter(|schema| schema.direction.reads())
            .map(|schema| schema.column());
        Select::new().columns(columns).from(R::table())
    }
}

impl<T> Select<T> {
    /// Sets how identifiers are quoted.
    #[must_use]
    pub const fn quote_mode(mut self, mode: QuoteMode) -> Self {
        self.quote_mode = mode;
        self
    }

    /// Projects `*`.
    #[must_use]
    pub fn all(self) -> Self {
        self.script("*", [])
    }

    /// Projects the given columns.
    #[must_use]
    pub fn columns<C: Into<Column>>(mut self, columns: impl IntoIterator<Item = C>) -> Self {
        self.projection = Some(Clause::SelectColumns(
            columns.into_iter().map(Into::into).collect(),
        ));
        self
    }

    /// Projects a strict script.
    #[must_use]
    pub fn script(
        mut self,
        script: impl Into<String>,
        parameters: impl IntoIterator<Item = Parameter>,
    ) -> Self {
        self.projection = Some(Clause::SelectScript(ScriptFragment::new(script, parameters)));
        self
    }

    /// Projects a lenient script.
    #[must_use]
    pub fn script_lenient(
        mut self,
        script: impl Into<String>,
        parameters: impl IntoIterator<Item = Parameter>,
    ) -> Self {
        self.projection = Some(Clause::SelectScript(ScriptFragment::lenient(
            script, parameters,
        )));
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

    /// Orders ascending by the given columns.
    #[must_use]
    pub fn order_by_asc<C: Into<Column>>(mut self, columns: impl IntoIterator<Item = C>) -> Self {
        self.ordering = Some(Clause::OrderByAsc(
            columns.into_iter().map(Into::into).collect(),
        ));
        self
    }

    /// Orders descending by the given columns.
    #[must_use]
    pub fn order_by_desc<C: Into<Column>>(mut self, columns: impl IntoIterator<Item = C>) -> Self {
        self.ordering = Some(Clause::OrderByDesc(
            columns.into_iter().map(Into::into).collect(),
        ));
        self
    }

    /// Orders with a strict script.
    #[must_use]
    pub fn order_by_script(
        mut self,
        script: impl Into<String>,
        parameters: impl IntoIterator<Item = Parameter>,
    ) -> Self {
        self.ordering = Some(Clause::OrderByScript(ScriptFragment::new(script, parameters)));
        self
    }

    /// Orders with a lenient script.
    #[must_use]
    pub fn order_by_script_lenient(
        mut self,
        script: impl Into<String>,
        parameters: impl IntoIterator<Item = Parameter>,
    ) -> Self {
        self.ordering = Some(Clause::OrderByScript(ScriptFragment::lenient(
            script, parameters,
        )));
        self
    }

    /// The projection clause, if set.
    #[must_use]
    pub const fn projection(&self) -> Option<&Clause> {
        self.projection.as_ref()
    }

    /// The filter clause, if set.
    #[must_use]
    pub const fn filter(&self) -> Option<&Clause> {
        self.filter.as_ref()
    }

    /// The ordering clause, if set.
    #[must_use]
    pub const fn ordering(&self) -> Option<&Clause> {
        self.ordering.as_ref()
    }
}

impl Command for Select<HasTable> {
    fn render_with(&self, dialect: &dyn Dialect, terminate: bool) -> Result<String> {
        let mut sql = String::new();
        push_clause(&mut sql, self.projection.as_ref(), dialect, self.quote_mode)?;
        sql.push_str(" From ");
        if let Some(table) = &self.table {
            sql.push_str(&table.to_sql(dialect, self.quote_mode));
        }
        push_clause(&mut sql, self.filter.as_ref(), dialect, self.quote_mode)?;
        push_clause(&mut sql, self.ordering.as_ref(), dialect, self.quote_mode)?;
        Ok(with_terminator(sql, dialect, terminate))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dialect::{MySqlDialect, OracleDialect, SqlServerDialect};
    use crate::schema::param;
    use crate::value::Value;

    #[test]
    fn test_simple_select() {
        let sql = Select::new()
            .columns(["Id"])
            .from("T")
            .where_one("Id", 5)
            .render(&SqlServerDialect)
            .unwrap();
        assert_eq!(sql, "Select Id From T Where Id = 5");
    }

    #[test]
    fn test_select_all_ordered() {
        let sql = Select::new()
            .from("Users")
            .all()
            .order_by_desc(["Created", "Id"])
            .render_terminated(&MySqlDialect)
            .unwrap();
        assert_eq!(sql, "Select * From Users Order By Created desc, Id desc;");
    }

    #[test]
    fn test_select_without_projection() {
        let sql = Select::new().from("T").render(&SqlServerDialect).unwrap();
        assert_eq!(sql, " From T");
    }

    #[test]
    fn test_select_quoting() {
        let select = Select::new()
            .columns(["Order", "Name"])
            .from("User")
            .order_by_asc(["Name"]);
        assert_eq!(
            select.render(&SqlServerDialect).unwrap(),
            "Select [Order], Name From [User] Order By Name"
        );
        assert_eq!(
            select.clone().quote_mode(QuoteMode::Always).render(&OracleDialect).unwrap(),
            "Select \"Order\", \"Name\" From \"User\" Order By \"Name\""
        );
        assert_eq!(
            select.quote_mode(QuoteMode::Never).render(&SqlServerDialect).unwrap(),
            "Select Order, Name From User Order By Name"
        );
    }

    #[test]
    fn test_select_scripts() {
        let sql = Select::new()
            .script("Count(*) As N, :Tag As Tag", [param("Tag", "a")])
            .from("T")
            .where_script("Created > :Since /* :Since */", [param("Since", 3)])
            .order_by_script("N desc", [])
            .render(&OracleDialect)
            .unwrap();
        assert_eq!(
            sql,
            "Select Count(*) As N, 'a' As Tag From T Where Created > 3 /* :Since */ Order By N desc"
        );
    }

    #[test]
    fn test_where_and_with_null() {
        let sql = Select::new()
            .all()
            .from("T")
            .where_and([param("A", 1), param("B", Value::Null)])
            .render(&SqlServerDialect)
            .unwrap();
        assert_eq!(sql, "Select * From T Where A = 1 And B is NULL");
    }

    #[test]
    fn test_strict_where_script_fails() {
        let select = Select::new().all().from("T").where_script("A = :A", []);
        assert!(select.render(&SqlServerDialect).unwrap_err().is_parameter_mismatch());

        let lenient = Select::new().all().from("T").where_script_lenient("A = :A", []);
        assert_eq!(
            lenient.render(&SqlServerDialect).unwrap(),
            "Select * From T Where A = :A"
        );
    }

    #[test]
    fn test_clone_then_diverge() {
        let template = Select::new().columns(["Id"]).from("T");
        let by_id = template.clone().where_one("Id", 1);
        let by_name = template.clone().where_one("Name", "n");
        assert_eq!(template.render(&SqlServerDialect).unwrap(), "Select Id From T");
        assert_eq!(by_id.render(&SqlServerDialect).unwrap(), "Select Id From T Where Id = 1");
        assert_eq!(
            by_name.render(&SqlServerDialect).unwrap(),
            "Select Id From T Where Name = N'n'"
        );
        assert!(template.filter().is_none());
        assert!(by_id.projection().is_some());
        assert!(by_id.ordering().is_none());
    }

    #[test]
    fn test_render_is_repeatable() {
        let select = Select::new()
            .all()
            .from("T")
            .where_script("X = :X", [param("X", 0.5_f64)]);
        let first = select.render(&SqlServerDialect).unwrap();
        assert_eq!(first, select.render(&SqlServerDialect).unwrap());
    }
}
