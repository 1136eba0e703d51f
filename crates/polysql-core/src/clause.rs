//! Statement clauses.
//!
//! A [`Clause`] is one independently renderable fragment: a projection, a
//! filter, an assignment list, an ordering or an insert value list. Each
//! fragment is either structured (columns or parameters) or a raw script
//! with its own parameters.

use crate::dialect::{Dialect, QuoteMode};
use crate::error::Result;
use crate::schema::{Column, Parameter};
use crate::script::Substitution;

/// A raw script fragment with its parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct ScriptFragment {
    /// Template text with `:Name` placeholders.
    pub script: String,
    /// Parameters for the placeholders.
    pub parameters: Vec<Parameter>,
    /// Whether parameters and placeholders must match one to one.
    pub strict: bool,
}

impl ScriptFragment {
    /// Creates a strict fragment.
    #[must_use]
    pub fn new(script: impl Into<String>, parameters: impl IntoIterator<Item = Parameter>) -> Self {
        Self {
            script: script.into(),
            parameters: parameters.into_iter().collect(),
            strict: true,
        }
    }

    /// Creates a lenient fragment.
    #[must_use]
    pub fn lenient(
        script: impl Into<String>,
        parameters: impl IntoIterator<Item = Parameter>,
    ) -> Self {
        Self {
            strict: false,
            ..Self::new(script, parameters)
        }
    }

    fn is_present(&self) -> bool {
        !self.script.trim().is_empty()
    }

    fn substitute(&self, dialect: &dyn Dialect) -> Result<String> {
        let mut pass = Substitution::new(&self.parameters, dialect);
        let out = pass.apply(&self.script);
        pass.finish(self.strict)?;
        Ok(out)
    }
}

/// Column and value scripts of an INSERT, sharing one parameter list.
#[derive(Debug, Clone, PartialEq)]
pub struct InsertScript {
    /// Column list text.
    pub columns: String,
    /// Value list text with `:Name` placeholders.
    pub values: String,
    /// Parameters for both scripts.
    pub parameters: Vec<Parameter>,
    /// Whether parameters and placeholders must match one to one.
    pub strict: bool,
}

/// A statement fragment.
///
/// Rendered fragments start with a single space, except projections which
/// open the statement.
#[derive(Debug, Clone, PartialEq)]
pub enum Clause {
    /// `Select a, b`
    SelectColumns(Vec<Column>),
    /// `Select <script>`
    SelectScript(ScriptFragment),
    /// ` Where a = 1 And b is NULL`
    WhereParams(Vec<Parameter>),
    /// ` Where <script>`
    WhereScript(ScriptFragment),
    /// ` Set a = 1, b = 2`
    SetParams(Vec<Parameter>),
    /// ` Set <script>`
    SetScript(ScriptFragment),
    /// ` Order By a, b`
    OrderByAsc(Vec<Column>),
    /// ` Order By a desc, b desc`
    OrderByDesc(Vec<Column>),
    /// ` Order By <script>`
    OrderByScript(ScriptFragment),
    /// ` ( a, b ) Values ( 1, 2 )`
    InsertValuesParams(Vec<Parameter>),
    /// ` ( <columns> ) Values ( <values> )`
    InsertValuesScript(InsertScript),
}

impl Clause {
    /// Returns true if the clause has anything to render.
    #[must_use]
    pub fn is_present(&self) -> bool {
        match self {
            Self::SelectColumns(columns) | Self::OrderByAsc(columns) | Self::OrderByDesc(columns) => {
                !columns.is_empty()
            }
            Self::WhereParams(params) | Self::SetParams(params) | Self::InsertValuesParams(params) => {
                !params.is_empty()
            }
            Self::SelectScript(fragment)
            | Self::WhereScript(fragment)
            | Self::SetScript(fragment)
            | Self::OrderByScript(fragment) => fragment.is_present(),
            Self::InsertValuesScript(insert) => !insert.columns.trim().is_empty(),
        }
    }

    /// Renders the clause, or `None` when it is not present.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ParameterMismatch`](crate::Error::ParameterMismatch)
    /// when a strict script does not match its parameters.
    pub fn render(&self, dialect: &dyn Dialect, mode: QuoteMode) -> Result<Option<String>> {
        if !self.is_present() {
            return Ok(None);
        }
        let quote = |name: &str| dialect.quote(name, mode);
        let sql = match self {
            Self::SelectColumns(columns) => {
                format!("Select {}", join(columns.iter().map(|c| quote(&c.name)), ", "))
            }
            Self::SelectScript(fragment) => format!("Select {}", fragment.substitute(dialect)?),
            Self::WhereParams(params) => {
                let conditions = params.iter().map(|p| {
                    let op = if p.value.is_null() { "is" } else { "=" };
                    format!("{} {op} {}", quote(p.name()), p.to_literal(dialect))
                });
                format!(" Where {}", join(conditions, " And "))
            }
            Self::WhereScript(fragment) => format!(" Where {}", fragment.substitute(dialect)?),
            Self::SetParams(params) => {
                let assignments = params
                    .iter()
                    .map(|p| format!("{} = {}", quote(p.name()), p.to_literal(dialect)));
                format!(" Set {}", join(assignments, ", "))
            }
            Self::SetScript(fragment) => format!(" Set {}", fragment.substitute(dialect)?),
            Self::OrderByAsc(columns) => {
                format!(" Order By {}", join(columns.iter().map(|c| quote(&c.name)), ", "))
            }
            Self::OrderByDesc(columns) => {
                let keys = columns.iter().map(|c| format!("{} desc", quote(&c.name)));
                format!(" Order By {}", join(keys, ", "))
            }
            Self::OrderByScript(fragment) => {
                format!(" Order By {}", fragment.substitute(dialect)?)
            }
            Self::InsertValuesParams(params) => {
                let names = join(params.iter().map(|p| quote(p.name())), ", ");
                let values = join(params.iter().map(|p| p.to_literal(dialect)), ", ");
                format!(" ( {names} ) Values ( {values} )")
            }
            Self::InsertValuesScript(insert) => {
                let mut pass = Substitution::new(&insert.parameters, dialect);
                let names = pass.apply(&insert.columns);
                let values = pass.apply(&insert.values);
                pass.finish(insert.strict)?;
                format!(" ( {names} ) Values ( {values} )")
            }
        };
        Ok(Some(sql))
    }
}

fn join(items: impl Iterator<Item = String>, sep: &str) -> String {
    items.collect::<Vec<_>>().join(sep)
}
