//! Statement builders.
//!
//! The builders use the typestate pattern: `render` is only available once
//! a table has been given.
//!
//! # Example
//!
//! ```rust
//! use polysql_core::builder::{Command, Select};
//! use polysql_core::dialect::SqlServerDialect;
//! use polysql_core::param;
//!
//! let sql = Select::new()
//!     .columns(["Id", "Name"])
//!     .from("Users")
//!     .where_and([param("Id", 5)])
//!     .render(&SqlServerDialect)
//!     .unwrap();
//!
//! assert_eq!(sql, "Select Id, Name From Users Where Id = 5");
//! ```

mod command;
mod delete;
mod insert;
mod select;
mod update;

pub use command::{Command, RawCommand};
pub use delete::Delete;
pub use insert::Insert;
pub use select::Select;
pub use update::Update;

use crate::clause::Clause;
use crate::dialect::{Dialect, QuoteMode};
use crate::error::Result;

// Typestate markers

/// Marker: No table specified yet.
#[derive(Debug, Clone, Copy)]
pub struct NoTable;
/// Marker: Table has been specified.
#[derive(Debug, Clone, Copy)]
pub struct HasTable;

/// Appends a rendered optional clause.
fn push_clause(
    sql: &mut String,
    clause: Option<&Clause>,
    dialect: &dyn Dialect,
    mode: QuoteMode,
) -> Result<()> {
    if let Some(text) = clause.map(|c| c.render(dialect, mode)).transpose()?.flatten() {
        sql.push_str(&text);
    }
    Ok(())
}

/// Appends the statement terminator on request.
fn with_terminator(mut sql: String, dialect: &dyn Dialect, terminate: bool) -> String {
    if terminate {
        sql.push_str(dialect.statement_terminator());
    }
    sql
}
