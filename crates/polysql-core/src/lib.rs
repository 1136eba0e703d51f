//! # polysql-core
//!
//! Dialect-aware SQL text generation.
//!
//! This crate provides:
//! - Dialect profiles for SQL Server, Oracle, MySQL, Access and DB2
//! - A value formatter and an identifier quoter per dialect
//! - A `:Name` placeholder engine that leaves string literals and comments
//!   untouched
//! - SELECT, INSERT, UPDATE and DELETE builders using the typestate pattern
//!
//! ## Building statements
//!
//! ```rust
//! use polysql_core::builder::{Command, Update};
//! use polysql_core::dialect::MySqlDialect;
//! use polysql_core::param;
//!
//! let sql = Update::new()
//!     .table("Users")
//!     .set([param("Active", true)])
//!     .where_script("LastSeen < :Cutoff And Note <> ':Cutoff'", [param("Cutoff", 30)])
//!     .render_terminated(&MySqlDialect)
//!     .unwrap();
//!
//! assert_eq!(
//!     sql,
//!     "Update Users Set Active = True Where LastSeen < 30 And Note <> ':Cutoff';"
//! );
//! ```
//!
//! ## Strict substitution
//!
//! Script clauses are strict by default: every parameter must be used and
//! every placeholder must have a parameter.
//!
//! ```rust
//! use polysql_core::{substitute, param, Error};
//! use polysql_core::dialect::SqlServerDialect;
//!
//! let err = substitute(":A", &[param("B", 1)], &SqlServerDialect, true).unwrap_err();
//! assert!(matches!(err, Error::ParameterMismatch { .. }));
//! ```

pub mod builder;
pub mod clause;
pub mod config;
pub mod dialect;
pub mod error;
pub mod record;
pub mod schema;
pub mod script;
pub mod value;

pub use builder::{Command, Delete, Insert, RawCommand, Select, Update};
pub use clause::Clause;
pub use config::RenderConfig;
pub use dialect::{Dialect, DialectKind, QuoteMode};
pub use error::{Error, Result};
pub use record::{ColumnSchema, ConvertDirection, Record};
pub use schema::{column, param, Column, ColumnRule, Parameter, Table};
pub use script::substitute;
pub use value::{EnumValue, SqlEnum, ToValue, Value};
