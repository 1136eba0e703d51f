#![allow(dead_code)]

use polysql_core::builder::Command;
use polysql_core::dialect::{Dialect, DialectKind};
use polysql_core::Error;

pub fn render(command: &impl Command, dialect: &dyn Dialect) -> String {
    command
        .render(dialect)
        .unwrap_or_else(|e| panic!("Failed to render for {}: {e}", dialect.name()))
}

pub fn render_err(command: &impl Command, dialect: &dyn Dialect) -> Error {
    command
        .render(dialect)
        .expect_err("Expected a render error")
}

/// Renders `command` for every dialect, in `DialectKind::ALL` order.
pub fn render_all(command: &impl Command) -> Vec<String> {
    DialectKind::ALL
        .iter()
        .map(|kind| render(command, kind.profile()))
        .collect()
}

pub fn mismatch(err: Error) -> (Vec<String>, Vec<String>) {
    match err {
        Error::ParameterMismatch {
            unused_parameters,
            unmatched_tokens,
        } => (unused_parameters, unmatched_tokens),
        other => panic!("Expected ParameterMismatch, got {other:?}"),
    }
}
