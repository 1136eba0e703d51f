//! Placeholder substitution.

use std::collections::HashMap;

use tracing::{debug, trace};

use super::{Scanner, SpanKind};
use crate::dialect::Dialect;
use crate::error::{Error, Result};
use crate::schema::Parameter;

/// One substitution pass over one or more scripts sharing a parameter list.
///
/// Resolved literals are memoized for the lifetime of the pass, so a
/// placeholder repeated anywhere in the pass renders identically. Call
/// [`Substitution::finish`] after the last script to run the strict check.
pub struct Substitution<'p> {
    parameters: &'p [Parameter],
    dialect: &'p dyn Dialect,
    resolved: HashMap<String, String>,
    unresolved: Vec<String>,
}

impl<'p> Substitution<'p> {
    /// Starts a pass.
    #[must_use]
    pub fn new(parameters: &'p [Parameter], dialect: &'p dyn Dialect) -> Self {
        Self {
            parameters,
            dialect,
            resolved: HashMap::new(),
            unresolved: Vec::new(),
        }
    }

    /// Substitutes every placeholder in `script` that has a parameter.
    ///
    /// Unknown placeholders are copied verbatim and recorded.
    pub fn apply(&mut self, script: &str) -> String {
        let mut out = String::with_capacity(script.len());
        for segment in Scanner::new(script) {
            let text = segment.text(script);
            if segment.kind != SpanKind::Placeholder {
                out.push_str(text);
                continue;
            }
            let name = &text[1..];
            match self.resolve(name) {
                Some(literal) => out.push_str(literal),
                None => out.push_str(text),
            }
        }
        out
    }

    fn resolve(&mut self, name: &str) -> Option<&str> {
        if !self.resolved.contains_key(name) {
            let Some(parameter) = self.parameters.iter().find(|p| p.name() == name) else {
                trace!(name, "placeholder left unresolved");
                if !self.unresolved.iter().any(|n| n == name) {
                    self.unresolved.push(String::from(name));
                }
                return None;
            };
            let literal = parameter.to_literal(self.dialect);
            trace!(name, literal = %literal, "placeholder resolved");
            self.resolved.insert(String::from(name), literal);
        }
        self.resolved.get(name).map(String::as_str)
    }

    /// Names of supplied parameters that were never consumed.
    ///
    /// Only the first parameter with a given name is ever consumed, so a
    /// repeated name is always reported.
    #[must_use]
    pub fn unused_parameters(&self) -> Vec<String> {
        let mut seen: Vec<&str> = Vec::with_capacity(self.parameters.len());
        let mut unused: Vec<String> = Vec::new();
        for parameter in self.parameters {
            let name = parameter.name();
            let repeated = seen.contains(&name);
            seen.push(name);
            if (repeated || !self.resolved.contains_key(name))
                && !unused.iter().any(|n| n == name)
            {
                unused.push(String::from(name));
            }
        }
        unused
    }

    /// Placeholder names that had no parameter, in first-seen order.
    #[must_use]
    pub fn unmatched_tokens(&self) -> &[String] {
        &self.unresolved
    }

    /// Ends the pass.
    ///
    /// # Errors
    ///
    /// With `strict` set, returns [`Error::ParameterMismatch`] unless every
    /// parameter was used and every placeholder was resolved.
    pub fn finish(self, strict: bool) -> Result<()> {
        if !strict {
            return Ok(());
        }
        let unused_parameters = self.unused_parameters();
        if unused_parameters.is_empty() && self.unresolved.is_empty() {
            return Ok(());
        }
        debug!(
            dialect = self.dialect.name(),
            unused = ?unused_parameters,
            unmatched = ?self.unresolved,
            "strict substitution failed"
        );
        Err(Error::ParameterMismatch {
            unused_parameters,
            unmatched_tokens: self.unresolved,
        })
    }
}

/// Replaces `:Name` placeholders in `script` with dialect literals.
///
/// Placeholders inside string literals and comments are left alone.
///
/// # Errors
///
/// With `strict` set, returns [`Error::ParameterMismatch`] when a parameter
/// is unused or a placeholder has no parameter.
pub fn substitute(
    script: &str,
    parameters: &[Parameter],
    dialect: &dyn Dialect,
    strict: bool,
) -> Result<String> {
    let mut pass = Substitution::new(parameters, dialect);
    let out = pass.apply(script);
    pass.finish(strict)?;
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dialect::{MySqlDialect, OracleDialect, SqlServerDialect};
    use crate::schema::{param, ColumnRule};
    use crate::value::Value;

    #[test]
    fn test_exact_substitution() {
        let sql = substitute(
            "Select * From T Where Id = :Id",
            &[param("Id", 5)],
            &SqlServerDialect,
            true,
        )
        .unwrap();
        assert_eq!(sql, "Select * From T Where Id = 5");
    }

    #[test]
    fn test_literals_and_comments_untouched() {
        let script = "Select ':A', /* :A */ :A -- :A\nFrom T";
        let sql = substitute(script, &[param("A", "v")], &OracleDialect, true).unwrap();
        assert_eq!(sql, "Select ':A', /* :A */ 'v' -- :A\nFrom T");
    }

    #[test]
    fn test_lenient_keeps_colon_strings() {
        let sql = substitute("Select '1:2' From T", &[], &SqlServerDialect, false).unwrap();
        assert_eq!(sql, "Select '1:2' From T");
        let sql = substitute("Select 'it''s' as X", &[], &SqlServerDialect, false).unwrap();
        assert_eq!(sql, "Select 'it''s' as X");
    }

    #[test]
    fn test_strict_mismatch_both_directions() {
        let err = substitute(":A", &[param("B", 1)], &SqlServerDialect, true).unwrap_err();
        assert_eq!(
            err,
            Error::ParameterMismatch {
                unused_parameters: vec![String::from("B")],
                unmatched_tokens: vec![String::from("A")],
            }
        );
    }

    #[test]
    fn test_lenient_leaves_unknown_placeholders() {
        let sql = substitute(":A + :B", &[param("B", 1), param("C", 2)], &MySqlDialect, false)
            .unwrap();
        assert_eq!(sql, ":A + 1");
    }

    #[test]
    fn test_repeated_placeholder_resolves_once() {
        let sql = substitute(
            "Where A = :X or B = :X",
            &[param("X", 0.1_f64)],
            &MySqlDialect,
            true,
        )
        .unwrap();
        assert_eq!(sql, "Where A = 0.1 or B = 0.1");
    }

    #[test]
    fn test_names_are_case_sensitive() {
        let err = substitute(":id", &[param("Id", 1)], &SqlServerDialect, true).unwrap_err();
        assert_eq!(
            err,
            Error::ParameterMismatch {
                unused_parameters: vec![String::from("Id")],
                unmatched_tokens: vec![String::from("id")],
            }
        );
    }

    #[test]
    fn test_duplicate_parameter_names_are_rejected() {
        let params = [param("A", 1), param("A", 2)];
        let err = substitute(":A", &params, &SqlServerDialect, true).unwrap_err();
        assert_eq!(
            err,
            Error::ParameterMismatch {
                unused_parameters: vec![String::from("A")],
                unmatched_tokens: Vec::new(),
            }
        );
    }

    #[test]
    fn test_lenient_first_duplicate_parameter_wins() {
        let params = [param("A", 1), param("A", 2)];
        let sql = substitute(":A", &params, &SqlServerDialect, false).unwrap();
        assert_eq!(sql, "1");
    }

    #[test]
    fn test_unmatched_tokens_are_deduplicated() {
        let err = substitute(":Z :Y :Z", &[], &SqlServerDialect, true).unwrap_err();
        let Error::ParameterMismatch {
            unmatched_tokens, ..
        } = err
        else {
            panic!("expected a parameter mismatch");
        };
        assert_eq!(unmatched_tokens, vec!["Z", "Y"]);
    }

    #[test]
    fn test_rule_reaches_formatter() {
        let p = Parameter::with_rule("N", "abc", ColumnRule::USE_VARCHAR_TYPE);
        let sql = substitute(":N|:M", &[p, param("M", "abc")], &SqlServerDialect, true).unwrap();
        assert_eq!(sql, "'abc'|N'abc'");
    }

    #[test]
    fn test_null_parameter() {
        let sql = substitute("x = :V", &[param("V", Value::Null)], &SqlServerDialect, true).unwrap();
        assert_eq!(sql, "x = NULL");
    }

    #[test]
    fn test_pass_spans_several_scripts() {
        let params = [param("A", 1), param("B", 2)];
        let mut pass = Substitution::new(&params, &SqlServerDialect);
        assert_eq!(pass.apply("(:A)"), "(1)");
        assert_eq!(pass.unused_parameters(), vec!["B"]);
        assert_eq!(pass.apply("(:B, :A)"), "(2, 1)");
        assert!(pass.unmatched_tokens().is_empty());
        pass.finish(true).unwrap();
    }
}
