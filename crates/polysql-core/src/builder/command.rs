//! The render entry point shared by every statement.

use super::with_terminator;
use crate::dialect::Dialect;
use crate::error::Result;
use crate::schema::Parameter;
use crate::script::substitute;

/// Something that renders to one SQL statement.
pub trait Command {
    /// Renders the statement for `dialect`, appending the dialect's
    /// terminator when `terminate` is set.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ParameterMismatch`](crate::Error::ParameterMismatch)
    /// when a strict script does not match its parameters.
    fn render_with(&self, dialect: &dyn Dialect, terminate: bool) -> Result<String>;

    /// Renders without a terminator.
    ///
    /// # Errors
    ///
    /// See [`Command::render_with`].
    fn render(&self, dialect: &dyn Dialect) -> Result<String> {
        self.render_with(dialect, false)
    }

    /// Renders with the dialect's terminator.
    ///
    /// # Errors
    ///
    /// See [`Command::render_with`].
    fn render_terminated(&self, dialect: &dyn Dialect) -> Result<String> {
        self.render_with(dialect, true)
    }
}

/// A whole statement written as a placeholder script.
#[derive(Debug, Clone, PartialEq)]
pub struct RawCommand {
    text: String,
    parameters: Vec<Parameter>,
    strict: bool,
}

impl RawCommand {
    /// Creates a strict command.
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            parameters: Vec::new(),
            strict: true,
        }
    }

    /// Creates a lenient command.
    #[must_use]
    pub fn lenient(text: impl Into<String>) -> Self {
        Self {
            strict: false,
            ..Self::new(text)
        }
    }

    /// Adds a parameter, replacing any parameter with the same name.
    #[must_use]
    pub fn parameter(mut self, parameter: Parameter) -> Self {
        match self
            .parameters
            .iter_mut()
            .find(|p| p.name() == parameter.name())
        {
            Some(existing) => *existing = parameter,
            None => self.parameters.push(parameter),
        }
        self
    }

    /// Adds several parameters, replacing by name.
    #[must_use]
    pub fn parameters(self, parameters: impl IntoIterator<Item = Parameter>) -> Self {
        parameters.into_iter().fold(self, Self::parameter)
    }

    /// The script text.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Looks up a parameter by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Parameter> {
        self.parameters.iter().find(|p| p.name() == name)
    }

    /// Returns true if placeholders must match parameters one to one.
    #[must_use]
    pub const fn is_strict(&self) -> bool {
        self.strict
    }
}

impl Command for RawCommand {
    fn render_with(&self, dialect: &dyn Dialect, terminate: bool) -> Result<String> {
        let sql = substitute(&self.text, &self.parameters, dialect, self.strict)?;
        Ok(with_terminator(sql, dialect, terminate))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dialect::{Db2Dialect, SqlServerDialect};
    use crate::schema::param;
    use crate::value::Value;

    #[test]
    fn test_raw_command() {
        let cmd = RawCommand::new("Select * From T Where A = :A And B = :B")
            .parameter(param("A", 1))
            .parameter(param("B", "x"));
        assert_eq!(
            cmd.render(&Db2Dialect).unwrap(),
            "Select * From T Where A = 1 And B = 'x'"
        );
        assert_eq!(
            cmd.render_terminated(&Db2Dialect).unwrap(),
            "Select * From T Where A = 1 And B = 'x';"
        );
    }

    #[test]
    fn test_parameter_replaced_by_name() {
        let cmd = RawCommand::new(":A")
            .parameters([param("A", 1), param("A", 2)]);
        assert_eq!(cmd.get("A").map(|p| p.value.clone()), Some(Value::Int(2)));
        assert_eq!(cmd.render(&SqlServerDialect).unwrap(), "2");
    }

    #[test]
    fn test_strict_and_lenient() {
        let strict = RawCommand::new("Delete From T Where Id = :Id");
        assert!(strict.is_strict());
        assert!(strict.render(&SqlServerDialect).unwrap_err().is_parameter_mismatch());

        let lenient = RawCommand::lenient("Delete From T Where Id = :Id").parameter(param("X", 1));
        assert_eq!(
            lenient.render(&SqlServerDialect).unwrap(),
            "Delete From T Where Id = :Id"
        );
        assert_eq!(lenient.text(), "Delete From T Where Id = :Id");
    }
}
