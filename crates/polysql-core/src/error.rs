//! Error types for SQL text generation.

use thiserror::Error;

/// Errors raised while rendering statements.
///
/// Value formatting never fails; the only rendering failure is a strict
/// placeholder substitution whose parameters and placeholders disagree.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Supplied parameters and script placeholders do not correspond 1:1.
    #[error(
        "parameters do not match script placeholders (unused parameters: [{}], unmatched tokens: [{}])",
        .unused_parameters.join(", "),
        .unmatched_tokens.join(", ")
    )]
    ParameterMismatch {
        /// Parameters that were supplied but never referenced by the script.
        unused_parameters: Vec<String>,
        /// Placeholder names in the script with no supplied parameter.
        unmatched_tokens: Vec<String>,
    },

    /// A record was used to build a keyed statement but has no primary key.
    #[error("record for table '{table}' has no primary key column")]
    MissingPrimaryKey {
        /// Table of the record.
        table: String,
    },

    /// A record was used to build an UPDATE but has no writable non-key column.
    #[error("record for table '{table}' has no assignable non-key column")]
    NoAssignableColumns {
        /// Table of the record.
        table: String,
    },
}

impl Error {
    /// Returns true if this is a parameter mismatch.
    #[must_use]
    pub const fn is_parameter_mismatch(&self) -> bool {
        matches!(self, Self::ParameterMismatch { .. })
    }
}

/// Result type alias for rendering operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parameter_mismatch_message() {
        let err = Error::ParameterMismatch {
            unused_parameters: vec![String::from("B")],
            unmatched_tokens: vec![String::from("A"), String::from("C")],
        };
        assert_eq!(
            err.to_string(),
            "parameters do not match script placeholders (unused parameters: [B], unmatched tokens: [A, C])"
        );
        assert!(err.is_parameter_mismatch());
    }

    #[test]
    fn test_missing_primary_key_message() {
        let err = Error::MissingPrimaryKey {
            table: String::from("users"),
        };
        assert_eq!(
            err.to_string(),
            "record for table 'users' has no primary key column"
        );
        assert!(!err.is_parameter_mismatch());
    }
}
