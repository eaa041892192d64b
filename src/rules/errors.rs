//! Rule construction errors
//!
//! All of these are fatal: they stop the middleware from being built.

use thiserror::Error;

/// Result type for rule compilation
pub type RuleResult<T> = Result<T, RuleError>;

/// Configuration rejected at construction time
#[derive(Debug, Error)]
pub enum RuleError {
    /// The rule list was empty
    #[error("at least one validation rule is required")]
    EmptyRules,

    /// A rule names no field
    #[error("validation rule #{index} has an empty field name")]
    EmptyField { index: usize },

    /// A pattern failed to compile
    #[error("invalid regex pattern for field {field}: {source}")]
    InvalidPattern {
        field: String,
        #[source]
        source: regex::Error,
    },

    /// Error response status is not a valid HTTP status code
    #[error("invalid error response status: {0}")]
    InvalidStatus(u16),
}

impl RuleError {
    /// Field the error is attributed to, if any
    pub fn field(&self) -> Option<&str> {
        match self {
            RuleError::InvalidPattern { field, .. } => Some(field),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(
            RuleError::EmptyRules.to_string(),
            "at least one validation rule is required"
        );
        assert_eq!(
            RuleError::InvalidStatus(42).to_string(),
            "invalid error response status: 42"
        );
    }

    #[test]
    fn test_invalid_pattern_names_field() {
        let source = regex::Regex::new("(").unwrap_err();
        let err = RuleError::InvalidPattern {
            field: "userId".to_string(),
            source,
        };
        assert!(err.to_string().starts_with("invalid regex pattern for field userId: "));
        assert_eq!(err.field(), Some("userId"));
    }
}
