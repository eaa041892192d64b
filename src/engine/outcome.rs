//! Validation outcomes
//!
//! The `Display` text of each [`Violation`] is the exact `error` string
//! clients receive.

use thiserror::Error;

/// Why a request body was rejected
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Violation {
    /// Request carried no body at all
    #[error("Request body is required")]
    MissingBody,

    /// Body stream failed or exceeded the configured cap
    #[error("Failed to read request body")]
    UnreadableBody,

    /// Body is not a JSON object
    #[error("Invalid JSON format")]
    InvalidJson,

    #[error("Field '{field}' is required")]
    MissingField { field: String },

    #[error("Field '{field}' cannot be empty")]
    EmptyField { field: String },

    #[error("Field '{field}' must be at least {min} characters")]
    TooShort { field: String, min: usize },

    #[error("Field '{field}' must not exceed {max} characters")]
    TooLong { field: String, max: usize },

    #[error("Field '{field}' does not match required pattern")]
    PatternMismatch { field: String },
}

impl Violation {
    /// Field the violation is attributed to, if any
    pub fn field(&self) -> Option<&str> {
        match self {
            Violation::MissingBody | Violation::UnreadableBody | Violation::InvalidJson => None,
            Violation::MissingField { field }
            | Violation::EmptyField { field }
            | Violation::TooShort { field, .. }
            | Violation::TooLong { field, .. }
            | Violation::PatternMismatch { field } => Some(field),
        }
    }
}

/// Result of validating one body: exactly one of pass or fail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Pass,
    Fail(Violation),
}

impl Outcome {
    pub fn is_pass(&self) -> bool {
        matches!(self, Outcome::Pass)
    }

    /// The violation, if the body failed
    pub fn violation(&self) -> Option<&Violation> {
        match self {
            Outcome::Pass => None,
            Outcome::Fail(violation) => Some(violation),
        }
    }

    /// The client-facing failure message, if the body failed
    pub fn message(&self) -> Option<String> {
        self.violation().map(Violation::to_string)
    }
}

impl From<Violation> for Outcome {
    fn from(violation: Violation) -> Self {
        Outcome::Fail(violation)
    }
}

impl From<Result<(), Violation>> for Outcome {
    fn from(result: Result<(), Violation>) -> Self {
        match result {
            Ok(()) => Outcome::Pass,
            Err(violation) => Outcome::Fail(violation),
        }
    }
}
