//! Error responses for rejected requests

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use crate::config::ErrorResponseConfig;
use crate::engine::Violation;
use crate::rules::RuleResult;

/// Error response body: `{"error": "...", "code": "..."}`
#[derive(Debug, Serialize)]
pub struct ErrorBody<'a> {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<&'a str>,
}

/// Resolved error response settings
#[derive(Debug, Clone)]
pub struct ErrorReply {
    status: StatusCode,
    code: Option<String>,
}

impl ErrorReply {
    /// Resolves response settings from configuration.
    ///
    /// # Errors
    ///
    /// Fails if the configured status is not a valid HTTP status code.
    pub fn from_config(config: &ErrorResponseConfig) -> RuleResult<Self> {
        Ok(Self {
            status: config.status_code()?,
            code: config.code().map(str::to_string),
        })
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn code(&self) -> Option<&str> {
        self.code.as_deref()
    }

    /// Builds the body for `violation`
    pub fn body(&self, violation: &Violation) -> ErrorBody<'_> {
        ErrorBody {
            error: violation.to_string(),
            code: self.code(),
        }
    }

    /// Builds the full `application/json` response for `violation`
    pub fn render(&self, violation: &Violation) -> Response {
        (self.status, Json(self.body(violation))).into_response()
    }
}
