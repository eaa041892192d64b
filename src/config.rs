//! Configuration for the validator and the demo server
//!
//! JSON format:
//!
//! ```json
//! {
//!   "server": { "host": "0.0.0.0", "port": 8080 },
//!   "middleware": {
//!     "name": "signup-validator",
//!     "rules": [
//!       { "field": "username", "required": true, "minLength": 3, "maxLength": 20,
//!         "pattern": "^[a-zA-Z0-9_]{3,20}$" }
//!     ],
//!     "response": { "status": 422, "code": "INVALID_SIGNUP" },
//!     "maxBodyBytes": 65536,
//!     "evaluation": "configured"
//!   }
//! }
//! ```

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use axum::http::StatusCode;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::http_server::ServerConfig;
use crate::rules::{EvaluationOrder, RuleError, ValidationRule};

/// Result type for configuration loading
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Configuration loading errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid config JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Error response settings.
///
/// Deserialized on top of [`ErrorResponseConfig::default`], so a partial
/// block keeps the defaults for any key it omits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ErrorResponseConfig {
    /// HTTP status for rejected requests (0 = 400)
    pub status: u16,

    /// Label emitted as `"code"`; empty means no `"code"` key
    pub code: String,

    /// Accepted for compatibility. Every rejection carries its own specific
    /// message instead.
    pub message: String,
}

impl Default for ErrorResponseConfig {
    fn default() -> Self {
        Self {
            status: 400,
            code: "INVALID_REQUEST".to_string(),
            message: "Invalid request body".to_string(),
        }
    }
}

impl ErrorResponseConfig {
    /// Resolves the configured status, mapping 0 to 400.
    ///
    /// # Errors
    ///
    /// Returns `RuleError::InvalidStatus` for values outside 100..=999.
    pub fn status_code(&self) -> Result<StatusCode, RuleError> {
        if self.status == 0 {
            return Ok(StatusCode::BAD_REQUEST);
        }
        StatusCode::from_u16(self.status).map_err(|_| RuleError::InvalidStatus(self.status))
    }

    /// The configured code, if non-empty
    pub fn code(&self) -> Option<&str> {
        Some(self.code.as_str()).filter(|c| !c.is_empty())
    }
}

/// One validator instance
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MiddlewareConfig {
    /// Instance name, used to attribute log events
    #[serde(default = "default_name")]
    pub name: String,

    #[serde(default)]
    pub rules: Vec<ValidationRule>,

    #[serde(default)]
    pub response: ErrorResponseConfig,

    /// Cap on buffered body size; unlimited when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_body_bytes: Option<usize>,

    #[serde(default)]
    pub evaluation: EvaluationOrder,
}

fn default_name() -> String {
    "json-body-validator".to_string()
}

impl MiddlewareConfig {
    /// Creates a config with default name and response settings
    pub fn new(rules: Vec<ValidationRule>) -> Self {
        Self {
            name: default_name(),
            rules,
            response: ErrorResponseConfig::default(),
            max_body_bytes: None,
            evaluation: EvaluationOrder::default(),
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_response(mut self, response: ErrorResponseConfig) -> Self {
        self.response = response;
        self
    }

    pub fn with_max_body_bytes(mut self, limit: usize) -> Self {
        self.max_body_bytes = Some(limit);
        self
    }

    pub fn with_evaluation(mut self, order: EvaluationOrder) -> Self {
        self.evaluation = order;
        self
    }
}

/// Top-level configuration file
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,

    pub middleware: MiddlewareConfig,
}

impl AppConfig {
    /// Load configuration from a JSON file.
    ///
    /// Only parses; rule compilation happens when the layer is built.
    pub fn load(path: &Path) -> ConfigResult<Self> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&content)
    }

    /// Parse configuration from a JSON string
    pub fn from_json(content: &str) -> ConfigResult<Self> {
        Ok(serde_json::from_str(content)?)
    }
}
