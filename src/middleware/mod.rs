//! Tower middleware that validates JSON request bodies
//!
//! [`JsonBodyValidatorLayer`] compiles its rules once; every
//! [`JsonBodyValidator`] it produces shares them read-only.
//!
//! ```no_run
//! use axum::{routing::post, Router};
//! use json_body_validator::config::MiddlewareConfig;
//! use json_body_validator::middleware::JsonBodyValidatorLayer;
//! use json_body_validator::rules::ValidationRule;
//!
//! # fn build() -> Result<Router, json_body_validator::rules::RuleError> {
//! let config = MiddlewareConfig::new(vec![
//!     ValidationRule::new("userId").required().with_pattern("^.+$"),
//! ]);
//!
//! let app = Router::new()
//!     .route("/users", post(|body: String| async move { body }))
//!     .route_layer(JsonBodyValidatorLayer::new(config)?);
//! # Ok(app)
//! # }
//! ```

mod layer;
mod response;

pub use layer::{JsonBodyValidator, JsonBodyValidatorLayer};
pub use response::{ErrorBody, ErrorReply};
