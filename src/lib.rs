//! json-body-validator - HTTP middleware that validates JSON request bodies
//!
//! A declarative rule list is compiled once into a [`rules::RuleSet`]. For
//! every request, the [`middleware::JsonBodyValidator`] buffers the body,
//! checks each rule, and either forwards the request with a replayable body
//! or answers with a JSON error.

pub mod cli;
pub mod config;
pub mod engine;
pub mod http_server;
pub mod middleware;
pub mod observability;
pub mod rules;

pub use config::{AppConfig, ErrorResponseConfig, MiddlewareConfig};
pub use engine::{validate, Outcome, Violation};
pub use middleware::{JsonBodyValidator, JsonBodyValidatorLayer};
pub use rules::{compile, CompiledRule, RuleError, RuleSet, ValidationRule};
