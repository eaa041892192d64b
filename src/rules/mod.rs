//! Rule compiler for the JSON body validator
//!
//! Turns the declarative rule list from configuration into an indexed
//! [`RuleSet`] with every pattern pre-compiled.
//!
//! # Design Principles
//!
//! - Runs once, at middleware construction
//! - Invalid configuration fails construction, never a request
//! - The compiled set is immutable and shared read-only across requests

mod compiler;
mod errors;
mod types;

pub use compiler::{compile, CompiledRule, RuleSet, RuleSetIter};
pub use errors::{RuleError, RuleResult};
pub use types::{EvaluationOrder, ValidationRule};
