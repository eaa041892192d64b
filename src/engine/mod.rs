//! Validation engine
//!
//! Evaluates a compiled [`RuleSet`](crate::rules::RuleSet) against one raw
//! request body and produces an [`Outcome`].
//!
//! Evaluation semantics:
//! - The body must be present and parse as a JSON object
//! - Rules are checked in the rule set's evaluation order
//! - Per field: required, empty, min length, max length, pattern
//! - The first failing check ends evaluation; failures are never aggregated
//!
//! The engine holds no state of its own. Everything it builds per request is
//! local to the call.

mod outcome;
mod validator;
mod value;

pub use outcome::{Outcome, Violation};
pub use validator::{check_field, parse_object, validate};
pub use value::field_text;
