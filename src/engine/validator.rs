//! Per-request body validation

use serde_json::{Map, Value};

use crate::rules::{CompiledRule, RuleSet};

use super::outcome::{Outcome, Violation};
use super::value::field_text;

/// Validates a raw body against `rules`.
///
/// `body` is `None` when the request carried no body at all, which is
/// distinct from an empty body (`Some(b"")`, rejected as invalid JSON).
///
/// Never panics: malformed or adversarial input always maps to a
/// [`Violation`].
pub fn validate(body: Option<&[u8]>, rules: &RuleSet) -> Outcome {
    let Some(raw) = body else {
        return Outcome::Fail(Violation::MissingBody);
    };

    let document = match parse_object(raw) {
        Ok(document) => document,
        Err(violation) => return Outcome::Fail(violation),
    };

    rules
        .iter()
        .try_for_each(|rule| check_field(rule, &document))
        .into()
}

/// Parses `raw` as a JSON object.
///
/// # Errors
///
/// Returns `Violation::InvalidJson` for malformed JSON and for any valid JSON
/// that is not an object (arrays, scalars, `null`).
pub fn parse_object(raw: &[u8]) -> Result<Map<String, Value>, Violation> {
    serde_json::from_slice::<Map<String, Value>>(raw).map_err(|_| Violation::InvalidJson)
}

/// Checks one compiled rule against a parsed body.
///
/// Check order: required, empty, min length, max length, pattern. An absent
/// optional field passes without further checks.
pub fn check_field(compiled: &CompiledRule, document: &Map<String, Value>) -> Result<(), Violation> {
    let rule = compiled.rule();
    let field = || rule.field.clone();

    let Some(value) = document.get(&rule.field) else {
        if rule.required {
            return Err(Violation::MissingField { field: field() });
        }
        return Ok(());
    };

    let text = field_text(value);

    if rule.required && text.is_empty() {
        return Err(Violation::EmptyField { field: field() });
    }

    if rule.min_length > 0 && text.len() < rule.min_length {
        return Err(Violation::TooShort {
            field: field(),
            min: rule.min_length,
        });
    }

    if rule.max_length > 0 && text.len() > rule.max_length {
        return Err(Violation::TooLong {
            field: field(),
            max: rule.max_length,
        });
    }

    if let Some(matcher) = compiled.matcher() {
        if !matcher.is_match(&text) {
            return Err(Violation::PatternMismatch { field: field() });
        }
    }

    Ok(())
}
