//! Declarative rule records as they appear in configuration

use serde::{Deserialize, Serialize};

/// A constraint on one top-level JSON field.
///
/// Wire names are camelCase (`minLength`, `maxLength`). Length bounds of 0
/// mean "no bound".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationRule {
    /// JSON key to check. Must be non-empty.
    pub field: String,

    /// Regular expression the field's text must contain a match for.
    /// Not anchored unless the pattern anchors itself.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pattern: Option<String>,

    /// Field must be present and non-empty
    #[serde(default)]
    pub required: bool,

    /// Minimum length in bytes (0 = unset)
    #[serde(default, skip_serializing_if = "is_unset")]
    pub min_length: usize,

    /// Maximum length in bytes (0 = unset)
    #[serde(default, skip_serializing_if = "is_unset")]
    pub max_length: usize,
}

fn is_unset(bound: &usize) -> bool {
    *bound == 0
}

impl ValidationRule {
    /// Creates an optional, unconstrained rule for `field`.
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            pattern: None,
            required: false,
            min_length: 0,
            max_length: 0,
        }
    }

    /// Marks the field as required
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn with_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.pattern = Some(pattern.into());
        self
    }

    pub fn with_min_length(mut self, min: usize) -> Self {
        self.min_length = min;
        self
    }

    pub fn with_max_length(mut self, max: usize) -> Self {
        self.max_length = max;
        self
    }

    /// Returns the pattern source, treating an empty string as absent.
    pub fn pattern_source(&self) -> Option<&str> {
        self.pattern.as_deref().filter(|p| !p.is_empty())
    }
}

/// Order in which compiled rules are evaluated against a body.
///
/// Only the first failing rule is reported, so the order decides which
/// violation a client sees when several fields are invalid at once.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EvaluationOrder {
    /// Configuration order. A duplicated field keeps the slot of its first
    /// occurrence but takes the definition of its last.
    #[default]
    Configured,
    /// Hash-map iteration order: first failure in arbitrary order.
    Unordered,
}
