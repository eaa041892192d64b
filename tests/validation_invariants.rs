//! Validation Invariant Tests
//!
//! Tests for the per-request validation engine:
//! - Every body yields exactly one outcome
//! - Required fields must be present and non-empty
//! - Absent optional fields never fail
//! - Length bounds are inclusive
//! - Checks run in the order required, empty, min, max, pattern
//! - Non-object bodies are invalid JSON

use json_body_validator::engine::{validate, Outcome, Violation};
use json_body_validator::rules::{compile, EvaluationOrder, RuleSet, ValidationRule};

// =============================================================================
// Helper Functions
// =============================================================================

fn user_id_rules() -> RuleSet {
    compile(&[ValidationRule::new("userId").with_pattern("^.+$").required()]).unwrap()
}

fn username_rules() -> RuleSet {
    compile(&[ValidationRule::new("username")
        .required()
        .with_min_length(3)
        .with_max_length(20)
        .with_pattern("^[a-zA-Z0-9_]{3,20}$")])
    .unwrap()
}

fn body_with(field: &str, value: &str) -> Vec<u8> {
    serde_json::to_vec(&serde_json::json!({ field: value })).unwrap()
}

fn message(outcome: Outcome) -> String {
    outcome.message().unwrap_or_default()
}

// =============================================================================
// Scenario Tests
// =============================================================================

#[test]
fn test_valid_user_id_passes() {
    let outcome = validate(Some(br#"{"userId":"abc123"}"#), &user_id_rules());
    assert_eq!(outcome, Outcome::Pass);
}

#[test]
fn test_missing_user_id() {
    let outcome = validate(Some(b"{}"), &user_id_rules());
    assert_eq!(message(outcome), "Field 'userId' is required");
}

#[test]
fn test_empty_user_id() {
    let outcome = validate(Some(br#"{"userId":""}"#), &user_id_rules());
    assert_eq!(message(outcome), "Field 'userId' cannot be empty");
}

#[test]
fn test_min_length_checked_before_pattern() {
    let outcome = validate(Some(br#"{"username":"ab"}"#), &username_rules());
    assert_eq!(message(outcome), "Field 'username' must be at least 3 characters");
}

#[test]
fn test_pattern_mismatch() {
    let outcome = validate(Some(br#"{"username":"bad name!"}"#), &username_rules());
    assert_eq!(message(outcome), "Field 'username' does not match required pattern");
}

// =============================================================================
// Presence Tests
// =============================================================================

/// A missing required field fails regardless of other fields.
#[test]
fn test_required_absent_always_fails() {
    let rules = compile(&[
        ValidationRule::new("email").required(),
        ValidationRule::new("name").with_max_length(3),
    ])
    .unwrap();

    for body in [
        r#"{}"#,
        r#"{"name":"ok"}"#,
        r#"{"name":"too long"}"#,
        r#"{"other":1}"#,
    ] {
        assert_eq!(
            validate(Some(body.as_bytes()), &rules),
            Outcome::Fail(Violation::MissingField { field: "email".to_string() }),
            "body: {}",
            body
        );
    }
}

/// Absent optional fields are never reported.
#[test]
fn test_optional_absent_never_fails() {
    let rules = compile(&[ValidationRule::new("nickname")
        .with_min_length(5)
        .with_max_length(6)
        .with_pattern("^z+$")])
    .unwrap();

    for body in [r#"{}"#, r#"{"name":"x"}"#, r#"{"Nickname":"a"}"#] {
        assert!(validate(Some(body.as_bytes()), &rules).is_pass(), "body: {}", body);
    }
}

#[test]
fn test_missing_body() {
    let outcome = validate(None, &user_id_rules());
    assert_eq!(message(outcome), "Request body is required");
}

// =============================================================================
// Length Bound Tests
// =============================================================================

#[test]
fn test_min_length_boundary() {
    let rules = compile(&[ValidationRule::new("code").with_min_length(4)]).unwrap();

    let below = validate(Some(&body_with("code", "abc")), &rules);
    assert_eq!(message(below), "Field 'code' must be at least 4 characters");

    assert!(validate(Some(&body_with("code", "abcd")), &rules).is_pass());
}

#[test]
fn test_max_length_boundary() {
    let rules = compile(&[ValidationRule::new("code").with_max_length(4)]).unwrap();

    let above = validate(Some(&body_with("code", "abcde")), &rules);
    assert_eq!(message(above), "Field 'code' must not exceed 4 characters");

    assert!(validate(Some(&body_with("code", "abcd")), &rules).is_pass());
}

#[test]
fn test_zero_bounds_are_unset() {
    let rules = compile(&[ValidationRule::new("bio")
        .with_min_length(0)
        .with_max_length(0)])
    .unwrap();
    let long = "x".repeat(10_000);
    assert!(validate(Some(&body_with("bio", &long)), &rules).is_pass());
}

// =============================================================================
// Malformed Input Tests
// =============================================================================

#[test]
fn test_non_object_bodies_invalid() {
    let rules = user_id_rules();
    for body in ["5", "[1,2]", "{", "", "null", "\"userId\"", "{\"userId\":\"a\""] {
        assert_eq!(
            validate(Some(body.as_bytes()), &rules),
            Outcome::Fail(Violation::InvalidJson),
            "body: {:?}",
            body
        );
    }
}

#[test]
fn test_non_utf8_body_invalid() {
    let outcome = validate(Some(&[0x7b, 0xff, 0xfe, 0x7d]), &user_id_rules());
    assert_eq!(outcome, Outcome::Fail(Violation::InvalidJson));
}

/// Type-mismatched values are ordinary input, validated through their text.
#[test]
fn test_non_string_values_never_panic() {
    let rules = username_rules();
    for body in [
        r#"{"username":12345}"#,
        r#"{"username":true}"#,
        r#"{"username":null}"#,
        r#"{"username":[1,2,3]}"#,
        r#"{"username":{"nested":"object"}}"#,
        r#"{"username":1e400}"#,
    ] {
        let outcome = validate(Some(body.as_bytes()), &rules);
        assert!(outcome.is_pass() || outcome.message().is_some(), "body: {}", body);
    }
}

#[test]
fn test_number_text_matches_pattern() {
    let outcome = validate(Some(br#"{"username":12345}"#), &username_rules());
    assert!(outcome.is_pass());
}

// =============================================================================
// Ordering Tests
// =============================================================================

/// Same body validates the same way every time.
#[test]
fn test_configured_order_is_deterministic() {
    let rules = compile(&[
        ValidationRule::new("a").required(),
        ValidationRule::new("b").required(),
        ValidationRule::new("c").required(),
    ])
    .unwrap();

    for _ in 0..100 {
        assert_eq!(message(validate(Some(b"{}"), &rules)), "Field 'a' is required");
    }
}

/// Unordered evaluation still reports exactly one of the violated fields.
#[test]
fn test_unordered_reports_one_violation() {
    let rules = RuleSet::compile(
        &[
            ValidationRule::new("a").required(),
            ValidationRule::new("b").required(),
            ValidationRule::new("c").required(),
        ],
        EvaluationOrder::Unordered,
    )
    .unwrap();

    let outcome = validate(Some(br#"{"b":"x"}"#), &rules);
    let field = outcome.violation().and_then(|v| v.field()).unwrap().to_string();
    assert!(field == "a" || field == "c");
}

#[test]
fn test_duplicate_rule_last_definition_applies() {
    let rules = compile(&[
        ValidationRule::new("name").required(),
        ValidationRule::new("name").with_max_length(2),
    ])
    .unwrap();

    assert!(validate(Some(b"{}"), &rules).is_pass());
    assert_eq!(
        message(validate(Some(br#"{"name":"abc"}"#), &rules)),
        "Field 'name' must not exceed 2 characters"
    );
}
