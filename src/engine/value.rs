//! Textual form of JSON field values
//!
//! Length and pattern checks operate on text, so every JSON value needs
//! exactly one textual rendering:
//!
//! | JSON value | Text |
//! |------------|------|
//! | string | the string itself, unescaped |
//! | number | `serde_json` number formatting (`42`, `1.5`, `-0.0`) |
//! | boolean | `true` / `false` |
//! | null | `null` |
//! | array / object | compact JSON serialization |

use std::borrow::Cow;

use serde_json::Value;

/// Renders a field value as text. Total over all JSON values.
pub fn field_text(value: &Value) -> Cow<'_, str> {
    match value {
        Value::String(s) => Cow::Borrowed(s.as_str()),
        Value::Null => Cow::Borrowed("null"),
        Value::Bool(true) => Cow::Borrowed("true"),
        Value::Bool(false) => Cow::Borrowed("false"),
        Value::Number(n) => Cow::Owned(n.to_string()),
        Value::Array(_) | Value::Object(_) => Cow::Owned(value.to_string()),
    }
}
