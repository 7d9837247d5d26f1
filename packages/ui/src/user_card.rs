//! Read-only rendering of the logged-in user record.

use dioxus::prelude::*;
use serde_json::Value;

use crate::auth::use_auth;

/// Best-effort display name for an arbitrary user record.
///
/// Looks for a string `name`, then `email`, then falls back to the record's
/// JSON text.
pub fn display_name(user: &Value) -> String {
    ["name", "email"]
        .iter()
        .find_map(|key| user.get(key).and_then(Value::as_str))
        .map(str::to_string)
        .unwrap_or_else(|| match user {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        })
}

/// Shows who is logged in, or nothing when logged out.
#[component]
pub fn UserCard(#[props(default)] show_record: bool) -> Element {
    let auth = use_auth();
    let auth = auth.read();

    let Some(user) = auth.user().filter(|_| auth.is_authenticated()) else {
        return rsx! {};
    };
    let name = display_name(user);
    let record = serde_json::to_string_pretty(user).unwrap_or_default();

    rsx! {
        div {
            class: "user-card",
            span { class: "user-card-name", "{name}" }
            if show_record {
                pre { class: "user-card-record", "{record}" }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_display_name_prefers_name() {
        assert_eq!(display_name(&json!({"id": 1, "name": "a", "email": "a@x"})), "a");
    }

    #[test]
    fn test_display_name_falls_back_to_email() {
        assert_eq!(display_name(&json!({"email": "a@x"})), "a@x");
    }

    #[test]
    fn test_display_name_non_object() {
        assert_eq!(display_name(&json!("alice")), "alice");
        assert_eq!(display_name(&json!({"id": 1})), r#"{"id":1}"#);
        assert_eq!(display_name(&json!(42)), "42");
    }
}
