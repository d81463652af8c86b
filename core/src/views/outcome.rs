//! Settled view states and their text rendering

use crate::api::Resource;
use serde_json::Value;
use std::fmt::Write;

/// What a mounted view ended up showing
#[derive(Debug, Clone, PartialEq)]
pub enum ViewOutcome {
    /// Nothing has been navigated to yet
    Idle,
    /// The view fetched its resource
    Loaded { title: String, resource: Resource },
    /// The fetch failed; `message` is shown to the user
    Failed { title: String, message: String },
    /// The location has no route
    NotFound { path: String },
    /// Navigation moved away before the fetch finished
    Cancelled { path: String },
}

impl ViewOutcome {
    /// Check if the outcome is an error state
    pub fn is_error(&self) -> bool {
        matches!(self, ViewOutcome::Failed { .. } | ViewOutcome::NotFound { .. })
    }

    /// Render the outcome as plain text
    pub fn render(&self) -> String {
        match self {
            ViewOutcome::Idle => {
                "Nothing to show yet. Open /categories, /countries or /languages.".to_string()
            }
            ViewOutcome::Loaded { title, resource } => render_resource(title, resource),
            ViewOutcome::Failed { title, message } => {
                format!("{}\n\nCould not load this list: {}", title, message)
            }
            ViewOutcome::NotFound { path } => format!("Page not found: {}", path),
            ViewOutcome::Cancelled { path } => format!("Loading of {} was cancelled", path),
        }
    }
}

fn render_resource(title: &str, resource: &Resource) -> String {
    let mut out = format!("{}\n", title);

    match resource {
        Value::Array(items) if items.is_empty() => out.push_str("\n(no entries)"),
        Value::Array(items) => {
            for item in items {
                let _ = write!(out, "\n  {}", render_item(item));
            }
        }
        other => {
            out.push('\n');
            out.push_str(&serde_json::to_string_pretty(other).unwrap_or_default());
        }
    }

    out
}

/// One line per list entry: `#id name` when the entry has those fields
fn render_item(item: &Value) -> String {
    let label = item
        .get("name")
        .or_else(|| item.get("title"))
        .and_then(Value::as_str);

    match (item.get("id"), label) {
        (Some(id), Some(label)) => format!("#{} {}", render_scalar(id), label),
        (None, Some(label)) => label.to_string(),
        _ => match item {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        },
    }
}

fn render_scalar(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_render_named_list() {
        let outcome = ViewOutcome::Loaded {
            title: "Countries".to_string(),
            resource: json!([{"id": 1, "name": "Croatia"}, {"id": "si", "name": "Slovenia"}]),
        };
        assert_eq!(outcome.render(), "Countries\n\n  #1 Croatia\n  #si Slovenia");
    }

    #[test]
    fn test_render_plain_values() {
        let outcome = ViewOutcome::Loaded {
            title: "Languages".to_string(),
            resource: json!(["hr", {"title": "English"}, 7]),
        };
        assert_eq!(outcome.render(), "Languages\n\n  hr\n  English\n  7");
    }

    #[test]
    fn test_render_empty_and_object() {
        let empty = ViewOutcome::Loaded {
            title: "Categories".to_string(),
            resource: json!([]),
        };
        assert_eq!(empty.render(), "Categories\n\n(no entries)");

        let object = ViewOutcome::Loaded {
            title: "Categories".to_string(),
            resource: json!({"count": 0}),
        };
        assert_eq!(object.render(), "Categories\n\n{\n  \"count\": 0\n}");
    }

    #[test]
    fn test_error_states() {
        let not_found = ViewOutcome::NotFound {
            path: "/cities".to_string(),
        };
        assert!(not_found.is_error());
        assert_eq!(not_found.render(), "Page not found: /cities");

        let failed = ViewOutcome::Failed {
            title: "Countries".to_string(),
            message: "boom".to_string(),
        };
        assert!(failed.is_error());
        assert!(failed.render().ends_with("Could not load this list: boom"));
        assert!(!ViewOutcome::Idle.is_error());
    }
}
