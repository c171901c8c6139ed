//! # Framework Errors
//!
//! This module defines the error type used by the reconciliation client, the renderer and the
//! transport seam. Adapters themselves never fail; everything here describes a failure of a
//! rendered request or of the response it produced.

use serde_json::Value;

/// A per-field message from a data-validation error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldMessage {
    pub field: String,
    pub message: String,
}

/// Errors that can occur while driving a resource through one action cycle.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum FrameworkError {
    #[error("Template references unbound variable: {0}")]
    MissingBinding(String),
    #[error("Malformed template: unterminated placeholder at byte {0}")]
    MalformedTemplate(usize),
    #[error("{action} requires an identifier")]
    MissingIdentifier { action: String },
    #[error("Response has no field `{0}`")]
    MissingField(String),
    #[error("Constraint violation: {}", .names.join(", "))]
    Constraint { names: Vec<String> },
    #[error("Validation failed: {details}")]
    Validation {
        details: String,
        fields: Vec<FieldMessage>,
    },
    #[error("API error {kind}: {description}")]
    Api {
        kind: String,
        description: String,
        details: String,
    },
    #[error("Transport error: {0}")]
    Transport(String),
    #[error("List traversal exceeded {0} pages")]
    PageLimitExceeded(usize),
    #[error("Invalid configuration: {0}")]
    Config(String),
}

impl FrameworkError {
    /// Classifies the `error` object of a GraphQL payload.
    ///
    /// Returns `None` when the payload carries no error (`null` or absent).
    /// The shapes are tried in order: constraint violation, data-validation
    /// violation, then any object carrying `error_key` (response and suggestion errors).
    pub fn from_error_object(error: &Value, error_key: &str) -> Option<Self> {
        let obj = error.as_object()?;

        if let Some(constraints) = obj.get("constraints").and_then(Value::as_array) {
            let names = constraints
                .iter()
                .filter_map(|c| c.get("name").and_then(Value::as_str))
                .map(str::to_string)
                .collect();
            return Some(FrameworkError::Constraint { names });
        }

        if let Some(fields) = obj.get("fields").and_then(Value::as_array) {
            let fields = fields
                .iter()
                .map(|f| FieldMessage {
                    field: string_field(f, "field"),
                    message: string_field(f, "message"),
                })
                .collect();
            return Some(FrameworkError::Validation {
                details: string_field(error, "details"),
                fields,
            });
        }

        // An empty object is what GraphQL returns for a union member none of the
        // requested fragments matched; treat it as "no error".
        if obj.is_empty() {
            return None;
        }

        let kind = obj
            .get(error_key)
            .and_then(Value::as_str)
            .unwrap_or("UNKNOWN")
            .to_string();
        Some(FrameworkError::Api {
            kind,
            description: string_field(error, "description"),
            details: string_field(error, "details"),
        })
    }
}

fn string_field(value: &Value, key: &str) -> String {
    value
        .get(key)
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_null_is_not_an_error() {
        assert_eq!(FrameworkError::from_error_object(&Value::Null, "type"), None);
        assert_eq!(FrameworkError::from_error_object(&json!({}), "type"), None);
    }

    #[test]
    fn test_constraint_error() {
        let err = json!({ "constraints": [{ "dependencies": [], "name": "name" }] });
        assert_eq!(
            FrameworkError::from_error_object(&err, "type"),
            Some(FrameworkError::Constraint {
                names: vec!["name".to_string()]
            })
        );
    }

    #[test]
    fn test_validation_error() {
        let err = json!({
            "details": "bad input",
            "fields": [{ "field": "url", "message": "must be https" }]
        });
        match FrameworkError::from_error_object(&err, "type") {
            Some(FrameworkError::Validation { details, fields }) => {
                assert_eq!(details, "bad input");
                assert_eq!(fields.len(), 1);
                assert_eq!(fields[0].field, "url");
                assert_eq!(fields[0].message, "must be https");
            }
            other => panic!("unexpected: {:?}", other),
        }
    }

    #[test]
    fn test_response_error_uses_error_key() {
        let err = json!({
            "description": "Destination not found",
            "details": "",
            "type": "ENTITY_NOT_FOUND"
        });
        let classified = FrameworkError::from_error_object(&err, "type").unwrap();
        assert_eq!(
            classified,
            FrameworkError::Api {
                kind: "ENTITY_NOT_FOUND".to_string(),
                description: "Destination not found".to_string(),
                details: String::new(),
            }
        );
        assert_eq!(
            classified.to_string(),
            "API error ENTITY_NOT_FOUND: Destination not found"
        );
    }

    #[test]
    fn test_unclassified_error_kind() {
        let err = json!({ "description": "boom" });
        match FrameworkError::from_error_object(&err, "type") {
            Some(FrameworkError::Api { kind, .. }) => assert_eq!(kind, "UNKNOWN"),
            other => panic!("unexpected: {:?}", other),
        }
    }
}
