//! Validation error types.

use serde::Serialize;
use utoipa::ToSchema;

/// A single field-constraint violation.
///
/// Serializes with the exact wire keys consumed by clients
/// (`fieldName`, `message`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FieldError {
    /// The field that violated a constraint.
    pub field_name: String,
    /// Fixed message for the violated rule.
    pub message: String,
}

impl FieldError {
    /// Create a new field error.
    pub fn new(field_name: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field_name: field_name.into(),
            message: message.into(),
        }
    }
}
