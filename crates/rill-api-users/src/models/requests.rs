//! Request models for the user API.

use serde::Deserialize;
use utoipa::ToSchema;

/// Payload for creating or partially updating a user.
///
/// All fields are optional at the serde level so PATCH bodies can omit
/// fields; the validation pipeline decides which fields are required
/// per operation. Unknown JSON fields are silently ignored.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct UserRequest {
    /// Display name (3-50 characters).
    #[serde(default)]
    pub name: Option<String>,

    /// Email address.
    #[serde(default)]
    pub email: Option<String>,

    /// Password (8-20 characters).
    #[serde(default)]
    pub password: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_fields_deserialize_to_none() {
        let request: UserRequest = serde_json::from_str(r#"{"name": "Maria Silva"}"#).unwrap();
        assert_eq!(request.name.as_deref(), Some("Maria Silva"));
        assert!(request.email.is_none());
        assert!(request.password.is_none());
    }

    #[test]
    fn unknown_fields_are_ignored() {
        let request: UserRequest =
            serde_json::from_str(r#"{"name": "Maria Silva", "role": "admin"}"#).unwrap();
        assert_eq!(request.name.as_deref(), Some("Maria Silva"));
    }
}
