//! Response models for the user API.

use serde::Serialize;
use utoipa::ToSchema;

/// A user as returned over the wire. Direct projection of the
/// persisted entity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct UserResponse {
    /// Store-assigned identifier.
    pub id: String,

    /// Display name.
    pub name: String,

    /// Email address.
    pub email: String,

    /// Password.
    pub password: String,
}
