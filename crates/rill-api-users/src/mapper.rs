//! Conversions between wire models and the persisted entity.

use crate::models::{UserRequest, UserResponse};
use rill_store::User;

/// Build a new entity from a request. The id is always left unset so
/// the store assigns it; a client-supplied id never survives create.
#[must_use]
pub fn to_entity(request: &UserRequest) -> User {
    User {
        id: None,
        name: request.name.clone().unwrap_or_default(),
        email: request.email.clone().unwrap_or_default(),
        password: request.password.clone().unwrap_or_default(),
    }
}

/// Merge a request into an existing entity. A field present in the
/// request overwrites, an absent field keeps the stored value. This is
/// the partial-update (PATCH) semantics.
#[must_use]
pub fn merge(request: &UserRequest, entity: User) -> User {
    User {
        id: entity.id,
        name: request.name.clone().unwrap_or(entity.name),
        email: request.email.clone().unwrap_or(entity.email),
        password: request.password.clone().unwrap_or(entity.password),
    }
}

/// Project a persisted entity onto the wire response, field for field.
#[must_use]
pub fn to_response(entity: &User) -> UserResponse {
    UserResponse {
        id: entity.id.clone().unwrap_or_default(),
        name: entity.name.clone(),
        email: entity.email.clone(),
        password: entity.password.clone(),
    }
}
