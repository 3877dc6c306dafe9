//! Delete user endpoint handler.
//!
//! DELETE /users/:id - Remove a user and return the removed entity.

use crate::error::ApiUsersError;
use crate::mapper;
use crate::models::UserResponse;
use crate::services::UserService;
use axum::{extract::Path, Extension, Json};
use std::sync::Arc;

/// Removes a user by id, returning the removed entity.
#[utoipa::path(
    delete,
    path = "/users/{id}",
    params(
        ("id" = String, Path, description = "User id"),
    ),
    responses(
        (status = 200, description = "User removed", body = UserResponse),
        (status = 404, description = "User not found", body = crate::error::StandardErrorBody),
    ),
    tag = "Users"
)]
pub async fn delete_user_handler(
    Extension(user_service): Extension<Arc<UserService>>,
    Path(id): Path<String>,
) -> Result<Json<UserResponse>, ApiUsersError> {
    tracing::info!(user_id = %id, "Deleting user");

    let user = user_service.delete(&id).await?;
    Ok(Json(mapper::to_response(&user)))
}
