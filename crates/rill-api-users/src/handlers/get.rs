//! Get user endpoint handler.
//!
//! GET /users/:id - Fetch a single user.

use crate::error::ApiUsersError;
use crate::mapper;
use crate::models::UserResponse;
use crate::services::UserService;
use axum::{extract::Path, Extension, Json};
use std::sync::Arc;

/// Fetches a user by id.
#[utoipa::path(
    get,
    path = "/users/{id}",
    params(
        ("id" = String, Path, description = "User id"),
    ),
    responses(
        (status = 200, description = "User found", body = UserResponse),
        (status = 404, description = "User not found", body = crate::error::StandardErrorBody),
    ),
    tag = "Users"
)]
pub async fn get_user_handler(
    Extension(user_service): Extension<Arc<UserService>>,
    Path(id): Path<String>,
) -> Result<Json<UserResponse>, ApiUsersError> {
    tracing::debug!(user_id = %id, "Fetching user");

    let user = user_service.find_by_id(&id).await?;
    Ok(Json(mapper::to_response(&user)))
}
