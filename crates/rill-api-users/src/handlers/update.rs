//! Update user endpoint handler.
//!
//! PATCH /users/:id - Partial update; absent fields keep their stored
//! values.

use crate::error::ApiUsersError;
use crate::mapper;
use crate::models::{UserRequest, UserResponse};
use crate::services::UserService;
use crate::validation;
use axum::{
    extract::{OriginalUri, Path},
    Extension, Json,
};
use std::sync::Arc;

/// Merges the request into the stored user.
#[utoipa::path(
    patch,
    path = "/users/{id}",
    params(
        ("id" = String, Path, description = "User id"),
    ),
    request_body = UserRequest,
    responses(
        (status = 200, description = "User updated", body = UserResponse),
        (status = 400, description = "Validation error", body = crate::error::ValidationErrorBody),
        (status = 404, description = "User not found", body = crate::error::StandardErrorBody),
    ),
    tag = "Users"
)]
pub async fn update_user_handler(
    Extension(user_service): Extension<Arc<UserService>>,
    OriginalUri(uri): OriginalUri,
    Path(id): Path<String>,
    Json(request): Json<UserRequest>,
) -> Result<Json<UserResponse>, ApiUsersError> {
    validation::validate_update(&request)
        .map_err(|errors| ApiUsersError::validation(uri.path(), errors))?;

    tracing::info!(user_id = %id, "Updating user");

    let user = user_service.update(&id, &request).await?;
    Ok(Json(mapper::to_response(&user)))
}
