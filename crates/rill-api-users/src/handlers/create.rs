//! Create user endpoint handler.
//!
//! POST /users - Create a new user.

use crate::error::ApiUsersError;
use crate::mapper;
use crate::models::{UserRequest, UserResponse};
use crate::services::UserService;
use crate::validation;
use axum::{extract::OriginalUri, http::StatusCode, Extension, Json};
use std::sync::Arc;

/// Creates a new user from a validated request.
#[utoipa::path(
    post,
    path = "/users",
    request_body = UserRequest,
    responses(
        (status = 201, description = "User created", body = UserResponse),
        (status = 400, description = "Validation error", body = crate::error::ValidationErrorBody),
    ),
    tag = "Users"
)]
pub async fn create_user_handler(
    Extension(user_service): Extension<Arc<UserService>>,
    OriginalUri(uri): OriginalUri,
    Json(request): Json<UserRequest>,
) -> Result<(StatusCode, Json<UserResponse>), ApiUsersError> {
    validation::validate_create(&request)
        .map_err(|errors| ApiUsersError::validation(uri.path(), errors))?;

    tracing::info!(email = ?request.email, "Creating user");

    let user = user_service.save(&request).await?;
    Ok((StatusCode::CREATED, Json(mapper::to_response(&user))))
}
