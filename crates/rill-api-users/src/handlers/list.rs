//! List users endpoint handler.
//!
//! GET /users - List all users, no pagination.

use crate::error::ApiUsersError;
use crate::mapper;
use crate::models::UserResponse;
use crate::services::UserService;
use axum::{Extension, Json};
use futures::TryStreamExt;
use rill_store::User;
use std::sync::Arc;

/// Lists every user in the store.
#[utoipa::path(
    get,
    path = "/users",
    responses(
        (status = 200, description = "List of users", body = [UserResponse]),
    ),
    tag = "Users"
)]
pub async fn list_users_handler(
    Extension(user_service): Extension<Arc<UserService>>,
) -> Result<Json<Vec<UserResponse>>, ApiUsersError> {
    let users: Vec<User> = user_service.find_all().await.try_collect().await?;

    tracing::debug!(count = users.len(), "Listing users");

    Ok(Json(users.iter().map(mapper::to_response).collect()))
}
