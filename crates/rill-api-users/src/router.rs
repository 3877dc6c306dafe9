//! User API router configuration.
//!
//! Configures routes for the `/users` resource:
//! - POST /users - Create a user
//! - GET /users - List users
//! - GET /users/:id - Get a user
//! - PATCH /users/:id - Partially update a user
//! - DELETE /users/:id - Remove a user
//!
//! The router is mounted under `/users` by the application.

use crate::handlers::{
    create_user_handler, delete_user_handler, get_user_handler, list_users_handler,
    update_user_handler,
};
use crate::services::UserService;
use axum::{
    routing::{get, post},
    Extension, Router,
};
use rill_store::UserStore;
use std::sync::Arc;

/// Application state for user routes.
#[derive(Clone)]
pub struct UsersState {
    /// User service for CRUD operations.
    pub user_service: Arc<UserService>,
}

impl UsersState {
    /// Create a new users state over the given store port.
    pub fn new(store: Arc<dyn UserStore>) -> Self {
        Self {
            user_service: Arc::new(UserService::new(store)),
        }
    }
}

/// Create the user router with all five endpoints.
pub fn users_router(state: UsersState) -> Router {
    Router::new()
        .route("/", post(create_user_handler).get(list_users_handler))
        .route(
            "/:id",
            get(get_user_handler)
                .patch(update_user_handler)
                .delete(delete_user_handler),
        )
        .layer(Extension(state.user_service))
}
