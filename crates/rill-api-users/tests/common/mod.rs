//! Common test utilities for rill-api-users integration tests.

#![allow(dead_code)]

use axum::Router;
use rill_api_users::{users_router, UsersState};
use rill_store::{InMemoryUserStore, User};
use std::sync::Arc;

/// Create an empty in-memory store.
pub fn test_store() -> Arc<InMemoryUserStore> {
    Arc::new(InMemoryUserStore::new())
}

/// Build the application router over the given store, mounted under
/// `/users` the way the application mounts it.
pub fn test_app(store: Arc<InMemoryUserStore>) -> Router {
    Router::new().nest("/users", users_router(UsersState::new(store)))
}

/// Seed a user document directly into the store. Passing a fixed id
/// persists the document under that id.
pub async fn seed_user(
    store: &InMemoryUserStore,
    id: Option<&str>,
    name: &str,
    email: &str,
    password: &str,
) -> User {
    use rill_store::UserStore;

    store
        .save(User {
            id: id.map(str::to_string),
            name: name.to_string(),
            email: email.to_string(),
            password: password.to_string(),
        })
        .await
        .expect("seeding the in-memory store cannot fail")
}
