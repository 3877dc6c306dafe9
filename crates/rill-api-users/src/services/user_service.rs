//! User service.
//!
//! Orchestrates save/find/update/delete against the document store.
//! Each operation is a single-shot async pipeline; the service holds
//! no cache and no state beyond the injected store port.

use crate::error::ApiUsersError;
use crate::mapper;
use crate::models::UserRequest;
use futures::stream::BoxStream;
use rill_store::{StoreError, User, UserStore};
use std::sync::Arc;

/// CRUD orchestration for the `User` resource.
pub struct UserService {
    store: Arc<dyn UserStore>,
}

impl UserService {
    /// Create a service over the given store port.
    pub fn new(store: Arc<dyn UserStore>) -> Self {
        Self { store }
    }

    /// Map a validated request to a new entity and persist it. Returns
    /// the persisted entity with its assigned id.
    pub async fn save(&self, request: &UserRequest) -> Result<User, ApiUsersError> {
        Ok(self.store.save(mapper::to_entity(request)).await?)
    }

    /// Fetch a user by id, failing with the not-found signal when the
    /// id has no matching document.
    pub async fn find_by_id(&self, id: &str) -> Result<User, ApiUsersError> {
        self.store
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApiUsersError::user_not_found(id))
    }

    /// Lazy, finite sequence of all users. Consumed once per request.
    pub async fn find_all(&self) -> BoxStream<'static, Result<User, StoreError>> {
        self.store.find_all().await
    }

    /// Fetch by id, merge the request into the fetched entity and
    /// persist the result. Absent request fields keep their stored
    /// values.
    pub async fn update(&self, id: &str, request: &UserRequest) -> Result<User, ApiUsersError> {
        let existing = self.find_by_id(id).await?;
        Ok(self.store.save(mapper::merge(request, existing)).await?)
    }

    /// Fetch-and-remove by id, returning the removed entity. Fails
    /// with the not-found signal when the id has no matching document.
    pub async fn delete(&self, id: &str) -> Result<User, ApiUsersError> {
        self.store
            .find_and_remove(id)
            .await?
            .ok_or_else(|| ApiUsersError::user_not_found(id))
    }
}
