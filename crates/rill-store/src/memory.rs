//! In-memory store adapter.
//!
//! Backs the service in local runs and tests. Documents live in a
//! `HashMap` behind an async `RwLock`; ids are 32-hex uuid strings
//! assigned on first save.

use crate::store::{StoreError, UserStore};
use crate::user::User;
use async_trait::async_trait;
use futures::stream::{self, BoxStream, StreamExt};
use std::collections::HashMap;
use tokio::sync::RwLock;
use uuid::Uuid;

/// In-memory implementation of [`UserStore`].
#[derive(Debug, Default)]
pub struct InMemoryUserStore {
    documents: RwLock<HashMap<String, User>>,
}

impl InMemoryUserStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn next_id() -> String {
        Uuid::new_v4().simple().to_string()
    }
}

#[async_trait]
impl UserStore for InMemoryUserStore {
    async fn save(&self, mut user: User) -> Result<User, StoreError> {
        let mut documents = self.documents.write().await;
        let id = user.id.clone().unwrap_or_else(Self::next_id);
        user.id = Some(id.clone());
        documents.insert(id, user.clone());
        tracing::debug!(id = %user.id.as_deref().unwrap_or_default(), "Document saved");
        Ok(user)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<User>, StoreError> {
        let documents = self.documents.read().await;
        Ok(documents.get(id).cloned())
    }

    async fn find_all(&self) -> BoxStream<'static, Result<User, StoreError>> {
        // Snapshot under the read lock; the stream itself holds no lock.
        let snapshot: Vec<User> = {
            let documents = self.documents.read().await;
            documents.values().cloned().collect()
        };
        stream::iter(snapshot.into_iter().map(Ok)).boxed()
    }

    async fn find_and_remove(&self, id: &str) -> Result<Option<User>, StoreError> {
        let mut documents = self.documents.write().await;
        Ok(documents.remove(id))
    }
}
