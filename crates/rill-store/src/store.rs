//! Store port consumed by the service layer.

use crate::user::User;
use async_trait::async_trait;
use futures::stream::BoxStream;

/// Error type for store operations.
///
/// Absence of a document is not an error at this layer; lookups return
/// `Ok(None)` and the caller decides how to surface it.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The storage backend failed or is unreachable.
    #[error("store backend error: {0}")]
    Backend(String),
}

/// Asynchronous document store keyed by an opaque string id.
///
/// All operations are non-blocking; implementations may suspend while
/// awaiting backend I/O. Concurrent writes to the same id resolve as
/// last-write-wins, no optimistic concurrency control is provided.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Persist a document. Assigns a fresh id when the entity has none,
    /// otherwise overwrites the document under its existing id. Returns
    /// the persisted entity including the assigned id.
    async fn save(&self, user: User) -> Result<User, StoreError>;

    /// Fetch a document by id.
    async fn find_by_id(&self, id: &str) -> Result<Option<User>, StoreError>;

    /// Produce a lazy, finite sequence of all documents. The stream is
    /// consumed once; it does not observe writes made after the call.
    async fn find_all(&self) -> BoxStream<'static, Result<User, StoreError>>;

    /// Atomically fetch and delete a document, returning the removed
    /// entity when the id existed.
    async fn find_and_remove(&self, id: &str) -> Result<Option<User>, StoreError>;
}
