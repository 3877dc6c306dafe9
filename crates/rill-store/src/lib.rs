//! Document store port for the user service.
//!
//! Defines the [`UserStore`] trait that the service layer depends on,
//! the persisted [`User`] document, and an in-memory adapter suitable
//! for local runs and tests. The store is the sole owner of persisted
//! identity: ids are opaque strings assigned on first save.

pub mod memory;
pub mod store;
pub mod user;

pub use memory::InMemoryUserStore;
pub use store::{StoreError, UserStore};
pub use user::User;
