//! User CRUD API.
//!
//! Exposes the `/users` resource: request/response models, the field
//! validation pipeline, request-to-entity mapping with partial-update
//! merge semantics, the service orchestrating the document store, and
//! the axum handlers plus router wiring it all together.

pub mod error;
pub mod handlers;
pub mod mapper;
pub mod models;
pub mod router;
pub mod services;
pub mod validation;

pub use error::ApiUsersError;
pub use router::{users_router, UsersState};
