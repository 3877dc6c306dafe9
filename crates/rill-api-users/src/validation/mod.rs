//! Field validation pipeline for user requests.
//!
//! All constraints are evaluated eagerly and every violation is
//! aggregated; a failing request always reports its complete list of
//! violated fields, never a partial one.

pub mod error;
pub mod user_request;

pub use error::FieldError;
pub use user_request::{validate_create, validate_update};
