//! Services for the user API.

pub mod user_service;

pub use user_service::UserService;
