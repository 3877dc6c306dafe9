//! Wire models for the user API.

pub mod requests;
pub mod responses;

pub use requests::UserRequest;
pub use responses::UserResponse;
