//! HTTP handlers for the user API.

pub mod create;
pub mod delete;
pub mod get;
pub mod list;
pub mod update;

pub use create::create_user_handler;
pub use delete::delete_user_handler;
pub use get::get_user_handler;
pub use list::list_users_handler;
pub use update::update_user_handler;
