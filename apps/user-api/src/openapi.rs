//! `OpenAPI` documentation for the user API.
//!
//! Generates the spec with utoipa and serves it as JSON under
//! `/api-docs/openapi.json`.

use axum::{routing::get, Json, Router};
use utoipa::OpenApi;

use crate::health::HealthResponse;
use rill_api_users::error::{StandardErrorBody, ValidationErrorBody};
use rill_api_users::models::{UserRequest, UserResponse};
use rill_api_users::validation::FieldError;

/// `OpenAPI` documentation for the user API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "user-api",
        version = "0.1.0",
        description = "Reactive user CRUD service",
    ),
    paths(
        crate::health::health_handler,
        rill_api_users::handlers::create::create_user_handler,
        rill_api_users::handlers::get::get_user_handler,
        rill_api_users::handlers::list::list_users_handler,
        rill_api_users::handlers::update::update_user_handler,
        rill_api_users::handlers::delete::delete_user_handler,
    ),
    components(schemas(
        HealthResponse,
        UserRequest,
        UserResponse,
        FieldError,
        ValidationErrorBody,
        StandardErrorBody,
    )),
    tags(
        (name = "Health", description = "Service health and status"),
        (name = "Users", description = "User CRUD operations"),
    )
)]
pub struct ApiDoc;

/// Routes serving the generated spec.
pub fn docs_routes() -> Router {
    Router::new().route(
        "/api-docs/openapi.json",
        get(|| async { Json(ApiDoc::openapi()) }),
    )
}
