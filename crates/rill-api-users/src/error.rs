//! Error types and HTTP translation for the user API.

use crate::validation::FieldError;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use utoipa::ToSchema;

/// Error type for the user API.
#[derive(Debug, thiserror::Error)]
pub enum ApiUsersError {
    /// No document exists for the requested id.
    #[error("Object not found. Id: {id} Type: {type_name}")]
    ObjectNotFound {
        /// The id that had no matching document.
        id: String,
        /// Simple name of the requested entity type.
        type_name: &'static str,
    },

    /// One or more request fields violated their constraints.
    #[error("Error on validation attributes")]
    Validation {
        /// Request path the failing payload was sent to.
        path: String,
        /// Complete list of field violations.
        errors: Vec<FieldError>,
    },

    /// The document store failed.
    #[error(transparent)]
    Store(#[from] rill_store::StoreError),
}

impl ApiUsersError {
    /// Not-found signal for a `User` id.
    pub fn user_not_found(id: impl Into<String>) -> Self {
        Self::ObjectNotFound {
            id: id.into(),
            type_name: "User",
        }
    }

    /// Validation failure for a request to `path`.
    pub fn validation(path: impl Into<String>, errors: Vec<FieldError>) -> Self {
        Self::Validation {
            path: path.into(),
            errors,
        }
    }
}

/// Body of a 400 validation response.
#[derive(Debug, Serialize, ToSchema)]
pub struct ValidationErrorBody {
    /// Request path.
    pub path: String,
    /// HTTP status code (400).
    pub status: u16,
    /// Fixed error label.
    pub error: String,
    /// Fixed summary message.
    pub message: String,
    /// One entry per violated field.
    pub errors: Vec<FieldError>,
}

/// Body of a 404 or 500 response.
#[derive(Debug, Serialize, ToSchema)]
pub struct StandardErrorBody {
    /// Human-readable message.
    pub message: String,
}

impl IntoResponse for ApiUsersError {
    fn into_response(self) -> Response {
        match self {
            Self::ObjectNotFound { id, type_name } => (
                StatusCode::NOT_FOUND,
                Json(StandardErrorBody {
                    message: format!("Object not found. Id: {id} Type: {type_name}"),
                }),
            )
                .into_response(),
            Self::Validation { path, errors } => (
                StatusCode::BAD_REQUEST,
                Json(ValidationErrorBody {
                    path,
                    status: StatusCode::BAD_REQUEST.as_u16(),
                    error: "Validation error".to_string(),
                    message: "Error on validation attributes".to_string(),
                    errors,
                }),
            )
                .into_response(),
            Self::Store(e) => {
                tracing::error!(error = %e, "Store error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(StandardErrorBody {
                        message: "An internal error occurred".to_string(),
                    }),
                )
                    .into_response()
            }
        }
    }
}
