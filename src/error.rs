//! Error types for the storefront API
//!
//! Provides unified error handling using thiserror. The response cache has
//! no error path of its own; these errors come from the catalog handlers.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

// == App Error Enum ==
/// Unified error type for catalog operations and HTTP handlers.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AppError {
    /// Requested resource does not exist
    #[error("{0}")]
    NotFound(String),

    /// Request data failed validation
    #[error("{0}")]
    InvalidRequest(String),

    /// Resource collides with an existing one (e.g. duplicate slug)
    #[error("{0}")]
    Conflict(String),

    /// Internal server error
    #[error("{0}")]
    Internal(String),
}

impl AppError {
    /// HTTP status this error maps to.
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Conflict(_) => StatusCode::CONFLICT,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

// == IntoResponse Implementation ==
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let body = Json(json!({
            "success": false,
            "message": self.to_string(),
        }));

        (self.status(), body).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for the storefront API.
pub type Result<T> = std::result::Result<T, AppError>;
