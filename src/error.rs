//! Error taxonomy for the HTTP boundary.
//!
//! Repos and collaborators bubble `anyhow::Error` / typed errors upward;
//! each handler translates into exactly one of these classes. Storage
//! causes are logged server-side and never surfaced to the caller.

use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    /// Missing or malformed required field / id shape.
    #[error("{0}")]
    Validation(String),

    /// Bad password or missing/malformed session token. Carries no detail.
    #[error("unauthorized")]
    Auth,

    /// Any failure from the persistence collaborator.
    #[error("internal error")]
    Storage(#[from] anyhow::Error),

    /// Upload-specific failure with a human-readable reason.
    #[error("{0}")]
    Upload(String),
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::Auth => StatusCode::UNAUTHORIZED,
            ApiError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::Upload(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        if let ApiError::Storage(cause) = self {
            log::error!("storage failure: {cause:?}");
        }
        HttpResponse::build(self.status_code())
            .json(serde_json::json!({ "error": self.to_string() }))
    }
}

impl From<sqlx::Error> for ApiError {
    fn from(e: sqlx::Error) -> Self {
        ApiError::Storage(e.into())
    }
}
