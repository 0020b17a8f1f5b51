//! Application error type and its HTTP mapping.

use axum::{
    extract::rejection::FormRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    /// Request body is not a readable login form.
    #[error(transparent)]
    Form(#[from] FormRejection),

    #[error("session store error: {0}")]
    Session(#[from] tower_sessions::session::Error),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Form(rejection) => rejection.status(),
            AppError::Session(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::Form(rejection) => rejection.into_response(),
            AppError::Session(e) => {
                tracing::error!(error = %e, "Session store failure");
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error").into_response()
            }
        }
    }
}
