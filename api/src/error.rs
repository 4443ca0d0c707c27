use std::sync::Arc;

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use store::{
    StoreError,
    models::{FieldError, ValidationError},
};

pub type Result<T, E = AppError> = std::result::Result<T, E>;

/// JSON error response structure.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,

    /// Per-field messages, present only on validation failures.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fields: Option<Vec<FieldError>>,
}

/// The central error type used for HTTP responses.
#[derive(thiserror::Error, Debug)]
pub enum AppError {
    #[error("not found")]
    NotFound(Option<String>),

    #[error("bad request")]
    BadRequest(Option<String>),

    #[error("validation failed")]
    Validation(#[from] ValidationError),

    #[error("internal error")]
    Internal(
        #[source]
        #[from]
        eyre::Report,
    ),

    /// Dataset file error
    #[error("storage error")]
    Storage(
        #[source]
        #[from]
        store::StorageError,
    ),
}

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound(id) => AppError::NotFound(Some(format!("patient {id} not found"))),
            StoreError::AlreadyExists(id) => {
                AppError::BadRequest(Some(format!("patient {id} already exists")))
            }
            StoreError::Validation(err) => AppError::Validation(err),
            StoreError::Storage(err) => AppError::Storage(err),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error, fields) = match &self {
            AppError::Internal(..) | AppError::Storage(..) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "internal server error".to_string(),
                None,
            ),
            AppError::NotFound(msg) => (
                StatusCode::NOT_FOUND,
                msg.clone().unwrap_or_else(|| "not found".to_string()),
                None,
            ),
            AppError::BadRequest(msg) => (
                StatusCode::BAD_REQUEST,
                msg.clone().unwrap_or_else(|| "bad request".to_string()),
                None,
            ),
            AppError::Validation(err) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "patient record failed validation".to_string(),
                Some(err.errors.clone()),
            ),
        };

        let mut response = (status, Json(ErrorResponse { error, fields })).into_response();

        response.extensions_mut().insert(Arc::new(self));

        response
    }
}
