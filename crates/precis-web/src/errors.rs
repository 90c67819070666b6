use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use thiserror::Error;

use precis_core::{ExtractionError, StoreError, SummarizeError};

/// Error surface of the HTTP API.
///
/// Each handler converts at its own boundary: the detailed cause is logged,
/// the caller only sees a status code and a static message. Extraction,
/// summarization, and store failures all collapse to 500; nothing is
/// retried.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("no file uploaded")]
    MissingFile,
    #[error("invalid multipart request: {0}")]
    Multipart(String),
    #[error(transparent)]
    Extraction(#[from] ExtractionError),
    #[error(transparent)]
    Summarization(#[from] SummarizeError),
    #[error(transparent)]
    Store(#[from] StoreError),
}

#[derive(Serialize)]
struct ErrorBody {
    error: &'static str,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::MissingFile => (StatusCode::BAD_REQUEST, "No file uploaded"),
            AppError::Multipart(_) => (StatusCode::BAD_REQUEST, "Invalid upload request"),
            AppError::Extraction(_) | AppError::Summarization(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "Failed to process PDF")
            }
            AppError::Store(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to access summary store",
            ),
        };

        tracing::error!(error = %self, status = status.as_u16(), "request failed");

        (status, Json(ErrorBody { error: message })).into_response()
    }
}
