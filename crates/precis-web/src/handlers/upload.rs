use std::path::Path;
use std::sync::Arc;

use axum::Json;
use axum::extract::{Multipart, State};
use serde::Serialize;

use precis_core::{ExtractionError, PdfBackend};

use crate::errors::AppError;
use crate::state::AppState;
use crate::upload::parse_multipart;

#[derive(Serialize)]
pub struct UploadResponse {
    pub message: &'static str,
    pub summary: String,
}

/// POST /upload — accept a PDF, extract its text, summarize, persist.
///
/// The upload lives in a [`tempfile::TempDir`] that is dropped on every exit
/// path, so the temporary artifact is removed whether or not extraction or
/// summarization succeeds.
pub async fn upload(
    State(state): State<Arc<AppState>>,
    multipart: Multipart,
) -> Result<Json<UploadResponse>, AppError> {
    let file = parse_multipart(multipart).await?;

    let temp_dir = tempfile::tempdir().map_err(ExtractionError::Io)?;
    let pdf_path = temp_dir.path().join("upload.pdf");
    std::fs::write(&pdf_path, &file.data).map_err(ExtractionError::Io)?;

    let text = extract_text_blocking(state.extractor.clone(), &pdf_path).await?;
    tracing::debug!(file = %file.filename, chars = text.chars().count(), "extracted text");

    let summary = state.summarizer.summarize(&text).await?;

    let id = state.store.insert(&file.filename, &summary)?;
    tracing::info!(id, file = %file.filename, "summary saved");

    Ok(Json(UploadResponse {
        message: "Summary generated and saved",
        summary,
    }))
}

/// Extract text using blocking I/O (MuPDF is not async).
async fn extract_text_blocking(
    extractor: Arc<dyn PdfBackend>,
    path: &Path,
) -> Result<String, ExtractionError> {
    let path = path.to_path_buf();
    tokio::task::spawn_blocking(move || extractor.extract_text(&path))
        .await
        .map_err(|e| ExtractionError::Extract(format!("task join error: {e}")))?
}
