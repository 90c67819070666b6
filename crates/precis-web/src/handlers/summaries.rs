use std::sync::Arc;

use axum::Json;
use axum::extract::{Path, State};
use serde::Serialize;

use precis_core::SummaryRecord;

use crate::errors::AppError;
use crate::state::AppState;

#[derive(Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

/// GET /summaries — all stored records.
pub async fn list(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<SummaryRecord>>, AppError> {
    Ok(Json(state.store.list_all()?))
}

/// DELETE /summaries/{id} — remove one record. A missing id still reports
/// success; the caller cannot tell the difference.
pub async fn delete_one(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<Json<MessageResponse>, AppError> {
    state.store.delete_by_id(id)?;
    tracing::info!(id, "summary deleted");
    Ok(Json(MessageResponse {
        message: "Summary deleted",
    }))
}

/// DELETE /summaries — remove every record.
pub async fn delete_all(
    State(state): State<Arc<AppState>>,
) -> Result<Json<MessageResponse>, AppError> {
    state.store.delete_all()?;
    tracing::info!("all summaries deleted");
    Ok(Json(MessageResponse {
        message: "All summaries deleted",
    }))
}
