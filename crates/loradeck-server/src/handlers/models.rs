use std::sync::Arc;

use axum::extract::{Path, State};
use axum::Json;

use loradeck_core::ModelRecord;

use crate::dto::StatusResponse;
use crate::error::AppError;
use crate::state::AppState;

/// The catalog the widget fetches: a bare JSON array, newest-first.
pub async fn list(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<ModelRecord>>, AppError> {
    let records = state.registry.scan(false)?;
    Ok(Json(records))
}

pub async fn get_model(
    State(state): State<Arc<AppState>>,
    Path(internal_name): Path<String>,
) -> Result<Json<ModelRecord>, AppError> {
    let record = state.registry.find(&internal_name)?;
    Ok(Json(record))
}

pub async fn status(
    State(state): State<Arc<AppState>>,
) -> Result<Json<StatusResponse>, AppError> {
    let records = state.registry.scan(false)?;
    Ok(Json(StatusResponse {
        model_dir: state.registry.model_dir().display().to_string(),
        model_count: records.len(),
    }))
}
