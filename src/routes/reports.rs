use axum::extract::State;
use axum::routing::post;
use axum::{Json, Router};
use serde_json::{json, Value};
use tracing::{error, info};

use crate::errors::AppError;
use crate::services;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/export", post(export_report))
}

pub async fn export_report(State(state): State<AppState>) -> Result<Json<Value>, AppError> {
    info!("POST /reports/export - Generating holdings report");
    let rows = services::report_service::generate_and_export(&state)
        .await
        .map_err(|e| {
            error!("Report export failed: {}", e);
            e
        })?;
    Ok(Json(json!({ "message": "report exported", "rows": rows })))
}
