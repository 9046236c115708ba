use axum::extract::{Path, State};
use axum::routing::get;
use axum::{Json, Router};
use tracing::{error, info};

use crate::errors::AppError;
use crate::models::Investment;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/:id", get(get_investment))
}

// The upstream answers with a collection keyed by the id; the caller gets
// its first element.
pub async fn get_investment(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<Investment>, AppError> {
    info!("GET /investments/{} - Looking up investment", id);
    let records = state
        .investments
        .fetch_by_id(&id)
        .await
        .map_err(|e| {
            error!("Failed to fetch investment {}: {}", id, e);
            AppError::from(e)
        })?
        .ok_or(AppError::MissingSourceData)?;

    let investment = records.into_iter().next().ok_or(AppError::NotFound)?;
    Ok(Json(investment))
}
