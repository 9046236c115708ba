use axum::response::IntoResponse;
use axum::Json;
use reqwest::StatusCode;
use serde_json::json;
use thiserror::Error;

use crate::external::reference_data::ClientError;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    Upstream(String),
    #[error("missing source data")]
    MissingSourceData,
    #[error("no company found for holding {holding_id} of user {user_id}")]
    UnresolvedReference { holding_id: String, user_id: String },
    #[error("not found")]
    NotFound,
    #[error("failed to encode report: {0}")]
    Encoding(String),
}

// Every failure renders as the uniform { "message": ... } shape; only the
// status code varies by variant.
impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let status = match &self {
            AppError::NotFound => StatusCode::NOT_FOUND,
            AppError::Upstream(_) | AppError::MissingSourceData => StatusCode::BAD_GATEWAY,
            AppError::UnresolvedReference { .. } | AppError::Encoding(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };
        (status, Json(json!({ "message": self.to_string() }))).into_response()
    }
}

impl From<ClientError> for AppError {
    fn from(value: ClientError) -> Self {
        AppError::Upstream(value.to_string())
    }
}
