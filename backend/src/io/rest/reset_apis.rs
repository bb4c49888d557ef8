//! # REST API for Restoring Demo Data

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json},
};
use shared::ResetResponse;
use tracing::{error, info};

use crate::io::rest::error::ApiError;
use crate::AppState;

/// Drop the hierarchy tables and reload the seed dataset
pub async fn reset_people(State(state): State<AppState>) -> impl IntoResponse {
    info!("GET /reset-people");

    match state.reset_service.reset().await {
        Ok(()) => (StatusCode::OK, Json(ResetResponse {})).into_response(),
        Err(e) => {
            error!("Failed to reset people data: {}", e);
            ApiError::from(e).into_response()
        }
    }
}
