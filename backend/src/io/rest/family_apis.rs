//! # REST API for Families

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Json},
};
use tracing::info;

use crate::io::rest::error::{parse_id, ApiError};
use crate::io::rest::mappers::{FamilyMapper, PersonMapper};
use crate::AppState;

pub async fn list_families(State(state): State<AppState>) -> impl IntoResponse {
    info!("GET /family");

    match state.family_service.list_families().await {
        Ok(families) => (StatusCode::OK, Json(FamilyMapper::to_list_response(families))).into_response(),
        Err(e) => ApiError::from(e).into_response(),
    }
}

pub async fn list_family_members(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> impl IntoResponse {
    info!("GET /family/{}/members", id);

    let id = match parse_id(&id) {
        Ok(id) => id,
        Err(e) => return e.into_response(),
    };

    match state.family_service.members(id).await {
        Ok(members) => (StatusCode::OK, Json(PersonMapper::to_list_response(members))).into_response(),
        Err(e) => ApiError::from(e).into_response(),
    }
}
