//! # REST API for the Exercise Log

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::{header, StatusCode, Uri},
    response::{IntoResponse, Json},
};
use tracing::{error, info};

use crate::io::rest::error::{json_body, parse_id, ApiError};
use crate::io::rest::mappers::ExerciseMapper;
use crate::AppState;

/// List all exercises as a bare array
pub async fn list_exercises(State(state): State<AppState>) -> impl IntoResponse {
    info!("GET /exercise");

    match state.exercise_service.list_exercises().await {
        Ok(exercises) => {
            let dtos: Vec<shared::Exercise> = exercises.into_iter().map(ExerciseMapper::to_dto).collect();
            (StatusCode::OK, Json(dtos)).into_response()
        }
        Err(e) => {
            error!("Failed to list exercises: {}", e);
            ApiError::from(e).into_response()
        }
    }
}

pub async fn get_exercise(State(state): State<AppState>, Path(id): Path<String>) -> impl IntoResponse {
    info!("GET /exercise/{}", id);

    let id = match parse_id(&id) {
        Ok(id) => id,
        Err(e) => return e.into_response(),
    };

    match state.exercise_service.get_exercise(id).await {
        Ok(exercise) => (StatusCode::OK, Json(ExerciseMapper::to_dto(exercise))).into_response(),
        Err(e) => ApiError::from(e).into_response(),
    }
}

pub async fn create_exercise(
    State(state): State<AppState>,
    uri: Uri,
    payload: Result<Json<shared::Exercise>, JsonRejection>,
) -> impl IntoResponse {
    let request = match json_body(payload) {
        Ok(request) => request,
        Err(e) => return e.into_response(),
    };
    info!("POST /exercise - request: {:?}", request);

    let exercise = match ExerciseMapper::to_domain(request) {
        Ok(exercise) => exercise,
        Err(e) => return ApiError::from(e).into_response(),
    };

    match state.exercise_service.create_exercise(exercise).await {
        Ok(created) => {
            let location = format!("{}/{}", uri.path().trim_end_matches('/'), created.id);
            (
                StatusCode::CREATED,
                [(header::LOCATION, location)],
                Json(ExerciseMapper::to_dto(created)),
            )
                .into_response()
        }
        Err(e) => {
            error!("Failed to create exercise: {}", e);
            ApiError::from(e).into_response()
        }
    }
}

pub async fn update_exercise(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<shared::Exercise>, JsonRejection>,
) -> impl IntoResponse {
    let request = match json_body(payload) {
        Ok(request) => request,
        Err(e) => return e.into_response(),
    };
    info!("PUT /exercise/{} - request: {:?}", id, request);

    let id = match parse_id(&id) {
        Ok(id) => id,
        Err(e) => return e.into_response(),
    };
    let exercise = match ExerciseMapper::to_domain(request) {
        Ok(exercise) => exercise,
        Err(e) => return ApiError::from(e).into_response(),
    };

    match state.exercise_service.update_exercise(id, exercise).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => ApiError::from(e).into_response(),
    }
}

pub async fn delete_exercise(State(state): State<AppState>, Path(id): Path<String>) -> impl IntoResponse {
    info!("DELETE /exercise/{}", id);

    let id = match parse_id(&id) {
        Ok(id) => id,
        Err(e) => return e.into_response(),
    };

    match state.exercise_service.delete_exercise(id).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => ApiError::from(e).into_response(),
    }
}
