//! # REST API for Person Management
//!
//! Endpoints for creating, retrieving, updating, and deleting persons.

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::{header, StatusCode, Uri},
    response::{IntoResponse, Json},
};
use tracing::{error, info};

use crate::domain::PersonService;
use crate::io::rest::error::{json_body, parse_id, ApiError};
use crate::io::rest::mappers::PersonMapper;
use crate::AppState;

/// List all persons
pub async fn list_persons(State(state): State<AppState>) -> impl IntoResponse {
    info!("GET /person");

    match state.person_service.list_persons().await {
        Ok(persons) => (StatusCode::OK, Json(PersonMapper::to_list_response(persons))).into_response(),
        Err(e) => {
            error!("Failed to list persons: {}", e);
            ApiError::from(e).into_response()
        }
    }
}

/// Get a person by ID, with its display label
pub async fn get_person(State(state): State<AppState>, Path(id): Path<String>) -> impl IntoResponse {
    info!("GET /person/{}", id);

    let id = match parse_id(&id) {
        Ok(id) => id,
        Err(e) => return e.into_response(),
    };

    match state.person_service.get_person(id).await {
        Ok(person) => {
            let response = PersonMapper::to_response(person, PersonService::today());
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => ApiError::from(e).into_response(),
    }
}

/// Create a new person
pub async fn create_person(
    State(state): State<AppState>,
    uri: Uri,
    payload: Result<Json<shared::Person>, JsonRejection>,
) -> impl IntoResponse {
    let request = match json_body(payload) {
        Ok(request) => request,
        Err(e) => return e.into_response(),
    };
    info!("POST /person - request: {:?}", request);

    let person = match PersonMapper::to_domain(request) {
        Ok(person) => person,
        Err(e) => return ApiError::from(e).into_response(),
    };

    match state.person_service.create_person(person).await {
        Ok(created) => {
            let location = format!("{}/{}", uri.path().trim_end_matches('/'), created.id);
            let response = PersonMapper::to_response(created, PersonService::today());
            (StatusCode::CREATED, [(header::LOCATION, location)], Json(response)).into_response()
        }
        Err(e) => {
            error!("Failed to create person: {}", e);
            ApiError::from(e).into_response()
        }
    }
}

/// Replace a person
pub async fn update_person(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<shared::Person>, JsonRejection>,
) -> impl IntoResponse {
    let request = match json_body(payload) {
        Ok(request) => request,
        Err(e) => return e.into_response(),
    };
    info!("PUT /person/{} - request: {:?}", id, request);

    let id = match parse_id(&id) {
        Ok(id) => id,
        Err(e) => return e.into_response(),
    };
    let person = match PersonMapper::to_domain(request) {
        Ok(person) => person,
        Err(e) => return ApiError::from(e).into_response(),
    };

    match state.person_service.update_person(id, person).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => {
            error!("Failed to update person {}: {}", id, e);
            ApiError::from(e).into_response()
        }
    }
}

/// Delete a person
pub async fn delete_person(State(state): State<AppState>, Path(id): Path<String>) -> impl IntoResponse {
    info!("DELETE /person/{}", id);

    let id = match parse_id(&id) {
        Ok(id) => id,
        Err(e) => return e.into_response(),
    };

    match state.person_service.delete_person(id).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => {
            error!("Failed to delete person {}: {}", id, e);
            ApiError::from(e).into_response()
        }
    }
}
