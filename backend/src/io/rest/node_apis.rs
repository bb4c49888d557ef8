//! # REST API for the Person Tree
//!
//! Each call returns one level of the hierarchy. Clients expand a node by asking
//! for the children of its `Id`; an empty or missing `Id` asks for the top level.

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::{IntoResponse, Json},
};
use shared::NodesRequest;
use tracing::info;

use crate::domain::{DomainResult, NodeService};
use crate::domain::models::Person;
use crate::io::rest::error::{json_body, ApiError};
use crate::io::rest::mappers::NodeMapper;
use crate::AppState;

fn nodes_response(service: &NodeService, result: DomainResult<Vec<Person>>) -> axum::response::Response {
    match result {
        Ok(children) => {
            let response = NodeMapper::to_response(&children, service.link_prefix());
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => ApiError::from(e).into_response(),
    }
}

/// Children of the node named in the request body
pub async fn post_nodes(
    State(state): State<AppState>,
    payload: Result<Json<NodesRequest>, JsonRejection>,
) -> impl IntoResponse {
    let request = match json_body(payload) {
        Ok(request) => request,
        Err(e) => return e.into_response(),
    };
    info!("POST /nodes - parent: {:?}", request.id);

    let service = &state.node_service;
    nodes_response(service, service.children_of(request.id.as_deref()).await)
}

/// Top-level nodes
pub async fn get_root_nodes(State(state): State<AppState>) -> impl IntoResponse {
    info!("GET /nodes");

    let service = &state.node_service;
    nodes_response(service, service.children(None).await)
}

/// Children of the node in the path
pub async fn get_nodes(State(state): State<AppState>, Path(id): Path<String>) -> impl IntoResponse {
    info!("GET /nodes/{}", id);

    let service = &state.node_service;
    nodes_response(service, service.children_of(Some(id.as_str())).await)
}
