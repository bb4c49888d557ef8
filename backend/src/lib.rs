//! # People Backend
//!
//! REST server for the people directory and its lazily loaded person tree.
//!
//! ## Architecture
//!
//! ```text
//! UI Layer (Yew frontend)
//!     ↓
//! IO Layer (REST API, handlers)
//!     ↓
//! Domain Layer (Business logic, services)
//!     ↓
//! Storage Layer (SQLite via sqlx)
//! ```
//!
//! ## Key Responsibilities
//!
//! - Initialize the application state from a database connection and service options
//! - Set up the REST router with CORS, request tracing and the static frontend fallback

pub mod config;
pub mod domain;
pub mod io;
pub mod storage;

use std::path::PathBuf;

use anyhow::{Context, Result};
use axum::{
    http::{header, HeaderValue, Method},
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::domain::{
    ExerciseService, FamilyService, NodeService, PersonService, ResetService, ServiceOptions,
};
use crate::storage::DbConnection;

/// Main application state that holds all services
#[derive(Clone)]
pub struct AppState {
    pub person_service: PersonService,
    pub node_service: NodeService,
    pub exercise_service: ExerciseService,
    pub family_service: FamilyService,
    pub reset_service: ResetService,
}

impl AppState {
    pub fn new(db: DbConnection, options: &ServiceOptions) -> Self {
        Self {
            person_service: PersonService::new(db.clone(), options),
            node_service: NodeService::new(db.clone(), options),
            exercise_service: ExerciseService::new(db.clone()),
            family_service: FamilyService::new(db.clone()),
            reset_service: ResetService::new(db),
        }
    }
}

/// Initialize the backend with all required services
pub async fn initialize_backend(
    database_url: &str,
    max_connections: u32,
    options: &ServiceOptions,
) -> Result<AppState> {
    info!("Setting up database");
    let db = DbConnection::new(database_url, max_connections).await?;

    info!("Setting up domain model");
    Ok(AppState::new(db, options))
}

/// CORS for the given origin, or for any origin when none is configured
fn cors_layer(origin: Option<&str>) -> Result<CorsLayer> {
    let cors = CorsLayer::new()
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE])
        .expose_headers([header::LOCATION]);

    Ok(match origin {
        Some(origin) => {
            let value = origin
                .parse::<HeaderValue>()
                .with_context(|| format!("Invalid CORS origin '{}'", origin))?;
            cors.allow_origin(value)
        }
        None => cors.allow_origin(Any),
    })
}

/// Create the Axum router with all routes configured
pub fn create_router(
    app_state: AppState,
    cors_origin: Option<&str>,
    frontend_dir: Option<PathBuf>,
) -> Result<Router> {
    let router = Router::new()
        .route("/reset-people", get(io::reset_people))
        .route("/person", get(io::list_persons).post(io::create_person))
        .route(
            "/person/:id",
            get(io::get_person)
                .put(io::update_person)
                .delete(io::delete_person),
        )
        .route("/exercise", get(io::list_exercises).post(io::create_exercise))
        .route(
            "/exercise/:id",
            get(io::get_exercise)
                .put(io::update_exercise)
                .delete(io::delete_exercise),
        )
        .route("/nodes", post(io::post_nodes).get(io::get_root_nodes))
        .route("/nodes/:id", get(io::get_nodes))
        .route("/family", get(io::list_families))
        .route("/family/:id/members", get(io::list_family_members));

    let router = match frontend_dir {
        Some(dir) if dir.is_dir() => {
            info!("Serving frontend from {}", dir.display());
            router.fallback_service(ServeDir::new(dir))
        }
        _ => router,
    };

    Ok(router
        .layer(cors_layer(cors_origin)?)
        .layer(TraceLayer::new_for_http())
        .with_state(app_state))
}
