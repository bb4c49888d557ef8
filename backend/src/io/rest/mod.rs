//! # REST API Interface Layer
//!
//! HTTP endpoints for the people directory.
//!
//! ## Key Responsibilities
//!
//! - **API Endpoints**: persons, exercises, families, tree nodes and reset
//! - **Error Handling**: domain errors become `ResponseStatus` bodies with 400/404/409/500
//! - **Serialization**: DTO mapping between `shared` wire types and domain models
//! - **Logging**: every request line is logged before it reaches the domain layer

pub mod error;
pub mod exercise_apis;
pub mod family_apis;
pub mod mappers;
pub mod node_apis;
pub mod person_apis;
pub mod reset_apis;

pub use error::ApiError;
pub use exercise_apis::*;
pub use family_apis::*;
pub use node_apis::*;
pub use person_apis::*;
pub use reset_apis::*;
