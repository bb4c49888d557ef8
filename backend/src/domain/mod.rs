//! # Domain Module
//!
//! Business rules for the people directory, sitting between the REST layer and storage.
//!
//! ## Key Responsibilities
//!
//! - **Persons**: create, read, update and delete with validation and parent-link checks
//! - **Nodes**: one level of the person hierarchy at a time for lazy tree loading
//! - **Exercises**: the standalone exercise log
//! - **Families**: read access to family membership
//! - **Reset**: restoring the demo dataset
//!
//! Services are cheap to clone; each holds its repositories over a shared pool.

pub mod errors;
pub mod exercise_service;
pub mod family_service;
pub mod models;
pub mod node_service;
pub mod person_service;
pub mod reset_service;

pub use errors::{DomainError, DomainResult};
pub use exercise_service::ExerciseService;
pub use family_service::FamilyService;
pub use node_service::NodeService;
pub use person_service::PersonService;
pub use reset_service::{seed_dataset, ResetService};

/// Behaviour switches shared by the services
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceOptions {
    /// Apply the person field rules on create as well as on update
    pub validate_on_create: bool,
    /// Path that node links are built from, e.g. `/person/3`
    pub node_link_prefix: String,
}

impl Default for ServiceOptions {
    fn default() -> Self {
        Self {
            validate_on_create: false,
            node_link_prefix: "/person".to_string(),
        }
    }
}
