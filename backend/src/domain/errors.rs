//! Error taxonomy shared by all domain services.

use super::models::PersonValidationError;

#[derive(Debug, thiserror::Error)]
pub enum DomainError {
    /// Input violates a rule; nothing was written
    #[error("Validation failed: {}", .0.join("; "))]
    Validation(Vec<String>),

    #[error("{entity} {id} not found")]
    NotFound { entity: &'static str, id: i64 },

    /// The operation would break a relationship between records
    #[error("{0}")]
    Conflict(String),

    #[error(transparent)]
    Storage(#[from] anyhow::Error),
}

pub type DomainResult<T> = Result<T, DomainError>;

impl DomainError {
    pub fn validation(message: impl Into<String>) -> Self {
        DomainError::Validation(vec![message.into()])
    }

    pub fn not_found(entity: &'static str, id: i64) -> Self {
        DomainError::NotFound { entity, id }
    }
}

impl From<Vec<PersonValidationError>> for DomainError {
    fn from(errors: Vec<PersonValidationError>) -> Self {
        DomainError::Validation(errors.iter().map(ToString::to_string).collect())
    }
}
