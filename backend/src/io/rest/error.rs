//! Translation of domain errors into HTTP responses.

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use shared::{ErrorResponse, ResponseStatus};
use tracing::error;

use crate::domain::DomainError;

/// Error returned by every handler; renders as a `ResponseStatus` JSON body.
#[derive(Debug)]
pub struct ApiError(DomainError);

impl ApiError {
    /// Reject a path segment that is not a numeric ID
    pub fn invalid_id(raw: &str) -> Self {
        ApiError(DomainError::validation(format!("Invalid id '{}'", raw)))
    }

    pub fn status(&self) -> StatusCode {
        match self.0 {
            DomainError::Validation(_) => StatusCode::BAD_REQUEST,
            DomainError::NotFound { .. } => StatusCode::NOT_FOUND,
            DomainError::Conflict(_) => StatusCode::CONFLICT,
            DomainError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_code(&self) -> &'static str {
        match self.0 {
            DomainError::Validation(_) => "ValidationException",
            DomainError::NotFound { .. } => "NotFound",
            DomainError::Conflict(_) => "Conflict",
            DomainError::Storage(_) => "InternalServerError",
        }
    }

    fn body(&self) -> ErrorResponse {
        let (message, errors) = match &self.0 {
            DomainError::Validation(errors) => ("Validation failed".to_string(), errors.clone()),
            // Storage details stay in the server log
            DomainError::Storage(_) => ("Internal server error".to_string(), Vec::new()),
            other => (other.to_string(), Vec::new()),
        };

        ErrorResponse {
            response_status: ResponseStatus {
                error_code: self.error_code().to_string(),
                message,
                errors,
            },
        }
    }
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        ApiError(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            error!("Request failed: {:#}", self.0);
        }
        (status, Json(self.body())).into_response()
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError(DomainError::validation(format!(
            "Invalid request body: {}",
            rejection.body_text()
        )))
    }
}

/// Unwrap a JSON body, turning axum's rejection into a `ResponseStatus` error
pub fn json_body<T>(payload: Result<Json<T>, JsonRejection>) -> Result<T, ApiError> {
    payload.map(|Json(body)| body).map_err(ApiError::from)
}

/// Parse a numeric path ID
pub fn parse_id(raw: &str) -> Result<i64, ApiError> {
    raw.trim().parse().map_err(|_| ApiError::invalid_id(raw))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            ApiError::from(DomainError::validation("x")).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::from(DomainError::not_found("Person", 1)).status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ApiError::from(DomainError::Conflict("x".into())).status(),
            StatusCode::CONFLICT
        );
        assert_eq!(
            ApiError::from(DomainError::Storage(anyhow::anyhow!("boom"))).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_validation_body_lists_errors() {
        let err = ApiError::from(DomainError::Validation(vec![
            "First name cannot be empty".to_string(),
            "Last name cannot be empty".to_string(),
        ]));
        let body = err.body();
        assert_eq!(body.response_status.error_code, "ValidationException");
        assert_eq!(body.response_status.errors.len(), 2);
    }

    #[test]
    fn test_storage_body_hides_details() {
        let err = ApiError::from(DomainError::Storage(anyhow::anyhow!("no such table: persons")));
        assert_eq!(err.body().response_status.message, "Internal server error");
    }

    #[test]
    fn test_parse_id() {
        assert_eq!(parse_id("42").unwrap(), 42);
        assert_eq!(parse_id("abc").unwrap_err().status(), StatusCode::BAD_REQUEST);
    }
}
