use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use models::errors::FieldErrors;
use models::ModelError;
use serde::Serialize;
use service::ServiceError;
use thiserror::Error;
use tracing::error;

/// JSON error body returned by every failing API call.
#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct ErrorBody {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<FieldErrors>,
}

#[derive(Debug)]
pub struct JsonApiError {
    pub status: StatusCode,
    pub body: ErrorBody,
}

impl JsonApiError {
    pub fn new(status: StatusCode, error: &str, message: Option<String>) -> Self {
        Self { status, body: ErrorBody { error: error.to_string(), message, errors: None } }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, "Bad Request", Some(message.into()))
    }

    pub fn booking_not_found(id: impl std::fmt::Display) -> Self {
        Self::new(StatusCode::NOT_FOUND, "Not Found", Some(format!("Booking {id} not found")))
    }
}

impl IntoResponse for JsonApiError {
    fn into_response(self) -> Response {
        (self.status, Json(self.body)).into_response()
    }
}

impl From<ModelError> for JsonApiError {
    fn from(e: ModelError) -> Self {
        let errors = e.field_errors().clone();
        let mut err = Self::new(StatusCode::BAD_REQUEST, "Validation Error", Some(e.to_string()));
        err.body.errors = Some(errors);
        err
    }
}

impl From<ServiceError> for JsonApiError {
    fn from(e: ServiceError) -> Self {
        match e {
            ServiceError::Storage(msg) => {
                error!(error = %msg, "booking storage failure");
                Self::new(StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error", Some(msg))
            }
        }
    }
}

#[derive(Debug, Error)]
pub enum StartupError {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("storage init failed: {0}")]
    Storage(#[from] ServiceError),
    #[error(transparent)]
    Any(#[from] anyhow::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn storage_errors_map_to_500() {
        let err = JsonApiError::from(ServiceError::Storage("disk full".into()));
        assert_eq!(err.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.body.message.as_deref(), Some("disk full"));
    }

    #[test]
    fn not_found_message_names_the_id() {
        let err = JsonApiError::booking_not_found(7);
        assert_eq!(err.status, StatusCode::NOT_FOUND);
        assert_eq!(err.body.message.as_deref(), Some("Booking 7 not found"));
    }

    #[test]
    fn model_errors_carry_field_map() {
        let e = models::validate_input(&serde_json::json!({})).unwrap_err();
        let err = JsonApiError::from(e);
        assert_eq!(err.status, StatusCode::BAD_REQUEST);
        assert_eq!(err.body.errors.map(|m| m.len()), Some(5));
    }
}
