// src/errors.rs
// DOCUMENTATION: Custom error types and HTTP responses
// PURPOSE: Centralized error handling for entire application
//
// Only two kinds of failure ever reach a caller: request problems (400/401/404)
// and datastore failures (500). Third-party API failures are ExternalApiError,
// which services turn into fallback data instead of a response.

use actix_web::{error::ResponseError, http::StatusCode, HttpResponse};
use serde_json::json;
use thiserror::Error;
use validator::{ValidationErrors, ValidationErrorsKind};

/// Application-specific error types
/// DOCUMENTATION: Each variant maps to an HTTP status code and a JSON envelope
#[derive(Error, Debug)]
pub enum TravelError {
    #[error("{0} not found")]
    NotFound(String),

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("{0}")]
    InvalidInput(String),

    #[error("Validation error")]
    ValidationError(Vec<String>),

    #[error("Not authorized: {0}")]
    Unauthorized(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

impl TravelError {
    fn error_code(&self) -> &'static str {
        match self {
            TravelError::NotFound(_) => "NOT_FOUND",
            TravelError::DatabaseError(_) => "DATABASE_ERROR",
            TravelError::InvalidInput(_) => "INVALID_INPUT",
            TravelError::ValidationError(_) => "VALIDATION_ERROR",
            TravelError::Unauthorized(_) => "UNAUTHORIZED",
            TravelError::Internal(_) => "INTERNAL_ERROR",
        }
    }
}

/// Convert TravelError to HTTP response
/// DOCUMENTATION: Maps error types to HTTP status codes and JSON responses
impl ResponseError for TravelError {
    fn error_response(&self) -> HttpResponse {
        let mut body = json!({
            "success": false,
            "code": self.error_code(),
            "message": self.to_string(),
            "timestamp": chrono::Utc::now().to_rfc3339()
        });

        if let TravelError::ValidationError(messages) = self {
            body["errors"] = json!(messages);
        }

        HttpResponse::build(self.status_code()).json(body)
    }

    fn status_code(&self) -> StatusCode {
        match self {
            TravelError::NotFound(_) => StatusCode::NOT_FOUND,
            TravelError::DatabaseError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            TravelError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            TravelError::ValidationError(_) => StatusCode::BAD_REQUEST,
            TravelError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            TravelError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<ValidationErrors> for TravelError {
    fn from(errors: ValidationErrors) -> Self {
        let mut messages = Vec::new();
        collect_messages(&errors, None, &mut messages);
        messages.sort();
        TravelError::ValidationError(messages)
    }
}

/// Flatten nested validator errors into "field: message" strings
fn collect_messages(errors: &ValidationErrors, prefix: Option<&str>, out: &mut Vec<String>) {
    for (field, kind) in errors.errors() {
        let path = match (prefix, *field) {
            (Some(p), "__all__") => p.to_string(),
            (None, "__all__") => String::new(),
            (Some(p), f) => format!("{}.{}", p, f),
            (None, f) => f.to_string(),
        };

        match kind {
            ValidationErrorsKind::Field(list) => {
                for err in list {
                    let message = err
                        .message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| err.code.to_string());
                    if path.is_empty() {
                        out.push(message);
                    } else {
                        out.push(format!("{}: {}", path, message));
                    }
                }
            }
            ValidationErrorsKind::Struct(inner) => collect_messages(inner, Some(&path), out),
            ValidationErrorsKind::List(items) => {
                for (idx, inner) in items {
                    collect_messages(inner, Some(&format!("{}[{}]", path, idx)), out);
                }
            }
        }
    }
}

/// Failure talking to a third-party API
/// DOCUMENTATION: Never rendered as a response; callers log it and fall back
#[derive(Error, Debug)]
pub enum ExternalApiError {
    #[error("API key not configured")]
    MissingApiKey,

    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("API returned status {0}")]
    Status(reqwest::StatusCode),

    #[error("unexpected payload: {0}")]
    Payload(String),
}
