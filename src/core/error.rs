use actix_web::{error::ResponseError, http::StatusCode, HttpResponse};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Application-wide Result type
pub type Result<T> = std::result::Result<T, AppError>;

/// Title carried by every 400-level structured error body.
pub const BAD_REQUEST_TITLE: &str = "Bad Request! Consult the documentation";

/// One entry of the `details` list in a structured error body.
///
/// `field` is present for field-level constraint violations and omitted for
/// business-rule or server-side failures.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorDetail {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
    pub message: String,
}

impl ErrorDetail {
    pub fn of_field(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: Some(field.into()),
            message: message.into(),
        }
    }

    pub fn of_message(message: impl Into<String>) -> Self {
        Self {
            field: None,
            message: message.into(),
        }
    }
}

/// Structured error body returned for every failure at the resource boundary
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub title: String,
    pub timestamp: DateTime<Utc>,
    pub status: u16,
    pub exception: String,
    pub details: Vec<ErrorDetail>,
}

/// Main application error type
#[derive(thiserror::Error, Debug)]
pub enum AppError {
    /// One or more input fields violate declared constraints
    #[error("Validation error: {} constraint violation(s)", .0.len())]
    Validation(Vec<ErrorDetail>),

    /// Domain-rule violation (unknown customer, unknown credit, ...)
    #[error("Business error: {0}")]
    Business(String),

    /// Database operation errors
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Internal server errors
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    pub fn validation(details: Vec<ErrorDetail>) -> Self {
        AppError::Validation(details)
    }

    pub fn invalid_field(field: impl Into<String>, message: impl Into<String>) -> Self {
        AppError::Validation(vec![ErrorDetail::of_field(field, message)])
    }

    pub fn business(msg: impl Into<String>) -> Self {
        AppError::Business(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        AppError::Internal(msg.into())
    }

    /// Classification string surfaced in the error body for observability
    pub fn classification(&self) -> &'static str {
        match self {
            AppError::Validation(_) => "creditline::error::ValidationError",
            AppError::Business(_) => "creditline::error::BusinessError",
            AppError::Database(_) => "creditline::error::DatabaseError",
            AppError::Configuration(_) => "creditline::error::ConfigurationError",
            AppError::Internal(_) => "creditline::error::InternalError",
        }
    }

    fn details(&self) -> Vec<ErrorDetail> {
        match self {
            AppError::Validation(details) => details.clone(),
            AppError::Business(msg) => vec![ErrorDetail::of_message(msg.clone())],
            // Storage and internal faults keep their specifics in the logs
            AppError::Database(_) => vec![ErrorDetail::of_message("database operation failed")],
            AppError::Configuration(msg) => vec![ErrorDetail::of_message(msg.clone())],
            AppError::Internal(msg) => vec![ErrorDetail::of_message(msg.clone())],
        }
    }

    fn title(&self) -> &'static str {
        match self.status_code() {
            StatusCode::BAD_REQUEST => BAD_REQUEST_TITLE,
            _ => "Internal Server Error",
        }
    }

    pub fn to_body(&self) -> ErrorBody {
        let status = self.status_code();
        ErrorBody {
            title: self.title().to_string(),
            timestamp: Utc::now(),
            status: status.as_u16(),
            exception: self.classification().to_string(),
            details: self.details(),
        }
    }
}

impl ResponseError for AppError {
    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(self.to_body())
    }

    fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::Business(_) => StatusCode::BAD_REQUEST,
            AppError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Configuration(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Map body deserialization failures onto the structured error shape
pub fn json_error_handler(
    err: actix_web::error::JsonPayloadError,
    _req: &actix_web::HttpRequest,
) -> actix_web::Error {
    AppError::Validation(vec![ErrorDetail::of_field("body", err.to_string())]).into()
}

/// Map query-string extraction failures onto the structured error shape
pub fn query_error_handler(
    err: actix_web::error::QueryPayloadError,
    _req: &actix_web::HttpRequest,
) -> actix_web::Error {
    AppError::Validation(vec![ErrorDetail::of_field("query", err.to_string())]).into()
}
