//! Error handling for the Crop Advisor demo host
//!
//! Provides consistent error responses in English and Hindi

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use shared::i18n::UnknownSection;
use shared::FormError;
use thiserror::Error;

/// Application error types
#[derive(Error, Debug)]
pub enum AppError {
    // Validation errors
    #[error("Validation error: {message}")]
    Validation {
        field: String,
        message: String,
        message_hi: String,
    },

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Resource not found: {0}")]
    NotFound(String),

    // Internal errors
    #[error("Internal server error: {0}")]
    Internal(String),
}

/// Error response structure
#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
}

#[derive(Debug, Clone, Serialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message_en: String,
    pub message_hi: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

impl From<FormError> for AppError {
    fn from(err: FormError) -> Self {
        match err.field() {
            Some(field) => AppError::Validation {
                message: match &err {
                    FormError::Invalid(_) => format!("Please fill in {}", field),
                    other => other.to_string(),
                },
                message_hi: format!("कृपया {} सही भरें", field),
                field,
            },
            None => AppError::ValidationError(err.to_string()),
        }
    }
}

impl From<UnknownSection> for AppError {
    fn from(err: UnknownSection) -> Self {
        AppError::NotFound(format!("String section '{}'", err.0))
    }
}

impl AppError {
    fn status_and_detail(&self) -> (StatusCode, ErrorDetail) {
        match self {
            AppError::Validation {
                field,
                message,
                message_hi,
            } => (
                StatusCode::BAD_REQUEST,
                ErrorDetail {
                    code: "VALIDATION_ERROR".to_string(),
                    message_en: message.clone(),
                    message_hi: message_hi.clone(),
                    field: Some(field.clone()),
                },
            ),
            AppError::ValidationError(msg) => (
                StatusCode::BAD_REQUEST,
                ErrorDetail {
                    code: "VALIDATION_ERROR".to_string(),
                    message_en: msg.clone(),
                    message_hi: format!("जानकारी सही नहीं है: {}", msg),
                    field: None,
                },
            ),
            AppError::NotFound(resource) => (
                StatusCode::NOT_FOUND,
                ErrorDetail {
                    code: "NOT_FOUND".to_string(),
                    message_en: format!("{} not found", resource),
                    message_hi: format!("{} नहीं मिला", resource),
                    field: None,
                },
            ),
            AppError::Internal(msg) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorDetail {
                    code: "INTERNAL_ERROR".to_string(),
                    message_en: msg.clone(),
                    message_hi: "सर्वर में आंतरिक त्रुटि हुई".to_string(),
                    field: None,
                },
            ),
        }
    }

    /// Body sent to chat clients as an `error` frame
    pub fn detail(&self) -> ErrorDetail {
        self.status_and_detail().1
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_detail) = self.status_and_detail();

        if status.is_server_error() {
            tracing::error!("Error: {:?}", self);
        } else {
            tracing::debug!("Request rejected: {}", self);
        }

        (status, Json(ErrorResponse { error: error_detail })).into_response()
    }
}

/// Result type alias for handlers
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;
    use shared::{FormData, Language};

    #[test]
    fn test_incomplete_form_names_first_field() {
        let err: AppError = FormData::new(Language::English).submit().unwrap_err().into();
        let (status, detail) = err.status_and_detail();
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(detail.field.as_deref(), Some("location"));
        assert_eq!(detail.code, "VALIDATION_ERROR");
    }

    #[test]
    fn test_unknown_section_is_not_found() {
        let err: AppError = UnknownSection("weather".to_string()).into();
        assert_eq!(err.status_and_detail().0, StatusCode::NOT_FOUND);
    }
}
