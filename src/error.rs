use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Method not allowed")]
    MethodNotAllowed,

    #[error("Configuration missing: {0}")]
    ConfigurationMissing(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error("User source unavailable: {0}")]
    UserSourceUnavailable(String),

    #[error("Push provider rejected the notification")]
    ProviderRejected(serde_json::Value),

    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

impl From<validator::ValidationErrors> for AppError {
    fn from(err: validator::ValidationErrors) -> Self {
        AppError::Validation(err.to_string())
    }
}

impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        AppError::UserSourceUnavailable(err.to_string())
    }
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        AppError::Unexpected(format!("push provider request failed: {}", err))
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            AppError::Unauthorized(ref msg) => {
                tracing::warn!("Rejected request: {}", msg);
                (StatusCode::UNAUTHORIZED, msg.clone())
            }
            AppError::Validation(ref msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            AppError::BadRequest(ref msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            AppError::MethodNotAllowed => (
                StatusCode::METHOD_NOT_ALLOWED,
                "Method not allowed".to_string(),
            ),
            AppError::ConfigurationMissing(ref msg) => {
                tracing::error!("Configuration missing: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Server is not configured to send notifications".to_string(),
                )
            }
            AppError::InvalidConfiguration(ref msg) => {
                tracing::error!("Invalid configuration: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Server is not configured to send notifications".to_string(),
                )
            }
            AppError::UserSourceUnavailable(ref e) => {
                tracing::error!("User source error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Failed to load notification recipients".to_string(),
                )
            }
            AppError::ProviderRejected(errors) => {
                tracing::error!("Push provider returned errors: {}", errors);
                let body = Json(json!({
                    "success": false,
                    "error": "Push provider rejected the notification",
                    "errors": errors,
                }));
                return (StatusCode::INTERNAL_SERVER_ERROR, body).into_response();
            }
            AppError::Unexpected(ref e) => {
                tracing::error!("Unexpected error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        };

        let body = Json(json!({
            "success": false,
            "error": error_message,
        }));

        (status, body).into_response()
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
