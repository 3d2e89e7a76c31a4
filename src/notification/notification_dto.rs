use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::error::AppError;

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct BroadcastRequest {
    #[validate(length(min = 1, message = "title must not be empty"))]
    pub title: Option<String>,
    #[validate(length(min = 1, message = "message must not be empty"))]
    pub message: Option<String>,
    /// Send to every subscriber instead of the users with a stored device id.
    #[serde(default, rename = "toAll", alias = "to_all")]
    pub to_all: bool,
}

/// A validated broadcast.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Broadcast {
    pub title: String,
    pub message: String,
    pub to_all: bool,
}

impl TryFrom<BroadcastRequest> for Broadcast {
    type Error = AppError;

    fn try_from(request: BroadcastRequest) -> Result<Self, Self::Error> {
        request.validate()?;

        let title = required_text("title", request.title)?;
        let message = required_text("message", request.message)?;

        Ok(Self {
            title,
            message,
            to_all: request.to_all,
        })
    }
}

fn required_text(field: &str, value: Option<String>) -> Result<String, AppError> {
    match value {
        Some(text) if !text.trim().is_empty() => Ok(text),
        Some(_) => Err(AppError::Validation(format!("{} must not be blank", field))),
        None => Err(AppError::Validation(format!("{} is required", field))),
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct DispatchResponse {
    pub success: bool,
    pub message: String,
    /// Explicit device count, absent for segment broadcasts.
    pub recipients: Option<usize>,
    /// Body returned by the push provider, absent when nothing was sent.
    #[schema(value_type = Option<Object>)]
    pub response: Option<serde_json::Value>,
}
