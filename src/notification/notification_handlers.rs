use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    error::{AppError, Result},
    state::AppState,
};
use super::{
    notification_dto::{Broadcast, BroadcastRequest, DispatchResponse},
    notification_service::DispatchOutcome,
};

/// Send a push notification to all subscribers or to every user with a device id
#[utoipa::path(
    post,
    path = "/api/send-notification",
    request_body = BroadcastRequest,
    responses(
        (status = 200, description = "Notification sent, or no recipients to send to", body = DispatchResponse),
        (status = 400, description = "Missing title or message"),
        (status = 401, description = "Missing or invalid API key"),
        (status = 405, description = "Method not allowed"),
        (status = 500, description = "Provider rejected the notification or server misconfigured")
    ),
    tag = "notifications",
    security(("api_key" = []))
)]
pub async fn send_notification(
    State(state): State<AppState>,
    payload: std::result::Result<Json<BroadcastRequest>, JsonRejection>,
) -> Result<impl IntoResponse> {
    let Json(payload) = payload.map_err(|e| AppError::BadRequest(e.body_text()))?;
    let broadcast = Broadcast::try_from(payload)?;

    let response = match state.notification_service.dispatch(&broadcast).await? {
        DispatchOutcome::NoRecipients => DispatchResponse {
            success: true,
            message: "No users with a registered device to notify".to_string(),
            recipients: Some(0),
            response: None,
        },
        DispatchOutcome::Sent { recipients, response } => DispatchResponse {
            success: true,
            message: "Notification sent".to_string(),
            recipients,
            response: Some(response.raw),
        },
    };

    Ok((StatusCode::OK, Json(response)))
}

/// Fallback for any method other than POST on the send endpoint.
pub async fn method_not_allowed() -> AppError {
    AppError::MethodNotAllowed
}
