use async_trait::async_trait;

use crate::{error::Result, notification::NotificationPayload};
use super::push_models::ProviderResponse;

/// A credentialed push-notification provider, built once at startup.
#[async_trait]
pub trait PushProvider: Send + Sync {
    /// Application id the payloads are addressed to.
    fn app_id(&self) -> &str;

    /// Sends one payload. Errors reported by the provider come back as
    /// `AppError::ProviderRejected`; transport or protocol failures as
    /// `AppError::Unexpected`.
    async fn send(&self, payload: &NotificationPayload) -> Result<ProviderResponse>;
}
