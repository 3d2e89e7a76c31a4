use std::sync::Arc;

use tracing::info;

use crate::{
    audience::resolve_audience,
    error::{AppError, Result},
    push::{ProviderResponse, PushProvider},
    user::UserSource,
};
use super::{notification_builder::build_payload, notification_dto::Broadcast};

#[derive(Debug)]
pub enum DispatchOutcome {
    /// No user has a device id; the provider was not called.
    NoRecipients,
    Sent {
        /// Explicit device count, `None` for a segment broadcast.
        recipients: Option<usize>,
        response: ProviderResponse,
    },
}

#[derive(Clone)]
pub struct NotificationService {
    user_source: Arc<dyn UserSource>,
    push_provider: Option<Arc<dyn PushProvider>>,
}

impl NotificationService {
    pub fn new(
        user_source: Arc<dyn UserSource>,
        push_provider: Option<Arc<dyn PushProvider>>,
    ) -> Self {
        Self {
            user_source,
            push_provider,
        }
    }

    pub async fn dispatch(&self, broadcast: &Broadcast) -> Result<DispatchOutcome> {
        let provider = self.push_provider.as_ref().ok_or_else(|| {
            AppError::ConfigurationMissing("OneSignal credentials are not configured".to_string())
        })?;

        let audience = resolve_audience(broadcast.to_all, self.user_source.as_ref()).await?;

        if audience.is_empty() {
            info!("No users with a device id, skipping notification \"{}\"", broadcast.title);
            return Ok(DispatchOutcome::NoRecipients);
        }

        let payload = build_payload(
            provider.app_id(),
            &broadcast.title,
            &broadcast.message,
            audience,
        );
        let recipients = payload.device_count();

        let response = provider.send(&payload).await?;

        info!(
            "Sent notification \"{}\" to {}",
            broadcast.title,
            recipients
                .map(|n| format!("{} devices", n))
                .unwrap_or_else(|| "all subscribers".to_string())
        );

        Ok(DispatchOutcome::Sent {
            recipients,
            response,
        })
    }
}
