use async_trait::async_trait;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use serde_json::Value;

use crate::{
    error::{AppError, Result},
    notification::NotificationPayload,
    state::OneSignalConfig,
};
use super::{push_models::ProviderResponse, push_provider::PushProvider};

/// OneSignal REST client. Holds the app id and REST API key for its lifetime.
#[derive(Clone)]
pub struct OneSignalClient {
    client: reqwest::Client,
    app_id: String,
    rest_api_key: String,
    api_url: String,
}

impl OneSignalClient {
    pub fn new(config: &OneSignalConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| AppError::InvalidConfiguration(format!("failed to build HTTP client: {}", e)))?;

        Ok(Self::with_client(client, config))
    }

    pub fn with_client(client: reqwest::Client, config: &OneSignalConfig) -> Self {
        Self {
            client,
            app_id: config.app_id.clone(),
            rest_api_key: config.rest_api_key.clone(),
            api_url: config.api_url.clone(),
        }
    }
}

#[async_trait]
impl PushProvider for OneSignalClient {
    fn app_id(&self) -> &str {
        &self.app_id
    }

    async fn send(&self, payload: &NotificationPayload) -> Result<ProviderResponse> {
        let response = self
            .client
            .post(&self.api_url)
            .header(AUTHORIZATION, format!("Basic {}", self.rest_api_key))
            .header(CONTENT_TYPE, "application/json; charset=utf-8")
            .json(payload)
            .send()
            .await?;

        let status = response.status();
        let text = response.text().await?;

        let body: Value = match serde_json::from_str(&text) {
            Ok(body) => body,
            Err(_) if status.is_success() => {
                tracing::warn!("OneSignal returned a non-JSON body with status {}", status);
                Value::Null
            }
            Err(_) => {
                return Err(AppError::Unexpected(format!(
                    "OneSignal responded with status {}: {}",
                    status, text
                )));
            }
        };

        let provider_response = ProviderResponse::from_value(body);

        if let Some(errors) = provider_response.reported_errors() {
            tracing::warn!("OneSignal reported errors (status {}): {}", status, errors);
            return Err(AppError::ProviderRejected(errors.clone()));
        }

        if !status.is_success() {
            return Err(AppError::Unexpected(format!(
                "OneSignal responded with status {}: {}",
                status, provider_response.raw
            )));
        }

        tracing::info!(
            "OneSignal accepted notification {} for {} recipients",
            provider_response.id.as_deref().unwrap_or("-"),
            provider_response
                .recipients
                .map(|r| r.to_string())
                .unwrap_or_else(|| "unknown".to_string())
        );

        Ok(provider_response)
    }
}
