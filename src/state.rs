use std::sync::Arc;
use std::time::Duration;

use crate::{
    error::{AppError, Result},
    notification::notification_service::NotificationService,
};

pub const DEFAULT_ONESIGNAL_API_URL: &str = "https://onesignal.com/api/v1/notifications";

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub notification_service: NotificationService,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub database_url: String,
    pub database_max_connections: u32,
    pub run_migrations: bool,
    /// Secret callers must present in `X-API-Key`.
    pub api_key: Option<String>,
    pub onesignal: Option<OneSignalConfig>,
}

#[derive(Debug, Clone)]
pub struct OneSignalConfig {
    pub app_id: String,
    pub rest_api_key: String,
    pub api_url: String,
    pub timeout: Duration,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from an arbitrary key lookup. Blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |keys: &[&str]| {
            keys.iter()
                .filter_map(|key| lookup(key))
                .map(|value| value.trim().to_string())
                .find(|value| !value.is_empty())
        };

        let port = match get(&["PORT"]) {
            Some(raw) => raw
                .parse()
                .map_err(|_| AppError::InvalidConfiguration(format!("PORT must be a number, got {:?}", raw)))?,
            None => 3000,
        };

        let database_max_connections = match get(&["DATABASE_MAX_CONNECTIONS"]) {
            Some(raw) => raw.parse().map_err(|_| {
                AppError::InvalidConfiguration(format!(
                    "DATABASE_MAX_CONNECTIONS must be a number, got {:?}",
                    raw
                ))
            })?,
            None => 5,
        };

        let timeout_secs = match get(&["ONESIGNAL_TIMEOUT_SECS"]) {
            Some(raw) => raw.parse().map_err(|_| {
                AppError::InvalidConfiguration(format!("ONESIGNAL_TIMEOUT_SECS must be a number, got {:?}", raw))
            })?,
            None => 10,
        };

        let database_url = get(&["DATABASE_URL"])
            .ok_or_else(|| AppError::ConfigurationMissing("DATABASE_URL must be set".to_string()))?;

        let onesignal = match (
            get(&["ONESIGNAL_APP_ID"]),
            get(&["ONESIGNAL_REST_API_KEY", "ONESIGNAL_API_KEY"]),
        ) {
            (Some(app_id), Some(rest_api_key)) => Some(OneSignalConfig {
                app_id,
                rest_api_key,
                api_url: get(&["ONESIGNAL_API_URL"])
                    .unwrap_or_else(|| DEFAULT_ONESIGNAL_API_URL.to_string()),
                timeout: Duration::from_secs(timeout_secs),
            }),
            _ => None,
        };

        Ok(Self {
            host: get(&["HOST"]).unwrap_or_else(|| "127.0.0.1".to_string()),
            port,
            database_url,
            database_max_connections,
            run_migrations: get(&["DATABASE_RUN_MIGRATIONS"])
                .map(|v| matches!(v.to_ascii_lowercase().as_str(), "1" | "true" | "yes"))
                .unwrap_or(false),
            api_key: get(&["NOTIFY_API_KEY", "API_KEY"]),
            onesignal,
        })
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_apply_when_only_database_is_set() {
        let config = Config::from_lookup(lookup(&[("DATABASE_URL", "postgres://localhost/app")]))
            .unwrap();

        assert_eq!(config.bind_address(), "127.0.0.1:3000");
        assert_eq!(config.database_max_connections, 5);
        assert!(!config.run_migrations);
        assert!(config.api_key.is_none());
        assert!(config.onesignal.is_none());
    }

    #[test]
    fn missing_database_url_is_rejected() {
        let err = Config::from_lookup(lookup(&[])).unwrap_err();
        assert!(matches!(err, AppError::ConfigurationMissing(_)));
    }

    #[test]
    fn invalid_port_is_rejected() {
        let err = Config::from_lookup(lookup(&[
            ("DATABASE_URL", "postgres://localhost/app"),
            ("PORT", "eighty"),
        ]))
        .unwrap_err();
        assert!(matches!(err, AppError::InvalidConfiguration(_)));
    }

    #[test]
    fn onesignal_accepts_either_key_name() {
        let config = Config::from_lookup(lookup(&[
            ("DATABASE_URL", "postgres://localhost/app"),
            ("ONESIGNAL_APP_ID", "app-123"),
            ("ONESIGNAL_API_KEY", "rest-key"),
            ("NOTIFY_API_KEY", "secret"),
        ]))
        .unwrap();

        let onesignal = config.onesignal.unwrap();
        assert_eq!(onesignal.app_id, "app-123");
        assert_eq!(onesignal.rest_api_key, "rest-key");
        assert_eq!(onesignal.api_url, DEFAULT_ONESIGNAL_API_URL);
        assert_eq!(onesignal.timeout, Duration::from_secs(10));
        assert_eq!(config.api_key.as_deref(), Some("secret"));
    }

    #[test]
    fn partial_onesignal_credentials_count_as_unconfigured() {
        let config = Config::from_lookup(lookup(&[
            ("DATABASE_URL", "postgres://localhost/app"),
            ("ONESIGNAL_APP_ID", "app-123"),
            ("ONESIGNAL_REST_API_KEY", "   "),
        ]))
        .unwrap();

        assert!(config.onesignal.is_none());
    }
}
