pub mod onesignal_client;
pub mod push_models;
pub mod push_provider;

pub use onesignal_client::OneSignalClient;
pub use push_models::ProviderResponse;
pub use push_provider::PushProvider;
