pub mod notification_builder;
pub mod notification_dto;
pub mod notification_handlers;
pub mod notification_models;
pub mod notification_service;

pub use notification_builder::build_payload;
pub use notification_dto::{Broadcast, BroadcastRequest, DispatchResponse};
pub use notification_handlers::{method_not_allowed, send_notification};
pub use notification_models::{NotificationPayload, PayloadAudience};
pub use notification_service::{DispatchOutcome, NotificationService};
