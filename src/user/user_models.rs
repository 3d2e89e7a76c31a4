use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A registered user as seen by the dispatcher. Only the device id matters here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct UserRecord {
    pub id: Uuid,
    pub device_id: Option<String>,
}

impl UserRecord {
    pub fn new(device_id: Option<&str>) -> Self {
        Self {
            id: Uuid::new_v4(),
            device_id: device_id.map(str::to_string),
        }
    }

    /// The device id as stored, if present and not blank.
    pub fn usable_device_id(&self) -> Option<&str> {
        self.device_id
            .as_deref()
            .filter(|id| !id.trim().is_empty())
    }
}
