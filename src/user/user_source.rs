use async_trait::async_trait;

use crate::error::Result;
use super::user_models::UserRecord;

/// Read-only access to the collection of user records.
///
/// Implementations return every record that may carry a device id. A failed
/// read is reported as `AppError::UserSourceUnavailable`.
#[async_trait]
pub trait UserSource: Send + Sync {
    async fn fetch_all(&self) -> Result<Vec<UserRecord>>;
}
