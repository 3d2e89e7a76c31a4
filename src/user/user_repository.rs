use async_trait::async_trait;
use sqlx::PgPool;

use crate::error::Result;
use super::{user_models::UserRecord, user_source::UserSource};

#[derive(Clone)]
pub struct UserRepository {
    pool: PgPool,
}

impl UserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn find_with_device_id(&self) -> Result<Vec<UserRecord>> {
        let users = sqlx::query_as::<_, UserRecord>(
            "SELECT id, device_id FROM users
             WHERE device_id IS NOT NULL
             ORDER BY created_at, id"
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(users)
    }
}

#[async_trait]
impl UserSource for UserRepository {
    async fn fetch_all(&self) -> Result<Vec<UserRecord>> {
        let users = self.find_with_device_id().await?;
        tracing::debug!("Loaded {} user records with a device id", users.len());
        Ok(users)
    }
}
