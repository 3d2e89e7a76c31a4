use std::sync::Arc;

use anyhow::Context;
use push_broadcast::{
    db::{create_pool, run_migrations},
    notification::NotificationService,
    push::{OneSignalClient, PushProvider},
    routes::create_router,
    state::{AppState, Config},
    user::UserRepository,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenv::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,push_broadcast=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = Arc::new(Config::from_env().context("invalid configuration")?);

    tracing::info!("Connecting to database...");
    let db = create_pool(&config.database_url, config.database_max_connections)
        .await
        .context("failed to connect to database")?;

    if config.run_migrations {
        tracing::info!("Running migrations...");
        run_migrations(&db).await.context("failed to run migrations")?;
    }

    // Build the provider client once; requests fail with 500 when it is absent
    let push_provider: Option<Arc<dyn PushProvider>> = match &config.onesignal {
        Some(onesignal) => Some(Arc::new(
            OneSignalClient::new(onesignal).context("failed to build OneSignal client")?,
        )),
        None => {
            tracing::warn!("OneSignal credentials not set, notifications will be refused");
            None
        }
    };

    if config.api_key.is_none() {
        tracing::warn!("NOTIFY_API_KEY not set, all requests will be refused");
    }

    let user_repository = UserRepository::new(db.clone());
    let notification_service =
        NotificationService::new(Arc::new(user_repository), push_provider);

    let state = AppState {
        config: config.clone(),
        notification_service,
    };

    let app = create_router(state);

    let addr = config.bind_address();
    tracing::info!("Server starting on http://{}", addr);
    tracing::info!("Swagger UI available at http://{}/swagger-ui", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
