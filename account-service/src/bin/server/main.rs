use std::sync::Arc;

use account_service::config::Config;
use account_service::config::StoreBackend;
use account_service::domain::user::ports::UserServicePort;
use account_service::domain::user::service::UserService;
use account_service::inbound::http::router::create_router;
use account_service::inbound::http::views::Views;
use account_service::outbound::repositories::InMemoryUserRepository;
use account_service::outbound::repositories::SqliteUserRepository;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "account_service=debug,auth=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(
        service = "account-service",
        version = env!("CARGO_PKG_VERSION"),
        "Service starting"
    );

    let config = Config::load()?;

    tracing::info!(
        database_backend = ?config.database.backend,
        database_url = %config.database.url,
        http_port = config.server.http_port,
        session_idle_timeout_seconds = config.session.idle_timeout_seconds,
        "Configuration loaded"
    );

    // The store is owned here and dropped when the server stops
    let user_service: Arc<dyn UserServicePort> = match config.database.backend {
        StoreBackend::Sqlite => {
            let repository = SqliteUserRepository::connect(&config.database.url).await?;
            Arc::new(UserService::new(Arc::new(repository)))
        }
        StoreBackend::Memory => {
            tracing::info!(database = "memory", "Using in-memory user store");
            Arc::new(UserService::new(Arc::new(InMemoryUserRepository::new())))
        }
    };

    let views = Arc::new(Views::new()?);

    let http_address = format!("0.0.0.0:{}", config.server.http_port);
    let http_listener = tokio::net::TcpListener::bind(&http_address).await?;
    tracing::info!(
        address = %http_address,
        port = config.server.http_port,
        protocol = "http",
        "Http server listening"
    );

    let http_application = create_router(user_service, views, &config.session);

    axum::serve(http_listener, http_application)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server exited successfully");

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
