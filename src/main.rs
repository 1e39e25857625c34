use std::sync::Arc;
use std::time::Duration;

use fifa_wct_api::api::{self, AppState};
use fifa_wct_api::application::DefaultTeamService;
use fifa_wct_api::config::{Config, StorageBackend};
use fifa_wct_api::domain::repositories::TeamRepository;
use fifa_wct_api::infrastructure::logging::init_logging;
use fifa_wct_api::infrastructure::repositories::{
    postgres_team_repository, InMemoryTeamRepository, PostgresTeamRepository,
};
use tokio::net::TcpListener;
use tokio::signal;
use tokio::sync::oneshot;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenv::dotenv().ok();

    let config = Config::from_env()?;
    init_logging(&config.logging);

    tracing::info!(version = env!("CARGO_PKG_VERSION"), "fifa-wct-api starting");

    // Repositories
    let team_repository: Arc<dyn TeamRepository> = match config.database.backend {
        StorageBackend::Postgres => {
            tracing::info!("Connecting to database...");
            let pool = postgres_team_repository::connect(&config.database).await?;
            let repository = PostgresTeamRepository::new(pool, &config.database.name);
            repository.ensure_collection().await?;
            tracing::info!("Database connected successfully");
            Arc::new(repository)
        }
        StorageBackend::Memory => {
            tracing::warn!("using in-memory team storage; data is lost on exit");
            Arc::new(InMemoryTeamRepository::new())
        }
    };

    // Application services
    let team_service = Arc::new(DefaultTeamService::new(team_repository));

    // Server HTTP
    let app = api::router(AppState::new(team_service), config.server.request_timeout);

    let address = config.server.address();
    let listener = TcpListener::bind(&address).await?;
    tracing::info!("HTTP server running on {}", address);

    let (stop_tx, stop_rx) = oneshot::channel::<()>();
    let server = tokio::spawn(async move {
        axum::serve(listener, app)
            .with_graceful_shutdown(async {
                stop_rx.await.ok();
            })
            .await
    });

    shutdown_signal().await;
    tracing::info!("shutting down HTTP server running on {}", address);
    stop_tx.send(()).ok();

    drain(server, config.server.shutdown_timeout).await
}

/// Waits for in-flight requests, giving up after `timeout`
async fn drain(
    server: tokio::task::JoinHandle<std::io::Result<()>>,
    timeout: Duration,
) -> anyhow::Result<()> {
    match tokio::time::timeout(timeout, server).await {
        Ok(joined) => {
            joined??;
            tracing::info!("HTTP server stopped");
        }
        Err(_) => {
            tracing::warn!(?timeout, "graceful shutdown timed out; dropping open connections");
        }
    }

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!(error = %e, "failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => tracing::info!("received Ctrl+C, initiating graceful shutdown"),
        _ = terminate => tracing::info!("received SIGTERM, initiating graceful shutdown"),
    }
}
