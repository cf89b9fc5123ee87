use anyhow::Context;
use dotenvy::dotenv;
use tokio::net::TcpListener;
use tokio::signal;
use tracing::{error, info};

use na_meste::logging::init_tracing;
use na_meste::router::init_router;
use na_meste::state::AppState;
use na_meste_config::{DatabaseConfig, JwtConfig, ServerConfig};
use na_meste_db::init_db_pool;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    let server_config = ServerConfig::from_env()?;
    init_tracing(server_config.environment);

    let jwt_config = JwtConfig::from_env()?;
    let database_config = DatabaseConfig::from_env()?;

    let pool = init_db_pool(&database_config)
        .await
        .context("Failed to connect to database")?;
    info!(
        max_connections = database_config.max_connections,
        "Connected to database"
    );

    let app = init_router(AppState::postgres(pool.clone(), jwt_config));

    let listener = TcpListener::bind(&server_config.address)
        .await
        .with_context(|| format!("Failed to bind {}", server_config.address))?;
    info!(
        address = %server_config.address,
        environment = %server_config.environment,
        "🚀 Server running, Swagger UI at /swagger-ui"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    pool.close().await;
    info!("Server stopped");

    Ok(())
}

/// Resolves on Ctrl-C or SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!(error = %e, "Failed to listen for Ctrl-C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                error!(error = %e, "Failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received, draining connections");
}
