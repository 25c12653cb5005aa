//! # User Registry Server
//!
//! Loads configuration, connects to Postgres, applies migrations and serves
//! the `/users` REST API until Ctrl+C or SIGTERM.

use registry_config::{AppConfig, ConfigLoader, LoggingConfig};
use registry_core::{RegistryError, RegistryResult};
use registry_repository::{DatabasePool, DatabasePoolInterface};
use registry_rest::create_router;
use registry_server::di::{build_module, DatabaseResolver};
use registry_server::logging::init_logging;
use registry_server::startup::{print_banner, print_startup_info};
use tokio::signal;
use tracing::{error, info, warn};

#[tokio::main]
async fn main() {
    let loader = match ConfigLoader::from_default_location() {
        Ok(loader) => loader,
        Err(e) => {
            init_logging(&LoggingConfig::default());
            error!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    init_logging(&loader.get().logging);
    print_banner();

    info!("Starting user registry server...");
    info!("Version: {}", env!("CARGO_PKG_VERSION"));
    info!("Configuration loaded from {}", loader.config_dir().display());

    let config = loader.into_config();

    if let Err(e) = run(config).await {
        error!("Application error: {}", e);
        std::process::exit(1);
    }
}

async fn run(config: AppConfig) -> RegistryResult<()> {
    info!("Connecting to database at {}", config.database.redacted_url());
    let db_pool = DatabasePool::connect(&config.database).await?;

    if config.database.run_migrations {
        db_pool.run_migrations().await?;
    } else {
        info!("Skipping migrations (database.run_migrations = false)");
    }

    let module = build_module(db_pool, &config.users);
    let router = create_router(module.as_ref(), &config.server);

    let addr = config.server.addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| RegistryError::internal(format!("Failed to bind {}: {}", addr, e)))?;

    print_startup_info(&config);
    info!("Listening on http://{}", addr);

    let served = axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| RegistryError::internal(format!("Server error: {}", e)));

    module.database_pool().close().await;
    info!("Server shutdown complete");
    served
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            warn!("Failed to listen for Ctrl+C: {}", e);
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
                warn!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            info!("Received Ctrl+C, initiating graceful shutdown...");
        }
        () = terminate => {
            info!("Received terminate signal, initiating graceful shutdown...");
        }
    }
}
