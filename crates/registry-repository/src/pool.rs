//! Database connection pool management.

use async_trait::async_trait;
use registry_config::DatabaseConfig;
use registry_core::{Interface, RegistryError, RegistryResult};
use shaku::Component;
use sqlx::postgres::{PgPool, PgPoolOptions};
use tracing::{info, warn};

/// Interface for database pool operations.
///
/// This trait abstracts database pool functionality for dependency injection.
#[async_trait]
pub trait DatabasePoolInterface: Interface + Send + Sync {
    /// Returns a reference to the underlying Postgres pool.
    fn inner(&self) -> &PgPool;

    /// Runs the embedded migrations.
    async fn run_migrations(&self) -> RegistryResult<()>;

    /// Closes the database pool.
    async fn close(&self);
}

/// Database pool wrapper.
#[derive(Component)]
#[shaku(interface = DatabasePoolInterface)]
pub struct DatabasePool {
    pool: PgPool,
}

impl DatabasePool {
    /// Connects to Postgres using the pool settings from configuration.
    pub async fn connect(config: &DatabaseConfig) -> RegistryResult<Self> {
        info!("Connecting to Postgres at {}...", config.redacted_url());

        let pool = PgPoolOptions::new()
            .min_connections(config.min_connections)
            .max_connections(config.max_connections)
            .acquire_timeout(config.connect_timeout())
            .idle_timeout(Some(config.idle_timeout()))
            .connect(&config.url)
            .await
            .map_err(|e| {
                warn!("Failed to connect to database: {}", e);
                RegistryError::Database(format!("Failed to connect: {}", e))
            })?;

        info!("Postgres connection pool established");
        Ok(Self { pool })
    }

    /// Wraps a pre-existing pool.
    #[must_use]
    pub fn with_pool(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Hands the pool out as the component parameter shaku expects.
    #[must_use]
    pub fn into_parameters(self) -> DatabasePoolParameters {
        DatabasePoolParameters { pool: self.pool }
    }
}

#[async_trait]
impl DatabasePoolInterface for DatabasePool {
    fn inner(&self) -> &PgPool {
        &self.pool
    }

    async fn run_migrations(&self) -> RegistryResult<()> {
        info!("Running database migrations...");
        sqlx::migrate!("../../migrations")
            .run(&self.pool)
            .await
            .map_err(|e| RegistryError::Database(format!("Migration failed: {}", e)))?;
        info!("Database migrations completed");
        Ok(())
    }

    async fn close(&self) {
        info!("Closing database connection pool...");
        self.pool.close().await;
        info!("Database connection pool closed");
    }
}

impl std::fmt::Debug for DatabasePool {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DatabasePool")
            .field("size", &self.pool.size())
            .field("num_idle", &self.pool.num_idle())
            .finish()
    }
}
