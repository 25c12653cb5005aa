//! Configuration loader with layered sources.

use crate::AppConfig;
use config::{Config, ConfigError, Environment, File};
use registry_core::RegistryError;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Prefix for environment variable overrides (`REGISTRY__SERVER__PORT`).
pub const ENV_PREFIX: &str = "REGISTRY";

/// Variable selecting the environment-specific config file.
pub const ENVIRONMENT_VAR: &str = "REGISTRY_ENVIRONMENT";

/// Plain variable that always wins for the database URL.
pub const DATABASE_URL_VAR: &str = "DATABASE_URL";

/// Configuration loaded once at startup from a config directory.
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: AppConfig,
    config_dir: PathBuf,
}

impl ConfigLoader {
    /// Creates a new configuration loader.
    ///
    /// Configuration is loaded from multiple sources in order:
    /// 1. `config/default.toml` - Default values
    /// 2. `config/{environment}.toml` - Environment-specific overrides
    /// 3. `config/local.toml` - Local, uncommitted overrides
    /// 4. Environment variables with `REGISTRY__` prefix
    /// 5. `DATABASE_URL`
    pub fn new(config_dir: impl Into<PathBuf>) -> Result<Self, RegistryError> {
        // Load .env file if present
        if let Err(e) = dotenvy::dotenv() {
            debug!("No .env file found or error loading it: {}", e);
        }

        let config_dir = config_dir.into();
        let config = Self::load_config(&config_dir)?;

        Ok(Self { config, config_dir })
    }

    /// Loads configuration from the default location (`./config`).
    pub fn from_default_location() -> Result<Self, RegistryError> {
        Self::new("./config")
    }

    /// Returns the loaded configuration.
    #[must_use]
    pub fn get(&self) -> &AppConfig {
        &self.config
    }

    /// Directory the configuration was read from.
    #[must_use]
    pub fn config_dir(&self) -> &Path {
        &self.config_dir
    }

    /// Consumes the loader, returning the configuration.
    #[must_use]
    pub fn into_config(self) -> AppConfig {
        self.config
    }

    fn load_config(config_dir: &Path) -> Result<AppConfig, RegistryError> {
        let environment =
            std::env::var(ENVIRONMENT_VAR).unwrap_or_else(|_| "development".to_string());
        let database_url = std::env::var(DATABASE_URL_VAR)
            .ok()
            .filter(|url| !url.is_empty());

        load_from(config_dir, &environment, database_url)
    }
}

/// Builds and validates an [`AppConfig`] from `config_dir`.
///
/// `database_url`, when present, overrides every other source for
/// `database.url`.
pub fn load_from(
    config_dir: &Path,
    environment: &str,
    database_url: Option<String>,
) -> Result<AppConfig, RegistryError> {
    info!("Loading configuration for environment: {}", environment);

    let mut builder = Config::builder();

    for name in ["default", environment, "local"] {
        let path = config_dir.join(format!("{name}.toml"));
        if path.exists() {
            debug!("Loading config from: {}", path.display());
            builder = builder.add_source(File::from(path.as_path()).required(false));
        }
    }

    builder = builder.add_source(
        Environment::with_prefix(ENV_PREFIX)
            .separator("__")
            .list_separator(",")
            .with_list_parse_key("server.cors_origins")
            .try_parsing(true),
    );

    builder = builder
        .set_override_option("database.url", database_url)
        .map_err(config_error_to_registry_error)?;

    let mut app_config: AppConfig = builder
        .build()
        .and_then(Config::try_deserialize::<AppConfig>)
        .map_err(config_error_to_registry_error)?;

    if app_config.app.environment != environment {
        debug!(
            "Overriding app.environment '{}' with '{}'",
            app_config.app.environment, environment
        );
        app_config.app.environment = environment.to_string();
    }

    validate_config(&app_config)?;

    Ok(app_config)
}

/// Validates the configuration, failing fast on values the server cannot
/// start with.
pub fn validate_config(config: &AppConfig) -> Result<(), RegistryError> {
    if config.database.url.is_empty() {
        return Err(RegistryError::Configuration(
            "Database URL is required".to_string(),
        ));
    }

    if config.server.port == 0 {
        return Err(RegistryError::Configuration(
            "Invalid server port: 0 (must be 1-65535)".to_string(),
        ));
    }

    if config.database.min_connections > config.database.max_connections {
        return Err(RegistryError::Configuration(format!(
            "Invalid pool size: min ({}) cannot be greater than max ({})",
            config.database.min_connections, config.database.max_connections
        )));
    }

    if config.server.cors_enabled && config.server.cors_origins.is_empty() {
        warn!("CORS is enabled but no origins are configured; all cross-origin requests will be rejected");
    }

    Ok(())
}

fn config_error_to_registry_error(err: ConfigError) -> RegistryError {
    RegistryError::Configuration(err.to_string())
}
