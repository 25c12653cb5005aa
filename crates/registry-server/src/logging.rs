//! Tracing subscriber setup.

use registry_config::{LogFormat, LoggingConfig};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Builds the filter, letting `RUST_LOG` win over the configured directive.
#[must_use]
pub fn build_filter(config: &LoggingConfig) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.filter))
}

/// Installs the global subscriber. Call once, from the binary.
pub fn init_logging(config: &LoggingConfig) {
    let registry = tracing_subscriber::registry().with(build_filter(config));

    match config.format {
        LogFormat::Json => registry
            .with(fmt::layer().json().with_target(true))
            .init(),
        LogFormat::Text => registry.with(fmt::layer().with_target(true)).init(),
    }
}
