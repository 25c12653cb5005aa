//! Server startup utilities.

use registry_config::AppConfig;
use registry_rest::OPENAPI_PATH;
use tracing::info;

/// Prints the startup banner.
pub fn print_banner() {
    info!(r#"
  __  __                   ____             _      __
 / / / /_______  _____    / __ \___  ____ _(_)____/ /________  __
/ / / / ___/ _ \/ ___/   / /_/ / _ \/ __ `/ / ___/ __/ ___/ / / /
/ /_/ (__  )  __/ /     / _, _/  __/ /_/ / (__  ) /_/ /  / /_/ /
\____/____/\___/_/     /_/ |_|\___/\__, /_/____/\__/_/   \__, /
                                  /____/                /____/
    "#);
}

/// Prints server startup information.
pub fn print_startup_info(config: &AppConfig) {
    let separator = "=".repeat(60);
    let base = format!("http://{}", config.server.addr());
    info!("{}", separator);
    info!("Environment: {}", config.app.environment);
    info!("Age policy:  {}", config.users.age_policy);
    info!("Users API:   {}/users", base);
    info!("Health:      {}/health", base);
    info!("API Docs:    {}{}", base, OPENAPI_PATH);
    info!("{}", separator);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_print_banner_does_not_panic() {
        let _ = tracing_subscriber::fmt::try_init();
        print_banner();
    }

    #[test]
    fn test_print_startup_info_does_not_panic() {
        let _ = tracing_subscriber::fmt::try_init();
        print_startup_info(&AppConfig::default());
    }

    #[test]
    fn test_print_startup_info_custom_port() {
        let _ = tracing_subscriber::fmt::try_init();
        let mut config = AppConfig::default();
        config.server.port = 3000;
        print_startup_info(&config);
    }
}
