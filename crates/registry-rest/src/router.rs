//! Main application router.

use crate::{
    controllers::{health_controller, user_controller},
    middleware::{logging_middleware, RequestLogState},
    openapi::ApiDoc,
    state::AppState,
};
use axum::{extract::DefaultBodyLimit, http::HeaderValue, middleware, routing::get, Json, Router};
use registry_config::ServerConfig;
use registry_service::UserService;
use shaku::{HasComponent, Module};
use tower_http::{
    compression::CompressionLayer,
    cors::{AllowOrigin, Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};
use tracing::{info, warn};
use utoipa::OpenApi;

/// Path the OpenAPI document is served at.
pub const OPENAPI_PATH: &str = "/api-docs/openapi.json";

/// Creates the main application router from a Shaku module.
pub fn create_router<M>(module: &M, server_config: &ServerConfig) -> Router
where
    M: Module + HasComponent<dyn UserService>,
{
    build_router(AppState::from_module(module), server_config)
}

/// Creates the router around an already-assembled state.
pub fn build_router(state: AppState, server_config: &ServerConfig) -> Router {
    let cors = create_cors_layer(server_config);
    let log_state = RequestLogState::new(server_config.max_body_size);

    let router = Router::new()
        .merge(health_controller::router())
        .nest("/users", user_controller::router())
        .route(OPENAPI_PATH, get(openapi_json))
        .with_state(state)
        .layer(DefaultBodyLimit::max(server_config.max_body_size))
        .layer(TimeoutLayer::new(server_config.request_timeout()))
        .layer(CompressionLayer::new())
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .layer(middleware::from_fn_with_state(log_state, logging_middleware));

    info!("Router created with /users endpoints and OpenAPI document at {}", OPENAPI_PATH);
    router
}

/// Creates a CORS layer based on server configuration.
fn create_cors_layer(server_config: &ServerConfig) -> CorsLayer {
    if !server_config.cors_enabled {
        return CorsLayer::new();
    }

    if server_config.cors_origins.iter().any(|o| o == "*") {
        return CorsLayer::permissive();
    }

    let origins: Vec<HeaderValue> = server_config
        .cors_origins
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(e) => {
                warn!("Ignoring invalid CORS origin {:?}: {}", origin, e);
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods(Any)
        .allow_headers(Any)
}

/// Serves the OpenAPI document.
async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
