//! Request logging middleware.

use crate::extractors::INVALID_REQUEST;
use crate::responses::AppError;
use axum::{
    body::{to_bytes, Body},
    extract::State,
    http::{Method, Request, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
};
use http_body_util::LengthLimitError;
use std::error::Error as _;
use std::time::Instant;
use tracing::{info, warn};

/// State for [`logging_middleware`].
#[derive(Debug, Clone, Copy)]
pub struct RequestLogState {
    /// Largest body buffered for logging; larger bodies are rejected.
    pub max_body_size: usize,
}

impl RequestLogState {
    /// Creates the middleware state.
    #[must_use]
    pub const fn new(max_body_size: usize) -> Self {
        Self { max_body_size }
    }
}

/// Request logging middleware.
///
/// Emits one line per request with method, path, request body (non-GET
/// only), status and latency. The body is buffered and handed on intact.
pub async fn logging_middleware(
    State(config): State<RequestLogState>,
    request: Request<Body>,
    next: Next,
) -> Response {
    let start = Instant::now();
    let method = request.method().clone();
    let path = request.uri().path().to_string();

    let (request, body) = if method == Method::GET {
        (request, String::new())
    } else {
        let (parts, body) = request.into_parts();
        match to_bytes(body, config.max_body_size).await {
            Ok(bytes) => {
                let logged = String::from_utf8_lossy(&bytes).into_owned();
                (Request::from_parts(parts, Body::from(bytes)), logged)
            }
            Err(e) => {
                warn!(target: "http", method = %method, path = %path, "Rejected request body: {}", e);
                let response = body_read_rejection(&e).into_response();
                log_request(&method, &path, "", response.status(), start);
                return response;
            }
        }
    };

    let response = next.run(request).await;
    log_request(&method, &path, &body, response.status(), start);
    response
}

/// 413 when the body exceeded the limit, 400 for any other read failure.
fn body_read_rejection(err: &axum::Error) -> AppError {
    let over_limit = err
        .source()
        .is_some_and(|source| source.is::<LengthLimitError>());

    if over_limit {
        AppError::new(StatusCode::PAYLOAD_TOO_LARGE, "request body too large")
    } else {
        AppError::bad_request(INVALID_REQUEST)
    }
}

fn log_request(method: &Method, path: &str, body: &str, status: StatusCode, start: Instant) {
    info!(
        target: "http",
        method = %method,
        path = %path,
        body = %body,
        status = status.as_u16(),
        latency_ms = %start.elapsed().as_millis(),
        "HTTP request"
    );
}
