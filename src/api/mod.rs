//! REST API endpoints.
//!
//! Axum-based HTTP API serving the hero name listing and counter lookups,
//! plus an optional static directory for hero images.

pub mod routes;
pub mod state;

use axum::{
    http::{HeaderValue, Method, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::Serialize;
use thiserror::Error;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::config::{ConfigError, ServerConfig};
use state::AppState;

/// API error types. The display text is exactly what clients receive.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    Internal(String),
}

/// Error response body.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let body = ErrorResponse {
            error: self.to_string(),
        };

        (status, Json(body)).into_response()
    }
}

/// API routes bound to `state`.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/api/heronames", get(routes::heronames::list_hero_names))
        .route("/api/counters", get(routes::counters::get_counters))
        .with_state(state)
}

/// The full application: API routes, CORS, optional access log and images.
pub fn build_app(
    state: AppState,
    server: &ServerConfig,
    access_log: bool,
) -> Result<Router, ConfigError> {
    let mut app = build_router(state).layer(cors_layer(&server.cors_origin)?);

    if let Some(dir) = &server.static_dir {
        tracing::info!("Serving static files from {:?}", dir);
        app = app.fallback_service(ServeDir::new(dir));
    }

    if access_log {
        app = app.layer(TraceLayer::new_for_http());
    }

    Ok(app)
}

fn cors_layer(origin: &str) -> Result<CorsLayer, ConfigError> {
    let layer = CorsLayer::new().allow_methods([Method::GET]);
    if origin == "*" {
        return Ok(layer.allow_origin(Any));
    }
    let origin = HeaderValue::from_str(origin)
        .map_err(|e| ConfigError::ValidationError(format!("Invalid CORS origin: {}", e)))?;
    Ok(layer.allow_origin(origin))
}
