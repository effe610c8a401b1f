//! HTTP surface of the server
//!
//! [`create_router`] assembles the service routes (`/`, `/health`,
//! `/api-docs.json`, the optional `/_pactSetup` hook), nests the feature
//! routes under `/api` and wraps everything in the middleware stack.

pub mod openapi;
pub mod provider_state;
pub mod response;

use axum::{
    extract::{DefaultBodyLimit, State},
    http::StatusCode,
    response::Response,
    routing::{get, post},
    Json, Router,
};
use chrono::{SecondsFormat, Utc};
use serde::Serialize;
use tower_http::compression::CompressionLayer;

use crate::config::Config;
use crate::db::BreedStore;
use crate::error::ROUTE_NOT_FOUND;
use crate::{features, middleware};
use response::ApiResponse;

/// Largest accepted request body
pub const MAX_BODY_BYTES: usize = 10 * 1024 * 1024;

/// Create the application router with all routes and middleware
pub fn create_router(store: BreedStore, config: &Config) -> Router {
    let mut routes = Router::new()
        .route("/", get(root))
        .route("/health", get(health_check))
        .route("/api-docs.json", get(api_docs));

    if config.server.enable_state_setup {
        tracing::warn!("Provider state setup endpoint enabled at /_pactSetup");
        routes = routes.route("/_pactSetup", post(provider_state::setup_provider_state));
    }

    routes
        .with_state(store.clone())
        .nest("/api", features::router(store))
        .fallback(route_not_found)
        // Apply layers from innermost to outermost
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .layer(middleware::catch_panic_layer())
        .layer(CompressionLayer::new())
        .layer(middleware::tracing_layer())
        .layer(middleware::cors_layer(&config.cors))
}

#[derive(Debug, Serialize)]
struct ApiInfo {
    name: &'static str,
    version: &'static str,
    description: &'static str,
    endpoints: Vec<&'static str>,
}

#[derive(Debug, Serialize)]
struct HealthStatus {
    status: &'static str,
    timestamp: String,
    database: &'static str,
}

/// API information handler
async fn root() -> Response {
    let info = ApiInfo {
        name: openapi::API_TITLE,
        version: openapi::API_VERSION,
        description: openapi::API_DESCRIPTION,
        endpoints: vec![
            "GET /api/breeds - Get all breeds (with pagination)",
            "GET /api/breeds/search?q=query - Search breeds",
            "GET /api/breeds/:id - Get breed by ID",
            "POST /api/breeds - Create new breed",
            "PUT /api/breeds/:id - Update breed",
            "DELETE /api/breeds/:id - Delete breed",
            "GET /health - Health check",
            "GET /api-docs.json - OpenAPI document",
        ],
    };

    ApiResponse::success(info)
        .with_message("Welcome to the Dog Breeds API!")
        .with_status(StatusCode::OK)
}

/// Health check handler
async fn health_check(State(store): State<BreedStore>) -> Response {
    match store.ping().await {
        Ok(()) => ApiResponse::success(HealthStatus {
            status: "OK",
            timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
            database: "connected",
        })
        .with_message("Dog Breeds API is running")
        .with_status(StatusCode::OK),
        Err(e) => {
            tracing::error!(error = %e, "Database health check failed");
            ApiResponse::error("Database unavailable").with_status(StatusCode::SERVICE_UNAVAILABLE)
        },
    }
}

async fn api_docs() -> Json<serde_json::Value> {
    Json(openapi::document())
}

async fn route_not_found() -> Response {
    ApiResponse::error(ROUTE_NOT_FOUND).with_status(StatusCode::NOT_FOUND)
}
