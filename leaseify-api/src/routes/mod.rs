//! REST API Routes Module
//!
//! This module contains all REST API route handlers organized by entity
//! type, plus router assembly: every resource router nests under
//! `/api/v1`, the fallback handler is the not-found stage of error
//! normalization, and CORS/trace layers wrap the whole app.

pub mod application;
pub mod lease;
pub mod payment;
pub mod property;
pub mod task;
pub mod tenant;

use axum::{
    http::{HeaderValue, Uri},
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use tower_http::{
    cors::{AllowOrigin, Any, CorsLayer},
    trace::TraceLayer,
};

use crate::error::ApiError;
use crate::state::AppState;

// Re-export route creation functions for convenience
pub use application::create_router as application_router;
pub use lease::create_router as lease_router;
pub use payment::create_router as payment_router;
pub use property::create_router as property_router;
pub use task::create_router as task_router;
pub use tenant::create_router as tenant_router;

/// GET /health - liveness probe
async fn health() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "ok" }))
}

/// Not-found stage: any request no route matched is normalized into the
/// uniform error body, carrying the requested path.
async fn not_found(uri: Uri) -> ApiError {
    ApiError::route_not_found(uri.path())
}

fn cors_layer(state: &AppState) -> CorsLayer {
    if state.config.cors_origins.is_empty() {
        // Dev mode: allow all origins
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any)
    } else {
        let origins: Vec<HeaderValue> = state
            .config
            .cors_origins
            .iter()
            .filter_map(|o| o.parse().ok())
            .collect();
        CorsLayer::new()
            .allow_origin(AllowOrigin::list(origins))
            .allow_methods(Any)
            .allow_headers(Any)
    }
}

/// Assemble the full application router.
pub fn create_app(state: AppState) -> Router {
    let cors = cors_layer(&state);

    Router::new()
        .route("/health", get(health))
        .nest("/api/v1/properties", property_router())
        .nest("/api/v1/tenants", tenant_router())
        .nest("/api/v1/leases", lease_router())
        .nest("/api/v1/payments", payment_router())
        .nest("/api/v1/tasks", task_router())
        .nest("/api/v1/applications", application_router())
        .fallback(not_found)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
