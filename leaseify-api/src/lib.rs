//! Leaseify API - REST API Layer
//!
//! This crate provides the HTTP surface of the Leaseify platform: Axum
//! route handlers per resource type, uniform JSON error normalization,
//! and an in-memory store standing in for the external database.

pub mod config;
pub mod error;
#[cfg(feature = "openapi")]
pub mod openapi;
pub mod routes;
pub mod state;
pub mod store;
pub mod types;
pub mod validation;

// Re-export commonly used types
pub use config::{runtime_mode, ApiConfig, RuntimeMode};
pub use error::{ApiError, ApiResult, ErrorCode, FieldError, STACK_PLACEHOLDER};
#[cfg(feature = "openapi")]
pub use openapi::ApiDoc;
pub use routes::create_app;
pub use state::AppState;
pub use store::{Collection, MemStore};
pub use types::*;
