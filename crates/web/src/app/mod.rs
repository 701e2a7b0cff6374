//! HTTP application wiring (Axum router + service wiring).
//!
//! - `services.rs`: shared, immutable per-process dependencies
//! - `routes/`: HTTP routes + handlers

use std::sync::Arc;

use axum::{routing::get, Extension, Router};
use tower::ServiceBuilder;

use crate::middleware;

pub mod routes;
pub mod services;

pub use services::{build_services, AppServices};

/// Build the full HTTP router (public entrypoint used by `main.rs`).
pub fn build_app(services: AppServices) -> Router {
    Router::new()
        .route("/", get(routes::home::index))
        .route("/health", get(routes::system::health))
        .layer(
            ServiceBuilder::new()
                .layer(axum::middleware::from_fn(middleware::log_request))
                .layer(Extension(Arc::new(services))),
        )
}
