//! API route modules
//!
//! # Structure
//!
//! - [`health`] - liveness check
//! - [`menu`] - menu item catalog (public read, admin write)
//! - [`orders`] - order placement and lifecycle
//! - [`tables`] - dining tables and their ordering links
//! - [`customers`] - customer registration and login
//! - [`admin`] - admin accounts and sessions

pub mod admin;
pub mod customers;
pub mod health;
pub mod menu;
pub mod orders;
pub mod tables;

use std::time::Duration;

use axum::{
    Json, Router,
    error_handling::HandleErrorLayer,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tower::{BoxError, ServiceBuilder, timeout::TimeoutLayer};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::core::ServerState;
use crate::utils::AppError;

// Re-export common types for handlers
pub use crate::utils::{AppResponse, AppResult};

/// Assemble all resource routers.
///
/// Routers guarding admin-only routes receive the state up front so the
/// auth middleware can resolve the token against the database.
pub fn build_router(state: ServerState) -> Router<ServerState> {
    Router::new()
        .merge(health::router())
        .merge(menu::router(state.clone()))
        .merge(orders::router())
        .merge(tables::router(state.clone()))
        .merge(customers::router())
        .merge(admin::router(state))
}

/// Full application: routes plus the timeout, CORS and tracing layers.
pub fn build_app(state: ServerState) -> Router {
    let timeout = Duration::from_millis(state.config.request_timeout_ms);

    build_router(state.clone())
        .layer(
            ServiceBuilder::new()
                .layer(HandleErrorLayer::new(handle_middleware_error))
                .layer(TimeoutLayer::new(timeout)),
        )
        .layer(CorsLayer::very_permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Map middleware failures back into the JSON envelope.
async fn handle_middleware_error(err: BoxError) -> Response {
    if err.is::<tower::timeout::error::Elapsed>() {
        let body = Json(AppResponse::<()> {
            success: false,
            message: Some("Request timed out".to_string()),
            data: None,
            error: None,
        });
        (StatusCode::REQUEST_TIMEOUT, body).into_response()
    } else {
        AppError::internal(err.to_string()).into_response()
    }
}
