//! Customer API module
//!
//! Customers are keyed by phone number; there are no passwords. The
//! routes stay public so a customer can identify themselves straight
//! from the ordering page.

mod handler;

use axum::{Router, routing::get, routing::post};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/customers", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/register", post(handler::register))
        .route("/login", post(handler::login))
        .route("/{id}", get(handler::get_by_id))
}
