//! Menu API module
//!
//! Reads are public (customers browse the menu from the QR link);
//! writes require an admin session.

mod handler;

use axum::{Router, middleware, routing::get, routing::patch, routing::post};

use crate::auth::require_admin;
use crate::core::ServerState;

pub fn router(state: ServerState) -> Router<ServerState> {
    Router::new().nest("/api/menu", routes(state))
}

fn routes(state: ServerState) -> Router<ServerState> {
    let public = Router::new().route("/", get(handler::list));

    let admin = Router::new()
        .route("/", post(handler::create))
        .route("/{id}", patch(handler::update).delete(handler::delete))
        .layer(middleware::from_fn_with_state(state, require_admin));

    public.merge(admin)
}
