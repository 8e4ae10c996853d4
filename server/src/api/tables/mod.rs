//! Dining Table API module
//!
//! Tables carry the ordering link encoded into their printed QR code.
//! Listing and the by-number lookup are public (the frontend resolves
//! the scanned link); creating and deleting tables is admin-only.

mod handler;

use axum::{Router, middleware, routing::get, routing::post};

use crate::auth::require_admin;
use crate::core::ServerState;

pub fn router(state: ServerState) -> Router<ServerState> {
    Router::new().nest("/api/tables", routes(state))
}

fn routes(state: ServerState) -> Router<ServerState> {
    let public = Router::new()
        .route("/", get(handler::list))
        .route("/{number}", get(handler::get_by_number));

    let admin = Router::new()
        .route("/", post(handler::create))
        .route("/{number}", axum::routing::delete(handler::delete))
        .layer(middleware::from_fn_with_state(state, require_admin));

    public.merge(admin)
}
