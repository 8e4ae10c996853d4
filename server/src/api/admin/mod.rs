//! Admin API module
//!
//! Account registration and cookie-based sessions. `/me` is guarded by
//! the admin middleware; the rest must stay reachable without a token.

mod handler;

use axum::{Router, middleware, routing::get, routing::post};

use crate::auth::require_admin;
use crate::core::ServerState;

pub fn router(state: ServerState) -> Router<ServerState> {
    Router::new().nest("/api/admin", routes(state))
}

fn routes(state: ServerState) -> Router<ServerState> {
    let public = Router::new()
        .route("/register", post(handler::register))
        .route("/login", post(handler::login))
        .route("/logout", post(handler::logout));

    let protected = Router::new()
        .route("/me", get(handler::me))
        .layer(middleware::from_fn_with_state(state, require_admin));

    public.merge(protected)
}
