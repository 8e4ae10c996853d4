//! Authentication middleware
//!
//! Guards the admin-only routes. The session token is read from the
//! `admin_token` cookie set at login, with `Authorization: Bearer` as a
//! fallback for non-browser clients. On success the resolved
//! [`CurrentAdmin`] is injected into the request extensions.

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};

use crate::core::ServerState;
use crate::db::repository::AdminRepository;
use crate::utils::AppError;

/// Cookie holding the admin session token
pub const ADMIN_TOKEN_COOKIE: &str = "admin_token";

/// Admin resolved from a validated session token
#[derive(Debug, Clone)]
pub struct CurrentAdmin {
    pub id: String,
    pub name: String,
    pub email: String,
}

/// Pull the named cookie's value out of a `Cookie` header
fn cookie_value<'a>(header: &'a str, name: &str) -> Option<&'a str> {
    header.split(';').find_map(|pair| {
        let (key, value) = pair.trim().split_once('=')?;
        (key == name).then_some(value)
    })
}

fn extract_token(req: &Request) -> Option<&str> {
    if let Some(cookies) = req
        .headers()
        .get(http::header::COOKIE)
        .and_then(|h| h.to_str().ok())
        && let Some(token) = cookie_value(cookies, ADMIN_TOKEN_COOKIE)
    {
        return Some(token);
    }

    req.headers()
        .get(http::header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .and_then(super::JwtService::extract_from_header)
}

/// Require a valid admin session.
///
/// The token's subject must still resolve to an admin record; a token
/// for a since-deleted account is rejected.
pub async fn require_admin(
    State(state): State<ServerState>,
    mut req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let token = match extract_token(&req) {
        Some(token) => token.to_string(),
        None => {
            tracing::warn!(uri = %req.uri(), "admin route hit without a token");
            return Err(AppError::unauthorized("Not authorized, no token"));
        }
    };

    let claims = match state.get_jwt_service().validate_token(&token) {
        Ok(claims) => claims,
        Err(e) => {
            tracing::warn!(uri = %req.uri(), error = %e, "admin token rejected");
            return Err(AppError::unauthorized("Not authorized, token failed"));
        }
    };

    let admins = AdminRepository::new(state.get_db());
    let admin = admins
        .find_by_id(&claims.sub)
        .await?
        .ok_or_else(|| AppError::unauthorized("Not authorized, admin not found"))?;

    req.extensions_mut().insert(CurrentAdmin {
        id: admin.id.map(|id| id.to_string()).unwrap_or(claims.sub),
        name: admin.name,
        email: admin.email,
    });

    Ok(next.run(req).await)
}
