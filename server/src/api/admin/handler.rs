//! Admin API Handlers
//!
//! Sessions are carried in an httpOnly cookie so the browser frontend
//! never touches the raw token. The same token also validates via
//! `Authorization: Bearer` for CLI clients.

use axum::{
    Extension, Json,
    extract::State,
    http::{HeaderName, StatusCode, header},
};

use crate::auth::{ADMIN_TOKEN_COOKIE, CurrentAdmin};
use crate::core::ServerState;
use crate::db::models::{Admin, AdminInfo, AdminLogin, AdminRegister};
use crate::db::repository::AdminRepository;
use crate::utils::{AppError, AppResponse, AppResult, ok, ok_with_message};

const MIN_PASSWORD_LEN: usize = 6;

type CookieReply<T> = (StatusCode, [(HeaderName, String); 1], Json<AppResponse<T>>);

fn session_cookie(state: &ServerState, token: &str) -> (HeaderName, String) {
    let max_age = state.config.jwt.expiration_minutes * 60;
    let mut cookie = format!(
        "{ADMIN_TOKEN_COOKIE}={token}; HttpOnly; Path=/; Max-Age={max_age}; SameSite=Strict"
    );
    if state.config.is_production() {
        cookie.push_str("; Secure");
    }
    (header::SET_COOKIE, cookie)
}

fn clear_cookie() -> (HeaderName, String) {
    (
        header::SET_COOKIE,
        format!("{ADMIN_TOKEN_COOKIE}=; HttpOnly; Path=/; Max-Age=0; SameSite=Strict"),
    )
}

fn admin_info(admin: &Admin) -> AdminInfo {
    AdminInfo {
        id: admin
            .id
            .as_ref()
            .map(|id| id.to_string())
            .unwrap_or_default(),
        name: admin.name.clone(),
        email: admin.email.clone(),
    }
}

/// POST /api/admin/register - create an admin account and open a session
pub async fn register(
    State(state): State<ServerState>,
    Json(payload): Json<AdminRegister>,
) -> AppResult<CookieReply<AdminInfo>> {
    let (name, email, password) = match (payload.name, payload.email, payload.password) {
        (Some(n), Some(e), Some(p)) => (n, e, p),
        _ => return Err(AppError::validation("Name, email and password are required")),
    };
    if !email.contains('@') {
        return Err(AppError::validation("Please provide a valid email"));
    }
    if password.len() < MIN_PASSWORD_LEN {
        return Err(AppError::validation(format!(
            "Password must be at least {MIN_PASSWORD_LEN} characters"
        )));
    }

    let hash = Admin::hash_password(&password)
        .map_err(|e| AppError::internal(format!("Password hashing failed: {e}")))?;

    let repo = AdminRepository::new(state.get_db());
    let admin = repo.create(name, email.to_lowercase(), hash).await?;

    let info = admin_info(&admin);
    let token = state
        .get_jwt_service()
        .generate_token(&info.id, &info.email)
        .map_err(|e| AppError::internal(format!("Token generation failed: {e}")))?;

    tracing::info!(email = %info.email, "admin registered");
    Ok((
        StatusCode::CREATED,
        [session_cookie(&state, &token)],
        ok_with_message(info, "Admin registered successfully"),
    ))
}

/// POST /api/admin/login - open a session
pub async fn login(
    State(state): State<ServerState>,
    Json(payload): Json<AdminLogin>,
) -> AppResult<CookieReply<AdminInfo>> {
    let (email, password) = match (payload.email, payload.password) {
        (Some(e), Some(p)) => (e, p),
        _ => return Err(AppError::validation("Email and password are required")),
    };

    let repo = AdminRepository::new(state.get_db());
    let admin = repo
        .find_by_email(&email.to_lowercase())
        .await?
        .ok_or_else(|| AppError::unauthorized("Invalid credentials"))?;

    let valid = admin
        .verify_password(&password)
        .map_err(|e| AppError::internal(format!("Password verification failed: {e}")))?;
    if !valid {
        tracing::warn!(email = %admin.email, "failed admin login attempt");
        return Err(AppError::unauthorized("Invalid credentials"));
    }

    let info = admin_info(&admin);
    let token = state
        .get_jwt_service()
        .generate_token(&info.id, &info.email)
        .map_err(|e| AppError::internal(format!("Token generation failed: {e}")))?;

    Ok((
        StatusCode::OK,
        [session_cookie(&state, &token)],
        ok_with_message(info, "Login successful"),
    ))
}

/// POST /api/admin/logout - drop the session cookie
pub async fn logout() -> CookieReply<serde_json::Value> {
    (
        StatusCode::OK,
        [clear_cookie()],
        ok_with_message(serde_json::json!({}), "Logged out successfully"),
    )
}

/// GET /api/admin/me - current admin profile
pub async fn me(Extension(admin): Extension<CurrentAdmin>) -> Json<AppResponse<AdminInfo>> {
    ok(AdminInfo {
        id: admin.id,
        name: admin.name,
        email: admin.email,
    })
}
