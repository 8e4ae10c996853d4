//! Customer API Handlers

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};

use crate::core::ServerState;
use crate::db::models::{Customer, CustomerLogin, CustomerRegister};
use crate::db::repository::CustomerRepository;
use crate::utils::validation::{MAX_NAME_LEN, validate_optional_text, validate_phone};
use crate::utils::{AppError, AppResponse, AppResult, ok, ok_with_message};

/// POST /api/customers/register - register (or re-register) by phone number
///
/// Idempotent: an already-known phone returns the existing customer with
/// 200 instead of creating a duplicate.
pub async fn register(
    State(state): State<ServerState>,
    Json(payload): Json<CustomerRegister>,
) -> AppResult<(StatusCode, Json<AppResponse<Customer>>)> {
    let phone = payload
        .phone
        .as_deref()
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .ok_or_else(|| AppError::validation("Phone number is required"))?;
    validate_phone(phone)?;
    validate_optional_text(&payload.name, "Name", MAX_NAME_LEN)?;

    let repo = CustomerRepository::new(state.get_db());
    let (customer, created) = repo
        .find_or_create(payload.name, phone.to_string())
        .await?;

    if created {
        tracing::info!(phone = %customer.phone, "customer registered");
        Ok((
            StatusCode::CREATED,
            ok_with_message(customer, "User registered successfully"),
        ))
    } else {
        Ok((StatusCode::OK, ok_with_message(customer, "User already exists")))
    }
}

/// POST /api/customers/login - identify by phone number
pub async fn login(
    State(state): State<ServerState>,
    Json(payload): Json<CustomerLogin>,
) -> AppResult<Json<AppResponse<Customer>>> {
    let phone = payload
        .phone
        .as_deref()
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .ok_or_else(|| AppError::validation("Phone number is required"))?;
    validate_phone(phone)?;

    let repo = CustomerRepository::new(state.get_db());
    let customer = repo
        .find_by_phone(phone)
        .await?
        .ok_or_else(|| AppError::not_found("User not found. Please register first."))?;

    Ok(ok_with_message(customer, "Login successful"))
}

/// GET /api/customers/{id} - one customer
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<AppResponse<Customer>>> {
    let repo = CustomerRepository::new(state.get_db());
    let customer = repo
        .find_by_id(&id)
        .await?
        .ok_or_else(|| AppError::not_found("User not found"))?;
    Ok(ok(customer))
}
