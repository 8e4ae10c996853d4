//! Menu Item API Handlers

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use rust_decimal::Decimal;

use crate::core::ServerState;
use crate::db::models::{MenuCategory, MenuItem, MenuItemCreate, MenuItemUpdate, MenuItemUpdateRequest};
use crate::db::repository::MenuItemRepository;
use crate::utils::validation::{
    MAX_DESCRIPTION_LEN, validate_image_url, validate_menu_item_name, validate_optional_text,
};
use crate::utils::{AppError, AppResponse, AppResult, ok, ok_with_message};

fn parse_category(raw: &str) -> AppResult<MenuCategory> {
    raw.parse().map_err(|_| {
        let names: Vec<&str> = MenuCategory::ALL.iter().map(|c| c.as_str()).collect();
        AppError::validation(format!("Category must be one of: {}", names.join(", ")))
    })
}

fn validate_price(price: Decimal) -> AppResult<Decimal> {
    if price < Decimal::ZERO {
        return Err(AppError::validation("Price must be a non-negative number"));
    }
    Ok(price)
}

/// GET /api/menu - full menu, available and unavailable items alike
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<AppResponse<Vec<MenuItem>>>> {
    let repo = MenuItemRepository::new(state.get_db());
    let items = repo.find_all().await?;
    Ok(ok(items))
}

/// POST /api/menu - create a menu item (admin)
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<MenuItemCreate>,
) -> AppResult<(StatusCode, Json<AppResponse<MenuItem>>)> {
    let (name, price) = match (payload.name, payload.price) {
        (Some(name), Some(price)) => (name, price),
        _ => return Err(AppError::validation("Name and price are required")),
    };
    let price = validate_price(price)?;
    validate_menu_item_name(&name)?;

    let category = match payload.category.as_deref() {
        Some(raw) => parse_category(raw)?,
        None => return Err(AppError::validation("Category is required")),
    };

    validate_optional_text(&payload.description, "Description", MAX_DESCRIPTION_LEN)?;
    validate_image_url(&payload.image_url)?;

    let repo = MenuItemRepository::new(state.get_db());
    let item = repo
        .create(
            name.trim().to_string(),
            payload.description,
            price,
            category,
            payload.image_url,
            payload.is_available.unwrap_or(true),
        )
        .await?;

    tracing::info!(name = %item.name, "menu item created");
    Ok((StatusCode::CREATED, ok(item)))
}

/// PATCH /api/menu/{id} - partial update (admin)
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(payload): Json<MenuItemUpdateRequest>,
) -> AppResult<Json<AppResponse<MenuItem>>> {
    if let Some(name) = &payload.name {
        validate_menu_item_name(name)?;
    }
    if let Some(price) = payload.price {
        validate_price(price)?;
    }
    let category = match payload.category.as_deref() {
        Some(raw) => Some(parse_category(raw)?),
        None => None,
    };
    validate_optional_text(&payload.description, "Description", MAX_DESCRIPTION_LEN)?;
    validate_image_url(&payload.image_url)?;

    let update = MenuItemUpdate {
        name: payload.name.map(|n| n.trim().to_string()),
        description: payload.description,
        price: payload.price,
        category,
        image_url: payload.image_url,
        is_available: payload.is_available,
    };

    let repo = MenuItemRepository::new(state.get_db());
    let item = repo.update(&id, update).await?;
    Ok(ok(item))
}

/// DELETE /api/menu/{id} - remove a menu item (admin)
///
/// Already-placed orders keep their price snapshots; their views show
/// a null menu item for the deleted reference.
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<AppResponse<MenuItem>>> {
    let repo = MenuItemRepository::new(state.get_db());
    let item = repo
        .delete(&id)
        .await?
        .ok_or_else(|| AppError::not_found("Menu item not found"))?;
    Ok(ok_with_message(item, "Menu item deleted successfully"))
}
