//! Order API Handlers
//!
//! Thin layer over [`crate::orders::OrderService`]; all validation and
//! pricing lives in the service.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};

use crate::core::ServerState;
use crate::db::models::{Order, PlaceOrderRequest, UpdateStatusRequest};
use crate::orders::OrderView;
use crate::utils::{AppResponse, AppResult, ok, ok_with_message};

/// POST /api/orders - place an order
pub async fn place(
    State(state): State<ServerState>,
    Json(payload): Json<PlaceOrderRequest>,
) -> AppResult<(StatusCode, Json<AppResponse<OrderView>>)> {
    let view = state.order_service().place_order(payload).await?;
    Ok((StatusCode::CREATED, ok(view)))
}

/// GET /api/orders - all orders, newest first
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<AppResponse<Vec<OrderView>>>> {
    let views = state.order_service().list_orders().await?;
    Ok(ok(views))
}

/// GET /api/orders/{id} - one order
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<AppResponse<OrderView>>> {
    let view = state.order_service().get_order(&id).await?;
    Ok(ok(view))
}

/// PUT /api/orders/{id}/status - move the order to a new status
pub async fn update_status(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(payload): Json<UpdateStatusRequest>,
) -> AppResult<Json<AppResponse<OrderView>>> {
    let view = state.order_service().transition_status(&id, &payload).await?;
    Ok(ok(view))
}

/// DELETE /api/orders/{id} - remove an order
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<AppResponse<Order>>> {
    let order = state.order_service().delete_order(&id).await?;
    Ok(ok_with_message(order, "Order deleted successfully"))
}
