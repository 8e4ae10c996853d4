//! Dining Table API Handlers

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};

use crate::core::ServerState;
use crate::db::models::{Table, TableCreate};
use crate::db::repository::TableRepository;
use crate::utils::{AppError, AppResponse, AppResult, ok, ok_with_message};

/// POST /api/tables - create a table with its ordering link (admin)
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<TableCreate>,
) -> AppResult<(StatusCode, Json<AppResponse<Table>>)> {
    let table_number = payload
        .table_number
        .as_deref()
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .ok_or_else(|| AppError::validation("Table number is required"))?;

    let order_url = format!(
        "{}/order?table={}",
        state.config.frontend_url.trim_end_matches('/'),
        table_number
    );

    let repo = TableRepository::new(state.get_db());
    let table = repo.create(table_number.to_string(), order_url).await?;

    tracing::info!(table_number = %table.table_number, "table created");
    Ok((StatusCode::CREATED, ok(table)))
}

/// GET /api/tables - all tables
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<AppResponse<Vec<Table>>>> {
    let repo = TableRepository::new(state.get_db());
    let tables = repo.find_all().await?;
    Ok(ok(tables))
}

/// GET /api/tables/{number} - look up a table by its number
///
/// Used by the frontend to resolve a scanned QR link.
pub async fn get_by_number(
    State(state): State<ServerState>,
    Path(number): Path<String>,
) -> AppResult<Json<AppResponse<Table>>> {
    let repo = TableRepository::new(state.get_db());
    let table = repo
        .find_by_number(&number)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Table {} not found", number)))?;
    Ok(ok(table))
}

/// DELETE /api/tables/{id} - remove a table (admin)
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<AppResponse<Table>>> {
    let repo = TableRepository::new(state.get_db());
    let table = repo
        .delete(&id)
        .await?
        .ok_or_else(|| AppError::not_found("Table not found"))?;
    Ok(ok_with_message(table, "Table deleted successfully"))
}
