//! Order Service
//!
//! Orchestrates order placement and lifecycle over the repositories.
//! Validation runs fully before the single write, so a rejected request
//! persists nothing.

use chrono::Utc;
use rust_decimal::Decimal;
use surrealdb::Surreal;
use surrealdb::engine::local::Db;

use super::placement;
use super::view::{self, OrderView};
use crate::db::models::{
    Order, OrderStatus, OrderType, PlaceOrderRequest, UpdateStatusRequest,
};
use crate::db::repository::{
    CustomerRepository, MenuItemRepository, OrderRepository, parse_id,
};
use crate::utils::{AppError, AppResult};

#[derive(Clone)]
pub struct OrderService {
    orders: OrderRepository,
    menu_items: MenuItemRepository,
    customers: CustomerRepository,
    delivery_fee: Decimal,
}

impl OrderService {
    pub fn new(db: Surreal<Db>, delivery_fee: Decimal) -> Self {
        Self {
            orders: OrderRepository::new(db.clone()),
            menu_items: MenuItemRepository::new(db.clone()),
            customers: CustomerRepository::new(db),
            delivery_fee,
        }
    }

    /// Place a new order.
    ///
    /// Validation order: items presence, type-conditional fields, customer
    /// reference, then each line against the live catalog. Prices are
    /// snapshotted from the catalog at this moment; the home-delivery fee
    /// is recorded separately and included in the total.
    pub async fn place_order(&self, req: PlaceOrderRequest) -> AppResult<OrderView> {
        if req.items.is_empty() {
            return Err(AppError::validation("Items are required"));
        }

        let kind = placement::build_kind(&req)?;

        let customer = match req.customer_id.as_deref().filter(|s| !s.is_empty()) {
            Some(raw) => {
                let found = self
                    .customers
                    .find_by_id(raw)
                    .await?
                    .ok_or_else(|| AppError::not_found("User not found"))?;
                found.id
            }
            None => None,
        };

        let mut resolved = Vec::with_capacity(req.items.len());
        for line in &req.items {
            let id = parse_id("menu_item", &line.menu_item);
            let item = self
                .menu_items
                .find_by_id(&line.menu_item)
                .await?
                .ok_or_else(|| {
                    AppError::not_found(format!(
                        "Menu item with ID {} not found",
                        line.menu_item
                    ))
                })?;
            if !item.is_available {
                return Err(AppError::validation(format!(
                    "Menu item \"{}\" is not available",
                    item.name
                )));
            }
            let quantity = line.quantity.unwrap_or(1);
            if quantity == 0 {
                return Err(AppError::validation("Quantity must be at least 1"));
            }
            resolved.push((id, item, quantity));
        }

        let (lines, subtotal) = placement::price_lines(&resolved);

        let (total_amount, delivery_fee) = match kind.order_type() {
            OrderType::DineIn => (subtotal, None),
            OrderType::HomeDelivery => (subtotal + self.delivery_fee, Some(self.delivery_fee)),
        };

        let order = Order {
            id: None,
            kind,
            items: lines,
            total_amount,
            delivery_fee,
            status: OrderStatus::Pending,
            customer,
            created_at: Utc::now().timestamp_millis(),
        };

        let created = self.orders.create(order).await?;
        tracing::info!(
            order_type = %created.kind.order_type(),
            total = %created.total_amount,
            "order placed"
        );

        let assembled = view::assemble(created, &self.menu_items, &self.customers).await?;
        Ok(assembled)
    }

    /// All orders, newest first
    pub async fn list_orders(&self) -> AppResult<Vec<OrderView>> {
        let orders = self.orders.find_all().await?;
        let views = view::assemble_many(orders, &self.menu_items, &self.customers).await?;
        Ok(views)
    }

    /// One order by id
    pub async fn get_order(&self, id: &str) -> AppResult<OrderView> {
        let order = self
            .orders
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Order not found"))?;
        let assembled = view::assemble(order, &self.menu_items, &self.customers).await?;
        Ok(assembled)
    }

    /// Move an order to a new status.
    ///
    /// The requested status must belong to the order's own type's set;
    /// within that set any move is allowed, including backwards.
    pub async fn transition_status(
        &self,
        id: &str,
        req: &UpdateStatusRequest,
    ) -> AppResult<OrderView> {
        let order = self
            .orders
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Order not found"))?;

        let status =
            placement::validate_transition(order.kind.order_type(), req.status.as_deref())?;

        let updated = self
            .orders
            .update_status(id, status)
            .await?
            .ok_or_else(|| AppError::not_found("Order not found"))?;

        tracing::info!(order_id = %id, status = %status, "order status updated");

        let assembled = view::assemble(updated, &self.menu_items, &self.customers).await?;
        Ok(assembled)
    }

    /// Remove an order, returning the deleted snapshot
    pub async fn delete_order(&self, id: &str) -> AppResult<Order> {
        self.orders
            .delete(id)
            .await?
            .ok_or_else(|| AppError::not_found("Order not found"))
    }
}
