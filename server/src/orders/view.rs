//! Order read-side assembly
//!
//! Stored orders reference menu items and customers by record id. The
//! API returns a denormalized view instead, with each line carrying the
//! referenced menu item document and the customer reduced to name and
//! phone. Assembly batch-fetches the referenced records so listing N
//! orders costs two lookups, not N.

use std::collections::{HashMap, HashSet};

use serde::Serialize;
use surrealdb::RecordId;

use crate::db::models::{MenuItem, Order, OrderKind, OrderLine, OrderStatus};
use crate::db::repository::{CustomerRepository, MenuItemRepository, RepoResult};
use rust_decimal::Decimal;

/// Customer as embedded in an order view
#[derive(Debug, Clone, Serialize)]
pub struct CustomerRef {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub phone: String,
}

/// One order line with its menu item document attached.
///
/// `menu_item` is null when the item was deleted after placement; the
/// snapshotted price and quantity remain authoritative either way.
#[derive(Debug, Clone, Serialize)]
pub struct OrderLineView {
    pub menu_item: Option<MenuItem>,
    pub quantity: u32,
    pub price: Decimal,
}

/// Denormalized order as returned by the API
#[derive(Debug, Clone, Serialize)]
pub struct OrderView {
    pub id: String,
    #[serde(flatten)]
    pub kind: OrderKind,
    pub items: Vec<OrderLineView>,
    pub total_amount: Decimal,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delivery_fee: Option<Decimal>,
    pub status: OrderStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer: Option<CustomerRef>,
    pub created_at: i64,
}

/// Assemble views for a batch of orders with two repository round trips.
pub async fn assemble_many(
    orders: Vec<Order>,
    menu_items: &MenuItemRepository,
    customers: &CustomerRepository,
) -> RepoResult<Vec<OrderView>> {
    let mut item_ids: Vec<RecordId> = Vec::new();
    let mut seen_items: HashSet<String> = HashSet::new();
    let mut customer_ids: Vec<RecordId> = Vec::new();
    let mut seen_customers: HashSet<String> = HashSet::new();

    for order in &orders {
        for line in &order.items {
            if seen_items.insert(line.menu_item.to_string()) {
                item_ids.push(line.menu_item.clone());
            }
        }
        if let Some(customer) = &order.customer
            && seen_customers.insert(customer.to_string())
        {
            customer_ids.push(customer.clone());
        }
    }

    let item_map: HashMap<String, MenuItem> = menu_items
        .find_by_ids(item_ids)
        .await?
        .into_iter()
        .filter_map(|item| item.id.clone().map(|id| (id.to_string(), item)))
        .collect();

    let mut customer_map: HashMap<String, CustomerRef> = HashMap::new();
    for id in customer_ids {
        let key = id.to_string();
        if let Some(customer) = customers.find_by_id(&key).await? {
            customer_map.insert(
                key,
                CustomerRef {
                    name: customer.name,
                    phone: customer.phone,
                },
            );
        }
    }

    let views = orders
        .into_iter()
        .map(|order| build_view(order, &item_map, &customer_map))
        .collect();
    Ok(views)
}

/// Assemble the view for a single order.
pub async fn assemble(
    order: Order,
    menu_items: &MenuItemRepository,
    customers: &CustomerRepository,
) -> RepoResult<OrderView> {
    let mut views = assemble_many(vec![order], menu_items, customers).await?;
    views
        .pop()
        .ok_or_else(|| crate::db::repository::RepoError::Database(
            "Order view assembly produced no output".to_string(),
        ))
}

fn build_view(
    order: Order,
    item_map: &HashMap<String, MenuItem>,
    customer_map: &HashMap<String, CustomerRef>,
) -> OrderView {
    let items = order
        .items
        .into_iter()
        .map(|line: OrderLine| OrderLineView {
            menu_item: item_map.get(&line.menu_item.to_string()).cloned(),
            quantity: line.quantity,
            price: line.price,
        })
        .collect();

    OrderView {
        id: order.id.map(|id| id.to_string()).unwrap_or_default(),
        kind: order.kind,
        items,
        total_amount: order.total_amount,
        delivery_fee: order.delivery_fee,
        status: order.status,
        customer: order
            .customer
            .and_then(|id| customer_map.get(&id.to_string()).cloned()),
        created_at: order.created_at,
    }
}
