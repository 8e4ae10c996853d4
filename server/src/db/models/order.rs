//! Order Model
//!
//! Orders are a sum type over the order type: dine-in and home-delivery
//! variants carry only their own fields, so an invalid field combination
//! (a dine-in order with a delivery address, say) cannot be represented.

use std::fmt;
use std::str::FromStr;

use super::serde_helpers;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use surrealdb::RecordId;

/// Order status, shared across both order types.
///
/// Which members are reachable depends on the order's type; see
/// [`crate::orders::placement::allowed_statuses`].
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum OrderStatus {
    Pending,
    Preparing,
    Served,
    Completed,
    OutForDelivery,
    Delivered,
}

impl OrderStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Preparing => "preparing",
            OrderStatus::Served => "served",
            OrderStatus::Completed => "completed",
            OrderStatus::OutForDelivery => "out-for-delivery",
            OrderStatus::Delivered => "delivered",
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OrderStatus {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(OrderStatus::Pending),
            "preparing" => Ok(OrderStatus::Preparing),
            "served" => Ok(OrderStatus::Served),
            "completed" => Ok(OrderStatus::Completed),
            "out-for-delivery" => Ok(OrderStatus::OutForDelivery),
            "delivered" => Ok(OrderStatus::Delivered),
            _ => Err(()),
        }
    }
}

/// Order type, fixed at creation
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum OrderType {
    DineIn,
    HomeDelivery,
}

impl OrderType {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderType::DineIn => "dine-in",
            OrderType::HomeDelivery => "home-delivery",
        }
    }
}

impl fmt::Display for OrderType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Payment status for home-delivery orders
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum PaymentStatus {
    Pending,
    Paid,
}

/// Type-conditional order fields, tagged by `order_type`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "order_type", rename_all = "kebab-case")]
pub enum OrderKind {
    DineIn {
        table_number: String,
    },
    HomeDelivery {
        customer_name: String,
        phone_number: String,
        delivery_address: String,
        payment_method: String,
        payment_status: PaymentStatus,
    },
}

impl OrderKind {
    pub fn order_type(&self) -> OrderType {
        match self {
            OrderKind::DineIn { .. } => OrderType::DineIn,
            OrderKind::HomeDelivery { .. } => OrderType::HomeDelivery,
        }
    }
}

/// One line of an order: a menu item reference, a quantity and the price
/// snapshot captured at order time. Later menu price changes never affect
/// a placed order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderLine {
    #[serde(with = "serde_helpers::record_id")]
    pub menu_item: RecordId,
    pub quantity: u32,
    pub price: Decimal,
}

/// Order entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "serde_helpers::option_record_id"
    )]
    pub id: Option<RecordId>,
    #[serde(flatten)]
    pub kind: OrderKind,
    pub items: Vec<OrderLine>,
    pub total_amount: Decimal,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delivery_fee: Option<Decimal>,
    pub status: OrderStatus,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "serde_helpers::option_record_id"
    )]
    pub customer: Option<RecordId>,
    pub created_at: i64,
}

// =============================================================================
// API Request Types
// =============================================================================

/// One requested line: menu item reference plus optional quantity
#[derive(Debug, Clone, Deserialize)]
pub struct OrderLineRequest {
    pub menu_item: String,
    pub quantity: Option<u32>,
}

/// Place order payload
#[derive(Debug, Clone, Deserialize)]
pub struct PlaceOrderRequest {
    #[serde(default)]
    pub order_type: Option<OrderType>,
    #[serde(default)]
    pub items: Vec<OrderLineRequest>,
    pub table_number: Option<String>,
    pub customer_name: Option<String>,
    pub phone_number: Option<String>,
    pub delivery_address: Option<String>,
    pub payment_method: Option<String>,
    pub customer_id: Option<String>,
}

/// Update status payload
///
/// The status arrives as a raw string so that unknown values produce the
/// same "must be one of" validation error as out-of-set known values.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateStatusRequest {
    pub status: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn order_kind_tags_with_kebab_case() {
        let dine_in = OrderKind::DineIn {
            table_number: "7".into(),
        };
        let json = serde_json::to_value(&dine_in).unwrap();
        assert_eq!(json["order_type"], "dine-in");
        assert_eq!(json["table_number"], "7");

        let delivery: OrderKind = serde_json::from_value(serde_json::json!({
            "order_type": "home-delivery",
            "customer_name": "Ana",
            "phone_number": "0123456789",
            "delivery_address": "1 Main St",
            "payment_method": "cash-on-delivery",
            "payment_status": "pending",
        }))
        .unwrap();
        assert_eq!(delivery.order_type(), OrderType::HomeDelivery);
    }

    #[test]
    fn order_flattens_kind_into_record() {
        let order = Order {
            id: None,
            kind: OrderKind::DineIn {
                table_number: "3".into(),
            },
            items: vec![],
            total_amount: Decimal::ZERO,
            delivery_fee: None,
            status: OrderStatus::Pending,
            customer: None,
            created_at: 0,
        };
        let json = serde_json::to_value(&order).unwrap();
        assert_eq!(json["order_type"], "dine-in");
        assert_eq!(json["table_number"], "3");
        assert_eq!(json["status"], "pending");
        assert!(json.get("delivery_address").is_none());

        let back: Order = serde_json::from_value(json).unwrap();
        assert_eq!(back.kind, order.kind);
    }

    #[test]
    fn status_parses_kebab_case_strings() {
        assert_eq!(
            "out-for-delivery".parse::<OrderStatus>(),
            Ok(OrderStatus::OutForDelivery)
        );
        assert!("cancelled".parse::<OrderStatus>().is_err());
    }
}
