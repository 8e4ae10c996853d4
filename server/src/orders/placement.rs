//! Placement validation and pricing
//!
//! Pure building blocks for order placement: type-conditional field
//! validation, line pricing with price snapshots, and the per-type
//! allowed-status sets. The async orchestration lives in
//! [`super::service::OrderService`].

use rust_decimal::Decimal;
use surrealdb::RecordId;

use crate::db::models::{
    MenuItem, OrderKind, OrderLine, OrderStatus, OrderType, PaymentStatus, PlaceOrderRequest,
};
use crate::utils::AppError;
use crate::utils::validation::{MAX_ADDRESS_LEN, validate_required_text};

/// Statuses a dine-in order may hold
pub const DINE_IN_STATUSES: [OrderStatus; 4] = [
    OrderStatus::Pending,
    OrderStatus::Preparing,
    OrderStatus::Served,
    OrderStatus::Completed,
];

/// Statuses a home-delivery order may hold
pub const HOME_DELIVERY_STATUSES: [OrderStatus; 4] = [
    OrderStatus::Pending,
    OrderStatus::Preparing,
    OrderStatus::OutForDelivery,
    OrderStatus::Delivered,
];

/// The allowed status set for an order type.
///
/// Membership is the only constraint: any member may follow any other
/// (permissive lifecycle). `completed`/`delivered` are terminal by
/// convention only.
pub fn allowed_statuses(order_type: OrderType) -> &'static [OrderStatus] {
    match order_type {
        OrderType::DineIn => &DINE_IN_STATUSES,
        OrderType::HomeDelivery => &HOME_DELIVERY_STATUSES,
    }
}

/// Validate the type-conditional fields of a placement request and build
/// the order's kind. Fail-fast: the first missing field wins.
pub fn build_kind(req: &PlaceOrderRequest) -> Result<OrderKind, AppError> {
    let order_type = req.order_type.unwrap_or(OrderType::DineIn);

    match order_type {
        OrderType::DineIn => {
            let table_number = req
                .table_number
                .as_deref()
                .filter(|t| !t.trim().is_empty())
                .ok_or_else(|| {
                    AppError::validation("Table number is required for dine-in orders")
                })?;
            Ok(OrderKind::DineIn {
                table_number: table_number.to_string(),
            })
        }
        OrderType::HomeDelivery => {
            let (delivery_address, phone_number) = match (
                req.delivery_address.as_deref().filter(|s| !s.is_empty()),
                req.phone_number.as_deref().filter(|s| !s.is_empty()),
            ) {
                (Some(addr), Some(phone)) => (addr, phone),
                _ => {
                    return Err(AppError::validation(
                        "Delivery address and phone number are required for home delivery",
                    ));
                }
            };
            validate_required_text(delivery_address, "Delivery address", MAX_ADDRESS_LEN)?;
            let payment_method = req
                .payment_method
                .as_deref()
                .filter(|s| !s.is_empty())
                .ok_or_else(|| {
                    AppError::validation("Payment method is required for home delivery")
                })?;
            let customer_name = req
                .customer_name
                .as_deref()
                .filter(|s| !s.is_empty())
                .ok_or_else(|| {
                    AppError::validation("Customer name is required for home delivery")
                })?;

            Ok(OrderKind::HomeDelivery {
                customer_name: customer_name.to_string(),
                phone_number: phone_number.to_string(),
                delivery_address: delivery_address.to_string(),
                payment_method: payment_method.to_string(),
                payment_status: PaymentStatus::Pending,
            })
        }
    }
}

/// Price the resolved lines, snapshotting each item's current price.
///
/// Returns the order lines and the subtotal of price times quantity. The
/// delivery fee, when applicable, is added by the caller.
pub fn price_lines(resolved: &[(RecordId, MenuItem, u32)]) -> (Vec<OrderLine>, Decimal) {
    let mut lines = Vec::with_capacity(resolved.len());
    let mut subtotal = Decimal::ZERO;

    for (id, item, quantity) in resolved {
        let price = item.price;
        subtotal += price * Decimal::from(*quantity);
        lines.push(OrderLine {
            menu_item: id.clone(),
            quantity: *quantity,
            price,
        });
    }

    (lines, subtotal)
}

/// Validate a requested status transition against the order's own type.
///
/// The raw status string is parsed here so unknown strings and
/// known-but-out-of-set statuses produce the same error naming the
/// valid set.
pub fn validate_transition(
    order_type: OrderType,
    raw_status: Option<&str>,
) -> Result<OrderStatus, AppError> {
    let allowed = allowed_statuses(order_type);
    let invalid = || {
        let names: Vec<&str> = allowed.iter().map(|s| s.as_str()).collect();
        AppError::validation(format!("Status must be one of: {}", names.join(", ")))
    };

    let status: OrderStatus = raw_status
        .unwrap_or_default()
        .parse()
        .map_err(|_| invalid())?;

    if !allowed.contains(&status) {
        return Err(invalid());
    }
    Ok(status)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::models::MenuCategory;

    fn item(name: &str, price: &str) -> (RecordId, MenuItem) {
        let id = RecordId::from_table_key("menu_item", name);
        let item = MenuItem {
            id: Some(id.clone()),
            name: name.to_string(),
            description: None,
            price: price.parse().unwrap(),
            category: MenuCategory::MainCourse,
            image_url: None,
            is_available: true,
            created_at: 0,
            updated_at: 0,
        };
        (id, item)
    }

    fn delivery_request() -> PlaceOrderRequest {
        PlaceOrderRequest {
            order_type: Some(OrderType::HomeDelivery),
            items: vec![],
            table_number: None,
            customer_name: Some("Ana".into()),
            phone_number: Some("0123456789".into()),
            delivery_address: Some("1 Main St".into()),
            payment_method: Some("cash-on-delivery".into()),
            customer_id: None,
        }
    }

    #[test]
    fn order_type_defaults_to_dine_in() {
        let req = PlaceOrderRequest {
            order_type: None,
            items: vec![],
            table_number: Some("4".into()),
            customer_name: None,
            phone_number: None,
            delivery_address: None,
            payment_method: None,
            customer_id: None,
        };
        let kind = build_kind(&req).unwrap();
        assert_eq!(kind.order_type(), OrderType::DineIn);
    }

    #[test]
    fn dine_in_requires_table_number() {
        let req = PlaceOrderRequest {
            order_type: Some(OrderType::DineIn),
            items: vec![],
            table_number: None,
            customer_name: None,
            phone_number: None,
            delivery_address: None,
            payment_method: None,
            customer_id: None,
        };
        let err = build_kind(&req).unwrap_err();
        assert!(matches!(err, AppError::Validation(msg)
            if msg == "Table number is required for dine-in orders"));
    }

    #[test]
    fn home_delivery_checks_fields_in_order() {
        // address+phone first
        let mut req = delivery_request();
        req.delivery_address = None;
        req.payment_method = None;
        let err = build_kind(&req).unwrap_err();
        assert!(matches!(err, AppError::Validation(msg)
            if msg.contains("Delivery address and phone number")));

        // then payment method
        let mut req = delivery_request();
        req.payment_method = None;
        req.customer_name = None;
        let err = build_kind(&req).unwrap_err();
        assert!(matches!(err, AppError::Validation(msg)
            if msg.contains("Payment method")));

        // then customer name
        let mut req = delivery_request();
        req.customer_name = None;
        let err = build_kind(&req).unwrap_err();
        assert!(matches!(err, AppError::Validation(msg)
            if msg.contains("Customer name")));
    }

    #[test]
    fn home_delivery_rejects_an_overlong_address() {
        let mut req = delivery_request();
        req.delivery_address = Some("x".repeat(MAX_ADDRESS_LEN + 1));
        let err = build_kind(&req).unwrap_err();
        assert!(matches!(err, AppError::Validation(msg)
            if msg.contains("Delivery address is too long")));
    }

    #[test]
    fn home_delivery_payment_starts_pending() {
        let kind = build_kind(&delivery_request()).unwrap();
        match kind {
            OrderKind::HomeDelivery { payment_status, .. } => {
                assert_eq!(payment_status, PaymentStatus::Pending);
            }
            _ => panic!("expected home-delivery kind"),
        }
    }

    #[test]
    fn pricing_sums_price_times_quantity() {
        let (burger_id, burger) = item("burger", "10.00");
        let (soda_id, soda) = item("soda", "2.50");
        let resolved = vec![(burger_id, burger, 2), (soda_id, soda, 3)];
        let (lines, subtotal) = price_lines(&resolved);
        assert_eq!(lines.len(), 2);
        assert_eq!(subtotal, "27.50".parse().unwrap());
        assert_eq!(lines[0].price, "10.00".parse().unwrap());
        assert_eq!(lines[0].quantity, 2);
    }

    #[test]
    fn allowed_sets_differ_per_type() {
        assert!(allowed_statuses(OrderType::DineIn).contains(&OrderStatus::Served));
        assert!(!allowed_statuses(OrderType::DineIn).contains(&OrderStatus::Delivered));
        assert!(allowed_statuses(OrderType::HomeDelivery).contains(&OrderStatus::OutForDelivery));
        assert!(!allowed_statuses(OrderType::HomeDelivery).contains(&OrderStatus::Completed));
    }

    #[test]
    fn transition_rejects_out_of_set_and_unknown_statuses() {
        let err = validate_transition(OrderType::DineIn, Some("delivered")).unwrap_err();
        assert!(matches!(err, AppError::Validation(msg)
            if msg == "Status must be one of: pending, preparing, served, completed"));

        let err = validate_transition(OrderType::HomeDelivery, Some("served")).unwrap_err();
        assert!(matches!(err, AppError::Validation(msg)
            if msg.contains("out-for-delivery, delivered")));

        assert!(validate_transition(OrderType::DineIn, Some("bogus")).is_err());
        assert!(validate_transition(OrderType::DineIn, None).is_err());
    }

    #[test]
    fn transition_is_permissive_within_the_set() {
        // No ordering between members: moving "backwards" is allowed.
        for status in ["completed", "pending", "served", "preparing"] {
            assert!(validate_transition(OrderType::DineIn, Some(status)).is_ok());
        }
    }
}
