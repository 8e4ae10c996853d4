//! End-to-end order flow tests against a real embedded database.
//!
//! Each test opens its own RocksDB instance in a temp directory, seeds
//! the catalog through the repositories and drives orders through
//! [`OrderService`].

use rust_decimal::Decimal;
use surrealdb::Surreal;
use surrealdb::engine::local::Db;
use tempfile::TempDir;

use qr_dine_server::AppError;
use qr_dine_server::db::DbService;
use qr_dine_server::db::models::{
    MenuCategory, MenuItem, OrderKind, OrderLineRequest, OrderStatus, OrderType,
    PlaceOrderRequest, UpdateStatusRequest,
};
use qr_dine_server::db::repository::{
    CustomerRepository, MenuItemRepository, RepoError, TableRepository,
};
use qr_dine_server::orders::OrderService;

const DELIVERY_FEE: Decimal = Decimal::from_parts(500, 0, 0, false, 2);

async fn test_db() -> (TempDir, Surreal<Db>) {
    let tmp = TempDir::new().expect("temp dir");
    let service = DbService::new(tmp.path()).await.expect("open database");
    (tmp, service.db)
}

async fn seed_item(db: &Surreal<Db>, name: &str, price: &str, available: bool) -> MenuItem {
    MenuItemRepository::new(db.clone())
        .create(
            name.to_string(),
            None,
            price.parse().expect("price"),
            MenuCategory::MainCourse,
            None,
            available,
        )
        .await
        .expect("seed menu item")
}

fn item_id(item: &MenuItem) -> String {
    item.id.as_ref().expect("seeded item id").to_string()
}

fn dine_in_request(table: &str, items: Vec<OrderLineRequest>) -> PlaceOrderRequest {
    PlaceOrderRequest {
        order_type: Some(OrderType::DineIn),
        items,
        table_number: Some(table.to_string()),
        customer_name: None,
        phone_number: None,
        delivery_address: None,
        payment_method: None,
        customer_id: None,
    }
}

fn delivery_request(items: Vec<OrderLineRequest>) -> PlaceOrderRequest {
    PlaceOrderRequest {
        order_type: Some(OrderType::HomeDelivery),
        items,
        table_number: None,
        customer_name: Some("Ana".to_string()),
        phone_number: Some("0123456789".to_string()),
        delivery_address: Some("1 Main St".to_string()),
        payment_method: Some("cash-on-delivery".to_string()),
        customer_id: None,
    }
}

fn line(item: &MenuItem, quantity: Option<u32>) -> OrderLineRequest {
    OrderLineRequest {
        menu_item: item_id(item),
        quantity,
    }
}

#[tokio::test]
async fn dine_in_order_totals_and_starts_pending() {
    let (_tmp, db) = test_db().await;
    let burger = seed_item(&db, "Burger", "10.00", true).await;
    let service = OrderService::new(db, DELIVERY_FEE);

    let view = service
        .place_order(dine_in_request("7", vec![line(&burger, Some(2))]))
        .await
        .expect("place order");

    assert_eq!(view.status, OrderStatus::Pending);
    assert_eq!(view.total_amount, "20.00".parse().unwrap());
    assert!(view.delivery_fee.is_none());
    match &view.kind {
        OrderKind::DineIn { table_number } => assert_eq!(table_number, "7"),
        other => panic!("unexpected kind: {other:?}"),
    }
    assert_eq!(view.items.len(), 1);
    let first = &view.items[0];
    assert_eq!(first.quantity, 2);
    assert_eq!(
        first.menu_item.as_ref().map(|i| i.name.as_str()),
        Some("Burger")
    );
}

#[tokio::test]
async fn home_delivery_adds_the_flat_fee() {
    let (_tmp, db) = test_db().await;
    let curry = seed_item(&db, "Curry", "15.00", true).await;
    let service = OrderService::new(db, DELIVERY_FEE);

    let view = service
        .place_order(delivery_request(vec![line(&curry, Some(1))]))
        .await
        .expect("place order");

    assert_eq!(view.total_amount, "20.00".parse().unwrap());
    assert_eq!(view.delivery_fee, Some("5.00".parse().unwrap()));
    match &view.kind {
        OrderKind::HomeDelivery {
            payment_status, ..
        } => {
            assert_eq!(
                serde_json::to_value(payment_status).unwrap(),
                serde_json::json!("pending")
            );
        }
        other => panic!("unexpected kind: {other:?}"),
    }
}

// Availability is read before the single order write without a
// surrounding transaction, so a concurrent toggle to unavailable can
// still admit an in-flight order. Single-process deployment keeps the
// window small; this test only covers the sequential path.
#[tokio::test]
async fn unavailable_item_rejects_and_persists_nothing() {
    let (_tmp, db) = test_db().await;
    let stew = seed_item(&db, "Stew", "8.00", false).await;
    let service = OrderService::new(db, DELIVERY_FEE);

    let err = service
        .place_order(dine_in_request("2", vec![line(&stew, None)]))
        .await
        .unwrap_err();
    assert!(
        matches!(err, AppError::Validation(msg) if msg == "Menu item \"Stew\" is not available")
    );

    let orders = service.list_orders().await.expect("list");
    assert!(orders.is_empty());
}

#[tokio::test]
async fn unknown_item_is_a_404_and_persists_nothing() {
    let (_tmp, db) = test_db().await;
    let service = OrderService::new(db, DELIVERY_FEE);

    let request = dine_in_request(
        "2",
        vec![OrderLineRequest {
            menu_item: "menu_item:missing".to_string(),
            quantity: Some(1),
        }],
    );
    let err = service.place_order(request).await.unwrap_err();
    assert!(matches!(err, AppError::NotFound(msg)
        if msg == "Menu item with ID menu_item:missing not found"));

    assert!(service.list_orders().await.expect("list").is_empty());
}

#[tokio::test]
async fn placement_validation_runs_in_a_fixed_order() {
    let (_tmp, db) = test_db().await;
    let soup = seed_item(&db, "Soup", "4.50", true).await;
    let service = OrderService::new(db, DELIVERY_FEE);

    // Empty items first, before any type-conditional checks
    let mut request = dine_in_request("3", vec![]);
    request.table_number = None;
    let err = service.place_order(request).await.unwrap_err();
    assert!(matches!(err, AppError::Validation(msg) if msg == "Items are required"));

    // Then the type-conditional fields
    let mut request = dine_in_request("3", vec![line(&soup, None)]);
    request.table_number = None;
    let err = service.place_order(request).await.unwrap_err();
    assert!(matches!(err, AppError::Validation(msg)
        if msg == "Table number is required for dine-in orders"));

    let mut request = delivery_request(vec![line(&soup, None)]);
    request.delivery_address = None;
    let err = service.place_order(request).await.unwrap_err();
    assert!(matches!(err, AppError::Validation(msg)
        if msg == "Delivery address and phone number are required for home delivery"));
}

#[tokio::test]
async fn quantity_defaults_to_one_and_zero_is_rejected() {
    let (_tmp, db) = test_db().await;
    let tea = seed_item(&db, "Tea", "2.00", true).await;
    let service = OrderService::new(db, DELIVERY_FEE);

    let view = service
        .place_order(dine_in_request("1", vec![line(&tea, None)]))
        .await
        .expect("place order");
    assert_eq!(view.items[0].quantity, 1);
    assert_eq!(view.total_amount, "2.00".parse().unwrap());

    let err = service
        .place_order(dine_in_request("1", vec![line(&tea, Some(0))]))
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::Validation(msg) if msg == "Quantity must be at least 1"));
}

#[tokio::test]
async fn price_snapshot_survives_menu_changes() {
    let (_tmp, db) = test_db().await;
    let pie = seed_item(&db, "Pie", "6.00", true).await;
    let repo = MenuItemRepository::new(db.clone());
    let service = OrderService::new(db, DELIVERY_FEE);

    let view = service
        .place_order(dine_in_request("4", vec![line(&pie, Some(2))]))
        .await
        .expect("place order");
    let order_id = view.id.clone();

    repo.update(
        &item_id(&pie),
        qr_dine_server::db::models::MenuItemUpdate {
            name: None,
            description: None,
            price: Some("9.00".parse().unwrap()),
            category: None,
            image_url: None,
            is_available: None,
        },
    )
    .await
    .expect("update price");

    let reread = service.get_order(&order_id).await.expect("get order");
    assert_eq!(reread.items[0].price, "6.00".parse().unwrap());
    assert_eq!(reread.total_amount, "12.00".parse().unwrap());
    // The attached menu item document shows the live price
    assert_eq!(
        reread.items[0].menu_item.as_ref().map(|i| i.price),
        Some("9.00".parse().unwrap())
    );
}

#[tokio::test]
async fn lifecycle_is_permissive_within_the_type_set() {
    let (_tmp, db) = test_db().await;
    let fish = seed_item(&db, "Fish", "11.00", true).await;
    let service = OrderService::new(db, DELIVERY_FEE);

    let view = service
        .place_order(dine_in_request("5", vec![line(&fish, None)]))
        .await
        .expect("place order");
    let id = view.id;

    // Any member may follow any other, including moving backwards
    for status in ["completed", "preparing", "served", "pending"] {
        let updated = service
            .transition_status(
                &id,
                &UpdateStatusRequest {
                    status: Some(status.to_string()),
                },
            )
            .await
            .expect("transition");
        assert_eq!(updated.status.as_str(), status);
    }

    // Delivery-only statuses are rejected and leave the order unchanged
    let err = service
        .transition_status(
            &id,
            &UpdateStatusRequest {
                status: Some("out-for-delivery".to_string()),
            },
        )
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::Validation(msg)
        if msg == "Status must be one of: pending, preparing, served, completed"));

    let unchanged = service.get_order(&id).await.expect("get order");
    assert_eq!(unchanged.status, OrderStatus::Pending);
}

#[tokio::test]
async fn home_delivery_rejects_dine_in_statuses() {
    let (_tmp, db) = test_db().await;
    let rice = seed_item(&db, "Rice", "3.00", true).await;
    let service = OrderService::new(db, DELIVERY_FEE);

    let view = service
        .place_order(delivery_request(vec![line(&rice, None)]))
        .await
        .expect("place order");

    let err = service
        .transition_status(
            &view.id,
            &UpdateStatusRequest {
                status: Some("served".to_string()),
            },
        )
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::Validation(msg)
        if msg == "Status must be one of: pending, preparing, out-for-delivery, delivered"));
}

#[tokio::test]
async fn orders_list_newest_first() {
    let (_tmp, db) = test_db().await;
    let first = seed_item(&db, "First", "1.00", true).await;
    let second = seed_item(&db, "Second", "2.00", true).await;
    let service = OrderService::new(db, DELIVERY_FEE);

    service
        .place_order(dine_in_request("1", vec![line(&first, None)]))
        .await
        .expect("first order");
    // created_at has millisecond resolution
    tokio::time::sleep(std::time::Duration::from_millis(5)).await;
    service
        .place_order(dine_in_request("2", vec![line(&second, None)]))
        .await
        .expect("second order");

    let views = service.list_orders().await.expect("list");
    assert_eq!(views.len(), 2);
    assert!(views[0].created_at >= views[1].created_at);
    assert_eq!(
        views[0].items[0].menu_item.as_ref().map(|i| i.name.clone()),
        Some("Second".to_string())
    );
}

#[tokio::test]
async fn orders_resolve_their_customer_reference() {
    let (_tmp, db) = test_db().await;
    let cake = seed_item(&db, "Cake", "5.00", true).await;
    let customers = CustomerRepository::new(db.clone());
    let service = OrderService::new(db, DELIVERY_FEE);

    let (customer, created) = customers
        .find_or_create(Some("Ana".to_string()), "0123456789".to_string())
        .await
        .expect("register customer");
    assert!(created);

    let mut request = dine_in_request("9", vec![line(&cake, None)]);
    request.customer_id = customer.id.as_ref().map(|id| id.to_string());

    let view = service.place_order(request).await.expect("place order");
    let embedded = view.customer.expect("customer ref");
    assert_eq!(embedded.phone, "0123456789");
    assert_eq!(embedded.name.as_deref(), Some("Ana"));

    // Unknown customer references are a 404, not a silent drop
    let mut request = dine_in_request("9", vec![line(&cake, None)]);
    request.customer_id = Some("customer:missing".to_string());
    let err = service.place_order(request).await.unwrap_err();
    assert!(matches!(err, AppError::NotFound(msg) if msg == "User not found"));
}

#[tokio::test]
async fn deleted_orders_stay_gone() {
    let (_tmp, db) = test_db().await;
    let roll = seed_item(&db, "Roll", "2.50", true).await;
    let service = OrderService::new(db, DELIVERY_FEE);

    let view = service
        .place_order(dine_in_request("6", vec![line(&roll, None)]))
        .await
        .expect("place order");

    let snapshot = service.delete_order(&view.id).await.expect("delete");
    assert_eq!(snapshot.total_amount, "2.50".parse().unwrap());

    let err = service.get_order(&view.id).await.unwrap_err();
    assert!(matches!(err, AppError::NotFound(msg) if msg == "Order not found"));

    let err = service.delete_order(&view.id).await.unwrap_err();
    assert!(matches!(err, AppError::NotFound(_)));
}

#[tokio::test]
async fn customer_registration_is_idempotent() {
    let (_tmp, db) = test_db().await;
    let customers = CustomerRepository::new(db);

    let (first, created) = customers
        .find_or_create(Some("Ana".to_string()), "0987654321".to_string())
        .await
        .expect("register");
    assert!(created);

    let (second, created) = customers
        .find_or_create(Some("Someone Else".to_string()), "0987654321".to_string())
        .await
        .expect("re-register");
    assert!(!created);
    assert_eq!(first.id, second.id);
    // The original name wins
    assert_eq!(second.name.as_deref(), Some("Ana"));
}

#[tokio::test]
async fn table_numbers_are_unique() {
    let (_tmp, db) = test_db().await;
    let tables = TableRepository::new(db);

    let table = tables
        .create("12".to_string(), "http://localhost:3000/order?table=12".to_string())
        .await
        .expect("create table");
    assert_eq!(table.order_url, "http://localhost:3000/order?table=12");

    let err = tables
        .create("12".to_string(), "http://localhost:3000/order?table=12".to_string())
        .await
        .unwrap_err();
    assert!(matches!(err, RepoError::Duplicate(msg) if msg == "Table 12 already exists"));
}
