//! Database Models

pub mod serde_helpers;

pub mod admin;
pub mod customer;
pub mod menu_item;
pub mod order;
pub mod table;

pub use admin::{Admin, AdminInfo, AdminLogin, AdminRecord, AdminRegister};
pub use customer::{Customer, CustomerLogin, CustomerRegister};
pub use menu_item::{MenuCategory, MenuItem, MenuItemCreate, MenuItemUpdate, MenuItemUpdateRequest};
pub use order::{
    Order, OrderKind, OrderLine, OrderLineRequest, OrderStatus, OrderType, PaymentStatus,
    PlaceOrderRequest, UpdateStatusRequest,
};
pub use table::{Table, TableCreate};
