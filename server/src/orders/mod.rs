//! Order domain: placement validation, pricing, lifecycle and read views

pub mod placement;
pub mod service;
pub mod view;

pub use service::OrderService;
pub use view::{CustomerRef, OrderLineView, OrderView};
