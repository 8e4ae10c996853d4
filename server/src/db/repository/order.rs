//! Order Repository
//!
//! Persistence for placed orders. Orders are written exactly once by the
//! placement service after validation completes; a failed write persists
//! nothing.

use surrealdb::Surreal;
use surrealdb::engine::local::Db;

use super::{BaseRepository, RepoError, RepoResult, parse_id};
use crate::db::models::{Order, OrderStatus};

const TABLE: &str = "order";

#[derive(Clone)]
pub struct OrderRepository {
    base: BaseRepository,
}

impl OrderRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Persist a new order
    pub async fn create(&self, order: Order) -> RepoResult<Order> {
        let created: Option<Order> = self.base.db().create(TABLE).content(order).await?;
        created.ok_or_else(|| RepoError::Database("Failed to create order".to_string()))
    }

    /// All orders, newest first
    pub async fn find_all(&self) -> RepoResult<Vec<Order>> {
        let orders: Vec<Order> = self
            .base
            .db()
            .query("SELECT * FROM order ORDER BY created_at DESC")
            .await?
            .take(0)?;
        Ok(orders)
    }

    /// Find order by id
    pub async fn find_by_id(&self, id: &str) -> RepoResult<Option<Order>> {
        let thing = parse_id(TABLE, id);
        let order: Option<Order> = self.base.db().select(thing).await?;
        Ok(order)
    }

    /// Set the order status, returning the updated record
    pub async fn update_status(&self, id: &str, status: OrderStatus) -> RepoResult<Option<Order>> {
        let thing = parse_id(TABLE, id);
        let mut result = self
            .base
            .db()
            .query("UPDATE $thing SET status = $status RETURN AFTER")
            .bind(("thing", thing))
            .bind(("status", status))
            .await?;
        let orders: Vec<Order> = result.take(0)?;
        Ok(orders.into_iter().next())
    }

    /// Hard delete an order, returning the deleted snapshot
    pub async fn delete(&self, id: &str) -> RepoResult<Option<Order>> {
        let thing = parse_id(TABLE, id);
        let deleted: Option<Order> = self.base.db().delete(thing).await?;
        Ok(deleted)
    }
}
