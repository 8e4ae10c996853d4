//! Customer Repository
//!
//! Customers are keyed by phone number; registration is idempotent.

use chrono::Utc;
use surrealdb::Surreal;
use surrealdb::engine::local::Db;

use super::{BaseRepository, RepoError, RepoResult, parse_id};
use crate::db::models::Customer;

const TABLE: &str = "customer";

#[derive(Clone)]
pub struct CustomerRepository {
    base: BaseRepository,
}

impl CustomerRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Find customer by id
    pub async fn find_by_id(&self, id: &str) -> RepoResult<Option<Customer>> {
        let thing = parse_id(TABLE, id);
        let customer: Option<Customer> = self.base.db().select(thing).await?;
        Ok(customer)
    }

    /// Find customer by phone number
    pub async fn find_by_phone(&self, phone: &str) -> RepoResult<Option<Customer>> {
        let mut result = self
            .base
            .db()
            .query("SELECT * FROM customer WHERE phone = $phone LIMIT 1")
            .bind(("phone", phone.to_string()))
            .await?;
        let customers: Vec<Customer> = result.take(0)?;
        Ok(customers.into_iter().next())
    }

    /// Resolve-or-create a customer by phone number.
    ///
    /// Idempotent: an existing phone returns the existing record untouched.
    /// The bool is true when a new record was created.
    pub async fn find_or_create(
        &self,
        name: Option<String>,
        phone: String,
    ) -> RepoResult<(Customer, bool)> {
        if let Some(existing) = self.find_by_phone(&phone).await? {
            return Ok((existing, false));
        }

        let customer = Customer {
            id: None,
            name,
            phone,
            is_verified: true,
            created_at: Utc::now().timestamp_millis(),
        };

        let created: Option<Customer> = self.base.db().create(TABLE).content(customer).await?;
        created
            .map(|c| (c, true))
            .ok_or_else(|| RepoError::Database("Failed to create customer".to_string()))
    }
}
