//! Admin Repository

use chrono::Utc;
use surrealdb::Surreal;
use surrealdb::engine::local::Db;

use super::{BaseRepository, RepoError, RepoResult, parse_id};
use crate::db::models::{Admin, AdminRecord};

const TABLE: &str = "admin";

#[derive(Clone)]
pub struct AdminRepository {
    base: BaseRepository,
}

impl AdminRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Find admin by id
    pub async fn find_by_id(&self, id: &str) -> RepoResult<Option<Admin>> {
        let thing = parse_id(TABLE, id);
        let admin: Option<Admin> = self.base.db().select(thing).await?;
        Ok(admin)
    }

    /// Find admin by email
    pub async fn find_by_email(&self, email: &str) -> RepoResult<Option<Admin>> {
        let mut result = self
            .base
            .db()
            .query("SELECT * FROM admin WHERE email = $email LIMIT 1")
            .bind(("email", email.to_string()))
            .await?;
        let admins: Vec<Admin> = result.take(0)?;
        Ok(admins.into_iter().next())
    }

    /// Create an admin account; emails are unique
    pub async fn create(&self, name: String, email: String, hash_pass: String) -> RepoResult<Admin> {
        if self.find_by_email(&email).await?.is_some() {
            return Err(RepoError::Duplicate("Admin already exists".to_string()));
        }

        let record = AdminRecord {
            name,
            email,
            hash_pass,
            created_at: Utc::now().timestamp_millis(),
        };

        let created: Option<Admin> = self.base.db().create(TABLE).content(record).await?;
        created.ok_or_else(|| RepoError::Database("Failed to create admin".to_string()))
    }
}
