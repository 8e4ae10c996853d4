//! Dining Table Repository

use chrono::Utc;
use surrealdb::Surreal;
use surrealdb::engine::local::Db;

use super::{BaseRepository, RepoError, RepoResult, parse_id};
use crate::db::models::Table;

const TABLE: &str = "dining_table";

#[derive(Clone)]
pub struct TableRepository {
    base: BaseRepository,
}

impl TableRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// All tables, sorted by table number
    pub async fn find_all(&self) -> RepoResult<Vec<Table>> {
        let tables: Vec<Table> = self
            .base
            .db()
            .query("SELECT * FROM dining_table ORDER BY table_number")
            .await?
            .take(0)?;
        Ok(tables)
    }

    /// Find table by its table number
    pub async fn find_by_number(&self, table_number: &str) -> RepoResult<Option<Table>> {
        let mut result = self
            .base
            .db()
            .query("SELECT * FROM dining_table WHERE table_number = $number LIMIT 1")
            .bind(("number", table_number.to_string()))
            .await?;
        let tables: Vec<Table> = result.take(0)?;
        Ok(tables.into_iter().next())
    }

    /// Create a new table; table numbers are unique
    pub async fn create(&self, table_number: String, order_url: String) -> RepoResult<Table> {
        if self.find_by_number(&table_number).await?.is_some() {
            return Err(RepoError::Duplicate(format!(
                "Table {} already exists",
                table_number
            )));
        }

        let table = Table {
            id: None,
            table_number,
            order_url,
            is_active: true,
            created_at: Utc::now().timestamp_millis(),
        };

        let created: Option<Table> = self.base.db().create(TABLE).content(table).await?;
        created.ok_or_else(|| RepoError::Database("Failed to create table".to_string()))
    }

    /// Hard delete a table, returning the deleted snapshot
    pub async fn delete(&self, id: &str) -> RepoResult<Option<Table>> {
        let thing = parse_id(TABLE, id);
        let deleted: Option<Table> = self.base.db().delete(thing).await?;
        Ok(deleted)
    }
}
