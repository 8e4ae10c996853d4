//! Menu Item Repository

use chrono::Utc;
use serde::Serialize;
use surrealdb::engine::local::Db;
use surrealdb::{RecordId, Surreal};

use super::{BaseRepository, RepoError, RepoResult, parse_id};
use crate::db::models::{MenuCategory, MenuItem, MenuItemUpdate};

const TABLE: &str = "menu_item";

#[derive(Clone)]
pub struct MenuItemRepository {
    base: BaseRepository,
}

impl MenuItemRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Find all menu items
    pub async fn find_all(&self) -> RepoResult<Vec<MenuItem>> {
        let items: Vec<MenuItem> = self
            .base
            .db()
            .query("SELECT * FROM menu_item ORDER BY name")
            .await?
            .take(0)?;
        Ok(items)
    }

    /// Find menu item by id
    pub async fn find_by_id(&self, id: &str) -> RepoResult<Option<MenuItem>> {
        let thing = parse_id(TABLE, id);
        let item: Option<MenuItem> = self.base.db().select(thing).await?;
        Ok(item)
    }

    /// Batch-fetch menu items by record id (for order view assembly)
    pub async fn find_by_ids(&self, ids: Vec<RecordId>) -> RepoResult<Vec<MenuItem>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }
        let items: Vec<MenuItem> = self
            .base
            .db()
            .query("SELECT * FROM menu_item WHERE id IN $ids")
            .bind(("ids", ids))
            .await?
            .take(0)?;
        Ok(items)
    }

    /// Create a new menu item (validation happens in the handler)
    pub async fn create(
        &self,
        name: String,
        description: Option<String>,
        price: rust_decimal::Decimal,
        category: MenuCategory,
        image_url: Option<String>,
        is_available: bool,
    ) -> RepoResult<MenuItem> {
        let now = Utc::now().timestamp_millis();
        let item = MenuItem {
            id: None,
            name,
            description,
            price,
            category,
            image_url,
            is_available,
            created_at: now,
            updated_at: now,
        };

        let created: Option<MenuItem> = self.base.db().create(TABLE).content(item).await?;
        created.ok_or_else(|| RepoError::Database("Failed to create menu item".to_string()))
    }

    /// Partially update a menu item, refreshing `updated_at`
    pub async fn update(&self, id: &str, data: MenuItemUpdate) -> RepoResult<MenuItem> {
        let thing = parse_id(TABLE, id);

        self.find_by_id(id)
            .await?
            .ok_or_else(|| RepoError::NotFound(format!("Menu item {} not found", id)))?;

        #[derive(Serialize)]
        struct Merge {
            #[serde(flatten)]
            data: MenuItemUpdate,
            updated_at: i64,
        }

        let updated: Option<MenuItem> = self
            .base
            .db()
            .update(thing)
            .merge(Merge {
                data,
                updated_at: Utc::now().timestamp_millis(),
            })
            .await?;
        updated.ok_or_else(|| RepoError::NotFound(format!("Menu item {} not found", id)))
    }

    /// Hard delete a menu item, returning the deleted snapshot
    pub async fn delete(&self, id: &str) -> RepoResult<Option<MenuItem>> {
        let thing = parse_id(TABLE, id);
        let deleted: Option<MenuItem> = self.base.db().delete(thing).await?;
        Ok(deleted)
    }
}
