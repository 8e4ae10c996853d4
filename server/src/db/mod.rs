//! Database Module
//!
//! Embedded SurrealDB handle and schema bootstrap. The handle is created
//! once at process start and passed into [`crate::core::ServerState`];
//! there is no global connection singleton.

pub mod models;
pub mod repository;

use std::path::Path;

use surrealdb::Surreal;
use surrealdb::engine::local::{Db, RocksDb};

use crate::utils::AppError;

/// Uniqueness constraints the application relies on. Lookups still guard
/// against duplicates before writing; the indexes back them at the store.
const SCHEMA: &str = "
    DEFINE INDEX IF NOT EXISTS table_number_unique ON TABLE dining_table COLUMNS table_number UNIQUE;
    DEFINE INDEX IF NOT EXISTS customer_phone_unique ON TABLE customer COLUMNS phone UNIQUE;
    DEFINE INDEX IF NOT EXISTS admin_email_unique ON TABLE admin COLUMNS email UNIQUE;
";

/// Database service owning the embedded SurrealDB instance
#[derive(Clone)]
pub struct DbService {
    pub db: Surreal<Db>,
}

impl DbService {
    /// Open (or create) the database at `db_dir` and apply the schema
    pub async fn new(db_dir: &Path) -> Result<Self, AppError> {
        let db: Surreal<Db> = Surreal::new::<RocksDb>(db_dir)
            .await
            .map_err(|e| AppError::database(format!("Failed to open database: {e}")))?;

        db.use_ns("qr_dine")
            .use_db("main")
            .await
            .map_err(|e| AppError::database(format!("Failed to select namespace: {e}")))?;

        db.query(SCHEMA)
            .await
            .map_err(|e| AppError::database(format!("Failed to apply schema: {e}")))?;

        tracing::info!(path = %db_dir.display(), "Database connection established");

        Ok(Self { db })
    }
}
