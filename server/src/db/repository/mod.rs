//! Repository Module
//!
//! CRUD access to the SurrealDB tables. Repositories return [`RepoError`];
//! the handler/service layer converts into [`crate::utils::AppError`].

pub mod admin;
pub mod customer;
pub mod menu_item;
pub mod order;
pub mod table;

pub use admin::AdminRepository;
pub use customer::CustomerRepository;
pub use menu_item::MenuItemRepository;
pub use order::OrderRepository;
pub use table::TableRepository;

use surrealdb::{RecordId, Surreal};
use surrealdb::engine::local::Db;
use thiserror::Error;

use crate::utils::AppError;

/// Repository error types
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Duplicate: {0}")]
    Duplicate(String),

    #[error("Database error: {0}")]
    Database(String),
}

impl From<surrealdb::Error> for RepoError {
    fn from(err: surrealdb::Error) -> Self {
        RepoError::Database(err.to_string())
    }
}

impl From<RepoError> for AppError {
    fn from(err: RepoError) -> Self {
        match err {
            RepoError::NotFound(msg) => AppError::NotFound(msg),
            RepoError::Duplicate(msg) => AppError::Validation(msg),
            RepoError::Database(msg) => AppError::Database(msg),
        }
    }
}

/// Result type for repository operations
pub type RepoResult<T> = Result<T, RepoError>;

/// Parse a raw id into a [`RecordId`] in `table`.
///
/// Accepts both the full `"table:key"` form and a bare key. A bare key is
/// never a parse failure, so an unknown id surfaces as a lookup miss
/// rather than a malformed-request error.
pub fn parse_id(table: &str, raw: &str) -> RecordId {
    if let Some((tb, key)) = raw.split_once(':')
        && tb == table
        && let Ok(id) = raw.parse::<RecordId>()
    {
        return id;
    }
    RecordId::from_table_key(table, raw)
}

/// Base repository with database reference
#[derive(Clone)]
pub struct BaseRepository {
    db: Surreal<Db>,
}

impl BaseRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self { db }
    }

    pub fn db(&self) -> &Surreal<Db> {
        &self.db
    }
}
