//! Dining Table Model

use super::serde_helpers;
use serde::{Deserialize, Serialize};
use surrealdb::RecordId;

/// Dining table entity
///
/// `order_url` is the ordering entry point the table's QR code encodes
/// (`{frontend_url}/order?table={table_number}`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Table {
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "serde_helpers::option_record_id"
    )]
    pub id: Option<RecordId>,
    pub table_number: String,
    pub order_url: String,
    #[serde(
        default = "default_true",
        deserialize_with = "serde_helpers::bool_true"
    )]
    pub is_active: bool,
    #[serde(default)]
    pub created_at: i64,
}

fn default_true() -> bool {
    true
}

/// Create table payload
#[derive(Debug, Clone, Deserialize)]
pub struct TableCreate {
    pub table_number: Option<String>,
}
