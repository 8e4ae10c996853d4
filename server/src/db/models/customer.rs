//! Customer Identity Model

use super::serde_helpers;
use serde::{Deserialize, Serialize};
use surrealdb::RecordId;

/// Customer identity, keyed by phone number
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Customer {
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "serde_helpers::option_record_id"
    )]
    pub id: Option<RecordId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub phone: String,
    #[serde(
        default = "default_true",
        deserialize_with = "serde_helpers::bool_true"
    )]
    pub is_verified: bool,
    #[serde(default)]
    pub created_at: i64,
}

fn default_true() -> bool {
    true
}

/// Register customer payload
#[derive(Debug, Clone, Deserialize)]
pub struct CustomerRegister {
    pub name: Option<String>,
    pub phone: Option<String>,
}

/// Login customer payload
#[derive(Debug, Clone, Deserialize)]
pub struct CustomerLogin {
    pub phone: Option<String>,
}
