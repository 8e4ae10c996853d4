//! Menu Item Model

use super::serde_helpers;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use surrealdb::RecordId;

/// Fixed set of menu categories
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum MenuCategory {
    Starters,
    #[serde(rename = "Main Course")]
    MainCourse,
    Desserts,
    Drinks,
    Others,
}

impl MenuCategory {
    pub const ALL: [MenuCategory; 5] = [
        MenuCategory::Starters,
        MenuCategory::MainCourse,
        MenuCategory::Desserts,
        MenuCategory::Drinks,
        MenuCategory::Others,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            MenuCategory::Starters => "Starters",
            MenuCategory::MainCourse => "Main Course",
            MenuCategory::Desserts => "Desserts",
            MenuCategory::Drinks => "Drinks",
            MenuCategory::Others => "Others",
        }
    }
}

impl std::str::FromStr for MenuCategory {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Starters" => Ok(MenuCategory::Starters),
            "Main Course" => Ok(MenuCategory::MainCourse),
            "Desserts" => Ok(MenuCategory::Desserts),
            "Drinks" => Ok(MenuCategory::Drinks),
            "Others" => Ok(MenuCategory::Others),
            _ => Err(()),
        }
    }
}

/// Menu item entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuItem {
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "serde_helpers::option_record_id"
    )]
    pub id: Option<RecordId>,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub price: Decimal,
    pub category: MenuCategory,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(
        default = "default_true",
        deserialize_with = "serde_helpers::bool_true"
    )]
    pub is_available: bool,
    #[serde(default)]
    pub created_at: i64,
    #[serde(default)]
    pub updated_at: i64,
}

fn default_true() -> bool {
    true
}

/// Create menu item payload
///
/// Every field is optional at the serde level so missing or malformed
/// fields surface as a validation error rather than a decode failure.
/// The category arrives as a raw string for the same reason.
#[derive(Debug, Clone, Deserialize)]
pub struct MenuItemCreate {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<Decimal>,
    pub category: Option<String>,
    pub image_url: Option<String>,
    pub is_available: Option<bool>,
}

/// Update menu item payload as received from the API
#[derive(Debug, Clone, Deserialize)]
pub struct MenuItemUpdateRequest {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<Decimal>,
    pub category: Option<String>,
    pub image_url: Option<String>,
    pub is_available: Option<bool>,
}

/// Validated partial update, merged into the stored record
#[derive(Debug, Clone, Serialize)]
pub struct MenuItemUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<MenuCategory>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_available: Option<bool>,
}
