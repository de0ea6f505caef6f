//! Menu Item Model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use surrealdb::RecordId;

pub type MenuItemId = RecordId;

/// Menu item record
///
/// `code` is the stable hand-assigned catalog key ("G1", "BKT3") shown
/// on the printed menu; `id` is the store-generated identifier options
/// join against. The two are distinct on purpose.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuItem {
    pub id: Option<MenuItemId>,
    pub code: String,
    pub name: String,
    /// Open string enumeration ("grilled", "seafood", ...); any value
    /// is accepted
    pub category: String,
    #[serde(default)]
    pub description: String,
    /// Whole major-unit amount. For items with options this may be a
    /// placeholder; the option price is the authoritative charge
    pub base_price: i64,
    #[serde(default = "default_true")]
    pub available: bool,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

fn default_true() -> bool {
    true
}
