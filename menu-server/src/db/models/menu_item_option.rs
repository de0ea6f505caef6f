//! Menu Item Option Model

use serde::{Deserialize, Serialize};
use surrealdb::RecordId;

use super::MenuItemId;

/// Priced variant of a menu item ("With Rice", "Large", a beer brand)
///
/// `price` is an absolute amount, not a delta from the parent's
/// base_price.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuItemOption {
    pub id: Option<RecordId>,
    /// Record link to the owning menu_item
    pub menu_item: MenuItemId,
    pub label: String,
    pub price: i64,
    /// Display ordering among the parent's options; not required to be
    /// contiguous or unique
    #[serde(default)]
    pub sort_order: i32,
}
