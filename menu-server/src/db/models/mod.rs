//! Database Models

pub mod menu_item;
pub mod menu_item_option;

pub use menu_item::{MenuItem, MenuItemId};
pub use menu_item_option::MenuItemOption;
