//! Repository Module
//!
//! Provides store access for the menu tables.

pub mod menu_item;
pub mod menu_item_option;

// Re-exports
pub use menu_item::MenuItemRepository;
pub use menu_item_option::MenuItemOptionRepository;

use surrealdb::Surreal;
use surrealdb::engine::any::Any;
use thiserror::Error;

/// Repository error types
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Database error: {0}")]
    Database(String),

    #[error("Validation error: {0}")]
    Validation(String),
}

impl From<surrealdb::Error> for RepoError {
    fn from(err: surrealdb::Error) -> Self {
        RepoError::Database(err.to_string())
    }
}

/// Result type for repository operations
pub type RepoResult<T> = Result<T, RepoError>;

/// Base repository with database reference
#[derive(Clone)]
pub struct BaseRepository {
    db: Surreal<Any>,
}

impl BaseRepository {
    pub fn new(db: Surreal<Any>) -> Self {
        Self { db }
    }

    pub fn db(&self) -> &Surreal<Any> {
        &self.db
    }
}

/// Extract the pure record key if `id` carries a "table:" prefix
/// (e.g. "menu_item:xyz" -> "xyz")
pub fn strip_table_prefix<'a>(table: &str, id: &'a str) -> &'a str {
    id.strip_prefix(table)
        .and_then(|rest| rest.strip_prefix(':'))
        .unwrap_or(id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_prefix_only_for_matching_table() {
        assert_eq!(strip_table_prefix("menu_item", "menu_item:abc"), "abc");
        assert_eq!(strip_table_prefix("menu_item", "abc"), "abc");
        assert_eq!(
            strip_table_prefix("menu_item", "menu_item_option:abc"),
            "menu_item_option:abc"
        );
    }
}
