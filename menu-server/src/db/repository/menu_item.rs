//! Menu Item Repository

use std::collections::BTreeSet;

use serde::Deserialize;
use surrealdb::Surreal;
use surrealdb::engine::any::Any;

use super::{BaseRepository, RepoError, RepoResult, strip_table_prefix};
use crate::db::models::MenuItem;

const TABLE: &str = "menu_item";

#[derive(Clone)]
pub struct MenuItemRepository {
    base: BaseRepository,
}

impl MenuItemRepository {
    pub fn new(db: Surreal<Any>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Find items with optional exact-match filters, ordered by code
    pub async fn find_filtered(
        &self,
        category: Option<String>,
        available: Option<bool>,
    ) -> RepoResult<Vec<MenuItem>> {
        // Build WHERE clauses with proper type bindings
        let mut conditions: Vec<&str> = Vec::new();
        if category.is_some() {
            conditions.push("category = $category");
        }
        if available.is_some() {
            conditions.push("available = $available");
        }

        let mut sql = String::from("SELECT * FROM menu_item");
        if !conditions.is_empty() {
            sql.push_str(" WHERE ");
            sql.push_str(&conditions.join(" AND "));
        }
        sql.push_str(" ORDER BY code");

        let mut query = self.base.db().query(sql);
        if let Some(v) = category {
            query = query.bind(("category", v));
        }
        if let Some(v) = available {
            query = query.bind(("available", v));
        }

        let items: Vec<MenuItem> = query.await?.take(0)?;
        Ok(items)
    }

    /// Find item by id
    pub async fn find_by_id(&self, id: &str) -> RepoResult<Option<MenuItem>> {
        // Extract pure id if it contains table prefix (e.g. "menu_item:xyz" -> "xyz")
        let pure_id = strip_table_prefix(TABLE, id);
        let item: Option<MenuItem> = self.base.db().select((TABLE, pure_id)).await?;
        Ok(item)
    }

    /// Distinct category strings, sorted ascending
    pub async fn categories(&self) -> RepoResult<Vec<String>> {
        #[derive(Deserialize)]
        struct Row {
            category: String,
        }

        let rows: Vec<Row> = self
            .base
            .db()
            .query("SELECT category FROM menu_item")
            .await?
            .take(0)?;

        let distinct: BTreeSet<String> = rows.into_iter().map(|r| r.category).collect();
        Ok(distinct.into_iter().collect())
    }

    /// Insert a new item, returning the created record (with generated id)
    ///
    /// `None` means the store reported no created row.
    pub async fn create(&self, item: MenuItem) -> RepoResult<Option<MenuItem>> {
        if item.base_price < 0 {
            return Err(RepoError::Validation(format!(
                "base_price cannot be negative for {}",
                item.code
            )));
        }

        let created: Option<MenuItem> = self.base.db().create(TABLE).content(item).await?;
        Ok(created)
    }

    /// Delete every item row
    pub async fn delete_all(&self) -> RepoResult<()> {
        self.base.db().query("DELETE menu_item").await?.check()?;
        Ok(())
    }
}
