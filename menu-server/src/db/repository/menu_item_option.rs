//! Menu Item Option Repository

use surrealdb::Surreal;
use surrealdb::engine::any::Any;

use super::{BaseRepository, RepoResult};
use crate::db::models::{MenuItemId, MenuItemOption};

const TABLE: &str = "menu_item_option";

#[derive(Clone)]
pub struct MenuItemOptionRepository {
    base: BaseRepository,
}

impl MenuItemOptionRepository {
    pub fn new(db: Surreal<Any>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Find the options owned by one item, ordered by sort_order
    pub async fn find_by_item(&self, item_id: &MenuItemId) -> RepoResult<Vec<MenuItemOption>> {
        let options: Vec<MenuItemOption> = self
            .base
            .db()
            .query("SELECT * FROM menu_item_option WHERE menu_item = $item ORDER BY sort_order")
            .bind(("item", item_id.clone()))
            .await?
            .take(0)?;
        Ok(options)
    }

    /// Insert a batch of options in one round-trip
    pub async fn insert_batch(
        &self,
        options: Vec<MenuItemOption>,
    ) -> RepoResult<Vec<MenuItemOption>> {
        let created: Vec<MenuItemOption> = self.base.db().insert(TABLE).content(options).await?;
        Ok(created)
    }

    /// Delete every option row
    pub async fn delete_all(&self) -> RepoResult<()> {
        self.base
            .db()
            .query("DELETE menu_item_option")
            .await?
            .check()?;
        Ok(())
    }
}
