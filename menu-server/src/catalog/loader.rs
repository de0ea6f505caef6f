//! Catalog Loader
//!
//! Destructive full refresh of the menu tables from a catalog
//! definition. Sequential, one item at a time; a failed item insert
//! skips that item's options and the run continues.

use std::collections::HashSet;

use chrono::Utc;
use surrealdb::Surreal;
use surrealdb::engine::any::Any;

use crate::catalog::definition::CatalogEntry;
use crate::db::models::{MenuItem, MenuItemOption};
use crate::db::repository::{MenuItemOptionRepository, MenuItemRepository, RepoResult};

/// Outcome of one reload run
///
/// `processed` counts definition entries, `loaded` the items that got a
/// generated id, `failed` the codes that did not.
#[derive(Debug, Clone)]
pub struct ReloadSummary {
    pub processed: usize,
    pub loaded: usize,
    pub failed: Vec<String>,
}

impl ReloadSummary {
    pub fn is_complete(&self) -> bool {
        self.failed.is_empty()
    }
}

pub struct CatalogLoader {
    items: MenuItemRepository,
    options: MenuItemOptionRepository,
}

impl CatalogLoader {
    pub fn new(db: Surreal<Any>) -> Self {
        Self {
            items: MenuItemRepository::new(db.clone()),
            options: MenuItemOptionRepository::new(db),
        }
    }

    /// Replace the stored catalog with `entries`
    ///
    /// 1. Clear options, then items (ownership order; no FK cascade
    ///    assumed).
    /// 2. Insert each entry in sequence; when the store returns a
    ///    created row, batch-insert its options tagged with the
    ///    generated id.
    /// 3. An entry whose insert reports no created row is logged,
    ///    recorded in the summary, and skipped.
    ///
    /// Store failures (unreachable, auth) propagate to the caller; no
    /// retry, no transaction. Run twice with the same definition the
    /// store ends up with exactly one item per entry.
    pub async fn reload(&self, entries: &[CatalogEntry]) -> RepoResult<ReloadSummary> {
        warn_duplicate_codes(entries);

        tracing::info!("🧹 Clearing existing menu...");
        self.options.delete_all().await?;
        self.items.delete_all().await?;

        let mut summary = ReloadSummary {
            processed: entries.len(),
            loaded: 0,
            failed: Vec::new(),
        };

        for entry in entries {
            let now = Utc::now();
            let record = MenuItem {
                id: None,
                code: entry.code.clone(),
                name: entry.name.clone(),
                category: entry.category.clone(),
                description: entry.description.clone(),
                base_price: entry.base_price,
                available: true,
                created_at: Some(now),
                updated_at: Some(now),
            };

            let created = self.items.create(record).await?;
            match created.and_then(|item| item.id) {
                Some(item_id) => {
                    if !entry.options.is_empty() {
                        let batch: Vec<MenuItemOption> = entry
                            .options
                            .iter()
                            .map(|opt| MenuItemOption {
                                id: None,
                                menu_item: item_id.clone(),
                                label: opt.label.clone(),
                                price: opt.price,
                                sort_order: opt.sort_order,
                            })
                            .collect();
                        let inserted = self.options.insert_batch(batch).await?;
                        tracing::debug!(code = %entry.code, options = inserted.len(), "Added options");
                    }
                    tracing::info!("✅ Added {} - {}", entry.code, entry.name);
                    summary.loaded += 1;
                }
                None => {
                    tracing::error!("❌ Failed to add item: {} - {}", entry.code, entry.name);
                    summary.failed.push(entry.code.clone());
                }
            }
        }

        tracing::info!("🎉 Seeded {} menu entries", summary.processed);
        Ok(summary)
    }
}

/// Duplicate codes are representable on purpose; surface them anyway
fn warn_duplicate_codes(entries: &[CatalogEntry]) {
    let mut seen = HashSet::new();
    for entry in entries {
        if !seen.insert(entry.code.as_str()) {
            tracing::warn!(code = %entry.code, "Duplicate code in catalog definition");
        }
    }
}
