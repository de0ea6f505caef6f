//! Seed the menu catalog
//!
//! Run: cargo run --bin seed-menu

use menu_server::{CatalogLoader, Config, DbService, house_menu, setup_environment};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    setup_environment()?;

    tracing::info!("🌱 Seeding menu items...");

    let config = Config::from_env();
    let db_service = DbService::connect(&config).await?;

    let loader = CatalogLoader::new(db_service.db);
    let menu = house_menu();
    let summary = loader.reload(&menu).await?;

    if summary.is_complete() {
        tracing::info!("🎉 Successfully seeded {} menu items!", summary.processed);
    } else {
        tracing::warn!(
            loaded = summary.loaded,
            failed = summary.failed.len(),
            "Seeding finished with failures: {:?}",
            summary.failed
        );
    }

    Ok(())
}
