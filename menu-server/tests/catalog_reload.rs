//! Catalog loader integration tests
//!
//! Run against an in-memory SurrealDB instance via the `any` engine.

use menu_server::catalog::{CatalogEntry, CatalogLoader, OptionDef, house_menu};
use menu_server::core::Config;
use menu_server::db::DbService;
use menu_server::db::repository::{MenuItemOptionRepository, MenuItemRepository};
use surrealdb::Surreal;
use surrealdb::engine::any::Any;

async fn mem_db() -> Surreal<Any> {
    let config = Config::with_overrides("mem://", 0);
    DbService::connect(&config).await.unwrap().db
}

fn fries() -> CatalogEntry {
    CatalogEntry {
        code: "A1".into(),
        name: "French Fries".into(),
        category: "appetizers".into(),
        description: "Crispy golden fries".into(),
        base_price: 80,
        options: vec![
            OptionDef {
                label: "Small".into(),
                price: 80,
                sort_order: 1,
            },
            OptionDef {
                label: "Large".into(),
                price: 200,
                sort_order: 3,
            },
        ],
    }
}

fn lemonade() -> CatalogEntry {
    CatalogEntry {
        code: "L2".into(),
        name: "Lemonade".into(),
        category: "lemonade".into(),
        description: String::new(),
        base_price: 100,
        options: vec![],
    }
}

#[tokio::test]
async fn options_round_trip_with_parent_id() {
    let db = mem_db().await;
    let loader = CatalogLoader::new(db.clone());

    let summary = loader.reload(&[fries()]).await.unwrap();
    assert_eq!(summary.processed, 1);
    assert_eq!(summary.loaded, 1);
    assert!(summary.is_complete());

    let items = MenuItemRepository::new(db.clone());
    let stored = items.find_filtered(None, None).await.unwrap();
    assert_eq!(stored.len(), 1);

    let item = &stored[0];
    assert_eq!(item.code, "A1");
    assert_eq!(item.base_price, 80);
    assert!(item.available);
    assert!(item.created_at.is_some());

    // Options come back tagged with the generated id, ordered by sort_order
    let options = MenuItemOptionRepository::new(db)
        .find_by_item(item.id.as_ref().unwrap())
        .await
        .unwrap();
    assert_eq!(options.len(), 2);
    assert_eq!(options[0].label, "Small");
    assert_eq!(options[0].price, 80);
    assert_eq!(options[1].label, "Large");
    assert_eq!(options[1].price, 200);
}

#[tokio::test]
async fn single_priced_item_has_no_options() {
    let db = mem_db().await;
    let loader = CatalogLoader::new(db.clone());

    loader.reload(&[lemonade()]).await.unwrap();

    let items = MenuItemRepository::new(db.clone());
    let stored = items.find_filtered(None, None).await.unwrap();
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].description, "");

    let options = MenuItemOptionRepository::new(db)
        .find_by_item(stored[0].id.as_ref().unwrap())
        .await
        .unwrap();
    assert!(options.is_empty());
}

#[tokio::test]
async fn reload_twice_does_not_duplicate() {
    let db = mem_db().await;
    let loader = CatalogLoader::new(db.clone());

    let definition = [fries(), lemonade()];
    loader.reload(&definition).await.unwrap();
    loader.reload(&definition).await.unwrap();

    let items = MenuItemRepository::new(db.clone());
    let stored = items.find_filtered(None, None).await.unwrap();
    assert_eq!(stored.len(), 2);

    // Option rows were cleared and re-inserted, not accumulated
    let with_options = stored.iter().find(|i| i.code == "A1").unwrap();
    let options = MenuItemOptionRepository::new(db)
        .find_by_item(with_options.id.as_ref().unwrap())
        .await
        .unwrap();
    assert_eq!(options.len(), 2);
}

#[tokio::test]
async fn duplicate_codes_both_persist() {
    let db = mem_db().await;
    let loader = CatalogLoader::new(db.clone());

    let mut twin = lemonade();
    twin.name = "Lemonade (second)".into();
    let summary = loader.reload(&[lemonade(), twin]).await.unwrap();
    assert_eq!(summary.loaded, 2);

    let stored = MenuItemRepository::new(db)
        .find_filtered(None, None)
        .await
        .unwrap();
    assert_eq!(stored.len(), 2);
    assert!(stored.iter().all(|i| i.code == "L2"));
}

#[tokio::test]
async fn full_house_menu_loads() {
    let db = mem_db().await;
    let loader = CatalogLoader::new(db.clone());

    let menu = house_menu();
    let summary = loader.reload(&menu).await.unwrap();
    assert_eq!(summary.processed, menu.len());
    assert_eq!(summary.loaded, menu.len());
    assert!(summary.is_complete());

    let items = MenuItemRepository::new(db);
    let stored = items.find_filtered(None, None).await.unwrap();
    assert_eq!(stored.len(), menu.len());

    let categories = items.categories().await.unwrap();
    assert_eq!(categories.len(), 13);
    let mut sorted = categories.clone();
    sorted.sort();
    assert_eq!(categories, sorted);
}

#[tokio::test]
async fn category_filter_orders_by_code() {
    let db = mem_db().await;
    let loader = CatalogLoader::new(db.clone());
    loader.reload(&house_menu()).await.unwrap();

    let items = MenuItemRepository::new(db);
    let grilled = items
        .find_filtered(Some("grilled".into()), None)
        .await
        .unwrap();
    let codes: Vec<&str> = grilled.iter().map(|i| i.code.as_str()).collect();
    assert_eq!(codes, ["G1", "G2", "G3", "G4"]);
    assert!(grilled.iter().all(|i| i.category == "grilled"));
}
