//! Menu read API integration tests
//!
//! Drive the assembled router directly against an in-memory store.

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use menu_server::catalog::{CatalogLoader, house_menu};
use menu_server::core::{Config, Server, ServerState};
use menu_server::db::DbService;
use serde_json::Value;
use tower::util::ServiceExt;

async fn test_app() -> Router {
    let config = Config::with_overrides("mem://", 0);
    let db = DbService::connect(&config).await.unwrap().db;

    CatalogLoader::new(db.clone())
        .reload(&house_menu())
        .await
        .unwrap();

    Server::router(ServerState::new(config, db))
}

async fn get_json(app: &Router, uri: &str) -> (StatusCode, Value) {
    let response = app
        .clone()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let value = serde_json::from_slice(&bytes).unwrap();
    (status, value)
}

#[tokio::test]
async fn list_returns_all_items_ordered_by_code() {
    let app = test_app().await;
    let (status, body) = get_json(&app, "/menu/").await;

    assert_eq!(status, StatusCode::OK);
    let items = body.as_array().unwrap();
    assert_eq!(items.len(), house_menu().len());

    let codes: Vec<&str> = items.iter().map(|i| i["code"].as_str().unwrap()).collect();
    let mut sorted = codes.clone();
    sorted.sort();
    assert_eq!(codes, sorted);
    assert_eq!(codes[0], "A1");
}

#[tokio::test]
async fn list_filters_by_category() {
    let app = test_app().await;
    let (status, body) = get_json(&app, "/menu/?category=grilled").await;

    assert_eq!(status, StatusCode::OK);
    let items = body.as_array().unwrap();
    let codes: Vec<&str> = items.iter().map(|i| i["code"].as_str().unwrap()).collect();
    assert_eq!(codes, ["G1", "G2", "G3", "G4"]);
    assert!(
        items
            .iter()
            .all(|i| i["category"].as_str().unwrap() == "grilled")
    );
}

#[tokio::test]
async fn list_filters_by_availability() {
    let app = test_app().await;

    // The loader marks everything available on creation
    let (_, body) = get_json(&app, "/menu/?available=true").await;
    assert_eq!(body.as_array().unwrap().len(), house_menu().len());

    let (status, body) = get_json(&app, "/menu/?available=false").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn categories_are_deduplicated_and_sorted() {
    let app = test_app().await;
    let (status, body) = get_json(&app, "/menu/categories").await;

    assert_eq!(status, StatusCode::OK);
    let categories: Vec<&str> = body["categories"]
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c.as_str().unwrap())
        .collect();
    assert_eq!(
        categories,
        [
            "alcohol",
            "appetizers",
            "bestsellers",
            "buckets",
            "coffee",
            "grilled",
            "lemonade",
            "nonalcohol",
            "noodles",
            "seafood",
            "silog",
            "smoothies",
            "soup",
        ]
    );
}

#[tokio::test]
async fn get_by_id_returns_single_item() {
    let app = test_app().await;
    let (_, body) = get_json(&app, "/menu/?category=appetizers").await;
    let fries = &body.as_array().unwrap()[0];
    let id = fries["id"].as_str().unwrap();
    assert!(id.starts_with("menu_item:"));

    let (status, item) = get_json(&app, &format!("/menu/{id}")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(item["code"], "A1");
    assert_eq!(item["name"], "French Fries");
    assert_eq!(item["base_price"], 80);
    assert_eq!(item["available"], true);
}

#[tokio::test]
async fn get_by_id_missing_row_is_not_found() {
    let app = test_app().await;
    let (status, body) = get_json(&app, "/menu/nonexistent").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "E0003");
    assert_eq!(body["message"], "Menu item not found");
}

#[tokio::test]
async fn health_reports_ok() {
    let app = test_app().await;
    let (status, body) = get_json(&app, "/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
}
