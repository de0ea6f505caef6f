//! Menu API Handlers

use axum::{
    Json,
    extract::{Path, Query, State},
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::core::ServerState;
use crate::db::models::MenuItem;
use crate::db::repository::MenuItemRepository;
use crate::utils::{AppError, AppResult};

/// Query params for GET /menu/
#[derive(Debug, Deserialize)]
pub struct MenuQuery {
    /// Exact category match
    pub category: Option<String>,
    /// Availability flag match
    pub available: Option<bool>,
}

/// Wire representation of a menu item (record id flattened to a string)
#[derive(Debug, Serialize)]
pub struct MenuItemResponse {
    pub id: String,
    pub code: String,
    pub name: String,
    pub category: String,
    pub description: String,
    pub base_price: i64,
    pub available: bool,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl From<MenuItem> for MenuItemResponse {
    fn from(item: MenuItem) -> Self {
        Self {
            id: item.id.map(|id| id.to_string()).unwrap_or_default(),
            code: item.code,
            name: item.name,
            category: item.category,
            description: item.description,
            base_price: item.base_price,
            available: item.available,
            created_at: item.created_at,
            updated_at: item.updated_at,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct CategoriesResponse {
    pub categories: Vec<String>,
}

/// GET /menu/ - 获取菜单列表 (可按分类/可用性过滤, 按 code 排序)
pub async fn list(
    State(state): State<ServerState>,
    Query(params): Query<MenuQuery>,
) -> AppResult<Json<Vec<MenuItemResponse>>> {
    let repo = MenuItemRepository::new(state.db.clone());
    let items = repo
        .find_filtered(params.category, params.available)
        .await
        .map_err(|e| AppError::database(e.to_string()))?;

    Ok(Json(items.into_iter().map(|i| i.into()).collect()))
}

/// GET /menu/categories - 获取全部分类 (去重, 升序)
pub async fn categories(
    State(state): State<ServerState>,
) -> AppResult<Json<CategoriesResponse>> {
    let repo = MenuItemRepository::new(state.db.clone());
    let categories = repo
        .categories()
        .await
        .map_err(|e| AppError::database(e.to_string()))?;

    Ok(Json(CategoriesResponse { categories }))
}

/// GET /menu/:item_id - 获取单个菜单项
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(item_id): Path<String>,
) -> AppResult<Json<MenuItemResponse>> {
    let repo = MenuItemRepository::new(state.db.clone());
    let item = repo
        .find_by_id(&item_id)
        .await
        .map_err(|e| AppError::database(e.to_string()))?
        .ok_or_else(|| AppError::not_found("Menu item not found".to_string()))?;

    Ok(Json(item.into()))
}
