//! Database Module
//!
//! Handles the SurrealDB connection and table/index definitions

pub mod models;
pub mod repository;

use surrealdb::Surreal;
use surrealdb::engine::any::Any;
use surrealdb::opt::auth::Root;

use crate::core::Config;
use crate::utils::AppError;

/// Database service — owns the SurrealDB handle
///
/// 通过 `any` 引擎统一支持三种端点：
/// - `rocksdb://path` 嵌入式存储 (默认)
/// - `ws://host:port` 远程存储 (需要 DB_USERNAME/DB_PASSWORD)
/// - `mem://` 内存存储 (测试)
#[derive(Clone)]
pub struct DbService {
    pub db: Surreal<Any>,
}

impl DbService {
    /// Connect to the store configured in [`Config`] and select ns/db
    pub async fn connect(config: &Config) -> Result<Self, AppError> {
        let db = surrealdb::engine::any::connect(config.db_endpoint.as_str())
            .await
            .map_err(|e| {
                AppError::database(format!(
                    "Failed to connect to {}: {e}",
                    config.db_endpoint
                ))
            })?;

        // Remote endpoints require credentials; embedded engines don't
        if let (Some(username), Some(password)) = (&config.db_username, &config.db_password) {
            db.signin(Root {
                username: username.as_str(),
                password: password.as_str(),
            })
            .await
            .map_err(|e| AppError::database(format!("Authentication failed: {e}")))?;
        }

        db.use_ns(config.db_namespace.as_str())
            .use_db(config.db_database.as_str())
            .await
            .map_err(|e| AppError::database(format!("Failed to select namespace: {e}")))?;

        tracing::info!(
            endpoint = %config.db_endpoint,
            ns = %config.db_namespace,
            "Database connection established"
        );

        Self::define_schema(&db).await?;

        Ok(Self { db })
    }

    /// Idempotent table and index definitions
    ///
    /// `code` index is non-unique: duplicate codes are representable
    async fn define_schema(db: &Surreal<Any>) -> Result<(), AppError> {
        db.query(
            "DEFINE TABLE IF NOT EXISTS menu_item SCHEMALESS;
             DEFINE TABLE IF NOT EXISTS menu_item_option SCHEMALESS;
             DEFINE INDEX IF NOT EXISTS menu_item_code ON menu_item FIELDS code;
             DEFINE INDEX IF NOT EXISTS menu_item_option_parent ON menu_item_option FIELDS menu_item;",
        )
        .await
        .map_err(|e| AppError::database(format!("Failed to define schema: {e}")))?
        .check()
        .map_err(|e| AppError::database(format!("Failed to define schema: {e}")))?;

        tracing::info!("Database schema definitions applied");
        Ok(())
    }
}
