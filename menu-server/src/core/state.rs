use surrealdb::Surreal;
use surrealdb::engine::any::Any;

use crate::core::Config;
use crate::db::DbService;
use crate::utils::AppError;

/// 服务器状态 - 持有配置和数据库句柄
///
/// ServerState 是所有 HTTP 处理器共享的状态。
/// 数据库句柄克隆成本极低，直接按值持有。
///
/// # 使用示例
///
/// ```ignore
/// let state = ServerState::initialize(&config).await?;
/// let db = state.get_db();
/// ```
#[derive(Clone, Debug)]
pub struct ServerState {
    /// 服务器配置
    pub config: Config,
    /// 数据库句柄 (SurrealDB, any engine)
    pub db: Surreal<Any>,
}

impl ServerState {
    /// 创建服务器状态 (手动构造)
    ///
    /// 通常使用 [`ServerState::initialize`] 代替；测试中可直接注入
    /// 内存数据库句柄
    pub fn new(config: Config, db: Surreal<Any>) -> Self {
        Self { config, db }
    }

    /// 初始化服务器状态
    ///
    /// 连接配置指定的存储端点并选择 namespace/database
    pub async fn initialize(config: &Config) -> Result<Self, AppError> {
        let db_service = DbService::connect(config).await?;
        Ok(Self::new(config.clone(), db_service.db))
    }

    /// 获取数据库实例
    pub fn get_db(&self) -> Surreal<Any> {
        self.db.clone()
    }
}
