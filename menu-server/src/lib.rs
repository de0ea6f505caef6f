//! Menu Server - 餐厅菜单管理后端
//!
//! # 架构概述
//!
//! 本模块是 Menu Server 的主入口，提供以下核心功能：
//!
//! - **菜单目录** (`catalog`): 静态菜单定义和全量重载 (seed)
//! - **数据库** (`db`): SurrealDB 存储（嵌入式或远程）
//! - **HTTP API** (`api`): 只读菜单查询接口
//!
//! # 模块结构
//!
//! ```text
//! menu-server/src/
//! ├── core/          # 配置、状态、服务器
//! ├── api/           # HTTP 路由和处理器
//! ├── catalog/       # 菜单定义与加载器
//! ├── db/            # 数据库层 (models + repository)
//! └── utils/         # 错误、日志
//! ```

pub mod api;
pub mod catalog;
pub mod core;
pub mod db;
pub mod utils;

// Re-export 公共类型
pub use catalog::{CatalogEntry, CatalogLoader, OptionDef, ReloadSummary, house_menu};
pub use crate::core::{Config, Server, ServerState};
pub use db::DbService;
pub use utils::{AppError, AppResult};

// Re-export logger functions
pub use utils::logger::{init_logger, init_logger_with_file};

/// 设置进程环境: .env 加载 + 日志初始化
///
/// 必须在读取 [`Config`] 之前调用，否则 .env 中的变量不生效
pub fn setup_environment() -> std::io::Result<()> {
    // Load .env if present (ignore if missing)
    dotenv::dotenv().ok();

    let log_level = std::env::var("LOG_LEVEL").ok();
    let log_dir = std::env::var("LOG_DIR").ok();
    init_logger_with_file(log_level.as_deref(), log_dir.as_deref());

    Ok(())
}

pub fn print_banner() {
    println!(
        r#"
    __  ___
   /  |/  /__  ____  __  __
  / /|_/ / _ \/ __ \/ / / /
 / /  / /  __/ / / / /_/ /
/_/  /_/\___/_/ /_/\__,_/
   _____
  / ___/___  ______   _____  _____
  \__ \/ _ \/ ___/ | / / _ \/ ___/
 ___/ /  __/ /   | |/ /  __/ /
/____/\___/_/    |___/\___/_/
    "#
    );
}
