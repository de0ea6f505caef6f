//! Server Error Types

use crate::utils::AppError;

/// 服务器级错误 (启动/运行期)
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    /// 初始化失败 (配置、数据库连接)
    #[error("Startup error: {0}")]
    Startup(#[from] AppError),

    /// IO 错误 (端口绑定、serve)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for server operations
pub type Result<T> = std::result::Result<T, ServerError>;
