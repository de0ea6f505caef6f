/// 服务器配置 - 菜单后端的所有配置项
///
/// # 环境变量
///
/// 所有配置项都可以通过环境变量覆盖：
///
/// | 环境变量 | 默认值 | 说明 |
/// |----------|--------|------|
/// | DB_ENDPOINT | rocksdb://./data/menu.db | 存储端点 (rocksdb:// 或 ws://) |
/// | DB_USERNAME | (空) | 远程存储用户名 |
/// | DB_PASSWORD | (空) | 远程存储访问密钥 |
/// | DB_NAMESPACE | menu | SurrealDB namespace |
/// | DB_DATABASE | menu | SurrealDB database |
/// | HTTP_PORT | 3000 | HTTP 服务端口 |
/// | ENVIRONMENT | development | 运行环境 |
///
/// # 示例
///
/// ```ignore
/// DB_ENDPOINT=ws://db.example.com:8000 DB_PASSWORD=secret cargo run
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// 存储端点，嵌入式 (rocksdb://path) 或远程 (ws://host:port)
    pub db_endpoint: String,
    /// 远程存储用户名 (嵌入式引擎不需要)
    pub db_username: Option<String>,
    /// 远程存储访问密钥 (嵌入式引擎不需要)
    pub db_password: Option<String>,
    /// SurrealDB namespace
    pub db_namespace: String,
    /// SurrealDB database
    pub db_database: String,
    /// HTTP API 服务端口
    pub http_port: u16,
    /// 运行环境: development | staging | production
    pub environment: String,
}

impl Config {
    /// 从环境变量加载配置
    ///
    /// 如果环境变量未设置，使用默认值
    pub fn from_env() -> Self {
        Self {
            db_endpoint: std::env::var("DB_ENDPOINT")
                .unwrap_or_else(|_| "rocksdb://./data/menu.db".into()),
            db_username: std::env::var("DB_USERNAME").ok().filter(|v| !v.is_empty()),
            db_password: std::env::var("DB_PASSWORD").ok().filter(|v| !v.is_empty()),
            db_namespace: std::env::var("DB_NAMESPACE").unwrap_or_else(|_| "menu".into()),
            db_database: std::env::var("DB_DATABASE").unwrap_or_else(|_| "menu".into()),
            http_port: std::env::var("HTTP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(3000),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),
        }
    }

    /// 使用自定义值覆盖部分配置
    ///
    /// 常用于测试场景
    pub fn with_overrides(db_endpoint: impl Into<String>, http_port: u16) -> Self {
        let mut config = Self::from_env();
        config.db_endpoint = db_endpoint.into();
        config.http_port = http_port;
        config
    }

    /// 是否生产环境
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    /// 是否开发环境
    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overrides_replace_endpoint_and_port() {
        let config = Config::with_overrides("mem://", 0);
        assert_eq!(config.db_endpoint, "mem://");
        assert_eq!(config.http_port, 0);
        assert_eq!(config.db_namespace, "menu");
    }
}
