use serde::{Deserialize, Serialize};

/// 应用配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub datasource: DataSourceConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

/// 数据源配置: mode 选择适配器 (mock / remote / postgres)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataSourceConfig {
    pub mode: String,
    pub base_url: String,  // remote 模式的 mock API 根地址
    pub timeout_secs: u64, // remote 模式请求超时
    pub database_url: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 8080,
            },
            datasource: DataSourceConfig {
                mode: "mock".to_string(),
                base_url: "http://localhost:3001".to_string(),
                timeout_secs: 10,
                database_url: "postgres://localhost/invoice_dashboard".to_string(),
            },
        }
    }
}

impl AppConfig {
    /// 从环境变量加载配置, 缺省值同 Default
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            server: ServerConfig {
                host: std::env::var("SERVER_HOST").unwrap_or(defaults.server.host),
                port: std::env::var("SERVER_PORT")
                    .ok()
                    .and_then(|p| p.parse().ok())
                    .unwrap_or(defaults.server.port),
            },
            datasource: DataSourceConfig {
                mode: std::env::var("DATASOURCE_MODE").unwrap_or(defaults.datasource.mode),
                base_url: std::env::var("MOCKAPI_BASE_URL").unwrap_or(defaults.datasource.base_url),
                timeout_secs: std::env::var("DATASOURCE_TIMEOUT_SECS")
                    .ok()
                    .and_then(|t| t.parse().ok())
                    .unwrap_or(defaults.datasource.timeout_secs),
                database_url: std::env::var("DATABASE_URL")
                    .unwrap_or(defaults.datasource.database_url),
            },
        }
    }
}
