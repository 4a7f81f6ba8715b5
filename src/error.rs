use thiserror::Error;

/// 数据源错误 - 快照获取失败时原样向上传播, 本服务不重试
#[derive(Debug, Error)]
pub enum DataSourceError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
    #[error("remote api error: {0}")]
    Remote(#[from] reqwest::Error),
    #[error("store error: {0}")]
    Store(String),
}

/// 查询层错误
#[derive(Debug, Error)]
pub enum DashboardError {
    #[error("data source unavailable: {0}")]
    DataSource(#[from] DataSourceError),
    /// 分页参数违反前置条件 (page 和 page_size 都必须 >= 1)
    #[error("invalid page arguments: page={page}, page_size={page_size}")]
    InvalidPageArgs { page: u32, page_size: u32 },
}
