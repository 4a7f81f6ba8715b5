pub mod api;
pub mod config;
pub mod datasource;
pub mod error;
pub mod format;
pub mod models;
pub mod service;

pub use config::AppConfig;
pub use datasource::{create_pool, DataSource, MockDataSource, PgDataSource, RemoteDataSource};
pub use error::{DashboardError, DataSourceError};
pub use service::{DashboardService, InvoiceActions};
