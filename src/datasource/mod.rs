use crate::error::DataSourceError;
use crate::models::{Customer, Invoice, InvoiceUpdate, NewInvoice, Revenue};
use async_trait::async_trait;

pub mod fixtures;
pub mod mock;
pub mod pool;
pub mod postgres;
pub mod remote;

pub use mock::MockDataSource;
pub use pool::create_pool;
pub use postgres::PgDataSource;
pub use remote::RemoteDataSource;

/// 数据源边界: 提供发票/客户/营收序列与发票写入
/// 返回的序列是点时快照, 一次渲染周期内视为不可变
#[async_trait]
pub trait DataSource: Send + Sync {
    async fn list_invoices(&self) -> Result<Vec<Invoice>, DataSourceError>;
    async fn list_customers(&self) -> Result<Vec<Customer>, DataSourceError>;
    async fn list_revenue(&self) -> Result<Vec<Revenue>, DataSourceError>;
    /// 按 id 查发票, 未命中返回 None (不降级为空对象)
    async fn get_invoice(&self, id: &str) -> Result<Option<Invoice>, DataSourceError>;
    /// 入库新发票, id 由数据源分配
    async fn insert_invoice(&self, new: NewInvoice) -> Result<Invoice, DataSourceError>;
    /// 覆写发票 (date 保留存量值), 未命中返回 None
    async fn update_invoice(
        &self,
        id: &str,
        update: InvoiceUpdate,
    ) -> Result<Option<Invoice>, DataSourceError>;
}
