use crate::datasource::DataSource;
use crate::error::DashboardError;
use crate::models::{
    CardSummary, Customer, CustomerTableRow, Invoice, InvoiceTableRow, LatestInvoiceView, Revenue,
};
use crate::service::query;
use std::sync::Arc;
use tracing::info;

/// 仪表盘查询服务: 每次请求取一份快照, 派生视图全部由纯函数算出
pub struct DashboardService {
    source: Arc<dyn DataSource>,
}

impl DashboardService {
    pub fn new(source: Arc<dyn DataSource>) -> Self {
        Self { source }
    }

    /// 并发获取发票+客户快照 (一次渲染周期只取一次)
    async fn snapshot(&self) -> Result<(Vec<Invoice>, Vec<Customer>), DashboardError> {
        let (invoices, customers) =
            futures::try_join!(self.source.list_invoices(), self.source.list_customers())?;
        Ok((invoices, customers))
    }

    pub async fn fetch_card_data(&self) -> Result<CardSummary, DashboardError> {
        let (invoices, customers) = self.snapshot().await?;
        Ok(query::summarize(&invoices, &customers))
    }

    pub async fn fetch_revenue(&self) -> Result<Vec<Revenue>, DashboardError> {
        Ok(self.source.list_revenue().await?)
    }

    pub async fn fetch_latest_invoices(&self) -> Result<Vec<LatestInvoiceView>, DashboardError> {
        let (invoices, customers) = self.snapshot().await?;
        Ok(query::latest_invoices(&invoices, &customers))
    }

    /// 发票表格: 过滤 + 分页, 总页数基于过滤后的行数
    pub async fn fetch_filtered_invoices(
        &self,
        search_query: &str,
        page: u32,
    ) -> Result<(Vec<InvoiceTableRow>, u64), DashboardError> {
        let (invoices, customers) = self.snapshot().await?;
        let rows = query::join_rows(&invoices, &customers);
        let matched = rows
            .iter()
            .filter(|row| query::row_matches(row, search_query))
            .count();
        let page_rows = query::search(&rows, search_query, page, query::ITEMS_PER_PAGE)?;
        let total_pages = query::page_count(matched, query::ITEMS_PER_PAGE)?;
        info!(
            "发票表格: 命中 {} 行, 返回第 {}/{} 页",
            matched, page, total_pages
        );
        Ok((page_rows, total_pages))
    }

    /// 按 id 查发票, 未命中返回 None 由调用方处理
    pub async fn fetch_invoice_by_id(&self, id: &str) -> Result<Option<Invoice>, DashboardError> {
        Ok(self.source.get_invoice(id).await?)
    }

    pub async fn fetch_customers(&self) -> Result<Vec<Customer>, DashboardError> {
        Ok(self.source.list_customers().await?)
    }

    pub async fn fetch_filtered_customers(
        &self,
        search_query: &str,
    ) -> Result<Vec<CustomerTableRow>, DashboardError> {
        let (invoices, customers) = self.snapshot().await?;
        Ok(query::filtered_customers(&customers, &invoices, search_query))
    }
}
