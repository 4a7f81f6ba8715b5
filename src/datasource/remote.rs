use crate::datasource::DataSource;
use crate::error::DataSourceError;
use crate::models::{Customer, Invoice, InvoiceUpdate, NewInvoice, Revenue};
use async_trait::async_trait;
use reqwest::StatusCode;
use std::time::Duration;

/// mock API 数据源适配器
/// 路由表与原 mock 服务一致: {base_url}/invoices, /customers, /revenue
pub struct RemoteDataSource {
    client: reqwest::Client,
    base_url: String,
}

impl RemoteDataSource {
    pub fn new(base_url: &str, timeout_secs: u64) -> Result<Self, DataSourceError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    fn route(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }
}

#[async_trait]
impl DataSource for RemoteDataSource {
    async fn list_invoices(&self) -> Result<Vec<Invoice>, DataSourceError> {
        let invoices = self
            .client
            .get(self.route("invoices"))
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        Ok(invoices)
    }

    async fn list_customers(&self) -> Result<Vec<Customer>, DataSourceError> {
        let customers = self
            .client
            .get(self.route("customers"))
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        Ok(customers)
    }

    async fn list_revenue(&self) -> Result<Vec<Revenue>, DataSourceError> {
        let revenue = self
            .client
            .get(self.route("revenue"))
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        Ok(revenue)
    }

    async fn get_invoice(&self, id: &str) -> Result<Option<Invoice>, DataSourceError> {
        let response = self
            .client
            .get(self.route(&format!("invoices/{}", id)))
            .send()
            .await?;
        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        let invoice = response.error_for_status()?.json().await?;
        Ok(Some(invoice))
    }

    async fn insert_invoice(&self, new: NewInvoice) -> Result<Invoice, DataSourceError> {
        let invoice = self
            .client
            .post(self.route("invoices"))
            .json(&new)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        Ok(invoice)
    }

    async fn update_invoice(
        &self,
        id: &str,
        update: InvoiceUpdate,
    ) -> Result<Option<Invoice>, DataSourceError> {
        let response = self
            .client
            .put(self.route(&format!("invoices/{}", id)))
            .json(&update)
            .send()
            .await?;
        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        let invoice = response.error_for_status()?.json().await?;
        Ok(Some(invoice))
    }
}
