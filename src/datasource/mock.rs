use crate::datasource::{fixtures, DataSource};
use crate::error::DataSourceError;
use crate::models::{Customer, Invoice, InvoiceUpdate, NewInvoice, Revenue};
use async_trait::async_trait;
use indexmap::IndexMap;
use std::sync::RwLock;
use uuid::Uuid;

/// 内存数据源
/// 发票放在保序 Map 里 (迭代顺序 = 播种/插入顺序), 快照顺序因此确定,
/// 分页才有意义; 客户与营收只读, 不加锁
pub struct MockDataSource {
    invoices: RwLock<IndexMap<String, Invoice>>,
    customers: Vec<Customer>,
    revenue: Vec<Revenue>,
}

impl MockDataSource {
    pub fn new(invoices: Vec<Invoice>, customers: Vec<Customer>, revenue: Vec<Revenue>) -> Self {
        let invoices = invoices
            .into_iter()
            .map(|invoice| (invoice.id.clone(), invoice))
            .collect();
        Self {
            invoices: RwLock::new(invoices),
            customers,
            revenue,
        }
    }

    /// 以占位数据集播种
    pub fn with_fixtures() -> Self {
        Self::new(
            fixtures::invoices(),
            fixtures::customers(),
            fixtures::revenue(),
        )
    }

    fn read_invoices(
        &self,
    ) -> Result<std::sync::RwLockReadGuard<'_, IndexMap<String, Invoice>>, DataSourceError> {
        self.invoices
            .read()
            .map_err(|e| DataSourceError::Store(format!("invoice lock poisoned: {}", e)))
    }

    fn write_invoices(
        &self,
    ) -> Result<std::sync::RwLockWriteGuard<'_, IndexMap<String, Invoice>>, DataSourceError> {
        self.invoices
            .write()
            .map_err(|e| DataSourceError::Store(format!("invoice lock poisoned: {}", e)))
    }
}

#[async_trait]
impl DataSource for MockDataSource {
    async fn list_invoices(&self) -> Result<Vec<Invoice>, DataSourceError> {
        let invoices = self.read_invoices()?;
        Ok(invoices.values().cloned().collect())
    }

    async fn list_customers(&self) -> Result<Vec<Customer>, DataSourceError> {
        Ok(self.customers.clone())
    }

    async fn list_revenue(&self) -> Result<Vec<Revenue>, DataSourceError> {
        Ok(self.revenue.clone())
    }

    async fn get_invoice(&self, id: &str) -> Result<Option<Invoice>, DataSourceError> {
        let invoices = self.read_invoices()?;
        Ok(invoices.get(id).cloned())
    }

    async fn insert_invoice(&self, new: NewInvoice) -> Result<Invoice, DataSourceError> {
        let invoice = Invoice {
            id: Uuid::new_v4().to_string(),
            customer_id: new.customer_id,
            amount: new.amount,
            status: new.status,
            date: new.date,
        };
        let mut invoices = self.write_invoices()?;
        invoices.insert(invoice.id.clone(), invoice.clone());
        Ok(invoice)
    }

    async fn update_invoice(
        &self,
        id: &str,
        update: InvoiceUpdate,
    ) -> Result<Option<Invoice>, DataSourceError> {
        let mut invoices = self.write_invoices()?;
        let Some(invoice) = invoices.get_mut(id) else {
            return Ok(None);
        };
        invoice.customer_id = update.customer_id;
        invoice.amount = update.amount;
        invoice.status = update.status;
        Ok(Some(invoice.clone()))
    }
}
