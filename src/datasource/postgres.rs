use crate::datasource::DataSource;
use crate::error::DataSourceError;
use crate::models::{Customer, Invoice, InvoiceUpdate, NewInvoice, Revenue};
use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

/// Postgres 数据源适配器
/// 快照按 date DESC, id 排序: 顺序确定 (分页前提), 且前 5 条即最新发票
pub struct PgDataSource {
    pool: PgPool,
}

impl PgDataSource {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl DataSource for PgDataSource {
    async fn list_invoices(&self) -> Result<Vec<Invoice>, DataSourceError> {
        let invoices = sqlx::query_as::<_, Invoice>(
            r#"
            SELECT id, customer_id, amount, status, date
            FROM invoices
            ORDER BY date DESC, id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(invoices)
    }

    async fn list_customers(&self) -> Result<Vec<Customer>, DataSourceError> {
        let customers = sqlx::query_as::<_, Customer>(
            r#"
            SELECT id, name, email, image_url
            FROM customers
            ORDER BY name, id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(customers)
    }

    async fn list_revenue(&self) -> Result<Vec<Revenue>, DataSourceError> {
        let revenue = sqlx::query_as::<_, Revenue>(
            r#"
            SELECT month, revenue
            FROM revenue
            "#,
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(revenue)
    }

    async fn get_invoice(&self, id: &str) -> Result<Option<Invoice>, DataSourceError> {
        let invoice = sqlx::query_as::<_, Invoice>(
            r#"
            SELECT id, customer_id, amount, status, date
            FROM invoices
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(invoice)
    }

    async fn insert_invoice(&self, new: NewInvoice) -> Result<Invoice, DataSourceError> {
        let id = Uuid::new_v4().to_string();
        let invoice = sqlx::query_as::<_, Invoice>(
            r#"
            INSERT INTO invoices (id, customer_id, amount, status, date)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, customer_id, amount, status, date
            "#,
        )
        .bind(&id)
        .bind(&new.customer_id)
        .bind(new.amount)
        .bind(&new.status)
        .bind(new.date)
        .fetch_one(&self.pool)
        .await?;
        Ok(invoice)
    }

    async fn update_invoice(
        &self,
        id: &str,
        update: InvoiceUpdate,
    ) -> Result<Option<Invoice>, DataSourceError> {
        let invoice = sqlx::query_as::<_, Invoice>(
            r#"
            UPDATE invoices
            SET customer_id = $2, amount = $3, status = $4
            WHERE id = $1
            RETURNING id, customer_id, amount, status, date
            "#,
        )
        .bind(id)
        .bind(&update.customer_id)
        .bind(update.amount)
        .bind(&update.status)
        .fetch_optional(&self.pool)
        .await?;
        Ok(invoice)
    }
}
