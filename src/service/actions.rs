use crate::datasource::DataSource;
use crate::models::{parse_invoice_form, FieldErrors, InvoiceDraft, InvoiceUpdate, NewInvoice};
use std::sync::Arc;
use tracing::{error, info};

/// 表单流程结果: 已保存 / 字段校验失败 / 目标不存在 / 持久化失败
#[derive(Debug)]
pub enum FormOutcome {
    Saved { message: String },
    Invalid { errors: FieldErrors, message: String },
    NotFound,
    StoreFailed { message: String },
}

/// 发票写入服务 (创建/更新表单流程)
pub struct InvoiceActions {
    source: Arc<dyn DataSource>,
}

impl InvoiceActions {
    pub fn new(source: Arc<dyn DataSource>) -> Self {
        Self { source }
    }

    /// 创建发票: 校验 -> 盖今天日期 -> 入库
    pub async fn create_invoice(&self, draft: &InvoiceDraft) -> FormOutcome {
        let valid = match parse_invoice_form(draft) {
            Ok(valid) => valid,
            Err(errors) => {
                return FormOutcome::Invalid {
                    errors,
                    message: "Missing Fields. Failed to Create Invoice.".to_string(),
                }
            }
        };

        let new = NewInvoice {
            customer_id: valid.customer_id,
            amount: valid.amount,
            status: valid.status,
            date: chrono::Local::now().date_naive(),
        };

        match self.source.insert_invoice(new).await {
            Ok(invoice) => {
                info!("Created invoice {}", invoice.id);
                FormOutcome::Saved {
                    message: "Created Invoice".to_string(),
                }
            }
            Err(e) => {
                error!("创建发票入库失败: {}", e);
                FormOutcome::StoreFailed {
                    message: "Database Error: Failed to Create Invoice.".to_string(),
                }
            }
        }
    }

    /// 更新发票: 校验 -> 按 id 覆写 (date 保留存量值)
    pub async fn update_invoice(&self, id: &str, draft: &InvoiceDraft) -> FormOutcome {
        let valid = match parse_invoice_form(draft) {
            Ok(valid) => valid,
            Err(errors) => {
                return FormOutcome::Invalid {
                    errors,
                    message: "Missing Fields. Failed to Update Invoice.".to_string(),
                }
            }
        };

        let update = InvoiceUpdate {
            customer_id: valid.customer_id,
            amount: valid.amount,
            status: valid.status,
        };

        match self.source.update_invoice(id, update).await {
            Ok(Some(invoice)) => {
                info!("Updated invoice {}", invoice.id);
                FormOutcome::Saved {
                    message: "Updated Invoice".to_string(),
                }
            }
            Ok(None) => FormOutcome::NotFound,
            Err(e) => {
                error!("更新发票入库失败: {}", e);
                FormOutcome::StoreFailed {
                    message: "Database Error: Failed to Update Invoice.".to_string(),
                }
            }
        }
    }
}
