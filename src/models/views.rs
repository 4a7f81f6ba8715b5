use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// 最新发票视图 (仪表盘顶部列表, 取快照前5条)
/// 客户引用未命中时保留发票 id, 客户字段缺省
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LatestInvoiceView {
    pub id: String, // 发票 id (不被客户字段覆盖)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    pub amount: String, // 已格式化金额
}

/// 发票表格行 - 发票字段 + 关联客户字段的反规范化结果
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvoiceTableRow {
    pub id: String,
    pub customer_id: String,
    pub amount: i64, // 整数分, 输出边界再格式化
    pub status: String,
    pub date: NaiveDate,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

/// 卡片汇总 (发票数/客户数/已付/待付)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CardSummary {
    pub invoice_count: usize,
    pub customer_count: usize,
    pub total_paid: String,
    pub total_pending: String,
}

/// 客户表格行 - 每客户的发票数与待付/已付合计
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomerTableRow {
    pub id: String,
    pub name: String,
    pub email: String,
    pub image_url: String,
    pub total_invoices: i64,
    pub total_pending: String,
    pub total_paid: String,
}
