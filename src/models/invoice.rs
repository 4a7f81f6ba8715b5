use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// 发票状态: 校验边界只接受这两个值, 读路径容忍其他取值
pub const STATUS_PENDING: &str = "pending";
pub const STATUS_PAID: &str = "paid";

/// 发票 (Invoice)
#[derive(Debug, Clone, PartialEq, FromRow, Serialize, Deserialize)]
pub struct Invoice {
    pub id: String,
    pub customer_id: String, // 外键 -> Customer.id
    pub amount: i64,         // 金额 (整数分)
    pub status: String,      // pending / paid
    pub date: NaiveDate,
}

/// 客户 (Customer) - 本服务内只读
#[derive(Debug, Clone, PartialEq, FromRow, Serialize, Deserialize)]
pub struct Customer {
    pub id: String,
    pub name: String,
    pub email: String,
    pub image_url: String,
}

/// 月度营收 (Revenue) - 图表数据, 只读
#[derive(Debug, Clone, PartialEq, FromRow, Serialize, Deserialize)]
pub struct Revenue {
    pub month: String,
    pub revenue: i64,
}

/// 新建发票 (id 和 date 由服务端分配)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewInvoice {
    pub customer_id: String,
    pub amount: i64,
    pub status: String,
    pub date: NaiveDate,
}

/// 发票更新 (date 保留存量值)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvoiceUpdate {
    pub customer_id: String,
    pub amount: i64,
    pub status: String,
}
