//! 查询/聚合核心: 对一份快照做纯函数变换
//!
//! 所有函数无副作用, 不缓存任何派生结果; 输出顺序由输入顺序决定,
//! 过滤与分页都不重排序

use crate::error::DashboardError;
use crate::format::format_currency;
use crate::models::{
    CardSummary, Customer, CustomerTableRow, Invoice, InvoiceTableRow, LatestInvoiceView,
    STATUS_PAID, STATUS_PENDING,
};
use indexmap::IndexMap;
use std::collections::HashMap;

/// 发票表格每页行数
pub const ITEMS_PER_PAGE: u32 = 6;

/// "最新发票"视图条数
pub const LATEST_COUNT: usize = 5;

/// 卡片汇总: 数量 + 按状态聚合的金额
/// 金额按整数分累加, 只在出口处格式化一次; pending/paid 之外的状态不计入任何一侧
pub fn summarize(invoices: &[Invoice], customers: &[Customer]) -> CardSummary {
    let mut total_paid: i64 = 0;
    let mut total_pending: i64 = 0;
    for invoice in invoices {
        match invoice.status.as_str() {
            STATUS_PAID => total_paid += invoice.amount,
            STATUS_PENDING => total_pending += invoice.amount,
            _ => {}
        }
    }
    CardSummary {
        invoice_count: invoices.len(),
        customer_count: customers.len(),
        total_paid: format_currency(total_paid),
        total_pending: format_currency(total_pending),
    }
}

/// 客户索引: id -> Customer, 每份快照构建一次, 连接降为 O(n+m)
pub fn customer_index(customers: &[Customer]) -> IndexMap<&str, &Customer> {
    customers
        .iter()
        .map(|customer| (customer.id.as_str(), customer))
        .collect()
}

/// 反规范化连接: 每张发票叠加其客户的 name/email/image_url
/// 输出保持发票输入顺序, 行数恒等于发票数; 发票自身字段 (含 id) 不被覆盖,
/// 客户未命中时客户字段缺省 (容忍的部分结果, 不是错误)
pub fn join_rows(invoices: &[Invoice], customers: &[Customer]) -> Vec<InvoiceTableRow> {
    let index = customer_index(customers);
    invoices
        .iter()
        .map(|invoice| {
            let customer = index.get(invoice.customer_id.as_str()).copied();
            InvoiceTableRow {
                id: invoice.id.clone(),
                customer_id: invoice.customer_id.clone(),
                amount: invoice.amount,
                status: invoice.status.clone(),
                date: invoice.date,
                name: customer.map(|c| c.name.clone()),
                email: customer.map(|c| c.email.clone()),
                image_url: customer.map(|c| c.image_url.clone()),
            }
        })
        .collect()
}

/// 行匹配: query 是否为客户名/邮箱/状态/金额十进制串/日期串任一项的子串
/// 区分大小写; 空查询匹配所有行; 缺省的客户字段不参与匹配
pub fn row_matches(row: &InvoiceTableRow, query: &str) -> bool {
    row.name.as_deref().is_some_and(|name| name.contains(query))
        || row
            .email
            .as_deref()
            .is_some_and(|email| email.contains(query))
        || row.status.contains(query)
        || row.amount.to_string().contains(query)
        || row.date.to_string().contains(query)
}

fn ensure_page_args(page: u32, page_size: u32) -> Result<(), DashboardError> {
    if page == 0 || page_size == 0 {
        return Err(DashboardError::InvalidPageArgs { page, page_size });
    }
    Ok(())
}

/// 过滤 + 分页: 先子串过滤, 再切 [(page-1)*page_size, +page_size) 区间
/// 越界截断到序列末尾 (超出最后一页返回空, 不报错); page/page_size 为 0 则拒绝
pub fn search(
    rows: &[InvoiceTableRow],
    query: &str,
    page: u32,
    page_size: u32,
) -> Result<Vec<InvoiceTableRow>, DashboardError> {
    ensure_page_args(page, page_size)?;
    let offset = (page as usize - 1) * page_size as usize;
    Ok(rows
        .iter()
        .filter(|row| row_matches(row, query))
        .skip(offset)
        .take(page_size as usize)
        .cloned()
        .collect())
}

/// 总页数: 对过滤后的行数向上取整, 0 行即 0 页
pub fn page_count(total_rows: usize, page_size: u32) -> Result<u64, DashboardError> {
    ensure_page_args(1, page_size)?;
    let page_size = page_size as usize;
    Ok(((total_rows + page_size - 1) / page_size) as u64)
}

/// 最新发票视图: 连接后取快照前 LATEST_COUNT 条, 金额出口格式化
/// 客户未命中时保留发票 id, 客户字段缺省
pub fn latest_invoices(invoices: &[Invoice], customers: &[Customer]) -> Vec<LatestInvoiceView> {
    join_rows(invoices, customers)
        .into_iter()
        .take(LATEST_COUNT)
        .map(|row| LatestInvoiceView {
            id: row.id,
            name: row.name,
            email: row.email,
            image_url: row.image_url,
            amount: format_currency(row.amount),
        })
        .collect()
}

/// 客户表格: 名称/邮箱不区分大小写子串匹配, 每客户聚合发票数与待付/已付合计,
/// 结果按客户名升序 (稳定排序, 同名保持输入顺序)
pub fn filtered_customers(
    customers: &[Customer],
    invoices: &[Invoice],
    query: &str,
) -> Vec<CustomerTableRow> {
    // 一趟扫描先聚合每客户合计 (发票数, 待付, 已付)
    let mut totals: HashMap<&str, (i64, i64, i64)> = HashMap::new();
    for invoice in invoices {
        let entry = totals.entry(invoice.customer_id.as_str()).or_default();
        entry.0 += 1;
        match invoice.status.as_str() {
            STATUS_PENDING => entry.1 += invoice.amount,
            STATUS_PAID => entry.2 += invoice.amount,
            _ => {}
        }
    }

    let query_lower = query.to_lowercase();
    let mut rows: Vec<CustomerTableRow> = customers
        .iter()
        .filter(|customer| {
            customer.name.to_lowercase().contains(&query_lower)
                || customer.email.to_lowercase().contains(&query_lower)
        })
        .map(|customer| {
            let (total_invoices, total_pending, total_paid) = totals
                .get(customer.id.as_str())
                .copied()
                .unwrap_or((0, 0, 0));
            CustomerTableRow {
                id: customer.id.clone(),
                name: customer.name.clone(),
                email: customer.email.clone(),
                image_url: customer.image_url.clone(),
                total_invoices,
                total_pending: format_currency(total_pending),
                total_paid: format_currency(total_paid),
            }
        })
        .collect();
    rows.sort_by(|a, b| a.name.cmp(&b.name));
    rows
}
