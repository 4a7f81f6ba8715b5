use crate::error::DashboardError;
use crate::models::{FieldErrors, InvoiceDraft, InvoiceTableRow};
use crate::service::{DashboardService, FormOutcome, InvoiceActions};
use axum::{
    extract::{Json, Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// 列表查询参数: ?query=&page=
#[derive(Debug, Deserialize)]
pub struct InvoiceListParams {
    #[serde(default)]
    pub query: String,
    pub page: Option<u32>,
}

/// 客户表格查询参数: ?query=
#[derive(Debug, Deserialize)]
pub struct CustomerTableParams {
    #[serde(default)]
    pub query: String,
}

/// 发票表格响应体
#[derive(Debug, Serialize)]
pub struct InvoiceListResponse {
    pub invoices: Vec<InvoiceTableRow>,
    pub total_pages: u64,
}

/// 表单流程响应体 (校验失败时按字段透出错误信息)
#[derive(Debug, Serialize)]
pub struct FormStateResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<FieldErrors>,
    pub message: String,
}

/// 通用消息响应体
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

/// 健康检查
pub async fn health_check() -> &'static str {
    "OK"
}

/// 卡片汇总
pub async fn dashboard_cards(State(service): State<Arc<DashboardService>>) -> Response {
    match service.fetch_card_data().await {
        Ok(summary) => (StatusCode::OK, Json(summary)).into_response(),
        Err(e) => error_response(e),
    }
}

/// 月度营收 (图表数据)
pub async fn dashboard_revenue(State(service): State<Arc<DashboardService>>) -> Response {
    match service.fetch_revenue().await {
        Ok(revenue) => (StatusCode::OK, Json(revenue)).into_response(),
        Err(e) => error_response(e),
    }
}

/// 最新发票
pub async fn dashboard_latest_invoices(State(service): State<Arc<DashboardService>>) -> Response {
    match service.fetch_latest_invoices().await {
        Ok(latest) => (StatusCode::OK, Json(latest)).into_response(),
        Err(e) => error_response(e),
    }
}

/// 发票表格 (过滤 + 分页)
pub async fn list_invoices(
    State(service): State<Arc<DashboardService>>,
    Query(params): Query<InvoiceListParams>,
) -> Response {
    let page = params.page.unwrap_or(1);
    match service.fetch_filtered_invoices(&params.query, page).await {
        Ok((invoices, total_pages)) => (
            StatusCode::OK,
            Json(InvoiceListResponse {
                invoices,
                total_pages,
            }),
        )
            .into_response(),
        Err(e) => error_response(e),
    }
}

/// 按 id 查发票
pub async fn get_invoice(
    State(service): State<Arc<DashboardService>>,
    Path(id): Path<String>,
) -> Response {
    match service.fetch_invoice_by_id(&id).await {
        Ok(Some(invoice)) => (StatusCode::OK, Json(invoice)).into_response(),
        Ok(None) => (
            StatusCode::NOT_FOUND,
            Json(MessageResponse {
                message: format!("Invoice {} not found", id),
            }),
        )
            .into_response(),
        Err(e) => error_response(e),
    }
}

/// 客户列表 (表单下拉框用)
pub async fn list_customers(State(service): State<Arc<DashboardService>>) -> Response {
    match service.fetch_customers().await {
        Ok(customers) => (StatusCode::OK, Json(customers)).into_response(),
        Err(e) => error_response(e),
    }
}

/// 客户表格 (含每客户合计)
pub async fn customers_table(
    State(service): State<Arc<DashboardService>>,
    Query(params): Query<CustomerTableParams>,
) -> Response {
    match service.fetch_filtered_customers(&params.query).await {
        Ok(customers) => (StatusCode::OK, Json(customers)).into_response(),
        Err(e) => error_response(e),
    }
}

/// 创建发票
pub async fn create_invoice(
    State(actions): State<Arc<InvoiceActions>>,
    Json(draft): Json<InvoiceDraft>,
) -> Response {
    form_response(actions.create_invoice(&draft).await, StatusCode::CREATED)
}

/// 更新发票
pub async fn update_invoice(
    State(actions): State<Arc<InvoiceActions>>,
    Path(id): Path<String>,
    Json(draft): Json<InvoiceDraft>,
) -> Response {
    form_response(actions.update_invoice(&id, &draft).await, StatusCode::OK)
}

fn form_response(outcome: FormOutcome, success_status: StatusCode) -> Response {
    match outcome {
        FormOutcome::Saved { message } => (
            success_status,
            Json(FormStateResponse {
                errors: None,
                message,
            }),
        )
            .into_response(),
        FormOutcome::Invalid { errors, message } => (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(FormStateResponse {
                errors: Some(errors),
                message,
            }),
        )
            .into_response(),
        FormOutcome::NotFound => (
            StatusCode::NOT_FOUND,
            Json(FormStateResponse {
                errors: None,
                message: "Invoice not found".to_string(),
            }),
        )
            .into_response(),
        FormOutcome::StoreFailed { message } => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(FormStateResponse {
                errors: None,
                message,
            }),
        )
            .into_response(),
    }
}

/// 查询层错误映射: 分页前置条件违反 400, 数据源不可用 500
fn error_response(e: DashboardError) -> Response {
    let status = match e {
        DashboardError::InvalidPageArgs { .. } => StatusCode::BAD_REQUEST,
        DashboardError::DataSource(_) => {
            tracing::error!("数据源不可用: {}", e);
            StatusCode::INTERNAL_SERVER_ERROR
        }
    };
    (
        status,
        Json(MessageResponse {
            message: format!("Error: {}", e),
        }),
    )
        .into_response()
}
