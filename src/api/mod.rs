pub mod handlers;

pub use handlers::*;

use crate::service::{DashboardService, InvoiceActions};
use axum::routing::{get, post, put};
use axum::Router;
use std::sync::Arc;
use tower::ServiceBuilder;

/// 组装路由: 查询路由挂查询服务, 写入路由挂写入服务
pub fn router(dashboard: Arc<DashboardService>, actions: Arc<InvoiceActions>) -> Router {
    let dashboard_routes = Router::new()
        .route("/api/dashboard/cards", get(handlers::dashboard_cards))
        .route("/api/dashboard/revenue", get(handlers::dashboard_revenue))
        .route(
            "/api/dashboard/latest-invoices",
            get(handlers::dashboard_latest_invoices),
        )
        .route("/api/invoices", get(handlers::list_invoices))
        .route("/api/invoices/:id", get(handlers::get_invoice))
        .route("/api/customers", get(handlers::list_customers))
        .route("/api/customers/table", get(handlers::customers_table))
        .with_state(dashboard);

    let action_routes = Router::new()
        .route("/api/invoices", post(handlers::create_invoice))
        .route("/api/invoices/:id", put(handlers::update_invoice))
        .with_state(actions);

    Router::new()
        .route("/health", get(handlers::health_check))
        .merge(dashboard_routes)
        .merge(action_routes)
        .layer(ServiceBuilder::new())
}
