use invoice_dashboard_rust::{
    api, create_pool, AppConfig, DashboardService, DataSource, InvoiceActions, MockDataSource,
    PgDataSource, RemoteDataSource,
};
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::fmt::time::ChronoLocal;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 初始化日志 - 使用本地时间格式
    tracing_subscriber::fmt()
        .with_timer(ChronoLocal::new("%Y-%m-%d %H:%M:%S".to_string()))
        .with_target(true)
        .with_level(true)
        .init();

    // 加载配置
    let config = AppConfig::from_env();
    info!("Starting server with config: {:?}", config);

    // 按配置选择数据源适配器
    let source: Arc<dyn DataSource> = match config.datasource.mode.as_str() {
        "postgres" => {
            let pool = create_pool(
                &config.datasource.database_url,
                config.datasource.timeout_secs,
            )
            .await?;
            info!("Database pool created");
            Arc::new(PgDataSource::new(pool))
        }
        "remote" => {
            info!("Using remote mock API at {}", config.datasource.base_url);
            Arc::new(RemoteDataSource::new(
                &config.datasource.base_url,
                config.datasource.timeout_secs,
            )?)
        }
        _ => {
            info!("Using in-memory mock datasource");
            Arc::new(MockDataSource::with_fixtures())
        }
    };

    // 查询服务与写入服务共用同一数据源
    let dashboard = Arc::new(DashboardService::new(source.clone()));
    let actions = Arc::new(InvoiceActions::new(source));

    // 构建路由
    let app = api::router(dashboard, actions);

    // 启动服务器
    let addr = format!("{}:{}", config.server.host, config.server.port);
    info!("Server listening on {}", addr);
    info!("API Endpoints:");
    info!("  GET  /api/dashboard/cards            - 卡片汇总");
    info!("  GET  /api/dashboard/revenue          - 月度营收");
    info!("  GET  /api/dashboard/latest-invoices  - 最新发票");
    info!("  GET  /api/invoices?query=&page=      - 发票表格");
    info!("  POST /api/invoices                   - 创建发票");
    info!("  PUT  /api/invoices/:id               - 更新发票");
    info!("  GET  /api/customers                  - 客户列表");
    info!("  GET  /api/customers/table?query=     - 客户表格");

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
