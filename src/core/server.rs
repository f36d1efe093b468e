//! HTTP 服务启动与公共路由

use axum::{extract::State, http::StatusCode, middleware, routing::get, Json, Router};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use super::{middleware::request_logging_middleware, response::HealthResponse};
use crate::{config::HttpConfig, infrastructure::store::SharedStore};

#[derive(Clone)]
struct HealthState {
    app: &'static str,
    store: SharedStore,
}

/// 为应用路由补上健康检查和公共中间件
pub fn with_common_layers(app: &'static str, store: SharedStore, routes: Router) -> Router {
    let health = Router::new()
        .route("/health", get(health_check))
        .with_state(HealthState { app, store });

    routes
        .merge(health)
        .layer(middleware::from_fn(request_logging_middleware))
        .layer(TraceLayer::new_for_http())
}

async fn health_check(State(state): State<HealthState>) -> (StatusCode, Json<HealthResponse>) {
    let backend = state.store.backend_name();
    match state.store.ping().await {
        Ok(()) => (
            StatusCode::OK,
            Json(HealthResponse::new("healthy", state.app, backend)),
        ),
        Err(e) => {
            warn!("存储健康检查失败: {}", e);
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(HealthResponse::new("unhealthy", state.app, backend)),
            )
        }
    }
}

/// 绑定地址并运行，收到 Ctrl-C 后优雅退出
pub async fn serve(app: Router, http: &HttpConfig) -> anyhow::Result<()> {
    let addr = http.socket_addr();
    let listener = TcpListener::bind(&addr).await?;
    info!("🚀 服务运行在 http://{}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("服务已停止");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("无法监听 Ctrl-C 信号: {}", e);
        std::future::pending::<()>().await;
    }
}
