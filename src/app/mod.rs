//! 应用层：三个互相独立的应用

pub mod inventory;
pub mod projects;
pub mod storefront;

use axum::Router;
use uuid::Uuid;

use crate::{config::AppKind, core::server::with_common_layers, infrastructure::store::SharedStore};

/// 构建指定应用的完整路由（含健康检查和公共中间件）
pub fn build_router(kind: AppKind, store: SharedStore) -> Router {
    let routes = match kind {
        AppKind::Inventory => inventory::router(store.clone()),
        AppKind::Projects => projects::router(store.clone()),
        AppKind::Storefront => storefront::router(store.clone()),
    };
    with_common_layers(kind.name(), store, routes)
}

/// 路径中的 id 无法解析时按不存在处理
pub(crate) fn parse_id(raw: &str) -> Option<Uuid> {
    Uuid::parse_str(raw).ok()
}
