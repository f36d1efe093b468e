//! 商城：商品目录与浏览器端购物车

pub mod handler;
pub mod model;
mod page;
pub mod service;

use axum::{routing::get, Router};

use crate::infrastructure::store::SharedStore;
use handler::AppState;
use service::CatalogService;

pub fn router(store: SharedStore) -> Router {
    let state = AppState {
        catalog_service: CatalogService::new(store),
    };

    Router::new()
        .route("/", get(handler::index))
        .route(
            "/api/products",
            get(handler::list_products).post(handler::add_product),
        )
        .with_state(state)
}
