//! 库存目录：商品的增删查

pub mod handler;
pub mod model;
mod page;
pub mod service;

use axum::{
    routing::{delete, get},
    Router,
};

use crate::infrastructure::store::SharedStore;
use handler::AppState;
use service::ProductService;

pub fn router(store: SharedStore) -> Router {
    let state = AppState {
        product_service: ProductService::new(store),
    };

    Router::new()
        .route("/", get(handler::index))
        .route(
            "/api/products",
            get(handler::list_products).post(handler::create_product),
        )
        .route("/api/products/:id", delete(handler::delete_product))
        .with_state(state)
}
