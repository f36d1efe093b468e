//! 库存目录处理器

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{Html, Json},
};

use super::{
    model::{CreateProductRequest, Product},
    page::INDEX_HTML,
    service::ProductService,
};
use crate::{
    app::parse_id,
    core::{error::CoreError, extract::ValidatedJson, response::MessageResponse},
};

#[derive(Clone)]
pub struct AppState {
    pub product_service: ProductService,
}

pub async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

pub async fn list_products(
    State(state): State<AppState>,
) -> Result<Json<Vec<Product>>, CoreError> {
    let products = state.product_service.list_products().await?;
    Ok(Json(products))
}

pub async fn create_product(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreateProductRequest>,
) -> Result<(StatusCode, Json<Product>), CoreError> {
    let product = state.product_service.create_product(payload).await?;
    Ok((StatusCode::CREATED, Json(product)))
}

pub async fn delete_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, CoreError> {
    if let Some(id) = parse_id(&id) {
        state.product_service.delete_product(id).await?;
    }
    Ok(Json(MessageResponse::new("Deleted")))
}
