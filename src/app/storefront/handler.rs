//! 商城处理器

use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, Json},
};

use super::{
    model::{CreateProductRequest, Product},
    page::INDEX_HTML,
    service::CatalogService,
};
use crate::core::{error::CoreError, extract::ValidatedJson};

#[derive(Clone)]
pub struct AppState {
    pub catalog_service: CatalogService,
}

pub async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

pub async fn list_products(
    State(state): State<AppState>,
) -> Result<Json<Vec<Product>>, CoreError> {
    let products = state.catalog_service.list_products().await?;
    Ok(Json(products))
}

pub async fn add_product(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreateProductRequest>,
) -> Result<(StatusCode, Json<Product>), CoreError> {
    let product = state.catalog_service.add_product(payload).await?;
    Ok((StatusCode::CREATED, Json(product)))
}
