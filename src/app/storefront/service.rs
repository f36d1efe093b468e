//! 商城业务服务

use tracing::info;
use uuid::Uuid;

use super::model::{CreateProductRequest, Product};
use crate::{
    core::error::CoreError,
    infrastructure::store::{Collection, SharedStore},
};

#[derive(Clone)]
pub struct CatalogService {
    products: Collection<Product>,
}

impl CatalogService {
    pub fn new(store: SharedStore) -> Self {
        Self {
            products: Collection::new(store),
        }
    }

    pub async fn list_products(&self) -> Result<Vec<Product>, CoreError> {
        self.products
            .find_all()
            .await
            .map_err(CoreError::store("Failed to get products"))
    }

    pub async fn add_product(&self, req: CreateProductRequest) -> Result<Product, CoreError> {
        let (Some(title), Some(description), Some(price), Some(image_url)) =
            (req.title, req.description, req.price, req.image_url)
        else {
            return Err(CoreError::bad_request("All fields required"));
        };

        let product = Product {
            id: Uuid::new_v4(),
            title,
            description,
            price,
            image_url,
        };
        self.products
            .insert(&product)
            .await
            .map_err(CoreError::store("Failed to add product"))?;

        info!("上架商品: {} ({})", product.title, product.id);
        Ok(product)
    }
}
