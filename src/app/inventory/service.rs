//! 库存目录业务服务

use tracing::info;
use uuid::Uuid;

use super::model::{CreateProductRequest, Product};
use crate::{
    core::error::CoreError,
    infrastructure::store::{Collection, SharedStore},
};

#[derive(Clone)]
pub struct ProductService {
    products: Collection<Product>,
}

impl ProductService {
    pub fn new(store: SharedStore) -> Self {
        Self {
            products: Collection::new(store),
        }
    }

    pub async fn list_products(&self) -> Result<Vec<Product>, CoreError> {
        self.products
            .find_all()
            .await
            .map_err(CoreError::store("Failed to load products"))
    }

    /// 请求体已由 `ValidatedJson` 校验，这里缺字段只可能是调用方绕过了校验
    pub async fn create_product(&self, req: CreateProductRequest) -> Result<Product, CoreError> {
        let (Some(name), Some(price), Some(image)) = (req.name, req.price, req.image) else {
            return Err(CoreError::bad_request("Missing fields"));
        };

        let product = Product {
            id: Uuid::new_v4(),
            name,
            price,
            image,
        };
        self.products
            .insert(&product)
            .await
            .map_err(CoreError::store("Failed to add product"))?;

        info!("创建商品: {} ({})", product.name, product.id);
        Ok(product)
    }

    /// 幂等删除，不存在的 id 也视为成功
    pub async fn delete_product(&self, id: Uuid) -> Result<(), CoreError> {
        let removed = self
            .products
            .delete_by_id(id)
            .await
            .map_err(CoreError::store("Failed to delete product"))?;

        if removed {
            info!("删除商品: {}", id);
        }
        Ok(())
    }
}
