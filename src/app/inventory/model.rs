//! 库存目录数据模型

use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::{core::extract::RequestSchema, infrastructure::store::Document};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: Uuid,
    pub name: String,
    pub price: f64,
    pub image: String,
}

impl Document for Product {
    const COLLECTION: &'static str = "products";

    fn id(&self) -> Uuid {
        self.id
    }
}

/// 创建商品请求
#[derive(Debug, Deserialize, Validate)]
pub struct CreateProductRequest {
    #[validate(required, length(min = 1))]
    pub name: Option<String>,

    #[validate(required, range(exclusive_min = 0.0))]
    pub price: Option<f64>,

    #[validate(required, url)]
    pub image: Option<String>,
}

impl RequestSchema for CreateProductRequest {
    const INVALID_MESSAGE: &'static str = "Missing fields";
}
