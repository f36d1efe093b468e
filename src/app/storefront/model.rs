//! 商城数据模型

use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::{core::extract::RequestSchema, infrastructure::store::Document};

/// 商城商品，创建后不可修改或删除
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub price: f64,
    pub image_url: String,
}

impl Document for Product {
    const COLLECTION: &'static str = "products";

    fn id(&self) -> Uuid {
        self.id
    }
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateProductRequest {
    #[validate(required, length(min = 1))]
    pub title: Option<String>,

    #[validate(required, length(min = 1))]
    pub description: Option<String>,

    #[validate(required, range(exclusive_min = 0.0))]
    pub price: Option<f64>,

    #[validate(required, url)]
    pub image_url: Option<String>,
}

impl RequestSchema for CreateProductRequest {
    const INVALID_MESSAGE: &'static str = "All fields required";
}
