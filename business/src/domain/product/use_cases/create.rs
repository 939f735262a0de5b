use async_trait::async_trait;

use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;

/// Any id carried by the incoming representation is dropped before this point.
pub struct CreateProductParams {
    pub name: String,
    pub price: f64,
    pub description: Option<String>,
}

#[async_trait]
pub trait CreateProductUseCase: Send + Sync {
    async fn execute(&self, params: CreateProductParams) -> Result<Product, ProductError>;
}
