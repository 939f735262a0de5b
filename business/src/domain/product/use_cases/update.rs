use async_trait::async_trait;

use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;
use crate::domain::product::value_objects::ProductId;

/// Full replacement of a stored product. `id` always comes from the request path.
pub struct UpdateProductParams {
    pub id: ProductId,
    pub name: String,
    pub price: f64,
    pub description: Option<String>,
}

#[async_trait]
pub trait UpdateProductUseCase: Send + Sync {
    async fn execute(&self, params: UpdateProductParams) -> Result<Product, ProductError>;
}
