use async_trait::async_trait;

use crate::domain::errors::RepositoryError;

use super::model::{NewProductProps, Product};
use super::value_objects::ProductId;

#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// All stored products in ascending id order.
    async fn get_all(&self) -> Result<Vec<Product>, RepositoryError>;
    async fn get_by_id(&self, id: ProductId) -> Result<Product, RepositoryError>;
    /// Stores a new product and returns it with its assigned id.
    async fn insert(&self, props: &NewProductProps) -> Result<Product, RepositoryError>;
    /// Replaces an existing product. Fails with `NotFound` when the id is unknown.
    async fn save(&self, product: &Product) -> Result<Product, RepositoryError>;
    async fn delete(&self, id: ProductId) -> Result<(), RepositoryError>;
}
