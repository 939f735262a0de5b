use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use business::domain::errors::RepositoryError;
use business::domain::product::model::{NewProductProps, Product};
use business::domain::product::repository::ProductRepository;
use business::domain::product::value_objects::ProductId;

#[derive(Debug, Default)]
struct Store {
    products: BTreeMap<ProductId, Product>,
    last_id: i64,
}

/// In-memory implementation of ProductRepository (for development/testing).
///
/// Ids start at 1 and are never reused, even after a delete.
#[derive(Debug, Default, Clone)]
pub struct InMemoryProductRepository {
    store: Arc<RwLock<Store>>,
}

impl InMemoryProductRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ProductRepository for InMemoryProductRepository {
    async fn get_all(&self) -> Result<Vec<Product>, RepositoryError> {
        let store = self.store.read().await;
        Ok(store.products.values().cloned().collect())
    }

    async fn get_by_id(&self, id: ProductId) -> Result<Product, RepositoryError> {
        let store = self.store.read().await;
        store
            .products
            .get(&id)
            .cloned()
            .ok_or(RepositoryError::NotFound)
    }

    async fn insert(&self, props: &NewProductProps) -> Result<Product, RepositoryError> {
        let mut store = self.store.write().await;
        store.last_id += 1;
        let product = Product::from_props(ProductId::new(store.last_id), props.clone());
        store.products.insert(product.id, product.clone());

        tracing::debug!(product_id = %product.id, "Inserted product");
        Ok(product)
    }

    async fn save(&self, product: &Product) -> Result<Product, RepositoryError> {
        let mut store = self.store.write().await;
        let slot = store
            .products
            .get_mut(&product.id)
            .ok_or(RepositoryError::NotFound)?;
        *slot = product.clone();
        Ok(product.clone())
    }

    async fn delete(&self, id: ProductId) -> Result<(), RepositoryError> {
        let mut store = self.store.write().await;
        store
            .products
            .remove(&id)
            .map(|_| ())
            .ok_or(RepositoryError::NotFound)
    }
}
