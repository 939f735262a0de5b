use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::update::{UpdateProductParams, UpdateProductUseCase};

pub struct UpdateProductUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl UpdateProductUseCase for UpdateProductUseCaseImpl {
    async fn execute(&self, params: UpdateProductParams) -> Result<Product, ProductError> {
        self.logger
            .info(&format!("Updating product: {}", params.id));

        if !params.price.is_finite() {
            return Err(ProductError::PriceNotFinite);
        }

        let replacement = Product {
            id: params.id,
            name: params.name,
            price: params.price,
            description: params.description,
        };

        let updated_product = self
            .repository
            .save(&replacement)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => ProductError::NotFound,
                other => ProductError::Repository(other),
            })?;

        self.logger
            .info(&format!("Product updated: {}", updated_product.id));
        Ok(updated_product)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::product::model::NewProductProps;
    use crate::domain::product::value_objects::ProductId;
    use mockall::mock;
    use proptest::prelude::*;

    mock! {
        pub ProductRepo {}

        #[async_trait]
        impl ProductRepository for ProductRepo {
            async fn get_all(&self) -> Result<Vec<Product>, RepositoryError>;
            async fn get_by_id(&self, id: ProductId) -> Result<Product, RepositoryError>;
            async fn insert(&self, props: &NewProductProps) -> Result<Product, RepositoryError>;
            async fn save(&self, product: &Product) -> Result<Product, RepositoryError>;
            async fn delete(&self, id: ProductId) -> Result<(), RepositoryError>;
        }
    }

    mock! {
        pub Log {}

        impl Logger for Log {
            fn info(&self, message: &str);
            fn warn(&self, message: &str);
            fn error(&self, message: &str);
            fn debug(&self, message: &str);
        }
    }

    fn mock_logger() -> Arc<dyn Logger> {
        let mut logger = MockLog::new();
        logger.expect_info().returning(|_| ());
        logger.expect_warn().returning(|_| ());
        logger.expect_error().returning(|_| ());
        logger.expect_debug().returning(|_| ());
        Arc::new(logger)
    }

    fn echoing_repo() -> MockProductRepo {
        let mut mock_repo = MockProductRepo::new();
        mock_repo
            .expect_save()
            .times(1)
            .returning(|product| Ok(product.clone()));
        mock_repo
    }

    #[tokio::test]
    async fn should_replace_every_field_of_existing_product() {
        let use_case = UpdateProductUseCaseImpl {
            repository: Arc::new(echoing_repo()),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(UpdateProductParams {
                id: ProductId::new(1),
                name: "Widget".to_string(),
                price: 12.99,
                description: Some("Now larger".to_string()),
            })
            .await;

        assert!(result.is_ok());
        let product = result.unwrap();
        assert_eq!(product.id, ProductId::new(1));
        assert_eq!(product.price, 12.99);
        assert_eq!(product.description.as_deref(), Some("Now larger"));
    }

    #[tokio::test]
    async fn should_save_under_the_requested_id() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo
            .expect_save()
            .withf(|product| product.id == ProductId::new(1))
            .times(1)
            .returning(|product| Ok(product.clone()));

        let use_case = UpdateProductUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(UpdateProductParams {
                id: ProductId::new(1),
                name: "Widget".to_string(),
                price: 12.99,
                description: None,
            })
            .await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn should_return_not_found_when_updating_nonexistent_product() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo
            .expect_save()
            .returning(|_| Err(RepositoryError::NotFound));

        let use_case = UpdateProductUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(UpdateProductParams {
                id: ProductId::new(404),
                name: "Ghost".to_string(),
                price: 1.0,
                description: None,
            })
            .await;

        assert!(matches!(result.unwrap_err(), ProductError::NotFound));
    }

    #[tokio::test]
    async fn should_wrap_other_repository_failures() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo
            .expect_save()
            .returning(|_| Err(RepositoryError::DatabaseError));

        let use_case = UpdateProductUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(UpdateProductParams {
                id: ProductId::new(1),
                name: "Widget".to_string(),
                price: 1.0,
                description: None,
            })
            .await;

        assert!(matches!(
            result.unwrap_err(),
            ProductError::Repository(RepositoryError::DatabaseError)
        ));
    }

    #[tokio::test]
    async fn should_reject_non_finite_price_without_touching_repository() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo.expect_save().never();

        let use_case = UpdateProductUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(UpdateProductParams {
                id: ProductId::new(1),
                name: "Widget".to_string(),
                price: f64::NAN,
                description: None,
            })
            .await;

        assert!(matches!(result.unwrap_err(), ProductError::PriceNotFinite));
    }

    proptest! {
        #[test]
        fn updated_product_always_carries_the_requested_id(
            id in 1i64..i64::MAX,
            name in ".{0,40}",
            price in -1.0e9f64..1.0e9,
        ) {
            let runtime = tokio::runtime::Builder::new_current_thread().build().unwrap();
            let use_case = UpdateProductUseCaseImpl {
                repository: Arc::new(echoing_repo()),
                logger: mock_logger(),
            };

            let product = runtime
                .block_on(use_case.execute(UpdateProductParams {
                    id: ProductId::new(id),
                    name,
                    price,
                    description: None,
                }))
                .unwrap();

            prop_assert_eq!(product.id, ProductId::new(id));
        }
    }
}
