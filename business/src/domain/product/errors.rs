#[derive(Debug, thiserror::Error)]
pub enum ProductError {
    #[error("product.not_found")]
    NotFound,
    #[error("product.price_not_finite")]
    PriceNotFinite,
    #[error("repository.persistence")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}
