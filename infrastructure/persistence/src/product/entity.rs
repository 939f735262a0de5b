use bigdecimal::BigDecimal;
use num_traits::ToPrimitive;
use sqlx::FromRow;

use business::domain::errors::RepositoryError;
use business::domain::product::model::Product;
use business::domain::product::value_objects::ProductId;

#[derive(Debug, FromRow)]
pub struct ProductEntity {
    pub id: i64,
    pub name: String,
    pub price: BigDecimal,
    pub description: Option<String>,
}

impl ProductEntity {
    pub fn into_domain(self) -> Result<Product, RepositoryError> {
        let price = self.price.to_f64().ok_or(RepositoryError::InvalidData)?;
        Ok(Product {
            id: ProductId::new(self.id),
            name: self.name,
            price,
            description: self.description,
        })
    }
}

/// Converts a price into its NUMERIC column value.
///
/// Goes through the shortest decimal rendering of the float so `9.99` is
/// stored as `9.99` and reads back as the same `f64`.
pub fn price_to_decimal(price: f64) -> Result<BigDecimal, RepositoryError> {
    if !price.is_finite() {
        return Err(RepositoryError::InvalidData);
    }
    price
        .to_string()
        .parse::<BigDecimal>()
        .map_err(|_| RepositoryError::InvalidData)
}
