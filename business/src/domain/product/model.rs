use super::value_objects::ProductId;

/// A catalog product as held by the store.
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub price: f64,
    pub description: Option<String>,
}

/// Attributes of a product that has not been stored yet. The store assigns the id.
#[derive(Debug, Clone, PartialEq)]
pub struct NewProductProps {
    pub name: String,
    pub price: f64,
    pub description: Option<String>,
}

impl Product {
    /// Builds the stored representation once the store has assigned an id.
    pub fn from_props(id: ProductId, props: NewProductProps) -> Self {
        Self {
            id,
            name: props.name,
            price: props.price,
            description: props.description,
        }
    }
}
