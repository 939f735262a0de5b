use poem_openapi::Object;
use serde::{Deserialize, Serialize};

use business::domain::product::model::Product;
use business::domain::product::use_cases::create::CreateProductParams;
use business::domain::product::use_cases::update::UpdateProductParams;
use business::domain::product::value_objects::ProductId;

/// Product representation accepted by the JSON API
#[derive(Debug, Clone, Object)]
pub struct ProductRequest {
    /// Ignored: ids are assigned by the store on create and taken from the path on update
    #[oai(skip_serializing_if_is_none)]
    pub id: Option<i64>,
    /// Product name
    pub name: String,
    /// Unit price
    pub price: f64,
    /// Free-form description
    #[oai(skip_serializing_if_is_none)]
    pub description: Option<String>,
}

impl ProductRequest {
    pub fn into_create_params(self) -> CreateProductParams {
        CreateProductParams {
            name: self.name,
            price: self.price,
            description: self.description,
        }
    }

    /// The path id always wins over any id carried in the body.
    pub fn into_update_params(self, id: i64) -> UpdateProductParams {
        UpdateProductParams {
            id: ProductId::new(id),
            name: self.name,
            price: self.price,
            description: self.description,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Object)]
pub struct ProductResponse {
    /// Store-assigned identifier
    pub id: i64,
    /// Product name
    pub name: String,
    /// Unit price
    pub price: f64,
    /// Free-form description
    #[oai(skip_serializing_if_is_none)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        Self {
            id: product.id.value(),
            name: product.name,
            price: product.price,
            description: product.description,
        }
    }
}

/// Urlencoded body posted by the add and edit pages. Any `id` field is ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct ProductForm {
    pub name: String,
    pub price: f64,
    #[serde(default)]
    pub description: Option<String>,
}

impl ProductForm {
    fn description(description: Option<String>) -> Option<String> {
        // Browsers post empty inputs as empty strings
        description.filter(|d| !d.trim().is_empty())
    }

    pub fn into_create_params(self) -> CreateProductParams {
        CreateProductParams {
            name: self.name,
            price: self.price,
            description: Self::description(self.description),
        }
    }

    pub fn into_update_params(self, id: i64) -> UpdateProductParams {
        UpdateProductParams {
            id: ProductId::new(id),
            name: self.name,
            price: self.price,
            description: Self::description(self.description),
        }
    }
}

/// Data behind the empty add-product form
#[derive(Debug, Clone, Default, Serialize)]
pub struct EmptyProductForm {
    pub name: String,
    pub price: Option<f64>,
    pub description: Option<String>,
}
