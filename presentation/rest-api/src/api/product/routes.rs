use std::sync::Arc;

use poem::Result;
use poem_openapi::{OpenApi, param::Path, payload::Json};

use business::domain::product::use_cases::create::CreateProductUseCase;
use business::domain::product::use_cases::delete::{DeleteProductParams, DeleteProductUseCase};
use business::domain::product::use_cases::get_all::GetAllProductsUseCase;
use business::domain::product::use_cases::get_by_id::{
    GetProductByIdParams, GetProductByIdUseCase,
};
use business::domain::product::use_cases::update::UpdateProductUseCase;
use business::domain::product::value_objects::ProductId;

use crate::api::error::IntoApiError;
use crate::api::product::dto::{ProductRequest, ProductResponse};
use crate::api::tags::ApiTags;

pub struct ProductApi {
    create_use_case: Arc<dyn CreateProductUseCase>,
    get_all_use_case: Arc<dyn GetAllProductsUseCase>,
    get_by_id_use_case: Arc<dyn GetProductByIdUseCase>,
    update_use_case: Arc<dyn UpdateProductUseCase>,
    delete_use_case: Arc<dyn DeleteProductUseCase>,
}

impl ProductApi {
    pub fn new(
        create_use_case: Arc<dyn CreateProductUseCase>,
        get_all_use_case: Arc<dyn GetAllProductsUseCase>,
        get_by_id_use_case: Arc<dyn GetProductByIdUseCase>,
        update_use_case: Arc<dyn UpdateProductUseCase>,
        delete_use_case: Arc<dyn DeleteProductUseCase>,
    ) -> Self {
        Self {
            create_use_case,
            get_all_use_case,
            get_by_id_use_case,
            update_use_case,
            delete_use_case,
        }
    }
}

/// Product catalog JSON API
///
/// Every failure is reported by the error advice as a 500 with a plain-text body.
#[OpenApi]
impl ProductApi {
    /// List all products
    ///
    /// Returns every product in ascending id order.
    #[oai(path = "/products", method = "get", tag = "ApiTags::Products")]
    async fn get_all_products(&self) -> Result<Json<Vec<ProductResponse>>> {
        let products = self
            .get_all_use_case
            .execute()
            .await
            .map_err(IntoApiError::into_api_error)?;

        Ok(Json(products.into_iter().map(Into::into).collect()))
    }

    /// Get a product by ID
    #[oai(path = "/products/:id", method = "get", tag = "ApiTags::Products")]
    async fn get_product_by_id(&self, id: Path<i64>) -> Result<Json<ProductResponse>> {
        let product = self
            .get_by_id_use_case
            .execute(GetProductByIdParams {
                id: ProductId::new(id.0),
            })
            .await
            .map_err(IntoApiError::into_api_error)?;

        Ok(Json(product.into()))
    }

    /// Create a new product
    ///
    /// The store assigns the id; any id in the body is ignored.
    #[oai(path = "/products", method = "post", tag = "ApiTags::Products")]
    async fn create_product(&self, body: Json<ProductRequest>) -> Result<Json<ProductResponse>> {
        let product = self
            .create_use_case
            .execute(body.0.into_create_params())
            .await
            .map_err(IntoApiError::into_api_error)?;

        Ok(Json(product.into()))
    }

    /// Replace a product
    ///
    /// The id in the path overrides any id in the body.
    #[oai(path = "/products/:id", method = "put", tag = "ApiTags::Products")]
    async fn update_product(
        &self,
        id: Path<i64>,
        body: Json<ProductRequest>,
    ) -> Result<Json<ProductResponse>> {
        let product = self
            .update_use_case
            .execute(body.0.into_update_params(id.0))
            .await
            .map_err(IntoApiError::into_api_error)?;

        Ok(Json(product.into()))
    }

    /// Delete a product
    #[oai(path = "/products/:id", method = "delete", tag = "ApiTags::Products")]
    async fn delete_product(&self, id: Path<i64>) -> Result<()> {
        self.delete_use_case
            .execute(DeleteProductParams {
                id: ProductId::new(id.0),
            })
            .await
            .map_err(IntoApiError::into_api_error)
    }
}
