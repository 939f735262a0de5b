use std::sync::Arc;

use poem::web::{Data, Form, Html, Path, Redirect};
use poem::handler;

use business::domain::product::errors::ProductError;
use business::domain::product::use_cases::create::CreateProductUseCase;
use business::domain::product::use_cases::delete::{DeleteProductParams, DeleteProductUseCase};
use business::domain::product::use_cases::get_all::GetAllProductsUseCase;
use business::domain::product::use_cases::get_by_id::{
    GetProductByIdParams, GetProductByIdUseCase,
};
use business::domain::product::use_cases::update::UpdateProductUseCase;
use business::domain::product::value_objects::ProductId;

use crate::api::error::IntoApiError;
use crate::api::product::dto::{EmptyProductForm, ProductForm, ProductResponse};
use crate::api::product::view::{
    ADD_PRODUCT_PAGE, EDIT_PRODUCT_PAGE, PRODUCTS_PAGE, Page, PageError, PageRenderer,
};

pub const PRODUCTS_PATH: &str = "/products";

#[derive(Debug, thiserror::Error)]
pub enum PagesError {
    #[error(transparent)]
    Product(#[from] ProductError),
    #[error(transparent)]
    Page(#[from] PageError),
}

impl IntoApiError for PagesError {
    fn into_api_error(self) -> poem::Error {
        match self {
            PagesError::Product(e) => e.into_api_error(),
            PagesError::Page(e) => e.into_api_error(),
        }
    }
}

/// Server-rendered product pages.
///
/// Read routes produce a [`Page`]; write routes redirect back to the listing.
pub struct ProductPages {
    create_use_case: Arc<dyn CreateProductUseCase>,
    get_all_use_case: Arc<dyn GetAllProductsUseCase>,
    get_by_id_use_case: Arc<dyn GetProductByIdUseCase>,
    update_use_case: Arc<dyn UpdateProductUseCase>,
    delete_use_case: Arc<dyn DeleteProductUseCase>,
    renderer: Arc<dyn PageRenderer>,
}

impl ProductPages {
    pub fn new(
        create_use_case: Arc<dyn CreateProductUseCase>,
        get_all_use_case: Arc<dyn GetAllProductsUseCase>,
        get_by_id_use_case: Arc<dyn GetProductByIdUseCase>,
        update_use_case: Arc<dyn UpdateProductUseCase>,
        delete_use_case: Arc<dyn DeleteProductUseCase>,
        renderer: Arc<dyn PageRenderer>,
    ) -> Self {
        Self {
            create_use_case,
            get_all_use_case,
            get_by_id_use_case,
            update_use_case,
            delete_use_case,
            renderer,
        }
    }

    pub async fn list(&self) -> Result<Page, PagesError> {
        let products: Vec<ProductResponse> = self
            .get_all_use_case
            .execute()
            .await?
            .into_iter()
            .map(Into::into)
            .collect();

        Ok(Page::new(PRODUCTS_PAGE).with_attribute("products", products)?)
    }

    pub fn add_form(&self) -> Result<Page, PagesError> {
        Ok(Page::new(ADD_PRODUCT_PAGE).with_attribute("product", EmptyProductForm::default())?)
    }

    pub async fn add(&self, form: ProductForm) -> Result<(), PagesError> {
        self.create_use_case
            .execute(form.into_create_params())
            .await?;
        Ok(())
    }

    pub async fn edit_form(&self, id: i64) -> Result<Page, PagesError> {
        let product: ProductResponse = self
            .get_by_id_use_case
            .execute(GetProductByIdParams {
                id: ProductId::new(id),
            })
            .await?
            .into();

        Ok(Page::new(EDIT_PRODUCT_PAGE).with_attribute("product", product)?)
    }

    pub async fn edit(&self, id: i64, form: ProductForm) -> Result<(), PagesError> {
        self.update_use_case
            .execute(form.into_update_params(id))
            .await?;
        Ok(())
    }

    pub async fn delete(&self, id: i64) -> Result<(), PagesError> {
        self.delete_use_case
            .execute(DeleteProductParams {
                id: ProductId::new(id),
            })
            .await?;
        Ok(())
    }

    pub fn render(&self, page: &Page) -> Result<Html<String>, PagesError> {
        Ok(Html(self.renderer.render(page)?))
    }
}

fn back_to_listing() -> Redirect {
    Redirect::see_other(PRODUCTS_PATH)
}

#[handler]
pub async fn list_page(pages: Data<&Arc<ProductPages>>) -> poem::Result<Html<String>> {
    let page = pages.list().await.map_err(IntoApiError::into_api_error)?;
    pages.render(&page).map_err(IntoApiError::into_api_error)
}

#[handler]
pub async fn add_form_page(pages: Data<&Arc<ProductPages>>) -> poem::Result<Html<String>> {
    let page = pages.add_form().map_err(IntoApiError::into_api_error)?;
    pages.render(&page).map_err(IntoApiError::into_api_error)
}

#[handler]
pub async fn add_product(
    pages: Data<&Arc<ProductPages>>,
    Form(form): Form<ProductForm>,
) -> poem::Result<Redirect> {
    pages.add(form).await.map_err(IntoApiError::into_api_error)?;
    Ok(back_to_listing())
}

#[handler]
pub async fn edit_form_page(
    pages: Data<&Arc<ProductPages>>,
    Path(id): Path<i64>,
) -> poem::Result<Html<String>> {
    let page = pages
        .edit_form(id)
        .await
        .map_err(IntoApiError::into_api_error)?;
    pages.render(&page).map_err(IntoApiError::into_api_error)
}

#[handler]
pub async fn edit_product(
    pages: Data<&Arc<ProductPages>>,
    Path(id): Path<i64>,
    Form(form): Form<ProductForm>,
) -> poem::Result<Redirect> {
    pages
        .edit(id, form)
        .await
        .map_err(IntoApiError::into_api_error)?;
    Ok(back_to_listing())
}

#[handler]
pub async fn delete_product(
    pages: Data<&Arc<ProductPages>>,
    Path(id): Path<i64>,
) -> poem::Result<Redirect> {
    pages.delete(id).await.map_err(IntoApiError::into_api_error)?;
    Ok(back_to_listing())
}
