use poem::{
    Endpoint, EndpointExt, Route, Server as PoemServer, get, listener::TcpListener,
    middleware::Tracing,
};
use poem_openapi::OpenApiService;

use crate::api::error::ErrorAdvice;
use crate::api::product::pages::{
    add_form_page, add_product, delete_product, edit_form_page, edit_product, list_page,
};
use crate::{config::app_config::AppConfig, setup::dependency_injection::DependencyContainer};

/// Builds every route of the service behind the error advice.
///
/// `api_url` is the base URL advertised in the OpenAPI document.
pub fn app(container: DependencyContainer, api_url: String) -> impl Endpoint {
    let api_service = OpenApiService::new(container.product_api, "Product Catalog API", "0.1.0")
        .server(api_url);
    let ui = api_service.swagger_ui();
    let spec = api_service.spec_endpoint();

    Route::new()
        .at("/products", get(list_page))
        .at("/products/add", get(add_form_page).post(add_product))
        .at("/products/edit/:id", get(edit_form_page).post(edit_product))
        .at("/products/delete/:id", get(delete_product))
        .nest("/products/api", api_service)
        .nest("/docs", ui)
        .nest("/openapi.json", spec)
        .data(container.product_pages)
        .with(ErrorAdvice)
}

pub struct Server;

impl Server {
    pub async fn run(config: AppConfig, container: DependencyContainer) -> anyhow::Result<()> {
        let addr = config.server.bind_address();
        let app = app(container, config.server.api_url())
            .with(config.cors)
            .with(Tracing);
        tracing::info!("Server running at http://{}", addr);
        tracing::info!("Product pages at http://{}/products", addr);
        tracing::info!("Swagger UI at http://{}/docs", addr);
        PoemServer::new(TcpListener::bind(&addr)).run(app).await?;
        Ok(())
    }
}
