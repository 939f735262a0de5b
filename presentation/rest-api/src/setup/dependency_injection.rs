use std::sync::Arc;

use logger::TracingLogger;

use business::application::product::create::CreateProductUseCaseImpl;
use business::application::product::delete::DeleteProductUseCaseImpl;
use business::application::product::get_all::GetAllProductsUseCaseImpl;
use business::application::product::get_by_id::GetProductByIdUseCaseImpl;
use business::application::product::update::UpdateProductUseCaseImpl;
use business::domain::product::repository::ProductRepository;

use crate::api::product::pages::ProductPages;
use crate::api::product::routes::ProductApi;
use crate::api::product::view::HandlebarsPageRenderer;

pub struct DependencyContainer {
    pub product_api: ProductApi,
    pub product_pages: Arc<ProductPages>,
}

impl DependencyContainer {
    pub fn new(product_repository: Arc<dyn ProductRepository>) -> anyhow::Result<Self> {
        let logger = Arc::new(TracingLogger);
        let renderer = Arc::new(HandlebarsPageRenderer::new()?);

        // Product use cases
        let create_use_case = Arc::new(CreateProductUseCaseImpl {
            repository: product_repository.clone(),
            logger: logger.clone(),
        });
        let get_all_use_case = Arc::new(GetAllProductsUseCaseImpl {
            repository: product_repository.clone(),
            logger: logger.clone(),
        });
        let get_by_id_use_case = Arc::new(GetProductByIdUseCaseImpl {
            repository: product_repository.clone(),
            logger: logger.clone(),
        });
        let update_use_case = Arc::new(UpdateProductUseCaseImpl {
            repository: product_repository.clone(),
            logger: logger.clone(),
        });
        let delete_use_case = Arc::new(DeleteProductUseCaseImpl {
            repository: product_repository,
            logger,
        });

        let product_api = ProductApi::new(
            create_use_case.clone(),
            get_all_use_case.clone(),
            get_by_id_use_case.clone(),
            update_use_case.clone(),
            delete_use_case.clone(),
        );

        let product_pages = Arc::new(ProductPages::new(
            create_use_case,
            get_all_use_case,
            get_by_id_use_case,
            update_use_case,
            delete_use_case,
            renderer,
        ));

        Ok(Self {
            product_api,
            product_pages,
        })
    }
}
