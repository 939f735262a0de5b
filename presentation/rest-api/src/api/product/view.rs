use handlebars::Handlebars;
use serde::Serialize;
use serde_json::{Map, Value};

pub const PRODUCTS_PAGE: &str = "products";
pub const ADD_PRODUCT_PAGE: &str = "add-product";
pub const EDIT_PRODUCT_PAGE: &str = "edit-product";

#[derive(Debug, thiserror::Error)]
pub enum PageError {
    #[error("page.template_invalid: {0}")]
    TemplateInvalid(String),
    #[error("page.model_invalid: {0}")]
    ModelInvalid(String),
    #[error("page.render_failed: {0}")]
    RenderFailed(String),
}

/// A page identifier plus the named attributes it is rendered with.
#[derive(Debug, Clone, PartialEq)]
pub struct Page {
    pub name: &'static str,
    pub model: Map<String, Value>,
}

impl Page {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            model: Map::new(),
        }
    }

    pub fn with_attribute(
        mut self,
        key: &str,
        value: impl Serialize,
    ) -> Result<Self, PageError> {
        let value =
            serde_json::to_value(value).map_err(|e| PageError::ModelInvalid(e.to_string()))?;
        self.model.insert(key.to_string(), value);
        Ok(self)
    }

    pub fn attribute(&self, key: &str) -> Option<&Value> {
        self.model.get(key)
    }
}

pub trait PageRenderer: Send + Sync {
    fn render(&self, page: &Page) -> Result<String, PageError>;
}

/// Renders pages from the Handlebars templates bundled with the binary.
///
/// Values are HTML-escaped by Handlebars.
pub struct HandlebarsPageRenderer {
    handlebars: Handlebars<'static>,
}

impl HandlebarsPageRenderer {
    pub fn new() -> Result<Self, PageError> {
        let mut handlebars = Handlebars::new();
        let templates = [
            (PRODUCTS_PAGE, include_str!("../../../templates/products.hbs")),
            (
                ADD_PRODUCT_PAGE,
                include_str!("../../../templates/add-product.hbs"),
            ),
            (
                EDIT_PRODUCT_PAGE,
                include_str!("../../../templates/edit-product.hbs"),
            ),
        ];

        for (name, source) in templates {
            handlebars
                .register_template_string(name, source)
                .map_err(|e| PageError::TemplateInvalid(format!("{name}: {e}")))?;
        }

        Ok(Self { handlebars })
    }
}

impl PageRenderer for HandlebarsPageRenderer {
    fn render(&self, page: &Page) -> Result<String, PageError> {
        self.handlebars
            .render(page.name, &page.model)
            .map_err(|e| PageError::RenderFailed(e.to_string()))
    }
}
