use poem::http::StatusCode;

use business::domain::product::errors::ProductError;

use crate::api::error::IntoApiError;
use crate::api::product::view::PageError;

// Status codes are informational only: ErrorAdvice answers every error with a 500.
impl IntoApiError for ProductError {
    fn into_api_error(self) -> poem::Error {
        let status = match &self {
            ProductError::NotFound => StatusCode::NOT_FOUND,
            ProductError::PriceNotFinite => StatusCode::BAD_REQUEST,
            ProductError::Repository(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        poem::Error::new(self, status)
    }
}

impl IntoApiError for PageError {
    fn into_api_error(self) -> poem::Error {
        poem::Error::new(self, StatusCode::INTERNAL_SERVER_ERROR)
    }
}
