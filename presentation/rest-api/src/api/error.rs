use poem::error::{MethodNotAllowedError, NotFoundError};
use poem::http::StatusCode;
use poem::{Endpoint, IntoResponse, Middleware, Request, Response, Result};

pub const UNEXPECTED_ERROR_PREFIX: &str = "An unexpected error occurred: ";

/// Conversion of domain errors into errors the web framework can carry up to [`ErrorAdvice`].
pub trait IntoApiError {
    fn into_api_error(self) -> poem::Error;
}

/// Process-wide fallback for failures raised by any handler.
///
/// Every error becomes a `500` with a plain-text body made of
/// [`UNEXPECTED_ERROR_PREFIX`] and the error message. Routing misses (unknown
/// path or method) pass through untouched.
pub struct ErrorAdvice;

impl<E: Endpoint> Middleware<E> for ErrorAdvice {
    type Output = ErrorAdviceEndpoint<E>;

    fn transform(&self, ep: E) -> Self::Output {
        ErrorAdviceEndpoint { inner: ep }
    }
}

pub struct ErrorAdviceEndpoint<E> {
    inner: E,
}

impl<E: Endpoint> Endpoint for ErrorAdviceEndpoint<E> {
    type Output = Response;

    async fn call(&self, req: Request) -> Result<Self::Output> {
        match self.inner.call(req).await {
            Ok(resp) => Ok(resp.into_response()),
            Err(err) if is_routing_miss(&err) => Err(err),
            Err(err) => {
                tracing::error!(error = %err, "Unhandled request failure");
                Ok(unexpected_error_response(&err))
            }
        }
    }
}

fn is_routing_miss(err: &poem::Error) -> bool {
    err.is::<NotFoundError>() || err.is::<MethodNotAllowedError>()
}

pub fn unexpected_error_response(err: &poem::Error) -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        format!("{UNEXPECTED_ERROR_PREFIX}{err}"),
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use poem::test::TestClient;
    use poem::{EndpointExt, Route, get, handler};

    #[derive(Debug, thiserror::Error)]
    #[error("store exploded")]
    struct StoreFailure;

    #[handler]
    fn failing() -> Result<&'static str> {
        Err(poem::Error::new(StoreFailure, StatusCode::SERVICE_UNAVAILABLE))
    }

    #[handler]
    fn bad_request() -> Result<&'static str> {
        Err(poem::Error::from_string(
            "missing field `name`",
            StatusCode::BAD_REQUEST,
        ))
    }

    #[handler]
    fn healthy() -> &'static str {
        "fine"
    }

    fn app() -> impl Endpoint {
        Route::new()
            .at("/failing", get(failing))
            .at("/bad-request", get(bad_request))
            .at("/healthy", get(healthy))
            .with(ErrorAdvice)
    }

    #[tokio::test]
    async fn should_turn_any_failure_into_internal_server_error() {
        let cli = TestClient::new(app());

        let resp = cli.get("/failing").send().await;

        resp.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
        resp.assert_text("An unexpected error occurred: store exploded")
            .await;
    }

    #[tokio::test]
    async fn should_not_distinguish_client_errors() {
        let cli = TestClient::new(app());

        let resp = cli.get("/bad-request").send().await;

        resp.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
        resp.assert_text("An unexpected error occurred: missing field `name`")
            .await;
    }

    #[tokio::test]
    async fn should_answer_in_plain_text() {
        let cli = TestClient::new(app());

        let resp = cli.get("/failing").send().await;

        resp.assert_content_type("text/plain; charset=utf-8");
    }

    #[tokio::test]
    async fn should_leave_successful_responses_alone() {
        let cli = TestClient::new(app());

        let resp = cli.get("/healthy").send().await;

        resp.assert_status_is_ok();
        resp.assert_text("fine").await;
    }

    #[tokio::test]
    async fn should_keep_not_found_for_unknown_routes() {
        let cli = TestClient::new(app());

        let resp = cli.get("/missing").send().await;

        resp.assert_status(StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn should_keep_method_not_allowed_for_known_routes() {
        let cli = TestClient::new(app());

        let resp = cli.delete("/healthy").send().await;

        resp.assert_status(StatusCode::METHOD_NOT_ALLOWED);
    }
}
