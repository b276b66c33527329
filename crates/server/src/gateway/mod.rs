//! JSON/HTTP gateway over the gRPC handlers.
//!
//! Each endpoint converts its JSON input into the protobuf request, calls the
//! same handler instance the gRPC server serves, and renders the reply back
//! as JSON.

use std::sync::Arc;

use salvo::{
    affix_state::inject,
    oapi::{OpenApi, swagger_ui::SwaggerUi},
    prelude::*,
    trailing_slash::remove_slash,
};

use crate::{healthcheck, observability::request_logging, state::State};

pub(crate) mod cors;
pub(crate) mod dipan_types;
pub(crate) mod products;
pub(crate) mod status;

/// Resource routes under `/v1`, one registration per service.
#[must_use]
pub(crate) fn api() -> Router {
    let v1 = Router::with_path("v1");
    let v1 = products::register(v1);

    dipan_types::register(v1)
}

/// The complete HTTP router: middleware, health, API and its OpenAPI document.
#[must_use]
pub(crate) fn router(state: Arc<State>) -> Router {
    let router = Router::new()
        .hoop(CatchPanic::new())
        .hoop(remove_slash())
        .hoop(request_logging)
        .hoop(inject(state))
        .push(Router::with_path("healthcheck").get(healthcheck::handler))
        .push(api());

    let doc = OpenApi::new("Catalog API", env!("CARGO_PKG_VERSION")).merge_router(&router);

    router
        .push(doc.into_router("/api-doc/openapi.json"))
        .push(SwaggerUi::new("/api-doc/openapi.json").into_router("swagger-ui"))
}

/// Wrap the router in a service whose CORS hoop runs even for unmatched paths.
#[must_use]
pub(crate) fn service(state: Arc<State>) -> Service {
    Service::new(router(state)).hoop(cors::handler)
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use crate::test_helpers::idle_gateway;

    #[tokio::test]
    async fn unknown_route_returns_404() {
        let res = TestClient::get("http://example.com/v1/widgets")
            .send(&idle_gateway())
            .await;

        assert_eq!(res.status_code, Some(salvo::http::StatusCode::NOT_FOUND));
    }

    #[tokio::test]
    async fn openapi_document_lists_gateway_paths() -> TestResult {
        let mut res = TestClient::get("http://example.com/api-doc/openapi.json")
            .send(&idle_gateway())
            .await;

        let doc: serde_json::Value = res.take_json().await?;
        let paths = doc.get("paths").and_then(serde_json::Value::as_object);

        for path in ["/v1/products", "/v1/products/{id}", "/v1/dipan-types/{id}"] {
            assert!(
                paths.is_some_and(|paths| paths.contains_key(path)),
                "missing {path} in OpenAPI document"
            );
        }

        Ok(())
    }
}
