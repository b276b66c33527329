//! Get Product Endpoint

use salvo::{oapi::extract::PathParam, prelude::*};

use crate::{
    extensions::*,
    gateway::{products::ProductResponse, status::into_status_error},
    rpc::proto::{self, product_service_server::ProductService},
};

/// Get Product
///
/// The id is forwarded as text; malformed ids are rejected by the RPC.
#[endpoint(
    tags("products"),
    summary = "Get Product",
    responses(
        (status_code = StatusCode::OK, description = "Product found"),
        (status_code = StatusCode::NOT_FOUND, description = "Product not found"),
        (status_code = StatusCode::BAD_REQUEST, description = "Malformed product id"),
    ),
)]
pub(crate) async fn handler(
    id: PathParam<String>,
    depot: &mut Depot,
) -> Result<Json<ProductResponse>, StatusError> {
    let handlers = depot.handlers_or_500()?;

    let product = handlers
        .products
        .get_product(tonic::Request::new(proto::GetProductRequest {
            id: id.into_inner(),
        }))
        .await
        .map_err(into_status_error)?
        .into_inner();

    Ok(Json(product.into()))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use catalog_app::domain::products::{
        MockProductsService, ProductsServiceError, records::ProductId,
    };

    use crate::test_helpers::{make_product, products_gateway};

    use super::*;

    #[tokio::test]
    async fn get_returns_200() -> TestResult {
        let mut products = MockProductsService::new();
        let id = ProductId::new();

        products
            .expect_get_product()
            .once()
            .withf(move |requested| *requested == id)
            .return_once(move |_| Ok(make_product(id)));

        products.expect_create_product().never();
        products.expect_list_products().never();

        let mut res = TestClient::get(format!("http://example.com/v1/products/{id}"))
            .send(&products_gateway(products))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::OK));

        let body: ProductResponse = res.take_json().await?;

        assert_eq!(body.id, id.to_string());
        assert_eq!(body.created_at, "1970-01-01T00:00:00Z");

        Ok(())
    }

    #[tokio::test]
    async fn get_missing_product_returns_404() {
        let mut products = MockProductsService::new();

        products
            .expect_get_product()
            .once()
            .return_once(|_| Err(ProductsServiceError::NotFound));

        products.expect_create_product().never();
        products.expect_list_products().never();

        let res = TestClient::get(format!("http://example.com/v1/products/{}", ProductId::new()))
            .send(&products_gateway(products))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));
    }

    #[tokio::test]
    async fn get_malformed_id_returns_400() {
        let mut products = MockProductsService::new();

        products.expect_get_product().never();
        products.expect_create_product().never();
        products.expect_list_products().never();

        let res = TestClient::get("http://example.com/v1/products/not-a-uuid")
            .send(&products_gateway(products))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));
    }
}
