//! Create Product Endpoint

use salvo::{
    http::header::LOCATION,
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use crate::{
    extensions::*,
    gateway::{products::ProductResponse, status::into_status_error},
    rpc::proto::{self, product_service_server::ProductService},
};

/// Create Product Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CreateProductRequest {
    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub description: String,

    #[serde(default)]
    pub price: f64,

    #[serde(default)]
    pub stock: i32,
}

impl From<CreateProductRequest> for proto::CreateProductRequest {
    fn from(request: CreateProductRequest) -> Self {
        Self {
            name: request.name,
            description: request.description,
            price: request.price,
            stock: request.stock,
        }
    }
}

/// Create Product
#[endpoint(
    tags("products"),
    summary = "Create Product",
    responses(
        (status_code = StatusCode::CREATED, description = "Product created"),
        (status_code = StatusCode::CONFLICT, description = "Product already exists"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::SERVICE_UNAVAILABLE, description = "Storage unavailable"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<CreateProductRequest>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<ProductResponse>, StatusError> {
    let handlers = depot.handlers_or_500()?;

    let product = handlers
        .products
        .create_product(tonic::Request::new(json.into_inner().into()))
        .await
        .map_err(into_status_error)?
        .into_inner();

    res.add_header(LOCATION, format!("/v1/products/{}", product.id), true)
        .or_500("failed to set location header")?
        .status_code(StatusCode::CREATED);

    Ok(Json(product.into()))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use serde_json::json;
    use testresult::TestResult;

    use catalog_app::domain::products::{
        MockProductsService, ProductsServiceError, data::CreateProduct, records::ProductId,
    };

    use crate::test_helpers::{make_product, products_gateway};

    use super::*;

    #[tokio::test]
    async fn create_returns_201_with_location() -> TestResult {
        let mut products = MockProductsService::new();
        let id = ProductId::new();

        products
            .expect_create_product()
            .once()
            .withf(|product| {
                *product
                    == CreateProduct {
                        name: "Chair".to_string(),
                        description: "Oak dining chair".to_string(),
                        price: 49.99,
                        stock: 10,
                    }
            })
            .return_once(move |_| Ok(make_product(id)));

        products.expect_get_product().never();
        products.expect_list_products().never();

        let mut res = TestClient::post("http://example.com/v1/products")
            .json(&json!({
                "name": "Chair",
                "description": "Oak dining chair",
                "price": 49.99,
                "stock": 10,
            }))
            .send(&products_gateway(products))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::CREATED));
        assert_eq!(
            res.headers()
                .get(LOCATION)
                .and_then(|value| value.to_str().ok()),
            Some(format!("/v1/products/{id}").as_str())
        );

        let body: ProductResponse = res.take_json().await?;

        assert_eq!(body.id, id.to_string());
        assert_eq!(body.name, "Chair");
        assert_eq!(body.created_at, body.updated_at);

        Ok(())
    }

    #[tokio::test]
    async fn create_conflict_returns_409() {
        let mut products = MockProductsService::new();

        products
            .expect_create_product()
            .once()
            .return_once(|_| Err(ProductsServiceError::AlreadyExists));

        products.expect_get_product().never();
        products.expect_list_products().never();

        let res = TestClient::post("http://example.com/v1/products")
            .json(&json!({ "name": "Chair" }))
            .send(&products_gateway(products))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::CONFLICT));
    }

    #[tokio::test]
    async fn create_with_omitted_fields_sends_zero_values() {
        let mut products = MockProductsService::new();

        products
            .expect_create_product()
            .once()
            .withf(|product| {
                *product
                    == CreateProduct {
                        name: String::new(),
                        description: String::new(),
                        price: 0.0,
                        stock: 0,
                    }
            })
            .return_once(|_| Ok(make_product(ProductId::new())));

        products.expect_get_product().never();
        products.expect_list_products().never();

        let res = TestClient::post("http://example.com/v1/products")
            .json(&json!({}))
            .send(&products_gateway(products))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::CREATED));
    }

    #[tokio::test]
    async fn create_with_malformed_body_returns_400() {
        let mut products = MockProductsService::new();

        products.expect_create_product().never();
        products.expect_get_product().never();
        products.expect_list_products().never();

        let res = TestClient::post("http://example.com/v1/products")
            .json(&json!({ "name": 42 }))
            .send(&products_gateway(products))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));
    }
}
