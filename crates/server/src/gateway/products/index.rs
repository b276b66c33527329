//! Product Index Endpoint

use salvo::{
    oapi::{ToSchema, extract::QueryParam},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use crate::{
    extensions::*,
    gateway::{products::ProductResponse, status::into_status_error},
    rpc::proto::{self, product_service_server::ProductService},
};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ProductsResponse {
    /// One page of products, newest first
    pub products: Vec<ProductResponse>,

    /// Number of products across all pages
    pub total: i64,
}

impl From<proto::ListProductsResponse> for ProductsResponse {
    fn from(response: proto::ListProductsResponse) -> Self {
        Self {
            products: response.products.into_iter().map(Into::into).collect(),
            total: response.total,
        }
    }
}

/// List Products
///
/// Missing `page` and `limit` read as unset.
#[endpoint(tags("products"), summary = "List Products")]
pub(crate) async fn handler(
    page: QueryParam<i32, false>,
    limit: QueryParam<i32, false>,
    depot: &mut Depot,
) -> Result<Json<ProductsResponse>, StatusError> {
    let handlers = depot.handlers_or_500()?;

    let response = handlers
        .products
        .list_products(tonic::Request::new(proto::ListProductsRequest {
            page: page.into_inner().unwrap_or_default(),
            limit: limit.into_inner().unwrap_or_default(),
        }))
        .await
        .map_err(into_status_error)?
        .into_inner();

    Ok(Json(response.into()))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use catalog_app::{
        domain::products::{MockProductsService, ProductsServiceError, records::ProductId},
        pagination::{Page, PaginationError},
    };

    use crate::test_helpers::{make_product, products_gateway};

    use super::*;

    #[tokio::test]
    async fn index_forwards_query_and_returns_total() -> TestResult {
        let mut products = MockProductsService::new();

        products
            .expect_list_products()
            .once()
            .withf(|page, limit| *page == 2 && *limit == 3)
            .return_once(|_, _| {
                Ok(Page {
                    items: vec![make_product(ProductId::new()), make_product(ProductId::new())],
                    total: 5,
                })
            });

        products.expect_create_product().never();
        products.expect_get_product().never();

        let mut res = TestClient::get("http://example.com/v1/products?page=2&limit=3")
            .send(&products_gateway(products))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::OK));

        let body: ProductsResponse = res.take_json().await?;

        assert_eq!(body.products.len(), 2);
        assert_eq!(body.total, 5);

        Ok(())
    }

    #[tokio::test]
    async fn index_without_query_sends_unset_paging() {
        let mut products = MockProductsService::new();

        products
            .expect_list_products()
            .once()
            .withf(|page, limit| *page == 0 && *limit == 0)
            .return_once(|_, _| {
                Ok(Page {
                    items: Vec::new(),
                    total: 0,
                })
            });

        products.expect_create_product().never();
        products.expect_get_product().never();

        let res = TestClient::get("http://example.com/v1/products")
            .send(&products_gateway(products))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::OK));
    }

    #[tokio::test]
    async fn index_negative_page_returns_400() {
        let mut products = MockProductsService::new();

        products
            .expect_list_products()
            .once()
            .return_once(|page, _| {
                Err(ProductsServiceError::InvalidPagination(
                    PaginationError::NegativePage(page),
                ))
            });

        products.expect_create_product().never();
        products.expect_get_product().never();

        let res = TestClient::get("http://example.com/v1/products?page=-1")
            .send(&products_gateway(products))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));
    }
}
