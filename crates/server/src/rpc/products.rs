//! Product gRPC Handler

use std::sync::Arc;

use tonic::{Request, Response, Status};
use tracing::instrument;

use catalog_app::domain::products::{
    ProductsService, ProductsServiceError,
    data::CreateProduct,
    records::{ProductId, ProductRecord},
};

use crate::rpc::{
    proto::{self, product_service_server::ProductService},
    status::into_status,
};

impl From<ProductRecord> for proto::Product {
    fn from(product: ProductRecord) -> Self {
        Self {
            id: product.id.to_string(),
            name: product.name,
            description: product.description,
            price: product.price,
            stock: product.stock,
            created_at: product.created_at.to_string(),
            updated_at: product.updated_at.to_string(),
        }
    }
}

impl From<proto::CreateProductRequest> for CreateProduct {
    fn from(request: proto::CreateProductRequest) -> Self {
        Self {
            name: request.name,
            description: request.description,
            price: request.price,
            stock: request.stock,
        }
    }
}

/// Serves `catalog.v1.ProductService` over the products use-case.
#[derive(Clone)]
pub(crate) struct ProductHandler {
    products: Arc<dyn ProductsService>,
}

impl ProductHandler {
    #[must_use]
    pub(crate) fn new(products: Arc<dyn ProductsService>) -> Self {
        Self { products }
    }
}

#[tonic::async_trait]
impl ProductService for ProductHandler {
    #[instrument(name = "rpc.create_product", skip_all)]
    async fn create_product(
        &self,
        request: Request<proto::CreateProductRequest>,
    ) -> Result<Response<proto::Product>, Status> {
        let product = self
            .products
            .create_product(request.into_inner().into())
            .await
            .map_err(into_status)?;

        Ok(Response::new(product.into()))
    }

    #[instrument(name = "rpc.get_product", skip_all)]
    async fn get_product(
        &self,
        request: Request<proto::GetProductRequest>,
    ) -> Result<Response<proto::Product>, Status> {
        let id: ProductId = request
            .into_inner()
            .id
            .parse()
            .map_err(|source| into_status(ProductsServiceError::InvalidId(source)))?;

        let product = self
            .products
            .get_product(id)
            .await
            .map_err(into_status)?;

        Ok(Response::new(product.into()))
    }

    #[instrument(name = "rpc.list_products", skip_all)]
    async fn list_products(
        &self,
        request: Request<proto::ListProductsRequest>,
    ) -> Result<Response<proto::ListProductsResponse>, Status> {
        let proto::ListProductsRequest { page, limit } = request.into_inner();

        let page = self
            .products
            .list_products(page, limit)
            .await
            .map_err(into_status)?;

        Ok(Response::new(proto::ListProductsResponse {
            total: page.total,
            products: page.items.into_iter().map(Into::into).collect(),
        }))
    }
}
