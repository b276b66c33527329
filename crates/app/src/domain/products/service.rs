//! Products service.

use std::sync::Arc;

use async_trait::async_trait;
use jiff::Timestamp;
use mockall::automock;
use tracing::debug;

use crate::{
    domain::products::{
        data::{CreateProduct, NewProduct},
        errors::ProductsServiceError,
        records::{ProductId, ProductRecord},
        repository::ProductsRepository,
    },
    pagination::{Page, Pagination},
};

/// Product use-cases backed by a [`ProductsRepository`].
#[derive(Clone)]
pub struct ProductsUseCase {
    repository: Arc<dyn ProductsRepository>,
}

impl ProductsUseCase {
    #[must_use]
    pub fn new(repository: Arc<dyn ProductsRepository>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl ProductsService for ProductsUseCase {
    async fn create_product(
        &self,
        product: CreateProduct,
    ) -> Result<ProductRecord, ProductsServiceError> {
        let product = NewProduct::stamp(product, Timestamp::now());

        debug!(product = %product.id, "creating product");

        self.repository.create_product(product).await
    }

    async fn get_product(&self, product: ProductId) -> Result<ProductRecord, ProductsServiceError> {
        self.repository.get_product(product).await
    }

    async fn list_products(
        &self,
        page: i32,
        limit: i32,
    ) -> Result<Page<ProductRecord>, ProductsServiceError> {
        let pagination = Pagination::new(page, limit)?;

        self.repository.list_products(pagination).await
    }
}

#[automock]
#[async_trait]
pub trait ProductsService: Send + Sync {
    /// Creates a product with a generated id and fresh timestamps.
    async fn create_product(
        &self,
        product: CreateProduct,
    ) -> Result<ProductRecord, ProductsServiceError>;

    /// Retrieve a single product.
    async fn get_product(&self, product: ProductId) -> Result<ProductRecord, ProductsServiceError>;

    /// Retrieves one page of products, newest first.
    async fn list_products(
        &self,
        page: i32,
        limit: i32,
    ) -> Result<Page<ProductRecord>, ProductsServiceError>;
}
