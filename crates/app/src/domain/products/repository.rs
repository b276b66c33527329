//! Products Repository

use async_trait::async_trait;
use jiff_sqlx::Timestamp as SqlxTimestamp;
use mockall::automock;
use sqlx::{FromRow, PgPool, Postgres, Row, postgres::PgRow, query_as, query_scalar};
use tracing::debug;

use crate::{
    domain::products::{
        data::NewProduct,
        errors::ProductsServiceError,
        records::{ProductId, ProductRecord},
    },
    pagination::{Page, Pagination},
};

const CREATE_PRODUCT_SQL: &str = include_str!("sql/create_product.sql");
const GET_PRODUCT_SQL: &str = include_str!("sql/get_product.sql");
const LIST_PRODUCTS_SQL: &str = include_str!("sql/list_products.sql");
const COUNT_PRODUCTS_SQL: &str = include_str!("sql/count_products.sql");

/// Product storage operations.
#[automock]
#[async_trait]
pub trait ProductsRepository: Send + Sync {
    /// Persists a fully stamped product and returns the stored row.
    async fn create_product(
        &self,
        product: NewProduct,
    ) -> Result<ProductRecord, ProductsServiceError>;

    /// Retrieves a single product, or [`ProductsServiceError::NotFound`].
    async fn get_product(&self, product: ProductId) -> Result<ProductRecord, ProductsServiceError>;

    /// Retrieves one page of products, newest first, with the table's row count.
    async fn list_products(
        &self,
        pagination: Pagination,
    ) -> Result<Page<ProductRecord>, ProductsServiceError>;
}

/// PostgreSQL-backed products repository.
#[derive(Debug, Clone)]
pub struct PgProductsRepository {
    pool: PgPool,
}

impl PgProductsRepository {
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProductsRepository for PgProductsRepository {
    async fn create_product(
        &self,
        product: NewProduct,
    ) -> Result<ProductRecord, ProductsServiceError> {
        query_as::<Postgres, ProductRecord>(CREATE_PRODUCT_SQL)
            .bind(product.id.into_uuid())
            .bind(product.name)
            .bind(product.description)
            .bind(product.price)
            .bind(product.stock)
            .bind(SqlxTimestamp::from(product.created_at))
            .bind(SqlxTimestamp::from(product.updated_at))
            .fetch_one(&self.pool)
            .await
            .map_err(ProductsServiceError::from)
    }

    async fn get_product(&self, product: ProductId) -> Result<ProductRecord, ProductsServiceError> {
        query_as::<Postgres, ProductRecord>(GET_PRODUCT_SQL)
            .bind(product.into_uuid())
            .fetch_one(&self.pool)
            .await
            .map_err(ProductsServiceError::from)
    }

    async fn list_products(
        &self,
        pagination: Pagination,
    ) -> Result<Page<ProductRecord>, ProductsServiceError> {
        let items = query_as::<Postgres, ProductRecord>(LIST_PRODUCTS_SQL)
            .bind(i64::from(pagination.limit()))
            .bind(pagination.offset())
            .fetch_all(&self.pool)
            .await?;

        let total: i64 = query_scalar(COUNT_PRODUCTS_SQL)
            .fetch_one(&self.pool)
            .await?;

        debug!(
            page = pagination.page(),
            limit = pagination.limit(),
            returned = items.len(),
            total,
            "listed products"
        );

        Ok(Page { items, total })
    }
}

impl<'r> FromRow<'r, PgRow> for ProductRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            id: ProductId::from_uuid(row.try_get("id")?),
            name: row.try_get("name")?,
            description: row.try_get("description")?,
            price: row.try_get("price")?,
            stock: row.try_get("stock")?,
            created_at: row.try_get::<SqlxTimestamp, _>("created_at")?.to_jiff(),
            updated_at: row.try_get::<SqlxTimestamp, _>("updated_at")?.to_jiff(),
        })
    }
}
