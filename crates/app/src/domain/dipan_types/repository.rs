//! Dipan Types Repository

use async_trait::async_trait;
use mockall::automock;
use sqlx::{FromRow, PgPool, Postgres, Row, postgres::PgRow, query_as, query_scalar};

use crate::{
    domain::dipan_types::{
        data::{DipanTypeUpdate, NewDipanType},
        errors::DipanTypesServiceError,
        records::{DipanTypeId, DipanTypeRecord},
    },
    pagination::{Page, Pagination},
};

const CREATE_DIPAN_TYPE_SQL: &str = include_str!("sql/create_dipan_type.sql");
const GET_DIPAN_TYPE_SQL: &str = include_str!("sql/get_dipan_type.sql");
const LIST_DIPAN_TYPES_SQL: &str = include_str!("sql/list_dipan_types.sql");
const COUNT_DIPAN_TYPES_SQL: &str = include_str!("sql/count_dipan_types.sql");

/// Dipan type storage operations.
#[automock]
#[async_trait]
pub trait DipanTypesRepository: Send + Sync {
    /// Inserts a dipan type and returns it with its assigned id.
    async fn create_dipan_type(
        &self,
        dipan_type: NewDipanType,
    ) -> Result<DipanTypeRecord, DipanTypesServiceError>;

    async fn get_dipan_type(
        &self,
        dipan_type: DipanTypeId,
    ) -> Result<DipanTypeRecord, DipanTypesServiceError>;

    /// Retrieves one page of dipan types, highest id first, with the table's row count.
    async fn list_dipan_types(
        &self,
        pagination: Pagination,
    ) -> Result<Page<DipanTypeRecord>, DipanTypesServiceError>;

    async fn update_dipan_type(
        &self,
        update: DipanTypeUpdate,
    ) -> Result<DipanTypeRecord, DipanTypesServiceError>;

    async fn delete_dipan_type(&self, dipan_type: DipanTypeId)
    -> Result<(), DipanTypesServiceError>;
}

/// PostgreSQL-backed dipan types repository.
#[derive(Debug, Clone)]
pub struct PgDipanTypesRepository {
    pool: PgPool,
}

impl PgDipanTypesRepository {
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl DipanTypesRepository for PgDipanTypesRepository {
    async fn create_dipan_type(
        &self,
        dipan_type: NewDipanType,
    ) -> Result<DipanTypeRecord, DipanTypesServiceError> {
        query_as::<Postgres, DipanTypeRecord>(CREATE_DIPAN_TYPE_SQL)
            .bind(dipan_type.nama_type)
            .fetch_one(&self.pool)
            .await
            .map_err(DipanTypesServiceError::from)
    }

    async fn get_dipan_type(
        &self,
        dipan_type: DipanTypeId,
    ) -> Result<DipanTypeRecord, DipanTypesServiceError> {
        query_as::<Postgres, DipanTypeRecord>(GET_DIPAN_TYPE_SQL)
            .bind(dipan_type)
            .fetch_one(&self.pool)
            .await
            .map_err(DipanTypesServiceError::from)
    }

    async fn list_dipan_types(
        &self,
        pagination: Pagination,
    ) -> Result<Page<DipanTypeRecord>, DipanTypesServiceError> {
        let items = query_as::<Postgres, DipanTypeRecord>(LIST_DIPAN_TYPES_SQL)
            .bind(i64::from(pagination.limit()))
            .bind(pagination.offset())
            .fetch_all(&self.pool)
            .await?;

        let total: i64 = query_scalar(COUNT_DIPAN_TYPES_SQL)
            .fetch_one(&self.pool)
            .await?;

        Ok(Page { items, total })
    }

    async fn update_dipan_type(
        &self,
        _update: DipanTypeUpdate,
    ) -> Result<DipanTypeRecord, DipanTypesServiceError> {
        Err(DipanTypesServiceError::NotImplemented("update dipan type"))
    }

    async fn delete_dipan_type(
        &self,
        _dipan_type: DipanTypeId,
    ) -> Result<(), DipanTypesServiceError> {
        Err(DipanTypesServiceError::NotImplemented("delete dipan type"))
    }
}

impl<'r> FromRow<'r, PgRow> for DipanTypeRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            id: row.try_get("id")?,
            nama_type: row.try_get("nama_type")?,
        })
    }
}
