//! Dipan types service.

use std::sync::Arc;

use async_trait::async_trait;
use mockall::automock;

use crate::{
    domain::dipan_types::{
        data::{DipanTypeUpdate, NewDipanType},
        errors::DipanTypesServiceError,
        records::{DipanTypeId, DipanTypeRecord},
        repository::DipanTypesRepository,
    },
    pagination::{Page, Pagination},
};

/// Dipan type use-cases; every operation delegates to the repository.
#[derive(Clone)]
pub struct DipanTypesUseCase {
    repository: Arc<dyn DipanTypesRepository>,
}

impl DipanTypesUseCase {
    #[must_use]
    pub fn new(repository: Arc<dyn DipanTypesRepository>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl DipanTypesService for DipanTypesUseCase {
    async fn create_dipan_type(
        &self,
        dipan_type: NewDipanType,
    ) -> Result<DipanTypeRecord, DipanTypesServiceError> {
        self.repository.create_dipan_type(dipan_type).await
    }

    async fn get_dipan_type(
        &self,
        dipan_type: DipanTypeId,
    ) -> Result<DipanTypeRecord, DipanTypesServiceError> {
        self.repository.get_dipan_type(dipan_type).await
    }

    async fn list_dipan_types(
        &self,
        page: i32,
        limit: i32,
    ) -> Result<Page<DipanTypeRecord>, DipanTypesServiceError> {
        let pagination = Pagination::new(page, limit)?;

        self.repository.list_dipan_types(pagination).await
    }

    async fn update_dipan_type(
        &self,
        update: DipanTypeUpdate,
    ) -> Result<DipanTypeRecord, DipanTypesServiceError> {
        self.repository.update_dipan_type(update).await
    }

    async fn delete_dipan_type(
        &self,
        dipan_type: DipanTypeId,
    ) -> Result<(), DipanTypesServiceError> {
        self.repository.delete_dipan_type(dipan_type).await
    }
}

#[automock]
#[async_trait]
pub trait DipanTypesService: Send + Sync {
    /// Creates a dipan type; the id is assigned by storage.
    async fn create_dipan_type(
        &self,
        dipan_type: NewDipanType,
    ) -> Result<DipanTypeRecord, DipanTypesServiceError>;

    /// Retrieve a single dipan type.
    async fn get_dipan_type(
        &self,
        dipan_type: DipanTypeId,
    ) -> Result<DipanTypeRecord, DipanTypesServiceError>;

    /// Retrieves one page of dipan types, highest id first.
    async fn list_dipan_types(
        &self,
        page: i32,
        limit: i32,
    ) -> Result<Page<DipanTypeRecord>, DipanTypesServiceError>;

    /// Always fails with [`DipanTypesServiceError::NotImplemented`].
    async fn update_dipan_type(
        &self,
        update: DipanTypeUpdate,
    ) -> Result<DipanTypeRecord, DipanTypesServiceError>;

    /// Always fails with [`DipanTypesServiceError::NotImplemented`].
    async fn delete_dipan_type(
        &self,
        dipan_type: DipanTypeId,
    ) -> Result<(), DipanTypesServiceError>;
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use crate::{domain::dipan_types::repository::MockDipanTypesRepository, test::TestContext};

    use super::*;

    #[tokio::test]
    async fn create_dipan_type_passes_through() -> TestResult {
        let mut repo = MockDipanTypesRepository::new();

        repo.expect_create_dipan_type()
            .once()
            .withf(|new| new.nama_type == "Divan")
            .returning(|new| {
                Ok(DipanTypeRecord {
                    id: 7,
                    nama_type: new.nama_type,
                })
            });

        let created = DipanTypesUseCase::new(Arc::new(repo))
            .create_dipan_type(NewDipanType {
                nama_type: "Divan".to_string(),
            })
            .await?;

        assert_eq!(created.id, 7);

        Ok(())
    }

    #[tokio::test]
    async fn update_passes_through_not_implemented() {
        let mut repo = MockDipanTypesRepository::new();

        repo.expect_update_dipan_type()
            .once()
            .returning(|_| Err(DipanTypesServiceError::NotImplemented("update dipan type")));

        let result = DipanTypesUseCase::new(Arc::new(repo))
            .update_dipan_type(DipanTypeUpdate {
                id: 1,
                nama_type: "Renamed".to_string(),
            })
            .await;

        assert!(
            matches!(result, Err(DipanTypesServiceError::NotImplemented(_))),
            "expected NotImplemented, got {result:?}"
        );
    }

    #[tokio::test]
    async fn list_rejects_negative_limit_without_querying() {
        let mut repo = MockDipanTypesRepository::new();

        repo.expect_list_dipan_types().never();

        let result = DipanTypesUseCase::new(Arc::new(repo))
            .list_dipan_types(1, -2)
            .await;

        assert!(
            matches!(result, Err(DipanTypesServiceError::InvalidPagination(_))),
            "expected InvalidPagination, got {result:?}"
        );
    }

    #[tokio::test]
    async fn first_page_of_three_returns_two_newest() -> TestResult {
        let ctx = TestContext::new().await;

        for name in ["Divan", "Ottoman", "Platform"] {
            ctx.dipan_types
                .create_dipan_type(NewDipanType {
                    nama_type: name.to_string(),
                })
                .await?;
        }

        let page = ctx.dipan_types.list_dipan_types(1, 2).await?;
        let ids: Vec<DipanTypeId> = page.items.iter().map(|d| d.id).collect();

        assert_eq!(ids, vec![3, 2]);
        assert_eq!(page.total, 3);

        Ok(())
    }

    #[tokio::test]
    async fn delete_always_fails() {
        let ctx = TestContext::new().await;

        let result = ctx.dipan_types.delete_dipan_type(1).await;

        assert!(
            matches!(result, Err(DipanTypesServiceError::NotImplemented(_))),
            "expected NotImplemented, got {result:?}"
        );
    }
}
