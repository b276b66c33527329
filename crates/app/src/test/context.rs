//! Test context for service-level integration tests.

use std::sync::Arc;

use crate::domain::{
    dipan_types::{DipanTypesUseCase, PgDipanTypesRepository},
    products::{PgProductsRepository, ProductsUseCase},
};

use super::db::TestDb;

/// Use-cases wired to real repositories over a fresh, migrated database.
pub(crate) struct TestContext {
    #[expect(dead_code, reason = "keeps the per-test database alive until the context drops")]
    pub db: TestDb,
    pub products: ProductsUseCase,
    pub dipan_types: DipanTypesUseCase,
}

impl TestContext {
    pub async fn new() -> Self {
        let db = TestDb::new().await;
        let pool = db.pool().clone();

        Self {
            products: ProductsUseCase::new(Arc::new(PgProductsRepository::new(pool.clone()))),
            dipan_types: DipanTypesUseCase::new(Arc::new(PgDipanTypesRepository::new(pool))),
            db,
        }
    }
}
