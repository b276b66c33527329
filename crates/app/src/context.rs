//! App Context

use std::sync::Arc;

use sqlx::PgPool;
use thiserror::Error;
use tracing::info;

use crate::{
    database,
    domain::{
        dipan_types::{DipanTypesService, DipanTypesUseCase, PgDipanTypesRepository},
        products::{PgProductsRepository, ProductsService, ProductsUseCase},
    },
};

#[derive(Debug, Error)]
pub enum AppInitError {
    #[error("failed to connect to database")]
    Database(#[source] sqlx::Error),
}

/// The use-cases of every resource, wired to their repositories.
#[derive(Clone)]
pub struct AppContext {
    pub products: Arc<dyn ProductsService>,
    pub dipan_types: Arc<dyn DipanTypesService>,
}

impl AppContext {
    /// Build application context from a database URL.
    ///
    /// # Errors
    ///
    /// Returns an error when establishing a database connection fails.
    pub async fn from_database_url(
        url: &str,
        max_connections: u32,
    ) -> Result<Self, AppInitError> {
        let pool = database::connect(url, max_connections)
            .await
            .map_err(AppInitError::Database)?;

        info!(max_connections, "database connection established");

        Ok(Self::from_pool(pool))
    }

    /// Wire repositories and use-cases over a shared pool.
    #[must_use]
    pub fn from_pool(pool: PgPool) -> Self {
        let products = PgProductsRepository::new(pool.clone());
        let dipan_types = PgDipanTypesRepository::new(pool);

        Self {
            products: Arc::new(ProductsUseCase::new(Arc::new(products))),
            dipan_types: Arc::new(DipanTypesUseCase::new(Arc::new(dipan_types))),
        }
    }
}
