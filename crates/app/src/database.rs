//! Database connection management

use sqlx::{PgPool, postgres::PgPoolOptions};

/// Connect a pooled `PostgreSQL` handle shared by every repository.
///
/// # Errors
///
/// Returns an error if the connection cannot be established.
pub async fn connect(database_url: &str, max_connections: u32) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(max_connections)
        .connect(database_url)
        .await
}
