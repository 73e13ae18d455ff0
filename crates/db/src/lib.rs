pub mod authors;
pub mod claims;
pub mod feedback;

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use verity_common::error::{VerityError, VerityResult};

/// Create a Postgres connection pool from a database URL.
pub async fn create_pool(database_url: &str) -> VerityResult<PgPool> {
    tracing::info!("connecting to database");
    PgPoolOptions::new()
        .max_connections(10)
        .connect(database_url)
        .await
        .map_err(|e| VerityError::Database(e.to_string()))
}
