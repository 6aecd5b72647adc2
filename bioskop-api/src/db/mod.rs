//! Database access layer
//!
//! Handlers only see [`BioskopRepository`]. The PostgreSQL implementation
//! issues exactly one parameterized statement per call; the in-memory one
//! backs tests and database-less runs.

pub mod bioskop;
pub mod memory;

pub use bioskop::PgBioskopRepository;
pub use memory::MemoryBioskopRepository;

use async_trait::async_trait;
use shared::models::{Bioskop, BioskopInput};
use sqlx::PgPool;
use sqlx::postgres::{PgConnectOptions, PgPoolOptions};
use thiserror::Error;

use crate::config::DatabaseConfig;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Repository error types
#[derive(Debug, Error)]
pub enum RepoError {
    /// Connection, query or row decoding failure
    #[error("{0}")]
    Database(String),
}

impl From<sqlx::Error> for RepoError {
    fn from(err: sqlx::Error) -> Self {
        RepoError::Database(err.to_string())
    }
}

/// Result type for repository operations
pub type RepoResult<T> = Result<T, RepoError>;

/// Persistence gateway for cinema rows
///
/// Inputs are expected to be normalized already (see
/// [`BioskopInput::normalized`]).
#[async_trait]
pub trait BioskopRepository: Send + Sync {
    /// All rows ordered by id
    async fn find_all(&self) -> RepoResult<Vec<Bioskop>>;

    /// `None` when no row has this id
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<Bioskop>>;

    /// Insert a row; storage assigns the id
    async fn create(&self, data: &BioskopInput) -> RepoResult<Bioskop>;

    /// Overwrite all fields; `false` when no row has this id
    async fn update(&self, id: i64, data: &BioskopInput) -> RepoResult<bool>;

    /// `false` when no row has this id
    async fn delete(&self, id: i64) -> RepoResult<bool>;
}

/// Open the connection pool and check the server answers.
pub async fn connect(config: &DatabaseConfig) -> Result<PgPool, BoxError> {
    let options = PgConnectOptions::new()
        .host(&config.host)
        .port(config.port)
        .username(&config.user)
        .password(&config.password)
        .database(&config.name)
        .ssl_mode(config.ssl_mode);

    let pool = PgPoolOptions::new()
        .max_connections(config.max_connections)
        .connect_with(options)
        .await?;

    sqlx::query("SELECT 1").execute(&pool).await?;

    tracing::info!(
        host = %config.host,
        port = config.port,
        database = %config.name,
        "Successfully connected to database"
    );
    Ok(pool)
}

/// Apply the embedded migrations. Already-applied versions are skipped.
pub async fn migrate(pool: &PgPool) -> Result<usize, BoxError> {
    let migrator = sqlx::migrate!("./migrations");

    let applied_before = count_applied(pool).await?;
    migrator.run(pool).await?;
    let applied_after = count_applied(pool).await?;

    let applied = usize::try_from(applied_after - applied_before)?;
    tracing::info!("Migration success, applied {applied} migrations");
    Ok(applied)
}

/// SQLSTATE for "relation does not exist"
const UNDEFINED_TABLE: &str = "42P01";

/// Successfully applied migrations; 0 before the bookkeeping table exists.
async fn count_applied(pool: &PgPool) -> Result<i64, sqlx::Error> {
    let result =
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM _sqlx_migrations WHERE success")
            .fetch_one(pool)
            .await;
    missing_table_as_zero(result)
}

fn missing_table_as_zero(result: Result<i64, sqlx::Error>) -> Result<i64, sqlx::Error> {
    match result {
        Err(sqlx::Error::Database(e)) if e.code().as_deref() == Some(UNDEFINED_TABLE) => Ok(0),
        other => other,
    }
}
