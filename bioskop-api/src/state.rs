//! Application state

use std::sync::Arc;

use shared::error::AppError;

use crate::config::Config;
use crate::db::{self, BioskopRepository, PgBioskopRepository, RepoError};

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Shared application state, cloned into every request
#[derive(Clone)]
pub struct AppState {
    /// Persistence gateway for cinema rows
    pub repo: Arc<dyn BioskopRepository>,
    /// Include raw database error text in 500 bodies
    pub expose_error_details: bool,
}

impl AppState {
    /// Build state around an already-constructed repository
    pub fn new(repo: Arc<dyn BioskopRepository>, expose_error_details: bool) -> Self {
        Self {
            repo,
            expose_error_details,
        }
    }

    /// Connect to PostgreSQL, apply migrations and build the state.
    ///
    /// Any failure here is fatal to startup.
    pub async fn connect(config: &Config) -> Result<Self, BoxError> {
        let pool = db::connect(&config.database).await?;
        db::migrate(&pool).await?;

        Ok(Self::new(
            Arc::new(PgBioskopRepository::new(pool)),
            config.expose_error_details,
        ))
    }

    /// Map a repository failure to a 500, honoring the detail policy
    pub fn internal(&self, e: RepoError) -> AppError {
        tracing::error!(error = %e, "Bioskop query error");
        let err = AppError::database(e.to_string());
        if self.expose_error_details {
            err
        } else {
            err.redacted()
        }
    }
}
