//! Data models
//!
//! DB row types use `#[cfg_attr(feature = "db", derive(sqlx::FromRow))]`.
//! IDs are `i64` (PostgreSQL BIGSERIAL).

pub mod bioskop;

// Re-exports
pub use bioskop::*;
